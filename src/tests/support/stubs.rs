use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::application::domain::entities::{BlogPost, BlogTopic};
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPostsError, GetBlogPostsUseCase, GetBlogTopicsError, GetBlogTopicsUseCase,
};
use crate::modules::contact::application::domain::entities::ContactInfo;
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactError, CreateContactUseCase, DeleteContactError, DeleteContactUseCase,
    GetContactsError, GetContactsUseCase, PatchContactError, PatchContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactListFilter, ContactOrder, CreateContactData, PatchContactData,
};
use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::incoming::use_cases::{
    CreateInterestError, CreateInterestUseCase, DeleteInterestError, DeleteInterestUseCase,
    GetInterestBySlugError, GetInterestBySlugUseCase, GetInterestsError, GetInterestsUseCase,
    PatchInterestError, PatchInterestUseCase,
};
use crate::modules::interest::application::ports::outgoing::{
    CreateInterestData, InterestListFilter, InterestOrder, PatchInterestData,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectError, CreateProjectUseCase, DeleteProjectError, DeleteProjectUseCase,
    GetProjectBySlugError, GetProjectBySlugUseCase, GetProjectsError, GetProjectsUseCase,
    PatchProjectError, PatchProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectListFilter, ProjectOrder,
};
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase, DeleteSkillError, DeleteSkillUseCase, GetSkillsError,
    GetSkillsUseCase, PatchSkillError, PatchSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    CreateSkillData, PatchSkillData, SkillOrder,
};
use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::incoming::use_cases::{
    CreateTimelineEntryError, CreateTimelineEntryUseCase, DeleteTimelineEntryError,
    DeleteTimelineEntryUseCase, GetTimelineError, GetTimelineUseCase, PatchTimelineEntryError,
    PatchTimelineEntryUseCase,
};
use crate::modules::timeline::application::ports::outgoing::{
    CreateTimelineEntryData, PatchTimelineEntryData, TimelineOrder,
};

const NOT_USED: &str = "not used in this test";

// ============================================================================
// Read stubs
//
// Defaults answer like an empty database: empty lists, unknown slugs.
// ============================================================================

#[derive(Clone)]
pub struct StubGetProjectsUseCase {
    result: Result<Vec<Project>, GetProjectsError>,
}

impl Default for StubGetProjectsUseCase {
    fn default() -> Self {
        Self::returning(vec![])
    }
}

impl StubGetProjectsUseCase {
    pub fn returning(projects: Vec<Project>) -> Self {
        Self {
            result: Ok(projects),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetProjectsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectListFilter,
        _order: ProjectOrder,
    ) -> Result<Vec<Project>, GetProjectsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProjectBySlugUseCase {
    result: Result<Project, GetProjectBySlugError>,
}

impl StubGetProjectBySlugUseCase {
    pub fn found(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetProjectBySlugError::NotFound),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetProjectBySlugError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetProjectBySlugUseCase for StubGetProjectBySlugUseCase {
    async fn execute(&self, _slug: &str) -> Result<Project, GetProjectBySlugError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetInterestsUseCase {
    result: Result<Vec<Interest>, GetInterestsError>,
}

impl Default for StubGetInterestsUseCase {
    fn default() -> Self {
        Self::returning(vec![])
    }
}

impl StubGetInterestsUseCase {
    pub fn returning(interests: Vec<Interest>) -> Self {
        Self {
            result: Ok(interests),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetInterestsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetInterestsUseCase for StubGetInterestsUseCase {
    async fn execute(
        &self,
        _filter: InterestListFilter,
        _order: InterestOrder,
    ) -> Result<Vec<Interest>, GetInterestsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetInterestBySlugUseCase {
    result: Result<Interest, GetInterestBySlugError>,
}

impl StubGetInterestBySlugUseCase {
    pub fn found(interest: Interest) -> Self {
        Self {
            result: Ok(interest),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetInterestBySlugError::NotFound),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetInterestBySlugError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetInterestBySlugUseCase for StubGetInterestBySlugUseCase {
    async fn execute(&self, _slug: &str) -> Result<Interest, GetInterestBySlugError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSkillsUseCase {
    result: Result<Vec<Skill>, GetSkillsError>,
}

impl Default for StubGetSkillsUseCase {
    fn default() -> Self {
        Self::returning(vec![])
    }
}

impl StubGetSkillsUseCase {
    pub fn returning(skills: Vec<Skill>) -> Self {
        Self { result: Ok(skills) }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetSkillsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self, _order: SkillOrder) -> Result<Vec<Skill>, GetSkillsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetTimelineUseCase {
    result: Result<Vec<TimelineEntry>, GetTimelineError>,
}

impl Default for StubGetTimelineUseCase {
    fn default() -> Self {
        Self::returning(vec![])
    }
}

impl StubGetTimelineUseCase {
    pub fn returning(entries: Vec<TimelineEntry>) -> Self {
        Self {
            result: Ok(entries),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetTimelineError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetTimelineUseCase for StubGetTimelineUseCase {
    async fn execute(
        &self,
        _order: TimelineOrder,
    ) -> Result<Vec<TimelineEntry>, GetTimelineError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetContactsUseCase {
    result: Result<Vec<ContactInfo>, GetContactsError>,
}

impl Default for StubGetContactsUseCase {
    fn default() -> Self {
        Self::returning(vec![])
    }
}

impl StubGetContactsUseCase {
    pub fn returning(contacts: Vec<ContactInfo>) -> Self {
        Self {
            result: Ok(contacts),
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetContactsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetContactsUseCase for StubGetContactsUseCase {
    async fn execute(
        &self,
        _filter: ContactListFilter,
        _order: ContactOrder,
    ) -> Result<Vec<ContactInfo>, GetContactsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetBlogPostsUseCase {
    result: Result<Vec<BlogPost>, GetBlogPostsError>,
}

impl Default for StubGetBlogPostsUseCase {
    fn default() -> Self {
        Self::returning(vec![])
    }
}

impl StubGetBlogPostsUseCase {
    pub fn returning(posts: Vec<BlogPost>) -> Self {
        Self { result: Ok(posts) }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetBlogPostsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetBlogPostsUseCase for StubGetBlogPostsUseCase {
    async fn execute(&self) -> Result<Vec<BlogPost>, GetBlogPostsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetBlogTopicsUseCase {
    result: Result<Vec<BlogTopic>, GetBlogTopicsError>,
}

impl Default for StubGetBlogTopicsUseCase {
    fn default() -> Self {
        Self::returning(vec![])
    }
}

impl StubGetBlogTopicsUseCase {
    pub fn returning(topics: Vec<BlogTopic>) -> Self {
        Self { result: Ok(topics) }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            result: Err(GetBlogTopicsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetBlogTopicsUseCase for StubGetBlogTopicsUseCase {
    async fn execute(&self) -> Result<Vec<BlogTopic>, GetBlogTopicsError> {
        self.result.clone()
    }
}

// ============================================================================
// Write stubs
//
// Defaults: create fails, patch finds nothing, delete removes nothing.
// ============================================================================

#[derive(Default, Clone)]
pub struct DefaultStubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for DefaultStubCreateProjectUseCase {
    async fn execute(&self, _data: CreateProjectData) -> Result<Project, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubPatchProjectUseCase;

#[async_trait]
impl PatchProjectUseCase for DefaultStubPatchProjectUseCase {
    async fn execute(
        &self,
        _project_id: Uuid,
        _data: PatchProjectData,
    ) -> Result<Project, PatchProjectError> {
        Err(PatchProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for DefaultStubDeleteProjectUseCase {
    async fn execute(&self, _project_id: Uuid) -> Result<bool, DeleteProjectError> {
        Ok(false)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubCreateInterestUseCase;

#[async_trait]
impl CreateInterestUseCase for DefaultStubCreateInterestUseCase {
    async fn execute(&self, _data: CreateInterestData) -> Result<Interest, CreateInterestError> {
        Err(CreateInterestError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubPatchInterestUseCase;

#[async_trait]
impl PatchInterestUseCase for DefaultStubPatchInterestUseCase {
    async fn execute(
        &self,
        _interest_id: Uuid,
        _data: PatchInterestData,
    ) -> Result<Interest, PatchInterestError> {
        Err(PatchInterestError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubDeleteInterestUseCase;

#[async_trait]
impl DeleteInterestUseCase for DefaultStubDeleteInterestUseCase {
    async fn execute(&self, _interest_id: Uuid) -> Result<bool, DeleteInterestError> {
        Ok(false)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubCreateSkillUseCase;

#[async_trait]
impl CreateSkillUseCase for DefaultStubCreateSkillUseCase {
    async fn execute(&self, _data: CreateSkillData) -> Result<Skill, CreateSkillError> {
        Err(CreateSkillError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubPatchSkillUseCase;

#[async_trait]
impl PatchSkillUseCase for DefaultStubPatchSkillUseCase {
    async fn execute(
        &self,
        _skill_id: Uuid,
        _data: PatchSkillData,
    ) -> Result<Skill, PatchSkillError> {
        Err(PatchSkillError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubDeleteSkillUseCase;

#[async_trait]
impl DeleteSkillUseCase for DefaultStubDeleteSkillUseCase {
    async fn execute(&self, _skill_id: Uuid) -> Result<bool, DeleteSkillError> {
        Ok(false)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubCreateTimelineEntryUseCase;

#[async_trait]
impl CreateTimelineEntryUseCase for DefaultStubCreateTimelineEntryUseCase {
    async fn execute(
        &self,
        _data: CreateTimelineEntryData,
    ) -> Result<TimelineEntry, CreateTimelineEntryError> {
        Err(CreateTimelineEntryError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubPatchTimelineEntryUseCase;

#[async_trait]
impl PatchTimelineEntryUseCase for DefaultStubPatchTimelineEntryUseCase {
    async fn execute(
        &self,
        _entry_id: Uuid,
        _data: PatchTimelineEntryData,
    ) -> Result<TimelineEntry, PatchTimelineEntryError> {
        Err(PatchTimelineEntryError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubDeleteTimelineEntryUseCase;

#[async_trait]
impl DeleteTimelineEntryUseCase for DefaultStubDeleteTimelineEntryUseCase {
    async fn execute(&self, _entry_id: Uuid) -> Result<bool, DeleteTimelineEntryError> {
        Ok(false)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubCreateContactUseCase;

#[async_trait]
impl CreateContactUseCase for DefaultStubCreateContactUseCase {
    async fn execute(&self, _data: CreateContactData) -> Result<ContactInfo, CreateContactError> {
        Err(CreateContactError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubPatchContactUseCase;

#[async_trait]
impl PatchContactUseCase for DefaultStubPatchContactUseCase {
    async fn execute(
        &self,
        _contact_id: Uuid,
        _data: PatchContactData,
    ) -> Result<ContactInfo, PatchContactError> {
        Err(PatchContactError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct DefaultStubDeleteContactUseCase;

#[async_trait]
impl DeleteContactUseCase for DefaultStubDeleteContactUseCase {
    async fn execute(&self, _contact_id: Uuid) -> Result<bool, DeleteContactError> {
        Ok(false)
    }
}
