use actix_web::web;
use std::sync::Arc;

use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPostsUseCase, GetBlogTopicsUseCase,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactUseCase, DeleteContactUseCase, GetContactsUseCase, PatchContactUseCase,
};
use crate::modules::interest::application::interest_use_cases::InterestUseCases;
use crate::modules::interest::application::ports::incoming::use_cases::{
    CreateInterestUseCase, DeleteInterestUseCase, GetInterestBySlugUseCase, GetInterestsUseCase,
    PatchInterestUseCase,
};
use crate::modules::pages::application::page_composer::PageComposer;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectBySlugUseCase, GetProjectsUseCase,
    PatchProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillsUseCase, PatchSkillUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::timeline::application::ports::incoming::use_cases::{
    CreateTimelineEntryUseCase, DeleteTimelineEntryUseCase, GetTimelineUseCase,
    PatchTimelineEntryUseCase,
};
use crate::modules::timeline::application::timeline_use_cases::TimelineUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// `AppState` over stub use cases. Every slot starts with the "empty
/// database" stub; tests swap in the ones they exercise.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    interest: InterestUseCases,
    skill: SkillUseCases,
    timeline: TimelineUseCases,
    contact: ContactUseCases,
    blog: BlogUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase::default()),
                get_by_slug: Arc::new(StubGetProjectBySlugUseCase::not_found()),
                create: Arc::new(DefaultStubCreateProjectUseCase),
                patch: Arc::new(DefaultStubPatchProjectUseCase),
                delete: Arc::new(DefaultStubDeleteProjectUseCase),
            },
            interest: InterestUseCases {
                get_list: Arc::new(StubGetInterestsUseCase::default()),
                get_by_slug: Arc::new(StubGetInterestBySlugUseCase::not_found()),
                create: Arc::new(DefaultStubCreateInterestUseCase),
                patch: Arc::new(DefaultStubPatchInterestUseCase),
                delete: Arc::new(DefaultStubDeleteInterestUseCase),
            },
            skill: SkillUseCases {
                get_list: Arc::new(StubGetSkillsUseCase::default()),
                create: Arc::new(DefaultStubCreateSkillUseCase),
                patch: Arc::new(DefaultStubPatchSkillUseCase),
                delete: Arc::new(DefaultStubDeleteSkillUseCase),
            },
            timeline: TimelineUseCases {
                get_list: Arc::new(StubGetTimelineUseCase::default()),
                create: Arc::new(DefaultStubCreateTimelineEntryUseCase),
                patch: Arc::new(DefaultStubPatchTimelineEntryUseCase),
                delete: Arc::new(DefaultStubDeleteTimelineEntryUseCase),
            },
            contact: ContactUseCases {
                get_list: Arc::new(StubGetContactsUseCase::default()),
                create: Arc::new(DefaultStubCreateContactUseCase),
                patch: Arc::new(DefaultStubPatchContactUseCase),
                delete: Arc::new(DefaultStubDeleteContactUseCase),
            },
            blog: BlogUseCases {
                get_posts: Arc::new(StubGetBlogPostsUseCase::default()),
                get_topics: Arc::new(StubGetBlogTopicsUseCase::default()),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_project_by_slug(
        mut self,
        uc: impl GetProjectBySlugUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_patch_project(mut self, uc: impl PatchProjectUseCase + Send + Sync + 'static) -> Self {
        self.project.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Interests
    // ------------------------------------------------------------------

    pub fn with_get_interests(mut self, uc: impl GetInterestsUseCase + Send + Sync + 'static) -> Self {
        self.interest.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_interest_by_slug(
        mut self,
        uc: impl GetInterestBySlugUseCase + Send + Sync + 'static,
    ) -> Self {
        self.interest.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_create_interest(
        mut self,
        uc: impl CreateInterestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.interest.create = Arc::new(uc);
        self
    }

    pub fn with_patch_interest(
        mut self,
        uc: impl PatchInterestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.interest.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_interest(
        mut self,
        uc: impl DeleteInterestUseCase + Send + Sync + 'static,
    ) -> Self {
        self.interest.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.skill.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_patch_skill(mut self, uc: impl PatchSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + Send + Sync + 'static) -> Self {
        self.skill.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Timeline
    // ------------------------------------------------------------------

    pub fn with_get_timeline(mut self, uc: impl GetTimelineUseCase + Send + Sync + 'static) -> Self {
        self.timeline.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_timeline_entry(
        mut self,
        uc: impl CreateTimelineEntryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.timeline.create = Arc::new(uc);
        self
    }

    pub fn with_patch_timeline_entry(
        mut self,
        uc: impl PatchTimelineEntryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.timeline.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_timeline_entry(
        mut self,
        uc: impl DeleteTimelineEntryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.timeline.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Contact
    // ------------------------------------------------------------------

    pub fn with_get_contacts(mut self, uc: impl GetContactsUseCase + Send + Sync + 'static) -> Self {
        self.contact.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_contact(
        mut self,
        uc: impl CreateContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.create = Arc::new(uc);
        self
    }

    pub fn with_patch_contact(mut self, uc: impl PatchContactUseCase + Send + Sync + 'static) -> Self {
        self.contact.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_contact(
        mut self,
        uc: impl DeleteContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.delete = Arc::new(uc);
        self
    }

    // ------------------------------------------------------------------
    // Blog
    // ------------------------------------------------------------------

    pub fn with_get_blog_posts(mut self, uc: impl GetBlogPostsUseCase + Send + Sync + 'static) -> Self {
        self.blog.get_posts = Arc::new(uc);
        self
    }

    pub fn with_get_blog_topics(
        mut self,
        uc: impl GetBlogTopicsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.get_topics = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let pages = PageComposer::new(
            &self.project,
            &self.interest,
            &self.skill,
            &self.timeline,
            &self.contact,
            &self.blog,
        );

        web::Data::new(AppState {
            project: self.project,
            interest: self.interest,
            skill: self.skill,
            timeline: self.timeline,
            contact: self.contact,
            blog: self.blog,
            pages: Arc::new(pages),
        })
    }
}
