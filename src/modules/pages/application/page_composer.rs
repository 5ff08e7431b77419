// src/modules/pages/application/page_composer.rs

use std::fmt::Display;
use std::sync::Arc;
use tracing::warn;

use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::domain::entities::BlogCategory;
use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogPostsUseCase, GetBlogTopicsUseCase,
};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::modules::contact::application::ports::incoming::use_cases::GetContactsUseCase;
use crate::modules::contact::application::ports::outgoing::{
    default_contact_order, ContactListFilter,
};
use crate::modules::interest::application::domain::entities::InterestCategory;
use crate::modules::interest::application::interest_use_cases::InterestUseCases;
use crate::modules::interest::application::ports::incoming::use_cases::{
    GetInterestBySlugError, GetInterestBySlugUseCase, GetInterestsUseCase,
};
use crate::modules::interest::application::ports::outgoing::{
    default_interest_order, InterestListFilter,
};
use crate::modules::pages::application::page_props::{
    AboutPage, BlogPage, BlogTopicsPage, ContactPage, HomePage, InterestDetailPage,
    InterestsPage, ListingState, PageSection, ProjectDetailPage, ProjectsPage,
};
use crate::modules::project::application::domain::entities::ProjectCategory;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectBySlugError, GetProjectBySlugUseCase, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    default_project_order, ProjectListFilter,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::modules::skill::application::ports::outgoing::default_skill_order;
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::timeline::application::ports::incoming::use_cases::GetTimelineUseCase;
use crate::modules::timeline::application::ports::outgoing::default_timeline_order;
use crate::modules::timeline::application::timeline_use_cases::TimelineUseCases;
use crate::shared::filter_view::{CategoryFilter, FilterView, Searchable};

/// Number of projects promoted on the home page.
pub const RECENT_PROJECTS: u64 = 3;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PageError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Interest not found")]
    InterestNotFound,

    #[error("{section} unavailable: {reason}")]
    SectionFailed {
        section: PageSection,
        reason: String,
    },
}

/// Builds page props by fanning out to the content use cases.
///
/// Projects, interests and the blog catalog are primary: when they fail the
/// page fails. Skills, timeline and contact render empty instead and are
/// reported in `degraded_sections`.
#[derive(Clone)]
pub struct PageComposer {
    get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    get_project_by_slug: Arc<dyn GetProjectBySlugUseCase + Send + Sync>,
    get_interests: Arc<dyn GetInterestsUseCase + Send + Sync>,
    get_interest_by_slug: Arc<dyn GetInterestBySlugUseCase + Send + Sync>,
    get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    get_timeline: Arc<dyn GetTimelineUseCase + Send + Sync>,
    get_contacts: Arc<dyn GetContactsUseCase + Send + Sync>,
    get_blog_posts: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
    get_blog_topics: Arc<dyn GetBlogTopicsUseCase + Send + Sync>,
}

impl PageComposer {
    pub fn new(
        project: &ProjectUseCases,
        interest: &InterestUseCases,
        skill: &SkillUseCases,
        timeline: &TimelineUseCases,
        contact: &ContactUseCases,
        blog: &BlogUseCases,
    ) -> Self {
        Self {
            get_projects: project.get_list.clone(),
            get_project_by_slug: project.get_by_slug.clone(),
            get_interests: interest.get_list.clone(),
            get_interest_by_slug: interest.get_by_slug.clone(),
            get_skills: skill.get_list.clone(),
            get_timeline: timeline.get_list.clone(),
            get_contacts: contact.get_list.clone(),
            get_blog_posts: blog.get_posts.clone(),
            get_blog_topics: blog.get_topics.clone(),
        }
    }

    pub async fn home(&self) -> Result<HomePage, PageError> {
        let (projects, interests) = futures::join!(
            self.get_projects.execute(
                ProjectListFilter::recent(RECENT_PROJECTS),
                default_project_order()
            ),
            self.get_interests
                .execute(InterestListFilter::featured(), default_interest_order()),
        );

        Ok(HomePage {
            recent_projects: projects.map_err(|e| section_failed(PageSection::Projects, e))?,
            featured_interests: interests
                .map_err(|e| section_failed(PageSection::Interests, e))?,
        })
    }

    pub async fn projects(
        &self,
        category: CategoryFilter<ProjectCategory>,
        query: &str,
    ) -> Result<ProjectsPage, PageError> {
        let projects = self
            .get_projects
            .execute(ProjectListFilter::default(), default_project_order())
            .await
            .map_err(|e| section_failed(PageSection::Projects, e))?;

        let view = filtered(projects, category, query);

        Ok(ProjectsPage {
            projects: view.visible().into_iter().cloned().collect(),
            listing: ListingState::from_view(&view, ProjectCategory::ALL),
        })
    }

    pub async fn project(&self, slug: &str) -> Result<ProjectDetailPage, PageError> {
        match self.get_project_by_slug.execute(slug).await {
            Ok(project) => Ok(ProjectDetailPage { project }),
            Err(GetProjectBySlugError::NotFound) => Err(PageError::ProjectNotFound),
            Err(GetProjectBySlugError::RepositoryError(e)) => {
                Err(section_failed(PageSection::Projects, e))
            }
        }
    }

    pub async fn interests(
        &self,
        category: CategoryFilter<InterestCategory>,
        query: &str,
    ) -> Result<InterestsPage, PageError> {
        let interests = self
            .get_interests
            .execute(InterestListFilter::default(), default_interest_order())
            .await
            .map_err(|e| section_failed(PageSection::Interests, e))?;

        let view = filtered(interests, category, query);

        Ok(InterestsPage {
            spotlight: view.featured().cloned(),
            interests: view.regular().into_iter().cloned().collect(),
            listing: ListingState::from_view(&view, InterestCategory::ALL),
        })
    }

    pub async fn interest(&self, slug: &str) -> Result<InterestDetailPage, PageError> {
        match self.get_interest_by_slug.execute(slug).await {
            Ok(interest) => Ok(InterestDetailPage { interest }),
            Err(GetInterestBySlugError::NotFound) => Err(PageError::InterestNotFound),
            Err(GetInterestBySlugError::RepositoryError(e)) => {
                Err(section_failed(PageSection::Interests, e))
            }
        }
    }

    pub async fn about(&self) -> AboutPage {
        let (skills, timeline) = futures::join!(
            self.get_skills.execute(default_skill_order()),
            self.get_timeline.execute(default_timeline_order()),
        );

        let mut degraded_sections = Vec::new();
        let skills = or_degraded(PageSection::Skills, skills, &mut degraded_sections);
        let timeline = or_degraded(PageSection::Timeline, timeline, &mut degraded_sections);

        AboutPage {
            skills,
            timeline,
            degraded_sections,
        }
    }

    pub async fn contact(&self) -> ContactPage {
        let contacts = self
            .get_contacts
            .execute(ContactListFilter::default(), default_contact_order())
            .await;

        let mut degraded_sections = Vec::new();
        let contacts = or_degraded(PageSection::Contact, contacts, &mut degraded_sections);

        let (direct, social) = split_contacts(contacts);

        ContactPage {
            direct,
            social,
            degraded_sections,
        }
    }

    pub async fn blog(
        &self,
        category: CategoryFilter<BlogCategory>,
        query: &str,
    ) -> Result<BlogPage, PageError> {
        let posts = self
            .get_blog_posts
            .execute()
            .await
            .map_err(|e| section_failed(PageSection::Blog, e))?;

        let view = filtered(posts, category, query);

        Ok(BlogPage {
            spotlight: view.spotlight().cloned(),
            posts: view.regular().into_iter().cloned().collect(),
            listing: ListingState::from_view(&view, BlogCategory::ALL),
        })
    }

    pub async fn blog_topics(&self) -> Result<BlogTopicsPage, PageError> {
        let topics = self
            .get_blog_topics
            .execute()
            .await
            .map_err(|e| section_failed(PageSection::Blog, e))?;

        Ok(BlogTopicsPage { topics })
    }
}

fn filtered<T: Searchable>(
    items: Vec<T>,
    category: CategoryFilter<T::Category>,
    query: &str,
) -> FilterView<T> {
    let mut view = FilterView::new(items);
    view.set_category(category);
    view.set_query(query);
    view
}

fn section_failed(section: PageSection, reason: impl Display) -> PageError {
    PageError::SectionFailed {
        section,
        reason: reason.to_string(),
    }
}

fn or_degraded<T, E: Display>(
    section: PageSection,
    result: Result<Vec<T>, E>,
    degraded: &mut Vec<PageSection>,
) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(section = %section, error = %e, "Page section unavailable, rendering empty");
        degraded.push(section);
        Vec::new()
    })
}

/// Input is already in display order; the stable sort keeps it within each
/// contact type.
fn split_contacts(contacts: Vec<ContactInfo>) -> (Vec<ContactInfo>, Vec<ContactInfo>) {
    let (mut direct, social): (Vec<ContactInfo>, Vec<ContactInfo>) = contacts
        .into_iter()
        .filter(|c| c.direct_rank().is_some() || c.contact_type == ContactType::Social)
        .partition(|c| c.direct_rank().is_some());

    direct.sort_by_key(|c| c.direct_rank());
    (direct, social)
}
