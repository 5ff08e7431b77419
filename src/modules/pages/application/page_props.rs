// src/modules/pages/application/page_props.rs
//
// JSON documents the site renders from, one per page.

use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::blog::application::domain::entities::{BlogPost, BlogTopic};
use crate::modules::contact::application::domain::entities::ContactInfo;
use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::pages::application::render_context::RenderContext;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::shared::filter_view::{FilterView, Searchable, TabCount};

crate::label_enum! {
    /// Page sections backed by one content source.
    pub enum PageSection: "page section" {
        Projects => "projects",
        Interests => "interests",
        Skills => "skills",
        Timeline => "timeline",
        Contact => "contact",
        Blog => "blog",
    }
}

/// Envelope returned by every page route.
#[derive(Debug, Serialize, ToSchema)]
pub struct PageResponse<P> {
    pub render: RenderContext,
    pub props: P,
}

/// Filter state echoed back to the listing pages.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ListingState {
    pub category: String,
    pub query: String,
    pub tabs: Vec<TabCount>,
    pub match_count: usize,
    pub has_active_filters: bool,
}

impl ListingState {
    pub fn from_view<T: Searchable>(view: &FilterView<T>, categories: &[T::Category]) -> Self {
        Self {
            category: view.category().label(),
            query: view.query().to_string(),
            tabs: view.tab_counts(categories),
            match_count: view.visible().len(),
            has_active_filters: view.has_active_filters(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct HomePage {
    pub recent_projects: Vec<Project>,
    pub featured_interests: Vec<Interest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectsPage {
    pub projects: Vec<Project>,
    pub listing: ListingState,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectDetailPage {
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InterestsPage {
    /// First featured interest of the whole list, shown above the grid
    pub spotlight: Option<Interest>,
    pub interests: Vec<Interest>,
    pub listing: ListingState,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InterestDetailPage {
    pub interest: Interest,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AboutPage {
    pub skills: Vec<Skill>,
    pub timeline: Vec<TimelineEntry>,
    pub degraded_sections: Vec<PageSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ContactPage {
    /// Emails, then locations
    pub direct: Vec<ContactInfo>,
    pub social: Vec<ContactInfo>,
    pub degraded_sections: Vec<PageSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogPage {
    /// Only present on the unfiltered listing
    pub spotlight: Option<BlogPost>,
    pub posts: Vec<BlogPost>,
    pub listing: ListingState,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BlogTopicsPage {
    pub topics: Vec<BlogTopic>,
}
