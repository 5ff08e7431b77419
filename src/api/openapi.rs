use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::blog::application::domain::entities::{BlogCategory, BlogPost, BlogTopic};
use crate::modules::contact::adapter::incoming::web::routes::{
    CreateContactRequest, PatchContactRequest,
};
use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::modules::interest::adapter::incoming::web::routes::{
    CreateInterestRequest, PatchInterestRequest,
};
use crate::modules::interest::application::domain::entities::{
    Interest, InterestCategory, InterestType,
};
use crate::modules::pages::application::page_props::{
    AboutPage, BlogPage, BlogTopicsPage, ContactPage, HomePage, InterestDetailPage,
    InterestsPage, ListingState, PageSection, ProjectDetailPage, ProjectsPage,
};
use crate::modules::pages::application::render_context::{RenderContext, Theme};
use crate::modules::project::adapter::incoming::web::routes::{
    CreateProjectRequest, PatchProjectRequest,
};
use crate::modules::project::application::domain::entities::{
    Project, ProjectCategory, ProjectStatus, TechStack,
};
use crate::modules::skill::adapter::incoming::web::routes::{
    CreateSkillRequest, PatchSkillRequest,
};
use crate::modules::skill::application::domain::entities::{Skill, SkillLevel};
use crate::modules::timeline::adapter::incoming::web::routes::{
    CreateTimelineEntryRequest, PatchTimelineEntryRequest,
};
use crate::modules::timeline::application::domain::entities::{TimelineEntry, TimelineEntryType};
use crate::shared::content::Icon;
use crate::shared::filter_view::TabCount;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Content API and page props for the portfolio site"
    ),
    paths(
        // Operations
        crate::health::health,
        crate::health::readiness,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_by_slug_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::patch_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Interest endpoints
        crate::modules::interest::adapter::incoming::web::routes::get_interests_handler,
        crate::modules::interest::adapter::incoming::web::routes::get_interest_by_slug_handler,
        crate::modules::interest::adapter::incoming::web::routes::create_interest_handler,
        crate::modules::interest::adapter::incoming::web::routes::patch_interest_handler,
        crate::modules::interest::adapter::incoming::web::routes::delete_interest_handler,

        // Skill endpoints
        crate::modules::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::skill::adapter::incoming::web::routes::create_skill_handler,
        crate::modules::skill::adapter::incoming::web::routes::patch_skill_handler,
        crate::modules::skill::adapter::incoming::web::routes::delete_skill_handler,

        // Timeline endpoints
        crate::modules::timeline::adapter::incoming::web::routes::get_timeline_handler,
        crate::modules::timeline::adapter::incoming::web::routes::create_timeline_entry_handler,
        crate::modules::timeline::adapter::incoming::web::routes::patch_timeline_entry_handler,
        crate::modules::timeline::adapter::incoming::web::routes::delete_timeline_entry_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::get_contacts_handler,
        crate::modules::contact::adapter::incoming::web::routes::create_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::patch_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::delete_contact_handler,

        // Pages
        crate::modules::pages::adapter::incoming::web::routes::home_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::projects_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::project_detail_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::interests_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::interest_detail_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::about_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::contact_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::blog_page_handler,
        crate::modules::pages::adapter::incoming::web::routes::blog_topics_page_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Shared vocabularies
            Icon,
            ProjectCategory,
            ProjectStatus,
            InterestCategory,
            InterestType,
            SkillLevel,
            TimelineEntryType,
            ContactType,
            BlogCategory,

            // Content
            Project,
            TechStack,
            Interest,
            Skill,
            TimelineEntry,
            ContactInfo,
            BlogPost,
            BlogTopic,

            // Write DTOs
            CreateProjectRequest,
            PatchProjectRequest,
            CreateInterestRequest,
            PatchInterestRequest,
            CreateSkillRequest,
            PatchSkillRequest,
            CreateTimelineEntryRequest,
            PatchTimelineEntryRequest,
            CreateContactRequest,
            PatchContactRequest,

            // Page props
            RenderContext,
            Theme,
            PageSection,
            TabCount,
            ListingState,
            HomePage,
            ProjectsPage,
            ProjectDetailPage,
            InterestsPage,
            InterestDetailPage,
            AboutPage,
            ContactPage,
            BlogPage,
            BlogTopicsPage
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness checks"),
        (name = "projects", description = "Project content"),
        (name = "interests", description = "Interest content"),
        (name = "skills", description = "Skill content"),
        (name = "timeline", description = "Career timeline content"),
        (name = "contact", description = "Contact methods"),
        (name = "pages", description = "Page props for the site"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin token from `issue-admin-token`"))
                        .build(),
                ),
            )
        }
    }
}
