mod api;
mod config;
pub mod health;
pub mod modules;
pub use modules::auth;
mod shared;

#[cfg(test)]
mod tests;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::config::{AppConfig, ConfigError};

use crate::modules::blog::adapter::outgoing::{CatalogError, StaticBlogCatalog};
use crate::modules::blog::application::blog_use_cases::BlogUseCases;
use crate::modules::blog::application::service::{GetBlogPostsService, GetBlogTopicsService};

use crate::modules::contact::adapter::outgoing::{ContactQueryPostgres, ContactRepositoryPostgres};
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::service::{
    CreateContactService, DeleteContactService, GetContactsService, PatchContactService,
};

use crate::modules::interest::adapter::outgoing::{
    InterestQueryPostgres, InterestRepositoryPostgres,
};
use crate::modules::interest::application::interest_use_cases::InterestUseCases;
use crate::modules::interest::application::service::{
    CreateInterestService, DeleteInterestService, GetInterestBySlugService, GetInterestsService,
    PatchInterestService,
};

use crate::modules::pages::application::page_composer::PageComposer;

use crate::modules::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectBySlugService, GetProjectsService,
    PatchProjectService,
};

use crate::modules::skill::adapter::outgoing::{SkillQueryPostgres, SkillRepositoryPostgres};
use crate::modules::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetSkillsService, PatchSkillService,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;

use crate::modules::timeline::adapter::outgoing::{
    TimelineQueryPostgres, TimelineRepositoryPostgres,
};
use crate::modules::timeline::application::service::{
    CreateTimelineEntryService, DeleteTimelineEntryService, GetTimelineService,
    PatchTimelineEntryService,
};
use crate::modules::timeline::application::timeline_use_cases::TimelineUseCases;

use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const ISSUE_ADMIN_TOKEN: &str = "issue-admin-token";

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub interest: InterestUseCases,
    pub skill: SkillUseCases,
    pub timeline: TimelineUseCases,
    pub contact: ContactUseCases,
    pub blog: BlogUseCases,
    pub pages: Arc<PageComposer>,
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("database: {0}")]
    Database(#[from] DbErr),

    #[error("blog catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("token: {0}")]
    Token(#[from] TokenError),

    #[error("usage: {0}")]
    Usage(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(not(tarpaulin_include))]
fn build_app_state(db: Arc<DatabaseConnection>, catalog: StaticBlogCatalog) -> AppState {
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
    let project = ProjectUseCases {
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_by_slug: Arc::new(GetProjectBySlugService::new(project_query)),
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        patch: Arc::new(PatchProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
    };

    let interest_query = InterestQueryPostgres::new(Arc::clone(&db));
    let interest_repo = InterestRepositoryPostgres::new(Arc::clone(&db));
    let interest = InterestUseCases {
        get_list: Arc::new(GetInterestsService::new(interest_query.clone())),
        get_by_slug: Arc::new(GetInterestBySlugService::new(interest_query)),
        create: Arc::new(CreateInterestService::new(interest_repo.clone())),
        patch: Arc::new(PatchInterestService::new(interest_repo.clone())),
        delete: Arc::new(DeleteInterestService::new(interest_repo)),
    };

    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db));
    let skill = SkillUseCases {
        get_list: Arc::new(GetSkillsService::new(SkillQueryPostgres::new(Arc::clone(&db)))),
        create: Arc::new(CreateSkillService::new(skill_repo.clone())),
        patch: Arc::new(PatchSkillService::new(skill_repo.clone())),
        delete: Arc::new(DeleteSkillService::new(skill_repo)),
    };

    let timeline_repo = TimelineRepositoryPostgres::new(Arc::clone(&db));
    let timeline = TimelineUseCases {
        get_list: Arc::new(GetTimelineService::new(TimelineQueryPostgres::new(
            Arc::clone(&db),
        ))),
        create: Arc::new(CreateTimelineEntryService::new(timeline_repo.clone())),
        patch: Arc::new(PatchTimelineEntryService::new(timeline_repo.clone())),
        delete: Arc::new(DeleteTimelineEntryService::new(timeline_repo)),
    };

    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db));
    let contact = ContactUseCases {
        get_list: Arc::new(GetContactsService::new(ContactQueryPostgres::new(
            Arc::clone(&db),
        ))),
        create: Arc::new(CreateContactService::new(contact_repo.clone())),
        patch: Arc::new(PatchContactService::new(contact_repo.clone())),
        delete: Arc::new(DeleteContactService::new(contact_repo)),
    };

    let blog = BlogUseCases {
        get_posts: Arc::new(GetBlogPostsService::new(catalog.clone())),
        get_topics: Arc::new(GetBlogTopicsService::new(catalog)),
    };

    let pages = PageComposer::new(&project, &interest, &skill, &timeline, &contact, &blog);

    AppState {
        project,
        interest,
        skill,
        timeline,
        contact,
        blog,
        pages: Arc::new(pages),
    }
}

/// `issue-admin-token <subject>`: prints a signed admin token and exits.
#[cfg(not(tarpaulin_include))]
fn issue_admin_token(subject: Option<&str>) -> Result<(), StartupError> {
    let subject = subject
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| StartupError::Usage(format!("{ISSUE_ADMIN_TOKEN} <subject>")))?;

    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);
    let token = jwt_service.issue_admin_token(subject)?;

    // Only the token goes to stdout so it can be piped
    println!("{token}");
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), StartupError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.get(1).map(String::as_str) == Some(ISSUE_ADMIN_TOKEN) {
        return issue_admin_token(args.get(2).map(String::as_str));
    }

    info!("Starting application...");

    let app_config = AppConfig::from_env()?;
    let jwt_service = JwtTokenService::new(JwtConfig::from_env()?);

    // Parsed once; a bad document stops startup
    let catalog = StaticBlogCatalog::load()?;

    let server_url = app_config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(app_config.database_url.clone());
    opt.max_connections(app_config.db_max_connections)
        .min_connections(app_config.db_min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(Database::connect(opt).await?);

    let state = build_app_state(Arc::clone(&db_arc), catalog);
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{contact, interest, pages, project, skill, timeline};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_project_by_slug_handler);
    cfg.service(project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(project::adapter::incoming::web::routes::patch_project_handler);
    cfg.service(project::adapter::incoming::web::routes::delete_project_handler);
    // Interests
    cfg.service(interest::adapter::incoming::web::routes::get_interests_handler);
    cfg.service(interest::adapter::incoming::web::routes::get_interest_by_slug_handler);
    cfg.service(interest::adapter::incoming::web::routes::create_interest_handler);
    cfg.service(interest::adapter::incoming::web::routes::patch_interest_handler);
    cfg.service(interest::adapter::incoming::web::routes::delete_interest_handler);
    // Skills
    cfg.service(skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::patch_skill_handler);
    cfg.service(skill::adapter::incoming::web::routes::delete_skill_handler);
    // Timeline
    cfg.service(timeline::adapter::incoming::web::routes::get_timeline_handler);
    cfg.service(timeline::adapter::incoming::web::routes::create_timeline_entry_handler);
    cfg.service(timeline::adapter::incoming::web::routes::patch_timeline_entry_handler);
    cfg.service(timeline::adapter::incoming::web::routes::delete_timeline_entry_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::get_contacts_handler);
    cfg.service(contact::adapter::incoming::web::routes::create_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::patch_contact_handler);
    cfg.service(contact::adapter::incoming::web::routes::delete_contact_handler);
    // Pages
    cfg.service(pages::adapter::incoming::web::routes::home_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::projects_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::project_detail_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::interests_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::interest_detail_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::about_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::contact_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::blog_page_handler);
    cfg.service(pages::adapter::incoming::web::routes::blog_topics_page_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
