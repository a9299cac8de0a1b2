pub mod modules;
pub use modules::asset;
pub use modules::contact;
pub use modules::profile;
pub use modules::project;
pub use modules::skill;
pub use modules::testimonial;
pub use modules::timeline;
pub mod health;
pub mod shared;

use crate::asset::adapter::outgoing::FsAssetStore;
use crate::asset::application::ports::incoming::use_cases::{
    AcceptUploadUseCase, FetchAssetUseCase,
};
use crate::asset::application::service::{AcceptUploadService, FetchAssetService};
use crate::asset::domain::policies::upload_policy::UploadPolicy;
use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::contact::application::service::SubmitContactMessageService;
use crate::profile::adapter::outgoing::SeedProfileSource;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, UpdateProfileDraftUseCase,
};
use crate::profile::application::service::{GetProfileService, UpdateProfileDraftService};
use crate::project::adapter::outgoing::SeedProjectCatalog;
use crate::project::application::ports::incoming::use_cases::ListProjectsUseCase;
use crate::project::application::service::ListProjectsService;
use crate::shared::markup::extractor_config::{custom_form_config, custom_query_config};
use crate::shared::markup::PageResponse;
use crate::skill::adapter::outgoing::SeedSkillInventory;
use crate::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::skill::application::service::GetSkillsService;
use crate::testimonial::adapter::outgoing::SeedTestimonials;
use crate::testimonial::application::ports::incoming::use_cases::{
    ListTestimonialsUseCase, SubmitTestimonialUseCase,
};
use crate::testimonial::application::service::{ListTestimonialsService, SubmitTestimonialService};
use crate::timeline::adapter::outgoing::SeedTimeline;
use crate::timeline::application::ports::incoming::use_cases::GetTimelineUseCase;
use crate::timeline::application::service::GetTimelineService;

use actix_web::{web, App, HttpServer};

use std::env;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_profile_use_case: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update_profile_draft_use_case: Arc<dyn UpdateProfileDraftUseCase + Send + Sync>,
    pub list_projects_use_case: Arc<dyn ListProjectsUseCase + Send + Sync>,
    pub get_skills_use_case: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_timeline_use_case: Arc<dyn GetTimelineUseCase + Send + Sync>,
    pub list_testimonials_use_case: Arc<dyn ListTestimonialsUseCase + Send + Sync>,
    pub submit_testimonial_use_case: Arc<dyn SubmitTestimonialUseCase + Send + Sync>,
    pub submit_contact_use_case: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub fetch_asset_use_case: Arc<dyn FetchAssetUseCase + Send + Sync>,
    pub accept_upload_use_case: Arc<dyn AcceptUploadUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables; everything is optional with a default,
    // the site serves seed content out of the box.
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let asset_dir = env::var("ASSET_DIR").unwrap_or_else(|_| ".".to_string());

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Asset store; shared between the fetch use case and the
    // readiness probe.
    let asset_store = FsAssetStore::new(&asset_dir);
    if !asset_store.probe_root().await {
        warn!(
            asset_dir = %asset_dir,
            "asset directory not found; resume and photo delivery will degrade"
        );
    }
    let probe_store = Arc::new(asset_store.clone());

    // Seed-backed services
    let state = AppState {
        get_profile_use_case: Arc::new(GetProfileService::new(SeedProfileSource)),
        update_profile_draft_use_case: Arc::new(UpdateProfileDraftService::new(SeedProfileSource)),
        list_projects_use_case: Arc::new(ListProjectsService::new(SeedProjectCatalog)),
        get_skills_use_case: Arc::new(GetSkillsService::new(SeedSkillInventory)),
        get_timeline_use_case: Arc::new(GetTimelineService::new(SeedTimeline)),
        list_testimonials_use_case: Arc::new(ListTestimonialsService::new(SeedTestimonials)),
        submit_testimonial_use_case: Arc::new(SubmitTestimonialService),
        submit_contact_use_case: Arc::new(SubmitContactMessageService),
        fetch_asset_use_case: Arc::new(FetchAssetService::new(asset_store)),
        accept_upload_use_case: Arc::new(AcceptUploadService::new(UploadPolicy::default())),
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&probe_store)))
            .app_data(custom_query_config())
            .app_data(custom_form_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Views
    cfg.service(crate::profile::adapter::incoming::web::routes::home_page_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::projects_page_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::skills_page_handler);
    cfg.service(crate::timeline::adapter::incoming::web::routes::timeline_page_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::testimonials_page_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::settings_page_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::contact_page_handler);
    // Form sinks
    cfg.service(crate::profile::adapter::incoming::web::routes::submit_settings_handler);
    cfg.service(crate::testimonial::adapter::incoming::web::routes::submit_testimonial_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    // Assets
    cfg.service(crate::asset::adapter::incoming::web::routes::download_resume_handler);
    cfg.service(crate::asset::adapter::incoming::web::routes::profile_photo_handler);
    cfg.service(crate::asset::adapter::incoming::web::routes::upload_photo_handler);
    cfg.service(crate::asset::adapter::incoming::web::routes::upload_resume_handler);
    // Anything off the published set of routes
    cfg.default_service(web::route().to(|| async { PageResponse::not_found() }));
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
