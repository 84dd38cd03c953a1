//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod resources;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::web;

pub use error::{ApiResult, ErrorBody};

/// Register the JSON extractor configuration and every route.
///
/// Callers supply `web::Data<HttpState>` and `web::Data<HealthState>`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use roster::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(resources::list_resources)
        .service(resources::get_resource)
        .service(resources::create_resource)
        .service(resources::update_resource)
        .service(resources::delete_resource)
        .service(health::health)
        .service(health::ready)
        .service(health::live);
}
