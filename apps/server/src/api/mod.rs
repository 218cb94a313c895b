//! API endpoint modules.

pub mod health;
pub mod nodegroups;
pub mod openapi;

pub use health::configure_health_routes;
pub use nodegroups::configure_page_routes as configure_nodegroup_page_routes;
pub use nodegroups::configure_routes as configure_nodegroup_routes;
pub use openapi::ApiDoc;

use actix_web::web;

/// Register every route: API endpoints under `/api/v1`, pages at the root.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(configure_health_routes)
            .configure(configure_nodegroup_routes),
    )
    .configure(configure_nodegroup_page_routes);
}
