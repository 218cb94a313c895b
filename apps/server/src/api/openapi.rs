//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models, views};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LMS Admin Server",
        version = "1.11.0",
        description = "LMS administration panel: node group listing and database upgrades"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::health::ready,
        api::nodegroups::node_group_list_html,
        api::nodegroups::node_group_list_json,
    ),
    components(
        schemas(
            error::ErrorResponse,
            api::health::HealthResponse,
            api::health::ReadyResponse,
            models::NodeGroupRow,
            models::ListSummary,
            views::NodeGroupListPage,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Node groups", description = "Node group listing")
    )
)]
pub struct ApiDoc;
