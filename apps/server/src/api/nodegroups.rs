//! Node group list handlers.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use tracing::{info, warn};

use crate::db::DbPool;
use crate::i18n::Translator;
use crate::models::NodeGroupList;
use crate::views::{self, NodeGroupListPage};

/// Load the node group list, degrading to an empty list on query failure.
pub async fn load_node_group_list(pool: &DbPool) -> NodeGroupList {
    match pool.list_node_groups().await {
        Ok(list) => {
            info!(
                total = list.summary.total,
                nodestotal = list.summary.nodestotal,
                "Node groups listed"
            );
            list
        }
        Err(e) => {
            warn!("Node group query failed, showing empty list: {}", e);
            NodeGroupList::default()
        }
    }
}

/// Build the page payload for the node group list.
pub async fn node_group_list_page(pool: &DbPool, t: &Translator) -> NodeGroupListPage {
    NodeGroupListPage::new(load_node_group_list(pool).await, t)
}

/// Rendered node group list page.
#[utoipa::path(
    get,
    path = "/nodegroups",
    tag = "Node groups",
    responses(
        (status = 200, description = "HTML table of node groups", body = String, content_type = "text/html")
    )
)]
#[get("/nodegroups")]
pub async fn node_group_list_html(
    pool: web::Data<DbPool>,
    translator: web::Data<Translator>,
) -> HttpResponse {
    let page = node_group_list_page(&pool, &translator).await;
    let rendered = views::render(&page, &translator);

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(rendered.html)
}

/// Node group list payload as JSON.
#[utoipa::path(
    get,
    path = "/api/v1/nodegroups",
    tag = "Node groups",
    responses(
        (status = 200, description = "Node groups with totals", body = NodeGroupListPage)
    )
)]
#[get("/nodegroups")]
pub async fn node_group_list_json(
    pool: web::Data<DbPool>,
    translator: web::Data<Translator>,
) -> HttpResponse {
    HttpResponse::Ok().json(node_group_list_page(&pool, &translator).await)
}

/// Configure the HTML page route (mounted at the root scope).
pub fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(node_group_list_html);
}

/// Configure the JSON route (mounted under `/api/v1`).
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(node_group_list_json);
}
