//! Database queries for node groups.

use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder, QuerySelect};

use crate::entity::nodegroup;
use crate::error::{AppError, AppResult};
use crate::models::{NodeGroupList, NodeGroupRow};

use super::DbPool;

/// Correlated count of the nodes assigned to the outer `nodegroups` row.
const NODESCOUNT: &str = "(SELECT COUNT(*) FROM nodegroupassignments \
     WHERE nodegroupassignments.nodegroupid = nodegroups.id)";

/// List every node group with its node count, ordered by priority then name.
pub async fn list_node_groups<C: ConnectionTrait>(conn: &C) -> AppResult<NodeGroupList> {
    let rows = nodegroup::Entity::find()
        .select_only()
        .column(nodegroup::Column::Id)
        .column(nodegroup::Column::Name)
        .column(nodegroup::Column::Description)
        .column(nodegroup::Column::Prio)
        .column_as(Expr::cust(NODESCOUNT), "nodescount")
        .order_by_asc(nodegroup::Column::Prio)
        .order_by_asc(nodegroup::Column::Name)
        .into_model::<NodeGroupRow>()
        .all(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list node groups: {}", e)))?;

    Ok(NodeGroupList::from_rows(rows))
}

impl DbPool {
    /// List node groups with totals.
    pub async fn list_node_groups(&self) -> AppResult<NodeGroupList> {
        list_node_groups(self.connection()).await
    }
}
