//! Node group listing: ordered rows plus a separate summary.

use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

/// A node group with the number of nodes assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromQueryResult, ToSchema)]
pub struct NodeGroupRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub prio: i32,
    /// Count of `nodegroupassignments` rows pointing at this group.
    pub nodescount: i64,
}

/// Totals shown under the node group table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ListSummary {
    /// Number of groups.
    pub total: u64,
    /// Sum of `nodescount` over all groups.
    pub nodestotal: i64,
}

/// Result of the node group list query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeGroupList {
    /// Groups ordered by priority, then name.
    pub groups: Vec<NodeGroupRow>,
    pub summary: ListSummary,
}

impl NodeGroupList {
    /// Build the list from already ordered rows, computing the totals.
    pub fn from_rows(groups: Vec<NodeGroupRow>) -> Self {
        let summary = ListSummary {
            total: groups.len() as u64,
            nodestotal: groups.iter().map(|g| g.nodescount).sum(),
        };

        Self { groups, summary }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
