//! Upgrade 2006082300: bind assignments to nodes.
//!
//! Adds `assignments.nodeid` (integer, not null, default 0, existing rows
//! backfilled with 0) plus lookup indexes on `nodeid` and `customerid`.

use sea_orm::{ConnectionTrait, DatabaseTransaction, DbBackend, DbErr};
use tracing::debug;

use super::UpgradeStep;

/// PostgreSQL: the column starts nullable, is backfilled, then tightened.
const POSTGRES: &[&str] = &[
    "ALTER TABLE assignments ADD COLUMN nodeid integer",
    "UPDATE assignments SET nodeid = 0",
    "ALTER TABLE assignments ALTER COLUMN nodeid SET NOT NULL",
    "ALTER TABLE assignments ALTER COLUMN nodeid SET DEFAULT 0",
    "CREATE INDEX assignments_nodeid_idx ON assignments (nodeid)",
    "CREATE INDEX assignments_customerid_idx ON assignments (customerid)",
];

/// MySQL commits DDL implicitly, so a failure here can leave earlier
/// statements applied.
const MYSQL: &[&str] = &[
    "ALTER TABLE assignments ADD nodeid int(11) NOT NULL DEFAULT 0",
    "CREATE INDEX assignments_nodeid_idx ON assignments (nodeid)",
    "CREATE INDEX assignments_customerid_idx ON assignments (customerid)",
];

/// SQLite cannot alter a column after the fact; adding it with a default
/// fills existing rows.
const SQLITE: &[&str] = &[
    "ALTER TABLE assignments ADD COLUMN nodeid INTEGER NOT NULL DEFAULT 0",
    "CREATE INDEX assignments_nodeid_idx ON assignments (nodeid)",
    "CREATE INDEX assignments_customerid_idx ON assignments (customerid)",
];

pub struct AssignmentNodeId;

impl AssignmentNodeId {
    /// Statements for `backend`, in execution order.
    pub fn statements(backend: DbBackend) -> &'static [&'static str] {
        if backend == DbBackend::Postgres {
            POSTGRES
        } else if backend == DbBackend::MySql {
            MYSQL
        } else {
            SQLITE
        }
    }
}

#[async_trait::async_trait]
impl UpgradeStep for AssignmentNodeId {
    fn version(&self) -> &'static str {
        "2006082300"
    }

    fn description(&self) -> &'static str {
        "add assignments.nodeid with nodeid and customerid indexes"
    }

    async fn up(&self, txn: &DatabaseTransaction) -> Result<(), DbErr> {
        for sql in Self::statements(txn.get_database_backend()) {
            debug!("{}", sql);
            txn.execute_unprepared(sql).await?;
        }
        Ok(())
    }
}
