//! LMS database upgrades keyed by `dbinfo.dbversion`.
//!
//! Each step carries a date-coded version (`YYYYMMDDNN`). Pending steps are
//! applied in increasing version order, one transaction per step; the new
//! version is written inside that same transaction so a failed step leaves
//! both the schema and the marker untouched.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tracing::{error, info};

use crate::db::dbinfo;
use crate::error::{AppError, AppResult};

mod u2006082300_assignment_nodeid;

pub use u2006082300_assignment_nodeid::AssignmentNodeId;

/// `dbinfo.keytype` of the version marker row.
pub const DBVERSION_KEY: &str = "dbversion";

/// Version written by the baseline schema migration.
pub const BASELINE_DB_VERSION: &str = "2006081000";

/// A single forward-only schema change.
#[async_trait::async_trait]
pub trait UpgradeStep: Send + Sync {
    /// Date-coded version this step brings the database to.
    fn version(&self) -> &'static str;

    /// Short human-readable summary, used in logs and `lms-upgrade status`.
    fn description(&self) -> &'static str;

    /// Apply the schema change. The caller owns the transaction.
    async fn up(&self, txn: &DatabaseTransaction) -> Result<(), DbErr>;
}

/// All known upgrade steps, oldest first.
pub fn upgrades() -> Vec<Box<dyn UpgradeStep>> {
    vec![Box::new(AssignmentNodeId)]
}

/// Parse a date-coded version for ordering.
pub fn parse_version(version: &str) -> AppResult<u64> {
    version
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::InvalidInput(format!("Invalid database version: {}", version)))
}

/// Read the current database version.
pub async fn current_db_version(conn: &DatabaseConnection) -> AppResult<String> {
    dbinfo::get_db_version(conn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to read dbversion: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("dbinfo {}", DBVERSION_KEY)))
}

/// Steps newer than `current`, in the order they must be applied.
pub fn pending_upgrades(current: &str) -> AppResult<Vec<Box<dyn UpgradeStep>>> {
    select_pending(upgrades(), current)
}

/// Keep the steps newer than `current`, ordered by numeric version.
fn select_pending(
    steps: Vec<Box<dyn UpgradeStep>>,
    current: &str,
) -> AppResult<Vec<Box<dyn UpgradeStep>>> {
    let current = parse_version(current)?;

    let mut pending = Vec::new();
    for step in steps {
        let version = parse_version(step.version())?;
        if version > current {
            pending.push((version, step));
        }
    }
    pending.sort_by_key(|(version, _)| *version);

    Ok(pending.into_iter().map(|(_, step)| step).collect())
}

/// Apply one step and record its version, atomically.
pub async fn apply_upgrade(conn: &DatabaseConnection, step: &dyn UpgradeStep) -> AppResult<()> {
    let version = step.version();
    let fail = |source: DbErr| AppError::Upgrade {
        version: version.to_string(),
        source,
    };

    info!(version = %version, "Applying upgrade: {}", step.description());

    let txn = conn.begin().await.map_err(fail)?;

    let applied = match step.up(&txn).await {
        Ok(()) => dbinfo::set_db_version(&txn, version).await,
        Err(e) => Err(e),
    };

    if let Err(e) = applied {
        error!(version = %version, "Upgrade failed, rolling back: {}", e);
        if let Err(rollback_err) = txn.rollback().await {
            error!(version = %version, "Rollback failed: {}", rollback_err);
        }
        return Err(fail(e));
    }

    txn.commit().await.map_err(fail)?;

    info!(version = %version, "Upgrade applied successfully");
    Ok(())
}

/// Apply every pending step, stopping at the first failure.
///
/// Returns the versions applied by this call. Concurrent runners against the
/// same database are not guarded against.
pub async fn run_upgrades(conn: &DatabaseConnection) -> AppResult<Vec<&'static str>> {
    let current = current_db_version(conn).await?;
    info!("Current database version: {}", current);

    let pending = pending_upgrades(&current)?;
    if pending.is_empty() {
        info!("No pending upgrades");
        return Ok(Vec::new());
    }

    info!("{} upgrade(s) pending", pending.len());

    let mut applied = Vec::with_capacity(pending.len());
    for step in &pending {
        apply_upgrade(conn, step.as_ref()).await?;
        applied.push(step.version());
    }

    Ok(applied)
}
