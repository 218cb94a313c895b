//! Upgrade runner tests.
//!
//! SQLite runs the real statements (including transactional DDL, so a failed
//! step must leave no trace); the mock backend records the PostgreSQL
//! statement sequence.

use lms_admin_lib::db::dbinfo;
use lms_admin_lib::entity::{assignment, dbinfo as dbinfo_entity};
use lms_admin_lib::error::AppError;
use lms_admin_lib::upgrade::{self, AssignmentNodeId, BASELINE_DB_VERSION, DBVERSION_KEY};
use lms_admin_lib::upgrade::UpgradeStep;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseTransaction, DbBackend, DbErr, EntityTrait,
    MockDatabase, MockExecResult, PaginatorTrait, QueryFilter, Value,
};

use crate::helpers::{sqlite_columns, sqlite_indexes, sqlite_pool};

async fn seed_assignments(pool: &lms_admin_lib::db::DbPool) {
    pool.connection()
        .execute_unprepared(
            "INSERT INTO assignments (tariffid, customerid) VALUES (1, 10), (2, 11), (3, 10)",
        )
        .await
        .expect("Failed to seed assignments");
}

#[tokio::test]
async fn test_baseline_starts_before_upgrade() {
    let pool = sqlite_pool().await;

    let version = upgrade::current_db_version(pool.connection()).await.unwrap();
    assert_eq!(version, BASELINE_DB_VERSION);
    assert!(!sqlite_columns(&pool, "assignments").await.contains(&"nodeid".to_string()));
}

#[tokio::test]
async fn test_baseline_migration_is_idempotent() {
    let pool = sqlite_pool().await;
    pool.run_migrations().await.unwrap();

    let rows = dbinfo_entity::Entity::find()
        .filter(dbinfo_entity::Column::Keytype.eq(DBVERSION_KEY))
        .count(pool.connection())
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[tokio::test]
async fn test_upgrade_adds_nodeid_and_indexes() {
    let pool = sqlite_pool().await;
    seed_assignments(&pool).await;

    let applied = pool.run_upgrades().await.unwrap();
    assert_eq!(applied, vec!["2006082300"]);

    // Existing rows are backfilled with 0.
    let rows = assignment::Entity::find()
        .all(pool.connection())
        .await
        .unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.nodeid == 0));

    // New rows get the default.
    pool.connection()
        .execute_unprepared("INSERT INTO assignments (tariffid, customerid) VALUES (4, 12)")
        .await
        .unwrap();
    let fresh = assignment::Entity::find()
        .filter(assignment::Column::Customerid.eq(12))
        .one(pool.connection())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fresh.nodeid, 0);

    // NULL is rejected.
    let null_insert = pool
        .connection()
        .execute_unprepared(
            "INSERT INTO assignments (tariffid, customerid, nodeid) VALUES (5, 13, NULL)",
        )
        .await;
    assert!(null_insert.is_err());

    let indexes = sqlite_indexes(&pool, "assignments").await;
    assert!(indexes.contains(&"assignments_nodeid_idx".to_string()));
    assert!(indexes.contains(&"assignments_customerid_idx".to_string()));

    let markers = dbinfo_entity::Entity::find()
        .filter(dbinfo_entity::Column::Keytype.eq(DBVERSION_KEY))
        .all(pool.connection())
        .await
        .unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].keyvalue, "2006082300");
}

#[tokio::test]
async fn test_upgrade_runs_once() {
    let pool = sqlite_pool().await;

    assert_eq!(pool.run_upgrades().await.unwrap(), vec!["2006082300"]);
    assert!(pool.run_upgrades().await.unwrap().is_empty());
    assert_eq!(
        dbinfo::get_db_version(pool.connection()).await.unwrap(),
        Some("2006082300".to_string())
    );
}

#[tokio::test]
async fn test_failed_index_rolls_back_everything() {
    let pool = sqlite_pool().await;
    seed_assignments(&pool).await;

    // Make the customerid index creation fail.
    pool.connection()
        .execute_unprepared("CREATE INDEX assignments_customerid_idx ON assignments (customerid)")
        .await
        .unwrap();

    let err = pool.run_upgrades().await.unwrap_err();
    match err {
        AppError::Upgrade { version, .. } => assert_eq!(version, "2006082300"),
        other => panic!("expected upgrade error, got {:?}", other),
    }

    assert!(!sqlite_columns(&pool, "assignments").await.contains(&"nodeid".to_string()));
    assert!(
        !sqlite_indexes(&pool, "assignments")
            .await
            .contains(&"assignments_nodeid_idx".to_string())
    );
    assert_eq!(
        dbinfo::get_db_version(pool.connection()).await.unwrap(),
        Some(BASELINE_DB_VERSION.to_string())
    );
}

/// Adds a column, then removes the version marker the runner is about to update.
struct DropsVersionMarker;

#[async_trait::async_trait]
impl UpgradeStep for DropsVersionMarker {
    fn version(&self) -> &'static str {
        "2006090100"
    }

    fn description(&self) -> &'static str {
        "add assignments.note and drop the dbversion row"
    }

    async fn up(&self, txn: &DatabaseTransaction) -> Result<(), DbErr> {
        txn.execute_unprepared("ALTER TABLE assignments ADD COLUMN note TEXT")
            .await?;
        dbinfo_entity::Entity::delete_many().exec(txn).await?;
        Ok(())
    }
}

#[tokio::test]
async fn test_vanished_version_marker_rolls_back() {
    let pool = sqlite_pool().await;

    let err = upgrade::apply_upgrade(pool.connection(), &DropsVersionMarker)
        .await
        .unwrap_err();
    match err {
        AppError::Upgrade { version, source } => {
            assert_eq!(version, "2006090100");
            assert!(matches!(source, DbErr::RecordNotUpdated));
        }
        other => panic!("expected upgrade error, got {:?}", other),
    }

    assert!(!sqlite_columns(&pool, "assignments").await.contains(&"note".to_string()));
    assert_eq!(
        dbinfo::get_db_version(pool.connection()).await.unwrap(),
        Some(BASELINE_DB_VERSION.to_string())
    );
}

#[tokio::test]
async fn test_missing_version_marker() {
    let pool = sqlite_pool().await;
    dbinfo_entity::Entity::delete_many()
        .exec(pool.connection())
        .await
        .unwrap();

    let err = pool.run_upgrades().await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_postgres_statement_sequence() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_exec_results((0..7).map(|_| MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }))
        .into_connection();

    upgrade::apply_upgrade(&db, &AssignmentNodeId).await.unwrap();

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let stmts = log[0].statements();
    let sql: Vec<&str> = stmts.iter().map(|s| s.sql.as_str()).collect();

    assert_eq!(
        &sql[..7],
        &[
            "BEGIN",
            "ALTER TABLE assignments ADD COLUMN nodeid integer",
            "UPDATE assignments SET nodeid = 0",
            "ALTER TABLE assignments ALTER COLUMN nodeid SET NOT NULL",
            "ALTER TABLE assignments ALTER COLUMN nodeid SET DEFAULT 0",
            "CREATE INDEX assignments_nodeid_idx ON assignments (nodeid)",
            "CREATE INDEX assignments_customerid_idx ON assignments (customerid)",
        ]
    );
    assert_eq!(sql.len(), 9);
    assert_eq!(sql[8], "COMMIT");

    // The version marker is written with bound parameters only.
    let update = &stmts[7];
    assert!(update.sql.starts_with(r#"UPDATE "dbinfo" SET "keyvalue" = $1"#));
    assert!(!update.sql.contains("2006082300"));
    assert!(!update.sql.contains(DBVERSION_KEY));
    let values = update.values.as_ref().expect("bound values");
    assert_eq!(
        values.0,
        vec![Value::from("2006082300"), Value::from(DBVERSION_KEY)]
    );
}

#[tokio::test]
async fn test_postgres_failure_rolls_back() {
    let db = MockDatabase::new(DbBackend::Postgres)
        .append_exec_results((0..4).map(|_| MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }))
        .append_exec_errors([DbErr::Custom("index creation failed".to_string())])
        .into_connection();

    let err = upgrade::apply_upgrade(&db, &AssignmentNodeId)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("index creation failed"));

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let sql: Vec<&str> = log[0].statements().iter().map(|s| s.sql.as_str()).collect();

    assert_eq!(sql.first(), Some(&"BEGIN"));
    assert_eq!(sql.last(), Some(&"ROLLBACK"));
    assert!(!sql.contains(&"COMMIT"));
    assert!(!sql.iter().any(|s| s.contains("dbinfo")));
}
