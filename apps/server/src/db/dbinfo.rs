//! Access to the `dbinfo` key-value table.
//!
//! The `dbversion` row records the last applied upgrade step.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use tracing::debug;

use crate::entity::dbinfo;
use crate::upgrade::DBVERSION_KEY;

/// Read the stored database version, `None` when the marker row is missing.
pub async fn get_db_version<C: ConnectionTrait>(conn: &C) -> Result<Option<String>, DbErr> {
    let row = dbinfo::Entity::find()
        .filter(dbinfo::Column::Keytype.eq(DBVERSION_KEY))
        .one(conn)
        .await?;

    Ok(row.map(|r| r.keyvalue))
}

/// Overwrite the stored database version.
///
/// Both the key and the value travel as bound parameters.
pub async fn set_db_version<C: ConnectionTrait>(conn: &C, version: &str) -> Result<(), DbErr> {
    let result = dbinfo::Entity::update_many()
        .col_expr(dbinfo::Column::Keyvalue, Expr::value(version))
        .filter(dbinfo::Column::Keytype.eq(DBVERSION_KEY))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(DbErr::RecordNotUpdated);
    }

    debug!(version = %version, "dbinfo dbversion updated");
    Ok(())
}
