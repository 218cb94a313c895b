//! Create the baseline LMS tables for a fresh database.
//!
//! Mirrors the schema as it stood before upgrade 2006082300: `assignments`
//! has no `nodeid` column yet. Every table is created with `IF NOT EXISTS`,
//! so running against an existing installation leaves it untouched.

use sea_orm::{ActiveValue::Set, EntityTrait};
use sea_orm_migration::prelude::*;

use crate::entity::dbinfo;
use crate::upgrade::{BASELINE_DB_VERSION, DBVERSION_KEY};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DbInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DbInfo::Keytype)
                            .string_len(255)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DbInfo::Keyvalue)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::Tariffid)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Assignments::Customerid).integer().not_null())
                    .col(
                        ColumnDef::new(Assignments::Period)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Assignments::At).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Assignments::Datefrom)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Assignments::Dateto)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Assignments::Suspended)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NodeGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NodeGroups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NodeGroups::Name)
                            .string_len(255)
                            .not_null()
                            .default("")
                            .unique_key(),
                    )
                    .col(ColumnDef::new(NodeGroups::Prio).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(NodeGroups::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(NodeGroupAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NodeGroupAssignments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(NodeGroupAssignments::Nodegroupid)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(NodeGroupAssignments::Nodeid)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("nodegroupassignments_nodeid_key")
                    .table(NodeGroupAssignments::Table)
                    .col(NodeGroupAssignments::Nodeid)
                    .col(NodeGroupAssignments::Nodegroupid)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Seed the version marker only when the row is missing.
        let conn = manager.get_connection();
        if dbinfo::Entity::find_by_id(DBVERSION_KEY.to_string())
            .one(conn)
            .await?
            .is_none()
        {
            dbinfo::Entity::insert(dbinfo::ActiveModel {
                keytype: Set(DBVERSION_KEY.to_string()),
                keyvalue: Set(BASELINE_DB_VERSION.to_string()),
            })
            .exec_without_returning(conn)
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NodeGroupAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(NodeGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DbInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DbInfo {
    #[sea_orm(iden = "dbinfo")]
    Table,
    Keytype,
    Keyvalue,
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    Id,
    Tariffid,
    Customerid,
    Period,
    At,
    Datefrom,
    Dateto,
    Suspended,
}

#[derive(DeriveIden)]
enum NodeGroups {
    #[sea_orm(iden = "nodegroups")]
    Table,
    Id,
    Name,
    Prio,
    Description,
}

#[derive(DeriveIden)]
enum NodeGroupAssignments {
    #[sea_orm(iden = "nodegroupassignments")]
    Table,
    Id,
    Nodegroupid,
    Nodeid,
}
