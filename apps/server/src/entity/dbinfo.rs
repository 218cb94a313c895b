//! Key-value metadata table; holds the `dbversion` marker.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dbinfo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub keytype: String,
    pub keyvalue: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
