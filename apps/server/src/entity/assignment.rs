//! Tariff assignment entity.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub tariffid: i32,
    pub customerid: i32,
    pub period: i16,
    pub at: i32,
    pub datefrom: i32,
    pub dateto: i32,
    pub suspended: i16,
    /// Added by upgrade 2006082300; 0 means the assignment is not bound to a node.
    pub nodeid: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
