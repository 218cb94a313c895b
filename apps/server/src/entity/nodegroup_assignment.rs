//! Membership of a node in a node group.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "nodegroupassignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nodegroupid: i32,
    pub nodeid: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::nodegroup::Entity",
        from = "Column::Nodegroupid",
        to = "super::nodegroup::Column::Id",
        on_delete = "Cascade"
    )]
    NodeGroup,
}

impl Related<super::nodegroup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NodeGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
