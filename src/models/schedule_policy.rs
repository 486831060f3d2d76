use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Named, repeatable escalation chain
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "openduty_schedulepolicy")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// How many extra passes through the rule list before giving up
    pub repeat_times: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::schedule_policy_rule::Entity")]
    Rules,
    #[sea_orm(has_many = "super::service::Entity")]
    Services,
}

impl Related<super::schedule_policy_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rules.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Services.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
