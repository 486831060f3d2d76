use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// On-call calendar referenced by schedule rules
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedule_calendar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::schedule_policy_rule::Entity")]
    SchedulePolicyRules,
}

impl Related<super::schedule_policy_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchedulePolicyRules.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
