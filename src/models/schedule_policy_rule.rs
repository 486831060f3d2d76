use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ordered step of a schedule policy. A rule pages either a single user or
/// whoever is on call in the referenced calendar.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "openduty_schedulepolicyrule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub schedule_policy_id: i32,
    pub position: i32,
    #[sea_orm(column_name = "user_id_id")]
    pub user_id: Option<i32>,
    #[sea_orm(column_name = "schedule_id")]
    pub calendar_id: Option<i32>,
    /// Minutes before the policy advances past this rule
    pub escalate_after: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schedule_policy::Entity",
        from = "Column::SchedulePolicyId",
        to = "super::schedule_policy::Column::Id",
        on_delete = "Cascade"
    )]
    SchedulePolicy,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::calendar::Entity",
        from = "Column::CalendarId",
        to = "super::calendar::Column::Id",
        on_delete = "SetNull"
    )]
    Calendar,
}

impl Related<super::schedule_policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchedulePolicy.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::calendar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Calendar.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
