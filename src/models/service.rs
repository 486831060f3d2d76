use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// A monitored system that can raise incidents
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "openduty_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub retry: Option<i32>,
    pub policy_id: Option<i32>,
    /// Minutes before an unacknowledged incident escalates
    pub escalate_after: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::schedule_policy::Entity",
        from = "Column::PolicyId",
        to = "super::schedule_policy::Column::Id",
        on_delete = "SetNull"
    )]
    Policy,
    #[sea_orm(has_many = "super::event_log::Entity")]
    EventLogs,
    #[sea_orm(has_many = "super::incident::Entity")]
    Incidents,
    #[sea_orm(has_many = "super::service_token::Entity")]
    ServiceTokens,
}

impl Related<super::schedule_policy::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Policy.def()
    }
}

impl Related<super::event_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventLogs.def()
    }
}

impl Related<super::incident::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Incidents.def()
    }
}

impl Related<super::service_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceTokens.def()
    }
}

impl Related<super::token::Entity> for Entity {
    fn to() -> RelationDef {
        super::service_token::Relation::Token.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::service_token::Relation::Service.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.id.is_not_set() {
            self.id = Set(Uuid::new_v4());
        }
        Ok(self)
    }
}

impl Model {
    pub fn escalate_after_duration(&self) -> Option<chrono::Duration> {
        self.escalate_after
            .map(|minutes| chrono::Duration::minutes(i64::from(minutes)))
    }
}
