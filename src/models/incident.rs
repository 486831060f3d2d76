use std::str::FromStr;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Lifecycle event carried by an incident row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(15))")]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[sea_orm(string_value = "trigger")]
    Trigger,
    #[sea_orm(string_value = "acknowledge")]
    Acknowledge,
    #[sea_orm(string_value = "resolve")]
    Resolve,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Trigger, EventType::Acknowledge, EventType::Resolve];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Trigger => "trigger",
            EventType::Acknowledge => "acknowledge",
            EventType::Resolve => "resolve",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trigger" => Ok(EventType::Trigger),
            "acknowledge" => Ok(EventType::Acknowledge),
            "resolve" => Ok(EventType::Resolve),
            other => Err(AppError::Validation(format!(
                "'{}' is an invalid event type, valid values are 'trigger', 'acknowledge' and 'resolve'",
                other
            ))),
        }
    }
}

/// One trigger/acknowledge/resolve event for an incident key
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "openduty_incident")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_key_id: Uuid,
    pub incident_key: String,
    pub event_type: EventType,
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub occurred_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::ServiceKeyId",
        to = "super::service::Column::Id",
        on_delete = "Cascade"
    )]
    Service,
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
