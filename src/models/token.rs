use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::services::security::generate_token_key;

/// Opaque bearer credential used by monitored services to authenticate
/// inbound events.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "openduty_token")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub created: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::service_token::Entity")]
    ServiceTokens,
}

impl Related<super::service_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceTokens.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        super::service_token::Relation::Service.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::service_token::Relation::Token.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            let has_key = match &self.key {
                ActiveValue::Set(key) | ActiveValue::Unchanged(key) => !key.is_empty(),
                ActiveValue::NotSet => false,
            };
            if !has_key {
                let key = generate_token_key().map_err(|e| DbErr::Custom(e.to_string()))?;
                self.key = Set(key);
            }
            if self.created.is_not_set() {
                self.created = Set(chrono::Utc::now());
            }
        }
        Ok(self)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
