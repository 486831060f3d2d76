use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Platform user identity. Every insert provisions a matching
/// [`super::user_profile`] row on the same connection.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "auth_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(skip_serializing)]
    pub password: String,
    pub last_login: Option<DateTimeUtc>,
    pub is_superuser: bool,
    #[sea_orm(unique)]
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_profile::Entity")]
    Profile,
    #[sea_orm(has_many = "super::schedule_policy_rule::Entity")]
    SchedulePolicyRules,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::schedule_policy_rule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchedulePolicyRules.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn after_save<C>(model: Model, db: &C, insert: bool) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            super::user_profile::ActiveModel::for_user(model.id)
                .insert(db)
                .await?;
            tracing::debug!("Provisioned profile for user {}", model.username);
        }
        Ok(model)
    }
}
