use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use validator::Validate;

use crate::db::DbConn;
use crate::error::{AppError, Result};
use crate::models::prelude::*;
use crate::models::{calendar, calendar_source};
use crate::schemas::calendar::{CreateCalendar, CreateCalendarSource};

pub async fn create_calendar(db: &DbConn, req: CreateCalendar) -> Result<calendar::Model> {
    req.validate()?;

    let created = calendar::ActiveModel {
        name: Set(req.name),
        slug: Set(req.slug),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(created)
}

pub async fn create_calendar_source(
    db: &DbConn,
    req: CreateCalendarSource,
) -> Result<calendar_source::Model> {
    req.validate()?;

    let credentials = req.oauth2_credentials.map(|c| c.to_string());

    let created = calendar_source::ActiveModel {
        name: Set(req.name),
        oauth2_credentials: Set(credentials),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!("Added calendar source {}", created.name);
    Ok(created)
}

pub async fn find_calendar_source(
    db: &DbConn,
    name: &str,
) -> Result<Option<calendar_source::Model>> {
    let found = CalendarSource::find()
        .filter(calendar_source::Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(found)
}

/// Replace the stored OAuth2 credentials of a calendar source
pub async fn update_calendar_credentials(
    db: &DbConn,
    id: i32,
    credentials: serde_json::Value,
) -> Result<calendar_source::Model> {
    let source = CalendarSource::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Calendar source {} not found", id)))?;

    let mut active: calendar_source::ActiveModel = source.into();
    active.oauth2_credentials = Set(Some(credentials.to_string()));
    let updated = active.update(db).await?;
    Ok(updated)
}

/// Decode stored credentials; `None` when the source has none yet
pub fn calendar_credentials(
    source: &calendar_source::Model,
) -> Result<Option<serde_json::Value>> {
    source
        .oauth2_credentials
        .as_deref()
        .map(|raw| {
            serde_json::from_str(raw).map_err(|e| {
                AppError::Internal(format!(
                    "Stored credentials for {} are not valid JSON: {}",
                    source.name, e
                ))
            })
        })
        .transpose()
}
