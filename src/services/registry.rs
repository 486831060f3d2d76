//! Monitored services, their tokens, raw event log and incident events.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;
use validator::Validate;

use crate::db::DbConn;
use crate::error::{AppError, Result};
use crate::models::incident::EventType;
use crate::models::prelude::*;
use crate::models::{event_log, incident, service, service_token, token};
use crate::schemas::registry::{CreateService, IssueToken, IssuedToken, NewIncident};

// ============================================================================
// Services
// ============================================================================

/// Register a new monitored service
pub async fn create_service(db: &DbConn, req: CreateService) -> Result<service::Model> {
    req.validate()?;

    if let Some(policy_id) = req.policy_id {
        ensure_policy_exists(db, policy_id).await?;
    }

    let new_service = service::ActiveModel {
        name: Set(req.name),
        retry: Set(req.retry),
        policy_id: Set(req.policy_id),
        escalate_after: Set(req.escalate_after),
        ..Default::default()
    };

    let created = new_service.insert(db).await?;
    tracing::info!("Registered service {} ({})", created.name, created.id);
    Ok(created)
}

pub async fn get_service(db: &DbConn, id: Uuid) -> Result<service::Model> {
    Service::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
}

pub async fn find_service_by_name(db: &DbConn, name: &str) -> Result<Option<service::Model>> {
    let found = Service::find()
        .filter(service::Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(found)
}

async fn ensure_policy_exists(db: &DbConn, policy_id: i32) -> Result<()> {
    SchedulePolicy::find_by_id(policy_id)
        .one(db)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(format!("Schedule policy {} not found", policy_id)))
}

// ============================================================================
// Tokens
// ============================================================================

/// Generate a token and attach it to a service under a display name
pub async fn issue_token(db: &DbConn, service_id: Uuid, req: IssueToken) -> Result<IssuedToken> {
    req.validate()?;
    get_service(db, service_id).await?;

    let txn = db.begin().await?;

    let token = <token::ActiveModel as Default>::default().insert(&txn).await?;
    let link = service_token::ActiveModel {
        name: Set(req.name),
        service_id: Set(service_id),
        token_id: Set(token.key.clone()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    tracing::info!("Issued token '{}' for service {}", link.name, service_id);

    Ok(IssuedToken {
        link_id: link.id,
        name: link.name,
        key: token.key,
        service_id,
        created: token.created,
    })
}

/// Resolve the service a bearer token belongs to
pub async fn service_for_token(db: &DbConn, key: &str) -> Result<Option<service::Model>> {
    let found = ServiceToken::find()
        .filter(service_token::Column::TokenId.eq(key))
        .find_also_related(Service)
        .one(db)
        .await?;

    Ok(found.and_then(|(_, service)| service))
}

pub async fn list_service_tokens(
    db: &DbConn,
    service_id: Uuid,
) -> Result<Vec<service_token::Model>> {
    let tokens = ServiceToken::find()
        .filter(service_token::Column::ServiceId.eq(service_id))
        .order_by_asc(service_token::Column::Id)
        .all(db)
        .await?;
    Ok(tokens)
}

// ============================================================================
// Event log
// ============================================================================

/// Append a raw inbound event to a service's log
pub async fn log_event(
    db: &DbConn,
    service_id: Uuid,
    data: &str,
    occurred_at: Option<chrono::DateTime<Utc>>,
) -> Result<event_log::Model> {
    get_service(db, service_id).await?;

    let entry = event_log::ActiveModel {
        service_key_id: Set(service_id),
        data: Set(data.to_string()),
        occurred_at: Set(occurred_at.unwrap_or_else(Utc::now)),
        ..Default::default()
    };

    let created = entry.insert(db).await?;
    Ok(created)
}

/// Events for a service, oldest first
pub async fn list_events(db: &DbConn, service_id: Uuid) -> Result<Vec<event_log::Model>> {
    let events = EventLog::find()
        .filter(event_log::Column::ServiceKeyId.eq(service_id))
        .order_by_asc(event_log::Column::OccurredAt)
        .order_by_asc(event_log::Column::Id)
        .all(db)
        .await?;
    Ok(events)
}

// ============================================================================
// Incidents
// ============================================================================

/// Validate and store an incident event.
///
/// Unknown event types are rejected before anything is written. A second
/// event for the same (service, incident key) pair is a conflict.
pub async fn record_incident(db: &DbConn, req: NewIncident) -> Result<incident::Model> {
    req.validate()?;
    let event_type: EventType = req.event_type.parse()?;

    get_service(db, req.service_key).await?;

    let new_incident = incident::ActiveModel {
        service_key_id: Set(req.service_key),
        incident_key: Set(req.incident_key),
        event_type: Set(event_type),
        description: Set(req.description),
        details: Set(req.details),
        occurred_at: Set(req.occurred_at.unwrap_or_else(Utc::now)),
        ..Default::default()
    };

    let created = new_incident.insert(db).await?;
    tracing::info!(
        "Recorded {} for incident {} on service {}",
        created.event_type,
        created.incident_key,
        created.service_key_id
    );
    Ok(created)
}

pub async fn find_incident(
    db: &DbConn,
    service_key: Uuid,
    incident_key: &str,
) -> Result<Option<incident::Model>> {
    let found = Incident::find()
        .filter(incident::Column::ServiceKeyId.eq(service_key))
        .filter(incident::Column::IncidentKey.eq(incident_key))
        .one(db)
        .await?;
    Ok(found)
}
