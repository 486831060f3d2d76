use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateService {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(range(min = 0))]
    pub retry: Option<i32>,
    #[validate(range(min = 0))]
    pub escalate_after: Option<i32>,
    pub policy_id: Option<i32>,
}

impl CreateService {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            retry: None,
            escalate_after: None,
            policy_id: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueToken {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
}

/// A token freshly attached to a service
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub link_id: i32,
    pub name: String,
    pub key: String,
    pub service_id: Uuid,
    pub created: DateTime<Utc>,
}

/// Inbound incident event as received from a monitored service.
///
/// `event_type` stays a raw string here; it is checked when the event is
/// recorded.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewIncident {
    pub service_key: Uuid,
    #[validate(length(min = 1, max = 80))]
    pub incident_key: String,
    pub event_type: String,
    #[validate(length(max = 100))]
    pub description: String,
    #[serde(default)]
    pub details: String,
    pub occurred_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_service_validation() {
        assert!(CreateService::named("web").validate().is_ok());
        assert!(CreateService::named("").validate().is_err());
        assert!(CreateService::named(&"s".repeat(81)).validate().is_err());
    }

    #[test]
    fn test_create_service_rejects_negative_retry() {
        let req = CreateService {
            retry: Some(-1),
            ..CreateService::named("web")
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_new_incident_deserialize() {
        let json = r#"{
            "service_key": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "incident_key": "disk-full",
            "event_type": "trigger",
            "description": "Disk is full"
        }"#;
        let incident: NewIncident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.incident_key, "disk-full");
        assert_eq!(incident.event_type, "trigger");
        assert!(incident.details.is_empty());
        assert!(incident.occurred_at.is_none());
        assert!(incident.validate().is_ok());
    }

    #[test]
    fn test_new_incident_rejects_long_description() {
        let incident = NewIncident {
            service_key: Uuid::new_v4(),
            incident_key: "k".to_string(),
            event_type: "trigger".to_string(),
            description: "d".repeat(101),
            details: String::new(),
            occurred_at: None,
        };
        assert!(incident.validate().is_err());
    }
}
