//! Alert transport
//!
//! CRUD calls against the alert collection endpoint. List responses arrive in
//! one of three envelope shapes depending on the deployment; they normalize
//! through the explicit [`ListEnvelope`] union. The transport forwards the
//! payload it is given and never decides between the role-dependent shapes.

use serde::{Deserialize, Serialize};

use super::client::{ApiClient, ApiError};
use super::endpoints;
use crate::types::{Alert, AlertStatus};

/// The wrapper shape a list endpoint uses around its payload array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope {
    Data { data: Vec<Alert> },
    Results { results: Vec<Alert> },
    Bare(Vec<Alert>),
}

impl ListEnvelope {
    pub fn into_alerts(self) -> Vec<Alert> {
        match self {
            ListEnvelope::Data { data } => data,
            ListEnvelope::Results { results } => results,
            ListEnvelope::Bare(alerts) => alerts,
        }
    }
}

/// Create payload; shape depends on whether the caller is authenticated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AlertPayload {
    Anonymous {
        name: String,
        phone: String,
        latitude: f64,
        longitude: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Authenticated {
        user_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        emergency_contact_phone: Option<String>,
        latitude: f64,
        longitude: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

pub async fn list_alerts() -> Result<Vec<Alert>, ApiError> {
    let envelope: ListEnvelope = ApiClient::new().get_json(&endpoints::alerts_list()).await?;
    Ok(envelope.into_alerts())
}

pub async fn create_alert(payload: &AlertPayload) -> Result<Alert, ApiError> {
    ApiClient::new()
        .post_json(&endpoints::alert_create(), payload)
        .await
}

pub async fn update_status(id: i64, status: AlertStatus) -> Result<Alert, ApiError> {
    #[derive(Serialize)]
    struct Body {
        status: AlertStatus,
    }

    ApiClient::new()
        .patch_json(&endpoints::alert_detail(id), &Body { status })
        .await
}

pub async fn delete_alert(id: i64) -> Result<(), ApiError> {
    ApiClient::new().delete(&endpoints::alert_detail(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALERT: &str = r#"{"id":1,"name":"Jane","phone":"9876543210",
        "latitude":12.9,"longitude":77.6,"status":"PENDING",
        "timestamp":"2024-05-01T10:00:00Z"}"#;

    #[test]
    fn data_envelope_normalizes() {
        let env: ListEnvelope =
            serde_json::from_str(&format!(r#"{{"data":[{ALERT}]}}"#)).unwrap();
        assert_eq!(env.into_alerts().len(), 1);
    }

    #[test]
    fn results_envelope_normalizes() {
        let env: ListEnvelope =
            serde_json::from_str(&format!(r#"{{"results":[{ALERT}]}}"#)).unwrap();
        assert_eq!(env.into_alerts().len(), 1);
    }

    #[test]
    fn bare_array_normalizes() {
        let env: ListEnvelope = serde_json::from_str(&format!("[{ALERT}]")).unwrap();
        let alerts = env.into_alerts();
        assert_eq!(alerts[0].id, 1);
    }

    #[test]
    fn envelopes_preserve_order() {
        let second = ALERT.replace("\"id\":1", "\"id\":2");
        let env: ListEnvelope =
            serde_json::from_str(&format!(r#"{{"results":[{ALERT},{second}]}}"#)).unwrap();
        let ids: Vec<i64> = env.into_alerts().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn anonymous_payload_shape() {
        let payload = AlertPayload::Anonymous {
            name: "Jane".to_string(),
            phone: "9876543210".to_string(),
            latitude: 12.9,
            longitude: 77.6,
            message: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Jane");
        assert!(json.get("user_id").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn authenticated_payload_shape() {
        let payload = AlertPayload::Authenticated {
            user_id: 42,
            emergency_contact_phone: Some("9123456780".to_string()),
            latitude: 12.9,
            longitude: 77.6,
            message: Some("help".to_string()),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["user_id"], 42);
        assert_eq!(json["emergency_contact_phone"], "9123456780");
        assert!(json.get("name").is_none());
    }
}
