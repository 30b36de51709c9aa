//! Type definitions for the SafeTrip REST API
//!
//! Shapes follow the Django backend contract: DRF token auth, integer ids,
//! decimal fields that may arrive as JSON strings.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Alert Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    Pending,
    InProgress,
    Resolved,
}

impl AlertStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Pending => "Pending",
            AlertStatus::InProgress => "In Progress",
            AlertStatus::Resolved => "Resolved",
        }
    }

    pub fn variants() -> &'static [AlertStatus] {
        &[
            AlertStatus::Pending,
            AlertStatus::InProgress,
            AlertStatus::Resolved,
        ]
    }

    /// Wire representation, as used in payloads and `<select>` values.
    pub fn code(&self) -> &'static str {
        match self {
            AlertStatus::Pending => "PENDING",
            AlertStatus::InProgress => "IN_PROGRESS",
            AlertStatus::Resolved => "RESOLVED",
        }
    }

    pub fn from_code(code: &str) -> Option<AlertStatus> {
        match code {
            "PENDING" => Some(AlertStatus::Pending),
            "IN_PROGRESS" => Some(AlertStatus::InProgress),
            "RESOLVED" => Some(AlertStatus::Resolved),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(deserialize_with = "de_f64_lenient")]
    pub latitude: f64,
    #[serde(deserialize_with = "de_f64_lenient")]
    pub longitude: f64,
    #[serde(default)]
    pub message: Option<String>,
    pub status: AlertStatus,
    pub timestamp: String,
}

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Authority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default, deserialize_with = "de_opt_f64_lenient")]
    pub height_cm: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64_lenient")]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

// ============================================================================
// Response Wrappers
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUserResponse {
    pub user: User,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Lenient deserializers (Django decimals serialize as strings)
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn de_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn de_opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrString>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_accepts_string_coordinates() {
        let alert: Alert = serde_json::from_str(
            r#"{"id":1,"name":"Jane","phone":"9876543210","latitude":"12.9716",
                "longitude":77.5946,"status":"PENDING","timestamp":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(alert.latitude, 12.9716);
        assert_eq!(alert.longitude, 77.5946);
        assert_eq!(alert.status, AlertStatus::Pending);
    }

    #[test]
    fn status_round_trips_screaming_snake_case() {
        let s: AlertStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(s, AlertStatus::InProgress);
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"IN_PROGRESS\"");
    }

    #[test]
    fn status_codes_round_trip() {
        for status in AlertStatus::variants() {
            assert_eq!(AlertStatus::from_code(status.code()), Some(*status));
        }
        assert_eq!(AlertStatus::from_code("bogus"), None);
    }

    #[test]
    fn user_defaults_to_user_role() {
        let user: User =
            serde_json::from_str(r#"{"id":7,"username":"demo"}"#).unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn profile_decimal_strings_parse() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"blood_group":"O+","weight_kg":"72.50","height_cm":""}"#,
        )
        .unwrap();
        assert_eq!(profile.weight_kg, Some(72.5));
        assert_eq!(profile.height_cm, None);
    }
}
