use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod date;
pub mod protocol;

pub use date::{DateStyle, display_date, parse_date};

// =========================================================
// Constants
// =========================================================

pub const DEFAULT_SESSION_KEY: &str = "user";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const MIME_JSON: &str = "application/json";

// =========================================================
// Roles & Users
// =========================================================

/// Account role as reported by the backend.
///
/// Anything the backend sends that is not one of the three known roles
/// (including `null` for accounts without a role row) is kept as `Unknown`
/// so a stored session never fails to decode because of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Role {
    Athlete,
    Trainer,
    Medical,
    Unknown(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Athlete => "athlete",
            Role::Trainer => "trainer",
            Role::Medical => "medical",
            Role::Unknown(raw) => raw,
        }
    }
}

impl From<Option<String>> for Role {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref() {
            Some("athlete") => Role::Athlete,
            Some("trainer") => Role::Trainer,
            Some("medical") => Role::Medical,
            Some(other) => Role::Unknown(other.to_string()),
            None => Role::Unknown(String::new()),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logged-in user record, exactly as `/login` returns it.
///
/// Role-specific columns (phone, gender, sports branch, ...) are kept in
/// `extra` so that saving and reloading the session is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub role: Role,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteRef {
    pub id: u64,
    pub name: String,
}

/// Athlete enrolled in one of a trainer's programs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachedAthlete {
    pub user_id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl From<CoachedAthlete> for AthleteRef {
    fn from(athlete: CoachedAthlete) -> Self {
        let name = format!("{} {}", athlete.first_name, athlete.last_name)
            .trim()
            .to_string();
        AthleteRef {
            id: athlete.user_id,
            name,
        }
    }
}

// =========================================================
// Scalar cells
// =========================================================

/// A numeric column as the backend encodes it.
///
/// Decimal columns arrive as strings, integer columns as numbers and empty
/// aggregates as `null`; the dashboard renders all of them verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
    #[default]
    Null,
}

impl Scalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Null => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Null => Ok(()),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

// =========================================================
// Progress records
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub measurement_date: String,
    #[serde(default)]
    pub height: Scalar,
    #[serde(default)]
    pub weight: Scalar,
    #[serde(default)]
    pub body_fat_percentage: Scalar,
    #[serde(default)]
    pub muscle_mass: Scalar,
    #[serde(default)]
    pub bmi: Scalar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalAssessment {
    #[serde(default)]
    pub doctor: String,
    pub date: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub clearance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLog {
    pub exercise_name: String,
    #[serde(default)]
    pub weight_used: Scalar,
    #[serde(default)]
    pub completed_sets: Scalar,
    #[serde(default)]
    pub completed_reps: Scalar,
    #[serde(default)]
    pub perceived_exertion: Scalar,
    #[serde(default)]
    pub log_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAdherence {
    #[serde(default)]
    pub percentage_sets_done: Scalar,
    #[serde(default)]
    pub percentage_reps_done: Scalar,
    #[serde(default)]
    pub average_rate_of_perceived_exertion: Scalar,
    pub session_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopExercise {
    #[serde(default)]
    pub rnk: Scalar,
    pub exercise_name: String,
    #[serde(default)]
    pub total_volume: Scalar,
}

// =========================================================
// Programs & sessions
// =========================================================

/// A training program, either one an athlete is enrolled in, one still open
/// for enrolment, or one a trainer created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingProgram {
    pub program_id: u64,
    pub program_name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub session_id: u64,
    #[serde(default)]
    pub program_id: Option<u64>,
    pub session_date: String,
    #[serde(default)]
    pub duration: Scalar,
    #[serde(default)]
    pub intensity_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub program_id: u64,
    pub program_name: String,
    pub athlete_id: u64,
    pub athlete_name: String,
    #[serde(default)]
    pub logged_sessions: Scalar,
    #[serde(default)]
    pub avg_rpe: Scalar,
    #[serde(default)]
    pub rnk: Scalar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == raw)
    }
}

/// Workout session intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == raw)
    }
}

// =========================================================
// Generic responses
// =========================================================

/// Body returned by every mutation endpoint: `{message}` on success,
/// `{error}` on validation failures, `{status}` for signup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiMessage {
    /// The human readable part of the body, preferring `message` over `error`.
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_keeps_role_specific_fields() {
        let raw = json!({
            "user_id": 7,
            "first_name": "Ana",
            "last_name": "Lima",
            "email": "ana@example.com",
            "role": "athlete",
            "sports_branch": "rowing",
            "status": "active"
        });
        let user: User = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.role, Role::Athlete);
        assert_eq!(user.extra["sports_branch"], json!("rowing"));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn unexpected_roles_are_preserved() {
        let user: User =
            serde_json::from_value(json!({ "user_id": 1, "role": "janitor" })).unwrap();
        assert_eq!(user.role, Role::Unknown("janitor".into()));

        let user: User = serde_json::from_value(json!({ "user_id": 1, "role": null })).unwrap();
        assert_eq!(user.role, Role::Unknown(String::new()));
    }

    #[test]
    fn scalars_render_verbatim() {
        let m: Measurement = serde_json::from_value(json!({
            "measurement_date": "Tue, 14 Jan 2025 00:00:00 GMT",
            "height": 181,
            "weight": "80.50",
            "body_fat_percentage": null
        }))
        .unwrap();
        assert_eq!(m.height.to_string(), "181");
        assert_eq!(m.weight.to_string(), "80.50");
        assert_eq!(m.weight.as_f64(), Some(80.5));
        assert_eq!(m.body_fat_percentage.to_string(), "");
        assert_eq!(m.bmi, Scalar::Null);
    }

    #[test]
    fn coached_athletes_become_selector_entries() {
        let athlete: CoachedAthlete = serde_json::from_value(json!({
            "user_id": 7,
            "first_name": "Ana",
            "last_name": "Lima"
        }))
        .unwrap();
        assert_eq!(
            AthleteRef::from(athlete),
            AthleteRef {
                id: 7,
                name: "Ana Lima".into()
            }
        );
    }

    #[test]
    fn api_message_prefers_message_over_error() {
        let msg = ApiMessage {
            message: Some("done".into()),
            error: Some("ignored".into()),
            status: None,
        };
        assert_eq!(msg.text(), Some("done"));

        let msg: ApiMessage = serde_json::from_value(json!({ "error": "Missing" })).unwrap();
        assert_eq!(msg.text(), Some("Missing"));
        assert_eq!(ApiMessage::default().text(), None);
    }
}
