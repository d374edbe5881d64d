use crate::{
    ApiMessage, AthleteRef, CoachedAthlete, Difficulty, Intensity, LeaderboardEntry, MedicalAssessment, Measurement,
    SessionAdherence, TopExercise, TrainingLog, TrainingProgram, User, WorkoutSession,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// `GET` requests carry their parameters in the path only; `POST` requests
/// are sent with the request itself as the JSON body.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path, relative to the API base.
    fn path(&self) -> String;
}

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/login".to_string()
    }
}

/// Role-specific part of a signup form. The tag lands in the `role` field of
/// the flattened request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum SignupProfile {
    Athlete {
        sports_branch: String,
    },
    Trainer {
        specialization: String,
        years_experience: String,
    },
    Medical {
        profession: String,
        specialization_area: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub signup_email: String,
    pub signup_password: String,
    pub phone: String,
    pub gender: String,
    pub date_of_birth: String,
    #[serde(flatten)]
    pub profile: SignupProfile,
}

impl ApiRequest for SignupRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/signup".to_string()
    }
}

// =========================================================
// Lists
// =========================================================

/// List every athlete for the selection controls
#[derive(Debug, Serialize, Deserialize)]
pub struct ListAthletesRequest;

impl ApiRequest for ListAthletesRequest {
    type Response = Vec<AthleteRef>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/api/athletes".to_string()
    }
}

/// Declares a `GET <prefix>/<id>` request returning a list of records.
macro_rules! list_by_id {
    ($(#[$meta:meta])* $name:ident { $field:ident } => $prefix:literal, $row:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub $field: u64,
        }

        impl ApiRequest for $name {
            type Response = Vec<$row>;
            const METHOD: HttpMethod = HttpMethod::Get;
            fn path(&self) -> String {
                format!("{}/{}", $prefix, self.$field)
            }
        }
    };
}

list_by_id!(
    /// Body measurements of one athlete, oldest first
    MeasurementsRequest { athlete_id } => "/api/measurements", Measurement
);
list_by_id!(MedicalAssessmentsRequest { athlete_id } => "/api/medicalAssessments", MedicalAssessment);
list_by_id!(
    /// Latest log entry per exercise
    LastTrainingRequest { athlete_id } => "/api/lastTraining", TrainingLog
);
list_by_id!(SessionAdherenceRequest { athlete_id } => "/api/sessionAdherence", SessionAdherence);
list_by_id!(TopExercisesRequest { athlete_id } => "/api/topThreeExercises", TopExercise);
list_by_id!(
    /// Programs the athlete can still enrol in
    AvailableProgramsRequest { athlete_id } => "/api/athletePrograms/notEnrolled", TrainingProgram
);
list_by_id!(WorkoutSessionsRequest { program_id } => "/api/workoutSessions", WorkoutSession);
list_by_id!(
    /// Programs created by a trainer
    TrainerProgramsRequest { trainer_id } => "/api/trainingPrograms", TrainingProgram
);
list_by_id!(
    /// Top five athletes per program of a trainer
    LeaderboardRequest { trainer_id } => "/api/leaderboard", LeaderboardEntry
);

/// Path prefix of the enrolled-programs list when none is configured
pub const DEFAULT_ENROLLED_PROGRAMS_PATH: &str = "/api/athletePrograms";

/// Programs the athlete is enrolled in.
///
/// Deployments disagree on where this list lives, so the prefix travels with
/// the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledProgramsRequest {
    pub athlete_id: u64,
    #[serde(skip)]
    pub prefix: String,
}

impl ApiRequest for EnrolledProgramsRequest {
    type Response = Vec<TrainingProgram>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        let prefix = if self.prefix.is_empty() {
            DEFAULT_ENROLLED_PROGRAMS_PATH
        } else {
            self.prefix.trim_end_matches('/')
        };
        format!("{}/{}", prefix, self.athlete_id)
    }
}

/// Athletes enrolled in at least one program of a trainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerAthletesRequest {
    pub trainer_id: u64,
}

impl ApiRequest for TrainerAthletesRequest {
    type Response = Vec<CoachedAthlete>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/api/trainer/{}/athletes", self.trainer_id)
    }
}

/// Sessions of an athlete across the programs of one trainer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteSessionsRequest {
    pub trainer_id: u64,
    pub athlete_id: u64,
}

impl ApiRequest for AthleteSessionsRequest {
    type Response = Vec<WorkoutSession>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!(
            "/api/workoutSessions/trainer/{}/athlete/{}",
            self.trainer_id, self.athlete_id
        )
    }
}

// =========================================================
// Mutations
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTrainingProgramRequest {
    pub name: String,
    pub difficulty: Difficulty,
    pub goal: String,
    pub start_date: String,
    pub end_date: String,
    pub trainer_id: u64,
}

impl ApiRequest for CreateTrainingProgramRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/createTrainingProgram".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddMedicalExamRequest {
    pub athlete_id: u64,
    pub medical_id: u64,
    pub assessment_type: String,
    pub notes: String,
    pub clearance_status: String,
}

impl ApiRequest for AddMedicalExamRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/addMedicalExam".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollAthleteRequest {
    pub athlete_id: u64,
    pub program_id: u64,
}

impl ApiRequest for EnrollAthleteRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/enrollAthlete".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddWorkoutSessionRequest {
    pub program_id: u64,
    pub session_date: String,
    /// Minutes
    pub duration: Option<u32>,
    pub intensity: Intensity,
}

impl ApiRequest for AddWorkoutSessionRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/addWorkoutSession".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTrainerFeedbackRequest {
    pub athlete_id: u64,
    pub trainer_id: u64,
    pub session_id: u64,
    pub comments: String,
    /// 1 to 5
    pub rating: u8,
}

impl ApiRequest for AddTrainerFeedbackRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/api/addTrainerFeedback".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_paths_embed_the_id() {
        assert_eq!(
            MeasurementsRequest { athlete_id: 7 }.path(),
            "/api/measurements/7"
        );
        assert_eq!(
            WorkoutSessionsRequest { program_id: 42 }.path(),
            "/api/workoutSessions/42"
        );
        assert_eq!(
            AvailableProgramsRequest { athlete_id: 3 }.path(),
            "/api/athletePrograms/notEnrolled/3"
        );
        assert_eq!(ListAthletesRequest.path(), "/api/athletes");
        assert_eq!(
            TrainerAthletesRequest { trainer_id: 3 }.path(),
            "/api/trainer/3/athletes"
        );
        assert_eq!(
            AthleteSessionsRequest {
                trainer_id: 3,
                athlete_id: 7
            }
            .path(),
            "/api/workoutSessions/trainer/3/athlete/7"
        );
    }

    #[test]
    fn enrolled_programs_prefix_is_configurable() {
        let default = EnrolledProgramsRequest {
            athlete_id: 7,
            prefix: String::new(),
        };
        assert_eq!(default.path(), "/api/athletePrograms/7");

        let moved = EnrolledProgramsRequest {
            athlete_id: 7,
            prefix: "/api/athletePrograms/enrolled/".into(),
        };
        assert_eq!(moved.path(), "/api/athletePrograms/enrolled/7");
    }

    #[test]
    fn workout_session_body_uses_lowercase_intensity() {
        let req = AddWorkoutSessionRequest {
            program_id: 1,
            session_date: "2025-02-03".into(),
            duration: None,
            intensity: Intensity::High,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "program_id": 1,
                "session_date": "2025-02-03",
                "duration": null,
                "intensity": "high",
            })
        );
    }

    #[test]
    fn signup_body_carries_role_and_its_fields() {
        let req = SignupRequest {
            first_name: "Bo".into(),
            last_name: "Kim".into(),
            signup_email: "bo@example.com".into(),
            signup_password: "pw".into(),
            phone: "555".into(),
            gender: "F".into(),
            date_of_birth: "1999-02-01".into(),
            profile: SignupProfile::Trainer {
                specialization: "strength".into(),
                years_experience: "4".into(),
            },
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["role"], json!("trainer"));
        assert_eq!(body["specialization"], json!("strength"));
        assert_eq!(body["years_experience"], json!("4"));
        assert!(body.get("sports_branch").is_none());
    }

    #[test]
    fn program_difficulty_is_snake_case() {
        let req = CreateTrainingProgramRequest {
            name: "Base".into(),
            difficulty: Difficulty::Intermediate,
            goal: String::new(),
            start_date: "2025-01-01".into(),
            end_date: "2025-03-01".into(),
            trainer_id: 2,
        };
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["difficulty"], json!("intermediate"));
        assert_eq!(body["trainer_id"], json!(2));
    }
}
