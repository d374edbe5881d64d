//! Form state
//!
//! Each form keeps its fields in one `Copy` struct of `RwSignal`s that can be
//! passed to child components as a prop. The struct owns resetting and the
//! conversion into what the controller expects.

use gymdash::{ExamDraft, FeedbackDraft, ProgramDraft, SessionDraft};
use gymdash_shared::{Difficulty, Intensity};
use gymdash_shared::protocol::{SignupProfile, SignupRequest};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProgramFormState {
    pub name: RwSignal<String>,
    pub difficulty: RwSignal<Difficulty>,
    pub goal: RwSignal<String>,
    pub start_date: RwSignal<String>,
    pub end_date: RwSignal<String>,
}

impl ProgramFormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            difficulty: RwSignal::new(Difficulty::default()),
            goal: RwSignal::new(String::new()),
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.difficulty.set(Difficulty::default());
        self.goal.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
    }

    pub fn to_draft(&self) -> ProgramDraft {
        ProgramDraft {
            name: self.name.get_untracked(),
            difficulty: self.difficulty.get_untracked(),
            goal: self.goal.get_untracked(),
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
        }
    }
}

impl Default for ProgramFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct ExamFormState {
    pub assessment_type: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub clearance_status: RwSignal<String>,
}

impl ExamFormState {
    pub fn new() -> Self {
        Self {
            assessment_type: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            clearance_status: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.assessment_type.set(String::new());
        self.notes.set(String::new());
        self.clearance_status.set(String::new());
    }

    pub fn to_draft(&self) -> ExamDraft {
        ExamDraft {
            assessment_type: self.assessment_type.get_untracked(),
            notes: self.notes.get_untracked(),
            clearance_status: self.clearance_status.get_untracked(),
        }
    }
}

impl Default for ExamFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct SessionFormState {
    pub session_date: RwSignal<String>,
    pub duration: RwSignal<String>,
    pub intensity: RwSignal<Intensity>,
}

impl SessionFormState {
    pub fn new() -> Self {
        Self {
            session_date: RwSignal::new(String::new()),
            duration: RwSignal::new(String::new()),
            intensity: RwSignal::new(Intensity::default()),
        }
    }

    pub fn reset(&self) {
        self.session_date.set(String::new());
        self.duration.set(String::new());
        self.intensity.set(Intensity::default());
    }

    pub fn to_draft(&self) -> SessionDraft {
        SessionDraft {
            session_date: self.session_date.get_untracked(),
            duration: self.duration.get_untracked(),
            intensity: self.intensity.get_untracked(),
        }
    }
}

impl Default for SessionFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Feedback form. The session is picked from a table row, not typed in.
#[derive(Clone, Copy)]
pub struct FeedbackFormState {
    pub session_id: RwSignal<Option<u64>>,
    pub rating: RwSignal<String>,
    pub comments: RwSignal<String>,
}

impl FeedbackFormState {
    pub fn new() -> Self {
        Self {
            session_id: RwSignal::new(None),
            rating: RwSignal::new(String::new()),
            comments: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.session_id.set(None);
        self.rating.set(String::new());
        self.comments.set(String::new());
    }

    pub fn to_draft(&self) -> FeedbackDraft {
        FeedbackDraft {
            session_id: self.session_id.get_untracked(),
            rating: self.rating.get_untracked(),
            comments: self.comments.get_untracked(),
        }
    }
}

impl Default for FeedbackFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Role picked on the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupRole {
    #[default]
    Athlete,
    Trainer,
    Medical,
}

impl SignupRole {
    pub const ALL: [SignupRole; 3] = [SignupRole::Athlete, SignupRole::Trainer, SignupRole::Medical];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignupRole::Athlete => "athlete",
            SignupRole::Trainer => "trainer",
            SignupRole::Medical => "medical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignupRole::Athlete => "Athlete",
            SignupRole::Trainer => "Trainer",
            SignupRole::Medical => "Medical staff",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == raw)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
pub struct SignupFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub gender: RwSignal<String>,
    pub date_of_birth: RwSignal<String>,
    pub role: RwSignal<SignupRole>,

    // Role specific
    pub sports_branch: RwSignal<String>,
    pub specialization: RwSignal<String>,
    pub years_experience: RwSignal<String>,
    pub profession: RwSignal<String>,
    pub specialization_area: RwSignal<String>,
}

impl SignupFormState {
    pub fn new() -> Self {
        Self {
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            gender: RwSignal::new(String::new()),
            date_of_birth: RwSignal::new(String::new()),
            role: RwSignal::new(SignupRole::default()),
            sports_branch: RwSignal::new(String::new()),
            specialization: RwSignal::new(String::new()),
            years_experience: RwSignal::new(String::new()),
            profession: RwSignal::new(String::new()),
            specialization_area: RwSignal::new(String::new()),
        }
    }

    /// Only the fields of the selected role are sent.
    pub fn to_request(&self) -> SignupRequest {
        let profile = match self.role.get_untracked() {
            SignupRole::Athlete => SignupProfile::Athlete {
                sports_branch: self.sports_branch.get_untracked(),
            },
            SignupRole::Trainer => SignupProfile::Trainer {
                specialization: self.specialization.get_untracked(),
                years_experience: self.years_experience.get_untracked(),
            },
            SignupRole::Medical => SignupProfile::Medical {
                profession: self.profession.get_untracked(),
                specialization_area: self.specialization_area.get_untracked(),
            },
        };

        SignupRequest {
            first_name: self.first_name.get_untracked().trim().to_string(),
            last_name: self.last_name.get_untracked().trim().to_string(),
            signup_email: self.email.get_untracked().trim().to_string(),
            signup_password: self.password.get_untracked(),
            phone: self.phone.get_untracked(),
            gender: self.gender.get_untracked(),
            date_of_birth: self.date_of_birth.get_untracked(),
            profile,
        }
    }
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_sends_only_the_selected_role_fields() {
        let owner = Owner::new();
        owner.with(|| {
            let form = SignupFormState::new();
            form.email.set(" ana@example.com ".into());
            form.role.set(SignupRole::Trainer);
            form.sports_branch.set("rowing".into());
            form.specialization.set("strength".into());
            form.years_experience.set("4".into());

            let req = form.to_request();
            assert_eq!(req.signup_email, "ana@example.com");
            assert_eq!(
                req.profile,
                SignupProfile::Trainer {
                    specialization: "strength".into(),
                    years_experience: "4".into(),
                }
            );
        });
    }

    #[test]
    fn program_form_resets_to_defaults() {
        let owner = Owner::new();
        owner.with(|| {
            let form = ProgramFormState::new();
            form.name.set("Base".into());
            form.difficulty.set(Difficulty::Advanced);
            assert_eq!(form.to_draft().difficulty, Difficulty::Advanced);

            form.reset();
            assert_eq!(form.to_draft(), ProgramDraft::default());
        });
    }

    #[test]
    fn feedback_form_forgets_the_picked_session() {
        let owner = Owner::new();
        owner.with(|| {
            let form = FeedbackFormState::new();
            form.session_id.set(Some(11));
            form.rating.set("5".into());
            assert_eq!(form.to_draft().session_id, Some(11));

            form.reset();
            assert_eq!(form.to_draft(), FeedbackDraft::default());
        });
    }

    #[test]
    fn unknown_roles_fall_back_to_athlete() {
        assert_eq!(SignupRole::parse("medical"), SignupRole::Medical);
        assert_eq!(SignupRole::parse("admin"), SignupRole::Athlete);
    }
}
