//! Tab panes
//!
//! Each pane is laid out once; what it shows comes entirely from the model.

use super::chart::ProgressChart;
use super::field::Field;
use super::form_state::{ExamFormState, FeedbackFormState, SessionFormState};
use super::program_dialog::ProgramDialog;
use super::selector::FeedSelect;
use super::table::{DataTable, RowAction};
use crate::context::use_dash;
use gymdash::{SelectControl, TableId};
use gymdash_shared::Intensity;
use leptos::prelude::*;

#[component]
pub fn TrainingPane() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <FeedSelect control=SelectControl::TrainingAthlete label="Athlete" />
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Progress"</h3>
                    <ProgressChart control=SelectControl::TrainingAthlete />
                </div>
            </div>
            <DataTable table=TableId::TrainingMeasurements title="Measurements" />
            <DataTable table=TableId::TrainingAssessments title="Medical assessments" />
            <div class="grid md:grid-cols-2 gap-6">
                <DataTable table=TableId::LastTraining title="Last training" />
                <DataTable table=TableId::SessionAdherence title="Session adherence" />
            </div>
            <DataTable table=TableId::TopExercises title="Top exercises" />
        </div>
    }
}

#[component]
pub fn ManagementPane() -> impl IntoView {
    let ctx = use_dash();
    let feedback = FeedbackFormState::new();
    let rate = RowAction {
        label: "Rate",
        on_click: Callback::new(move |session_id: u64| feedback.session_id.set(Some(session_id))),
    };

    // Feedback belongs to one athlete's session.
    let athlete = Memo::new(move |_| {
        ctx.model
            .with(|m| m.selector(SelectControl::TrainerAthlete).value.clone())
    });
    Effect::new(move |_| {
        athlete.track();
        feedback.session_id.set(None);
    });

    view! {
        <div class="space-y-6">
            <div class="flex justify-end">
                <ProgramDialog />
            </div>
            <DataTable table=TableId::TrainerPrograms title="My programs" />
            <DataTable table=TableId::Leaderboard title="Leaderboard" />

            <FeedSelect control=SelectControl::TrainerProgram label="Program" />
            <SessionForm />
            <DataTable table=TableId::ProgramSessions title="Program sessions" />

            <FeedSelect control=SelectControl::TrainerAthlete label="Athlete" />
            <DataTable table=TableId::AthleteSessions title="Athlete sessions" action=rate />
            <FeedbackForm state=feedback />
        </div>
    }
}

#[component]
fn SessionForm() -> impl IntoView {
    let ctx = use_dash();
    let form = SessionFormState::new();
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);

        let draft = form.to_draft();
        ctx.spawn(move |dash| async move {
            if dash.add_workout_session(&draft).await {
                form.reset();
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <h3 class="card-title">"New workout session"</h3>
                <div class="grid md:grid-cols-3 gap-4">
                    <Field id="session_date" label="Date" value=form.session_date kind="date" />
                    <Field id="duration" label="Duration (min)" value=form.duration kind="number" />
                    <div class="form-control">
                        <label class="label" for="intensity">
                            <span class="label-text">"Intensity"</span>
                        </label>
                        <select
                            id="intensity"
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                if let Some(level) = Intensity::parse(&event_target_value(&ev)) {
                                    form.intensity.set(level);
                                }
                            }
                        >
                            {Intensity::ALL
                                .into_iter()
                                .map(|level| view! {
                                    <option
                                        value=level.as_str()
                                        selected=move || form.intensity.get() == level
                                    >
                                        {level.as_str()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <div class="card-actions justify-end">
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        "Add session"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn FeedbackForm(state: FeedbackFormState) -> impl IntoView {
    let ctx = use_dash();
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);

        let draft = state.to_draft();
        ctx.spawn(move |dash| async move {
            if dash.add_trainer_feedback(&draft).await {
                state.reset();
            }
            set_saving.set(false);
        });
    };

    let picked = move || match state.session_id.get() {
        Some(id) => format!("Session {}", id),
        None => "Pick a session with \"Rate\"".to_string(),
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <form class="card-body" on:submit=on_submit>
                <h3 class="card-title">"Trainer feedback"</h3>
                <p class="text-base-content/70 text-sm">{picked}</p>
                <div class="grid md:grid-cols-3 gap-4">
                    <Field id="rating" label="Rating (1-5)" value=state.rating kind="number" />
                    <div class="md:col-span-2">
                        <Field id="comments" label="Comments" value=state.comments />
                    </div>
                </div>
                <div class="card-actions justify-end">
                    <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                        "Save feedback"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
pub fn EnrollmentPane() -> impl IntoView {
    let ctx = use_dash();
    let enroll = RowAction {
        label: "Enroll",
        on_click: Callback::new(move |program_id: u64| {
            ctx.spawn(move |dash| async move {
                dash.enroll(program_id).await;
            });
        }),
    };

    view! {
        <div class="space-y-6">
            <DataTable table=TableId::EnrolledPrograms title="Enrolled programs" />
            <FeedSelect control=SelectControl::Program label="Program" />
            <DataTable table=TableId::WorkoutSessions title="Workout sessions" />
            <DataTable table=TableId::AvailablePrograms title="Available programs" action=enroll />
        </div>
    }
}

#[component]
pub fn MedicalPane() -> impl IntoView {
    let ctx = use_dash();
    let exam = ExamFormState::new();
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saving.set(true);

        let draft = exam.to_draft();
        ctx.spawn(move |dash| async move {
            if dash.add_medical_exam(&draft).await {
                exam.reset();
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <FeedSelect control=SelectControl::MedicalAthlete label="Athlete" />
            <div class="card bg-base-100 shadow-xl">
                <form class="card-body" on:submit=on_submit>
                    <h3 class="card-title">"New medical exam"</h3>
                    <div class="grid md:grid-cols-3 gap-4">
                        <Field id="assessment_type" label="Assessment type" value=exam.assessment_type />
                        <Field id="clearance_status" label="Clearance" value=exam.clearance_status />
                        <Field id="notes" label="Notes" value=exam.notes />
                    </div>
                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            "Add exam"
                        </button>
                    </div>
                </form>
            </div>
            <DataTable table=TableId::MedicalMeasurements title="Measurements" />
            <DataTable table=TableId::MedicalAssessments title="Medical assessments" />
        </div>
    }
}
