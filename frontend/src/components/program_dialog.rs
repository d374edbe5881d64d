use super::field::Field;
use super::form_state::ProgramFormState;
use crate::context::use_dash;
use gymdash_shared::Difficulty;
use leptos::prelude::*;

/// "New program" button and its modal form.
///
/// The dialog closes and the form resets only when the program was created.
#[component]
pub fn ProgramDialog() -> impl IntoView {
    let ctx = use_dash();
    let state = ProgramFormState::new();
    let (open, set_open) = signal(false);
    let (loading, set_loading) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);

        let draft = state.to_draft();
        ctx.spawn(move |dash| async move {
            if dash.create_training_program(&draft).await {
                state.reset();
                set_open.set(false);
            }
            set_loading.set(false);
        });
    };

    view! {
        <button class="btn btn-primary gap-2" on:click=move |_| set_open.set(true)>
            "+ New program"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Create training program"</h3>

                <form on:submit=on_submit class="space-y-4 pt-4">
                    <Field id="program_name" label="Name" value=state.name />

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="difficulty">
                                <span class="label-text">"Difficulty"</span>
                            </label>
                            <select
                                id="difficulty"
                                class="select select-bordered w-full"
                                on:change=move |ev| {
                                    if let Some(level) = Difficulty::parse(&event_target_value(&ev)) {
                                        state.difficulty.set(level);
                                    }
                                }
                            >
                                {Difficulty::ALL
                                    .into_iter()
                                    .map(|level| view! {
                                        <option
                                            value=level.as_str()
                                            selected=move || state.difficulty.get() == level
                                        >
                                            {level.as_str()}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <Field id="goal" label="Goal" value=state.goal />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <Field id="start_date" label="Start" value=state.start_date kind="date" />
                        <Field id="end_date" label="End" value=state.end_date kind="date" />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || loading.get() class="btn btn-primary">
                            {move || if loading.get() {
                                view! { <span class="loading loading-spinner"></span> "Creating..." }.into_any()
                            } else {
                                "Create".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
