use super::field::Field;
use super::form_state::{SignupFormState, SignupRole};
use crate::context::use_dash;
use gymdash::View;
use leptos::prelude::*;

/// Inputs that only apply to the selected role
#[component]
fn RoleFields(state: SignupFormState) -> impl IntoView {
    move || match state.role.get() {
        SignupRole::Athlete => view! {
            <Field id="sports_branch" label="Sports branch" value=state.sports_branch />
        }
        .into_any(),
        SignupRole::Trainer => view! {
            <Field id="specialization" label="Specialization" value=state.specialization />
            <Field id="years_experience" label="Years of experience" value=state.years_experience kind="number" />
        }
        .into_any(),
        SignupRole::Medical => view! {
            <Field id="profession" label="Profession" value=state.profession />
            <Field id="specialization_area" label="Specialization area" value=state.specialization_area />
        }
        .into_any(),
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_dash();
    let state = SignupFormState::new();
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);

        let req = state.to_request();
        ctx.spawn(move |dash| async move {
            // On success the page is replaced by the login view.
            if !dash.signup(&req).await {
                set_is_submitting.set(false);
            }
        });
    };

    let to_login = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(View::Login);
    };

    view! {
        <div id=View::Signup.id() class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-xl">
                <h1 class="text-3xl font-bold">"Create an account"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body space-y-2" on:submit=on_submit>
                        <div class="grid grid-cols-2 gap-4">
                            <Field id="first_name" label="First name" value=state.first_name required=true />
                            <Field id="last_name" label="Last name" value=state.last_name required=true />
                        </div>
                        <Field id="signup_email" label="Email" value=state.email kind="email" required=true />
                        <Field id="signup_password" label="Password" value=state.password kind="password" required=true />
                        <div class="grid grid-cols-2 gap-4">
                            <Field id="phone" label="Phone" value=state.phone kind="tel" />
                            <Field id="date_of_birth" label="Date of birth" value=state.date_of_birth kind="date" />
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="gender">
                                    <span class="label-text">"Gender"</span>
                                </label>
                                <select
                                    id="gender"
                                    class="select select-bordered w-full"
                                    on:change=move |ev| state.gender.set(event_target_value(&ev))
                                >
                                    <option value="">"-"</option>
                                    <option value="female">"Female"</option>
                                    <option value="male">"Male"</option>
                                    <option value="other">"Other"</option>
                                </select>
                            </div>
                            <div class="form-control">
                                <label class="label" for="role">
                                    <span class="label-text">"Role"</span>
                                </label>
                                <select
                                    id="role"
                                    class="select select-bordered w-full"
                                    on:change=move |ev| state.role.set(SignupRole::parse(&event_target_value(&ev)))
                                >
                                    {SignupRole::ALL
                                        .into_iter()
                                        .map(|role| view! {
                                            <option
                                                value=role.as_str()
                                                selected=move || state.role.get() == role
                                            >
                                                {role.label()}
                                            </option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <RoleFields state=state />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing up..." }.into_any()
                                } else {
                                    "Sign up".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "Already registered? "
                            <a href="/" class="link link-primary" on:click=to_login>"Log in"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
