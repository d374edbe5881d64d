use crate::context::use_dash;
use gymdash::View;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_dash();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);

        let email = email.get_untracked();
        let password = password.get_untracked();
        ctx.spawn(move |dash| async move {
            // On success the page is replaced by the dashboard.
            if !dash.login(&email, &password).await {
                set_is_submitting.set(false);
            }
        });
    };

    let to_signup = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(View::Signup);
    };

    view! {
        <div id=View::Login.id() class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Gym Dashboard"</h1>
                    <p class="text-base-content/70">"Log in to see your training"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Log in".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "No account yet? "
                            <a href="/signup" class="link link-primary" on:click=to_signup>"Sign up"</a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
