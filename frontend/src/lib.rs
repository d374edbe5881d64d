//! Gym dashboard front-end
//!
//! - `web`: thin wrappers over browser APIs (fetch, localStorage, history)
//! - `context`: the shared dashboard controller and its model signal
//! - `components`: UI, rendered from the model

mod context;
mod components {
    pub mod chart;
    pub mod dashboard;
    pub mod field;
    pub mod form_state;
    pub mod login;
    pub mod panes;
    pub mod program_dialog;
    pub mod selector;
    pub mod signup;
    pub mod table;
    pub mod toast;
}

pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::FetchClient;
    pub use storage::BrowserStorage;
}

use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::signup::SignupPage;
use crate::components::toast::Toast;
use crate::context::DashContext;
use gymdash::{ClientConfig, View};
use leptos::prelude::*;
use web::router::{Router, RouterOutlet};

/// Settings baked in at build time (`GYMDASH_API_BASE`,
/// `GYMDASH_STORAGE_KEY`, `GYMDASH_CHART_POINTS`,
/// `GYMDASH_ENROLLED_PROGRAMS_PATH`).
fn client_config() -> ClientConfig {
    ClientConfig::from_lookup(|key| {
        match key {
            "API_BASE" => option_env!("GYMDASH_API_BASE"),
            "STORAGE_KEY" => option_env!("GYMDASH_STORAGE_KEY"),
            "CHART_POINTS" => option_env!("GYMDASH_CHART_POINTS"),
            "ENROLLED_PROGRAMS_PATH" => option_env!("GYMDASH_ENROLLED_PROGRAMS_PATH"),
            _ => None,
        }
        .map(str::to_string)
    })
}

fn view_matcher(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginPage /> }.into_any(),
        View::Signup => view! { <SignupPage /> }.into_any(),
        View::Dashboard => view! { <DashboardPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = DashContext::new(client_config());
    provide_context(ctx);

    view! {
        <Toast />
        <Router>
            <RouterOutlet matcher=view_matcher />
        </Router>
    }
}
