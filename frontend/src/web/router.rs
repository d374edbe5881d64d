//! History integration
//!
//! All `window.history` access lives here. The address bar follows the
//! visible view; back/forward and the initial URL go through the controller
//! so the session guard applies to them as well.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route;
use crate::context::{DashContext, use_dash};
use gymdash::View;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Back/forward: show the view of the new URL, or whatever the guard
/// redirects it to.
fn init_popstate_listener(ctx: DashContext) {
    let closure = Closure::<dyn Fn()>::new(move || {
        let target = route::from_path(&current_path()).unwrap_or_default();
        let shown = ctx.navigate(target);
        if shown != target {
            tracing::debug!(%target, %shown, "popstate redirected");
            replace_history_state(route::to_path(shown));
        }
    });

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }

    // The listener lives as long as the page.
    closure.forget();
}

/// Keep the URL in step with the visible view.
fn sync_address_bar(current: Memo<View>) {
    Effect::new(move |first: Option<()>| {
        let view = current.get();
        if route::from_path(&current_path()) != Some(view) {
            let path = route::to_path(view);
            // The first sync only normalises the landing URL.
            if first.is_none() {
                replace_history_state(path);
            } else {
                push_history_state(path);
            }
        }
    });
}

/// Restore the session, honour the landing URL and wire up history.
#[component]
pub fn Router(children: Children) -> impl IntoView {
    let ctx = use_dash();
    let landing = route::from_path(&current_path());

    ctx.spawn(move |dash| async move {
        dash.restore().await;
        if let Some(view) = landing {
            dash.navigate(view);
        }
    });

    init_popstate_listener(ctx);
    sync_address_bar(ctx.current_view());

    children()
}

/// Renders the visible view.
#[component]
pub fn RouterOutlet(
    /// Maps a view to its page component
    matcher: fn(View) -> AnyView,
) -> impl IntoView {
    let current = use_dash().current_view();
    move || matcher(current.get())
}
