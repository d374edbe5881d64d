//! Dashboard context
//!
//! One [`Dashboard`] controller per page, shared through Leptos context.
//! Components read the published model signal and send events through
//! [`DashContext`]; they never touch storage or the network themselves.

use crate::web::{BrowserStorage, FetchClient};
use gymdash::{ClientConfig, Dashboard, DashboardModel, View};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::rc::Rc;

pub type WebDashboard = Dashboard<FetchClient, BrowserStorage>;

#[derive(Clone, Copy)]
pub struct DashContext {
    /// Latest model published by the controller
    pub model: RwSignal<DashboardModel>,
    dash: StoredValue<Rc<WebDashboard>, LocalStorage>,
}

impl DashContext {
    pub fn new(config: ClientConfig) -> Self {
        tracing::info!(api_base = %config.api_base, "starting dashboard");
        let dash = Rc::new(Dashboard::new(FetchClient::new(), BrowserStorage, config));

        let model = RwSignal::new(dash.snapshot());
        dash.subscribe(move |m| model.set(m.clone()));

        Self {
            model,
            dash: StoredValue::new_local(dash),
        }
    }

    /// Run an async controller call in a local task.
    pub fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<WebDashboard>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let dash = self.dash.get_value();
        spawn_local(f(dash));
    }

    /// Run a synchronous controller call.
    pub fn with<R>(&self, f: impl FnOnce(&WebDashboard) -> R) -> R {
        self.dash.with_value(|dash| f(dash))
    }

    pub fn navigate(&self, view: View) -> View {
        self.with(|dash| dash.navigate(view))
    }

    /// The visible view, changing only when the view does
    pub fn current_view(&self) -> Memo<View> {
        let model = self.model;
        Memo::new(move |_| model.with(|m| m.view()))
    }
}

pub fn use_dash() -> DashContext {
    use_context::<DashContext>().expect("DashContext should be provided")
}
