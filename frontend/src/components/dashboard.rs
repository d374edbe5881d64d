use super::panes::{EnrollmentPane, ManagementPane, MedicalPane, TrainingPane};
use crate::context::use_dash;
use gymdash::TabId;
use leptos::prelude::*;

/// Hidden unless `tab` is the active pane
#[component]
fn Pane(tab: TabId, children: Children) -> impl IntoView {
    let ctx = use_dash();
    let visible = Memo::new(move |_| ctx.model.with(|m| m.is_pane_visible(tab)));

    view! {
        <section id=tab.as_str() class:hidden=move || !visible.get()>
            {children()}
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_dash();
    let greeting = Memo::new(move |_| ctx.model.with(|m| m.greeting.clone()));
    let nav = Memo::new(move |_| ctx.model.with(|m| m.nav.clone()));

    let on_logout = move |_| ctx.with(|dash| dash.logout());

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <a class="btn btn-ghost text-xl">"Gym dashboard"</a>
                        <span class="hidden md:inline-flex">{greeting}</span>
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error">
                            "Log out"
                        </button>
                    </div>
                </div>

                <div role="tablist" class="tabs tabs-boxed bg-base-100">
                    <For
                        each=move || nav.get()
                        key=|entry| (entry.id, entry.active)
                        children=move |entry| {
                            let tab = entry.id;
                            view! {
                                <a
                                    role="tab"
                                    class="tab"
                                    class:tab-active=entry.active
                                    on:click=move |_| {
                                        ctx.spawn(move |dash| async move { dash.activate_tab(tab).await });
                                    }
                                >
                                    {entry.label}
                                </a>
                            }
                        }
                    />
                </div>

                <Pane tab=TabId::Training><TrainingPane /></Pane>
                <Pane tab=TabId::Management><ManagementPane /></Pane>
                <Pane tab=TabId::Enrollment><EnrollmentPane /></Pane>
                <Pane tab=TabId::Medical><MedicalPane /></Pane>
            </div>
        </div>
    }
}
