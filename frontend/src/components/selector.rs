use crate::context::use_dash;
use gymdash::{LoadStatus, SelectControl};
use leptos::prelude::*;

/// A selection control; every change is dispatched to its bound feeds.
#[component]
pub fn FeedSelect(control: SelectControl, label: &'static str) -> impl IntoView {
    let ctx = use_dash();
    let selector = Memo::new(move |_| ctx.model.with(|m| m.selector(control).clone()));

    let on_change = move |ev| {
        let value = event_target_value(&ev);
        ctx.spawn(move |dash| async move { dash.select(control, &value).await });
    };

    let placeholder = move || match selector.with(|s| s.status.clone()) {
        LoadStatus::Loading => "Loading...".to_string(),
        LoadStatus::Failed(message) => message,
        LoadStatus::Idle | LoadStatus::Ready => control.placeholder().to_string(),
    };

    view! {
        <div class="form-control w-full max-w-xs" class:hidden=move || !selector.with(|s| s.visible)>
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <select
                class="select select-bordered"
                on:change=on_change
                prop:value=move || selector.with(|s| s.value.clone())
            >
                <option value="">{placeholder}</option>
                <For
                    each=move || selector.with(|s| s.options.clone())
                    key=|option| option.value.clone()
                    children=move |option| {
                        let value = option.value.clone();
                        view! {
                            <option
                                value=option.value
                                selected=move || selector.with(|s| s.value == value)
                            >
                                {option.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
