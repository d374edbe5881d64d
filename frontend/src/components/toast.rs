//! Notice toast
//!
//! Shows the controller's current notice and clears it after three seconds.

use crate::context::use_dash;
use gymdash::Notice;
use leptos::prelude::*;
use std::time::Duration;

const NOTICE_TTL: Duration = Duration::from_secs(3);

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_dash();
    // Numbered, so a repeat of the same message restarts the timer.
    let notice = Memo::new(move |_| ctx.model.with(|m| (m.notice_seq, m.notice.clone())));

    Effect::new(move |_| {
        let (seq, shown) = notice.get();
        if shown.is_some() {
            // A newer notice keeps its own full display time.
            set_timeout(move || ctx.with(|dash| dash.expire_notice(seq)), NOTICE_TTL);
        }
    });

    move || {
        notice.get().1.map(|Notice { message, is_error }| {
            let class = if is_error {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            view! {
                <div class="toast toast-top toast-end z-50">
                    <div role="alert" class=class>
                        <span>{message}</span>
                    </div>
                </div>
            }
        })
    }
}
