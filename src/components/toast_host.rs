//! Toast overlay rendering queued notices.
//!
//! DESIGN
//! ======
//! Each notice is scheduled for removal the first time the host sees it, so
//! producers stay fire-and-forget and never manage timers themselves.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::state::notices::{Notice, NoticeLevel, NoticePosition, Notices};

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 5_000;

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "toast toast--info",
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Error => "toast toast--error",
    }
}

fn position_class(position: NoticePosition) -> &'static str {
    match position {
        NoticePosition::TopCenter => "toast-stack toast-stack--top-center",
        NoticePosition::TopRight => "toast-stack toast-stack--top-right",
    }
}

/// Renders every queued notice grouped by position, with click-to-dismiss.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<Notices>>();
    let scheduled = StoredValue::new(HashSet::<u64>::new());

    Effect::new(move || {
        let ids: Vec<u64> = notices.with(|n| n.items.iter().map(|notice| notice.id).collect());
        for id in ids {
            let fresh = scheduled.try_update_value(|set| set.insert(id)).unwrap_or(false);
            if fresh {
                schedule_dismiss(notices, id);
            }
        }
    });

    let stack = move |position: NoticePosition| {
        view! {
            <div class=position_class(position)>
                <For
                    each=move || notices.with(|n| n.at(position).cloned().collect::<Vec<Notice>>())
                    key=|notice| notice.id
                    let:notice
                >
                    <div
                        class=level_class(notice.level)
                        role="alert"
                        on:click=move |_| notices.update(|n| n.dismiss(notice.id))
                    >
                        {notice.text.clone()}
                    </div>
                </For>
            </div>
        }
    };

    view! {
        {stack(NoticePosition::TopCenter)}
        {stack(NoticePosition::TopRight)}
    }
}

fn schedule_dismiss(notices: RwSignal<Notices>, id: u64) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(TOAST_LIFETIME_MS, move || {
            notices.update(|n| n.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (notices, id);
    }
}
