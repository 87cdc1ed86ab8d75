//! Toast stack rendering the notification queue.

use leptos::prelude::*;

use crate::state::notify::{Notice, NotificationsState};

/// Fixed-position stack of transient notices.
#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| view! { <Toast notice=notice notices=notices/> }
            />
        </div>
    }
}

#[component]
fn Toast(notice: Notice, notices: RwSignal<NotificationsState>) -> impl IntoView {
    let id = notice.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notify::NOTICE_DISPLAY_MS).await;
        notices.update(|s| s.dismiss(id));
    });

    let class = format!("toast toast--{}", notice.level.class_suffix());
    view! {
        <div class=class on:click=move |_| notices.update(|s| s.dismiss(id))>
            {notice.text}
        </div>
    }
}
