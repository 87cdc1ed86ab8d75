//! Site header: brand, navigation, course search, and account controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the routed pages. Reads the session from the store
//! context, owns the login dialog's visibility, and delegates every decision
//! to `header_actions`.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::header_actions::{
    HeaderControls, handle_login, handle_logout, handle_register, header_controls, on_search,
};
use crate::components::login_modal::LoginModal;
use crate::net::types::{Credentials, RegisterForm};
use crate::state::notify::NotificationsState;
use crate::state::store::TokenStore;
use crate::state::ui::ModalVisibility;

#[derive(Clone, Copy)]
struct NavLink {
    label: &'static str,
    path: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "首页", path: "/" },
    NavLink { label: "知识库", path: "/knowledge" },
    NavLink { label: "在线课程", path: "/courses" },
    NavLink { label: "AI预测", path: "/prediction" },
    NavLink { label: "学习成就", path: "/achievement" },
    NavLink { label: "用户中心", path: "/profile" },
];

/// Page header shown on every route.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let store = expect_context::<TokenStore>();
    let notices = expect_context::<RwSignal<NotificationsState>>();
    let location = use_location();

    let modal = RwSignal::new(ModalVisibility::default());
    let busy = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    let on_search_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let path = location.pathname.get_untracked();
        on_search(&store, &notices, &path, &query.get_untracked());
    };

    let on_open = Callback::new(move |()| modal.update(|m| *m = m.open()));
    let on_close = Callback::new(move |()| modal.update(|m| *m = m.close()));

    let on_login = Callback::new(move |credentials: Credentials| {
        busy.set(true);
        leptos::task::spawn_local(async move {
            let outcome = handle_login(&store, &credentials).await;
            modal.update(|m| *m = m.after(outcome));
            busy.set(false);
        });
    });

    let on_register = Callback::new(move |form: RegisterForm| {
        busy.set(true);
        leptos::task::spawn_local(async move {
            let outcome = handle_register(&store, &notices, &form).await;
            modal.update(|m| *m = m.after(outcome));
            busy.set(false);
        });
    });

    let on_logout = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            handle_logout(&store).await;
        });
    });

    let controls = move || header_controls(&store.auth(), &store.config());

    view! {
        <div class="layout-header">
            <div class="header-left">
                <A href="/" attr:class="header-brand">"VOLTX"</A>
                <ul class="header-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <A href=link.path attr:class="header-nav__link">{link.label}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <form class="header-search" role="search" on:submit=on_search_submit>
                <input
                    class="header-search__input"
                    type="search"
                    placeholder="搜索"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="header-search__button" type="submit" title="搜索">
                    "🔍"
                </button>
            </form>

            <div class="header-right">
                {move || match controls() {
                    HeaderControls::Account { display_name, avatar_url } => {
                        view! {
                            <div class="header-account">
                                <A href="/profile" attr:class="header-account__avatar-link">
                                    <img
                                        class="header-account__avatar"
                                        src=avatar_url
                                        alt=display_name.clone()
                                        title=display_name
                                        width="30"
                                        height="30"
                                    />
                                </A>
                                <span class="header-account__logout" on:click=move |_| on_logout.run(())>
                                    "退出"
                                </span>
                            </div>
                        }
                            .into_any()
                    }
                    HeaderControls::LoginTrigger => {
                        view! {
                            <span class="header-login" on:click=move |_| on_open.run(())>
                                "登录"
                            </span>
                        }
                            .into_any()
                    }
                }}
            </div>

            <LoginModal
                open=Signal::derive(move || modal.get().is_open())
                busy=busy
                on_close=on_close
                on_login=on_login
                on_register=on_register
            />
        </div>
    }
}
