//! Login/register dialog controlled by the site header.

use leptos::prelude::*;

use crate::net::types::{Credentials, RegisterForm};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuthTab {
    #[default]
    Login,
    Register,
}

/// Modal with a login tab and a register tab.
///
/// The dialog does no validation; it hands raw field values to the callbacks
/// and relies on the parent to close it via `open`.
#[component]
pub fn LoginModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    on_close: Callback<()>,
    on_login: Callback<Credentials>,
    on_register: Callback<RegisterForm>,
) -> impl IntoView {
    let tab = RwSignal::new(AuthTab::default());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    // Passwords never outlive the dialog.
    Effect::new(move || {
        if !open.get() {
            password.set(String::new());
            confirm_password.set(String::new());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match tab.get_untracked() {
            AuthTab::Login => on_login.run(Credentials {
                username: username.get_untracked(),
                password: password.get_untracked(),
            }),
            AuthTab::Register => on_register.run(RegisterForm {
                username: username.get_untracked(),
                password: password.get_untracked(),
                confirm_password: confirm_password.get_untracked(),
            }),
        }
    };

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let tab_class = move |which: AuthTab| {
        if tab.get() == which { "login-modal__tab login-modal__tab--active" } else { "login-modal__tab" }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog login-modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="login-modal__header">
                        <button
                            type="button"
                            class=move || tab_class(AuthTab::Login)
                            on:click=move |_| tab.set(AuthTab::Login)
                        >
                            "登录"
                        </button>
                        <button
                            type="button"
                            class=move || tab_class(AuthTab::Register)
                            on:click=move |_| tab.set(AuthTab::Register)
                        >
                            "注册"
                        </button>
                        <button
                            type="button"
                            class="login-modal__close"
                            title="关闭"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>

                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            placeholder="用户名"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            autocomplete=move || {
                                if tab.get() == AuthTab::Register { "new-password" } else { "current-password" }
                            }
                            placeholder="密码"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || tab.get() == AuthTab::Register>
                            <input
                                class="login-input"
                                type="password"
                                autocomplete="new-password"
                                placeholder="确认密码"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        </Show>
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            {move || if tab.get() == AuthTab::Register { "注册" } else { "登录" }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
