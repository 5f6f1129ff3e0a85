//! Sign-in page with username/password form.

use api::ApiClient;
use dioxus::prelude::*;

use crate::actions;
use crate::auth::{begin_session, use_auth, use_config};
use crate::banner::{Banner, BannerKind};
use crate::forms::LoginForm;

/// Sign-in form. Calls `on_signed_in` once the session is stored.
#[component]
pub fn LoginView(on_signed_in: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let auth = use_auth();
    let base_url = use_config().api.base_url;
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = ApiClient::new(base_url.clone());
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = actions::sign_in(&client, &form()).await;
            loading.set(false);
            match result {
                Ok(session) => {
                    begin_session(auth, session);
                    on_signed_in.call(());
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Sign In" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    Banner { kind: BannerKind::Error, message: err }
                }

                label { class: "field-label", r#for: "login-username", "Username" }
                input {
                    id: "login-username",
                    class: "field",
                    r#type: "text",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }

                label { class: "field-label", r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    class: "field",
                    r#type: "password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                button {
                    class: "link",
                    r#type: "button",
                    onclick: move |_| on_register.call(()),
                    "Sign Up"
                }
            }
        }
    }
}
