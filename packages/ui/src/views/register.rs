//! Registration page view.

use api::ApiClient;
use dioxus::prelude::*;

use crate::actions;
use crate::auth::use_config;
use crate::banner::{Banner, BannerKind};
use crate::forms::RegisterForm;

/// Sign-up form. Calls `on_registered` after the account is created; the
/// user still has to sign in.
#[component]
pub fn RegisterView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let base_url = use_config().api.base_url;
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = ApiClient::new(base_url.clone());
        spawn(async move {
            error.set(None);
            loading.set(true);
            let result = actions::sign_up(&client, &form()).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    tracing::info!("Registered {}", form().username);
                    on_registered.call(());
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { class: "auth-title", "Create Account" }

            form {
                class: "auth-form",
                onsubmit: handle_register,

                if let Some(err) = error() {
                    Banner { kind: BannerKind::Error, message: err }
                }

                label { class: "field-label", r#for: "register-username", "Username" }
                input {
                    id: "register-username",
                    class: "field",
                    r#type: "text",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }

                label { class: "field-label", r#for: "register-email", "Email" }
                input {
                    id: "register-email",
                    class: "field",
                    r#type: "email",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                label { class: "field-label", r#for: "register-password", "Password" }
                input {
                    id: "register-password",
                    class: "field",
                    r#type: "password",
                    value: form().password,
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                label { class: "field-label", r#for: "register-confirm", "Confirm Password" }
                input {
                    id: "register-confirm",
                    class: "field",
                    r#type: "password",
                    value: form().confirm_password,
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign Up" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                button {
                    class: "link",
                    r#type: "button",
                    onclick: move |_| on_login.call(()),
                    "Sign In"
                }
            }
        }
    }
}
