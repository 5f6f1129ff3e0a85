use dioxus::prelude::*;
use store::User;

use crate::actions::{self, PROFILE_SAVED};
use crate::auth::{use_api_client, use_config};
use crate::avatar::object_url_from_input;
use crate::banner::{clear_after, Banner, BannerKind};
use crate::forms::ProfileForm;

const AVATAR_INPUT_ID: &str = "profile-avatar";

/// Profile editor.
///
/// Loads the profile on mount into a buffered form; nothing is sent until the
/// form is submitted.
#[component]
pub fn ProfileView() -> Element {
    let client = use_api_client();
    let banner_ms = use_config().ui.success_banner_ms;
    let mut form = use_signal(ProfileForm::default);
    let mut user = use_signal(|| Option::<User>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        match actions::load_profile(&client()).await {
            Ok(profile) => {
                form.set(ProfileForm::from_user(&profile));
                user.set(Some(profile));
            }
            Err(message) => error.set(Some(message)),
        }
    });

    let handle_avatar = move |_evt: FormEvent| {
        if let Some(url) = object_url_from_input(AVATAR_INPUT_ID) {
            form.write().profile_picture = url;
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            match actions::save_profile(&client(), &form()).await {
                Ok(updated) => {
                    tracing::info!("Profile updated for {}", updated.username);
                    form.set(ProfileForm::from_user(&updated));
                    user.set(Some(updated));
                    error.set(None);
                    success.set(Some(PROFILE_SAVED.to_string()));
                    clear_after(success, banner_ms).await;
                }
                Err(message) => {
                    success.set(None);
                    error.set(Some(message));
                }
            }
        });
    };

    let picture = form().profile_picture;

    rsx! {
        div {
            class: "page-card",
            h1 { class: "page-title", "Profile" }

            if let Some(message) = success() {
                Banner { kind: BannerKind::Success, message }
            }
            if let Some(message) = error() {
                Banner { kind: BannerKind::Error, message }
            }

            form {
                class: "profile-form",
                onsubmit: handle_submit,

                div {
                    class: "profile-avatar",
                    if picture.is_empty() {
                        div {
                            class: "avatar avatar-large avatar-placeholder",
                            {form().username.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()}
                        }
                    } else {
                        img { class: "avatar avatar-large", src: "{picture}", alt: "Profile picture" }
                    }
                    label {
                        class: "btn btn-secondary",
                        r#for: AVATAR_INPUT_ID,
                        "Upload Picture"
                    }
                    input {
                        id: AVATAR_INPUT_ID,
                        class: "visually-hidden",
                        r#type: "file",
                        accept: "image/*",
                        onchange: handle_avatar,
                    }
                }

                label { class: "field-label", r#for: "profile-username", "Username" }
                input {
                    id: "profile-username",
                    class: "field",
                    r#type: "text",
                    value: form().username,
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }

                label { class: "field-label", r#for: "profile-email", "Email" }
                input {
                    id: "profile-email",
                    class: "field",
                    r#type: "email",
                    value: form().email,
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                if let Some(created) = user().and_then(|u| u.created_at) {
                    p { class: "muted", "Member since {created}" }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    "Update Profile"
                }
            }
        }
    }
}
