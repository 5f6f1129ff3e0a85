use dioxus::prelude::*;
use store::User;

use crate::icons::{FaListCheck, FaRightFromBracket, FaUser};
use crate::Icon;

/// Top bar shown while signed in.
#[component]
pub fn Navbar(
    user: User,
    on_dashboard: EventHandler<()>,
    on_profile: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Task Manager" }
            div {
                class: "navbar-links",
                button {
                    class: "navbar-link",
                    onclick: move |_| on_dashboard.call(()),
                    Icon { width: 14, height: 14, icon: FaListCheck }
                    "Dashboard"
                }
                button {
                    class: "navbar-link",
                    onclick: move |_| on_profile.call(()),
                    Icon { width: 14, height: 14, icon: FaUser }
                    "Profile"
                }
            }
            div {
                class: "navbar-user",
                if let Some(picture) = user.profile_picture.clone().filter(|p| !p.is_empty()) {
                    img { class: "avatar avatar-small", src: "{picture}", alt: "" }
                }
                span { "{user.username}" }
                if user.is_admin() {
                    span { class: "badge badge-info", "admin" }
                }
                button {
                    class: "navbar-link",
                    onclick: move |_| on_logout.call(()),
                    Icon { width: 14, height: 14, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    }
}
