use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

/// A one-line status message. Shows a close button when `on_dismiss` is set.
#[component]
pub fn Banner(
    kind: BannerKind,
    message: String,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
) -> Element {
    let class = match kind {
        BannerKind::Error => "banner banner-error",
        BannerKind::Success => "banner banner-success",
    };
    rsx! {
        div {
            class: "{class}",
            role: "alert",
            span { "{message}" }
            if let Some(dismiss) = on_dismiss {
                button {
                    class: "banner-close",
                    r#type: "button",
                    onclick: move |_| dismiss.call(()),
                    Icon { width: 12, height: 12, icon: FaXmark }
                }
            }
        }
    }
}

/// Wait `ms` milliseconds, then clear `banner`.
pub async fn clear_after(mut banner: Signal<Option<String>>, ms: u32) {
    let delay = Duration::from_millis(u64::from(ms));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
    banner.set(None);
}
