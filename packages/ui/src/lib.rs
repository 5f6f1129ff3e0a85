//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod actions;
pub mod badge;
pub mod forms;
pub mod routing;
pub mod views;

mod avatar;
mod storage;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod auth;
pub use auth::{
    api_client, begin_session, end_session, use_api_client, use_auth, use_config, AuthProvider,
    AuthState,
};

mod banner;
pub use banner::{clear_after, Banner, BannerKind};

mod navbar;
pub use navbar::Navbar;

pub use routing::Page;
