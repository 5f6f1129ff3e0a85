use dioxus::prelude::*;

use store::ClientConfig;
use ui::{end_session, use_auth, AuthProvider, Navbar, Page};
use views::{Dashboard, Login, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    fn page(&self) -> Page {
        match self {
            Route::Root {} => Page::Root,
            Route::Login {} => Page::Login,
            Route::Register {} => Page::Register,
            Route::Dashboard {} => Page::Dashboard,
            Route::Profile {} => Page::Profile,
            Route::NotFound { .. } => Page::NotFound,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Login => Route::Login {},
            Page::Register => Route::Register {},
            Page::Dashboard => Route::Dashboard {},
            Page::Profile => Route::Profile {},
            Page::Root | Page::NotFound => Route::Root {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../taskdeck.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Bundled configuration, with `TASKDECK_API_URL` (read at build time)
/// overriding the server address.
fn load_config() -> ClientConfig {
    let mut config = match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    };
    if let Some(url) = option_env!("TASKDECK_API_URL") {
        config.api.base_url = url.to_string();
    }
    tracing::info!("Using task API at {}", config.api.base_url);
    config
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::VIEWS_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Route guard and chrome shared by every page.
#[component]
fn AppShell() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    if let Some(target) = route.page().redirect(auth().is_signed_in()) {
        nav.replace(Route::from(target));
        return rsx! {};
    }

    rsx! {
        if let Some(user) = auth().user().cloned() {
            Navbar {
                user,
                on_dashboard: move |_| {
                    nav.push(Route::Dashboard {});
                },
                on_profile: move |_| {
                    nav.push(Route::Profile {});
                },
                on_logout: move |_| {
                    end_session(auth);
                    nav.replace(Route::Login {});
                },
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Redirected away by [`AppShell`].
#[component]
fn Root() -> Element {
    rsx! {}
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("Unknown path /{}", segments.join("/"));
    rsx! {}
}
