//! Page access rules.
//!
//! The router in each platform package maps its route enum onto [`Page`] and
//! asks [`Page::redirect`] where a visitor should go instead.

/// Every screen the client can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Root,
    Login,
    Register,
    Dashboard,
    Profile,
    NotFound,
}

impl Page {
    /// Screens that need a session.
    pub fn requires_session(self) -> bool {
        matches!(self, Page::Dashboard | Page::Profile)
    }

    /// Screens that only make sense without a session.
    pub fn guest_only(self) -> bool {
        matches!(self, Page::Login | Page::Register)
    }

    /// Where to send a visitor of this page, or `None` to render it.
    pub fn redirect(self, signed_in: bool) -> Option<Page> {
        match self {
            Page::Root | Page::NotFound => Some(Self::home(signed_in)),
            page if page.guest_only() && signed_in => Some(Page::Dashboard),
            page if page.requires_session() && !signed_in => Some(Page::Login),
            _ => None,
        }
    }

    /// The landing page for the given session presence.
    pub fn home(signed_in: bool) -> Page {
        if signed_in {
            Page::Dashboard
        } else {
            Page::Login
        }
    }
}
