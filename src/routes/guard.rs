//! Login-gate navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated before every route transition. The session state is passed in
//! by the caller; the guard only reads it and has no other inputs, so the
//! decision is a pure function of `(destination, session)`.

use crate::session::SessionState;

/// Login page; also the application root.
pub const LOGIN_ROUTE: &str = "/";
pub const HOME_ROUTE: &str = "/home";
/// Reachable with or without a session.
pub const REGISTER_ROUTE: &str = "/register";

/// Outcome of a guarded transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Continue to the requested destination.
    Proceed,
    RedirectToLogin,
    RedirectToHome,
}

impl Navigation {
    /// Path the transition ends at.
    #[must_use]
    pub fn target(self, requested: &str) -> &str {
        match self {
            Self::Proceed => requested,
            Self::RedirectToLogin => LOGIN_ROUTE,
            Self::RedirectToHome => HOME_ROUTE,
        }
    }

    #[must_use]
    pub fn is_redirect(self) -> bool {
        !matches!(self, Self::Proceed)
    }
}

/// Decide the outcome of navigating to `destination`.
///
/// First match wins:
/// 1. anything but login/register without a session goes to login;
/// 2. login with a session goes home;
/// 3. everything else proceeds.
///
/// Register is never gated, so a signed-in user can still open it.
#[must_use]
pub fn evaluate(destination: &str, session: SessionState) -> Navigation {
    let authenticated = session.is_present();
    if destination != LOGIN_ROUTE && destination != REGISTER_ROUTE && !authenticated {
        Navigation::RedirectToLogin
    } else if destination == LOGIN_ROUTE && authenticated {
        Navigation::RedirectToHome
    } else {
        Navigation::Proceed
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
