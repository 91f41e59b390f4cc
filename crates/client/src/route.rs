//! Protected-navigation gate.
//!
//! A pure derivation from session state to an allow/redirect decision.
//! Nothing here performs navigation; callers act on the returned value.

use crate::session::{SessionSnapshot, SessionStatus};

/// What a protected view should do right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving - show a neutral loading indicator, decide
    /// nothing yet.
    Pending,
    /// Admit navigation to the requested protected view.
    Allow,
    /// Send the user to the sign-in view. The originally requested path is
    /// not preserved (no deep-link memory) - a known limitation.
    RedirectToSignIn,
}

/// Derive the navigation decision for a protected view.
#[must_use]
pub const fn route_decision(session: &SessionSnapshot) -> RouteDecision {
    match session.status {
        SessionStatus::Unresolved | SessionStatus::Resolving => RouteDecision::Pending,
        SessionStatus::Authenticated => RouteDecision::Allow,
        SessionStatus::Anonymous => RouteDecision::RedirectToSignIn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn snapshot(status: SessionStatus) -> SessionSnapshot {
        SessionSnapshot { status, user: None }
    }

    #[test]
    fn test_unresolved_and_resolving_are_pending() {
        assert_eq!(
            route_decision(&snapshot(SessionStatus::Unresolved)),
            RouteDecision::Pending
        );
        assert_eq!(
            route_decision(&snapshot(SessionStatus::Resolving)),
            RouteDecision::Pending
        );
    }

    #[test]
    fn test_authenticated_is_allowed() {
        assert_eq!(
            route_decision(&snapshot(SessionStatus::Authenticated)),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_anonymous_redirects_to_sign_in() {
        assert_eq!(
            route_decision(&snapshot(SessionStatus::Anonymous)),
            RouteDecision::RedirectToSignIn
        );
    }
}
