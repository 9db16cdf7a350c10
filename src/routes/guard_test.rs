use super::*;

const PRESENT: SessionState = SessionState::Present;
const ABSENT: SessionState = SessionState::Absent;

const SAMPLE_PATHS: &[&str] = &[
    "/",
    "/home",
    "/home/user",
    "/home/role",
    "/home/menu",
    "/home/table",
    "/register",
    "/missing",
    "",
    "/register/",
];

// =============================================================
// Decision policy
// =============================================================

#[test]
fn anonymous_user_is_sent_to_login_from_protected_pages() {
    for path in ["/home", "/home/user", "/home/table", "/anything"] {
        assert_eq!(evaluate(path, ABSENT), Navigation::RedirectToLogin, "path {path}");
    }
}

#[test]
fn signed_in_user_on_login_is_sent_home() {
    assert_eq!(evaluate(LOGIN_ROUTE, PRESENT), Navigation::RedirectToHome);
}

#[test]
fn register_always_proceeds() {
    assert_eq!(evaluate(REGISTER_ROUTE, ABSENT), Navigation::Proceed);
    assert_eq!(evaluate(REGISTER_ROUTE, PRESENT), Navigation::Proceed);
}

#[test]
fn signed_in_user_reaches_home() {
    assert_eq!(evaluate(HOME_ROUTE, PRESENT), Navigation::Proceed);
    assert_eq!(evaluate("/home/menu", PRESENT), Navigation::Proceed);
}

#[test]
fn anonymous_user_may_open_login() {
    assert_eq!(evaluate(LOGIN_ROUTE, ABSENT), Navigation::Proceed);
}

#[test]
fn paths_are_compared_exactly() {
    assert_eq!(evaluate("/register/", ABSENT), Navigation::RedirectToLogin);
    assert_eq!(evaluate("", ABSENT), Navigation::RedirectToLogin);
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn scenario_anonymous_home_user_redirects_to_root() {
    let decision = evaluate("/home/user", ABSENT);
    assert_eq!(decision.target("/home/user"), "/");
}

#[test]
fn scenario_signed_in_root_redirects_home() {
    let decision = evaluate("/", PRESENT);
    assert_eq!(decision.target("/"), "/home");
}

#[test]
fn scenario_signed_in_register_proceeds() {
    let decision = evaluate("/register", PRESENT);
    assert!(!decision.is_redirect());
    assert_eq!(decision.target("/register"), "/register");
}

// =============================================================
// Properties
// =============================================================

#[test]
fn redirect_targets_always_proceed() {
    for session in [PRESENT, ABSENT] {
        for path in SAMPLE_PATHS {
            let decision = evaluate(path, session);
            let next = evaluate(decision.target(path), session);
            assert_eq!(next, Navigation::Proceed, "path {path:?} session {session:?}");
        }
    }
}

#[test]
fn signed_in_user_is_never_sent_to_login() {
    for path in SAMPLE_PATHS {
        assert_ne!(evaluate(path, PRESENT), Navigation::RedirectToLogin, "path {path:?}");
    }
}

#[test]
fn anonymous_user_is_never_sent_home() {
    for path in SAMPLE_PATHS {
        assert_ne!(evaluate(path, ABSENT), Navigation::RedirectToHome, "path {path:?}");
    }
}
