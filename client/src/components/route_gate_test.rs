use super::*;

#[test]
fn pending_label_before_hydration() {
    assert_eq!(pending_label(false, GateDecision::RedirectToLogin), "Loading...");
}

#[test]
fn pending_label_names_redirect_target() {
    assert_eq!(pending_label(true, GateDecision::RedirectToLogin), "Redirecting to login...");
    assert_eq!(
        pending_label(true, GateDecision::RedirectToDashboard),
        "Redirecting to dashboard..."
    );
}
