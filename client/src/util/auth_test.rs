use super::*;

#[test]
fn public_routes_always_render() {
    assert_eq!(gate_decision(true, RouteAccess::Public), GateDecision::Render);
    assert_eq!(gate_decision(false, RouteAccess::Public), GateDecision::Render);
}

#[test]
fn protected_route_redirects_anonymous_to_login() {
    assert_eq!(gate_decision(false, RouteAccess::RequiresAuth), GateDecision::RedirectToLogin);
}

#[test]
fn protected_route_renders_when_authenticated() {
    assert_eq!(gate_decision(true, RouteAccess::RequiresAuth), GateDecision::Render);
}

#[test]
fn anonymous_route_redirects_authenticated_to_dashboard() {
    assert_eq!(
        gate_decision(true, RouteAccess::RequiresAnonymous),
        GateDecision::RedirectToDashboard
    );
}

#[test]
fn anonymous_route_renders_when_logged_out() {
    assert_eq!(gate_decision(false, RouteAccess::RequiresAnonymous), GateDecision::Render);
}

#[test]
fn redirect_paths() {
    assert_eq!(GateDecision::Render.redirect_path(), None);
    assert_eq!(GateDecision::RedirectToLogin.redirect_path(), Some("/login"));
    assert_eq!(GateDecision::RedirectToDashboard.redirect_path(), Some("/dashboard"));
}
