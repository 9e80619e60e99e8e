use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "hunter22"),
        Ok(Credentials { username: "alice".to_owned(), password: "hunter22".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let creds = validate_login_input("alice", " pw ").unwrap();
    assert_eq!(creds.password, " pw ");
}
