use super::*;

#[test]
fn validate_registration_input_accepts_matching_passwords() {
    assert_eq!(
        validate_registration_input(" alice ", "correcthorse", "correcthorse"),
        Ok(Credentials { username: "alice".to_owned(), password: "correcthorse".to_owned() })
    );
}

#[test]
fn validate_registration_input_requires_username() {
    assert_eq!(
        validate_registration_input("  ", "correcthorse", "correcthorse"),
        Err("Username is required.")
    );
}

#[test]
fn validate_registration_input_rejects_short_password() {
    assert_eq!(
        validate_registration_input("alice", "short", "short"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_registration_input_rejects_mismatch() {
    assert_eq!(
        validate_registration_input("alice", "correcthorse", "correcthorsf"),
        Err("Passwords do not match.")
    );
}
