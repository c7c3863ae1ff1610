use super::*;

#[test]
fn validate_login_input_trims_account() {
    assert_eq!(
        validate_login_input("  admin1  ", "secret12"),
        Ok(("admin1".to_owned(), "secret12".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret12"), Err("Enter both account and password."));
    assert_eq!(validate_login_input("admin1", ""), Err("Enter both account and password."));
}

#[test]
fn validate_login_input_password_too_short() {
    assert_eq!(validate_login_input("admin1", "12345"), Err("Password must be 6-18 characters."));
}

#[test]
fn validate_login_input_password_too_long() {
    assert_eq!(
        validate_login_input("admin1", "1234567890123456789"),
        Err("Password must be 6-18 characters.")
    );
}

#[test]
fn validate_login_input_account_too_long() {
    let account = "a".repeat(MAX_ACCOUNT_LEN + 1);
    assert_eq!(validate_login_input(&account, "secret12"), Err("Account is too long."));
}

#[test]
fn validate_login_input_counts_password_in_utf16_units() {
    // Each emoji is two UTF-16 units: 9 of them is 18 units, 10 is 20.
    assert!(validate_login_input("admin1", &"\u{1F600}".repeat(9)).is_ok());
    assert_eq!(
        validate_login_input("admin1", &"\u{1F600}".repeat(10)),
        Err("Password must be 6-18 characters.")
    );
    assert!(validate_login_input("admin1", &"\u{1F600}".repeat(3)).is_ok());
}
