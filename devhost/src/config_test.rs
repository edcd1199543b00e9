use super::*;

// =============================================================================
// env_number
// =============================================================================

#[test]
fn env_number_missing_returns_default() {
    let val: u16 = env_number("__TEST_DEVHOST_MISSING__", 42).unwrap();
    assert_eq!(val, 42);
}

#[test]
fn env_number_present_valid() {
    unsafe { std::env::set_var("__TEST_DEVHOST_VALID__", " 8080 ") };
    let val: u16 = env_number("__TEST_DEVHOST_VALID__", 0).unwrap();
    assert_eq!(val, 8080);
    unsafe { std::env::remove_var("__TEST_DEVHOST_VALID__") };
}

#[test]
fn env_number_present_invalid_is_error() {
    unsafe { std::env::set_var("__TEST_DEVHOST_INVALID__", "eighty") };
    let err = env_number::<u16>("__TEST_DEVHOST_INVALID__", 7).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "__TEST_DEVHOST_INVALID__", value: "eighty".to_owned() });
    unsafe { std::env::remove_var("__TEST_DEVHOST_INVALID__") };
}

#[test]
fn invalid_error_names_the_variable() {
    let err = ConfigError::Invalid { key: "PORT", value: "x".to_owned() };
    assert_eq!(err.to_string(), "PORT must be a valid number, got \"x\"");
}
