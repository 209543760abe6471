use outcome_rail::{DefaultFailure, ExceptionalFailure, Failure, Message, Reason, Success};
use std::io;

#[test]
fn success_message_is_trimmed() {
    let success = Success::new("  Success message.\n");
    assert_eq!(success.message(), "Success message.");
    assert_eq!(success.to_string(), "Success message.");
}

#[test]
fn success_converts_from_strings() {
    assert_eq!(Success::from("done"), Success::new("done"));
    assert_eq!(Success::from(String::from(" done ")), Success::new("done"));
}

#[test]
fn reason_predicates_follow_variant() {
    let success = Reason::from(Success::new("ok"));
    let default = Reason::from(DefaultFailure::new("bad"));
    let exceptional = Reason::from(ExceptionalFailure::new(io::Error::new(
        io::ErrorKind::Other,
        "worse",
    )));

    assert!(success.is_success());
    assert!(!success.is_failure());
    assert!(!success.is_exceptional_failure());

    assert!(default.is_failure());
    assert!(!default.is_success());
    assert!(!default.is_exceptional_failure());

    assert!(exceptional.is_failure());
    assert!(exceptional.is_exceptional_failure());
}

#[test]
fn reason_accessors_unwrap_variant() {
    let success = Reason::from(Success::new("ok"));
    let failure = Reason::from(Failure::new("bad"));

    assert_eq!(success.as_success().map(|s| s.message().into_owned()), Some("ok".to_string()));
    assert!(success.as_failure().is_none());
    assert_eq!(failure.as_failure().map(Failure::is_exceptional), Some(false));
    assert!(failure.as_success().is_none());
}

#[test]
fn reason_message_and_display_delegate() {
    let reason = Reason::from(DefaultFailure::new("disk full"));
    assert_eq!(reason.message(), "disk full");
    assert_eq!(reason.to_string(), "disk full");
}

#[test]
fn equal_messages_make_equal_default_reasons() {
    assert_eq!(
        Reason::from(DefaultFailure::new("same")),
        Reason::from(Failure::new(" same "))
    );
    assert_ne!(
        Reason::from(DefaultFailure::new("same")),
        Reason::from(Success::new("same"))
    );
}
