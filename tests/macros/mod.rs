use outcome_rail::{failure, success, DefaultFailure, Message, NoValue, Outcome, Success};

#[test]
fn failure_macro_formats_message() {
    let table = "users";
    let failure = failure!("table {table} locked after {} attempts", 3);

    assert_eq!(failure, DefaultFailure::new("table users locked after 3 attempts"));
}

#[test]
fn success_macro_formats_message() {
    let success = success!("{:>3}%", 42);
    assert_eq!(success, Success::new(" 42%"));
    assert_eq!(success.message(), "42%");
}

#[test]
fn macros_feed_outcome_builders() {
    let outcome: Outcome<NoValue> = Outcome::successful()
        .with_no_value()
        .with_success(success!("parsed {} rows", 10))
        .with_failure(failure!("row {} invalid", 4));

    assert!(outcome.is_failed());
    assert_eq!(outcome.to_string(), "failed: parsed 10 rows; row 4 invalid");
}

#[test]
fn prelude_exposes_macros_and_types() {
    use outcome_rail::prelude::*;

    let outcome: Outcome<NoValue> = Outcome::failed().with_failure(failure!("nope"));
    assert_eq!(outcome.failures()[0].message(), "nope");
}
