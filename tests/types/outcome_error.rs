use outcome_rail::OutcomeError;
use std::error::Error;

#[test]
fn messages_are_distinct() {
    let all = [
        OutcomeError::MissingArgument("failure"),
        OutcomeError::ReadWhileFailed,
        OutcomeError::ReadFromNoValue,
        OutcomeError::EmptyValue,
    ];

    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a.to_string(), b.to_string());
        }
    }
}

#[test]
fn missing_argument_names_the_argument() {
    assert_eq!(
        OutcomeError::MissingArgument("reason").to_string(),
        "reason must be defined"
    );
}

#[test]
fn empty_value_points_to_no_value() {
    let message = OutcomeError::EmptyValue.to_string();
    assert!(message.contains("with_no_value()"));
}

#[test]
fn invalid_state_covers_value_reads_only() {
    assert!(OutcomeError::ReadWhileFailed.is_invalid_state());
    assert!(OutcomeError::ReadFromNoValue.is_invalid_state());
    assert!(!OutcomeError::EmptyValue.is_invalid_state());
    assert!(!OutcomeError::MissingArgument("x").is_invalid_state());
}

#[test]
fn usable_as_boxed_error() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(OutcomeError::ReadWhileFailed);
    assert!(boxed.source().is_none());
    assert_eq!(boxed.to_string(), "cannot read value while in failed state");
}
