use outcome_rail::{Failure, FailureTrace, ReasonFormatConfig, ReasonFormatter};
use std::fmt::Display;

fn sample() -> Failure {
    Failure::new("deploy failed").with_causes(vec![
        Failure::new("build failed").with_cause(Failure::new("linker error")),
        Failure::new("rollback skipped"),
    ])
}

#[test]
fn default_config_joins_with_arrow() {
    assert_eq!(
        sample().cause_chain(),
        "deploy failed -> build failed -> linker error -> rollback skipped"
    );
}

#[test]
fn single_failure_has_no_separator() {
    assert_eq!(Failure::new("alone").cause_chain(), "alone");
}

#[test]
fn cascaded_indents_by_depth() {
    assert_eq!(
        sample().cause_chain_with(ReasonFormatConfig::cascaded()),
        "deploy failed\n  build failed\n    linker error\n  rollback skipped"
    );
}

#[test]
fn pretty_marks_causes() {
    assert_eq!(
        sample().cause_chain_with(ReasonFormatConfig::pretty()),
        "deploy failed\n  └─ build failed\n    └─ linker error\n  └─ rollback skipped"
    );
}

#[test]
fn compact_uses_pipes() {
    assert_eq!(
        sample().cause_chain_with(ReasonFormatConfig::compact()),
        "deploy failed | build failed | linker error | rollback skipped"
    );
}

#[test]
fn config_fields_are_adjustable() {
    let config = ReasonFormatConfig {
        separator: " / ".into(),
        ..Default::default()
    };
    assert_eq!(
        Failure::new("a").with_cause(Failure::new("b")).cause_chain_with(config),
        "a / b"
    );
}

struct Bracketed;

impl ReasonFormatter for Bracketed {
    fn format_item(&self, item: &dyn Display) -> String {
        format!("[{item}]")
    }

    fn separator(&self) -> &str {
        ""
    }
}

#[test]
fn custom_formatter_overrides_items() {
    let failure = Failure::new("outer").with_cause(Failure::new("inner"));
    assert_eq!(failure.cause_chain_with(Bracketed), "[outer][inner]");
}
