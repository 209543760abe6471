pub mod outcome_error;
pub mod reason;
pub mod reason_formatter;
