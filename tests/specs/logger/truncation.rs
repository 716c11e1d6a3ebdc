//! Truncation policy specs
//!
//! Verify the length policy at and past its boundary.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn oversized_message_is_cut_to_the_policy_length() {
    let s = Scenario::new();
    let max = s.logger.max_message_len();

    s.logger.log_info(&"a".repeat(max * 2)).unwrap();

    let stored = &s.entries()[0].message;
    assert_eq!(stored.chars().count(), max);
    assert!(stored.ends_with(TRUNCATION_MARKER));
}

#[test]
fn truncated_message_keeps_its_leading_content() {
    let s = Scenario::new();
    let max = s.logger.max_message_len();

    s.logger.log_info(&"a".repeat(max * 2)).unwrap();

    let stored = &s.entries()[0].message;
    let expected_prefix = "a".repeat(max - TRUNCATION_MARKER.len());
    assert_eq!(stored, &format!("{expected_prefix}{TRUNCATION_MARKER}"));
}

#[test]
fn message_at_the_limit_is_untouched() {
    let s = Scenario::new();
    let message = "b".repeat(s.logger.max_message_len());

    s.logger.log_info(&message).unwrap();

    assert_eq!(s.entries()[0].message, message);
    assert!(!s.entries()[0].message.ends_with(TRUNCATION_MARKER));
}

#[test]
fn marker_never_appears_on_short_messages() {
    let s = Scenario::new();

    s.logger.log_error("short and sweet").unwrap();

    assert!(!s.entries()[0].message.contains(TRUNCATION_MARKER));
}
