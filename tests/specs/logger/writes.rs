//! Write-path specs
//!
//! Verify entry counts, severity tagging, and message fidelity.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn every_call_appends_exactly_one_entry() {
    let s = Scenario::new();

    s.logger.log_error("e").unwrap();
    assert_eq!(s.entries().len(), 1);
    s.logger.log_warning("w").unwrap();
    assert_eq!(s.entries().len(), 2);
    s.logger.log_info("i").unwrap();
    assert_eq!(s.entries().len(), 3);
    s.logger.log_audit_success("as").unwrap();
    assert_eq!(s.entries().len(), 4);
    s.logger.log_audit_failure("af").unwrap();
    assert_eq!(s.entries().len(), 5);
}

#[test]
fn each_method_tags_its_documented_severity() {
    let s = Scenario::new();

    s.logger.log_error("boom").unwrap();
    s.logger.log_warning("careful").unwrap();
    s.logger.log_info("fyi").unwrap();
    s.logger.log_audit_success("let in").unwrap();
    s.logger.log_audit_failure("kept out").unwrap();

    let severities: Vec<Severity> = s.entries().iter().map(|e| e.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Error,
            Severity::Warning,
            Severity::Information,
            Severity::SuccessAudit,
            Severity::FailureAudit,
        ]
    );
}

#[test]
fn message_below_the_limit_is_stored_verbatim() {
    let s = Scenario::new();

    s.logger.log_warning("LogWarning test").unwrap();

    assert_eq!(s.entries()[0].message, "LogWarning test");
}

#[test]
fn empty_message_is_accepted() {
    let s = Scenario::new();

    s.logger.log_audit_success("").unwrap();

    assert_eq!(s.entries()[0].message, "");
    assert_eq!(s.entries()[0].severity, Severity::SuccessAudit);
}

#[test]
fn error_values_are_stored_with_their_causes() {
    #[derive(Debug)]
    struct RegistryLocked;

    impl std::fmt::Display for RegistryLocked {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("event-log registry is locked")
        }
    }

    impl std::error::Error for RegistryLocked {}

    #[derive(Debug)]
    struct StartupFailed(RegistryLocked);

    impl std::fmt::Display for StartupFailed {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("service startup failed")
        }
    }

    impl std::error::Error for StartupFailed {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    let s = Scenario::new();
    s.logger
        .log_error_chain(&StartupFailed(RegistryLocked))
        .unwrap();

    assert_eq!(
        s.entries()[0].message,
        "service startup failed\ncaused by: event-log registry is locked"
    );
    assert_eq!(s.entries()[0].severity, Severity::Error);
}

#[test]
fn rebound_source_attributes_subsequent_entries() {
    let mut s = Scenario::new();

    s.store.create_source("handover-app", CHANNEL).unwrap();
    s.logger.set_source("handover-app");
    s.logger.log_info("after handover").unwrap();

    let sources: Vec<String> = s
        .store
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            StoreCall::WriteEntry { source, .. } => Some(source),
            _ => None,
        })
        .collect();
    assert_eq!(sources, vec!["handover-app".to_string()]);
}

#[test]
fn disabled_store_accepts_writes_and_keeps_nothing() {
    use evlog_adapters::NoOpStore;

    let logger = EventLogLogger::new(NoOpStore::new(), SOURCE, CHANNEL).unwrap();

    logger.log_error("dropped").unwrap();
    logger.log_audit_failure("also dropped").unwrap();

    assert!(NoOpStore::new().channels().unwrap().is_empty());
}
