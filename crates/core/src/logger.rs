// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source/channel-bound logger over a host event store

use crate::store::{EventStore, Severity, StoreError};
use std::borrow::Cow;
use thiserror::Error;

/// Suffix appended to a message that exceeded the length policy.
///
/// Public so callers and tests can detect truncated output.
pub const TRUNCATION_MARKER: &str = "/truncated";

/// Default per-entry length policy, in characters.
///
/// The host caps a single entry at roughly 31839 code units; the default
/// stays under that with room for [`TRUNCATION_MARKER`]. The true cap can
/// vary by host, so the policy is per instance
/// ([`EventLogLogger::with_max_message_len`]), not universal.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 31_837;

/// Errors from logger operations
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The host refused to register the source.
    #[error(
        "could not register event-log source {source}: access denied. \
         Run with elevated privileges, or grant write access to the \
         event-log registry"
    )]
    PermissionDenied {
        source: String,
        #[source]
        cause: StoreError,
    },
    /// Any other host failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Writes severity-tagged entries to the host event log under a fixed
/// source/channel binding.
///
/// Construction registers the source with the host if its channel is not
/// known yet, so an unprivileged caller fails fast instead of on the
/// first write. Every write re-runs the same check; once registered it is
/// a single exists query.
///
/// The logger holds no locks. Concurrent writes through a shared clone
/// are ordered by the host store, and a racing pair of registration
/// checks can at worst issue a redundant creation, which the host treats
/// as idempotent.
#[derive(Clone)]
pub struct EventLogLogger<S> {
    store: S,
    source: String,
    channel: String,
    max_message_len: usize,
}

impl<S: EventStore> EventLogLogger<S> {
    /// Create a logger bound to `source` and `channel`, registering the
    /// source if the host does not know the channel yet.
    pub fn new(
        store: S,
        source: impl Into<String>,
        channel: impl Into<String>,
    ) -> Result<Self, LoggerError> {
        Self::with_max_message_len(store, source, channel, DEFAULT_MAX_MESSAGE_LEN)
    }

    /// Same as [`EventLogLogger::new`], with an explicit per-entry length
    /// policy. `max_message_len` must leave room for the marker.
    pub fn with_max_message_len(
        store: S,
        source: impl Into<String>,
        channel: impl Into<String>,
        max_message_len: usize,
    ) -> Result<Self, LoggerError> {
        debug_assert!(max_message_len >= TRUNCATION_MARKER.len());
        let logger = Self {
            store,
            source: source.into(),
            channel: channel.into(),
            max_message_len,
        };
        logger.ensure_registered()?;
        Ok(logger)
    }

    /// Source the next write attributes entries to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Rebind the source name.
    ///
    /// Nothing is validated here; the next write re-runs the registration
    /// check and attributes its entry to the new name.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Channel this logger was bound to at construction.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Per-entry length policy, in characters.
    pub fn max_message_len(&self) -> usize {
        self.max_message_len
    }

    /// Write `message` at error severity.
    pub fn log_error(&self, message: &str) -> Result<(), LoggerError> {
        self.write(message, Severity::Error)
    }

    /// Write an error value at error severity, including every transitive
    /// cause in the message.
    pub fn log_error_chain(
        &self,
        error: &(dyn std::error::Error + 'static),
    ) -> Result<(), LoggerError> {
        self.write(&render_error_chain(error), Severity::Error)
    }

    /// Write `message` at warning severity.
    pub fn log_warning(&self, message: &str) -> Result<(), LoggerError> {
        self.write(message, Severity::Warning)
    }

    /// Write `message` at informational severity.
    pub fn log_info(&self, message: &str) -> Result<(), LoggerError> {
        self.write(message, Severity::Information)
    }

    /// Write `message` as an audited successful access.
    pub fn log_audit_success(&self, message: &str) -> Result<(), LoggerError> {
        self.write(message, Severity::SuccessAudit)
    }

    /// Write `message` as an audited failed access.
    pub fn log_audit_failure(&self, message: &str) -> Result<(), LoggerError> {
        self.write(message, Severity::FailureAudit)
    }

    fn write(&self, message: &str, severity: Severity) -> Result<(), LoggerError> {
        self.ensure_registered()?;
        let formatted = self.format_message(message);
        self.store.write_entry(&self.source, &formatted, severity)?;
        Ok(())
    }

    /// Register `source -> channel` with the host unless the channel is
    /// already there.
    ///
    /// The host answers the source query for an existing channel's own
    /// name, so a single exists check on the channel covers the
    /// already-registered case. Safe to call before every write.
    fn ensure_registered(&self) -> Result<(), LoggerError> {
        if self.store.source_exists(&self.channel)? {
            return Ok(());
        }
        self.store
            .create_source(&self.source, &self.channel)
            .map_err(|e| match e {
                StoreError::AccessDenied(_) => LoggerError::PermissionDenied {
                    source: self.source.clone(),
                    cause: e,
                },
                other => LoggerError::Store(other),
            })
    }

    /// Apply the length policy: messages over `max_message_len`
    /// characters are cut so that, with the marker appended, the result
    /// is exactly `max_message_len` characters. Never splits a code
    /// point.
    pub(crate) fn format_message<'a>(&self, message: &'a str) -> Cow<'a, str> {
        let len = message.chars().count();
        if len <= self.max_message_len {
            return Cow::Borrowed(message);
        }

        let keep = self.max_message_len.saturating_sub(TRUNCATION_MARKER.len());
        let mut truncated: String = message.chars().take(keep).collect();
        truncated.push_str(TRUNCATION_MARKER);
        tracing::debug!(
            original_len = len,
            max_len = self.max_message_len,
            "truncated oversized message"
        );
        Cow::Owned(truncated)
    }
}

/// Render an error as its display text followed by each transitive cause.
fn render_error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut cause = error.source();
    while let Some(err) = cause {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&err.to_string());
        cause = err.source();
    }
    rendered
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
