// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capability trait over the host event-log store

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStore, StoreCall};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a stored entry, mirroring the host's entry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Information,
    SuccessAudit,
    FailureAudit,
}

impl Severity {
    /// Numeric entry-type code the host stores with each entry.
    pub fn entry_code(self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Information => 4,
            Severity::SuccessAudit => 8,
            Severity::FailureAudit => 16,
        }
    }

    /// Severity for a host entry-type code.
    pub fn from_entry_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Severity::Error),
            2 => Some(Severity::Warning),
            4 => Some(Severity::Information),
            8 => Some(Severity::SuccessAudit),
            16 => Some(Severity::FailureAudit),
            _ => None,
        }
    }

    /// Name the host's write command expects for this severity.
    pub fn entry_type_name(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Information => "Information",
            Severity::SuccessAudit => "SuccessAudit",
            Severity::FailureAudit => "FailureAudit",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.entry_type_name())
    }
}

/// A named log stream in the host store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub name: String,
}

/// An entry held by a channel, as reported by enumeration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedEntry {
    pub message: String,
    pub severity: Severity,
}

/// Errors from host store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("access denied: {0}")]
    AccessDenied(String),
    #[error("channel not found: {0}")]
    ChannelNotFound(String),
    #[error("store command failed: {0}")]
    CommandFailed(String),
    #[error("malformed store output: {0}")]
    MalformedOutput(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for the host event-log store.
///
/// A *source* attributes entries to a producing component and maps to
/// exactly one *channel*, the named stream that holds the entries. The
/// host also registers a new channel's name as a source of that channel,
/// so an existing channel answers the source query for its own name.
///
/// All operations are synchronous and blocking. `delete_source`,
/// `channels`, and `entries` exist for test teardown and verification;
/// the logger itself never calls them.
pub trait EventStore: Clone + Send + Sync + 'static {
    /// Whether `source` is registered with any channel
    fn source_exists(&self, source: &str) -> Result<bool, StoreError>;

    /// Register `source` as a writer for `channel`, creating the channel
    /// if the host does not have it yet
    fn create_source(&self, source: &str, channel: &str) -> Result<(), StoreError>;

    /// Append one entry attributed to `source`, on the channel the source
    /// is registered with
    fn write_entry(&self, source: &str, message: &str, severity: Severity)
        -> Result<(), StoreError>;

    /// Remove the registration for `source`
    fn delete_source(&self, source: &str) -> Result<(), StoreError>;

    /// List the store's channels
    fn channels(&self) -> Result<Vec<ChannelInfo>, StoreError>;

    /// Entries currently held by `channel`, oldest first
    fn entries(&self, channel: &str) -> Result<Vec<RecordedEntry>, StoreError>;

    /// Channel that `source` is registered with, if any
    fn channel_for_source(&self, source: &str) -> Result<Option<String>, StoreError>;
}
