// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake in-memory event store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ChannelInfo, EventStore, RecordedEntry, Severity, StoreError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    SourceExists { source: String },
    CreateSource { source: String, channel: String },
    WriteEntry { source: String, message: String, severity: Severity },
    DeleteSource { source: String },
    Channels,
    Entries { channel: String },
    ChannelForSource { source: String },
}

/// Fake event store for testing.
///
/// Registrations map source names to channel names; each channel holds
/// its entries oldest first. Unlike the real host, `write_entry` requires
/// the source to be registered rather than silently falling back to a
/// default channel.
#[derive(Clone, Default)]
pub struct FakeStore {
    sources: Arc<Mutex<HashMap<String, String>>>,
    channels: Arc<Mutex<HashMap<String, Vec<RecordedEntry>>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
    deny_registration: Arc<Mutex<bool>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Make subsequent `create_source` calls fail with `AccessDenied`,
    /// simulating an unprivileged caller
    pub fn deny_registration(&self, deny: bool) {
        *self
            .deny_registration
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = deny;
    }

    /// Drop `channel` with its entries and every source registered to it,
    /// simulating external channel removal
    pub fn delete_channel(&self, channel: &str) {
        self.channels
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(channel);
        self.sources
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|_, ch| ch != channel);
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(call);
    }
}

impl EventStore for FakeStore {
    fn source_exists(&self, source: &str) -> Result<bool, StoreError> {
        self.record(StoreCall::SourceExists {
            source: source.to_string(),
        });
        Ok(self
            .sources
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(source))
    }

    fn create_source(&self, source: &str, channel: &str) -> Result<(), StoreError> {
        self.record(StoreCall::CreateSource {
            source: source.to_string(),
            channel: channel.to_string(),
        });

        if *self
            .deny_registration
            .lock()
            .unwrap_or_else(|e| e.into_inner())
        {
            return Err(StoreError::AccessDenied(format!(
                "cannot register source {source}"
            )));
        }

        let mut sources = self.sources.lock().unwrap_or_else(|e| e.into_inner());
        let mut channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());

        // A fresh channel also gets its own name registered as a source,
        // the way the host does it.
        if !channels.contains_key(channel) {
            channels.insert(channel.to_string(), Vec::new());
            sources.insert(channel.to_string(), channel.to_string());
        }
        sources.insert(source.to_string(), channel.to_string());

        Ok(())
    }

    fn write_entry(
        &self,
        source: &str,
        message: &str,
        severity: Severity,
    ) -> Result<(), StoreError> {
        self.record(StoreCall::WriteEntry {
            source: source.to_string(),
            message: message.to_string(),
            severity,
        });

        let sources = self.sources.lock().unwrap_or_else(|e| e.into_inner());
        let channel = sources
            .get(source)
            .ok_or_else(|| StoreError::CommandFailed(format!("source not registered: {source}")))?
            .clone();
        drop(sources);

        self.channels
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(channel)
            .or_default()
            .push(RecordedEntry {
                message: message.to_string(),
                severity,
            });

        Ok(())
    }

    fn delete_source(&self, source: &str) -> Result<(), StoreError> {
        self.record(StoreCall::DeleteSource {
            source: source.to_string(),
        });

        let mut sources = self.sources.lock().unwrap_or_else(|e| e.into_inner());
        if sources.remove(source).is_none() {
            return Err(StoreError::CommandFailed(format!(
                "source not registered: {source}"
            )));
        }

        Ok(())
    }

    fn channels(&self) -> Result<Vec<ChannelInfo>, StoreError> {
        self.record(StoreCall::Channels);

        let channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        Ok(channels
            .keys()
            .map(|name| ChannelInfo { name: name.clone() })
            .collect())
    }

    fn entries(&self, channel: &str) -> Result<Vec<RecordedEntry>, StoreError> {
        self.record(StoreCall::Entries {
            channel: channel.to_string(),
        });

        let channels = self.channels.lock().unwrap_or_else(|e| e.into_inner());
        channels
            .get(channel)
            .cloned()
            .ok_or_else(|| StoreError::ChannelNotFound(channel.to_string()))
    }

    fn channel_for_source(&self, source: &str) -> Result<Option<String>, StoreError> {
        self.record(StoreCall::ChannelForSource {
            source: source.to_string(),
        });

        Ok(self
            .sources
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(source)
            .cloned())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
