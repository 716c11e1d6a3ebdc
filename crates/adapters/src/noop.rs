// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op store for when event-log output is disabled.

use evlog_core::store::{ChannelInfo, EventStore, RecordedEntry, Severity, StoreError};

/// Event store that does nothing.
///
/// Reports every source as registered so a logger over it never attempts
/// creation; writes are discarded and enumerations come back empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpStore;

impl NoOpStore {
    pub fn new() -> Self {
        Self
    }
}

impl EventStore for NoOpStore {
    fn source_exists(&self, _source: &str) -> Result<bool, StoreError> {
        Ok(true)
    }

    fn create_source(&self, _source: &str, _channel: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn write_entry(
        &self,
        _source: &str,
        _message: &str,
        _severity: Severity,
    ) -> Result<(), StoreError> {
        Ok(())
    }

    fn delete_source(&self, _source: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn channels(&self) -> Result<Vec<ChannelInfo>, StoreError> {
        Ok(Vec::new())
    }

    fn entries(&self, _channel: &str) -> Result<Vec<RecordedEntry>, StoreError> {
        Ok(Vec::new())
    }

    fn channel_for_source(&self, _source: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }
}
