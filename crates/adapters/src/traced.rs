// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use evlog_core::store::{ChannelInfo, EventStore, RecordedEntry, Severity, StoreError};

/// Wrapper that adds tracing to any EventStore
#[derive(Clone)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: EventStore> EventStore for TracedStore<S> {
    fn source_exists(&self, source: &str) -> Result<bool, StoreError> {
        let result = self.inner.source_exists(source);
        tracing::trace!(source, exists = ?result.as_ref().ok(), "checked");
        result
    }

    fn create_source(&self, source: &str, channel: &str) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.create_source", source, channel);
        let _guard = span.enter();

        tracing::info!("registering");

        let start = std::time::Instant::now();
        let result = self.inner.create_source(source, channel);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(
                elapsed_ms = elapsed.as_millis() as u64,
                "source registered"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "registration failed"
            ),
        }

        result
    }

    fn write_entry(
        &self,
        source: &str,
        message: &str,
        severity: Severity,
    ) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.write_entry", source, severity = %severity);
        let _guard = span.enter();

        tracing::debug!(message_len = message.len(), "writing");

        let start = std::time::Instant::now();
        let result = self.inner.write_entry(source, message, severity);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(
                elapsed_ms = elapsed.as_millis() as u64,
                "entry written"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "write failed"
            ),
        }

        result
    }

    fn delete_source(&self, source: &str) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.delete_source", source);
        let _guard = span.enter();

        let result = self.inner.delete_source(source);
        // removal failing is often acceptable (source already gone)
        match &result {
            Ok(()) => tracing::info!("source removed"),
            Err(e) => tracing::warn!(error = %e, "remove failed (may be expected)"),
        }

        result
    }

    fn channels(&self) -> Result<Vec<ChannelInfo>, StoreError> {
        let result = self.inner.channels();
        tracing::trace!(count = result.as_ref().map(|v| v.len()).ok(), "listed channels");
        result
    }

    fn entries(&self, channel: &str) -> Result<Vec<RecordedEntry>, StoreError> {
        let result = self.inner.entries(channel);
        tracing::trace!(
            channel,
            count = result.as_ref().map(|v| v.len()).ok(),
            "listed entries"
        );
        result
    }

    fn channel_for_source(&self, source: &str) -> Result<Option<String>, StoreError> {
        let result = self.inner.channel_for_source(source);
        tracing::trace!(source, channel = ?result.as_ref().ok(), "resolved");
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
