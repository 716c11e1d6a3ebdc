// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! evlog-core: adapter for the host operating system's event log
//!
//! This crate provides:
//! - `EventStore`, the capability trait over the host event-log store
//! - `EventLogLogger`, a source/channel-bound logger with a per-entry
//!   length policy
//! - `FakeStore`, an in-memory store for tests (feature `test-support`)

pub mod logger;
pub mod store;

pub use logger::{EventLogLogger, LoggerError, DEFAULT_MAX_MESSAGE_LEN, TRUNCATION_MARKER};
pub use store::{ChannelInfo, EventStore, RecordedEntry, Severity, StoreError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use store::{FakeStore, StoreCall};
