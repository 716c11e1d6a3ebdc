//! Shared helpers for behavioral specs.

pub use evlog_core::{
    EventLogLogger, EventStore, FakeStore, LoggerError, RecordedEntry, Severity, StoreCall,
    StoreError, TRUNCATION_MARKER,
};

pub const SOURCE: &str = "acceptance-app";
pub const CHANNEL: &str = "AcceptanceOps";

/// A fake host store with a logger bound to SOURCE/CHANNEL
pub struct Scenario {
    pub store: FakeStore,
    pub logger: EventLogLogger<FakeStore>,
}

impl Scenario {
    pub fn new() -> Self {
        let store = FakeStore::new();
        let logger = EventLogLogger::new(store.clone(), SOURCE, CHANNEL)
            .expect("fake store accepts registration");
        Self { store, logger }
    }

    /// Entries currently held by the bound channel
    pub fn entries(&self) -> Vec<RecordedEntry> {
        self.store.entries(CHANNEL).expect("channel exists")
    }

    /// Registration attempts the store has seen so far
    pub fn registration_attempts(&self) -> usize {
        self.store
            .calls()
            .iter()
            .filter(|c| matches!(c, StoreCall::CreateSource { .. }))
            .count()
    }
}
