use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of node identifiers.
///
/// Identifiers are only used for external addressing; nothing in the crate
/// compares them. Implementations must be usable from several threads.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    fn next_id(&self) -> String;
}

/// Random UUIDv4 identifiers. The default generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic identifiers `"{prefix}1"`, `"{prefix}2"`, ... for tests and
/// reproducible output.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix("n")
    }

    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{n}", self.prefix)
    }
}
