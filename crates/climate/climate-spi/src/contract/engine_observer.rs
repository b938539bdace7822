//! Trait for pipeline observability

use crate::model::EngineEvent;

/// Structured observability hook for engine pipelines.
///
/// Entry points with an `_observed` variant report each completed step
/// here. Observers see events after the fact and cannot alter results;
/// the hook is not part of the computational contract.
pub trait EngineObserver: Send + Sync {
    /// Record one engine event.
    fn record(&self, event: &EngineEvent);
}

/// Observer that discards every event.
///
/// The plain (unobserved) entry points delegate through this.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl EngineObserver for NoopObserver {
    fn record(&self, _event: &EngineEvent) {}
}
