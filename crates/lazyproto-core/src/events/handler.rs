//! LazyEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing an annotation run.
///
/// Handlers override only the events they care about.
pub trait LazyEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_usage_scanned(&self, _event: &UsageScannedEvent) {}
    fn on_enums_parsed(&self, _event: &EnumsParsedEvent) {}
    fn on_types_filtered(&self, _event: &TypesFilteredEvent) {}
    fn on_messages_parsed(&self, _event: &MessagesParsedEvent) {}
    fn on_field_decision(&self, _event: &FieldDecisionEvent) {}
    fn on_selection_complete(&self, _event: &SelectionCompleteEvent) {}
}

/// Handler that ignores every event.
pub struct NoOpHandler;

impl LazyEventHandler for NoOpHandler {}
