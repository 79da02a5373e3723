//! Verbose stdout report, driven by pipeline events.

use lazyproto_core::events::*;

/// Prints progress lines when enabled; silent otherwise.
pub struct VerboseReporter {
    enabled: bool,
}

impl VerboseReporter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn line(&self, text: &str) {
        if self.enabled {
            println!("{text}");
        }
    }
}

impl LazyEventHandler for VerboseReporter {
    fn on_run_started(&self, event: &RunStartedEvent) {
        self.line(&format!("Project root: {}", event.root.display()));
        self.line(&format!("Proto file: {}", event.schema_path.display()));
        self.line(&format!("Dry run: {}", title_case_bool(event.dry_run)));
        self.line("");
    }

    fn on_usage_scanned(&self, event: &UsageScannedEvent) {
        self.line(&format!(
            "Scanned {} files ({} skipped)",
            event.files_scanned, event.files_skipped
        ));
        self.line(&format!(
            "Found {} unique getter methods used in Go code",
            event.getter_count
        ));
        self.line(&format!("Found {} proto types used in Go code", event.type_count));
    }

    fn on_enums_parsed(&self, event: &EnumsParsedEvent) {
        self.line(&format!("Found {} enum definitions", event.enum_count));
    }

    fn on_types_filtered(&self, event: &TypesFilteredEvent) {
        self.line(&format!(
            "After filtering enums: {} message types",
            event.message_type_count
        ));
    }

    fn on_messages_parsed(&self, event: &MessagesParsedEvent) {
        self.line(&format!(
            "Parsed {} message definitions from proto file",
            event.message_count
        ));
        self.line("");
    }

    fn on_field_decision(&self, event: &FieldDecisionEvent) {
        let status = if event.used { "USED" } else { "LAZY" };
        self.line(&format!(
            "  {}.{} ({}): {status}",
            event.message, event.field, event.field_type
        ));
    }

    fn on_selection_complete(&self, event: &SelectionCompleteEvent) {
        self.line("");
        self.line(&format!("Total lazy candidates: {}", event.total_candidates));
        self.line("");
    }
}

/// Renders a flag as `True`/`False`.
fn title_case_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
