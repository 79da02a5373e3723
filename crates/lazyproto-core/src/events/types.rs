//! Event payloads emitted during an annotation run.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub root: PathBuf,
    pub schema_path: PathBuf,
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct UsageScannedEvent {
    pub files_scanned: usize,
    /// Matching files left unread: too large or unreadable.
    pub files_skipped: usize,
    pub getter_count: usize,
    pub type_count: usize,
}

#[derive(Debug, Clone)]
pub struct EnumsParsedEvent {
    pub enum_count: usize,
}

/// Used types left once enum names are removed.
#[derive(Debug, Clone)]
pub struct TypesFilteredEvent {
    pub message_type_count: usize,
}

#[derive(Debug, Clone)]
pub struct MessagesParsedEvent {
    pub message_count: usize,
}

/// One field's verdict from candidate selection.
#[derive(Debug, Clone)]
pub struct FieldDecisionEvent {
    pub message: String,
    pub field: String,
    pub field_type: String,
    pub used: bool,
}

#[derive(Debug, Clone)]
pub struct SelectionCompleteEvent {
    pub total_candidates: usize,
}
