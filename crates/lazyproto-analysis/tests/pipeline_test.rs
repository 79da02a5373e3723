//! End-to-end annotation runs against temporary source trees.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use lazyproto_analysis::pipeline::{run, RunOptions};
use lazyproto_core::config::LazyConfig;
use lazyproto_core::errors::PipelineError;
use lazyproto_core::events::{FieldDecisionEvent, LazyEventHandler, NoOpHandler};
use tempfile::TempDir;

const REPLY_SCHEMA: &str = "message ReplyOutProto {\n  Header header = 1;\n  repeated string tags = 2;\n}\n\nmessage Header {\n  int64 ts = 1;\n}\n";

fn tree(schema: &str, sources: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("vbase.proto"), schema).unwrap();
    for (rel, content) in sources {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

fn schema_text(dir: &Path) -> String {
    fs::read_to_string(dir.join("vbase.proto")).unwrap()
}

fn run_default(dir: &Path, dry_run: bool) -> lazyproto_analysis::RunReport {
    run(dir, &LazyConfig::default(), RunOptions { dry_run }, &NoOpHandler).unwrap()
}

#[test]
fn test_unused_accessor_field_annotated() {
    let dir = tree(
        REPLY_SCHEMA,
        &[("decode.go", "func d(r *pogo.ReplyOutProto) { _ = r.GetTags() }")],
    );

    let report = run_default(dir.path(), false);

    assert_eq!(report.scan_stats.files_scanned, 1);
    assert_eq!(report.scan_stats.files_skipped(), 0);
    assert_eq!(report.changes, Some(1));
    assert_eq!(report.summary_line(), "Added [lazy = true] to 1 fields");
    let text = schema_text(dir.path());
    assert!(text.contains("  Header header = 1 [lazy = true];\n"));
    assert!(text.contains("  repeated string tags = 2;\n"));
}

#[test]
fn test_used_accessor_field_left_alone() {
    let dir = tree(
        REPLY_SCHEMA,
        &[("decode.go", "func d(r *pogo.ReplyOutProto) { h := r.GetHeader() }")],
    );

    let report = run_default(dir.path(), false);

    assert_eq!(report.total_candidates(), 0);
    assert_eq!(report.changes, None);
    assert_eq!(report.summary_line(), "No lazy candidates found");
    assert_eq!(schema_text(dir.path()), REPLY_SCHEMA);
}

#[test]
fn test_accessor_anywhere_in_tree_counts() {
    let dir = tree(
        REPLY_SCHEMA,
        &[
            ("decode.go", "var r pogo.ReplyOutProto"),
            ("other/unrelated.go", "x := somethingElse.GetHeader()"),
        ],
    );
    let report = run_default(dir.path(), false);
    assert_eq!(report.changes, None);
}

#[test]
fn test_unreferenced_message_not_annotated() {
    let dir = tree(REPLY_SCHEMA, &[("decode.go", "var r pogo.OtherOutProto")]);
    let report = run_default(dir.path(), false);
    assert_eq!(report.changes, None);
    assert_eq!(schema_text(dir.path()), REPLY_SCHEMA);
}

#[test]
fn test_request_types_not_annotated() {
    let schema = "message GetThingProto {\n  ThingProto thing = 1;\n}\n";
    let dir = tree(schema, &[("send.go", "req := &pogo.GetThingProto{}")]);
    let report = run_default(dir.path(), false);
    assert_eq!(report.changes, None);
    assert_eq!(schema_text(dir.path()), schema);
}

#[test]
fn test_primitive_and_enum_fields_never_annotated() {
    let schema = "enum Team {\n  TEAM_UNSET = 0;\n}\nmessage ReplyOutProto {\n  string name = 1;\n  Team team = 2;\n  bytes blob = 3;\n}\n";
    let dir = tree(schema, &[("a.go", "var r pogo.ReplyOutProto")]);
    let report = run_default(dir.path(), false);
    assert_eq!(report.changes, None);
    assert_eq!(report.enum_count, 1);
    assert_eq!(schema_text(dir.path()), schema);
}

#[test]
fn test_enum_named_like_message_filtered() {
    // An enum whose name passes the suffix heuristic is still not a message.
    let schema = "enum StatusProto {\n  UNSET = 0;\n}\nmessage ReplyOutProto {\n  ChildProto child = 1;\n}\n";
    let dir = tree(schema, &[("a.go", "x := pogo.StatusProto(1)\nvar r pogo.ReplyOutProto")]);
    let report = run_default(dir.path(), true);
    assert_eq!(report.changes, Some(1));
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = tree(REPLY_SCHEMA, &[("decode.go", "var r pogo.ReplyOutProto")]);

    let dry = run_default(dir.path(), true);
    assert_eq!(dry.changes, Some(1));
    assert_eq!(dry.summary_line(), "Would add [lazy = true] to 1 fields");
    assert_eq!(schema_text(dir.path()), REPLY_SCHEMA);

    let real = run_default(dir.path(), false);
    assert_eq!(real.changes, dry.changes);
}

#[test]
fn test_second_run_is_noop() {
    let schema = "message ReplyOutProto {\n  AProto a = 1;\n  BProto b = 2 [lazy = true];\n  CProto c = 3;\n}\n";
    let dir = tree(schema, &[("decode.go", "var r pogo.ReplyOutProto\nr.GetC()")]);

    let first = run_default(dir.path(), false);
    assert_eq!(first.changes, Some(1));
    let after_first = schema_text(dir.path());
    assert!(after_first.contains("  BProto b = 2 [lazy = true];\n"));
    assert!(after_first.contains("  AProto a = 1 [lazy = true];\n"));
    assert!(after_first.contains("  CProto c = 3;\n"));

    let second = run_default(dir.path(), false);
    assert_eq!(second.changes, None);
    assert_eq!(schema_text(dir.path()), after_first);
}

#[test]
fn test_missing_schema_is_error() {
    let dir = TempDir::new().unwrap();
    let err = run(
        dir.path(),
        &LazyConfig::default(),
        RunOptions::default(),
        &NoOpHandler,
    )
    .unwrap_err();
    assert!(err.is_schema_missing());
    assert!(err.to_string().starts_with("Proto file not found: "));
    assert!(matches!(err, PipelineError::Schema(_)));
}

#[test]
fn test_schema_path_from_config() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("protos")).unwrap();
    fs::write(dir.path().join("protos/game.proto"), REPLY_SCHEMA).unwrap();
    fs::write(dir.path().join("a.go"), "var r pogo.ReplyOutProto").unwrap();

    let config = LazyConfig::from_toml("[schema]\npath = \"protos/game.proto\"\n").unwrap();
    let report = run(dir.path(), &config, RunOptions::default(), &NoOpHandler).unwrap();
    assert_eq!(report.changes, Some(1));
}

#[derive(Default)]
struct Recorder {
    decisions: Mutex<Vec<FieldDecisionEvent>>,
}

impl LazyEventHandler for Recorder {
    fn on_field_decision(&self, event: &FieldDecisionEvent) {
        self.decisions.lock().unwrap().push(event.clone());
    }
}

#[test]
fn test_field_decisions_reported() {
    let schema = "message ReplyOutProto {\n  AProto a = 1;\n  BProto b_value = 2;\n}\n";
    let dir = tree(schema, &[("a.go", "var r pogo.ReplyOutProto\nr.GetBValue()")]);
    let recorder = Recorder::default();

    run(dir.path(), &LazyConfig::default(), RunOptions { dry_run: true }, &recorder).unwrap();

    let decisions = recorder.decisions.lock().unwrap();
    let summary: Vec<(String, bool)> = decisions
        .iter()
        .map(|d| (format!("{}.{} ({})", d.message, d.field, d.field_type), d.used))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("ReplyOutProto.a (AProto)".to_string(), false),
            ("ReplyOutProto.b_value (BProto)".to_string(), true),
        ]
    );
}
