//! Schema reader tests.

use std::fs;

use lazyproto_analysis::scanner::NamingRules;
use lazyproto_analysis::schema::{read_schema, SchemaModel};
use lazyproto_core::errors::SchemaError;
use tempfile::TempDir;

const SCHEMA: &str = r#"syntax = "proto3";
package pogo;

enum Team {
  TEAM_UNSET = 0;
  TEAM_BLUE = 1;
}

message ReplyOutProto {
  enum Result {
    UNSET = 0;
  }
  Result result = 1;
  HeaderProto header = 2;
  repeated HeaderProto history = 3;
  string note = 4;
  Team team = 5;
  Inner inner = 6;
  PayloadProto payload = 7 [lazy = true];
  message Inner {
    HeaderProto deep = 1;
  }
  oneof body {
    BodyProto body_proto = 8;
  }
  google.protobuf.Any extra = 9;
  int64 big = 10;
}

message HeaderProto {
  int64 ts = 1;
}
"#;

#[test]
fn test_enum_names_include_nested() {
    let model = SchemaModel::parse(SCHEMA, &NamingRules::default());
    assert!(model.is_enum("Team"));
    assert!(model.is_enum("Result"));
    assert_eq!(model.enum_names.len(), 2);
}

#[test]
fn test_only_direct_message_typed_fields_kept() {
    let model = SchemaModel::parse(SCHEMA, &NamingRules::default());
    let fields = model.fields("ReplyOutProto").unwrap();
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    // Inner is declared as a nested message, so its name is a known message type.
    assert_eq!(names, vec!["header", "inner"]);

    let header = &fields[0];
    assert_eq!(header.declared_type, "HeaderProto");
    assert_eq!(header.ordinal, 2);
    assert_eq!(header.source_line, 14);
}

#[test]
fn test_scalar_only_message_has_no_fields() {
    let model = SchemaModel::parse(SCHEMA, &NamingRules::default());
    assert_eq!(model.fields("HeaderProto"), Some(&[][..]));
    // Nested messages are not top-level entries.
    assert!(model.fields("Inner").is_none());
    assert_eq!(model.message_count(), 2);
}

#[test]
fn test_duplicate_message_last_wins() {
    let schema = "message AOutProto {\n  FirstProto first = 1;\n}\nmessage AOutProto {\n  SecondProto second = 1;\n}\n";
    let model = SchemaModel::parse(schema, &NamingRules::default());
    let fields = model.fields("AOutProto").unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "second");
}

#[test]
fn test_unclosed_message_dropped() {
    let schema = "message AOutProto {\n  BProto b = 1;\n";
    let model = SchemaModel::parse(schema, &NamingRules::default());
    assert!(model.fields("AOutProto").is_none());
}

#[test]
fn test_read_schema_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = read_schema(&dir.path().join("vbase.proto"), &NamingRules::default()).unwrap_err();
    assert!(matches!(err, SchemaError::NotFound { .. }));
}

#[test]
fn test_read_schema_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vbase.proto");
    fs::write(&path, SCHEMA).unwrap();
    let model = read_schema(&path, &NamingRules::default()).unwrap();
    assert_eq!(model.message_count(), 2);
}
