//! Fixed tokens shared by the scanner, schema reader, and annotator.

/// Inline option appended to a field declaration to request lazy decoding.
pub const LAZY_MARKER: &str = "[lazy = true]";

/// Scalar protobuf types. Fields of these types can never be lazy.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "string", "int32", "int64", "uint32", "uint64", "sint32", "sint64", "fixed32", "fixed64",
    "sfixed32", "sfixed64", "bool", "float", "double", "bytes",
];

/// Keyword that opens a repeated field declaration.
pub const REPEATED_KEYWORD: &str = "repeated ";

/// Schema file looked up relative to the tree root when none is configured.
pub const DEFAULT_SCHEMA_PATH: &str = "vbase.proto";

/// Project config file name, looked up in the tree root.
pub const PROJECT_CONFIG_FILE: &str = "lazyproto.toml";

/// Package qualifier of generated types in scanned sources.
pub const DEFAULT_NAMESPACE: &str = "pogo";

/// Source file extensions scanned by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["go"];

/// Suffix shared by every generated message type.
pub const DEFAULT_MESSAGE_SUFFIX: &str = "Proto";

/// Suffix of response messages, which are always decode targets.
pub const DEFAULT_RESPONSE_SUFFIX: &str = "OutProto";

/// Leading verbs of request messages that are only constructed and sent.
pub const DEFAULT_REQUEST_VERB_PREFIXES: &[&str] =
    &["Get", "Set", "Update", "Create", "Delete", "Send", "Submit"];

/// Files above this size are skipped by the usage scanner (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Returns true if `type_name` is a protobuf scalar.
pub fn is_primitive(type_name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_primitive() {
        assert!(is_primitive("bytes"));
        assert!(is_primitive("sfixed64"));
        assert!(!is_primitive("HeaderProto"));
        assert!(!is_primitive("String"));
    }
}
