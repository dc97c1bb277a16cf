//! Database schema SQL for the paper corpus.

/// Papers table: one row per uploaded paper, keyed by the caller-supplied id.
pub const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS papers (
    paper_id TEXT PRIMARY KEY,
    text TEXT NOT NULL,
    vector BLOB NOT NULL,
    dim INTEGER NOT NULL,
    filename TEXT NOT NULL DEFAULT '',
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);
"#;
