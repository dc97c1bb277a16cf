//! API shape tests — validates that response bodies keep the field names
//! and types clients depend on.

use paperlens_core::{DocumentMetadata, Match, PlagiarismReport};

/// External check reports carry queries_used and the full metadata block.
#[test]
fn external_report_shape() {
    let report = PlagiarismReport::from_matches(
        "submission.pdf",
        vec![Match {
            source_id: "https://source.example/paper".into(),
            similarity: 0.8342,
            filename: None,
        }],
        DocumentMetadata {
            title: "A Title".into(),
            ..Default::default()
        },
        Some(vec!["A Title".into(), "some extracted sentence".into()]),
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["file_name"], "submission.pdf");
    assert_eq!(json["plagiarism_score"], 0.8342);
    assert_eq!(json["matches"][0]["source_id"], "https://source.example/paper");
    assert!(json["matches"][0].get("filename").is_none());
    assert_eq!(json["metadata"]["title"], "A Title");
    assert_eq!(json["queries_used"][0], "A Title");
}

/// Internal check reports omit queries_used and include filenames.
#[test]
fn internal_report_shape() {
    let report = PlagiarismReport::from_matches(
        "submission.pdf",
        vec![Match {
            source_id: "p1".into(),
            similarity: 1.0,
            filename: Some("original.pdf".into()),
        }],
        DocumentMetadata::default(),
        None,
    );

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("queries_used").is_none());
    assert_eq!(json["matches"][0]["filename"], "original.pdf");
    assert_eq!(json["plagiarism_score"], 1.0);
}
