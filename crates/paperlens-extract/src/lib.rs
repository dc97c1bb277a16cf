//! PaperLens Extract — PDF text and header metadata extraction.
//!
//! Turns raw document bytes into the plain text and metadata record the
//! rest of the pipeline works with. A document from which no page yields
//! any text (image-only scan, corrupt stream) is an extraction error; the
//! pipeline must not proceed with an empty vector.

use lopdf::Document;
use paperlens_core::{DocumentMetadata, Error, ExtractedDocument, Result};

/// Extract plain text and header metadata from PDF bytes.
///
/// Text is the concatenation of per-page extracted text, each page
/// followed by a newline, with the whole result trimmed. Metadata fields
/// missing from the Info dictionary default to empty strings.
pub fn extract_text_and_metadata(bytes: &[u8]) -> Result<ExtractedDocument> {
    let doc = Document::load_mem(bytes)
        .map_err(|e| Error::Extraction(format!("failed to parse PDF: {e}")))?;

    let mut text = String::new();
    for (page_number, _) in doc.get_pages() {
        match doc.extract_text(&[page_number]) {
            Ok(page_text) => {
                let page_text = page_text.trim_end();
                if !page_text.is_empty() {
                    text.push_str(page_text);
                    text.push('\n');
                }
            }
            Err(e) => {
                tracing::debug!("text extraction failed for page {page_number}: {e}");
            }
        }
    }

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(Error::Extraction(
            "no extractable text in document".to_string(),
        ));
    }

    Ok(ExtractedDocument {
        text,
        metadata: extract_metadata(&doc),
    })
}

/// Read Title/Author/Subject/Keywords from the PDF Info dictionary.
fn extract_metadata(doc: &Document) -> DocumentMetadata {
    let info = match doc.trailer.get(b"Info") {
        Ok(info_ref) => match info_ref.as_reference() {
            Ok(ref_id) => doc.get_object(ref_id).ok(),
            Err(_) => Some(info_ref),
        },
        Err(_) => None,
    };

    let Some(lopdf::Object::Dictionary(info_dict)) = info else {
        return DocumentMetadata::default();
    };

    let get_string = |key: &[u8]| -> String {
        info_dict
            .get(key)
            .ok()
            .and_then(|obj| match obj {
                lopdf::Object::String(bytes, _) => {
                    // Try UTF-8 first, then Latin-1
                    String::from_utf8(bytes.clone())
                        .ok()
                        .or_else(|| Some(bytes.iter().map(|&b| b as char).collect()))
                }
                _ => None,
            })
            .unwrap_or_default()
    };

    DocumentMetadata {
        title: get_string(b"Title"),
        author: get_string(b"Author"),
        subject: get_string(b"Subject"),
        keywords: get_string(b"Keywords"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;
    use lopdf::{Object, Stream};

    /// Build a minimal one-page PDF with the given page text and Info fields.
    fn build_pdf(page_text: &str, title: &str, author: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = lopdf::content::Content {
            operations: vec![
                lopdf::content::Operation::new("BT", vec![]),
                lopdf::content::Operation::new("Tf", vec!["F1".into(), 12.into()]),
                lopdf::content::Operation::new("Td", vec![50.into(), 700.into()]),
                lopdf::content::Operation::new(
                    "Tj",
                    vec![Object::string_literal(page_text)],
                ),
                lopdf::content::Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if !title.is_empty() || !author.is_empty() {
            let info_id = doc.add_object(dictionary! {
                "Title" => Object::string_literal(title),
                "Author" => Object::string_literal(author),
            });
            doc.trailer.set("Info", info_id);
        }

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }

    #[test]
    fn extracts_page_text_and_metadata() {
        let bytes = build_pdf(
            "Semantic similarity of research papers",
            "A Study",
            "J. Doe",
        );
        let doc = extract_text_and_metadata(&bytes).unwrap();
        assert!(doc.text.contains("Semantic similarity"));
        assert_eq!(doc.metadata.title, "A Study");
        assert_eq!(doc.metadata.author, "J. Doe");
        assert_eq!(doc.metadata.subject, "");
    }

    #[test]
    fn missing_info_dict_yields_empty_metadata() {
        let bytes = build_pdf("Some body text on the page", "", "");
        let doc = extract_text_and_metadata(&bytes).unwrap();
        assert!(doc.metadata.is_empty());
    }

    #[test]
    fn garbage_bytes_are_an_extraction_error() {
        let err = extract_text_and_metadata(b"not a pdf at all").unwrap_err();
        assert_eq!(err.kind(), "extraction");
    }
}
