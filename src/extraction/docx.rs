// Word document text extraction via docx-rs
use docx_rs::{read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild};
use std::fs;
use std::path::Path;

use crate::types::{AnalyzerError, Result};

/// Top-level paragraph texts joined with newlines.
pub fn extract_docx_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let docx = read_docx(&bytes).map_err(|e| AnalyzerError::extraction("docx", e))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    collect_text(&para.children, &mut text);
    text
}

// Hyperlinks nest paragraph children; tracked insertions hold runs directly
fn collect_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => collect_text(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Hyperlink, HyperlinkType, Insert};

    fn write_docx(path: &Path, paragraphs: &[&str]) {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let file = fs::File::create(path).unwrap();
        docx.build().pack(file).unwrap();
    }

    #[test]
    fn test_paragraphs_joined_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("letter.docx");
        write_docx(&path, &["The quick brown fox.", "It jumps over the lazy dog."]);

        let text = extract_docx_text(&path).unwrap();
        assert_eq!(text, "The quick brown fox.\nIt jumps over the lazy dog.");
    }

    #[test]
    fn test_runs_in_a_paragraph_concatenate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.docx");
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Hello, "))
                .add_run(Run::new().add_text("world")),
        );
        docx.build().pack(fs::File::create(&path).unwrap()).unwrap();

        assert_eq!(extract_docx_text(&path).unwrap(), "Hello, world");
    }

    #[test]
    fn test_hyperlink_and_insert_text_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.docx");
        let docx = Docx::new().add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("See "))
                .add_hyperlink(
                    Hyperlink::new("report", HyperlinkType::Anchor)
                        .add_run(Run::new().add_text("the quarterly report")),
                )
                .add_insert(Insert::new(Run::new().add_text(" today"))),
        );
        docx.build().pack(fs::File::create(&path).unwrap()).unwrap();

        assert_eq!(
            extract_docx_text(&path).unwrap(),
            "See the quarterly report today"
        );
    }

    #[test]
    fn test_not_a_docx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.docx");
        fs::write(&path, b"plain text pretending").unwrap();
        assert!(matches!(
            extract_docx_text(&path),
            Err(AnalyzerError::Extraction { format: "docx", .. })
        ));
    }
}
