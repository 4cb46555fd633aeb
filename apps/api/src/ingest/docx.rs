//! DOCX text decoding. A DOCX file is a ZIP container holding
//! WordprocessingML; the body text lives in `word/document.xml` as `w:t`
//! runs grouped into `w:p` paragraphs.

use std::io::{Cursor, Read};

use anyhow::{anyhow, Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

/// Decodes a DOCX byte stream into plain text: text runs concatenate within
/// a paragraph, non-empty paragraphs join with newlines.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).context("failed to open DOCX container")?;
    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| anyhow!("DOCX is missing word/document.xml: {e}"))?
        .read_to_string(&mut document_xml)
        .context("failed to read word/document.xml")?;
    paragraph_text(&document_xml)
}

fn paragraph_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader
            .read_event()
            .map_err(|e| anyhow!("malformed document.xml: {e}"))?
        {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    if !current.is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                let run = t.unescape().map_err(|e| anyhow!("malformed text run: {e}"))?;
                current.push_str(&run);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}
