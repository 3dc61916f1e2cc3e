//! DOCX text extraction: the document body lives in `word/document.xml`
//! inside a zip container. Text runs (`<w:t>`) are concatenated per
//! paragraph (`<w:p>`), paragraphs are joined with newlines. Run-level tabs
//! and breaks become `\t` and `\n`; empty paragraphs stay as empty lines.

use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;
    Ok(document_xml_to_text(&xml))
}

/// `<w:p/>` or `<w:p ...>...</w:p>`; `<w:pPr>` is not a paragraph.
fn paragraph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>.*?</w:p>").expect("valid regex")
    })
}

/// Text runs, run tabs and breaks. Tab stops (`<w:tab w:val=.../>` inside
/// `<w:tabs>`) carry attributes and are not matched.
fn run_content_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>|<w:tab\s*/>|<w:br(?:\s[^>]*)?/>|<w:cr\s*/>")
            .expect("valid regex")
    })
}

fn numeric_entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&#(?:x([0-9a-fA-F]+)|([0-9]+));").expect("valid regex"))
}

fn document_xml_to_text(xml: &str) -> String {
    paragraph_re()
        .find_iter(xml)
        .map(|p| paragraph_text(p.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(paragraph: &str) -> String {
    let mut text = String::new();
    for caps in run_content_re().captures_iter(paragraph) {
        match caps.get(1) {
            Some(run) => text.push_str(&decode_entities(run.as_str())),
            None if caps[0].starts_with("<w:tab") => text.push('\t'),
            None => text.push('\n'),
        }
    }
    text
}

/// Decodes the five predefined XML entities and numeric character
/// references. `&amp;` goes last so `&amp;lt;` stays `&lt;`.
fn decode_entities(text: &str) -> String {
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'");
    let text = numeric_entity_re().replace_all(&text, |caps: &Captures| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            (None, None) => None,
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });
    text.replace("&amp;", "&")
}
