//! Downloadable resume document.

use bytes::Bytes;

use crate::models::resume::{PersonalInfo, ResumeData};
use crate::render::dispatch::preview;

pub struct ExportDocument {
    /// ASCII attachment name of the served HTML document.
    pub filename: String,
    /// Attachment name keeping non-ASCII letters.
    pub utf8_filename: String,
    /// Name the client should give the printed PDF, keeping non-ASCII letters.
    pub pdf_filename: String,
    pub body: Bytes,
}

impl ExportDocument {
    /// `Content-Disposition` with the ASCII fallback and an RFC 5987
    /// `filename*` for clients that read it.
    pub fn content_disposition(&self) -> String {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            self.filename,
            percent_encode(&self.utf8_filename)
        )
    }

    /// The PDF name as a header value (percent-encoded UTF-8).
    pub fn pdf_filename_header(&self) -> String {
        percent_encode(&self.pdf_filename)
    }
}

/// `<first>_<last>_Resume` with anything outside `[A-Za-z0-9_-]` dropped,
/// spaces inside a name becoming underscores.
pub fn export_stem(info: &PersonalInfo) -> String {
    stem_with(info, |c| c.is_ascii_alphanumeric())
}

/// Like `export_stem` but keeps letters and digits from any script.
pub fn unicode_export_stem(info: &PersonalInfo) -> String {
    stem_with(info, char::is_alphanumeric)
}

fn stem_with(info: &PersonalInfo, keep: fn(char) -> bool) -> String {
    let parts: Vec<String> = [&info.first_name, &info.last_name]
        .iter()
        .map(|part| sanitize(part, keep))
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        "Resume".to_string()
    } else {
        format!("{}_Resume", parts.join("_"))
    }
}

fn sanitize(part: &str, keep: fn(char) -> bool) -> String {
    part.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| keep(*c) || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// RFC 5987 `attr-char` encoding: everything but letters, digits and
/// `!#$&+-.^_`|~` becomes `%XX` of its UTF-8 bytes.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || b"!#$&+-.^_`|~".contains(&byte) {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

pub fn export_document(data: &ResumeData) -> ExportDocument {
    let stem = export_stem(&data.personal_info);
    let utf8_stem = unicode_export_stem(&data.personal_info);
    ExportDocument {
        filename: format!("{stem}.html"),
        utf8_filename: format!("{utf8_stem}.html"),
        pdf_filename: format!("{utf8_stem}.pdf"),
        body: Bytes::from(preview(data)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo::demo_resume;

    fn info(first: &str, last: &str) -> PersonalInfo {
        PersonalInfo {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_stem_from_name() {
        assert_eq!(export_stem(&info("Alex", "Johnson")), "Alex_Johnson_Resume");
        assert_eq!(export_stem(&info("Mary Ann", "O'Neil")), "Mary_Ann_ONeil_Resume");
    }

    #[test]
    fn test_stem_without_name() {
        assert_eq!(export_stem(&info("", "")), "Resume");
        assert_eq!(export_stem(&info("Ada", "  ")), "Ada_Resume");
        assert_eq!(export_stem(&info("李", "")), "Resume");
    }

    #[test]
    fn test_non_ascii_name_survives_in_utf8_names() {
        let data = ResumeData {
            personal_info: info("李", "Wei"),
            ..Default::default()
        };
        let doc = export_document(&data);
        assert_eq!(doc.filename, "Wei_Resume.html");
        assert_eq!(doc.pdf_filename, "李_Wei_Resume.pdf");
        assert_eq!(doc.pdf_filename_header(), "%E6%9D%8E_Wei_Resume.pdf");
        assert_eq!(
            doc.content_disposition(),
            "attachment; filename=\"Wei_Resume.html\"; filename*=UTF-8''%E6%9D%8E_Wei_Resume.html"
        );
    }

    #[test]
    fn test_ascii_name_is_not_encoded() {
        let doc = export_document(&demo_resume());
        assert_eq!(doc.pdf_filename_header(), "Alex_Johnson_Resume.pdf");
        assert_eq!(
            doc.content_disposition(),
            "attachment; filename=\"Alex_Johnson_Resume.html\"; filename*=UTF-8''Alex_Johnson_Resume.html"
        );
    }

    #[test]
    fn test_export_document_matches_preview() {
        let data = demo_resume();
        let doc = export_document(&data);
        assert_eq!(doc.filename, "Alex_Johnson_Resume.html");
        assert_eq!(doc.pdf_filename, "Alex_Johnson_Resume.pdf");
        assert_eq!(doc.body, Bytes::from(preview(&data)));
    }
}
