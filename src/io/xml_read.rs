use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};
use tracing::debug;

use crate::error::{Result, ToolError};
use crate::extract::parse_export;
use crate::model::Extraction;

/// Reads a SafeInCloud XML export from disk and extracts its records.
pub fn read_export(path: &Path) -> Result<Extraction> {
    let data = fs::read(path)?;
    let source = decode_export(&data)?;
    debug!(bytes = data.len(), "read export source");
    parse_export(&source)
}

/// Decodes the raw export using the encoding named in its XML declaration.
/// Exports without a declaration are UTF-8. A byte order mark wins over the
/// declaration.
pub fn decode_export(data: &[u8]) -> Result<String> {
    let encoding = match declared_encoding(data) {
        Some(label) => Encoding::for_label(label.as_bytes())
            .ok_or_else(|| ToolError::UnknownEncoding(label.clone()))?,
        None => UTF_8,
    };

    let (decoded, used, had_errors) = encoding.decode(data);
    if had_errors {
        return Err(ToolError::InvalidEncoding(used.name()));
    }
    Ok(decoded.into_owned())
}

/// Pulls the `encoding` pseudo-attribute out of a leading `<?xml ... ?>`.
fn declared_encoding(data: &[u8]) -> Option<String> {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    if !data.starts_with(b"<?xml") {
        return None;
    }
    let end = data.windows(2).position(|pair| pair == b"?>")?;
    let declaration = String::from_utf8_lossy(&data[..end]);

    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let rest = &rest[1..];
    Some(rest[..rest.find(quote)?].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_export_is_decoded() {
        let data = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<database><card title=\"Caf\xE9\"/></database>";

        let source = decode_export(data).expect("export decoded");
        let extraction = parse_export(&source).expect("export parsed");

        assert_eq!(extraction.records[0].title(), "Caf\u{e9}");
    }

    #[test]
    fn undeclared_export_is_utf8() {
        let source = decode_export("<database><card title=\"Caf\u{e9}\"/></database>".as_bytes())
            .expect("export decoded");

        assert!(source.contains("Caf\u{e9}"));
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let error = decode_export(b"<database><card title=\"Caf\xE9\"/></database>")
            .expect_err("invalid UTF-8");

        assert!(matches!(error, ToolError::InvalidEncoding("UTF-8")));
    }

    #[test]
    fn unknown_label_is_reported() {
        let error = decode_export(b"<?xml version='1.0' encoding='klingon'?><database/>")
            .expect_err("unknown encoding");

        assert!(matches!(error, ToolError::UnknownEncoding(label) if label == "klingon"));
    }

    #[test]
    fn reads_declaration_with_single_quotes_and_spacing() {
        let data = b"<?xml version='1.0' encoding = 'windows-1252' ?><database/>";

        assert_eq!(declared_encoding(data).as_deref(), Some("windows-1252"));
        assert_eq!(declared_encoding(b"<database/>"), None);
    }
}
