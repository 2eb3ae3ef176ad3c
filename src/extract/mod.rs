use roxmltree::{Document, Node, ParsingOptions};
use tracing::{debug, trace};

use crate::error::Result;
use crate::model::{ENTRY_TAGS, Extraction, NOTES, Record};

/// Parses an export held in memory and extracts its records. A DOCTYPE
/// declaration is accepted.
pub fn parse_export(source: &str) -> Result<Extraction> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(source, options)?;
    Ok(extract_records(&document))
}

/// Walks the direct children of the document root and builds one record per
/// live, non-template entry that carries a title.
///
/// Field names are registered in the returned universe as they are stored,
/// so a name only ever used with empty text never becomes a column through
/// that occurrence.
pub fn extract_records(document: &Document<'_>) -> Extraction {
    let mut extraction = Extraction::default();

    let entries = document
        .root_element()
        .children()
        .filter(|node| node.is_element());

    for entry in entries {
        let tag = entry.tag_name().name();
        if !ENTRY_TAGS.contains(&tag) {
            trace!(tag, "ignoring non-entry element");
            continue;
        }

        if flag(entry, "deleted") {
            debug!(
                tag,
                title = entry.attribute("title").unwrap_or_default(),
                "skipping deleted entry"
            );
            continue;
        }

        if flag(entry, "template") {
            debug!(
                tag,
                title = entry.attribute("title").unwrap_or_default(),
                "skipping template entry"
            );
            continue;
        }

        let Some(title) = entry.attribute("title") else {
            debug!(tag, "skipping entry without a title attribute");
            continue;
        };

        let mut record = Record::new(title);

        for field in entry.children().filter(|node| node.is_element()) {
            let text = match field.text() {
                Some(text) if !text.is_empty() => text,
                _ => continue,
            };

            let name = match field.tag_name().name() {
                "field" => match field.attribute("name") {
                    Some(name) => {
                        extraction.universe.register(name);
                        name
                    }
                    None => {
                        debug!(title, "skipping field without a name attribute");
                        continue;
                    }
                },
                "notes" => NOTES,
                _ => continue,
            };

            record.insert(name, text);
        }

        extraction.records.push(record);
    }

    extraction
}

/// Reads a boolean attribute that defaults to `"false"`. Only the literal
/// `"true"` counts as set.
fn flag(node: Node<'_, '_>, name: &str) -> bool {
    node.attribute(name).unwrap_or("false") == "true"
}
