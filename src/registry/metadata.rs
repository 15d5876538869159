use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{Result, SynthfixError};

/// Extract the latest published version from a maven-metadata.xml document.
///
/// Scans the document for the single `latest` element nested under the
/// top-level `versioning` element and returns its trimmed text verbatim. No
/// semantic-version validation is applied. The whole document is consumed
/// before the value is returned, so malformed XML anywhere in the document
/// raises an error even when it appears after the `latest` element.
pub fn version_from_metadata(document: &str) -> Result<String> {
    let mut reader = Reader::from_str(document);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut latest: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                stack.push(e.name().as_ref().to_vec());
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(ref e) => {
                let in_latest = stack.len() >= 2
                    && stack[stack.len() - 1] == b"latest"
                    && stack[stack.len() - 2] == b"versioning";

                if in_latest && latest.is_none() {
                    let text = e.unescape()?;
                    latest = Some(text.trim().to_string());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    latest.ok_or(SynthfixError::MissingLatestVersion)
}
