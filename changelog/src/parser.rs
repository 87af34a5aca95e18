use std::io::Read;

use regex::Regex;

use crate::error::{ChangelogError, VersionNotFoundError};
use crate::types::Result;

/// Default pattern template for locating one version's section.
///
/// The template must contain exactly one `{version}` placeholder and declare
/// the named capture groups `header` and `body`. The header is anchored to a
/// `## `-style markdown heading; the body runs up to the next heading or the
/// end of the document.
pub const DEFAULT_SECTION_FORMAT: &str =
    r"(?s)(?P<header>## {version}[^\n]*)\n(?P<body>.+?)\n(?:## .+|$)";

const VERSION_PLACEHOLDER: &str = "{version}";
const HEADER_GROUP: &str = "header";
const BODY_GROUP: &str = "body";

/// Half-open byte offset pair into the parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub from: usize,
    pub to: usize,
}

/// The located spans of one version's header line and body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    pub header: ByteRange,
    pub body: ByteRange,
}

/// One version's header and body, trimmed, borrowed from the parser.
#[derive(Debug, PartialEq, Eq)]
pub struct Section<'a> {
    pub header: &'a [u8],
    pub body: &'a [u8],
}

/// Locates a named version's section inside a changelog document.
///
/// The document is read once at construction and retained immutably, so
/// repeated lookups against the same parser never re-read input.
#[derive(Debug, Clone)]
pub struct SectionParser {
    /// Pattern template used for lookups. An empty string selects
    /// [`DEFAULT_SECTION_FORMAT`].
    pub regexp_format: String,
    content: String,
}

impl SectionParser {
    pub fn new(mut reader: impl Read) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self {
            regexp_format: DEFAULT_SECTION_FORMAT.to_string(),
            content,
        })
    }

    fn version_regex(&self, version: &str) -> Result<Regex> {
        let format = if self.regexp_format.is_empty() {
            DEFAULT_SECTION_FORMAT
        } else {
            &self.regexp_format
        };
        // The label is escaped so versions containing regex metacharacters
        // match literally.
        let pattern = format.replace(VERSION_PLACEHOLDER, &regex::escape(version));
        Ok(Regex::new(&pattern)?)
    }

    /// Find the byte ranges of `version`'s header and body.
    ///
    /// Fails with [`VersionNotFoundError`] when the document has no section
    /// for the requested version, and with a parse error when the configured
    /// template does not declare the `header` and `body` capture groups.
    pub fn section_range(&self, version: &str) -> Result<SectionRange> {
        let re = self.version_regex(version)?;
        let Some(caps) = re.captures(&self.content) else {
            return Err(VersionNotFoundError::new(version).into());
        };

        Ok(SectionRange {
            header: named_range(&re, &caps, HEADER_GROUP)?,
            body: named_range(&re, &caps, BODY_GROUP)?,
        })
    }

    /// Find `version`'s section and return its trimmed header and body.
    pub fn section(&self, version: &str) -> Result<Section<'_>> {
        let range = self.section_range(version)?;
        let bytes = self.content.as_bytes();
        Ok(Section {
            header: bytes[range.header.from..range.header.to].trim_ascii(),
            body: bytes[range.body.from..range.body.to].trim_ascii(),
        })
    }
}

fn named_range(re: &Regex, caps: &regex::Captures<'_>, name: &str) -> Result<ByteRange> {
    if !re.capture_names().flatten().any(|n| n == name) {
        return Err(ChangelogError::ParseError(format!(
            "capture group '{name}' not found in section pattern"
        )));
    }
    let group = caps.name(name).ok_or_else(|| {
        ChangelogError::ParseError(format!("capture group '{name}' did not match"))
    })?;
    Ok(ByteRange {
        from: group.start(),
        to: group.end(),
    })
}
