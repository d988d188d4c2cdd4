//! Annotated line parser
//!
//! A managed line looks like:
//!
//! ```text
//!       version: 0.3.6 # helm:autoupdate:aws-vpc-cni
//! ^^^^^^^^^^^^^  ^^^^^                  ^^^^^^^^^^^
//!    prefix     version                  identity    (+ suffix)
//! ```
//!
//! Lines are matched as raw text, never as YAML, so everything outside the
//! version value is written back exactly as it was read.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Literal marker separating the version value from the identity
pub const MARKER: &str = "# helm:autoupdate:";

static ANNOTATED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^:]*):([^#]*)# helm:autoupdate:([a-zA-Z0-9-]+)(.*)$")
        .expect("annotated line pattern is valid")
});

/// A line carrying an `# helm:autoupdate:<identity>` annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine {
    /// Everything before the first colon, whitespace preserved
    pub prefix: String,
    /// The value between the colon and the marker, trimmed
    pub current_version: String,
    /// Identity correlating the line to a configured chart
    pub identity: String,
    /// Everything after the identity, whitespace preserved
    pub suffix: String,
}

impl AnnotatedLine {
    /// Copy of this line with a different version value
    pub fn with_version(&self, version: impl Into<String>) -> Self {
        Self {
            current_version: version.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for AnnotatedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}{}{}",
            self.prefix, self.current_version, MARKER, self.identity, self.suffix
        )
    }
}

/// Parse a single line, returning `None` when it carries no annotation
pub fn parse_line(line: &str) -> Option<AnnotatedLine> {
    let caps = ANNOTATED_LINE.captures(line)?;
    Some(AnnotatedLine {
        prefix: caps[1].to_string(),
        current_version: caps[2].trim().to_string(),
        identity: caps[3].to_string(),
        suffix: caps[4].to_string(),
    })
}

/// Render a parsed line back to text, normalizing spacing around the colon
pub fn render(line: &AnnotatedLine) -> String {
    line.to_string()
}
