//! QML import records.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches a single import statement, without comments.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^import\s+(?:"([^"]+)"|([A-Za-z_][\w.]*))(?:\s+(\d+(?:\.\d+)*))?(?:\s+as\s+([A-Za-z_]\w*))?\s*;?$"#,
    )
    .expect("import regex is valid")
});

/// What an import refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportSource {
    /// A module URI such as `QtQuick.Controls`
    Library(String),
    /// A directory or JavaScript file, written quoted
    File(String),
}

/// A single import statement of a QML document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Import {
    pub source: ImportSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Import {
    /// Create a library import (`import QtQuick 2.0`).
    pub fn library(url: impl Into<String>, version: Option<&str>) -> Self {
        Import {
            source: ImportSource::Library(url.into()),
            version: version.map(String::from),
            alias: None,
        }
    }

    /// Create a file import (`import "content"`).
    pub fn file(path: impl Into<String>) -> Self {
        Import {
            source: ImportSource::File(path.into()),
            version: None,
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn is_library(&self) -> bool {
        matches!(self.source, ImportSource::Library(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.source, ImportSource::File(_))
    }

    /// The module URI, for library imports.
    pub fn url(&self) -> Option<&str> {
        match &self.source {
            ImportSource::Library(url) => Some(url),
            ImportSource::File(_) => None,
        }
    }

    /// The bare import target: the URI, or the quoted file path.
    pub fn target_string(&self) -> String {
        match &self.source {
            ImportSource::Library(url) => url.clone(),
            ImportSource::File(path) => format!("\"{}\"", path),
        }
    }

    /// Render as a QML import statement.
    pub fn to_import_string(&self, add_semicolon: bool, skip_alias: bool) -> String {
        let mut result = format!("import {}", self.target_string());

        if let Some(ref version) = self.version {
            result.push(' ');
            result.push_str(version);
        }

        if !skip_alias {
            if let Some(ref alias) = self.alias {
                result.push_str(" as ");
                result.push_str(alias);
            }
        }

        if add_semicolon {
            result.push(';');
        }

        result
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_import_string(false, false))
    }
}

/// Strip a trailing `//` comment that is not inside a quoted path.
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b'/' if !in_quotes && bytes.get(i + 1) == Some(&b'/') => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse a single import statement.
pub fn parse_import(line: &str) -> Option<Import> {
    let line = strip_comment(line).trim();
    let caps = IMPORT_RE.captures(line)?;

    let source = match (caps.get(1), caps.get(2)) {
        (Some(file), _) => ImportSource::File(file.as_str().to_string()),
        (None, Some(url)) => ImportSource::Library(url.as_str().to_string()),
        (None, None) => return None,
    };

    Some(Import {
        source,
        version: caps.get(3).map(|m| m.as_str().to_string()),
        alias: caps.get(4).map(|m| m.as_str().to_string()),
    })
}

/// Extract the import statements of a QML document, in order.
///
/// Lines that start with `import` but cannot be read are skipped.
pub fn parse_imports(source: &str) -> Vec<Import> {
    let mut imports = Vec::new();

    for (lineno, line) in source.lines().enumerate() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with("import") {
            continue;
        }
        let rest = &trimmed["import".len()..];
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }

        match parse_import(trimmed) {
            Some(import) => imports.push(import),
            None => tracing::debug!("skipping malformed import on line {}: {}", lineno + 1, line),
        }
    }

    imports
}
