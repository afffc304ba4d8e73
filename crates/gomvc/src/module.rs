//! Go module identifier

use serde::Serialize;
use std::fmt;
use std::io::{BufRead, Write};

use crate::error::ProvisionError;

/// Prompt shown when no module identifier is given on the command line
pub const PROMPT: &str =
    "Enter the project name for Go module initialization (e.g., github.com/username/project): ";

/// A trimmed, non-empty Go module identifier such as `github.com/user/project`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Trim surrounding whitespace and reject an empty result.
    ///
    /// Nothing else is validated; the string is used verbatim.
    pub fn parse(raw: &str) -> Result<Self, ProvisionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProvisionError::EmptyModule);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prompt on `output` and read one line from `input`
pub fn read_module_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<ModuleId, ProvisionError> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .map_err(ProvisionError::Input)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(ProvisionError::Input)?;
    if read == 0 {
        return Err(ProvisionError::Input(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no input",
        )));
    }

    ModuleId::parse(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_trims() {
        let id = ModuleId::parse("  example.com/u/p1\n").unwrap();
        assert_eq!(id.as_str(), "example.com/u/p1");
        assert_eq!(id.to_string(), "example.com/u/p1");
    }

    #[test]
    fn test_parse_rejects_whitespace_only() {
        assert!(matches!(ModuleId::parse(" \t\n"), Err(ProvisionError::EmptyModule)));
        assert!(matches!(ModuleId::parse(""), Err(ProvisionError::EmptyModule)));
    }

    #[test]
    fn test_parse_keeps_inner_text() {
        let id = ModuleId::parse("odd name/with space").unwrap();
        assert_eq!(id.as_str(), "odd name/with space");
    }

    #[test]
    fn test_read_module_id() {
        let mut input = Cursor::new("github.com/acme/api\nignored\n");
        let mut output = Vec::new();

        let id = read_module_id(&mut input, &mut output).unwrap();
        assert_eq!(id.as_str(), "github.com/acme/api");
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_read_module_id_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(matches!(
            read_module_id(&mut input, &mut output),
            Err(ProvisionError::Input(_))
        ));
    }

    #[test]
    fn test_read_module_id_blank_line() {
        let mut input = Cursor::new("   \n");
        let mut output = Vec::new();
        assert!(matches!(
            read_module_id(&mut input, &mut output),
            Err(ProvisionError::EmptyModule)
        ));
    }

    #[test]
    fn test_serializes_as_string() {
        let id = ModuleId::parse("a/b").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a/b\"");
    }
}
