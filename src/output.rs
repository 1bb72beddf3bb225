use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::engines::ScholarResult;

/// Everything this tool ever prints. Errors are reported here rather than
/// through the exit code, so callers can always parse stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub results: Vec<ScholarResult>,
}

impl Output {
    pub fn results(results: Vec<ScholarResult>) -> Self {
        Self {
            error: None,
            results,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            results: Vec::new(),
        }
    }

    /// Renders the payload as a single line of ASCII JSON, spaced like
    /// `{"error": "Missing query", "results": []}`.
    pub fn to_json(&self) -> eyre::Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Compact JSON with a space after every `,` and `:`, and everything outside
/// printable ASCII written as `\uXXXX` escapes. DEL counts as non-printable.
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
