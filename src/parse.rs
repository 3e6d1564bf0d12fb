use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The two-character divider between the endpoints of a codepoint range.
const RANGE_DIVIDER: &'static str = "..";

/// The last codepoint kept when clipping tables to the ASCII range.
const ASCII_LIMIT: u32 = 0x7F;

/// A single Unicode codepoint.
///
/// A codepoint is always in the inclusive range `[0, 0x10FFFF]`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Codepoint(u32);

impl Codepoint {
    /// Create a new codepoint from a `u32`.
    ///
    /// If the given number is not a valid codepoint, then this returns an
    /// error.
    pub fn from_u32(n: u32) -> Result<Codepoint> {
        if n > 0x10FFFF {
            err!("{:x} is not a valid Unicode codepoint", n)
        } else {
            Ok(Codepoint(n))
        }
    }

    /// Return the underlying `u32` codepoint value.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

impl FromStr for Codepoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Codepoint> {
        match u32::from_str_radix(s, 16) {
            Ok(n) => Codepoint::from_u32(n),
            Err(err) => {
                err!("failed to parse {:?} as a hexadecimal number: {}", s, err)
            }
        }
    }
}

/// A closed range of Unicode codepoints, `start <= end`.
///
/// A single codepoint is represented as a range with `start == end`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CodepointRange {
    /// The starting codepoint of the range, inclusive.
    pub start: Codepoint,
    /// The ending codepoint of the range, inclusive.
    pub end: Codepoint,
}

impl CodepointRange {
    /// Clip this range to the ASCII range.
    ///
    /// A range lying entirely above `0x7F` yields `None`, and a range
    /// straddling `0x7F` is truncated to end at `0x7F`. The portion above
    /// `0x7F` is dropped and never re-emitted as a separate range, which
    /// matches what the consuming library expects of ASCII-only tables.
    pub fn clip_to_ascii(self) -> Option<CodepointRange> {
        if self.end.value() <= ASCII_LIMIT {
            Some(self)
        } else if self.start.value() > ASCII_LIMIT {
            None
        } else {
            Some(CodepointRange { start: self.start, end: Codepoint(ASCII_LIMIT) })
        }
    }
}

impl FromStr for CodepointRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<CodepointRange> {
        let (start, end) = match s.find(RANGE_DIVIDER) {
            None => {
                let cp: Codepoint = s.parse()?;
                (cp, cp)
            }
            Some(i) => {
                (s[..i].parse()?, s[i + RANGE_DIVIDER.len()..].parse()?)
            }
        };
        if start > end {
            return err!("codepoint range {:?} is inverted", s);
        }
        Ok(CodepointRange { start, end })
    }
}

/// Apply ASCII clipping to a range when the run asked for it.
pub fn clip(range: CodepointRange, ascii_only: bool) -> Option<CodepointRange> {
    if ascii_only {
        range.clip_to_ascii()
    } else {
        Some(range)
    }
}

/// A single data line in a UCD property file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyLine<'a> {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: CodepointRange,
    /// The property value assigned to the codepoints in this entry.
    pub value: &'a str,
    /// The trailing inline comment, if any, with the leading `#` and
    /// surrounding whitespace removed. Line break data embeds the general
    /// category of the entry here, which the `SA` override needs.
    pub comment: Option<&'a str>,
}

/// Parse one line of a UCD property file of the form
/// `codepoints ; value # comment`.
///
/// Blank lines and full-line comments yield `None`. A data line without a
/// `;` divider is an error, since that means the file no longer has the
/// layout this parser was written against.
pub fn parse_property_line(line: &str) -> Result<Option<PropertyLine<'_>>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let div = match line.find(';') {
        Some(i) => i,
        None => return err!("cannot find the field divider in {:?}", line),
    };
    let (value_end, comment) = match line[div..].find('#') {
        Some(i) => (div + i, Some(line[div + i + 1..].trim())),
        None => (line.len(), None),
    };
    Ok(Some(PropertyLine {
        codepoints: line[..div].trim().parse()?,
        value: line[div + 1..value_end].trim(),
        comment,
    }))
}

#[cfg(test)]
mod tests {
    use super::{parse_property_line, Codepoint, CodepointRange};

    fn range(start: u32, end: u32) -> CodepointRange {
        CodepointRange {
            start: Codepoint::from_u32(start).unwrap(),
            end: Codepoint::from_u32(end).unwrap(),
        }
    }

    #[test]
    fn parse_single() {
        let line = "0020          ; White_Space # Zs       SPACE\n";
        let row = parse_property_line(line).unwrap().unwrap();
        assert_eq!(row.codepoints, range(0x20, 0x20));
        assert_eq!(row.value, "White_Space");
        assert_eq!(row.comment, Some("Zs       SPACE"));
    }

    #[test]
    fn parse_range() {
        let line = "0009..000D    ; White_Space # Cc   [5] <control-0009>..<control-000D>\n";
        let row = parse_property_line(line).unwrap().unwrap();
        assert_eq!(row.codepoints, range(0x9, 0xD));
        assert_eq!(row.value, "White_Space");
    }

    #[test]
    fn parse_no_comment() {
        let line = "1160..11FF;JT";
        let row = parse_property_line(line).unwrap().unwrap();
        assert_eq!(row.codepoints, range(0x1160, 0x11FF));
        assert_eq!(row.value, "JT");
        assert_eq!(row.comment, None);
    }

    #[test]
    fn skip_blank_and_comment_lines() {
        assert_eq!(parse_property_line("").unwrap(), None);
        assert_eq!(parse_property_line("   \n").unwrap(), None);
        assert_eq!(
            parse_property_line("# EastAsianWidth-14.0.0.txt").unwrap(),
            None
        );
    }

    #[test]
    fn missing_divider() {
        assert!(parse_property_line("0041 Lu LATIN CAPITAL LETTER A").is_err());
    }

    #[test]
    fn bad_codepoints() {
        assert!(parse_property_line("GGGG; AL").is_err());
        assert!(parse_property_line("110000; AL").is_err());
        assert!(parse_property_line("0042..0041; AL").is_err());
    }

    #[test]
    fn clip_noop_below_limit() {
        assert_eq!(range(0x9, 0xD).clip_to_ascii(), Some(range(0x9, 0xD)));
        assert_eq!(range(0x7F, 0x7F).clip_to_ascii(), Some(range(0x7F, 0x7F)));
    }

    #[test]
    fn clip_drops_non_ascii() {
        assert_eq!(range(0x80, 0x100).clip_to_ascii(), None);
        assert_eq!(range(0x1F600, 0x1F64F).clip_to_ascii(), None);
    }

    #[test]
    fn clip_truncates_straddling() {
        assert_eq!(range(0x50, 0x100).clip_to_ascii(), Some(range(0x50, 0x7F)));
    }

    #[test]
    fn clip_is_idempotent() {
        let clipped = range(0x50, 0x100).clip_to_ascii().unwrap();
        assert_eq!(clipped.clip_to_ascii(), Some(clipped));
    }
}
