use crate::error::Result;
use crate::fetch::{self, UcdSource};
use crate::parse::{self, parse_property_line, CodepointRange};
use crate::writer::Writer;

/// The `PropList.txt` property a codepoint must carry to count as
/// whitespace.
const WHITESPACE_PROPERTIES: &'static [&'static str] = &["White_Space"];

/// The `East_Asian_Width` values that render double width (Wide and
/// Fullwidth).
const DOUBLE_WIDTH_VALUES: &'static [&'static str] = &["W", "F"];

/// The general categories that render zero width (nonspacing and enclosing
/// marks).
const ZERO_WIDTH_CATEGORIES: &'static [&'static str] = &["Mn", "Me"];

pub fn whitespace(
    source: &UcdSource,
    ascii_only: bool,
    wtr: &mut Writer,
) -> Result<()> {
    command(
        "Whitespace",
        &source.prop_list(),
        WHITESPACE_PROPERTIES,
        "whitespace_table",
        ascii_only,
        wtr,
    )
}

pub fn double_width(
    source: &UcdSource,
    ascii_only: bool,
    wtr: &mut Writer,
) -> Result<()> {
    command(
        "Double width",
        &source.east_asian_width(),
        DOUBLE_WIDTH_VALUES,
        "double_width_table",
        ascii_only,
        wtr,
    )
}

pub fn zero_width(
    source: &UcdSource,
    ascii_only: bool,
    wtr: &mut Writer,
) -> Result<()> {
    command(
        "Zero width",
        &source.derived_general_category(),
        ZERO_WIDTH_CATEGORIES,
        "zero_width_table",
        ascii_only,
        wtr,
    )
}

fn command(
    title: &str,
    url: &str,
    keep: &[&str],
    name: &str,
    ascii_only: bool,
    wtr: &mut Writer,
) -> Result<()> {
    wtr.banner(title)?;
    let contents = fetch::fetch_document(url, wtr)?;
    let table = membership_table(&contents, keep, ascii_only)?;
    wtr.ranges(name, &table)
}

/// Collect the ranges whose property value is one of `keep`.
///
/// Lines carrying any other value are skipped. Lines that do not parse are
/// fatal to the whole run.
fn membership_table(
    contents: &str,
    keep: &[&str],
    ascii_only: bool,
) -> Result<Vec<CodepointRange>> {
    let mut table = vec![];
    for (i, line) in contents.lines().enumerate() {
        let row = match parse_property_line(line)
            .map_err(|err| err.on_line(i + 1))?
        {
            Some(row) => row,
            None => continue,
        };
        if !keep.contains(&row.value) {
            continue;
        }
        if let Some(range) = parse::clip(row.codepoints, ascii_only) {
            table.push(range);
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::membership_table;
    use crate::parse::CodepointRange;

    const PROP_LIST: &'static str = "\
# PropList-14.0.0.txt
# ================================================

0009..000D    ; White_Space # Cc   [5] <control-0009>..<control-000D>
0020          ; White_Space # Zs       SPACE
0085          ; White_Space # Cc       <control-0085>
0600..0605    ; Prepended_Concatenation_Mark # Cf   [6] ARABIC NUMBER SIGN..ARABIC NUMBER MARK ABOVE
3000          ; White_Space # Zs       IDEOGRAPHIC SPACE
";

    fn range(start: u32, end: u32) -> CodepointRange {
        format!("{:X}..{:X}", start, end).parse().unwrap()
    }

    #[test]
    fn keeps_only_members() {
        let table =
            membership_table(PROP_LIST, &["White_Space"], false).unwrap();
        assert_eq!(
            table,
            vec![
                range(0x9, 0xD),
                range(0x20, 0x20),
                range(0x85, 0x85),
                range(0x3000, 0x3000),
            ]
        );
    }

    #[test]
    fn ascii_only_clips() {
        let table =
            membership_table(PROP_LIST, &["White_Space"], true).unwrap();
        assert_eq!(table, vec![range(0x9, 0xD), range(0x20, 0x20)]);
    }

    #[test]
    fn double_width_values() {
        let contents = "\
1100..115F;W     # Lo    [96] HANGUL CHOSEONG KIYEOK..HANGUL CHOSEONG FILLER
20A9;H           # Sc         WON SIGN
3000;F           # Zs         IDEOGRAPHIC SPACE
";
        let table = membership_table(contents, &["W", "F"], false).unwrap();
        assert_eq!(table, vec![range(0x1100, 0x115F), range(0x3000, 0x3000)]);
    }

    #[test]
    fn malformed_line_is_fatal() {
        let contents = "0009..000D    ; White_Space\nnot a ucd line\n";
        let err = membership_table(contents, &["White_Space"], false)
            .unwrap_err()
            .to_string();
        assert!(err.contains("line 2"), "unexpected message: {}", err);
    }
}
