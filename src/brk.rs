use crate::error::Result;
use crate::fetch::{self, UcdSource};
use crate::parse::{self, parse_property_line, CodepointRange};
use crate::property::GraphemeClusterBreak;
use crate::writer::Writer;

pub fn grapheme_cluster(
    source: &UcdSource,
    ascii_only: bool,
    wtr: &mut Writer,
) -> Result<()> {
    wtr.banner("Grapheme cluster break")?;
    let breaks =
        fetch::fetch_document(&source.grapheme_break_property(), wtr)?;
    let mut table = break_table(&breaks, ascii_only)?;

    // GraphemeBreakProperty.txt omits Extended_Pictographic, which lives in
    // the emoji data file. Both result sets go into one table, sorted by
    // the writer.
    let emoji = fetch::fetch_document(&source.emoji_data(), wtr)?;
    table.extend(extended_pictographic_table(&emoji, ascii_only)?);

    wtr.tagged_ranges("grapheme_cluster_break_table", &table)
}

/// Build the tagged table for `GraphemeBreakProperty.txt`. Every data line
/// must carry one of the fourteen known class names.
fn break_table(
    contents: &str,
    ascii_only: bool,
) -> Result<Vec<(CodepointRange, u16)>> {
    let mut table = vec![];
    for (i, line) in contents.lines().enumerate() {
        let row = match parse_property_line(line)
            .map_err(|err| err.on_line(i + 1))?
        {
            Some(row) => row,
            None => continue,
        };
        let class = GraphemeClusterBreak::resolve(row.value)
            .map_err(|err| err.on_line(i + 1))?;
        if let Some(range) = parse::clip(row.codepoints, ascii_only) {
            table.push((range, class.id()));
        }
    }
    Ok(table)
}

/// Build the `Extended_Pictographic` portion of the table from
/// `emoji-data.txt`. The file describes several emoji properties; rows for
/// the others are skipped, not errors.
fn extended_pictographic_table(
    contents: &str,
    ascii_only: bool,
) -> Result<Vec<(CodepointRange, u16)>> {
    let mut table = vec![];
    for (i, line) in contents.lines().enumerate() {
        let row = match parse_property_line(line)
            .map_err(|err| err.on_line(i + 1))?
        {
            Some(row) => row,
            None => continue,
        };
        if row.value != "Extended_Pictographic" {
            continue;
        }
        if let Some(range) = parse::clip(row.codepoints, ascii_only) {
            table.push((range, GraphemeClusterBreak::ExtendedPictographic.id()));
        }
    }
    Ok(table)
}
