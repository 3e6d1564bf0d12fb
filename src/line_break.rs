use crate::error::Result;
use crate::fetch::{self, UcdSource};
use crate::parse::{self, parse_property_line, CodepointRange};
use crate::property::LineBreak;
use crate::writer::Writer;

pub fn command(
    source: &UcdSource,
    ascii_only: bool,
    wtr: &mut Writer,
) -> Result<()> {
    wtr.banner("Line break")?;
    let contents = fetch::fetch_document(&source.line_break(), wtr)?;
    let table = line_break_table(&contents, ascii_only)?;
    wtr.tagged_ranges("line_break_table", &table)
}

/// Build the tagged table for `LineBreak.txt`.
///
/// Resolution goes through [`LineBreak::resolve`], so the `AI`/`SG`/`XX`,
/// `CJ` and `SA` rows come out as the classes the consumer actually uses.
fn line_break_table(
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
        let class = LineBreak::resolve(row.value, row.comment)
            .map_err(|err| err.on_line(i + 1))?;
        if let Some(range) = parse::clip(row.codepoints, ascii_only) {
            table.push((range, class.id()));
        }
    }
    Ok(table)
}
