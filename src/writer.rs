use std::io::{self, Write};

use crate::error::Result;
use crate::parse::CodepointRange;

/// A writer of codepoint range tables.
///
/// A table is rendered as a Rust `const` array literal with an explicit
/// element count, one fixed-width hexadecimal tuple per line, sorted
/// ascending by range start. Overlapping or adjacent ranges are emitted
/// as-is and never merged; the consumer's lookup tolerates overlap.
pub struct Writer {
    wtr: Box<dyn io::Write + 'static>,
    wrote_banner: bool,
}

impl Writer {
    /// Create a new writer that writes to stdout.
    pub fn from_stdout() -> Writer {
        Writer::from_writer(io::stdout())
    }

    /// Create a new writer from any `io::Write` implementation.
    pub fn from_writer<W: io::Write + 'static>(wtr: W) -> Writer {
        Writer { wtr: Box::new(wtr), wrote_banner: false }
    }

    /// Write the progress banner that precedes a table.
    pub fn banner(&mut self, title: &str) -> Result<()> {
        if self.wrote_banner {
            writeln!(self.wtr)?;
        }
        self.wrote_banner = true;
        writeln!(self.wtr, "{}:", title)?;
        self.wtr.flush()?;
        Ok(())
    }

    /// Write one indented detail line under the current banner.
    pub fn banner_detail(&mut self, detail: &str) -> Result<()> {
        writeln!(self.wtr, "\t{}", detail)?;
        self.wtr.flush()?;
        Ok(())
    }

    /// Write a sorted table of untagged codepoint ranges.
    pub fn ranges(
        &mut self,
        name: &str,
        table: &[CodepointRange],
    ) -> Result<()> {
        write_ranges(&mut self.wtr, name, table)?;
        self.wtr.flush()?;
        Ok(())
    }

    /// Write a sorted table of codepoint ranges tagged with a property
    /// class id.
    pub fn tagged_ranges(
        &mut self,
        name: &str,
        table: &[(CodepointRange, u16)],
    ) -> Result<()> {
        write_tagged_ranges(&mut self.wtr, name, table)?;
        self.wtr.flush()?;
        Ok(())
    }
}

fn write_ranges<W: io::Write>(
    wtr: &mut W,
    name: &str,
    table: &[CodepointRange],
) -> Result<()> {
    let mut table = table.to_vec();
    table.sort_by_key(|range| range.start);
    writeln!(
        wtr,
        "pub const {}: [(u32, u32); {}] = [",
        rust_const_name(name),
        table.len()
    )?;
    for range in &table {
        writeln!(
            wtr,
            "    (0x{:06X}, 0x{:06X}),",
            range.start.value(),
            range.end.value()
        )?;
    }
    writeln!(wtr, "];")?;
    Ok(())
}

fn write_tagged_ranges<W: io::Write>(
    wtr: &mut W,
    name: &str,
    table: &[(CodepointRange, u16)],
) -> Result<()> {
    let mut table = table.to_vec();
    table.sort_by_key(|&(range, _)| range.start);
    writeln!(
        wtr,
        "pub const {}: [(u32, u32, u16); {}] = [",
        rust_const_name(name),
        table.len()
    )?;
    for &(range, id) in &table {
        writeln!(
            wtr,
            "    (0x{:06X}, 0x{:06X}, {}),",
            range.start.value(),
            range.end.value(),
            id
        )?;
    }
    writeln!(wtr, "];")?;
    Ok(())
}

/// Produce the constant name the consuming library expects for a table.
fn rust_const_name(s: &str) -> String {
    let mut s = s.to_string();
    s.make_ascii_uppercase();
    s
}
