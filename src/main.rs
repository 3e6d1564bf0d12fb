use std::process;

use crate::args::ArgMatches;
use crate::error::Result;

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::Other(format!($($tt)*)))
    }
}

mod app;
mod args;
mod error;
mod fetch;
mod parse;
mod property;
mod writer;

mod brk;
mod line_break;
mod property_bool;

fn main() {
    if let Err(err) = run() {
        if err.is_broken_pipe() {
            process::exit(0);
        }
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = app::app().get_matches();
    let args = ArgMatches::new(&matches);
    let source = fetch::UcdSource::new(args.unicode_version());
    let ascii_only = args.ascii_only();
    let mut wtr = writer::Writer::from_stdout();

    property_bool::whitespace(&source, ascii_only, &mut wtr)?;
    property_bool::double_width(&source, ascii_only, &mut wtr)?;
    property_bool::zero_width(&source, ascii_only, &mut wtr)?;
    brk::grapheme_cluster(&source, ascii_only, &mut wtr)?;
    line_break::command(&source, ascii_only, &mut wtr)?;
    Ok(())
}
