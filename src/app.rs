use clap::{App, AppSettings, Arg};

const TEMPLATE: &'static str = "\
{bin} {version}
{about}

USAGE:
    {usage}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
unicode-table-generate downloads Unicode character database (UCD) property
files and prints them as sorted codepoint range tables, rendered as Rust
array literals for pasting into the consuming library's static data.

One run emits five tables: whitespace, double width and zero width
membership tables, plus the class-tagged grapheme cluster break and line
break tables. Each table is preceded by a banner naming the source URL and
the version the downloaded file declares.

Any line the generator cannot parse, and any property abbreviation it does
not recognize, aborts the whole run: the output is compiled-in data for the
consumer, so a partially generated table must never be emitted.";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    let flag_version = Arg::with_name("unicode-version")
        .long("unicode-version")
        .takes_value(true)
        .help(
            "The Unicode version to generate tables from, e.g. '14.0.0'. \
             When absent, the latest published version is used.",
        );
    let flag_ascii = Arg::with_name("ascii-only").long("ascii-only").help(
        "Restrict all emitted tables to the ASCII range. Ranges starting \
         above 0x7F are dropped and ranges straddling 0x7F are truncated.",
    );

    App::new("unicode-table-generate")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .arg(flag_version)
        .arg(flag_ascii)
}
