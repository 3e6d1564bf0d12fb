use std::ops;

/// A light wrapper over clap's matches that knows this tool's flags.
#[derive(Clone, Debug)]
pub struct ArgMatches<'a>(&'a clap::ArgMatches<'a>);

impl<'a> ops::Deref for ArgMatches<'a> {
    type Target = clap::ArgMatches<'a>;
    fn deref(&self) -> &clap::ArgMatches<'a> {
        self.0
    }
}

impl<'a> ArgMatches<'a> {
    pub fn new(matches: &'a clap::ArgMatches<'a>) -> ArgMatches<'a> {
        ArgMatches(matches)
    }

    /// The requested Unicode version, or `None` for the latest published.
    pub fn unicode_version(&self) -> Option<&str> {
        self.value_of("unicode-version")
    }

    /// Whether emitted tables should be clipped to the ASCII range.
    pub fn ascii_only(&self) -> bool {
        self.is_present("ascii-only")
    }
}
