use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::writer::Writer;

/// Where unpinned runs get their data from. Versioned runs substitute the
/// version directly into the URL path instead.
const LATEST_BASE_URL: &'static str =
    "https://www.unicode.org/Public/UCD/latest/ucd";

/// The set of versioned unicode.org URLs that one generation run reads.
#[derive(Clone, Debug)]
pub struct UcdSource {
    base: String,
}

impl UcdSource {
    /// Create a source for the given Unicode version (e.g. `14.0.0`), or
    /// for the latest published version when `None`.
    pub fn new(version: Option<&str>) -> UcdSource {
        let base = match version {
            None => LATEST_BASE_URL.to_string(),
            Some(v) => format!("https://www.unicode.org/Public/{}/ucd", v),
        };
        UcdSource { base }
    }

    pub fn prop_list(&self) -> String {
        format!("{}/PropList.txt", self.base)
    }

    pub fn east_asian_width(&self) -> String {
        format!("{}/EastAsianWidth.txt", self.base)
    }

    pub fn derived_general_category(&self) -> String {
        format!("{}/extracted/DerivedGeneralCategory.txt", self.base)
    }

    pub fn grapheme_break_property(&self) -> String {
        format!("{}/auxiliary/GraphemeBreakProperty.txt", self.base)
    }

    pub fn emoji_data(&self) -> String {
        format!("{}/emoji/emoji-data.txt", self.base)
    }

    pub fn line_break(&self) -> String {
        format!("{}/LineBreak.txt", self.base)
    }
}

/// Download one document as text. Blocking, no retries: a failed or hung
/// fetch is fatal to the whole run.
pub fn fetch(url: &str) -> Result<String> {
    Ok(ureq::get(url).call()?.into_string()?)
}

/// Download one UCD document, echoing its URL and the version its header
/// declares as part of the progress banner. The banner lines go through
/// the writer so that a closed stdout surfaces as an error instead of a
/// panic.
pub fn fetch_document(url: &str, wtr: &mut Writer) -> Result<String> {
    wtr.banner_detail(&format!("URL: {}", url))?;
    let contents = fetch(url)?;
    wtr.banner_detail(&format!("Version: {}", extract_version(&contents)?))?;
    Ok(contents)
}

/// Extract the `major.minor.patch` version from the first line of a UCD
/// file, e.g. `# PropList-14.0.0.txt`.
pub fn extract_version(contents: &str) -> Result<String> {
    lazy_static! {
        static ref VERSION: Regex = Regex::new(r"\d+\.\d+\.\d+").unwrap();
    }
    let first = contents.lines().next().unwrap_or("");
    match VERSION.find(first) {
        Some(m) => Ok(m.as_str().to_string()),
        None => err!("cannot find a version in the file header: {:?}", first),
    }
}
