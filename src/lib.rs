pub mod cli;
pub mod config;
pub mod error;
pub mod nomming;
pub mod processing {

    use regex::Regex;
    use tracing::{ debug, info, warn, };
    use crate::{ error::ScanError, nomming::*, };
    use std::{
        fmt,
        fs::read,
        path::{ Path, PathBuf, },
        collections::HashSet,
    };






    /// The whole text of one input file, read once.
    #[derive(Debug, Clone)]
    pub struct Source {
        pub path: PathBuf,
        text: String,
    }
    impl Source {
        pub fn load(path: &Path) -> Result<Self, ScanError> {
            let bytes = read(path)
                .map_err( |source| ScanError::ResourceNotFound{ path: path.to_owned(), source } )?;
            let text = String::from_utf8(bytes)
                .map_err( |source| ScanError::Decoding{ path: path.to_owned(), source } )?;
            info!(path = %path.display(), bytes = text.len(), "loaded source");
            Ok(Self{ path: path.to_owned(), text })
        }
        pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
            Self{ path: path.into(), text: text.into() }
        }
        pub fn text(&self) -> &str {
            &self.text
        }
    }






    /// Which scan runs over a source.
    #[derive(Debug, Clone, Default)]
    pub enum Matcher {
        #[default]
        Times,
        Timecodes,
        UnitIds,
        Summary,
        Pattern(Regex),
    }
    impl Matcher {
        pub fn pattern(pattern: &str) -> Result<Self, ScanError> {
            Ok(Self::Pattern(Regex::new(pattern)?))
        }
        pub fn find<'t>(&self, text: &'t str) -> Matches<'t> {
            match self {
                Self::Times => Matches::Tokens(time_tokens(text)),
                Self::Pattern(regex) => Matches::Tokens(
                    regex.find_iter(text).map( |m| m.as_str() ).collect()
                    ),
                Self::Timecodes => Matches::Timecodes(timecodes(text)),
                Self::UnitIds => Matches::UnitIds(distinct_unit_ids(text)),
                Self::Summary => Matches::Summary(Summary{
                    unit_count: distinct_unit_ids(text).len(),
                    timecode_count: timecode_cells(text).len(),
                    course_id: course_id(text),
                }),
            }
        }
    }


    fn timecodes(text: &str) -> Vec<Timecode<'_>> {
        timecode_cells(text)
            .into_iter()
            .map( |(raw, (minutes, seconds))| Timecode::new(raw, minutes, seconds) )
            .collect()
    }
    /// First occurrence of each id; `007` and `7` are the same id.
    fn distinct_unit_ids(text: &str) -> Vec<&str> {
        let mut seen = HashSet::new();
        unit_ids(text)
            .into_iter()
            .filter( |&id| seen.insert(id.trim_start_matches('0')) )
            .collect()
    }






    /// An element-text time read as minutes and seconds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Timecode<'t> {
        pub raw: &'t str,
        pub duration_seconds: u32,
    }
    impl<'t> Timecode<'t> {
        pub fn new(raw: &'t str, minutes: u32, seconds: u32) -> Self {
            Self{ raw, duration_seconds: minutes * 60 + seconds }
        }
    }






    /// Unit and timecode counts, which should pair up one to one, and the
    /// course the page belongs to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Summary<'t> {
        pub unit_count: usize,
        pub timecode_count: usize,
        pub course_id: Option<&'t str>,
    }
    impl Summary<'_> {
        pub fn mismatched(&self) -> bool {
            self.unit_count != self.timecode_count
        }
    }
    impl fmt::Display for Summary<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(
                f,
                "units={} timecodes={} mismatched={} courseId={}",
                self.unit_count,
                self.timecode_count,
                self.mismatched(),
                self.course_id.unwrap_or("none"),
            )
        }
    }






    /// What one scan found, in order of appearance.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Matches<'t> {
        Tokens(Vec<&'t str>),
        Timecodes(Vec<Timecode<'t>>),
        UnitIds(Vec<&'t str>),
        Summary(Summary<'t>),
    }
    impl<'t> Matches<'t> {
        pub fn len(&self) -> usize {
            match self {
                Self::Tokens(tokens) => tokens.len(),
                Self::Timecodes(timecodes) => timecodes.len(),
                Self::UnitIds(ids) => ids.len(),
                Self::Summary(_) => 1,
            }
        }
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
        pub fn to_strings(&self) -> Vec<String> {
            match self {
                Self::Tokens(tokens) => tokens
                    .iter()
                    .map( |token| token.to_string() )
                    .collect(),
                Self::Timecodes(timecodes) => timecodes
                    .iter()
                    .map( |timecode| timecode.raw.to_string() )
                    .collect(),
                Self::UnitIds(ids) => ids
                    .iter()
                    .map( |id| id.to_string() )
                    .collect(),
                Self::Summary(summary) => vec![summary.to_string()],
            }
        }
        pub fn total_seconds(&self) -> Option<u64> {
            match self {
                Self::Timecodes(timecodes) => Some(timecodes
                    .iter()
                    .map( |timecode| u64::from(timecode.duration_seconds) )
                    .sum()),
                _ => None,
            }
        }
    }
    /// One line, shaped like a list of strings: `["09:30", "14:05"]`.
    /// A summary prints as its own line.
    impl fmt::Display for Matches<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Summary(summary) => write!(f, "{summary}"),
                _ => write!(f, "{:?}", self.to_strings()),
            }
        }
    }






    /// Runs one matcher over a loaded source.
    #[derive(Debug, Clone, Default)]
    pub struct Extractor {
        matcher: Matcher,
    }
    impl Extractor {
        pub fn new(matcher: Matcher) -> Self {
            Self{ matcher }
        }
        pub fn extract<'t>(&self, source: &'t Source) -> Matches<'t> {
            let matches = self.matcher.find(source.text());
            debug!(path = %source.path.display(), matcher = ?self.matcher, "scanned source");
            info!(count = matches.len(), "extracted matches");
            if let Some(total) = matches.total_seconds() {
                info!(total_seconds = total, "timecode total");
            }
            if let Matches::Summary(summary) = &matches {
                if summary.mismatched() {
                    warn!(
                        units = summary.unit_count,
                        timecodes = summary.timecode_count,
                        "unit ids and timecodes do not pair up"
                    );
                }
            }
            matches
        }
    }






}
