use std::{
    fs::read_to_string,
    path::{ Path, PathBuf, },
};
use clap::ValueEnum;
use serde::{ Serialize, Deserialize, };
use crate::{ error::ScanError, processing::Matcher, };


pub const DEFAULT_INPUT: &'static str = "i.html";




/// Which builtin scan runs over the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scan {
    /// every `dd:dd` token
    #[default]
    Times,
    /// `dd:dd` tokens that are the whole text of an element
    Timecodes,
    /// de-duplicated `unitId=<digits>` values
    UnitIds,
    /// unit and timecode counts, whether they differ, and the course id
    Summary,
}




/// Scan settings, read from JSON with camelCase keys:
///
/// ```json
/// { "inputPath": "i.html", "pattern": null, "scan": "times" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    pub input_path: PathBuf,
    /// regex replacing the builtin time scan
    pub pattern: Option<String>,
    pub scan: Scan,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            pattern: None,
            scan: Scan::default(),
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn from_file(path: &Path) -> Result<Self, ScanError> {
        let json = read_to_string(path)
            .map_err( |source| ScanError::ConfigUnreadable{ path: path.to_owned(), source } )?;
        Self::from_json(&json)
            .map_err( |source| ScanError::Config{ path: path.to_owned(), source } )
    }

    pub fn validate(&self) -> Result<(), ScanError> {
        match (&self.pattern, self.scan) {
            (Some(_), Scan::Times) | (None, _) => Ok(()),
            (Some(pattern), scan) => Err(ScanError::Conflict(format!(
                "pattern {pattern:?} cannot be combined with the {scan:?} scan"
            ))),
        }
    }

    pub fn matcher(&self) -> Result<Matcher, ScanError> {
        self.validate()?;
        match (&self.pattern, self.scan) {
            (Some(pattern), _) => Matcher::pattern(pattern),
            (None, Scan::Times) => Ok(Matcher::Times),
            (None, Scan::Timecodes) => Ok(Matcher::Timecodes),
            (None, Scan::UnitIds) => Ok(Matcher::UnitIds),
            (None, Scan::Summary) => Ok(Matcher::Summary),
        }
    }
}




#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_json_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.input_path, PathBuf::from("i.html"));
    }

    #[test]
    fn camel_case_keys() {
        let config = Config::from_json(
            r#"{ "inputPath": "page.html", "pattern": "\\d+", "scan": "times" }"#
        ).unwrap();
        assert_eq!(config.input_path, PathBuf::from("page.html"));
        assert_eq!(config.pattern.as_deref(), Some(r"\d+"));
    }

    #[test]
    fn kebab_case_scan() {
        let config = Config::from_json(r#"{ "scan": "unit-ids" }"#).unwrap();
        assert_eq!(config.scan, Scan::UnitIds);
    }

    #[test]
    fn summary_scan() {
        let config = Config::from_json(r#"{ "scan": "summary" }"#).unwrap();
        assert!(matches!(config.matcher(), Ok(Matcher::Summary)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_json(r#"{ "input_path": "x" }"#).is_err());
    }

    #[test]
    fn pattern_conflicts_with_other_scans() {
        let config = Config {
            pattern: Some("a".into()),
            scan: Scan::Timecodes,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ScanError::Conflict(_))));
        assert!(config.matcher().is_err());
    }

    #[test]
    fn bad_pattern_is_reported() {
        let config = Config { pattern: Some("(".into()), ..Config::default() };
        assert!(matches!(config.matcher(), Err(ScanError::Pattern(_))));
    }

    #[test]
    fn default_matcher_is_times() {
        let matcher = Config::default().matcher().unwrap();
        assert!(matches!(matcher, Matcher::Times));
    }

    #[test]
    fn reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "scan": "timecodes" }}"#).unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.scan, Scan::Timecodes);
    }

    #[test]
    fn missing_config_file() {
        let err = Config::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ScanError::ConfigUnreadable{ .. }));
    }
}
