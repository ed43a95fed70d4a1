use clap::{ ArgAction, Parser, };
use anyhow::Result;
use tracing::{ debug, Level, };
use std::path::PathBuf;
use crate::{
    config::{ Config, Scan, },
    processing::Matcher,
};





#[derive(Debug,Parser)]
#[command(version, about = "Print every dd:dd time token found in an HTML file")]
pub struct Cli {
    /// file to scan (defaults to `inputPath` from the config, then i.html)
    pub path: Option<PathBuf>,
    /// optional JSON config with `inputPath`, `pattern` and `scan` keys
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// regex replacing the builtin time scan
    #[arg(short, long)]
    pub pattern: Option<String>,
    /// which builtin scan to run
    #[arg(short, long, value_enum)]
    pub scan: Option<Scan>,
    /// more logging on stderr, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli{
    pub fn args() -> Self {
        Cli::parse()
    }

    pub fn level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Defaults, then the config file, then flags.
    pub fn resolve(self) -> Result<Config> {
        let mut config = match self.config {
            Some(file) => Config::from_file(&file)?,
            None => Config::default(),
        };
        if let Some(path) = self.path {
            config.input_path = path;
        }
        if let Some(pattern) = self.pattern {
            config.pattern = Some(pattern);
        }
        if let Some(scan) = self.scan {
            config.scan = scan;
        }
        debug!(?config, "resolved configuration");
        Ok(config)
    }
}





pub struct Input {
    pub path: PathBuf,
    pub matcher: Matcher,
}

impl Input {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = cli.resolve()?;
        let matcher = config.matcher()?;
        Ok(Input{ path: config.input_path, matcher })
    }
}





#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("html-timescan").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let input = Input::new(cli(&[])).unwrap();
        assert_eq!(input.path, PathBuf::from("i.html"));
        assert!(matches!(input.matcher, Matcher::Times));
    }

    #[test]
    fn verbosity() {
        assert_eq!(cli(&[]).level(), Level::WARN);
        assert_eq!(cli(&["-v"]).level(), Level::INFO);
        assert_eq!(cli(&["-vvvv"]).level(), Level::TRACE);
    }

    #[test]
    fn scan_names() {
        assert_eq!(cli(&["--scan", "unit-ids"]).scan, Some(Scan::UnitIds));
        assert!(Cli::try_parse_from(["html-timescan", "--scan", "dates"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "inputPath": "from-config.html", "scan": "timecodes" }}"#).unwrap();
        let config_path = file.path().to_str().unwrap();

        let config = cli(&["-c", config_path]).resolve().unwrap();
        assert_eq!(config.input_path, PathBuf::from("from-config.html"));
        assert_eq!(config.scan, Scan::Timecodes);

        let config = cli(&["-c", config_path, "page.html", "-s", "times"]).resolve().unwrap();
        assert_eq!(config.input_path, PathBuf::from("page.html"));
        assert_eq!(config.scan, Scan::Times);
    }

    #[test]
    fn pattern_with_other_scan_is_rejected() {
        assert!(Input::new(cli(&["-p", r"\d+", "-s", "timecodes"])).is_err());
    }
}
