use crate::config::FuriConfig;
use crate::kanjistudy::KanjiReport;
use std::fmt;
use std::path::PathBuf;

pub mod cards;
pub mod config;
pub mod furigana;
pub mod highlight;
pub mod kanji;
pub mod mark;
pub mod paths;
pub mod queue;
pub mod stats;

#[derive(Debug, Clone)]
pub struct FuriPaths {
    /// Collections and `config.json`.
    pub data: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Share of a subtitle file made of known words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCoverage {
    pub path: PathBuf,
    /// Characters of unknown words.
    pub red: usize,
    pub total: usize,
}

impl FileCoverage {
    pub fn percent_known(&self) -> f64 {
        100.0 - 100.0 * self.red as f64 / self.total.max(1) as f64
    }
}

impl fmt::Display for FileCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3.0}% {}", self.percent_known(), self.path.display())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub cards: usize,
    pub marked: usize,
    pub trimmed: usize,
    pub queued: usize,
    pub pending: usize,
    pub known: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Text the command produced, one entry per output line.
    pub output: Vec<String>,
    pub coverage: Vec<FileCoverage>,
    pub kanji: Option<KanjiReport>,
    pub stats: Option<Stats>,
    pub paths: Vec<PathBuf>,
    pub config: Option<FuriConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: Vec<String>) -> Self {
        self.output = output;
        self
    }

    pub fn with_coverage(mut self, coverage: Vec<FileCoverage>) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_kanji(mut self, report: KanjiReport) -> Self {
        self.kanji = Some(report);
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: FuriConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_summary_format() {
        let coverage = |red, total| FileCoverage {
            path: PathBuf::from("ep01.txt"),
            red,
            total,
        };
        assert_eq!(coverage(0, 0).to_string(), "100% ep01.txt");
        assert_eq!(coverage(1, 4).to_string(), " 75% ep01.txt");
        assert_eq!(coverage(4, 4).to_string(), "  0% ep01.txt");
    }
}
