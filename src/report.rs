//! Per-project outcomes and the run summary.

use flptime_probe::{DecodeOverflow, Minutes, NotFoundReason, ProbeError};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// What happened to one project file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Time was decoded.
    Logged { minutes: u32 },
    /// The marker record was missing or unusable.
    RecordNotFound { reason: NotFoundReason },
    /// The payload decoded outside the supported range.
    DecodeOverflow { hex: String },
    /// The file could not be opened or read.
    Unreadable { message: String },
}

impl Outcome {
    /// Minutes this outcome adds to the total. Failures add nothing.
    pub fn minutes(&self) -> u32 {
        match self {
            Outcome::Logged { minutes } => *minutes,
            _ => 0,
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Logged { .. })
    }
}

impl From<Result<u32, ProbeError>> for Outcome {
    fn from(result: Result<u32, ProbeError>) -> Self {
        match result {
            Ok(minutes) => Outcome::Logged { minutes },
            Err(ProbeError::RecordNotFound(e)) => Outcome::RecordNotFound { reason: e.reason },
            Err(ProbeError::DecodeOverflow(e)) => Outcome::DecodeOverflow { hex: e.hex },
            Err(ProbeError::Io(e)) => Outcome::Unreadable {
                message: e.to_string(),
            },
        }
    }
}

/// Result of probing a single project file.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub path: PathBuf,
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl ProjectReport {
    pub fn new(path: &Path, outcome: Outcome) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path: path.to_path_buf(),
            name,
            outcome,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.outcome.minutes()
    }

    /// Console lines for this project, error line first when there is one.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        match &self.outcome {
            Outcome::Logged { .. } => {}
            Outcome::RecordNotFound { reason } => {
                lines.push(format!("Error reading data in {}. {}", self.name, reason));
            }
            Outcome::Unreadable { message } => {
                lines.push(format!("Error reading data in {}. {}", self.name, message));
            }
            Outcome::DecodeOverflow { hex } => {
                let err = DecodeOverflow { hex: hex.clone() };
                lines.push(format!("Error converting bytes in {}. {}", self.name, err));
            }
        }
        lines.push(format!(
            "Logged {} on project {}.",
            Minutes::from(self.minutes()),
            self.name
        ));
        lines
    }
}

/// Everything found under one scan root.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub root: PathBuf,
    pub projects: Vec<ProjectReport>,
    pub total_minutes: Minutes,
}

impl ScanSummary {
    pub fn new(root: PathBuf, projects: Vec<ProjectReport>) -> Self {
        let total_minutes = projects.iter().map(|p| Minutes::from(p.minutes())).sum();
        Self {
            root,
            projects,
            total_minutes,
        }
    }

    /// Number of projects that contributed nothing because of an error.
    pub fn failed(&self) -> usize {
        self.projects
            .iter()
            .filter(|p| p.outcome.is_failure())
            .count()
    }

    /// Text report in the classic console wording.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for project in &self.projects {
            for line in project.lines() {
                let _ = writeln!(out, "{}", line);
            }
        }
        let _ = writeln!(out, "{} spent on all projects.", self.total_minutes);
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
