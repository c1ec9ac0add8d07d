//! Project scanner.
//!
//! Walks a directory tree, picks out project files by extension and runs the
//! probe pipeline on each of them. A failing file never stops the scan; it is
//! recorded in its [`ProjectReport`] and contributes zero minutes.

use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::report::{Outcome, ProjectReport, ScanSummary};

/// Conditions that end a scan before any project is probed.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Could not find the specified directory. {0:?} does not exist or is not a directory.")]
    DirectoryNotFound(PathBuf),

    #[error(
        "Didn't find any project files in {0:?}. Run from the folder containing your projects \
         or provide the directory you want to scan."
    )]
    NoProjects(PathBuf),
}

/// Check if a path has one of the given extensions (case-insensitive).
pub fn is_project_file(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Find all project files below `root`, sorted by path.
pub fn discover(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ScanError::DirectoryNotFound(root.to_path_buf()).into());
    }

    info!("Scanning directory: {:?}", root);

    let mut walker = WalkDir::new(root).follow_links(config.follow_links);
    if config.max_depth > 0 {
        walker = walker.max_depth(config.max_depth);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_project_file(path, &config.extensions))
        .collect();

    files.sort();
    debug!("Found {} project files", files.len());

    if files.is_empty() {
        return Err(ScanError::NoProjects(root.to_path_buf()).into());
    }

    Ok(files)
}

/// Probe one project file. Every failure is folded into the report.
pub fn probe_project(path: &Path) -> ProjectReport {
    let outcome = Outcome::from(flptime_probe::probe_file(path));
    match &outcome {
        Outcome::Logged { minutes } => debug!("{:?}: {} minutes", path, minutes),
        failure => warn!("{:?}: {:?}", path, failure),
    }
    ProjectReport::new(path, outcome)
}

/// Probe a list of files, keeping their order.
pub fn probe_all(paths: &[PathBuf], parallel: bool) -> Vec<ProjectReport> {
    if parallel {
        paths.par_iter().map(|p| probe_project(p)).collect()
    } else {
        paths.iter().map(|p| probe_project(p)).collect()
    }
}

/// Discover and probe every project below `root`.
pub fn scan(root: &Path, config: &ScanConfig) -> Result<ScanSummary> {
    let files = discover(root, config)?;
    let projects = probe_all(&files, config.parallel);
    let summary = ScanSummary::new(root.to_path_buf(), projects);

    info!(
        "Scanned {} projects ({} failed), total {}",
        summary.projects.len(),
        summary.failed(),
        summary.total_minutes
    );
    Ok(summary)
}
