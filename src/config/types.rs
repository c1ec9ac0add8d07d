use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// File extensions treated as projects, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Follow symbolic links while walking directories
    #[serde(default = "default_follow_links")]
    pub follow_links: bool,

    /// Maximum directory depth below the root (0 = unlimited)
    #[serde(default)]
    pub max_depth: usize,

    /// Probe files on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

fn default_extensions() -> Vec<String> {
    vec!["flp".to_string()]
}

fn default_follow_links() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            follow_links: default_follow_links(),
            max_depth: 0,
            parallel: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Print the summary as JSON instead of text
    #[serde(default)]
    pub json: bool,

    /// Wait for enter before exiting
    #[serde(default)]
    pub pause_on_exit: bool,
}
