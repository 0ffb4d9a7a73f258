pub(crate) mod batch;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{AdforgeError, AdforgeResult};
use crate::layout::fit::FontSizing;

/// Batch composition options.
///
/// Every field has a default, so a JSON config file only needs the fields it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerOpts {
    /// Directory the creatives are written to. Created if missing.
    pub out_dir: PathBuf,
    /// Outline font to use for all text.
    pub font_path: Option<PathBuf>,
    /// Look up a system sans-serif face when no font file is configured or usable.
    pub system_fonts: bool,
    /// Font-size search parameters.
    pub sizing: FontSizing,
    /// Render jobs on a worker pool instead of one after another.
    pub parallel: bool,
    /// Worker count override; `None` uses all cores.
    pub threads: Option<usize>,
}

impl Default for ComposerOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("creatives"),
            font_path: None,
            system_fonts: true,
            sizing: FontSizing::default(),
            parallel: true,
            threads: None,
        }
    }
}

impl ComposerOpts {
    /// Read options from a JSON file.
    pub fn from_json_file(path: &Path) -> AdforgeResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AdforgeError::asset(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reject settings that cannot run.
    pub fn validate(&self) -> AdforgeResult<()> {
        if self.threads == Some(0) {
            return Err(AdforgeError::validation(
                "composer option 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Set the output directory.
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Set the font file.
    pub fn with_font_path(mut self, font_path: Option<PathBuf>) -> Self {
        self.font_path = font_path;
        self
    }

    /// Enable or disable the system font lookup.
    pub fn with_system_fonts(mut self, system_fonts: bool) -> Self {
        self.system_fonts = system_fonts;
        self
    }

    /// Set the font-size search.
    pub fn with_sizing(mut self, sizing: FontSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Enable or disable the worker pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Override the worker count.
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }
}

fn build_thread_pool(threads: Option<usize>) -> AdforgeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(AdforgeError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("adforge-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| AdforgeError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/mod.rs"]
mod tests;
