use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rayon::prelude::*;
use serde::Serialize;
use serde::ser::SerializeMap as _;

use crate::assets::decode::{Cutout, load_cutout};
use crate::assets::fonts::{TextEngine, Typeface};
use crate::foundation::core::{Rgb, SizePreset};
use crate::foundation::error::{AdforgeError, AdforgeResult};
use crate::layout::fit::FontSizing;
use crate::pipeline::{ComposerOpts, build_thread_pool};
use crate::render::canvas::save_rgb_png;
use crate::templates::Template;
use crate::templates::driver::{ComposeRequest, Composition, LayoutReport};
use crate::validate::score_regions;

/// One (template, size) unit of work producing exactly one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderJob {
    /// Template to render.
    pub template: Template,
    /// Canvas preset.
    pub preset: SizePreset,
    /// Brand color for the whole batch.
    pub brand: Rgb,
    /// Destination file.
    pub output: PathBuf,
}

/// All 18 jobs of a batch, presets outermost, in output order.
pub fn plan_jobs(out_dir: &Path, brand: Rgb) -> Vec<RenderJob> {
    SizePreset::ALL
        .into_iter()
        .flat_map(|preset| {
            Template::ALL.into_iter().map(move |template| RenderJob {
                template,
                preset,
                brand,
                output: out_dir.join(template.file_name(preset)),
            })
        })
        .collect()
}

/// File names written for one size preset, keyed by template.
///
/// Serializes flat: `{"size": "square", "clean_template": "square_clean.png", ...}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeRecord {
    /// Preset the files were rendered at.
    pub size: SizePreset,
    /// `(template, file name)` for every job of this preset that succeeded, in template order.
    pub files: Vec<(Template, String)>,
}

impl SizeRecord {
    /// File name written for `template`, if that job succeeded.
    pub fn file(&self, template: Template) -> Option<&str> {
        self.files
            .iter()
            .find(|(t, _)| *t == template)
            .map(|(_, f)| f.as_str())
    }
}

impl Serialize for SizeRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.files.len() + 1))?;
        map.serialize_entry("size", self.size.name())?;
        for (template, file) in &self.files {
            map.serialize_entry(&format!("{}_template", template.tag()), file)?;
        }
        map.end()
    }
}

/// A job that produced its file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobOutcome {
    /// The job.
    pub job: RenderJob,
    /// Quality score of the written creative (0..=100).
    pub score: f64,
    /// Whether any text overflowed its box at the minimum size.
    pub overflowed: bool,
    /// Placement decisions.
    pub layout: LayoutReport,
}

/// A job that failed; its siblings still ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobFailure {
    /// The job.
    pub job: RenderJob,
    /// Error message.
    pub error: String,
}

/// Result of a whole batch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchReport {
    /// Brand color the batch was themed with.
    pub brand: Rgb,
    /// Font family used for all text.
    pub font_family: String,
    /// One record per size preset, in preset order.
    pub creatives: Vec<SizeRecord>,
    /// Paths of every file written, in job order.
    pub written: Vec<PathBuf>,
    /// Successful jobs in job order.
    pub jobs: Vec<JobOutcome>,
    /// Failed jobs in job order.
    pub failures: Vec<JobFailure>,
}

impl BatchReport {
    /// `true` when every job produced its file.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Successful jobs whose text overflowed.
    pub fn overflowed(&self) -> impl Iterator<Item = &JobOutcome> {
        self.jobs.iter().filter(|j| j.overflowed)
    }
}

struct Shared<'a> {
    typeface: &'a Typeface,
    cutout: &'a Cutout,
    tagline: &'a str,
    offer: &'a str,
    sizing: FontSizing,
}

/// Run `f`, returning the panic message instead of unwinding further.
fn catch_panic<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).map_err(|payload| {
        payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string())
    })
}

/// [`run_job`] with panics confined to the job.
fn run_isolated(
    engine: &mut TextEngine,
    shared: &Shared<'_>,
    job: &RenderJob,
) -> AdforgeResult<JobOutcome> {
    match catch_panic(|| run_job(engine, shared, job)) {
        Ok(result) => result,
        Err(msg) => {
            // Shaping state may be half-updated after an unwind.
            *engine = TextEngine::new(shared.typeface);
            Err(AdforgeError::render(format!("render job panicked: {msg}")))
        }
    }
}

fn run_job(engine: &mut TextEngine, shared: &Shared<'_>, job: &RenderJob) -> AdforgeResult<JobOutcome> {
    let request = ComposeRequest {
        cutout: shared.cutout,
        tagline: shared.tagline,
        offer: shared.offer,
        brand: job.brand,
        size: job.preset.size(),
        sizing: shared.sizing,
    };
    let Composition { canvas, report } = job.template.compose(engine, &request)?;
    let rgb = canvas.to_rgb_image()?;
    let score = score_regions(&rgb, &report.expected_regions());
    save_rgb_png(&rgb, &job.output)?;
    tracing::debug!(output = %job.output.display(), score, "wrote creative");

    Ok(JobOutcome {
        job: job.clone(),
        score,
        overflowed: report.overflowed(),
        layout: report,
    })
}

/// Render every template at every size preset for one cutout.
///
/// The brand color is the first of `colors`, or pure red when there are none. A cutout that
/// cannot be loaded fails the whole batch before any job runs; any other failure, panics
/// included, is confined to its job and listed in [`BatchReport::failures`].
#[tracing::instrument(skip(tagline, offer, colors, opts), fields(cutout = %cutout_path.display()))]
pub fn generate_all(
    cutout_path: &Path,
    tagline: &str,
    offer: &str,
    colors: &[Rgb],
    opts: &ComposerOpts,
) -> AdforgeResult<BatchReport> {
    opts.validate()?;
    let cutout = load_cutout(cutout_path)?;
    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("create output dir '{}'", opts.out_dir.display()))?;

    let brand = colors.first().copied().unwrap_or(Rgb::RED);
    let typeface = Typeface::resolve(opts.font_path.as_deref(), opts.system_fonts);
    let jobs = plan_jobs(&opts.out_dir, brand);
    let shared = Shared {
        typeface: &typeface,
        cutout: &cutout,
        tagline,
        offer,
        sizing: opts.sizing,
    };
    tracing::info!(
        jobs = jobs.len(),
        brand = %brand.to_hex(),
        font = typeface.family(),
        parallel = opts.parallel,
        "starting batch"
    );

    let results: Vec<AdforgeResult<JobOutcome>> = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            jobs.par_iter()
                .map_init(
                    || TextEngine::new(&typeface),
                    |engine, job| run_isolated(engine, &shared, job),
                )
                .collect()
        })
    } else {
        let mut engine = TextEngine::new(&typeface);
        jobs.iter()
            .map(|job| run_isolated(&mut engine, &shared, job))
            .collect()
    };

    let mut report = BatchReport {
        brand,
        font_family: typeface.family().to_string(),
        creatives: SizePreset::ALL
            .into_iter()
            .map(|size| SizeRecord {
                size,
                files: Vec::new(),
            })
            .collect(),
        written: Vec::new(),
        jobs: Vec::new(),
        failures: Vec::new(),
    };
    for (job, result) in jobs.into_iter().zip(results) {
        match result {
            Ok(outcome) => {
                if let Some(record) = report.creatives.iter_mut().find(|r| r.size == job.preset) {
                    record
                        .files
                        .push((job.template, job.template.file_name(job.preset)));
                }
                report.written.push(job.output.clone());
                report.jobs.push(outcome);
            }
            Err(e) => {
                tracing::error!(
                    template = job.template.tag(),
                    size = job.preset.name(),
                    error = %e,
                    "render job failed"
                );
                report.failures.push(JobFailure {
                    job,
                    error: e.to_string(),
                });
            }
        }
    }

    let overflowed = report.overflowed().count();
    if overflowed > 0 {
        tracing::warn!(overflowed, "some creatives have text clipped at minimum size");
    }
    tracing::info!(
        written = report.written.len(),
        failed = report.failures.len(),
        "batch finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
