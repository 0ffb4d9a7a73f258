use std::path::{Path, PathBuf};

use adforge::{
    ComposeRequest, ComposerOpts, CopyBrief, CopyConfig, ExpectedRegion,
    FixedPalette, PaletteSource as _, SizePreset, StaticCopy, Template, TextEngine, Typeface,
};
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "adforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every template at every size preset (18 PNGs).
    Generate(GenerateArgs),
    /// Render one template at one size preset.
    Render(RenderArgs),
    /// Print layout suggestions for an image as JSON.
    Suggest(SuggestArgs),
    /// Score a finished creative against a JSON list of expected regions.
    Score(ScoreArgs),
    /// Show which font text will be drawn with.
    Fonts(FontsArgs),
}

#[derive(Parser, Debug)]
struct CopyArgs {
    /// Headline text.
    #[arg(long)]
    tagline: Option<String>,

    /// Offer text.
    #[arg(long)]
    offer: Option<String>,

    /// File holding a raw copy-generator reply; fills tagline and offer when not given.
    #[arg(long)]
    copy_response: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Product cutout (PNG with alpha).
    cutout: PathBuf,

    #[command(flatten)]
    copy: CopyArgs,

    /// Brand palette as `#RRGGBB`, most dominant first. Repeatable.
    #[arg(long = "color")]
    colors: Vec<String>,

    /// JSON file with composer options. Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Outline font file (TTF/OTF).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Skip the system font lookup.
    #[arg(long, default_value_t = false)]
    no_system_fonts: bool,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Render jobs one after another.
    #[arg(long, default_value_t = false)]
    sequential: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Product cutout (PNG with alpha).
    cutout: PathBuf,

    /// Template tag: clean, split, hero, gradient, neon or diagonal.
    #[arg(long)]
    template: Template,

    /// Size preset: square, portrait or landscape.
    #[arg(long, default_value = "square")]
    size: SizePreset,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    copy: CopyArgs,

    /// Brand color as `#RRGGBB`.
    #[arg(long, default_value = "#ff0000")]
    color: String,

    /// Outline font file (TTF/OTF).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Skip the system font lookup.
    #[arg(long, default_value_t = false)]
    no_system_fonts: bool,
}

#[derive(Parser, Debug)]
struct SuggestArgs {
    /// Product image.
    image: PathBuf,

    /// Brand palette as `#RRGGBB`. Repeatable.
    #[arg(long = "color")]
    colors: Vec<String>,
}

#[derive(Parser, Debug)]
struct ScoreArgs {
    /// Finished creative.
    image: PathBuf,

    /// JSON array of `{"bbox": [x, y, w, h], "color": "#rrggbb"}`.
    #[arg(long)]
    regions: PathBuf,
}

#[derive(Parser, Debug)]
struct FontsArgs {
    /// Outline font file (TTF/OTF).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Skip the system font lookup.
    #[arg(long, default_value_t = false)]
    no_system_fonts: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Render(args) => cmd_render(args),
        Command::Suggest(args) => cmd_suggest(args),
        Command::Score(args) => cmd_score(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

/// Tagline and offer from flags, falling back to a parsed copy reply, then to the defaults.
fn resolve_copy(args: &CopyArgs) -> anyhow::Result<(String, String)> {
    let parsed = match &args.copy_response {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("read copy response '{}'", path.display()))?;
            let generator = StaticCopy(raw);
            Some(adforge::generate_copy(
                &generator,
                &CopyBrief::default(),
                &CopyConfig::default(),
            ))
        }
        None => None,
    };
    let tagline = args
        .tagline
        .clone()
        .or_else(|| parsed.as_ref().map(|c| c.tagline.clone()))
        .unwrap_or_else(|| "Amazing Deal".to_string());
    let offer = args
        .offer
        .clone()
        .or_else(|| parsed.as_ref().map(|c| c.offer_text.clone()))
        .unwrap_or_else(|| "Limited Offer".to_string());
    Ok((tagline, offer))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut opts = match &args.config {
        Some(path) => ComposerOpts::from_json_file(path)?,
        None => ComposerOpts::default(),
    };
    if let Some(out_dir) = args.out_dir {
        opts = opts.with_out_dir(out_dir);
    }
    if args.font.is_some() {
        opts = opts.with_font_path(args.font);
    }
    if args.no_system_fonts {
        opts = opts.with_system_fonts(false);
    }
    if args.threads.is_some() {
        opts = opts.with_threads(args.threads);
    }
    if args.sequential {
        opts = opts.with_parallel(false);
    }

    let (tagline, offer) = resolve_copy(&args.copy)?;
    let colors = FixedPalette::from_hex(&args.colors).palette(&args.cutout)?;
    let report = adforge::generate_all(&args.cutout, &tagline, &offer, &colors, &opts)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    if !report.is_complete() {
        anyhow::bail!(
            "{} of {} render jobs failed",
            report.failures.len(),
            report.failures.len() + report.jobs.len()
        );
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (tagline, offer) = resolve_copy(&args.copy)?;
    let cutout = adforge::load_cutout(&args.cutout)?;
    let typeface = Typeface::resolve(args.font.as_deref(), !args.no_system_fonts);
    let mut engine = TextEngine::new(&typeface);
    let request = ComposeRequest {
        cutout: &cutout,
        tagline: &tagline,
        offer: &offer,
        brand: adforge::Rgb::from_hex_or_gray(&args.color),
        size: args.size.size(),
        sizing: adforge::FontSizing::default(),
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let report = args.template.render_with(&mut engine, &request, &args.out)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let (w, h) = image::image_dimensions(&args.image)
        .with_context(|| format!("read image '{}'", args.image.display()))?;
    let colors = FixedPalette::from_hex(&args.colors).palette(&args.image)?;
    let suggestions = adforge::suggest_layout(adforge::aspect_ratio(w, h), &colors);
    println!("{}", serde_json::to_string_pretty(&suggestions)?);
    Ok(())
}

fn cmd_score(args: ScoreArgs) -> anyhow::Result<()> {
    let regions = read_regions(&args.regions)?;
    let score = adforge::score_file(&args.image, &regions);
    println!("{score:.2}");
    Ok(())
}

fn read_regions(path: &Path) -> anyhow::Result<Vec<ExpectedRegion>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read regions '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse regions '{}'", path.display()))
}

fn cmd_fonts(args: FontsArgs) -> anyhow::Result<()> {
    let typeface = Typeface::resolve(args.font.as_deref(), !args.no_system_fonts);
    eprintln!("text font diagnostics:");
    eprintln!("  family:      {}", typeface.family());
    eprintln!("  source:      {}", serde_json::to_string(typeface.source())?);
    match typeface.font_bytes() {
        Some(bytes) => eprintln!("  sha256:      {}", sha256_hex(bytes)),
        None => eprintln!("  sha256:      (builtin bitmap face)"),
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
