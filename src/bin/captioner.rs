use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use captioner::{
    AnimationSource, CaptionConfig, CompositeMode, Compositor, FontMetrics, normalize_caption,
    wrap_text,
};

#[derive(Parser, Debug)]
#[command(name = "captioner", version)]
struct Cli {
    /// Maximum level of diagnostics written to stderr.
    #[arg(long, global = true, default_value_t = tracing::Level::INFO)]
    log_level: tracing::Level,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Burn a caption into every frame of a GIF.
    Render(RenderArgs),
    /// Print how a caption wraps at a given width.
    Wrap(WrapArgs),
}

#[derive(Args, Debug)]
struct FontArgs {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// TrueType/OpenType font file.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font em size in pixels.
    #[arg(long)]
    size: Option<f32>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    font: FontArgs,

    /// Source animation (GIF).
    #[arg(long)]
    source: Option<PathBuf>,

    /// Caption text. Without it the source is copied unchanged.
    #[arg(long)]
    text: Option<String>,

    /// Upper-case the caption before rendering.
    #[arg(long)]
    upper: bool,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct WrapArgs {
    #[command(flatten)]
    font: FontArgs,

    /// Maximum line width in pixels.
    #[arg(long)]
    width: u32,

    /// Text to wrap.
    #[arg(long)]
    text: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Wrap(args) => cmd_wrap(args),
    }
}

fn load_config(args: &FontArgs, source: Option<PathBuf>) -> anyhow::Result<CaptionConfig> {
    let mut cfg = match &args.config {
        Some(path) => CaptionConfig::from_json_file(path)?,
        None => CaptionConfig::default(),
    };
    if let Some(font) = &args.font {
        cfg.font_path = Some(font.clone());
    }
    if let Some(size) = args.size {
        cfg.font_size_px = size;
    }
    if let Some(source) = source {
        cfg.source_path = Some(source);
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.font, args.source)?;
    let source = AnimationSource::file(cfg.require_source_path()?);
    let caption = args
        .text
        .map(|t| if args.upper { normalize_caption(&t) } else { t });

    let bytes = source.load()?;
    let out = match CompositeMode::for_caption(caption.as_deref()) {
        CompositeMode::PassThrough => bytes,
        CompositeMode::Captioned => {
            let font = FontMetrics::load(cfg.require_font_path()?, cfg.font_size_px)?;
            Compositor::from_font(font, cfg.style()).composite(&bytes, caption.as_deref())?
        }
    };

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, out.as_bytes())
        .with_context(|| format!("write gif '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_wrap(args: WrapArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.font, None)?;
    let font = FontMetrics::load(cfg.require_font_path()?, cfg.font_size_px)?;
    for line in wrap_text(&args.text, &font, args.width) {
        println!("{line}");
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
