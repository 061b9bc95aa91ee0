use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "logoreveal", version)]
struct Cli {
    /// Log debug events (phase transitions, resizes).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the animation up to a point in time and write the last frame as a PNG.
    Frame(FrameArgs),
    /// Write a numbered PNG sequence of the animation.
    Render(RenderArgs),
    /// Write the sampled target points as JSON.
    Points(PointsArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Configuration JSON. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Surface width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 450)]
    height: u32,

    /// Seed for particle creation and noise.
    #[arg(long)]
    seed: Option<u64>,

    /// Logo text (overrides the configuration).
    #[arg(long)]
    text: Option<String>,

    /// Extra font file made available to text layout.
    #[arg(long)]
    font_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Animation time in milliseconds.
    #[arg(long, default_value_t = 7100.0)]
    at_ms: f64,

    /// Frames per second of the simulated host loop.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Length of the sequence in milliseconds.
    #[arg(long, default_value_t = 9000.0)]
    duration_ms: f64,

    /// Frames per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,
}

#[derive(Parser, Debug)]
struct PointsArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Points(args) => cmd_points(args),
    }
}

fn load_config(common: &CommonArgs) -> anyhow::Result<logoreveal::LogoConfig> {
    let mut config = match &common.config {
        Some(path) => logoreveal::LogoConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => logoreveal::LogoConfig::default(),
    };
    if let Some(seed) = common.seed {
        config.seed = Some(seed);
    }
    if let Some(text) = &common.text {
        config.text = text.clone();
    }
    config.validate()?;
    Ok(config)
}

fn make_rasterizer(common: &CommonArgs) -> anyhow::Result<logoreveal::SvgTextRasterizer> {
    let mut rasterizer = logoreveal::SvgTextRasterizer::new();
    if let Some(path) = &common.font_file {
        rasterizer.load_font_file(path)?;
    }
    if rasterizer.face_count() == 0 {
        tracing::warn!("no fonts available; the logo will have no target points");
    }
    Ok(rasterizer)
}

fn make_host(common: &CommonArgs, fps: f64) -> anyhow::Result<logoreveal::HeadlessHost> {
    let config = load_config(common)?;
    let noise_seed = config.seed.map(|s| s as u32).unwrap_or(0);
    let controller = logoreveal::AnimationController::new(
        config,
        Box::new(logoreveal::PerlinNoise::new(noise_seed)),
        Box::new(make_rasterizer(common)?),
    )?;
    let size = logoreveal::SurfaceSize::new(common.width, common.height);
    let opts = logoreveal::HostOpts {
        fps,
        ..logoreveal::HostOpts::default()
    };
    Ok(logoreveal::HeadlessHost::new(controller, size, opts)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut host = make_host(&args.common, args.fps)?;
    let frame = host.render_until(args.at_ms)?;
    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} (phase {:?})",
        args.out.display(),
        host.controller().phase()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if !args.duration_ms.is_finite() || args.duration_ms < 0.0 {
        anyhow::bail!("--duration-ms must be >= 0");
    }
    let mut host = make_host(&args.common, args.fps)?;
    let count = (args.duration_ms * args.fps / 1000.0).floor() as u64 + 1;
    let mut sink = logoreveal::PngSequenceSink::new(&args.out_dir, "frame");
    let stats = host
        .render_frames(count, &mut sink)
        .with_context(|| format!("render into '{}'", args.out_dir.display()))?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_points(args: PointsArgs) -> anyhow::Result<()> {
    let config = load_config(&args.common)?;
    let mut rasterizer = make_rasterizer(&args.common)?;
    let size = logoreveal::SurfaceSize::new(args.common.width, args.common.height);
    let points = logoreveal::TextPointSampler::new(config.sample_gap).sample_text(
        &mut rasterizer,
        &config.text,
        size,
        &config.font,
    );
    write_json(&args.out, &points)?;

    eprintln!("wrote {} points to {}", points.len(), args.out.display());
    Ok(())
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), value)
        .with_context(|| format!("write json '{}'", path.display()))?;
    Ok(())
}
