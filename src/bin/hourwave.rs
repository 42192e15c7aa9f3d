use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hourwave", version, about = hourwave::TITLE)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Frames(FramesArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Print the effective configuration as JSON.
    Config(SketchArgs),
}

#[derive(Args, Debug)]
struct SketchArgs {
    /// Sketch configuration JSON. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Override canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Noise seed. Derived from the clock when neither this nor the config sets one.
    #[arg(long)]
    seed: Option<u32>,

    /// Freeze the time of day at this hour (0..24) instead of reading the local clock.
    #[arg(long)]
    hour: Option<f64>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    sketch: SketchArgs,

    /// Elapsed animation time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    sketch: SketchArgs,

    /// First frame index (0-based).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Output directory for `frame_NNNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    sketch: SketchArgs,

    /// Duration in seconds.
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing an existing output file.
    #[arg(long)]
    no_overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &SketchArgs) -> anyhow::Result<hourwave::SketchConfig> {
    let mut cfg = match &args.config {
        Some(path) => hourwave::SketchConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => hourwave::SketchConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.canvas.width = w;
    }
    if let Some(h) = args.height {
        cfg.canvas.height = h;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    cfg.validate()?;
    Ok(cfg)
}

fn make_session(args: &SketchArgs) -> anyhow::Result<hourwave::AnimationSession> {
    let mut cfg = load_config(args)?;
    let seed = *cfg.seed.get_or_insert_with(hourwave::derive_seed);
    tracing::info!(seed, "noise seed");

    let renderer = hourwave::FrameRenderer::new(cfg)?;
    let renderer = match args.hour {
        Some(h) => renderer.with_clock(hourwave::FixedHour::new(h)?),
        None => renderer,
    };
    Ok(hourwave::AnimationSession::new(renderer))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let session = make_session(&args.sketch)?;
    let ctx = hourwave::FrameContext::new(session.canvas(), args.time)?;
    let frame = session.renderer().render_rgba(ctx)?;
    hourwave::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let session = make_session(&args.sketch)?;
    let end = args
        .start
        .checked_add(args.frames)
        .context("frame range overflows u64")?;
    let range = hourwave::FrameRange::new(hourwave::FrameIndex(args.start), hourwave::FrameIndex(end))?;
    let mut sink = hourwave::PngSequenceSink::new(&args.out_dir);
    let stats = session.render_range(range, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if !(args.seconds.is_finite() && args.seconds > 0.0) {
        anyhow::bail!("--seconds must be > 0, got {}", args.seconds);
    }
    let session = make_session(&args.sketch)?;
    let frames = session.fps().secs_to_frames_floor(args.seconds).max(1);
    let range = hourwave::FrameRange::new(hourwave::FrameIndex(0), hourwave::FrameIndex(frames))?;

    let mut opts = hourwave::FfmpegSinkOpts::new(&args.out);
    opts.overwrite = !args.no_overwrite;
    opts.bg_rgba = session.renderer().config().background;
    let mut sink = hourwave::FfmpegSink::new(opts);
    session.render_range(range, &mut sink)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_config(args: SketchArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    println!("{}", cfg.to_json_pretty()?);
    Ok(())
}
