use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const BG_RGBA: [u8; 4] = [10, 12, 20, 255];

#[derive(Parser, Debug)]
#[command(name = "aurora", version)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

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
    /// Run the page without drawing and print the final document as JSON.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct Inputs {
    /// Config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page JSON; the bundled demo page when omitted.
    #[arg(long)]
    page: Option<PathBuf>,

    /// Event script JSON; load events on frame 0 when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Override the config viewport, e.g. `1920x1080`.
    #[arg(long, value_parser = parse_size)]
    size: Option<aurora::Viewport>,

    /// Override the grain seed.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// First frame written.
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Number of frames written.
    #[arg(long)]
    count: u64,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Duration in seconds.
    #[arg(long, default_value_t = 5.0)]
    seconds: f64,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Number of frames to run.
    #[arg(long, default_value_t = 60)]
    frames: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_size(s: &str) -> Result<aurora::Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width: {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height: {e}"))?;
    Ok(aurora::Viewport::new(w, h))
}

struct Loaded {
    config: aurora::AuroraConfig,
    page: aurora::PageSpec,
    script: aurora::EventScript,
}

fn load(inputs: &Inputs) -> anyhow::Result<Loaded> {
    let mut config = match &inputs.config {
        Some(p) => aurora::AuroraConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => aurora::AuroraConfig::default(),
    };
    config.apply_env_overrides();
    if let Some(size) = inputs.size {
        config.viewport = size;
    }
    if let Some(seed) = inputs.seed {
        config.seed = seed;
    }
    config.validate().context("validate config")?;

    let page = match &inputs.page {
        Some(p) => aurora::PageSpec::from_path(p)
            .with_context(|| format!("load page '{}'", p.display()))?,
        None => aurora::PageSpec::demo(),
    };
    let script = match &inputs.script {
        Some(p) => aurora::EventScript::from_path(p)
            .with_context(|| format!("load script '{}'", p.display()))?,
        None => aurora::EventScript::page_lifecycle(),
    };
    Ok(Loaded {
        config,
        page,
        script,
    })
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let l = load(&args.inputs)?;
    let frame = aurora::render_frame(
        &l.config,
        &l.page,
        aurora::FrameIndex(args.frame),
        &l.script,
    )?;
    aurora::save_png(&args.out, &frame, BG_RGBA)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let l = load(&args.inputs)?;
    let end = args
        .start
        .checked_add(args.count)
        .ok_or_else(|| aurora::AuroraError::validation("--start + --count overflows u64"))?;
    let range = aurora::FrameRange::new(aurora::FrameIndex(args.start), aurora::FrameIndex(end))?;
    let mut sink = aurora::PngSequenceSink::new(&args.out_dir, BG_RGBA);
    let stats = aurora::render_range(&l.config, &l.page, range, &l.script, &mut sink)?;
    eprintln!(
        "wrote {} frames to {}",
        stats.frames_written,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let l = load(&args.inputs)?;
    if !args.seconds.is_finite() || args.seconds <= 0.0 {
        anyhow::bail!("--seconds must be > 0");
    }
    let frames = l.config.fps.secs_to_frames_floor(args.seconds).max(1);
    let range = aurora::FrameRange::new(aurora::FrameIndex(0), aurora::FrameIndex(frames))?;
    let mut sink = aurora::FfmpegSink::new(&args.out, BG_RGBA);
    aurora::render_range(&l.config, &l.page, range, &l.script, &mut sink)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let l = load(&args.inputs)?;
    let doc = aurora::simulate(&l.config, &l.page, args.frames, &l.script)?;
    let json =
        serde_json::to_string_pretty(&doc.snapshot()).context("serialize document snapshot")?;
    println!("{json}");
    Ok(())
}
