use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cardrive", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of a drive script as a PNG.
    Frame(FrameArgs),
    /// Render a whole drive script as an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Replay a drive script and print what happened to each tap as JSON.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input drive script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Draw the travel path regardless of the script's `paint_path`.
    #[arg(long)]
    paint_path: bool,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input drive script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Draw the travel path regardless of the script's `paint_path`.
    #[arg(long)]
    paint_path: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input drive script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Replay step in milliseconds.
    #[arg(long, default_value_t = 16)]
    step_ms: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CARDRIVE_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_session(
    in_path: &std::path::Path,
    paint_path: bool,
) -> anyhow::Result<cardrive::DriveSession> {
    let mut script = cardrive::DriveScript::from_path(in_path)?;
    if paint_path {
        script.config.paint_path = true;
    }
    let base = in_path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let sprite = script
        .load_sprite(base)
        .with_context(|| format!("load sprite for '{}'", in_path.display()))?;
    Ok(cardrive::DriveSession::new(script, sprite)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = load_session(&args.in_path, args.paint_path)?;
    let frame = session.render_frame(cardrive::FrameIndex(args.frame))?;
    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if !cardrive::is_ffmpeg_on_path() {
        anyhow::bail!("`ffmpeg` was not found on PATH");
    }
    let mut session = load_session(&args.in_path, args.paint_path)?;
    cardrive::ensure_parent_dir(&args.out)?;

    let mut opts = cardrive::FfmpegSinkOpts::new(&args.out);
    opts.bg_rgba = session.script().background;
    let mut sink = cardrive::FfmpegSink::new(opts);
    let stats = session.render_to(&mut sink)?;

    eprintln!(
        "wrote {} ({} frames, {} taps taken, {} dropped)",
        args.out.display(),
        stats.frames_rendered,
        stats.taps_consumed,
        stats.taps_dropped
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let script = cardrive::DriveScript::from_path(&args.in_path)?;
    let mut replay = cardrive::Replay::new(&script)?;
    replay.run_to_end(std::time::Duration::from_millis(args.step_ms));

    let report = serde_json::json!({
        "taps": replay.outcomes(),
        "final": {
            "position": replay.view().position(),
            "heading": replay.view().heading(),
            "state": replay.view().state(),
        },
    });
    let text = serde_json::to_string_pretty(&report).context("serialize inspect report")?;
    println!("{text}");
    Ok(())
}
