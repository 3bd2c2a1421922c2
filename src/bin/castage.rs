use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "castage", version)]
struct Cli {
    /// Emit tracing output on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the timeline ruler layout as JSON.
    Ticks(TicksArgs),
    /// Simulate a state transition between two layer property sets, one JSON value per frame.
    Transition(TransitionArgs),
}

#[derive(Parser, Debug)]
struct TicksArgs {
    /// Seconds visible in the viewport (zoom level).
    #[arg(long, default_value_t = castage::INITIAL_VIEW_SECONDS)]
    view_seconds: f64,

    /// Viewport width in pixels.
    #[arg(long)]
    viewport_px: f64,

    /// Horizontal scroll offset in pixels.
    #[arg(long, default_value_t = 0.0)]
    scroll_px: f64,

    /// Only emit ticks inside the scrolled viewport.
    #[arg(long)]
    visible: bool,
}

#[derive(Parser, Debug)]
struct TransitionArgs {
    /// Layer properties JSON in the base state.
    #[arg(long)]
    from: PathBuf,

    /// Layer properties JSON in the target state.
    #[arg(long)]
    to: PathBuf,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Transition length in milliseconds.
    #[arg(long, default_value_t = castage::TRANSITION_DURATION_MS)]
    duration_ms: f64,
}

/// Frames simulated before giving up on a transition that never settles.
const MAX_FRAMES: u32 = 100_000;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }
    match cli.cmd {
        Command::Ticks(args) => cmd_ticks(args),
        Command::Transition(args) => cmd_transition(args),
    }
}

fn cmd_ticks(args: TicksArgs) -> anyhow::Result<()> {
    let mut map = castage::TimeMap::new(args.viewport_px);
    map.set_view_seconds(args.view_seconds);
    map.scroll_to(args.scroll_px);

    let layout = map.layout(args.visible);
    let out = serde_json::to_string_pretty(&layout).context("serialize tick layout")?;
    println!("{out}");
    Ok(())
}

fn read_props_json(path: &Path) -> anyhow::Result<castage::LayerProps> {
    let f = File::open(path).with_context(|| format!("open layer props '{}'", path.display()))?;
    let r = BufReader::new(f);
    let props: castage::LayerProps = serde_json::from_reader(r)
        .with_context(|| format!("parse layer props '{}'", path.display()))?;
    Ok(props)
}

fn cmd_transition(args: TransitionArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be finite and > 0, got {}", args.fps);
    }
    let from = read_props_json(&args.from)?;
    let to = read_props_json(&args.to)?;

    let opts = castage::TransitionOpts {
        duration_ms: args.duration_ms,
    };
    let frame_ms = 1000.0 / args.fps;
    let queue = castage::FrameQueue::new();
    let mut ctrl = castage::TransitionController::new(
        castage::LayerId::new("layer"),
        &from,
        castage::StateKey::BASE,
        opts,
        queue.clone(),
    );

    let mut now = castage::Millis(0.0);
    ctrl.observe(&to, "Target", now);
    print_value(0, ctrl.value())?;

    let mut frame = 0;
    while ctrl.is_transitioning() {
        frame += 1;
        if frame > MAX_FRAMES {
            anyhow::bail!("transition did not settle within {MAX_FRAMES} frames");
        }
        now = now.offset(frame_ms);
        for handle in queue.take_due() {
            ctrl.on_frame(handle, now);
        }
        print_value(frame, ctrl.value())?;
    }
    ctrl.teardown();
    Ok(())
}

fn print_value(frame: u32, value: &castage::TransitionValue) -> anyhow::Result<()> {
    let line = serde_json::to_string(&serde_json::json!({ "frame": frame, "value": value }))
        .context("serialize transition value")?;
    println!("{line}");
    Ok(())
}
