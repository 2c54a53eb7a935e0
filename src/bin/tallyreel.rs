use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tallyreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single composite frame as a PNG.
    Frame(FrameArgs),
    /// Render a counter MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Run a reel described by a JSON spec file.
    Job(JobArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Directory holding num_XXXX.png digit glyphs.
    #[arg(long)]
    assets: PathBuf,

    /// Frame index (1-based).
    #[arg(long)]
    index: u64,

    /// Digit-encoding scheme.
    #[arg(long, value_enum, default_value_t = SchemeChoice::Uniform)]
    scheme: SchemeChoice,

    /// Digit positions; defaults to the estimator's result for --index.
    #[arg(long)]
    width: Option<usize>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Directory holding num_XXXX.png digit glyphs.
    #[arg(long)]
    assets: PathBuf,

    /// Frame rate in frames per second.
    #[arg(long)]
    fps: u32,

    /// Duration in seconds.
    #[arg(long)]
    duration: f64,

    /// Digit-encoding scheme.
    #[arg(long, value_enum, default_value_t = SchemeChoice::Uniform)]
    scheme: SchemeChoice,

    /// Scratch directory for composite frames.
    #[arg(long, default_value = "composite_frames")]
    frames_dir: PathBuf,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct JobArgs {
    /// Input reel spec JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemeChoice {
    Uniform,
    Saturated,
}

impl From<SchemeChoice> for tallyreel::NumeralScheme {
    fn from(choice: SchemeChoice) -> Self {
        match choice {
            SchemeChoice::Uniform => Self::Uniform,
            SchemeChoice::Saturated => Self::Saturated,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Job(args) => cmd_job(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scheme = tallyreel::NumeralScheme::from(args.scheme);
    let width = args.width.unwrap_or_else(|| scheme.width(args.index));

    let mut store = tallyreel::DigitAssetStore::open(&args.assets);
    let digits = scheme.encode(args.index, width)?;
    let glyphs = digits
        .iter()
        .map(|&d| store.get(d))
        .collect::<tallyreel::TallyResult<Vec<_>>>()?;
    let frame = tallyreel::compose_row(&glyphs)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.rgba8,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let spec = tallyreel::ReelSpec {
        fps: args.fps,
        duration_secs: args.duration,
        scheme: args.scheme.into(),
        assets_dir: args.assets,
        frames_dir: args.frames_dir,
        out_path: args.out,
        progress_every: 100,
    };

    let stats = tallyreel::render_reel(&spec)?;
    eprintln!(
        "wrote {} ({} frames, {} digit positions)",
        spec.out_path.display(),
        stats.frames_written,
        stats.fixed_width
    );
    Ok(())
}

fn cmd_job(args: JobArgs) -> anyhow::Result<()> {
    let spec = read_spec_json(&args.in_path)?;
    let stats = tallyreel::render_reel(&spec)?;
    eprintln!(
        "wrote {} ({} frames, {} digit positions)",
        spec.out_path.display(),
        stats.frames_written,
        stats.fixed_width
    );
    Ok(())
}

fn read_spec_json(path: &Path) -> anyhow::Result<tallyreel::ReelSpec> {
    let f = File::open(path).with_context(|| format!("open reel spec '{}'", path.display()))?;
    let r = BufReader::new(f);
    let spec: tallyreel::ReelSpec =
        serde_json::from_reader(r).with_context(|| "parse reel spec JSON")?;
    Ok(spec)
}
