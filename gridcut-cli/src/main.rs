use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use gridcut::{GridBuilder, ProjectDocument, SlotSource};

/// Literal argument token that marks a fill slot instead of a video.
const FILL_TOKEN: &str = "FILL";

#[derive(Parser, Debug)]
#[command(
    name = "gridcut",
    version,
    about = "Arrange source videos into a multi-camera grid inside an MLT project"
)]
struct Cli {
    /// Input MLT project XML.
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Output MLT project XML.
    #[arg(short = 'o', long = "output")]
    output: PathBuf,

    /// Number of grid columns.
    #[arg(short = 'c', long = "columns")]
    columns: u32,

    /// Blank lead-in inserted before every clip.
    #[arg(short = 'b', long = "blank", default_value = "00:0:00.000")]
    blank: String,

    /// Log placement detail to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Source videos in grid order (left-to-right, top-to-bottom); the
    /// literal token `FILL` widens the next video by one cell.
    #[arg(required = true)]
    videos: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let project = ProjectDocument::from_path(&cli.input)
        .with_context(|| format!("read mlt '{}'", cli.input.display()))?;

    let count = u32::try_from(cli.videos.len()).context("too many videos")?;
    let mut builder = GridBuilder::new(project, cli.columns, count, cli.blank.as_str())?;
    for video in &cli.videos {
        let source = if video == FILL_TOKEN {
            SlotSource::Fill
        } else {
            SlotSource::Video(video)
        };
        builder.add(source)?;
    }

    builder
        .write(&cli.output)
        .with_context(|| format!("write mlt '{}'", cli.output.display()))?;

    eprintln!("wrote {}", cli.output.display());
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
