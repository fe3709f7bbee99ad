use std::path::PathBuf;

use clap::Parser;
use git_testament::{git_testament, render_testament};

use crate::Direction;

git_testament!(TESTAMENT);

/// Converts between the SAM and BAM alignment formats.
#[derive(Parser)]
#[command(version = render_testament!(TESTAMENT))]
pub struct Cli {
    /// Output destination.
    ///
    /// When not set, the destination is derived from the input path by
    /// swapping the source extension for the destination extension.
    #[arg(short = 'o', long)]
    pub output_path: Option<PathBuf>,

    /// Conversion direction.
    #[arg(short = 'd', long, default_value_t = Direction::SamToBam)]
    pub direction: Direction,

    /// Input alignment file.
    pub src: PathBuf,
}
