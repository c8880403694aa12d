//! Command-line interface for generating photomosaics

use crate::io::configuration::{DEFAULT_DIVISIONS, OUTPUT_SUFFIX};
use crate::io::error::Result;
use crate::io::image::{export_mosaic, load_source};
use crate::io::progress::ProgressManager;
use crate::mosaic::engine;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Assemble a photomosaic from a directory of tile images"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Source image to rebuild as a mosaic
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory containing candidate tile images
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Grid divisions along each axis
    #[arg(short, long, default_value_t = DEFAULT_DIVISIONS)]
    pub divisions: u32,

    /// Output path (defaults to the source name with a suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one mosaic request from decoded source to written output
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate the mosaic and write it to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded, the mosaic
    /// request fails, or the output cannot be written.
    // Allow print for user feedback on completion
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();

        let source = load_source(&self.cli.source)?;
        let encoded = engine::create_mosaic(
            &source,
            &self.cli.tiles,
            self.cli.divisions,
            self.progress_manager.as_ref(),
        )?;

        let output_path = self.output_path();
        export_mosaic(&encoded, &output_path)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
            eprintln!(
                "Wrote {} in {:.2?}",
                output_path.display(),
                start_time.elapsed()
            );
        }

        Ok(())
    }

    /// Output path, derived from the source name when not given
    pub fn output_path(&self) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Self::derive_output_path(&self.cli.source))
    }

    fn derive_output_path(source_path: &Path) -> PathBuf {
        let stem = source_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.jpg", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = source_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
