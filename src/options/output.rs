use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
pub struct OutputOpt {
    /// Directory the history file is written into. Created if missing.
    #[arg(long = "output-dir", default_value = ".")]
    pub output_dir: Utf8PathBuf,
}
