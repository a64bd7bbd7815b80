//! CLI argument parsing for cpufactor.

use camino::Utf8PathBuf;
use clap::Parser;
use cpufactor_core::ScanConfig;

#[derive(Parser, Debug)]
#[command(name = "cpufactor")]
#[command(about = "Detect CPU allocation factors in SLURM accounting logs")]
pub struct Args {
    /// Directory of accounting logs
    #[arg(default_value = "data/nots")]
    pub dir: Utf8PathBuf,

    /// Average CPU counts after rescaling them by the detected factor
    #[arg(long)]
    pub refactor: bool,

    /// Extension of accounting log files
    #[arg(long, default_value = ScanConfig::DEFAULT_EXTENSION)]
    pub extension: String,

    /// Write the summary table as CSV
    #[arg(long, value_name = "PATH")]
    pub csv: Option<Utf8PathBuf>,

    /// Write the scatter chart as an HTML page
    #[arg(long, value_name = "PATH")]
    pub html: Option<Utf8PathBuf>,

    /// Browse the chart in the terminal
    #[arg(long)]
    pub view: bool,

    /// Color theme for --view (dark or light)
    #[arg(long, default_value = "dark")]
    pub theme: String,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::new(self.dir.clone())
            .with_extension(self.extension.clone())
            .with_refactor(self.refactor)
    }
}
