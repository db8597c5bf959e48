// Command-line surface
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dashboard-templater")]
#[command(about = "Render dashboard JSON files from inheritable YAML templates")]
pub struct Cli {
    /// Be a little bit verbose
    #[arg(short, long)]
    pub verbose: bool,

    /// Template source file [default: config.yml]
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// Directory receiving the dashboard files [default: dashboards]
    #[arg(short, long)]
    pub dest_dir: Option<PathBuf>,

    /// Render everything but don't create any dashboard file
    #[arg(short, long)]
    pub noop: bool,
}
