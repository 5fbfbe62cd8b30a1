//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todozone", version, about = "A terminal to-do board with drag-and-drop between zones")]
pub struct Cli {
    /// Write a default config file and exit (defaults to the XDG config path)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub generate_config: Option<Option<PathBuf>>,
}
