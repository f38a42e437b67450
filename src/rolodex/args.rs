use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(
    about = "Interactive command-line address book with birthday reminders",
    long_about = None
)]
pub struct Cli {
    /// Directory holding the address book and config
    /// (defaults to the platform data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}
