use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "filterscript", about = "Check and inspect image viewer filter scripts")]
pub struct Cli {
    /// Filter script files to parse
    pub files: Vec<PathBuf>,

    /// Config file (defaults to filterscript.toml or the user config dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Filter directories for --list (replaces the config's dirs)
    #[arg(short, long)]
    pub dir: Vec<PathBuf>,

    /// Filter file extensions for --list (replaces the config's extensions)
    #[arg(long, value_delimiter = ',')]
    pub ext: Vec<String>,

    /// List every filter in the filter directories and exit
    #[arg(long)]
    pub list: bool,

    /// Print parsed filters as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the shader source handed to the compiler
    #[arg(long)]
    pub source: bool,

    /// Simulate key presses (e.g. --press Up --press Up) and print resulting values
    #[arg(long)]
    pub press: Vec<String>,
}
