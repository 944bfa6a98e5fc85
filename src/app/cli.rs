use crate::app::models::DEFAULT_OUTPUT_NAME;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Collect matching source files into a single text bundle"
)]
pub struct Cli {
    /// Extensions starting with '.' (e.g. '.ts') or exact file names (e.g. 'package.json')
    #[arg(num_args = 1.., default_values = [".tsx", ".ts"])]
    pub criteria: Vec<String>,

    /// Directory to scan; defaults to the current directory
    #[arg(long, short = 'r')]
    pub root: Option<PathBuf>,

    /// Name of the bundle file, created inside the scanned directory
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_NAME)]
    pub output: String,

    /// Abort on the first source file that cannot be read
    #[arg(long)]
    pub strict: bool,
}
