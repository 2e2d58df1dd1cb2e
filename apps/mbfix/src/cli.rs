//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "mbfix",
    version,
    about = "Move mb-6 from <input> elements onto wrapper divs",
    long_about = "mbfix — scan ./src for Vue templates where the mb-6 margin class sits on an <input>, and move it onto a wrapping <div>.\n\nWithout --dry-run the whole source tree is copied to a timestamped backup next to it before files are rewritten in place.",
    after_help = "Examples:\n  mbfix --dry-run\n  mbfix --dry-run --verbose\n  mbfix"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Analyze and report only; no backup and no writes")]
    pub dry_run: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Print the matched markup under every issue")]
    pub verbose: bool,
}
