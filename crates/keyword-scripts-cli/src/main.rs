//! `kwscript`: parse action words and render keyword test scripts.

mod cli;

fn main() -> eyre::Result<()> {
    cli::run()
}
