use clap::Parser;

mod args;
mod runner;

use args::CliArgs;

fn main() -> anyhow::Result<()> {
    runner::run(CliArgs::parse())
}
