use anyhow::Context as _;
use tracing::info;

use appicon_core::{
    add_border_file, prepare_icon_file, round_corners_file, BorderInsetOptions, PrepareOptions,
    RoundedCornerOptions,
};

use crate::args::{BorderArgs, CliArgs, Command, PrepareArgs, RoundArgs};

pub fn run(args: CliArgs) -> anyhow::Result<()> {
    let level = if args.log {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match args.cmd {
        Command::Round(args) => cmd_round(args),
        Command::Border(args) => cmd_border(args),
        Command::Prepare(args) => cmd_prepare(args),
    }
}

fn cmd_round(args: RoundArgs) -> anyhow::Result<()> {
    let options = RoundedCornerOptions {
        corner_radius: args.radius,
    };
    round_corners_file(&args.input, &args.output, &options)
        .with_context(|| format!("round corners of '{}'", args.input.display()))?;

    info!("Rounded corner icon saved as {}", args.output.display());
    Ok(())
}

fn cmd_border(args: BorderArgs) -> anyhow::Result<()> {
    let options = BorderInsetOptions {
        border_fraction: args.fraction,
        ..Default::default()
    };
    add_border_file(&args.input, &args.output, &options)
        .with_context(|| format!("add border to '{}'", args.input.display()))?;

    info!("Icon with border saved as {}", args.output.display());
    Ok(())
}

fn cmd_prepare(args: PrepareArgs) -> anyhow::Result<()> {
    let options = PrepareOptions::new(args.radius, args.fraction);
    prepare_icon_file(&args.input, &args.output, &options)
        .with_context(|| format!("prepare icon '{}'", args.input.display()))?;

    info!("Prepared icon saved as {}", args.output.display());
    Ok(())
}
