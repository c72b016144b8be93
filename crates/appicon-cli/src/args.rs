use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use appicon_core::{DEFAULT_BORDER_OUTPUT, DEFAULT_ROUNDED_OUTPUT};

#[derive(Parser, Debug)]
#[command(name = "appicon", version, about = "Prepare 1024x1024 app icons")]
pub struct CliArgs {
    /// Enable debug logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clip the corners to a rounded rectangle.
    Round(RoundArgs),
    /// Scale the icon down and centre it inside a transparent border.
    Border(BorderArgs),
    /// Round the corners, then add the border.
    Prepare(PrepareArgs),
}

#[derive(Args, Debug)]
pub struct RoundArgs {
    /// Source image (must be 1024x1024)
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_ROUNDED_OUTPUT)]
    pub output: PathBuf,

    /// Corner radius in pixels
    #[arg(short, long, default_value_t = 100)]
    pub radius: u32,
}

#[derive(Args, Debug)]
pub struct BorderArgs {
    /// Source image (must be 1024x1024)
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_BORDER_OUTPUT)]
    pub output: PathBuf,

    /// Margin on each side as a fraction of the side length, in [0, 0.5)
    #[arg(short, long, default_value_t = 0.05, value_parser = parse_fraction)]
    pub fraction: f64,
}

#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Source image (must be 1024x1024)
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_BORDER_OUTPUT)]
    pub output: PathBuf,

    /// Corner radius in pixels
    #[arg(short, long, default_value_t = 100)]
    pub radius: u32,

    /// Margin on each side as a fraction of the side length, in [0, 0.5)
    #[arg(short, long, default_value_t = 0.05, value_parser = parse_fraction)]
    pub fraction: f64,
}

fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !(0.0..0.5).contains(&value) {
        return Err(format!("{value} is outside [0, 0.5)"));
    }
    Ok(value)
}
