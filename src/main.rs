use anyhow::Result;
use clap::Parser;
use shimmer::{Config, Direction, Spinner};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Render a shimmering line of text in the terminal.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Text to shimmer.
    text: Option<String>,

    /// Base color as a hex string, like "#00D787".
    #[arg(long, env = "SHIMMER_COLOR")]
    color: Option<String>,

    /// Milliseconds between animation frames.
    #[arg(long)]
    interval: Option<u64>,

    /// Peak lightness percentage (0-100).
    #[arg(long)]
    peak_light: Option<u8>,

    /// Wave width in characters.
    #[arg(long)]
    wave_width: Option<usize>,

    /// Pause between sweeps, in ticks.
    #[arg(long)]
    wave_pause: Option<usize>,

    /// Sweep direction (right or left).
    #[arg(long)]
    direction: Option<Direction>,

    /// Simulate work for this many seconds instead of waiting for a key.
    #[arg(long)]
    work: Option<u64>,

    /// YAML config file supplying defaults for the flags above.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let mut options = config.options();
    if let Some(ms) = cli.interval {
        options.interval = Duration::from_millis(ms);
    }
    if let Some(peak_light) = cli.peak_light {
        options.peak_light = peak_light;
    }
    if let Some(wave_width) = cli.wave_width {
        options.wave_width = wave_width;
    }
    if let Some(wave_pause) = cli.wave_pause {
        options.wave_pause = wave_pause;
    }
    if let Some(direction) = cli.direction {
        options.direction = direction;
    }

    let text = cli
        .text
        .or(config.text)
        .unwrap_or_else(|| "Shimmering".to_string());
    let color = cli
        .color
        .or(config.color)
        .unwrap_or_else(|| "#00D787".to_string());

    let spinner = Spinner::new(text, &color).options(options);
    match cli.work {
        Some(seconds) => spinner
            .action(move || thread::sleep(Duration::from_secs(seconds)))
            .run()?,
        None => spinner.run()?,
    }

    Ok(())
}
