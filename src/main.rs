#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

/// Window size used by `--compact`, narrow enough to force the
/// single-column layout.
const COMPACT_SIZE: (f64, f64) = (430.0, 900.0);

/// Bento Brief - the generalist career playbook as an animated bento grid
#[derive(Parser, Debug)]
#[command(name = "bentobrief-desktop")]
#[command(about = "Bento Brief - animated bento-grid brief of the generalist career playbook")]
#[command(version)]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Start at phone width (single-column layout)
    #[arg(long)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let (width, height) = if args.compact {
        COMPACT_SIZE
    } else {
        (args.width, args.height)
    };

    tracing::info!("Starting Bento Brief at {}x{}", width, height);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Bento Brief")
            .with_inner_size(LogicalSize::new(width, height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
