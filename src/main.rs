#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

use clap::Parser;
use sketchpad::{LaunchOptions, SketchApp};

#[derive(Parser, Debug)]
#[command(name = "sketchpad", version, about = "Freehand sketching with pen, eraser and a color palette")]
struct Cli {
    /// Image drawn beneath the sketch
    #[arg(long, value_name = "PATH")]
    background: Option<PathBuf>,

    /// Ask for storage permission before saving
    #[arg(long)]
    require_permission: bool,

    /// Directory used as the photo library album
    #[arg(long, value_name = "DIR")]
    library_dir: Option<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let cli = Cli::parse();
    let launch = LaunchOptions {
        background: cli.background,
        require_permission: cli.require_permission,
        library_dir: cli.library_dir,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sketchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc, launch)))),
    )
}
