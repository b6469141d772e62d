mod cli;
mod error;
mod files;
mod loader;
mod navigator;
mod ui;

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use winit::event_loop::EventLoop;

use crate::cli::Cli;
use crate::error::ViewerError;
use crate::files::Catalog;
use crate::navigator::Navigator;
use crate::ui::state::ViewerState;
use crate::ui::App;

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli.directory) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", err);
            ExitCode::from(err.exit_status())
        }
    }
}

/// Scan the directory and position the cursor on the first image. Runs before
/// any window exists, so startup failures never open one.
fn open_catalog(dir: &Path) -> Result<Navigator, ViewerError> {
    let catalog = Catalog::build(dir)?;
    Navigator::new(catalog)
}

fn run(dir: &Path) -> Result<(), ViewerError> {
    let navigator = open_catalog(dir)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(ViewerState::new(navigator));
    event_loop.run_app(&mut app)?;
    app.finish()
}
