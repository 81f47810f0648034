use std::process;

use canvas_history::CanvasResult;
use canvas_history::cli::CanvasHistory;
use clap::Parser;

fn main() {
    if let Err(error) = run() {
        tracing::debug!(?error);
        eprint!("{}", error);
        process::exit(1)
    } else {
        process::exit(0)
    }
}

fn run() -> CanvasResult<()> {
    let app = CanvasHistory::parse();
    timber::init(app.log_level());

    // a missing .env file is fine
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(error) if error.not_found() => {}
        Err(error) => tracing::warn!(%error, "could not load .env"),
    }
    tracing::trace!(command_structure = ?app);

    let output = app.run()?;
    output.print()?;
    Ok(())
}
