//! Application entry point: bring up logging, run the engine, exit.

use ember_engine::core::Engine;
use ember_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    log::info!("starting ember");

    let mut engine: Engine = Engine::new();
    engine.run();

    // Exit status is 0 even when initialization failed; the failure has
    // already been logged.
    log::info!("ember terminated");
}
