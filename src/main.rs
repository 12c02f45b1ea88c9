// src/main.rs

use odxxt_term::{
    config::CONFIG,
    digest::Sha256Digest,
    orchestrator::{AppOrchestrator, MonotonicClock, OrchestratorStatus},
    platform::{console::ConsoleDriver, Driver},
    renderer::Renderer,
    term::Terminal,
};

use anyhow::Context;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Main entry point for the `odxxt-term` application.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr; the console itself belongs to the terminal.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    info!("Starting odxxt-term...");

    let mut driver = ConsoleDriver::new().context("Failed to initialize ConsoleDriver")?;
    let mut term = Terminal::new(
        CONFIG.clone(),
        Box::new(Sha256Digest),
        StdRng::from_entropy(),
    );
    let clock = MonotonicClock::new();

    let result = {
        let mut orchestrator = AppOrchestrator::new(
            &mut term,
            Renderer::new(),
            &mut driver,
            &clock,
            CONFIG.performance.clone(),
        );
        run(&mut orchestrator)
    };

    if let Err(e) = driver.cleanup() {
        error!("Driver cleanup failed: {:#}", e);
    }
    info!("odxxt-term exited.");
    result
}

fn run(orchestrator: &mut AppOrchestrator) -> anyhow::Result<()> {
    orchestrator.start().context("Failed to start the session")?;
    loop {
        match orchestrator.process_event_cycle() {
            Ok(OrchestratorStatus::Running) => {}
            Ok(OrchestratorStatus::Shutdown) => {
                info!("Shutdown requested.");
                return Ok(());
            }
            Err(e) => {
                error!("Fatal error in the event loop: {:#}", e);
                return Err(e);
            }
        }
    }
}
