/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::Builder;
use std::thread::JoinHandle;
use std::time::Duration;

/* Custom libraries */
use dispatch::config;
use dispatch::generator::RequestGenerator;
use dispatch::monitor::Monitor;
use dispatch::unwrap_or_exit;
use dispatch::{Dispatcher, ElevatorController};

/// Multi-elevator dispatch simulator.
#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// Path to the configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the number of floors
    #[clap(long)]
    floors: Option<u8>,

    /// Override the number of elevators
    #[clap(long)]
    elevators: Option<u8>,

    /// Stop after this many seconds instead of running forever
    #[clap(short, long)]
    duration: Option<u64>,

    /// Do not start the random request generator
    #[clap(long)]
    no_generator: bool,
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load the configuration
    let mut config = unwrap_or_exit!(config::load_config(&args.config));
    if let Some(n_floors) = args.floors {
        config.dispatcher.n_floors = n_floors;
    }
    if let Some(n_elevators) = args.elevators {
        config.dispatcher.n_elevators = n_elevators;
    }
    if args.no_generator {
        config.generator.enabled = false;
    }
    unwrap_or_exit!(config.validate());

    info!(
        "Starting dispatcher with {} floors and {} elevators",
        config.dispatcher.n_floors, config.dispatcher.n_elevators
    );

    // Dropping the sender terminates every thread
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();
    let dispatcher = Arc::new(Dispatcher::from_config(&config.dispatcher));
    let mut threads: Vec<JoinHandle<()>> = Vec::new();

    // Start one controller per elevator
    for elevator in dispatcher.elevators() {
        let id = elevator.id();
        let controller =
            ElevatorController::new(&config.elevator, dispatcher.clone(), id, terminate_rx.clone());
        let thread = Builder::new().name(format!("elevator_{}", id));
        threads.push(unwrap_or_exit!(thread.spawn(move || controller.run())));
    }

    // Start the request generator
    if config.generator.enabled {
        let generator =
            RequestGenerator::new(&config.generator, dispatcher.clone(), terminate_rx.clone());
        let thread = Builder::new().name("request_generator".into());
        threads.push(unwrap_or_exit!(thread.spawn(move || generator.run())));
    }

    // Start the monitor
    if config.monitor.enabled {
        let monitor = Monitor::new(&config.monitor, dispatcher.clone(), terminate_rx.clone());
        let thread = Builder::new().name("monitor".into());
        threads.push(unwrap_or_exit!(thread.spawn(move || monitor.run())));
    }

    match args.duration {
        Some(secs) => {
            std::thread::sleep(Duration::from_secs(secs));
            info!("Run time of {}s elapsed, shutting down", secs);
            drop(terminate_tx);
        }
        None => info!("Running until the process is stopped"),
    }

    for thread in threads {
        let _ = thread.join();
    }
    info!("Pending requests at shutdown: {:?}", dispatcher.snapshot_requests());
}
