/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::MonitorConfig;
use crate::dispatcher::{Dispatcher, RequestTable};
use crate::shared::{Direction, ElevatorSnapshot};

/// Everything an observer sees at one instant.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BuildingView {
    pub elevators: Vec<ElevatorSnapshot>,
    pub requests: RequestTable,
}

impl BuildingView {
    pub fn capture(dispatcher: &Dispatcher) -> BuildingView {
        BuildingView {
            elevators: dispatcher.snapshot_elevators(),
            requests: dispatcher.snapshot_requests(),
        }
    }

    /// One-line summary, e.g. `E1@3^ [5] E2@1^ [] | waiting: 5x1`.
    pub fn summary(&self) -> String {
        let mut line = String::new();

        for elevator in &self.elevators {
            let arrow = match elevator.direction {
                Direction::Up => '^',
                Direction::Down => 'v',
            };
            let stops: Vec<String> = elevator.stops.iter().map(u8::to_string).collect();
            let _ = write!(line, "E{}@{}{} [{}] ", elevator.id, elevator.floor, arrow, stops.join(","));
        }

        line.push_str("| waiting:");
        if self.requests.is_empty() {
            line.push_str(" none");
        }
        for (floor, count) in &self.requests {
            let _ = write!(line, " {}x{}", floor, count);
        }
        line
    }
}

/**
 * Periodic observer of the dispatcher.
 *
 * Every `interval` it takes a snapshot through the dispatcher's read-only accessors, logs it
 * as JSON at debug level and logs a summary line whenever the view has changed.
 */
pub struct Monitor {
    dispatcher: Arc<Dispatcher>,
    interval: Duration,
    terminate_rx: cbc::Receiver<()>,
}

impl Monitor {
    pub fn new(
        config: &MonitorConfig,
        dispatcher: Arc<Dispatcher>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Monitor {
        Monitor {
            dispatcher,
            interval: Duration::from_millis(config.interval),
            terminate_rx,
        }
    }

    pub fn run(self) {
        let mut last_view: Option<BuildingView> = None;

        loop {
            cbc::select! {
                recv(self.terminate_rx) -> _ => {
                    info!("Monitor terminated");
                    return;
                }
                default(self.interval) => {
                    let view = BuildingView::capture(&self.dispatcher);

                    match serde_json::to_string(&view) {
                        Ok(json) => debug!("{}", json),
                        Err(e) => warn!("Failed to serialize building view: {}", e),
                    }

                    if last_view.as_ref() != Some(&view) {
                        info!("{}", view.summary());
                        last_view = Some(view);
                    }
                }
            }
        }
    }
}
