/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::dispatcher::Dispatcher;
use crate::shared::StepOutcome;

/**
 * Drives one elevator of the dispatcher.
 *
 * Every iteration performs a single step and then pauses: the travel time after a move
 * (or while idle), the dwell time after servicing a stop. Pauses are waits on the terminate
 * channel, so the loop ends as soon as a terminate message arrives or every sender is dropped.
 *
 * # Fields
 * - `dispatcher`:      Shared dispatcher that owns the elevator and the request table.
 * - `id`:              Id of the elevator this controller drives.
 * - `travel_time`:     Pause after moving one floor or finding nothing to do.
 * - `dwell_time`:      Pause after servicing a stop.
 * - `terminate_rx`:    Shutdown signal.
 */
pub struct ElevatorController {
    dispatcher: Arc<Dispatcher>,
    id: u8,
    travel_time: Duration,
    dwell_time: Duration,
    terminate_rx: cbc::Receiver<()>,
}

impl ElevatorController {
    pub fn new(
        config: &ElevatorConfig,
        dispatcher: Arc<Dispatcher>,
        id: u8,
        terminate_rx: cbc::Receiver<()>,
    ) -> ElevatorController {
        ElevatorController {
            dispatcher,
            id,
            travel_time: Duration::from_millis(config.travel_time),
            dwell_time: Duration::from_millis(config.dwell_time),
            terminate_rx,
        }
    }

    pub fn run(self) {
        info!("Elevator {} controller started", self.id);

        loop {
            let pause = match self.dispatcher.step_elevator(self.id) {
                Ok(StepOutcome::Serviced(_)) => self.dwell_time,
                Ok(StepOutcome::Moved(_)) | Ok(StepOutcome::Idle) => self.travel_time,
                Err(e) => {
                    error!("Elevator {} controller stopped: {}", self.id, e);
                    return;
                }
            };

            cbc::select! {
                recv(self.terminate_rx) -> _ => {
                    info!("Elevator {} controller terminated", self.id);
                    return;
                }
                default(pause) => {}
            }
        }
    }
}
