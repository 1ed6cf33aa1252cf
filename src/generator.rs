/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{info, warn};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::GeneratorConfig;
use crate::dispatcher::Dispatcher;

/**
 * Synthetic passenger traffic.
 *
 * Calls a random floor, then waits a random interval in `[min_interval, max_interval]`
 * milliseconds before the next call. Runs until the terminate channel fires.
 */
pub struct RequestGenerator {
    dispatcher: Arc<Dispatcher>,
    min_interval: u64,
    max_interval: u64,
    terminate_rx: cbc::Receiver<()>,
}

impl RequestGenerator {
    pub fn new(
        config: &GeneratorConfig,
        dispatcher: Arc<Dispatcher>,
        terminate_rx: cbc::Receiver<()>,
    ) -> RequestGenerator {
        RequestGenerator {
            dispatcher,
            min_interval: config.min_interval,
            max_interval: config.max_interval.max(config.min_interval),
            terminate_rx,
        }
    }

    pub fn run(self) {
        let mut rng = rand::rng();

        loop {
            let floor = rng.random_range(1..=self.dispatcher.n_floors());
            info!("Call for an elevator at floor {}", floor);

            if let Err(e) = self.dispatcher.add_request(floor) {
                warn!("[{}] request rejected: {}", e.as_label(), e);
            }

            let pause = Duration::from_millis(rng.random_range(self.min_interval..=self.max_interval));
            cbc::select! {
                recv(self.terminate_rx) -> _ => {
                    info!("Request generator terminated");
                    return;
                }
                default(pause) => {}
            }
        }
    }
}
