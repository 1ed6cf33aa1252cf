/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::DispatcherConfig;
use crate::elevator::Elevator;
use crate::shared::error::check_floor;
use crate::shared::{DispatchError, ElevatorSnapshot, StepOutcome};

/// Outstanding calls per floor. A floor is present iff at least one call is waiting.
pub type RequestTable = BTreeMap<u8, u32>;

/**
 * Routes floor requests to elevators and keeps track of the calls that are still waiting.
 *
 * The roster is fixed at construction. Everything that mutates the bookkeeping runs under
 * the ledger lock: assigning a call in `add_request` and stepping an elevator in
 * `step_elevator`. Elevator locks are only ever taken while holding the ledger lock or on
 * their own, never the other way around.
 *
 * # Fields
 * - `n_floors`:    Number of floors, numbered `1..=n_floors`.
 * - `elevators`:   The roster, ids `1..=n_elevators` in order.
 * - `ledger`:      Outstanding calls per floor and which elevator they went to.
 */
#[derive(Debug)]
pub struct Dispatcher {
    n_floors: u8,
    elevators: Vec<Elevator>,
    ledger: Mutex<Ledger>,
}

#[derive(Debug)]
struct Ledger {
    requests: RequestTable,
    // Calls merged into each elevator's pending stops, indexed like the roster
    assigned: Vec<RequestTable>,
}

impl Ledger {
    fn retire(&mut self, floor: u8) {
        match self.requests.entry(floor) {
            Entry::Occupied(mut entry) if *entry.get() > 1 => {
                *entry.get_mut() -= 1;
            }
            Entry::Occupied(entry) => {
                entry.remove();
            }
            Entry::Vacant(_) => {
                debug!("No outstanding request at floor {} to retire", floor);
            }
        }
    }
}

impl Dispatcher {
    pub fn new(n_floors: u8, n_elevators: u8) -> Dispatcher {
        Dispatcher {
            n_floors,
            elevators: (1..=n_elevators).map(|id| Elevator::new(id, n_floors)).collect(),
            ledger: Mutex::new(Ledger {
                requests: RequestTable::new(),
                assigned: vec![RequestTable::new(); n_elevators as usize],
            }),
        }
    }

    pub fn from_config(config: &DispatcherConfig) -> Dispatcher {
        Dispatcher::new(config.n_floors, config.n_elevators)
    }

    /// Registers a call at `floor` and assigns it to the cheapest elevator.
    ///
    /// Ties go to the first elevator in the roster. Returns the id of the chosen elevator.
    pub fn add_request(&self, floor: u8) -> Result<u8, DispatchError> {
        check_floor(floor, self.n_floors)?;

        let mut ledger = self.ledger();

        let (index, best) = self
            .elevators
            .iter()
            .enumerate()
            .min_by_key(|(_, elevator)| elevator.calculate_cost(floor))
            .ok_or(DispatchError::NoElevators)?;

        best.add_stop(floor)?;
        *ledger.requests.entry(floor).or_insert(0) += 1;
        *ledger.assigned[index].entry(floor).or_insert(0) += 1;

        info!("Request at floor {} assigned to elevator {}", floor, best.id());
        Ok(best.id())
    }

    /// Retires one call at `floor`. The entry is dropped when its last call is gone.
    pub fn remove_request(&self, floor: u8) {
        self.ledger().retire(floor);
    }

    /// Runs one movement step of elevator `id`.
    ///
    /// When the step services a stop, every call that was assigned to this elevator for that
    /// floor is retired; at least one is, even if the stop was queued directly on the car.
    pub fn step_elevator(&self, id: u8) -> Result<StepOutcome, DispatchError> {
        let index = self.index_of(id)?;

        let mut ledger = self.ledger();
        let outcome = self.elevators[index].step();

        if let StepOutcome::Serviced(floor) = outcome {
            let calls = ledger.assigned[index].remove(&floor).unwrap_or(1);
            for _ in 0..calls {
                ledger.retire(floor);
            }
        }
        Ok(outcome)
    }

    pub fn elevator(&self, id: u8) -> Result<&Elevator, DispatchError> {
        self.index_of(id).map(|index| &self.elevators[index])
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn snapshot_elevators(&self) -> Vec<ElevatorSnapshot> {
        self.elevators.iter().map(Elevator::snapshot).collect()
    }

    pub fn snapshot_requests(&self) -> RequestTable {
        self.ledger().requests.clone()
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    fn index_of(&self, id: u8) -> Result<usize, DispatchError> {
        self.elevators
            .iter()
            .position(|elevator| elevator.id() == id)
            .ok_or(DispatchError::UnknownElevator(id))
    }

    fn ledger(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
