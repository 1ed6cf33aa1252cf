/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use std::sync::{Mutex, MutexGuard, PoisonError};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::check_floor;
use crate::shared::{Direction, DispatchError, ElevatorSnapshot, StepOutcome, StopSet};

/// Surcharge added to the cost when a request lies against the direction of travel.
pub const WRONG_DIRECTION_PENALTY: u32 = 2;

/**
 * A single elevator car.
 *
 * The car moves one floor per `step` towards the closest of its pending stops and services a
 * stop when it arrives there. Floor, direction and stops live behind one mutex so the
 * dispatcher can query costs and queue stops while the car's controller thread is stepping it.
 *
 * # Fields
 * - `id`:          Stable 1-based identity, assigned at construction.
 * - `n_floors`:    Number of floors in the building, floors are numbered `1..=n_floors`.
 * - `state`:       Current floor, direction and pending stops.
 */
#[derive(Debug)]
pub struct Elevator {
    id: u8,
    n_floors: u8,
    state: Mutex<CarState>,
}

#[derive(Debug)]
struct CarState {
    floor: u8,
    direction: Direction,
    stops: StopSet,
}

impl Elevator {
    /// A new car parked at floor 1, facing up, with no stops.
    pub fn new(id: u8, n_floors: u8) -> Elevator {
        Elevator {
            id,
            n_floors,
            state: Mutex::new(CarState {
                floor: 1,
                direction: Direction::Up,
                stops: StopSet::new(),
            }),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn floor(&self) -> u8 {
        self.state().floor
    }

    pub fn direction(&self) -> Direction {
        self.state().direction
    }

    pub fn pending_stops(&self) -> Vec<u8> {
        self.state().stops.to_vec()
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        let state = self.state();
        ElevatorSnapshot {
            id: self.id,
            floor: state.floor,
            direction: state.direction,
            stops: state.stops.to_vec(),
        }
    }

    /// Heuristic cost of sending this car to `floor`.
    ///
    /// An idle car costs the plain distance. A busy car costs the distance plus
    /// `WRONG_DIRECTION_PENALTY` unless `floor` lies strictly ahead in its direction of travel.
    pub fn calculate_cost(&self, floor: u8) -> u32 {
        let state = self.state();
        let distance = u32::from(state.floor.abs_diff(floor));

        if state.stops.is_empty() {
            return distance;
        }

        let ahead = match state.direction {
            Direction::Up => floor > state.floor,
            Direction::Down => floor < state.floor,
        };

        if ahead {
            distance
        } else {
            distance + WRONG_DIRECTION_PENALTY
        }
    }

    /// Queues a stop. Queuing an already pending floor changes nothing.
    pub fn add_stop(&self, floor: u8) -> Result<(), DispatchError> {
        check_floor(floor, self.n_floors)?;

        if self.state().stops.insert(floor) {
            debug!("Elevator {} queued stop at floor {}", self.id, floor);
        }
        Ok(())
    }

    /// Moves the car one floor towards its closest pending stop and services the stop if the
    /// car is now standing on it.
    ///
    /// Only the car's own lock is taken. Retiring the serviced call is up to the caller.
    pub fn step(&self) -> StepOutcome {
        let mut state = self.state();

        let target = match state.stops.nearest(state.floor) {
            Some(target) => target,
            None => return StepOutcome::Idle,
        };

        // A stop queued at the floor the car stands on is serviced without moving
        if target > state.floor {
            state.floor += 1;
            state.direction = Direction::Up;
        } else if target < state.floor {
            state.floor -= 1;
            state.direction = Direction::Down;
        }

        let floor = state.floor;
        if state.stops.remove(floor) {
            info!("Elevator {} stopped at floor {} and picked up a passenger", self.id, floor);
            StepOutcome::Serviced(floor)
        } else {
            debug!("Elevator {} moved to floor {}", self.id, floor);
            StepOutcome::Moved(floor)
        }
    }

    fn state(&self) -> MutexGuard<'_, CarState> {
        // The state is never left half-updated, so a poisoned lock is still usable
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
