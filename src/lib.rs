//! Multi-elevator dispatch simulator.
//!
//! A [`Dispatcher`] owns a fixed roster of [`Elevator`]s and the table of waiting calls.
//! Each call goes to the elevator with the lowest cost, and every elevator is driven
//! one floor at a time by its own [`ElevatorController`] thread.

/* Modules */
pub mod config;
pub mod dispatcher;
pub mod elevator;
pub mod generator;
pub mod monitor;
pub mod shared;


/* Re-exports */
pub use dispatcher::Dispatcher;
pub use elevator::{Elevator, ElevatorController};
pub use shared::{Direction, DispatchError, ElevatorSnapshot, StepOutcome};
