/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Result of a single movement step of an elevator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No pending stops, the elevator stayed where it was.
    Idle,
    /// Moved to the given floor without stopping.
    Moved(u8),
    /// Reached (or already stood at) a pending stop and serviced it.
    Serviced(u8),
}

/// Point-in-time view of one elevator, handed to observers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorSnapshot {
    pub id: u8,
    pub floor: u8,
    pub direction: Direction,
    pub stops: Vec<u8>,
}
