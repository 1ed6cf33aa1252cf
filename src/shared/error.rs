/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/// Errors surfaced synchronously by the dispatcher and the elevators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Floor outside `1..=n_floors`.
    #[error("floor {floor} is outside the building (valid floors are 1..={n_floors})")]
    InvalidFloor { floor: u8, n_floors: u8 },

    #[error("no elevator with id {0}")]
    UnknownElevator(u8),

    #[error("the dispatcher has no elevators to assign requests to")]
    NoElevators,
}

impl DispatchError {
    /// Short stable label for log records.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::InvalidFloor { .. } => "invalid_floor",
            DispatchError::UnknownElevator(_) => "unknown_elevator",
            DispatchError::NoElevators => "no_elevators",
        }
    }
}

/// Checks that `floor` lies in `1..=n_floors`.
pub fn check_floor(floor: u8, n_floors: u8) -> Result<u8, DispatchError> {
    if floor >= 1 && floor <= n_floors {
        Ok(floor)
    } else {
        Err(DispatchError::InvalidFloor { floor, n_floors })
    }
}
