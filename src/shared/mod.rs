pub mod error;
pub mod macros;
pub mod stop_set;
pub mod structs;

pub use error::DispatchError;
pub use stop_set::StopSet;
pub use structs::Direction;
pub use structs::ElevatorSnapshot;
pub use structs::StepOutcome;
