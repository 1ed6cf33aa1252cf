pub mod car;
pub mod fsm;

pub use car::Elevator;
pub use fsm::ElevatorController;
