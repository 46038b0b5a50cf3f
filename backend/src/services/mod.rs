//! Business logic services for the Agro-Info server

pub mod advisory;
pub mod farm_state;

pub use advisory::AdvisoryService;
pub use farm_state::FarmStateService;
