//! Runway queues for an airport control tower.
//!
//! A [`Runway`] keeps the flights waiting to take off in priority order:
//! emergencies first, then regular flights, each group in arrival order.
//! An [`Airport`] groups several runways and routes new flights to them.

pub mod airport;
pub mod errors;
pub mod flight;
pub mod runway;

pub use airport::Airport;
pub use errors::{RejectedFlight, RunwayError};
pub use flight::{Destination, Flight, FlightType};
pub use runway::Runway;

/// Highest id a flight or a runway can have. Valid ids are `1..=MAX_ID`.
pub const MAX_ID: u32 = 9999;

/// Id reserved for the scratch runway used while rerouting.
pub const SCRATCH_RUNWAY_ID: u32 = MAX_ID + 1;
