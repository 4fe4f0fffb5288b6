use std::fmt::{self, Display};

use crate::flight::Flight;

/// Enum representing the possible errors that can occur while operating on runways.
///
/// The possible errors are:
///
/// - `InvalidArgument`: an id out of range, an unknown flight type tag or a malformed destination.
/// - `NotFound`: the requested flight or runway does not exist.
/// - `Conflict`: a duplicated flight/runway id, or a flight whose type does not match the runway.
/// - `EmptyRunway`: a removal or departure was requested on a runway with no flights.
/// - `AllocationFailure`: the runway storage could not grow to hold another flight.
#[derive(Debug, Clone, PartialEq)]
pub enum RunwayError {
    InvalidArgument(String),
    NotFound(String),
    Conflict(String),
    EmptyRunway(u32),
    AllocationFailure,
}

impl Display for RunwayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunwayError::InvalidArgument(msg) => write!(f, "[InvalidArgument]: {}", msg),
            RunwayError::NotFound(msg) => write!(f, "[NotFound]: {}", msg),
            RunwayError::Conflict(msg) => write!(f, "[Conflict]: {}", msg),
            RunwayError::EmptyRunway(id) => {
                write!(f, "[EmptyRunway]: Runway {} has no waiting flights", id)
            }
            RunwayError::AllocationFailure => write!(
                f,
                "[AllocationFailure]: Could not reserve storage for another flight"
            ),
        }
    }
}

impl std::error::Error for RunwayError {}

/// A flight that a runway or airport refused to take.
///
/// Ownership of the flight goes back to the caller together with the reason,
/// so a failed insertion never destroys the flight.
#[derive(Debug)]
pub struct RejectedFlight {
    pub flight: Flight,
    pub reason: RunwayError,
}

impl RejectedFlight {
    pub fn new(flight: Flight, reason: RunwayError) -> Self {
        RejectedFlight { flight, reason }
    }

    /// Gives the flight back, discarding the reason.
    pub fn into_flight(self) -> Flight {
        self.flight
    }
}

impl Display for RejectedFlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Flight {} rejected: {}", self.flight.id(), self.reason)
    }
}

impl std::error::Error for RejectedFlight {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

impl From<RejectedFlight> for RunwayError {
    fn from(rejected: RejectedFlight) -> Self {
        rejected.reason
    }
}
