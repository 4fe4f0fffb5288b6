use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{RejectedFlight, RunwayError};
use crate::flight::{is_valid_id, Destination, Flight, FlightType};
use crate::runway::Runway;

/// An airport holding several runways, indexed by runway id.
///
/// A flight id is unique across the whole airport, not only inside its runway.
#[derive(Debug, Default)]
pub struct Airport {
    runways: BTreeMap<u32, Runway>,
}

impl Airport {
    pub fn new() -> Self {
        Airport {
            runways: BTreeMap::new(),
        }
    }

    /// Opens a new, empty runway.
    ///
    /// # Errors
    /// - `RunwayError::InvalidArgument` - If the id is out of range.
    /// - `RunwayError::Conflict` - If a runway with that id already exists.
    pub fn add_runway(&mut self, id: u32, class: FlightType) -> Result<(), RunwayError> {
        if self.runways.contains_key(&id) {
            return Err(RunwayError::Conflict(format!(
                "Runway {} already exists",
                id
            )));
        }
        self.runways.insert(id, Runway::new(id, class)?);
        Ok(())
    }

    /// Closes a runway. Every flight still waiting on it is dropped with it.
    pub fn remove_runway(&mut self, id: u32) -> Result<Runway, RunwayError> {
        self.runways
            .remove(&id)
            .ok_or_else(|| RunwayError::NotFound(format!("Runway {} does not exist", id)))
    }

    pub fn runway(&self, id: u32) -> Option<&Runway> {
        self.runways.get(&id)
    }

    pub fn runways(&self) -> impl Iterator<Item = &Runway> {
        self.runways.values()
    }

    pub fn runway_count(&self) -> usize {
        self.runways.len()
    }

    /// Number of flights waiting on a runway, `None` if the runway does not exist.
    pub fn flight_count(&self, runway_id: u32) -> Option<usize> {
        self.runway(runway_id).map(Runway::flight_count)
    }

    /// Number of emergency flights waiting on a runway, `None` if the runway does not exist.
    pub fn emergency_count(&self, runway_id: u32) -> Option<usize> {
        self.runway(runway_id).map(Runway::emergency_count)
    }

    pub fn contains_flight(&self, flight_id: u32) -> bool {
        self.runways.values().any(|r| r.contains(flight_id))
    }

    /// Sends a flight to the least busy runway of its type.
    ///
    /// Ties go to the runway with the lowest id.
    ///
    /// # Returns
    /// * `Result<u32, RejectedFlight>` - The id of the runway that took the flight.
    ///
    /// # Errors
    /// - `RunwayError::Conflict` - If the flight id is already waiting somewhere in the airport.
    /// - `RunwayError::NotFound` - If there is no runway for the flight type.
    pub fn add_flight(&mut self, flight: Flight) -> Result<u32, RejectedFlight> {
        if self.contains_flight(flight.id()) {
            let reason = RunwayError::Conflict(format!(
                "Flight {} is already waiting in the airport",
                flight.id()
            ));
            return Err(RejectedFlight::new(flight, reason));
        }

        let chosen = self
            .runways
            .values()
            .filter(|r| r.class() == flight.flight_type())
            .min_by_key(|r| r.flight_count())
            .map(Runway::id);

        match chosen.and_then(|id| self.runways.get_mut(&id)) {
            Some(runway) => {
                runway.add_flight(flight)?;
                Ok(runway.id())
            }
            None => {
                let reason = RunwayError::NotFound(format!(
                    "There is no {} runway",
                    flight.flight_type()
                ));
                Err(RejectedFlight::new(flight, reason))
            }
        }
    }

    /// Removes a flight from whichever runway it is waiting on.
    pub fn remove_flight(&mut self, flight_id: u32) -> Result<Flight, RunwayError> {
        if !is_valid_id(flight_id) {
            return Err(RunwayError::InvalidArgument(format!(
                "Invalid flight id {}",
                flight_id
            )));
        }
        match self.runways.values_mut().find(|r| r.contains(flight_id)) {
            Some(runway) => runway.remove_flight(flight_id),
            None => Err(RunwayError::NotFound(format!(
                "Flight {} is not waiting in the airport",
                flight_id
            ))),
        }
    }

    /// Takes off the next flight of a runway.
    pub fn depart(&mut self, runway_id: u32) -> Result<Flight, RunwayError> {
        self.runways
            .get_mut(&runway_id)
            .ok_or_else(|| RunwayError::NotFound(format!("Runway {} does not exist", runway_id)))?
            .depart()
    }

    /// Changes the destination of matching flights on every runway.
    pub fn change_destination(&mut self, old: &Destination, new: &Destination) -> usize {
        self.runways
            .values_mut()
            .map(|r| r.change_destination(old, new))
            .sum()
    }

    /// Requeues the flights bound for `destination` on every runway.
    ///
    /// Stops at the first runway that fails; runways already processed keep
    /// their new order.
    pub fn delay(&mut self, destination: &Destination) -> Result<usize, RunwayError> {
        let mut delayed = 0;
        for runway in self.runways.values_mut() {
            delayed += runway.reroute(destination)?;
        }
        Ok(delayed)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Airport status:")?;
        if self.runways.is_empty() {
            return writeln!(f, "No runways available");
        }
        for runway in self.runways.values() {
            write!(f, "{}", runway)?;
        }
        Ok(())
    }
}
