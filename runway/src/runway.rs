use std::collections::VecDeque;
use std::fmt;

use crate::errors::{RejectedFlight, RunwayError};
use crate::flight::{is_valid_id, Destination, Flight, FlightType};
use crate::{MAX_ID, SCRATCH_RUNWAY_ID};

/// A runway and the flights waiting to take off from it.
///
/// Flights are kept in priority order: every emergency flight comes before
/// every regular flight, and inside each group flights keep the order in
/// which they arrived. The head of the queue is the next flight to depart.
#[derive(Debug)]
pub struct Runway {
    id: u32,
    class: FlightType,
    flights: VecDeque<Flight>,
}

impl Runway {
    /// Creates a new, empty runway.
    ///
    /// # Parameters
    /// - `id`: Runway id, in `1..=MAX_ID`.
    /// - `class`: The only type of flight this runway accepts.
    ///
    /// # Errors
    /// - `RunwayError::InvalidArgument` - If the id is out of range.
    pub fn new(id: u32, class: FlightType) -> Result<Self, RunwayError> {
        if !is_valid_id(id) {
            return Err(RunwayError::InvalidArgument(format!(
                "Runway id {} is out of range 1..={}",
                id, MAX_ID
            )));
        }
        Ok(Runway {
            id,
            class,
            flights: VecDeque::new(),
        })
    }

    /// Creates a temporary runway used to stage flights during a reroute.
    ///
    /// Its id is `SCRATCH_RUNWAY_ID`, which no real runway can have.
    pub(crate) fn scratch(class: FlightType) -> Self {
        Runway {
            id: SCRATCH_RUNWAY_ID,
            class,
            flights: VecDeque::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn class(&self) -> FlightType {
        self.class
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    pub fn emergency_count(&self) -> usize {
        self.flights.iter().filter(|f| f.is_emergency()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Returns the waiting flights, next to depart first.
    pub fn flights(&self) -> impl Iterator<Item = &Flight> {
        self.flights.iter()
    }

    /// Checks whether a flight with the given id is waiting on this runway.
    /// Ids outside `1..=MAX_ID` are never present.
    pub fn contains(&self, flight_id: u32) -> bool {
        is_valid_id(flight_id) && self.position_of(flight_id).is_some()
    }

    /// Adds a flight to the runway, keeping the emergency-first order.
    ///
    /// An emergency flight goes right after the last waiting emergency flight
    /// (or to the head if there is none); a regular flight goes to the tail.
    ///
    /// # Errors
    /// The flight is handed back inside a `RejectedFlight` when:
    /// - `RunwayError::Conflict` - A flight with the same id is already waiting,
    ///   or the flight type does not match the runway class.
    /// - `RunwayError::AllocationFailure` - The queue could not grow.
    pub fn add_flight(&mut self, flight: Flight) -> Result<(), RejectedFlight> {
        if self.contains(flight.id()) {
            let reason = RunwayError::Conflict(format!(
                "Flight {} is already waiting on runway {}",
                flight.id(),
                self.id
            ));
            return Err(RejectedFlight::new(flight, reason));
        }
        if flight.flight_type() != self.class {
            let reason = RunwayError::Conflict(format!(
                "Flight {} is {} but runway {} is {}",
                flight.id(),
                flight.flight_type(),
                self.id,
                self.class
            ));
            return Err(RejectedFlight::new(flight, reason));
        }
        if self.flights.try_reserve(1).is_err() {
            return Err(RejectedFlight::new(flight, RunwayError::AllocationFailure));
        }

        let position = self.insert_position(&flight);
        self.flights.insert(position, flight);
        Ok(())
    }

    // Emergency flights join the end of the emergency prefix.
    fn insert_position(&self, flight: &Flight) -> usize {
        if !flight.is_emergency() {
            return self.flights.len();
        }
        self.flights
            .iter()
            .position(|waiting| !waiting.is_emergency())
            .unwrap_or(self.flights.len())
    }

    fn position_of(&self, flight_id: u32) -> Option<usize> {
        self.flights.iter().position(|f| f.id() == flight_id)
    }

    /// Removes the flight with the given id and returns it.
    ///
    /// # Errors
    /// - `RunwayError::InvalidArgument` - If the id is out of range.
    /// - `RunwayError::EmptyRunway` - If no flight is waiting.
    /// - `RunwayError::NotFound` - If no waiting flight has that id.
    pub fn remove_flight(&mut self, flight_id: u32) -> Result<Flight, RunwayError> {
        if !is_valid_id(flight_id) {
            return Err(RunwayError::InvalidArgument(format!(
                "Flight id {} is out of range 1..={}",
                flight_id, MAX_ID
            )));
        }
        if self.flights.is_empty() {
            return Err(RunwayError::EmptyRunway(self.id));
        }

        self.position_of(flight_id)
            .and_then(|position| self.flights.remove(position))
            .ok_or_else(|| {
                RunwayError::NotFound(format!(
                    "Flight {} is not waiting on runway {}",
                    flight_id, self.id
                ))
            })
    }

    /// Takes off the flight at the head of the queue.
    ///
    /// # Errors
    /// - `RunwayError::EmptyRunway` - If no flight is waiting.
    pub fn depart(&mut self) -> Result<Flight, RunwayError> {
        self.flights
            .pop_front()
            .ok_or(RunwayError::EmptyRunway(self.id))
    }

    /// Changes the destination of every flight bound for `old` to `new`.
    /// The order of the queue is not touched.
    ///
    /// # Returns
    /// * `usize` - The number of flights that changed destination.
    pub fn change_destination(&mut self, old: &Destination, new: &Destination) -> usize {
        let mut changed = 0;
        for flight in self.flights.iter_mut() {
            if flight.destination() == old {
                flight.set_destination(*new);
                changed += 1;
            }
        }
        changed
    }

    /// Requeues every flight bound for `destination`.
    ///
    /// Matching flights are staged, in queue order, on a scratch runway of the
    /// same class and then inserted back one by one, so they end up placed as
    /// if they had just arrived: emergencies at the end of the emergency
    /// prefix, regular flights at the tail.
    ///
    /// Staging happens before the runway is modified, so a failure there
    /// leaves the runway exactly as it was.
    ///
    /// # Returns
    /// * `Result<usize, RunwayError>` - The number of flights requeued.
    pub fn reroute(&mut self, destination: &Destination) -> Result<usize, RunwayError> {
        let mut staged = Runway::scratch(self.class);
        for flight in self.flights.iter() {
            if flight.destination() == destination {
                staged.add_flight(flight.recreate())?;
            }
        }
        if staged.is_empty() {
            return Ok(0);
        }

        self.flights.retain(|f| f.destination() != destination);

        // The ids were just removed and the class is shared with the scratch
        // runway, so reinsertion can only fail on allocation.
        let rerouted = staged.flight_count();
        while let Ok(flight) = staged.depart() {
            self.add_flight(flight.recreate())?;
        }
        Ok(rerouted)
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Runway {} {}", self.id, self.class)?;
        writeln!(f, "{} flights are waiting:", self.flights.len())?;
        for flight in &self.flights {
            writeln!(f, "{}", flight)?;
        }
        Ok(())
    }
}
