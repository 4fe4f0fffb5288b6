use std::fmt;

use crate::errors::RunwayError;
use crate::MAX_ID;

/// Number of letters in a destination code.
pub const DESTINATION_LEN: usize = 3;

/// Kind of traffic a flight belongs to. A runway only serves one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightType {
    Domestic,
    International,
}

impl FlightType {
    /// Converts the `FlightType` variant to its single letter tag.
    pub fn as_str(&self) -> &str {
        match self {
            FlightType::Domestic => "D",
            FlightType::International => "I",
        }
    }

    /// Human readable name, as printed in runway listings.
    pub fn name(&self) -> &str {
        match self {
            FlightType::Domestic => "domestic",
            FlightType::International => "international",
        }
    }

    /// Creates a `FlightType` variant from a tag (`D`/`I`) or a full name.
    pub fn from_str(tag: &str) -> Result<FlightType, RunwayError> {
        match tag.to_lowercase().as_str() {
            "d" | "domestic" => Ok(FlightType::Domestic),
            "i" | "international" => Ok(FlightType::International),
            _ => Err(RunwayError::InvalidArgument(format!(
                "Invalid flight type: {}",
                tag
            ))),
        }
    }
}

impl fmt::Display for FlightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An airport code of exactly three ASCII letters, stored upper-case.
///
/// Codes of any other shape are rejected instead of being truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination([u8; DESTINATION_LEN]);

impl Destination {
    pub fn new(code: &str) -> Result<Self, RunwayError> {
        let bytes = code.trim().as_bytes();
        if bytes.len() != DESTINATION_LEN || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(RunwayError::InvalidArgument(format!(
                "Invalid destination code: {:?}",
                code
            )));
        }

        let mut letters = [0u8; DESTINATION_LEN];
        for (slot, byte) in letters.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }
        Ok(Destination(letters))
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters get past `new`.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A flight waiting on a runway.
///
/// A flight is owned by a single runway at a time, so it is not `Clone`.
#[derive(Debug, PartialEq)]
pub struct Flight {
    id: u32,
    flight_type: FlightType,
    destination: Destination,
    is_emergency: bool,
}

impl Flight {
    /// Creates a new flight.
    ///
    /// # Errors
    /// - `RunwayError::InvalidArgument` - If `id` is outside `1..=MAX_ID` or
    ///   `destination` is not a three letter code.
    pub fn new(
        id: u32,
        flight_type: FlightType,
        destination: &str,
        is_emergency: bool,
    ) -> Result<Self, RunwayError> {
        if !is_valid_id(id) {
            return Err(RunwayError::InvalidArgument(format!(
                "Flight id {} is out of range 1..={}",
                id, MAX_ID
            )));
        }

        Ok(Flight {
            id,
            flight_type,
            destination: Destination::new(destination)?,
            is_emergency,
        })
    }

    /// Builds a fresh flight carrying the same data as `self`.
    pub(crate) fn recreate(&self) -> Self {
        Flight {
            id: self.id,
            flight_type: self.flight_type,
            destination: self.destination,
            is_emergency: self.is_emergency,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn flight_type(&self) -> FlightType {
        self.flight_type
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn is_emergency(&self) -> bool {
        self.is_emergency
    }

    pub fn set_destination(&mut self, destination: Destination) {
        self.destination = destination;
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight {} {} {} {}",
            self.id,
            self.flight_type.as_str(),
            self.destination,
            if self.is_emergency { "E" } else { "R" }
        )
    }
}

/// Checks that an id is inside the range shared by flights and runways.
pub fn is_valid_id(id: u32) -> bool {
    (1..=MAX_ID).contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_type_from_str() {
        assert_eq!(FlightType::from_str("D").unwrap(), FlightType::Domestic);
        assert_eq!(
            FlightType::from_str("international").unwrap(),
            FlightType::International
        );
        assert!(matches!(
            FlightType::from_str("X"),
            Err(RunwayError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_destination_is_normalized() {
        let destination = Destination::new("lax").unwrap();
        assert_eq!(destination.as_str(), "LAX");
        assert_eq!(destination, Destination::new("LAX").unwrap());
    }

    #[test]
    fn test_destination_rejects_bad_codes() {
        assert!(Destination::new("LA").is_err());
        assert!(Destination::new("LAXX").is_err());
        assert!(Destination::new("L4X").is_err());
        assert!(Destination::new("").is_err());
    }

    #[test]
    fn test_flight_id_bounds() {
        assert!(Flight::new(0, FlightType::Domestic, "LAX", false).is_err());
        assert!(Flight::new(MAX_ID + 1, FlightType::Domestic, "LAX", false).is_err());
        assert!(Flight::new(1, FlightType::Domestic, "LAX", false).is_ok());
        assert!(Flight::new(MAX_ID, FlightType::Domestic, "LAX", false).is_ok());
    }

    #[test]
    fn test_set_destination_and_display() {
        let mut flight = Flight::new(42, FlightType::International, "CDG", true).unwrap();
        assert_eq!(flight.to_string(), "Flight 42 I CDG E");

        flight.set_destination(Destination::new("JFK").unwrap());
        assert_eq!(flight.destination().as_str(), "JFK");
        assert_eq!(flight.to_string(), "Flight 42 I JFK E");
    }

    #[test]
    fn test_recreate_keeps_every_field() {
        let flight = Flight::new(7, FlightType::Domestic, "SFO", true).unwrap();
        let copy = flight.recreate();
        assert_eq!(flight, copy);
    }
}
