use rand::Rng;
use runway::{Airport, Flight, FlightType, RunwayError, MAX_ID};

const DESTINATIONS: [&str; 10] = [
    "AEP", "EZE", "COR", "MDZ", "BRC", "USH", "GRU", "SCL", "MVD", "LIM",
];

const RUNWAYS: [(u32, FlightType); 4] = [
    (1, FlightType::Domestic),
    (2, FlightType::Domestic),
    (3, FlightType::International),
    (4, FlightType::International),
];

/// Opens the demo runways that are missing and queues `flights` random flights.
///
/// # Returns
/// * `Result<usize, RunwayError>` - The number of flights actually queued.
pub fn add_test_data(airport: &mut Airport, flights: usize) -> Result<usize, RunwayError> {
    for (id, class) in RUNWAYS {
        if airport.runway(id).is_none() {
            airport.add_runway(id, class)?;
        }
    }

    let mut rng = rand::thread_rng();
    let mut queued = 0;
    for _ in 0..flights {
        let id = rng.gen_range(1..=MAX_ID);
        // Random ids may repeat; those flights are skipped.
        if airport.contains_flight(id) {
            continue;
        }

        let flight_type = if rng.gen_bool(0.5) {
            FlightType::Domestic
        } else {
            FlightType::International
        };
        let destination = DESTINATIONS[rng.gen_range(0..DESTINATIONS.len())];
        let is_emergency = rng.gen_bool(0.2);

        let flight = Flight::new(id, flight_type, destination, is_emergency)?;
        airport.add_flight(flight)?;
        queued += 1;
    }

    Ok(queued)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_runways_and_flights() {
        let mut airport = Airport::new();
        let queued = add_test_data(&mut airport, 20).unwrap();

        assert_eq!(airport.runway_count(), 4);
        let waiting: usize = airport.runways().map(|r| r.flight_count()).sum();
        assert_eq!(waiting, queued);
        assert!(queued <= 20);
    }

    #[test]
    fn test_keeps_existing_runways() {
        let mut airport = Airport::new();
        airport.add_runway(1, FlightType::Domestic).unwrap();
        airport.add_runway(7, FlightType::Domestic).unwrap();

        add_test_data(&mut airport, 0).unwrap();
        assert_eq!(airport.runway_count(), 5);
    }
}
