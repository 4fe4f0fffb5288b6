use logger::{Color, Logger};
use runway::{Airport, Flight, RunwayError};

use super::command::{print_help, Command};
use super::test_data::add_test_data;
use super::tower_error::TowerError;

/// How many random flights `test-data` tries to queue.
const TEST_DATA_FLIGHTS: usize = 12;

/// Whether the console should keep reading commands.
#[derive(Debug, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A control tower session: the airport being managed and its log.
#[derive(Debug)]
pub struct Session {
    pub airport: Airport,
    logger: Logger,
}

impl Session {
    pub fn new(logger: Logger) -> Self {
        Session {
            airport: Airport::new(),
            logger,
        }
    }

    /// Runs one command against the airport and logs the outcome.
    ///
    /// Rejected operations are logged as warnings and returned as errors;
    /// the airport is left as it was.
    pub fn execute(&mut self, command: Command) -> Result<Flow, TowerError> {
        match self.apply(command) {
            Ok(flow) => Ok(flow),
            Err(TowerError::Runway(e)) => {
                self.logger.warn(&e.to_string())?;
                Err(TowerError::Runway(e))
            }
            Err(e) => Err(e),
        }
    }

    fn apply(&mut self, command: Command) -> Result<Flow, TowerError> {
        match command {
            Command::AddRunway { id, class } => {
                self.airport.add_runway(id, class)?;
                self.logger
                    .info(&format!("Runway {} ({}) opened", id, class), Color::Green)?;
            }
            Command::RemoveRunway(id) => {
                let closed = self.airport.remove_runway(id)?;
                self.logger.info(
                    &format!(
                        "Runway {} closed, {} flights dropped",
                        id,
                        closed.flight_count()
                    ),
                    Color::Yellow,
                )?;
            }
            Command::AddFlight {
                id,
                flight_type,
                destination,
                is_emergency,
            } => {
                let flight = Flight::new(id, flight_type, destination.as_str(), is_emergency)?;
                let description = flight.to_string();
                let runway_id = self
                    .airport
                    .add_flight(flight)
                    .map_err(RunwayError::from)?;
                self.logger.info(
                    &format!("{} queued on runway {}", description, runway_id),
                    Color::Cyan,
                )?;
            }
            Command::RemoveFlight(id) => {
                let removed = self.airport.remove_flight(id)?;
                self.logger
                    .info(&format!("{} removed", removed), Color::Yellow)?;
            }
            Command::Depart(runway_id) => {
                let departed = self.airport.depart(runway_id)?;
                self.logger.info(
                    &format!("{} departed from runway {}", departed, runway_id),
                    Color::Blue,
                )?;
            }
            Command::ChangeDest { old, new } => {
                let changed = self.airport.change_destination(&old, &new);
                self.logger.info(
                    &format!("{} flights changed destination {} -> {}", changed, old, new),
                    Color::Magenta,
                )?;
            }
            Command::Delay(destination) => {
                let delayed = self.airport.delay(&destination)?;
                self.logger.info(
                    &format!("{} flights to {} delayed", delayed, destination),
                    Color::Magenta,
                )?;
            }
            Command::Count(runway_id) => match (
                self.airport.flight_count(runway_id),
                self.airport.emergency_count(runway_id),
            ) {
                (Some(total), Some(emergencies)) => {
                    println!(
                        "Runway {}: {} flights waiting, {} emergencies",
                        runway_id, total, emergencies
                    );
                }
                _ => {
                    self.logger
                        .warn(&format!("Runway {} does not exist", runway_id))?;
                }
            },
            Command::List => print!("{}", self.airport),
            Command::TestData => {
                let queued = add_test_data(&mut self.airport, TEST_DATA_FLIGHTS)?;
                self.logger
                    .info(&format!("Test data added: {} flights", queued), Color::White)?;
            }
            Command::Help => print_help(),
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runway::{Destination, FlightType};
    use std::fs;
    use std::path::PathBuf;

    fn session(name: &str) -> (Session, PathBuf) {
        let dir = std::env::temp_dir().join(format!("tower_session_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let logger = Logger::new(&dir, "tower").unwrap();
        (Session::new(logger), dir)
    }

    fn run(session: &mut Session, line: &str) -> Result<Flow, TowerError> {
        let command = Command::parse(line)?.expect("blank line");
        session.execute(command)
    }

    #[test]
    fn test_commands_drive_the_airport() {
        let (mut session, dir) = session("drive");

        run(&mut session, "add-runway 1 D").unwrap();
        run(&mut session, "add-flight 10 D LAX R").unwrap();
        run(&mut session, "add-flight 11 D SFO E").unwrap();
        run(&mut session, "add-flight 12 D LAX E").unwrap();

        let order: Vec<u32> = session
            .airport
            .runway(1)
            .unwrap()
            .flights()
            .map(Flight::id)
            .collect();
        assert_eq!(order, vec![11, 12, 10]);

        run(&mut session, "depart 1").unwrap();
        assert_eq!(session.airport.flight_count(1), Some(2));
        assert_eq!(run(&mut session, "exit").unwrap(), Flow::Exit);

        let log = fs::read_to_string(dir.join("tower.log")).unwrap();
        assert!(log.contains("Flight 11 D SFO E departed from runway 1"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_rejections_are_logged_as_warnings() {
        let (mut session, dir) = session("reject");

        run(&mut session, "add-runway 1 D").unwrap();
        let result = run(&mut session, "add-flight 10 I CDG R");
        assert!(matches!(
            result,
            Err(TowerError::Runway(RunwayError::NotFound(_)))
        ));

        let log = fs::read_to_string(dir.join("tower.log")).unwrap();
        assert!(log.contains("[WARN]"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_change_dest_and_delay() {
        let (mut session, dir) = session("delay");

        session
            .airport
            .add_runway(1, FlightType::Domestic)
            .unwrap();
        run(&mut session, "add-flight 1 D AAA R").unwrap();
        run(&mut session, "add-flight 2 D CCC R").unwrap();
        run(&mut session, "change-dest AAA BBB").unwrap();
        run(&mut session, "delay BBB").unwrap();

        let runway = session.airport.runway(1).unwrap();
        let last = runway.flights().last().unwrap();
        assert_eq!(last.id(), 1);
        assert_eq!(*last.destination(), Destination::new("BBB").unwrap());

        fs::remove_dir_all(dir).unwrap();
    }
}
