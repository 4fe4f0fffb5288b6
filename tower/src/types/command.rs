use runway::{Destination, FlightType};

use super::tower_error::TowerError;

/// A console command, already validated.
#[derive(Debug, PartialEq)]
pub enum Command {
    AddRunway {
        id: u32,
        class: FlightType,
    },
    RemoveRunway(u32),
    AddFlight {
        id: u32,
        flight_type: FlightType,
        destination: Destination,
        is_emergency: bool,
    },
    RemoveFlight(u32),
    Depart(u32),
    ChangeDest {
        old: Destination,
        new: Destination,
    },
    Delay(Destination),
    Count(u32),
    List,
    TestData,
    Help,
    Exit,
}

impl Command {
    /// Parses one console line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, TowerError> {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some(name) = args.first() else {
            return Ok(None);
        };

        let command = match *name {
            "add-runway" => {
                expect_args(&args, 2, "add-runway <id> <D|I>")?;
                Command::AddRunway {
                    id: parse_id(args[1])?,
                    class: FlightType::from_str(args[2])?,
                }
            }
            "remove-runway" => {
                expect_args(&args, 1, "remove-runway <id>")?;
                Command::RemoveRunway(parse_id(args[1])?)
            }
            "add-flight" => {
                expect_args(&args, 4, "add-flight <id> <D|I> <DEST> <E|R>")?;
                Command::AddFlight {
                    id: parse_id(args[1])?,
                    flight_type: FlightType::from_str(args[2])?,
                    destination: Destination::new(args[3])?,
                    is_emergency: parse_emergency(args[4])?,
                }
            }
            "remove-flight" => {
                expect_args(&args, 1, "remove-flight <id>")?;
                Command::RemoveFlight(parse_id(args[1])?)
            }
            "depart" => {
                expect_args(&args, 1, "depart <runway_id>")?;
                Command::Depart(parse_id(args[1])?)
            }
            "change-dest" => {
                expect_args(&args, 2, "change-dest <OLD> <NEW>")?;
                Command::ChangeDest {
                    old: Destination::new(args[1])?,
                    new: Destination::new(args[2])?,
                }
            }
            "delay" => {
                expect_args(&args, 1, "delay <DEST>")?;
                Command::Delay(Destination::new(args[1])?)
            }
            "count" => {
                expect_args(&args, 1, "count <runway_id>")?;
                Command::Count(parse_id(args[1])?)
            }
            "list" => Command::List,
            "test-data" => Command::TestData,
            "-h" | "--help" | "help" => Command::Help,
            "exit" => Command::Exit,
            other => return Err(TowerError::Usage(format!("unknown command '{}'", other))),
        };

        Ok(Some(command))
    }
}

fn expect_args(args: &[&str], count: usize, usage: &str) -> Result<(), TowerError> {
    if args.len() != count + 1 {
        return Err(TowerError::Usage(format!("usage: {}", usage)));
    }
    Ok(())
}

fn parse_id(raw: &str) -> Result<u32, TowerError> {
    raw.parse()
        .map_err(|_| TowerError::Usage(format!("'{}' is not a valid id", raw)))
}

fn parse_emergency(raw: &str) -> Result<bool, TowerError> {
    match raw.to_uppercase().as_str() {
        "E" => Ok(true),
        "R" => Ok(false),
        _ => Err(TowerError::Usage(format!(
            "'{}' is not E (emergency) or R (regular)",
            raw
        ))),
    }
}

pub fn print_help() {
    println!("Available commands:");
    println!("  add-runway <id> <D|I>");
    println!("    Opens a domestic or international runway.");
    println!("  remove-runway <id>");
    println!("    Closes a runway, dropping every flight waiting on it.");
    println!("  add-flight <id> <D|I> <DEST> <E|R>");
    println!("    Queues a flight on the least busy runway of its type.");
    println!("  remove-flight <id>");
    println!("    Removes a flight from the airport.");
    println!("  depart <runway_id>");
    println!("    Takes off the next flight of a runway.");
    println!("  change-dest <OLD> <NEW>");
    println!("    Changes the destination of every flight bound for OLD.");
    println!("  delay <DEST>");
    println!("    Requeues every flight bound for DEST.");
    println!("  count <runway_id>");
    println!("    Shows how many flights (and emergencies) wait on a runway.");
    println!("  list");
    println!("    Shows every runway and its queue.");
    println!("  test-data");
    println!("    Opens a few runways and queues random flights.");
    println!("  exit");
    println!("    Closes this application.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_not_a_command() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_add_flight() {
        let command = Command::parse("add-flight 12 d lax E").unwrap();
        assert_eq!(
            command,
            Some(Command::AddFlight {
                id: 12,
                flight_type: FlightType::Domestic,
                destination: Destination::new("LAX").unwrap(),
                is_emergency: true,
            })
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("list").unwrap(), Some(Command::List));
        assert_eq!(Command::parse("depart 3").unwrap(), Some(Command::Depart(3)));
        assert_eq!(
            Command::parse("add-runway 2 I").unwrap(),
            Some(Command::AddRunway {
                id: 2,
                class: FlightType::International
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse("fly away"),
            Err(TowerError::Usage(_))
        ));
        assert!(matches!(
            Command::parse("depart"),
            Err(TowerError::Usage(_))
        ));
        assert!(matches!(
            Command::parse("depart one"),
            Err(TowerError::Usage(_))
        ));
        assert!(matches!(
            Command::parse("delay LONDON"),
            Err(TowerError::Runway(_))
        ));
        assert!(matches!(
            Command::parse("add-flight 1 D LAX X"),
            Err(TowerError::Usage(_))
        ));
    }
}
