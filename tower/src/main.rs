mod types;

use std::env;
use std::io::{self, BufRead, Write};

use logger::{Color, Logger};
use types::command::Command;
use types::config::TowerConfig;
use types::session::{Flow, Session};
use types::tower_error::TowerError;

/// Interactive control tower console.
///
/// Reads one command per line from stdin and applies it to an in-memory airport,
/// logging every outcome to `<log_dir>/tower.log`.
///
/// # Usage
///
/// ```sh
/// cargo run -p tower -- [log_dir] [--quiet]
/// ```
fn main() -> Result<(), TowerError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = TowerConfig::from_args(&args)?;
    config.ensure_log_dir()?;

    let logger =
        Logger::new(&config.log_dir, &config.log_name)?.with_console(config.echo_to_console);
    logger.info(
        &format!("Control tower started, logging to {}", logger.log_file().display()),
        Color::Green,
    )?;

    let mut session = Session::new(logger.clone());
    let stdin = io::stdin();

    loop {
        print!("tower> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match session.execute(command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => eprintln!("{}", e),
        }
    }

    logger.info("Control tower closed", Color::Green)?;
    Ok(())
}
