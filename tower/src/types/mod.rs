/// Name of the log file written by the console, without extension.
const LOG_NAME: &str = "tower";

pub mod command;

pub mod config;

pub mod session;

pub mod test_data;

pub mod tower_error;
