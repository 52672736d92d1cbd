use std::path::Path;
use std::process;

use clap::{Arg, Command};
use log::error;

use sysguard::commands;
use sysguard::core::config::Config;
use sysguard::core::logging;

fn main() {
    let matches = Command::new("sysguard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("System health monitor - tracks CPU, memory, and disk usage against thresholds")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Configuration file path")
                .default_value("config.yaml"),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Run one monitoring cycle and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .value_name("PATH")
                .help("Write each cycle's snapshot to a JSON file"),
        )
        .get_matches();

    // A default value is always present
    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("config.yaml");

    // No monitoring starts on a missing or malformed configuration
    let config = match Config::load(Path::new(config_path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    logging::init(&config.logging);

    if let Err(e) = commands::monitor::execute(&matches, &config) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        log::logger().flush();
        process::exit(1);
    }

    log::logger().flush();
}
