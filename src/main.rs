use log::{error, info};
use person::process::process_people;
use std::process;

extern crate log;
extern crate pretty_env_logger;

mod config;
mod error;
mod person;

use config::Config;

fn run(config: &Config) -> error::Result<usize> {
    let people = process_people(config)?;

    person::write_people(&people, &config.output_path)?;
    info!(
        "Wrote {} people to {}",
        people.len(),
        config.output_path.display()
    );

    Ok(people.len())
}

fn main() {
    pretty_env_logger::init();

    let config = Config::default();

    match run(&config) {
        Ok(count) => println!(
            "OK -> {} generado con {} personas",
            config.output_path.display(),
            count
        ),
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
