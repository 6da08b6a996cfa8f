use log::debug;

use crate::config::Config;
use crate::error::Result;
use crate::person::Person;

pub mod aggregate;
pub mod fetch;
pub mod query;
pub mod rank;

#[cfg(test)]
mod test_server;

/// Queries Wikidata and turns the rows into the ranked people list.
pub fn process_people(config: &Config) -> Result<Vec<Person>> {
    let query = query::build(config);
    debug!("SPARQL query:\n{}", &query);

    let bindings = fetch::fetch(config, &query)?;
    let subjects = aggregate::aggregate(bindings)?;

    Ok(rank::rank(subjects, config))
}
