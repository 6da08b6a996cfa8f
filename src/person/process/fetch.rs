use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;

use super::query;
use crate::config::Config;
use crate::error::Result;

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

#[derive(Debug, Deserialize)]
pub struct SparqlValue {
    pub value: String,
}

/// A result row. Optional variables are absent from the row entirely when unbound.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub person: SparqlValue,
    pub person_label: Option<SparqlValue>,
    pub given_name_label: Option<SparqlValue>,
    pub birth_date: SparqlValue,
    pub death_date: Option<SparqlValue>,
    pub citizenship_label: Option<SparqlValue>,
    pub sitelinks: SparqlValue,
}

#[derive(Debug, Deserialize)]
struct Results {
    bindings: Vec<Binding>,
}

#[derive(Debug, Deserialize)]
struct SparqlResponse {
    results: Results,
}

/// Runs the query with a single GET. Transport and HTTP status errors are returned as is, there
/// is no retry.
pub fn fetch(config: &Config, query: &str) -> Result<Vec<Binding>> {
    let client = Client::builder().timeout(config.timeout).build()?;
    let url = query::request_url(config, query);

    debug!("GET {}", &url);

    let body = client
        .get(&url)
        .header(USER_AGENT, &config.user_agent)
        .header(ACCEPT, SPARQL_RESULTS_JSON)
        .send()?
        .error_for_status()?
        .text()?;

    let bindings = parse_response(&body)?;
    info!("Fetched {} rows from {}", bindings.len(), &config.endpoint);

    Ok(bindings)
}

pub fn parse_response(body: &str) -> Result<Vec<Binding>> {
    let json: SparqlResponse = serde_json::from_str(body)?;
    Ok(json.results.bindings)
}
