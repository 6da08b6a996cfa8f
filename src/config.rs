use chrono::NaiveDate;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";
const DEFAULT_USER_AGENT: &str = "json-people-generator/1.0 (contact: example@example.com)";
const DEFAULT_TODAY: NaiveDate = match NaiveDate::from_ymd_opt(2026, 2, 25) {
    Some(date) => date,
    None => panic!("invalid default date"),
};

/// Everything the pipeline needs, built once in `main` and passed down by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Property linking a person to the category, e.g. `P172` (ethnic group).
    pub category_prop: String,
    /// Item the category property must point at.
    pub category_value: String,
    /// Label languages in order of preference.
    pub languages: String,
    /// Rows requested from the endpoint. A pre-filter only, ranking happens locally.
    pub row_limit: usize,
    /// Records written to the output file.
    pub output_limit: usize,
    /// Reference date for the age of living people. Fixed so output is reproducible.
    pub today: NaiveDate,
    pub unknown_country: String,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(60),
            category_prop: "P172".to_string(),
            category_value: "Q817393".to_string(),
            languages: "es,en".to_string(),
            row_limit: 200,
            output_limit: 100,
            today: DEFAULT_TODAY,
            unknown_country: "Desconocida".to_string(),
            output_path: PathBuf::from("people_100.json"),
        }
    }
}
