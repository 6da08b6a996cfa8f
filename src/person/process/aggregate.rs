use chrono::{DateTime, NaiveDate};
use log::{debug, info};
use std::collections::HashMap;
use std::convert::TryFrom;

use super::fetch::{Binding, SparqlValue};
use crate::error::{Error, Result};

/// A person deduplicated across every row sharing its Wikidata id.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub given_name: String,
    pub birth: NaiveDate,
    pub death: Option<NaiveDate>,
    pub citizenship: String,
    pub popularity: u64,
}

/// A single result row with its values parsed.
#[derive(Debug, Clone)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub given_name: String,
    pub birth: NaiveDate,
    pub death: Option<NaiveDate>,
    pub citizenship: String,
    pub sitelinks: u64,
}

fn id_from_uri(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}

fn label(value: Option<SparqlValue>) -> String {
    value.map(|v| v.value.trim().to_string()).unwrap_or_default()
}

/// Parses a WDQS timestamp like `1961-08-04T00:00:00Z` into its calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .map(|date_time| date_time.date_naive())
        .map_err(|source| Error::Date {
            value: value.to_string(),
            source,
        })
}

impl TryFrom<Binding> for Row {
    type Error = Error;

    fn try_from(binding: Binding) -> Result<Self> {
        let id = id_from_uri(&binding.person.value).to_string();
        let birth = parse_date(&binding.birth_date.value)?;
        let death = match &binding.death_date {
            Some(death) if !death.value.is_empty() => Some(parse_date(&death.value)?),
            _ => None,
        };
        let sitelinks = binding
            .sitelinks
            .value
            .trim()
            .parse::<u64>()
            .map_err(|source| Error::Sitelinks {
                value: binding.sitelinks.value.clone(),
                source,
            })?;

        Ok(Row {
            id,
            name: label(binding.person_label),
            given_name: label(binding.given_name_label),
            birth,
            death,
            citizenship: label(binding.citizenship_label),
            sitelinks,
        })
    }
}

#[derive(Default)]
pub struct Aggregator {
    subjects: HashMap<String, Subject>,
    merged: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row, merging it into an existing subject with the same id.
    ///
    /// Popularity keeps the maximum seen. Given name, citizenship and death date are only filled
    /// in when still empty, a value once set is never replaced.
    pub fn insert(&mut self, row: Row) {
        match self.subjects.get_mut(&row.id) {
            None => {
                self.subjects.insert(
                    row.id.clone(),
                    Subject {
                        id: row.id,
                        name: row.name,
                        given_name: row.given_name,
                        birth: row.birth,
                        death: row.death,
                        citizenship: row.citizenship,
                        popularity: row.sitelinks,
                    },
                );
            }
            Some(subject) => {
                debug!("Merging duplicate row for {}", &subject.id);
                self.merged += 1;

                subject.popularity = subject.popularity.max(row.sitelinks);
                if subject.given_name.is_empty() && !row.given_name.is_empty() {
                    subject.given_name = row.given_name;
                }
                if subject.citizenship.is_empty() && !row.citizenship.is_empty() {
                    subject.citizenship = row.citizenship;
                }
                if subject.death.is_none() && row.death.is_some() {
                    subject.death = row.death;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn merged(&self) -> usize {
        self.merged
    }

    pub fn into_subjects(self) -> Vec<Subject> {
        self.subjects.into_iter().map(|(_, subject)| subject).collect()
    }
}

pub fn aggregate(bindings: Vec<Binding>) -> Result<Vec<Subject>> {
    let mut aggregator = Aggregator::new();

    for binding in bindings {
        aggregator.insert(Row::try_from(binding)?);
    }

    info!(
        "Aggregated {} subjects ({} duplicate rows merged)",
        aggregator.len(),
        aggregator.merged()
    );

    Ok(aggregator.into_subjects())
}
