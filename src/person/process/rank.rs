use chrono::{Datelike, NaiveDate};
use log::info;
use std::cmp::Ordering;

use super::aggregate::Subject;
use crate::config::Config;
use crate::person::Person;

/// Whole years from `birth` to `reference`, not counting a year whose anniversary hasn't come yet.
pub fn age(birth: NaiveDate, reference: NaiveDate) -> i32 {
    let mut years = reference.year() - birth.year();

    if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    years
}

/// The given name if known, otherwise the first word of the full name.
pub fn alias(given_name: &str, name: &str) -> String {
    if !given_name.is_empty() {
        return given_name.to_string();
    }

    name.split_whitespace().next().unwrap_or("").to_string()
}

pub fn country(citizenship: &str, unknown: &str) -> String {
    if citizenship.is_empty() {
        unknown.to_string()
    } else {
        citizenship.to_string()
    }
}

// Most popular first, ties broken by id so the output doesn't depend on map order.
fn by_popularity(a: &Subject, b: &Subject) -> Ordering {
    b.popularity
        .cmp(&a.popularity)
        .then_with(|| a.id.cmp(&b.id))
}

pub fn rank(mut subjects: Vec<Subject>, config: &Config) -> Vec<Person> {
    subjects.sort_by(by_popularity);
    subjects.truncate(config.output_limit);

    let people: Vec<Person> = subjects
        .into_iter()
        .enumerate()
        .map(|(i, subject)| Person {
            id: (i + 1).to_string(),
            aliases: vec![alias(&subject.given_name, &subject.name)],
            image: None,
            age: age(subject.birth, subject.death.unwrap_or(config.today)),
            handsome: 0,
            popularity: subject.popularity,
            tez: 0,
            country: country(&subject.citizenship, &config.unknown_country),
            name: subject.name,
        })
        .collect();

    info!("Ranked {} people", people.len());

    people
}
