use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

pub mod process;

/// One entry of the generated dataset.
#[derive(Debug, Serialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub image: Option<String>,
    pub age: i32,
    // Curated by hand later, always zero here.
    pub handsome: u32,
    pub popularity: u64,
    pub tez: u32,
    pub country: String,
}

/// Writes the records as a pretty-printed JSON array (two space indent, non-ASCII kept as is).
pub fn write_people(people: &[Person], path: &Path) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, people).map_err(|err| io_err(err.into()))?;
    writer.flush().map_err(io_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn person(id: &str, name: &str, country: &str) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            aliases: vec![name.split_whitespace().next().unwrap_or("").to_string()],
            image: None,
            age: 42,
            handsome: 0,
            popularity: 120,
            tez: 0,
            country: country.to_string(),
        }
    }

    #[test]
    fn test_person_json_shape() {
        let value = serde_json::to_value(person("1", "Marie Curie", "Polonia")).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "name": "Marie Curie",
                "aliases": ["Marie"],
                "image": null,
                "age": 42,
                "handsome": 0,
                "popularity": 120,
                "tez": 0,
                "country": "Polonia"
            })
        );
    }

    #[test]
    fn test_write_people_keeps_non_ascii_and_indents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("people.json");
        let people = vec![
            person("1", "Celia Cruz", "Cuba"),
            person("2", "José Martí", "Desconocida"),
        ];

        write_people(&people, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("José Martí"));
        assert!(!contents.contains("\\u"));
        assert!(contents.starts_with("[\n  {\n    \"id\": \"1\""));

        let parsed: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["id"], "2");
    }

    #[test]
    fn test_write_people_reports_path_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("people.json");

        let err = write_people(&[], &path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("people.json"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_people_full_disk_is_io_error() {
        let people: Vec<Person> = (1..=100)
            .map(|i| person(&i.to_string(), "Celia Cruz", "Cuba"))
            .collect();

        let err = write_people(&people, Path::new("/dev/full")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/dev/full"));
    }
}
