use crate::config::Config;

/// Renders the SPARQL query selecting humans in the configured category with a known birth date.
///
/// Rows come back ordered by sitelinks and capped at `row_limit`; that is only a pre-filter,
/// the final ranking is done after aggregation.
pub fn build(config: &Config) -> String {
    format!(
        r#"SELECT ?person ?personLabel ?givenNameLabel ?birthDate ?deathDate ?citizenshipLabel ?sitelinks WHERE {{
  ?person wdt:P31 wd:Q5 ;
          wdt:{category_prop} wd:{category_value} ;
          wdt:P569 ?birthDate ;
          wikibase:sitelinks ?sitelinks .
  OPTIONAL {{ ?person wdt:P570 ?deathDate . }}
  OPTIONAL {{ ?person wdt:P735 ?givenName . }}
  OPTIONAL {{ ?person wdt:P27  ?citizenship . }}
  SERVICE wikibase:label {{ bd:serviceParam wikibase:language "{languages}". }}
}}
ORDER BY DESC(?sitelinks)
LIMIT {row_limit}
"#,
        category_prop = config.category_prop,
        category_value = config.category_value,
        languages = config.languages,
        row_limit = config.row_limit,
    )
}

pub fn request_url(config: &Config, query: &str) -> String {
    format!(
        "{}?format=json&query={}",
        config.endpoint,
        urlencoding::encode(query)
    )
}
