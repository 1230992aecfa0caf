//! Remote read-only dataset.

use contracts::domain::a001_game_card::aggregate::CatalogEntry;
use gloo_net::http::Request;

/// Decode a remote body.
///
/// The body must be a JSON array, otherwise the whole load fails. Inside the
/// array, records that do not decode as a `CatalogEntry` are dropped one by
/// one and logged.
pub fn parse_remote(body: &str) -> Result<Vec<CatalogEntry>, String> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| format!("Expected a JSON array: {}", e))?;

    let mut entries = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<CatalogEntry>(record) {
            Ok(entry) => entries.push(entry),
            Err(e) => log::warn!("Skipping remote record {}: {}", position, e),
        }
    }
    Ok(entries)
}

/// GET the remote dataset. No retries and no caching.
pub async fn fetch_remote(url: &str) -> Result<Vec<CatalogEntry>, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    let body = response.text().await.map_err(|e| e.to_string())?;
    parse_remote(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_array_body_fails_whole_load() {
        assert!(parse_remote(r#"{"title":"x"}"#).is_err());
        assert!(parse_remote("<html>").is_err());
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let body = r#"[
            {"title":"Hades","genre":"Roguelike"},
            "just a string",
            {"title":7},
            {"title":"Celeste","extra":true}
        ]"#;
        let entries = parse_remote(body).unwrap();
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Hades", "Celeste"]);
    }
}
