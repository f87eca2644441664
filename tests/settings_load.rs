// tests/settings_load.rs
use std::fs;

use tcgp_scrape::config::{AppSettings, ScrapeOptions};
use tcgp_scrape::scrape;
use tcgp_scrape::ScrapeError;

const SETTINGS: &str = r#"{
    "collections": [
        { "name": "Genetic Apex", "code": "geneticapex", "cardCount": 2,
          "pokemonCardCount": 2, "uniqueCardCount": 2 },
        { "name": "Promo-A", "code": "promo-a", "cardCount": 1 }
    ]
}"#;

#[test]
fn load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appsettings.json");
    fs::write(&path, SETTINGS).unwrap();

    let settings = AppSettings::load(&path).unwrap();
    assert_eq!(settings.collections.len(), 2);
    assert_eq!(settings.collections[1].code, "promo-a");
    assert_eq!(settings.collections[1].pokemon_card_count, 0);
}

#[test]
fn missing_file_and_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(AppSettings::load(&missing), Err(ScrapeError::Io { .. })));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ \"collections\": [ { \"name\": 1 } ] }").unwrap();
    assert!(matches!(AppSettings::load(&bad), Err(ScrapeError::Json(_))));
}

#[test]
fn settings_drive_the_fetch_loop() {
    let settings = AppSettings::from_json(SETTINGS).unwrap();
    let opts = ScrapeOptions::default();
    let bulbasaur = include_str!("fixtures/bulbasaur.shtml");

    let mut urls = Vec::new();
    let report = scrape::run_with(
        &settings,
        &opts,
        |url| {
            urls.push(url.to_string());
            Ok(bulbasaur.to_string())
        },
        None,
    )
    .unwrap();

    assert_eq!(
        urls,
        vec![
            "https://www.serebii.net/tcgpocket/geneticapex/001.shtml",
            "https://www.serebii.net/tcgpocket/geneticapex/002.shtml",
            "https://www.serebii.net/tcgpocket/promo-a/001.shtml",
        ]
    );
    assert_eq!(report.cards.len(), 3);
    assert!(report.failed.is_empty());
}

#[test]
fn shipped_settings_parse() {
    let settings = AppSettings::from_json(include_str!("../appsettings.json")).unwrap();
    assert!(settings.collections.iter().any(|c| c.code == "geneticapex"));
    assert!(settings.page_count(|_| true) > 0);
}
