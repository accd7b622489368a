use std::path::PathBuf;

use vocab_data::{Source, TopicSet};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("topics.json")
}

#[test]
fn embedded_asset_has_all_topics_in_order() {
    let set = TopicSet::embedded().expect("embedded topics");
    assert_eq!(set.len(), 50);
    assert_eq!(set.topics()[0].name, "Contracts");
    assert_eq!(set.topics()[1].name, "Marketing");
    assert_eq!(set.topics()[49].name, "Pharmacy");
    assert_eq!(set.row_count(), 603);
    assert_eq!(set.misaligned().count(), 0);
}

#[test]
fn embedded_asset_keeps_raw_text() {
    let set = TopicSet::embedded().expect("embedded topics");
    let contracts = set.topic("Contracts").expect("contracts topic");
    assert_eq!(contracts.words[0], "agreement (n)");
    assert_eq!(contracts.pronounce[0], "/ə'gri.mənt/");
    assert_eq!(contracts.meaning[0], "một thỏa thuận chung, một hợp đồng");

    let trains = set.topic("Trains").expect("trains topic");
    assert!(trains.words.iter().any(|w| w == "high-speed"));

    let dentist = set.topic("Dentist's Office").expect("dentist topic");
    assert_eq!(dentist.words.iter().filter(|w| *w == "implant").count(), 3);
}

#[test]
fn loads_topics_from_file() {
    let set = TopicSet::load(fixture_path()).expect("load fixture");
    assert_eq!(set.len(), 2);
    let names: Vec<_> = set.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Banking", "Hotels"]);

    let misaligned: Vec<_> = set.misaligned().map(|t| t.name.as_str()).collect();
    assert_eq!(misaligned, vec!["Hotels"]);
    assert_eq!(set.row_count(), 6);
}

#[test]
fn source_selects_backing() {
    let from_file = TopicSet::load_from(&Source::File(fixture_path())).expect("file source");
    assert_eq!(from_file.len(), 2);
    let embedded = TopicSet::load_from(&Source::Embedded).expect("embedded source");
    assert_eq!(embedded.len(), 50);
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = TopicSet::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, b"{\"name\": \"not an array\"}").unwrap();
    let err = TopicSet::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parse topic file"));
}
