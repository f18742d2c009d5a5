use std::fs;

use chrono::NaiveDate;
use fomc_minutes::{
    ArticleOutcome, Corpus, CorpusEntry, CorpusStore, DocumentReference, MINUTES_TITLE,
};

fn entry(link: &str, date: NaiveDate, article: ArticleOutcome) -> CorpusEntry {
    CorpusEntry {
        reference: DocumentReference {
            link: link.to_string(),
            title: MINUTES_TITLE.to_string(),
            speaker: "Alan Greenspan".to_string(),
            meeting_date: date,
            release_date: None,
        },
        article,
    }
}

fn sample_corpus() -> Corpus {
    let date = NaiveDate::from_ymd_opt(1996, 1, 31).unwrap();
    let later = NaiveDate::from_ymd_opt(1996, 3, 26).unwrap();
    Corpus {
        content_type: "minutes".to_string(),
        from_year: 1996,
        entries: vec![
            entry("/a.htm", date, ArticleOutcome::Fetched { text: "first".to_string() }),
            entry("/b.htm", date, ArticleOutcome::Fetched { text: "second".to_string() }),
            entry("/c.htm", later, ArticleOutcome::Failed { reason: "timeout".to_string() }),
            entry("/d.htm", date, ArticleOutcome::Fetched { text: "third".to_string() }),
        ],
        release_dates: vec![NaiveDate::from_ymd_opt(1996, 3, 28).unwrap()],
    }
}

#[test]
fn texts_are_named_by_date_with_suffixes_for_repeats() {
    let temp = tempfile::tempdir().unwrap();
    let store = CorpusStore::new(temp.path().join("FOMC"));

    let written = store.save_texts(&sample_corpus()).unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "FOMC_minutes_1996-01-31.txt",
            "FOMC_minutes_1996-01-31-1.txt",
            "FOMC_minutes_1996-01-31-2.txt",
        ]
    );
    assert_eq!(fs::read_to_string(&written[1]).unwrap(), "second");
    assert!(store.base_dir().is_dir());
}

#[test]
fn json_snapshot_reloads_to_the_same_corpus() {
    let temp = tempfile::tempdir().unwrap();
    let store = CorpusStore::new(temp.path());
    let corpus = sample_corpus();

    let path = store.save_json(&corpus).unwrap();

    assert_eq!(path.file_name().unwrap(), "minutes_1996-1996.json");
    let reloaded: Corpus = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded, corpus);
}
