use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;

use crate::{corpus::Corpus, error::ScrapeResult};

pub const TEXT_FILE_PREFIX: &str = "FOMC_";

/// Writes a corpus under one base directory.
pub struct CorpusStore {
    base_dir: PathBuf,
}

impl CorpusStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `<content_type>_<from_year>-<last_year>.json` holding the whole corpus.
    pub fn save_json(&self, corpus: &Corpus) -> ScrapeResult<PathBuf> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.base_dir.join(format!(
            "{}_{}-{}.json",
            corpus.content_type,
            corpus.from_year,
            corpus.last_year()
        ));
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, corpus)?;
        writer.flush()?;
        info!("Wrote {} entries to {}", corpus.entries.len(), path.display());
        Ok(path)
    }

    /// One text file per fetched article, named by meeting date. A repeated
    /// date gets a `-1`, `-2`, ... suffix. Failed entries are skipped.
    pub fn save_texts(&self, corpus: &Corpus) -> ScrapeResult<Vec<PathBuf>> {
        fs::create_dir_all(&self.base_dir)?;
        let mut used_stems = HashSet::new();
        let mut written = Vec::new();

        for entry in &corpus.entries {
            let Some(text) = entry.article.text() else {
                continue;
            };
            let date = entry.reference.meeting_date.format("%Y-%m-%d").to_string();
            let mut stem = date.clone();
            let mut suffix = 1;
            while used_stems.contains(&stem) {
                stem = format!("{date}-{suffix}");
                suffix += 1;
            }
            used_stems.insert(stem.clone());

            let path = self.base_dir.join(format!(
                "{TEXT_FILE_PREFIX}{}_{stem}.txt",
                corpus.content_type
            ));
            fs::write(&path, text)?;
            written.push(path);
        }

        info!("Wrote {} text files to {}", written.len(), self.base_dir.display());
        Ok(written)
    }
}
