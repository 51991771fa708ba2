use reqwest::Client;

use casefile_core::csv::parse_csv_row;
use casefile_core::model::{EntryId, SourceUrl, VocabularyEntry};

use crate::error::VocabularyError;

/// Fetches the published vocabulary sheet and turns it into entries.
///
/// The sheet is plain CSV with a header row and one row per word:
/// `word,image_url,description`. Rows with an empty word cell are
/// skipped, as are blank lines.
#[derive(Clone)]
pub struct VocabularyService {
    client: Client,
    source: Option<SourceUrl>,
}

impl VocabularyService {
    #[must_use]
    pub fn new(source: Option<SourceUrl>) -> Self {
        Self {
            client: Client::new(),
            source,
        }
    }

    #[must_use]
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Download and parse the full vocabulary pool.
    ///
    /// # Errors
    ///
    /// Returns `VocabularyError::MissingSource` when no sheet URL was
    /// configured, and `VocabularyError::Http`/`HttpStatus` for transport
    /// failures.
    pub async fn load(&self) -> Result<Vec<VocabularyEntry>, VocabularyError> {
        let source = self.source.as_ref().ok_or(VocabularyError::MissingSource)?;

        let response = self.client.get(source.as_str()).send().await?;
        if !response.status().is_success() {
            return Err(VocabularyError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        Ok(parse_sheet(&body))
    }
}

/// Parses the raw CSV body of a published sheet.
///
/// The first line is treated as a header and dropped. Entry ids are the
/// row's position in the sheet, assigned before the empty-word rows are
/// discarded, so a skipped row leaves a gap and the surviving ids stay
/// stable when someone blanks a row mid-sheet.
#[must_use]
pub fn parse_sheet(body: &str) -> Vec<VocabularyEntry> {
    body.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_csv_row)
        .enumerate()
        .filter(|(_, fields)| fields.first().is_some_and(|word| !word.is_empty()))
        .map(|(index, fields)| {
            let mut fields = fields.into_iter();
            let word = fields.next().unwrap_or_default();
            let image_url = fields.next().unwrap_or_default();
            let description = fields.next().unwrap_or_default();
            VocabularyEntry::new(EntryId::new(index as u64), word, image_url, description)
        })
        .collect()
}
