use crate::model::ids::EntryId;

/// One vocabulary row from the published sheet: the word to learn, the
/// evidence image shown in stage 1, and the report text read in stage 2.
///
/// Entries are immutable once loaded and live for one signed-in session;
/// the loader rebuilds the pool (with fresh sequential ids) on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    id: EntryId,
    word: String,
    image_url: String,
    description: String,
}

impl VocabularyEntry {
    #[must_use]
    pub fn new(
        id: EntryId,
        word: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            word: word.into(),
            image_url: image_url.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_exposes_fields() {
        let entry = VocabularyEntry::new(EntryId::new(3), "fox", "fox.png", "a quick fox");
        assert_eq!(entry.id(), EntryId::new(3));
        assert_eq!(entry.word(), "fox");
        assert_eq!(entry.image_url(), "fox.png");
        assert_eq!(entry.description(), "a quick fox");
    }
}
