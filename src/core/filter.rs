use crate::core::{catalogue::ProjectRecord, i18n::Translation};

/// Maximum number of entries in the autocomplete list.
pub const AUTOCOMPLETE_LIMIT: usize = 5;

/// Case-insensitive substring search over the localized catalogue.
///
/// Results always keep catalogue order; there is no ranking.
#[derive(Debug, Clone, Copy)]
pub struct FilterEngine<'a> {
    records: &'a [ProjectRecord],
    translation: &'a Translation,
}

impl<'a> FilterEngine<'a> {
    pub fn new(records: &'a [ProjectRecord], translation: &'a Translation) -> Self {
        Self {
            records,
            translation,
        }
    }

    /// Records whose title or description contains `query`. An empty query
    /// keeps the whole catalogue.
    pub fn filter(&self, query: &str) -> Vec<&'a ProjectRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                let details = self.translation.project(record.content_key);
                details.title.to_lowercase().contains(&needle)
                    || details.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Title-only suggestions for a non-empty query.
    pub fn autocomplete(&self, query: &str) -> Vec<&'a ProjectRecord> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                self.translation
                    .project(record.content_key)
                    .title
                    .to_lowercase()
                    .contains(&needle)
            })
            .take(AUTOCOMPLETE_LIMIT)
            .collect()
    }
}
