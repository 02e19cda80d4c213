//! Adapter layer: Convert MusicBrainz search DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! The API's own relevance ranking is trusted: the first recording and its
//! first release win, with no re-ranking on our side.

use super::dto;
use crate::domain::CatalogRecord;

/// Convert a search response into a catalog record.
///
/// An empty `recordings` list, a recording without releases, or a release
/// without a date all yield empty fields rather than errors.
pub fn to_catalog_record(response: dto::SearchResponse) -> CatalogRecord {
    let Some(release) = response
        .recordings
        .into_iter()
        .next()
        .and_then(|rec| rec.releases.into_iter().next())
    else {
        return CatalogRecord::default();
    };

    CatalogRecord {
        year: release.date.as_deref().map(year_prefix).unwrap_or_default(),
        album: release.title,
    }
}

/// Extract the 4-digit year prefix of a release date, empty when the date
/// is too short.
fn year_prefix(date: &str) -> String {
    date.get(..4).unwrap_or_default().to_string()
}
