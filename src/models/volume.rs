//! External volumes wire model (Google Books API) and its mapping into
//! the local catalog model.
//!
//! Every field is optional on the wire. Mapping substitutes a fixed
//! default for each absent optional field; a missing `title` is the one
//! hard failure, since the external schema requires it, and fails the
//! whole batch.

use serde::Deserialize;

use super::book::Book;
use crate::error::{AppError, AppResult};

/// Substituted wherever the external source has no usable description.
pub const DESCRIPTION_FALLBACK: &str = "Description not available";

/// Substituted when a volume carries no industry identifier.
pub const ISBN_FALLBACK: &str = "N/A";

/// Substituted when a volume names no authors.
pub const AUTHOR_FALLBACK: &str = "Unknown";

/// Top-level volumes search response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

/// One search hit
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

/// Bibliographic sub-document of a volume
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub industry_identifiers: Option<Vec<IndustryIdentifier>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndustryIdentifier {
    pub identifier: Option<String>,
}

impl VolumesResponse {
    /// Map the response into transient catalog books, in wire order.
    ///
    /// An absent or empty `items` array maps to an empty vector, never an
    /// error. A title-less volume aborts the whole batch.
    pub fn into_books(self) -> AppResult<Vec<Book>> {
        let items = match self.items {
            Some(items) => items,
            None => return Ok(Vec::new()),
        };

        items.into_iter().map(Volume::into_book).collect()
    }

    /// Description of the first hit, if present and non-empty.
    pub fn first_description(&self) -> Option<&str> {
        self.items
            .as_deref()?
            .first()?
            .volume_info
            .as_ref()?
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
    }
}

impl Volume {
    fn into_book(self) -> AppResult<Book> {
        let info = self.volume_info.unwrap_or_default();

        let title = info
            .title
            .ok_or_else(|| AppError::Upstream("volume has no title".to_string()))?;

        let author = match info.authors {
            Some(authors) if !authors.is_empty() => authors.join(", "),
            _ => AUTHOR_FALLBACK.to_string(),
        };

        let isbn = info
            .industry_identifiers
            .and_then(|ids| ids.into_iter().next())
            .and_then(|id| id.identifier)
            .unwrap_or_else(|| ISBN_FALLBACK.to_string());

        let description = info
            .description
            .unwrap_or_else(|| DESCRIPTION_FALLBACK.to_string());

        Ok(Book {
            id: None,
            title,
            author,
            isbn,
            description: Some(description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> VolumesResponse {
        serde_json::from_str(json).expect("valid volumes JSON")
    }

    #[test]
    fn test_no_items_maps_to_empty() {
        let books = parse(r#"{}"#).into_books().unwrap();
        assert!(books.is_empty());

        let books = parse(r#"{"items": []}"#).into_books().unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_full_volume() {
        let response = parse(
            r#"{"items": [{"volumeInfo": {
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "industryIdentifiers": [{"type": "ISBN_13", "identifier": "9780441013593"}],
                "description": "A desert planet."
            }}]}"#,
        );

        let books = response.into_books().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, None);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].author, "Frank Herbert");
        assert_eq!(books[0].isbn, "9780441013593");
        assert_eq!(books[0].description.as_deref(), Some("A desert planet."));
    }

    #[test]
    fn test_authors_joined() {
        let response = parse(
            r#"{"items": [{"volumeInfo": {
                "title": "Good Omens",
                "authors": ["Terry Pratchett", "Neil Gaiman"]
            }}]}"#,
        );

        let books = response.into_books().unwrap();
        assert_eq!(books[0].author, "Terry Pratchett, Neil Gaiman");
    }

    #[test]
    fn test_missing_optional_fields_substituted() {
        let response = parse(r#"{"items": [{"volumeInfo": {"title": "Anon"}}]}"#);

        let books = response.into_books().unwrap();
        assert_eq!(books[0].author, AUTHOR_FALLBACK);
        assert_eq!(books[0].isbn, ISBN_FALLBACK);
        assert_eq!(books[0].description.as_deref(), Some(DESCRIPTION_FALLBACK));
    }

    #[test]
    fn test_missing_title_fails_batch() {
        let response = parse(
            r#"{"items": [
                {"volumeInfo": {"title": "Dune"}},
                {"volumeInfo": {"authors": ["Nobody"]}}
            ]}"#,
        );

        assert!(response.into_books().is_err());
    }

    #[test]
    fn test_missing_volume_info_fails_batch() {
        let response = parse(r#"{"items": [{}]}"#);
        assert!(response.into_books().is_err());
    }

    #[test]
    fn test_first_description() {
        let response = parse(
            r#"{"items": [{"volumeInfo": {"title": "Dune", "description": "A desert planet."}}]}"#,
        );
        assert_eq!(response.first_description(), Some("A desert planet."));
    }

    #[test]
    fn test_first_description_absent_or_empty() {
        assert_eq!(parse(r#"{}"#).first_description(), None);
        assert_eq!(parse(r#"{"items": []}"#).first_description(), None);
        assert_eq!(parse(r#"{"items": [{}]}"#).first_description(), None);
        assert_eq!(
            parse(r#"{"items": [{"volumeInfo": {"title": "Dune"}}]}"#).first_description(),
            None
        );
        assert_eq!(
            parse(r#"{"items": [{"volumeInfo": {"title": "Dune", "description": ""}}]}"#)
                .first_description(),
            None
        );
        assert_eq!(
            parse(r#"{"items": [{"volumeInfo": {"title": "Dune", "description": null}}]}"#)
                .first_description(),
            None
        );
    }
}
