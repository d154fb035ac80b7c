//! Extraction error taxonomy.
//!
//! Only total failure is an error here. A single odd teaser degrades to
//! sentinel field values (see [`crate::models`]); an error means the document
//! contains none of the structural markers the site profile expects, which
//! usually means the site changed its markup or served something else
//! entirely. Callers can tell the two apart.

use thiserror::Error;

/// Extraction found no usable data in the document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The listing page contained zero blocks matching the profile's
    /// listing-block class token.
    #[error("no listing blocks matched class token \"{token}\"")]
    NoListingBlocks { token: String },

    /// The article page contained neither a title element nor any content
    /// region fragment.
    #[error("document has neither an article title nor a content region")]
    NoArticleMarkers,
}
