//! Core types for the product form and caption workflow.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::image_ref::ImageRef;

/// The product fields entered on the form.
///
/// `price` only ever holds numeric-filtered text; see
/// [`filter_price`](crate::filter_price).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Product name as typed.
    pub name: String,
    /// Price as typed, digits and `.` only.
    pub price: String,
    /// Optional product image.
    pub image: Option<ImageRef>,
}

impl ProductDraft {
    /// Whether both required fields are non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.trim().is_empty()
    }
}

/// Caption language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// French caption.
    French,
    /// English caption.
    English,
}

impl Language {
    /// Both languages in display order.
    pub const ALL: [Self; 2] = [Self::French, Self::English];

    /// Heading shown above the caption.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::French => "French Caption",
            Self::English => "English Caption",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::French => "French",
            Self::English => "English",
        })
    }
}

/// A French/English caption pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionPair {
    /// French caption text.
    pub french: String,
    /// English caption text.
    pub english: String,
}

impl CaptionPair {
    /// Caption text for `language`.
    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::French => &self.french,
            Language::English => &self.english,
        }
    }

    /// Replace the caption text for `language`.
    pub fn set(&mut self, language: Language, text: String) {
        match language {
            Language::French => self.french = text,
            Language::English => self.english = text,
        }
    }

    /// Whether both captions contain something other than whitespace.
    #[must_use]
    pub fn is_sendable(&self) -> bool {
        !self.french.trim().is_empty() && !self.english.trim().is_empty()
    }
}

/// Input handed to a [`CaptionService`](crate::CaptionService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRequest {
    /// Product name, trimmed.
    pub product_name: String,
    /// Price text, trimmed.
    pub price: String,
    /// Currency suffix for the price (e.g. `FCFA`).
    pub currency: String,
}

/// Payload handed to a [`DispatchService`](crate::DispatchService).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Product name, trimmed.
    pub product_name: String,
    /// Price text, trimmed.
    pub price: String,
    /// Currency suffix for the price.
    pub currency: String,
    /// Reviewed captions.
    pub captions: CaptionPair,
    /// Attached image, if any.
    pub image: Option<ImageRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_name_and_price() {
        let mut draft = ProductDraft::default();
        assert!(!draft.is_complete());

        draft.name = "  Red Shoes ".into();
        assert!(!draft.is_complete());

        draft.price = "   ".into();
        assert!(!draft.is_complete(), "whitespace-only price is blank");

        draft.price = "15000".into();
        assert!(draft.is_complete());
    }

    #[test]
    fn caption_pair_get_and_set_by_language() {
        let mut pair = CaptionPair::default();
        pair.set(Language::French, "bonjour".into());
        pair.set(Language::English, "hello".into());
        assert_eq!(pair.get(Language::French), "bonjour");
        assert_eq!(pair.get(Language::English), "hello");
    }

    #[test]
    fn sendable_needs_both_captions() {
        let mut pair = CaptionPair {
            french: "texte".into(),
            english: " \n ".into(),
        };
        assert!(!pair.is_sendable());
        pair.english = "text".into();
        assert!(pair.is_sendable());
    }
}
