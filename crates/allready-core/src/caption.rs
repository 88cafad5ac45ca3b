//! Template caption generation.
//!
//! Stands in for a real caption backend: two fixed marketing blurbs, one
//! French and one English, with the product name, price, and a hashtag
//! derived from the name substituted in.

use crate::error::ServiceError;
use crate::service::CaptionService;
use crate::types::{CaptionPair, CaptionRequest};

/// Build the product hashtag: `#` followed by the name with all
/// whitespace removed.
///
/// ```
/// assert_eq!(allready_core::caption::hashtag("Red Shoes"), "#RedShoes");
/// ```
#[must_use]
pub fn hashtag(product_name: &str) -> String {
    let mut tag = String::with_capacity(product_name.len() + 1);
    tag.push('#');
    tag.extend(product_name.split_whitespace());
    tag
}

/// Render the French caption.
#[must_use]
pub fn french(request: &CaptionRequest) -> String {
    let CaptionRequest {
        product_name,
        price,
        currency,
    } = request;
    let tag = hashtag(product_name);
    format!(
        "🌟 Découvrez {product_name} !\n\
         \n\
         ✨ Prix spécial : {price} {currency} seulement !\n\
         \n\
         🚀 Qualité premium garantie\n\
         💫 Livraison rapide disponible\n\
         🎯 Offre limitée - Ne manquez pas cette opportunité !\n\
         \n\
         {tag} #OffreSpeciale #QualitePremium"
    )
}

/// Render the English caption.
#[must_use]
pub fn english(request: &CaptionRequest) -> String {
    let CaptionRequest {
        product_name,
        price,
        currency,
    } = request;
    let tag = hashtag(product_name);
    format!(
        "🌟 Introducing {product_name}!\n\
         \n\
         ✨ Special price: Only {price} {currency}!\n\
         \n\
         🚀 Premium quality guaranteed\n\
         💫 Fast delivery available\n\
         🎯 Limited offer - Don't miss this opportunity!\n\
         \n\
         {tag} #SpecialOffer #PremiumQuality"
    )
}

/// Caption backend that renders the fixed templates immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCaptions;

impl TemplateCaptions {
    /// Render both captions for `request`.
    #[must_use]
    pub fn render(request: &CaptionRequest) -> CaptionPair {
        CaptionPair {
            french: french(request),
            english: english(request),
        }
    }
}

impl CaptionService for TemplateCaptions {
    async fn generate(&self, request: CaptionRequest) -> Result<CaptionPair, ServiceError> {
        Ok(Self::render(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, price: &str) -> CaptionRequest {
        CaptionRequest {
            product_name: name.into(),
            price: price.into(),
            currency: "FCFA".into(),
        }
    }

    #[test]
    fn hashtag_strips_all_whitespace() {
        assert_eq!(hashtag("Red Shoes"), "#RedShoes");
        assert_eq!(hashtag("  Big\tBlue \n Bag "), "#BigBlueBag");
        assert_eq!(hashtag("Lamp"), "#Lamp");
    }

    #[test]
    fn french_caption_embeds_product_fields() {
        let text = french(&request("Red Shoes", "15000"));
        assert!(text.starts_with("🌟 Découvrez Red Shoes !"));
        assert!(text.contains("Prix spécial : 15000 FCFA seulement !"));
        assert!(text.ends_with("#RedShoes #OffreSpeciale #QualitePremium"));
    }

    #[test]
    fn english_caption_embeds_product_fields() {
        let text = english(&request("Red Shoes", "15000"));
        assert!(text.starts_with("🌟 Introducing Red Shoes!"));
        assert!(text.contains("Special price: Only 15000 FCFA!"));
        assert!(text.ends_with("#RedShoes #SpecialOffer #PremiumQuality"));
    }

    #[test]
    fn captions_are_multi_line_with_blank_separators() {
        let text = english(&request("Lamp", "10"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], "");
        assert_eq!(lines[3], "");
        assert_eq!(lines[7], "");
        // Continuation escapes must not leave indentation behind.
        assert!(lines.iter().all(|l| !l.starts_with(' ')));
    }

    #[test]
    fn currency_is_configurable() {
        let mut req = request("Lamp", "9.99");
        req.currency = "EUR".into();
        let pair = TemplateCaptions::render(&req);
        assert!(pair.french.contains("9.99 EUR"));
        assert!(pair.english.contains("9.99 EUR"));
    }
}
