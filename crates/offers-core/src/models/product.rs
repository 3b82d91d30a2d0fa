use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::spec_sheet::SpecSheet;

/// A reviewed product: one of the two entities being compared.
///
/// Field names on the wire follow the `reviews` table columns; the content
/// collection spellings are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier, unique within a catalog.
    pub id: String,
    /// Display label.
    pub title: String,
    #[serde(rename = "specs_tecnicas", alias = "specs", default)]
    pub specs: SpecSheet,
    /// Overall review score, 0 to 10. A `null` score (unparseable form input)
    /// loads as NaN and renders as the missing placeholder.
    #[serde(
        rename = "nota",
        alias = "rating",
        default,
        deserialize_with = "nullable_rating"
    )]
    pub rating: f64,
    #[serde(
        rename = "link_afiliado",
        alias = "affiliateLink",
        default,
        deserialize_with = "nullable_text"
    )]
    pub affiliate_link: String,
    #[serde(rename = "imagem_url", alias = "image", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// A product with no specs, rating 0 and no links.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            specs: SpecSheet::new(),
            rating: 0.0,
            affiliate_link: String::new(),
            image_url: None,
            created_at: None,
        }
    }

    pub fn with_specs(mut self, specs: SpecSheet) -> Self {
        self.specs = specs;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_affiliate_link(mut self, link: impl Into<String>) -> Self {
        self.affiliate_link = link.into();
        self
    }

    /// Case-insensitive substring match on the title. An empty query matches.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(&query.to_lowercase())
    }
}

fn nullable_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
