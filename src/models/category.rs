use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Gutshof gin editions the assistant can resolve an utterance to.
///
/// Variants are declared in matching priority order; keyword tables are
/// iterated in the same order when two editions could both match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Rotkaeppchen,
    Froschkoenig,
    Aschenputtel,
    Sterntaler,
    Classic,
    Limetta,
    Mandarina,
    Rosata,
}

impl Category {
    /// Storefront display title, used for product search and headings.
    pub fn title(self) -> &'static str {
        match self {
            Category::Rotkaeppchen => "Rotkäppchen",
            Category::Froschkoenig => "Froschkönig",
            Category::Aschenputtel => "Aschenputtel",
            Category::Sterntaler => "Sterntaler",
            Category::Classic => "Classic",
            Category::Limetta => "Limetta",
            Category::Mandarina => "Mandarina",
            Category::Rosata => "Rosata",
        }
    }
}
