use serde::{Deserialize, Serialize};

/// A single hadith record returned by the service.
///
/// Constructed only by decoding one record object from a search response;
/// immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hadith {
    /// Name of the book the hadith belongs to (e.g. `Sahih al-Bukhari`).
    book: String,

    /// The hadith's number within its book.
    hadith_number: String,

    /// Name of the narrator.
    narrator: String,

    /// Category or topic of the hadith (e.g. prayer, fasting).
    category: String,

    /// Authenticity classification (e.g. `Sahih`, `Daif`).
    authenticity: String,

    /// Language the text is in.
    language: String,

    /// The text body of the hadith.
    text: String,
}

impl Hadith {
    /// Returns the name of the book the hadith belongs to.
    pub fn book(&self) -> &str {
        &self.book
    }

    /// Returns the hadith's number within its book.
    pub fn hadith_number(&self) -> &str {
        &self.hadith_number
    }

    /// Returns the name of the narrator.
    pub fn narrator(&self) -> &str {
        &self.narrator
    }

    /// Returns the category or topic of the hadith.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the authenticity classification of the hadith.
    pub fn authenticity(&self) -> &str {
        &self.authenticity
    }

    /// Returns the language the text is in.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the text body of the hadith.
    pub fn text(&self) -> &str {
        &self.text
    }
}
