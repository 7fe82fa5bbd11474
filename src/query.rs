use serde_json::{Map, Value};

use crate::{error::Error, result::Result};

/// Filter criteria for a hadith search.
///
/// Only fields that were explicitly set are sent to the service. `language`
/// and `max_limit` carry defaults and are always sent. Extra parameters added
/// with [`param`] are merged into the request body last and may override the
/// named fields if keys collide.
///
/// [`param`]: SearchQuery::param
#[derive(Debug, Clone)]
pub struct SearchQuery {
    book: Option<String>,
    hadith_number: Option<String>,
    narrator: Option<String>,
    category: Option<String>,
    authenticity: Option<String>,
    language: String,
    max_limit: u32,
    extra: Vec<(String, Value)>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            book: None,
            hadith_number: None,
            narrator: None,
            category: None,
            authenticity: None,
            language: String::from("English"),
            max_limit: 1,
            extra: Vec::new(),
        }
    }
}

impl SearchQuery {
    /// Constructs an empty query: language `English`, one result, no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by the name of the hadith book (e.g. `Sahih al-Bukhari`).
    #[must_use]
    pub fn book(mut self, book: impl Into<String>) -> Self {
        self.book = Some(book.into());
        self
    }

    /// Filters by a specific hadith number.
    #[must_use]
    pub fn hadith_number(mut self, hadith_number: impl Into<String>) -> Self {
        self.hadith_number = Some(hadith_number.into());
        self
    }

    /// Filters by the name of the narrator.
    #[must_use]
    pub fn narrator(mut self, narrator: impl Into<String>) -> Self {
        self.narrator = Some(narrator.into());
        self
    }

    /// Filters by category or topic (e.g. prayer, fasting).
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filters by authenticity classification (e.g. `Sahih`, `Daif`).
    #[must_use]
    pub fn authenticity(mut self, authenticity: impl Into<String>) -> Self {
        self.authenticity = Some(authenticity.into());
        self
    }

    /// Sets the language of the returned hadiths. Defaults to `English`.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the maximum number of hadiths to return.
    ///
    /// Defaults to 1. The service accepts values between 1 and 500; anything
    /// outside that range makes [`search`] fail before a request is sent.
    ///
    /// [`search`]: crate::Client::search
    #[must_use]
    pub fn max_limit(mut self, max_limit: u32) -> Self {
        self.max_limit = max_limit;
        self
    }

    /// Adds an arbitrary parameter to the request body.
    ///
    /// Extra parameters are applied after the named fields, so a colliding
    /// key (e.g. `language`) replaces the named field's value.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Assembles the JSON request body, validating `max_limit` first.
    pub(crate) fn into_body(self) -> Result<Map<String, Value>> {
        if !(1..=500).contains(&self.max_limit) {
            return Err(Error::InvalidMaxLimit(self.max_limit));
        }

        let mut body = Map::new();
        if let Some(book) = self.book {
            body.insert(String::from("book"), Value::String(book));
        }
        if let Some(hadith_number) = self.hadith_number {
            body.insert(String::from("hadithNumber"), Value::String(hadith_number));
        }
        if let Some(narrator) = self.narrator {
            body.insert(String::from("narrator"), Value::String(narrator));
        }
        if let Some(category) = self.category {
            body.insert(String::from("category"), Value::String(category));
        }
        if let Some(authenticity) = self.authenticity {
            body.insert(String::from("authenticity"), Value::String(authenticity));
        }

        // language and maxLimit carry defaults, so they are always sent
        body.insert(String::from("language"), Value::String(self.language));
        body.insert(String::from("maxLimit"), Value::from(self.max_limit));

        // extras go in last and win on key collisions
        for (key, value) in self.extra {
            body.insert(key, value);
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::SearchQuery;
    use crate::error::Error;
    use serde_json::{json, Value};

    #[test]
    fn default_body_has_only_language_and_limit() {
        let body = SearchQuery::new().into_body().unwrap();
        assert_eq!(
            Value::Object(body),
            json!({ "language": "English", "maxLimit": 1 })
        );
    }

    #[test]
    fn set_fields_appear_under_their_wire_names() {
        let body = SearchQuery::new()
            .book("Sahih al-Bukhari")
            .hadith_number("1")
            .narrator("Umar")
            .category("intentions")
            .authenticity("Sahih")
            .into_body()
            .unwrap();
        assert_eq!(
            Value::Object(body),
            json!({
                "book": "Sahih al-Bukhari",
                "hadithNumber": "1",
                "narrator": "Umar",
                "category": "intentions",
                "authenticity": "Sahih",
                "language": "English",
                "maxLimit": 1
            })
        );
    }

    #[test]
    fn extra_params_override_named_fields() {
        let body = SearchQuery::new()
            .language("English")
            .param("language", "Arabic")
            .param("includeChain", true)
            .into_body()
            .unwrap();
        assert_eq!(body["language"], json!("Arabic"));
        assert_eq!(body["includeChain"], json!(true));
    }

    #[test]
    fn later_extras_override_earlier_ones() {
        let body = SearchQuery::new()
            .param("sort", "asc")
            .param("sort", "desc")
            .into_body()
            .unwrap();
        assert_eq!(body["sort"], json!("desc"));
    }

    #[test]
    fn max_limit_bounds_are_inclusive() {
        assert!(SearchQuery::new().max_limit(1).into_body().is_ok());
        assert!(SearchQuery::new().max_limit(500).into_body().is_ok());

        let low = SearchQuery::new().max_limit(0).into_body();
        assert!(matches!(low, Err(Error::InvalidMaxLimit(0))));

        let high = SearchQuery::new().max_limit(501).into_body();
        assert!(matches!(high, Err(Error::InvalidMaxLimit(501))));
    }
}
