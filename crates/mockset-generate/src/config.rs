use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable configuration for the built-in generation routines.
///
/// Every constant a routine depends on lives here and is threaded through
/// the registry at construction time, so the engine can be re-used with a
/// different locale or policy without code changes. Ranges are inclusive on
/// both ends. The alphabet must not be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorProfile {
    /// Characters `word` draws from.
    pub alphabet: String,
    /// Domain suffix appended to generated email local parts.
    pub email_domain: String,
    /// Length range of an email local part.
    pub email_local_len: (i64, i64),
    /// Candidate top-level labels for `domain_name`.
    pub top_level_domains: Vec<String>,
    /// Length range of the second-level label in `domain_name`.
    pub domain_word_len: (i64, i64),
    /// Country-code prefix for `phone_number`.
    pub phone_country_code: String,
    /// Number of subscriber digits following the country code.
    pub phone_subscriber_digits: usize,
    /// Length range of each word inside a sentence.
    pub sentence_word_len: (i64, i64),
    /// Word-count range of each sentence inside `text`.
    pub text_sentence_words: (i64, i64),
    /// Word-count range for `company_name`.
    pub company_words: (i64, i64),
    /// Length range of each company-name word.
    pub company_word_len: (i64, i64),
    pub address: AddressProfile,
    /// First day of the `date` range.
    pub date_min: NaiveDate,
    /// Last day of the `date` range.
    pub date_max: NaiveDate,
}

/// Component ranges for the `address` template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressProfile {
    pub country_len: (i64, i64),
    pub district_len: (i64, i64),
    pub city_len: (i64, i64),
    /// Word count of the titled street-phrase form.
    pub street_phrase_words: (i64, i64),
    /// Number range of the numbered street form.
    pub street_number: (i64, i64),
    pub building_number: (i64, i64),
    /// Suffixes for the numbered street form.
    pub street_kinds: Vec<String>,
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        Self {
            alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
            email_domain: "gmail.com".to_string(),
            email_local_len: (5, 12),
            top_level_domains: [
                "com", "ua", "club", "net", "org", "uk", "jp", "pl", "io", "edu", "gov", "info",
            ]
            .iter()
            .map(|tld| tld.to_string())
            .collect(),
            domain_word_len: (3, 15),
            phone_country_code: "+380".to_string(),
            phone_subscriber_digits: 9,
            sentence_word_len: (3, 10),
            text_sentence_words: (3, 10),
            company_words: (1, 5),
            company_word_len: (5, 15),
            address: AddressProfile::default(),
            date_min: NaiveDate::from_ymd_opt(1000, 1, 1).unwrap_or_default(),
            date_max: NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or_default(),
        }
    }
}

impl Default for AddressProfile {
    fn default() -> Self {
        Self {
            country_len: (3, 14),
            district_len: (5, 14),
            city_len: (5, 8),
            street_phrase_words: (1, 3),
            street_number: (1, 100),
            building_number: (1, 500),
            street_kinds: vec!["street".to_string(), "avenue".to_string()],
        }
    }
}
