//! The built-in generation routines.
//!
//! All routines share one of three calling conventions (plain, bounded,
//! source-driven) so the registry can hold them as typed function pointers.
//! Bound arguments are inclusive on both ends and pre-validated by the
//! caller; no routine returns an empty string for a legal input. Source
//! lists are non-empty by the resolver contract.

use chrono::Duration;
use rand::Rng;
use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::config::GeneratorProfile;

/// Random lowercase-ish word from the profile alphabet, length in
/// `[minimal, maximal]`.
pub fn word(profile: &GeneratorProfile, minimal: i64, maximal: i64, rng: &mut dyn RngCore) -> String {
    let length = rng.random_range(minimal..=maximal).max(0) as usize;
    let alphabet = profile.alphabet.as_bytes();
    (0..length)
        .map(|_| char::from(*alphabet.choose(rng).unwrap_or(&b'a')))
        .collect()
}

/// `minimal..=maximal` words joined by single spaces, capitalized at
/// position 0 and terminated with a period.
pub fn sentence(
    profile: &GeneratorProfile,
    minimal: i64,
    maximal: i64,
    rng: &mut dyn RngCore,
) -> String {
    let (word_min, word_max) = profile.sentence_word_len;
    let count = rng.random_range(minimal..=maximal).max(0) as usize;
    let words: Vec<String> = (0..count)
        .map(|_| word(profile, word_min, word_max, rng))
        .collect();
    let mut sentence = capitalize(&words.join(" "));
    sentence.push('.');
    sentence
}

/// Uniform random integer in `[minimal, maximal]` rendered as decimal text.
pub fn integer(
    _profile: &GeneratorProfile,
    minimal: i64,
    maximal: i64,
    rng: &mut dyn RngCore,
) -> String {
    rng.random_range(minimal..=maximal).to_string()
}

/// `minimal..=maximal` sentences joined by single spaces.
pub fn text(profile: &GeneratorProfile, minimal: i64, maximal: i64, rng: &mut dyn RngCore) -> String {
    let (sentence_min, sentence_max) = profile.text_sentence_words;
    let count = rng.random_range(minimal..=maximal).max(0) as usize;
    (0..count)
        .map(|_| sentence(profile, sentence_min, sentence_max, rng))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One pick from each of the first-name and last-name lists, space-joined.
pub fn full_name(
    _profile: &GeneratorProfile,
    lists: &[Vec<String>],
    rng: &mut dyn RngCore,
) -> String {
    let first = lists.first().map(|values| pick(values, rng)).unwrap_or_default();
    let last = lists.get(1).map(|values| pick(values, rng)).unwrap_or_default();
    format!("{first} {last}")
}

/// One pick from the jobs list.
pub fn job(_profile: &GeneratorProfile, lists: &[Vec<String>], rng: &mut dyn RngCore) -> String {
    lists
        .first()
        .map(|values| pick(values, rng))
        .unwrap_or_default()
        .to_string()
}

/// Random local part joined to the configured domain suffix.
pub fn email(profile: &GeneratorProfile, rng: &mut dyn RngCore) -> String {
    let (min, max) = profile.email_local_len;
    let local = word(profile, min, max, rng);
    format!("{local}@{}", profile.email_domain)
}

/// Random second-level label under a configured top-level label.
pub fn domain_name(profile: &GeneratorProfile, rng: &mut dyn RngCore) -> String {
    let (min, max) = profile.domain_word_len;
    let second_level = word(profile, min, max, rng);
    let top_level = pick(&profile.top_level_domains, rng);
    format!("{second_level}.{top_level}")
}

/// Country-code prefix followed by the configured number of random digits.
pub fn phone_number(profile: &GeneratorProfile, rng: &mut dyn RngCore) -> String {
    let digits: String = (0..profile.phone_subscriber_digits)
        .map(|_| char::from(b'0' + rng.random_range(0..10) as u8))
        .collect();
    format!("{}{digits}", profile.phone_country_code)
}

/// 1..=5 random words, upper-cased, space-joined.
pub fn company_name(profile: &GeneratorProfile, rng: &mut dyn RngCore) -> String {
    let (count_min, count_max) = profile.company_words;
    let (len_min, len_max) = profile.company_word_len;
    let count = rng.random_range(count_min..=count_max).max(1) as usize;
    (0..count)
        .map(|_| word(profile, len_min, len_max, rng).to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Composite address in the fixed textual template
/// `{country}, district {district}, city {city}, street {street},
/// building {building}`.
pub fn address(profile: &GeneratorProfile, rng: &mut dyn RngCore) -> String {
    let spec = &profile.address;
    let country = capitalize(&word(profile, spec.country_len.0, spec.country_len.1, rng));
    let district = capitalize(&word(profile, spec.district_len.0, spec.district_len.1, rng));
    let city = capitalize(&word(profile, spec.city_len.0, spec.city_len.1, rng));

    // Either a titled multi-word phrase or a "<number> street/avenue" form.
    let street = if rng.random_bool(0.5) {
        let (word_min, word_max) = profile.sentence_word_len;
        let words = rng.random_range(spec.street_phrase_words.0..=spec.street_phrase_words.1).max(1);
        (0..words)
            .map(|_| capitalize(&word(profile, word_min, word_max, rng)))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        let number = rng.random_range(spec.street_number.0..=spec.street_number.1);
        let kind = pick(&spec.street_kinds, rng);
        format!("{number} {kind}")
    };

    let building = rng.random_range(spec.building_number.0..=spec.building_number.1);
    format!("{country}, district {district}, city {city}, street {street}, building {building}")
}

/// Uniform random day inside the configured date range, as `YYYY-MM-DD`.
pub fn date(profile: &GeneratorProfile, rng: &mut dyn RngCore) -> String {
    let span = (profile.date_max - profile.date_min).num_days().max(1);
    let offset = rng.random_range(1..=span);
    (profile.date_min + Duration::days(offset))
        .format("%Y-%m-%d")
        .to_string()
}

fn pick<'a>(values: &'a [String], rng: &mut dyn RngCore) -> &'a str {
    values.choose(rng).map(String::as_str).unwrap_or_default()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
