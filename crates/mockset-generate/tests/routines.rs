use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;

use mockset_generate::{GeneratorProfile, routines};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn word_respects_length_and_charset() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(1);
    let pattern = Regex::new(r"^[a-z]{3,10}$").expect("valid pattern");

    for _ in 0..1000 {
        let value = routines::word(&profile, 3, 10, &mut rng);
        assert!(pattern.is_match(&value), "unexpected word: {value}");
    }
}

#[test]
fn word_hits_inclusive_ends() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(2);
    let mut lengths = std::collections::BTreeSet::new();

    for _ in 0..1000 {
        lengths.insert(routines::word(&profile, 2, 4, &mut rng).len());
    }
    assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn integer_stays_within_bounds() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(3);

    for _ in 0..1000 {
        let value: i64 = routines::integer(&profile, 131, 158, &mut rng)
            .parse()
            .expect("decimal integer");
        assert!((131..=158).contains(&value));
    }

    let single = routines::integer(&profile, 7, 7, &mut rng);
    assert_eq!(single, "7");
}

#[test]
fn integer_renders_zero_without_leading_zeros() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(4);

    for _ in 0..100 {
        let value = routines::integer(&profile, 0, 9, &mut rng);
        assert_eq!(value, value.parse::<i64>().expect("integer").to_string());
    }
}

#[test]
fn sentence_is_capitalized_and_terminated() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(5);
    let pattern = Regex::new(r"^[A-Z][a-z]*( [a-z]+)*\.$").expect("valid pattern");

    for _ in 0..200 {
        let value = routines::sentence(&profile, 2, 6, &mut rng);
        assert!(pattern.is_match(&value), "unexpected sentence: {value}");
        let words = value.trim_end_matches('.').split(' ').count();
        assert!((2..=6).contains(&words));
    }
}

#[test]
fn full_name_combines_both_lists() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(6);
    let first_names = vec!["Alice".to_string(), "Bob".to_string()];
    let last_names = vec!["Smith".to_string(), "Jones".to_string()];
    let lists = vec![first_names.clone(), last_names.clone()];

    for _ in 0..200 {
        let value = routines::full_name(&profile, &lists, &mut rng);
        let mut tokens = value.split(' ');
        let first = tokens.next().expect("first token");
        let last = tokens.next().expect("second token");
        assert_eq!(tokens.next(), None, "more than two tokens: {value}");
        assert!(first_names.iter().any(|name| name == first));
        assert!(last_names.iter().any(|name| name == last));
    }
}

#[test]
fn job_picks_from_the_list() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(7);
    let jobs = vec!["Farmer".to_string(), "Engineer".to_string()];
    let lists = vec![jobs.clone()];

    for _ in 0..100 {
        let value = routines::job(&profile, &lists, &mut rng);
        assert!(jobs.contains(&value));
    }
}

#[test]
fn email_matches_configured_shape() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(8);
    let pattern = Regex::new(r"^[a-z]{5,12}@gmail\.com$").expect("valid pattern");

    for _ in 0..500 {
        let value = routines::email(&profile, &mut rng);
        assert!(pattern.is_match(&value), "unexpected email: {value}");
    }
}

#[test]
fn domain_name_uses_candidate_top_levels() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(9);

    for _ in 0..200 {
        let value = routines::domain_name(&profile, &mut rng);
        let (second, top) = value.split_once('.').expect("one dot");
        assert!((3..=15).contains(&second.len()));
        assert!(second.bytes().all(|b| b.is_ascii_lowercase()));
        assert!(profile.top_level_domains.iter().any(|tld| tld == top));
    }
}

#[test]
fn phone_number_has_fixed_prefix_and_digit_count() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(10);

    for _ in 0..200 {
        let value = routines::phone_number(&profile, &mut rng);
        let rest = value.strip_prefix("+380").expect("country code");
        assert_eq!(rest.len(), 9);
        assert!(rest.bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn company_name_is_upper_cased_words() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(11);

    for _ in 0..200 {
        let value = routines::company_name(&profile, &mut rng);
        let words: Vec<&str> = value.split(' ').collect();
        assert!((1..=5).contains(&words.len()));
        for word in words {
            assert!((5..=15).contains(&word.len()));
            assert!(word.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }
}

#[test]
fn text_joins_sentences() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(12);

    for _ in 0..50 {
        let value = routines::text(&profile, 2, 4, &mut rng);
        let sentences = value.matches('.').count();
        assert!((2..=4).contains(&sentences), "unexpected text: {value}");
        assert!(!value.ends_with(' '));
    }
}

#[test]
fn address_follows_the_template() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(13);
    let pattern = Regex::new(
        r"^[A-Z][a-z]{2,13}, district [A-Z][a-z]{4,13}, city [A-Z][a-z]{4,7}, street (([A-Z][a-z]+)( [A-Z][a-z]+)*|\d{1,3} (street|avenue)), building \d{1,3}$",
    )
    .expect("valid pattern");

    for _ in 0..300 {
        let value = routines::address(&profile, &mut rng);
        assert!(pattern.is_match(&value), "unexpected address: {value}");
    }
}

#[test]
fn date_stays_within_the_configured_range() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(14);
    let min = NaiveDate::from_ymd_opt(1000, 1, 1).expect("valid date");
    let max = NaiveDate::from_ymd_opt(2100, 12, 31).expect("valid date");

    for _ in 0..500 {
        let value = routines::date(&profile, &mut rng);
        let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d").expect("iso date");
        assert!(parsed > min && parsed <= max, "out of range: {value}");
    }
}

#[test]
fn routines_never_return_empty_strings() {
    let profile = GeneratorProfile::default();
    let mut rng = rng(15);
    let lists = vec![vec!["Alice".to_string()], vec!["Smith".to_string()]];

    for _ in 0..100 {
        assert!(!routines::word(&profile, 1, 3, &mut rng).is_empty());
        assert!(!routines::sentence(&profile, 1, 2, &mut rng).is_empty());
        assert!(!routines::integer(&profile, 0, 0, &mut rng).is_empty());
        assert!(!routines::text(&profile, 1, 1, &mut rng).is_empty());
        assert!(!routines::full_name(&profile, &lists, &mut rng).is_empty());
        assert!(!routines::email(&profile, &mut rng).is_empty());
        assert!(!routines::domain_name(&profile, &mut rng).is_empty());
        assert!(!routines::phone_number(&profile, &mut rng).is_empty());
        assert!(!routines::company_name(&profile, &mut rng).is_empty());
        assert!(!routines::address(&profile, &mut rng).is_empty());
        assert!(!routines::date(&profile, &mut rng).is_empty());
    }
}
