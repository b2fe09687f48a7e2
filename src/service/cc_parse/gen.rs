//! Generation resolution for C&C threads.
//!
//! Generations are identified by their canonical short id ("sv", "ss", ...), the
//! same value stored in the `gen` column of alert subscriptions.

use regex::Regex;
use std::sync::LazyLock;

/// Canonical generation ids indexed by generation number, with the keywords that
/// identify them in thread titles.
const GENERATIONS: &[(u8, &str, &[&str])] = &[
    (1, "rb", &["rb", "rby"]),
    (2, "gs", &["gs", "gsc"]),
    (3, "rs", &["rs", "rse", "adv"]),
    (4, "dp", &["dp", "dpp"]),
    (5, "bw", &["bw", "bw2"]),
    (6, "xy", &["xy", "oras"]),
    (7, "sm", &["sm", "usum"]),
    (8, "ss", &["ss", "swsh"]),
    (9, "sv", &["sv"]),
];

/// Prefix label used for threads in the past-generation subforums, e.g. "Gen 4".
static PAST_GEN_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^gen(?:eration)?\s*([1-9])$").expect("past gen prefix regex is valid")
});

/// Explicit generation token in a title: "Gen 4", "Generation 4", "G4".
static GEN_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:gen(?:eration)?|g)\s*([1-9])\b").expect("gen token regex is valid")
});

/// Generation alias keyword in a title, matched on word boundaries.
static GEN_ALIAS: LazyLock<Regex> = LazyLock::new(|| {
    let aliases: Vec<&str> = GENERATIONS
        .iter()
        .flat_map(|(_, _, aliases)| aliases.iter().copied())
        .collect();
    Regex::new(&format!(r"(?i)\b({})\b", aliases.join("|"))).expect("gen alias regex is valid")
});

/// Canonical id for a generation number.
pub fn by_number(number: u8) -> Option<&'static str> {
    GENERATIONS
        .iter()
        .find(|(n, _, _)| *n == number)
        .map(|(_, id, _)| *id)
}

/// Canonical id for a generation alias keyword, case-insensitively.
pub fn by_alias(alias: &str) -> Option<&'static str> {
    GENERATIONS
        .iter()
        .find(|(_, _, aliases)| aliases.iter().any(|a| a.eq_ignore_ascii_case(alias)))
        .map(|(_, id, _)| *id)
}

/// Generation number carried by a past-generation prefix label such as "Gen 4".
pub fn past_gen_prefix(phrase_text: Option<&str>) -> Option<u8> {
    let captures = PAST_GEN_PREFIX.captures(phrase_text?.trim())?;
    captures.get(1)?.as_str().parse().ok()
}

/// Resolves the generations a thread belongs to.
///
/// A past-generation prefix wins; otherwise every explicit generation token and alias
/// keyword in the title is collected; otherwise the subforum's own generation is used.
///
/// # Arguments
/// - `phrase_text` - Thread prefix label, if any
/// - `title` - Thread title
/// - `node_gen` - Generation of the subforum the thread was posted in, if it has one
///
/// # Returns
/// - `Vec<String>` - Canonical generation ids in order of appearance, without
///   duplicates; empty when nothing identifies the generation
pub fn resolve(phrase_text: Option<&str>, title: &str, node_gen: Option<&str>) -> Vec<String> {
    if let Some(id) = past_gen_prefix(phrase_text).and_then(by_number) {
        return vec![id.to_string()];
    }

    let mut found: Vec<(usize, &'static str)> = GEN_TOKEN
        .captures_iter(title)
        .filter_map(|captures| {
            let token = captures.get(1)?;
            let id = by_number(token.as_str().parse().ok()?)?;
            Some((token.start(), id))
        })
        .chain(
            GEN_ALIAS
                .find_iter(title)
                .filter_map(|m| Some((m.start(), by_alias(m.as_str())?))),
        )
        .collect();
    found.sort_by_key(|(start, _)| *start);

    let mut gens: Vec<String> = Vec::new();
    for (_, id) in found {
        if !gens.iter().any(|g| g == id) {
            gens.push(id.to_string());
        }
    }

    if gens.is_empty() {
        if let Some(gen) = node_gen {
            gens.push(gen.to_string());
        }
    }

    gens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_gen_prefix_wins_over_title() {
        let gens = resolve(Some("Gen 4"), "Garchomp SV OU", Some("sv"));
        assert_eq!(gens, vec!["dp"]);
    }

    #[test]
    fn past_gen_prefix_accepts_long_form() {
        assert_eq!(past_gen_prefix(Some("Generation 7")), Some(7));
        assert_eq!(past_gen_prefix(Some("gen8")), Some(8));
        assert_eq!(past_gen_prefix(Some("OU")), None);
        assert_eq!(past_gen_prefix(None), None);
    }

    #[test]
    fn reads_gen_token_from_title() {
        assert_eq!(resolve(None, "Gen 3 Metagross [QC 0/2]", None), vec!["rs"]);
        assert_eq!(resolve(None, "Zapdos G2 UU", None), vec!["gs"]);
        assert_eq!(resolve(None, "Generation 5 Ferrothorn", None), vec!["bw"]);
    }

    #[test]
    fn reads_alias_keywords_case_insensitively() {
        assert_eq!(resolve(None, "ORAS Latios", None), vec!["xy"]);
        assert_eq!(resolve(None, "swsh Dragapult", None), vec!["ss"]);
    }

    #[test]
    fn alias_must_be_a_whole_word() {
        // "Advanced" must not read as the ADV alias
        assert_eq!(resolve(None, "Advanced Tactics", Some("sv")), vec!["sv"]);
    }

    #[test]
    fn collects_multiple_generations_in_title_order() {
        let gens = resolve(None, "USUM and Gen 8 Tapu Koko", None);
        assert_eq!(gens, vec!["sm", "ss"]);
    }

    #[test]
    fn deduplicates_repeated_generation() {
        let gens = resolve(None, "DPP Gen 4 Garchomp", None);
        assert_eq!(gens, vec!["dp"]);
    }

    #[test]
    fn falls_back_to_node_generation() {
        assert_eq!(resolve(None, "Great Tusk", Some("sv")), vec!["sv"]);
        assert!(resolve(None, "Great Tusk", None).is_empty());
    }
}
