//! Tier resolution for C&C threads.

/// Resolves the candidate tiers of a thread.
///
/// Subforums that host several tiers label each thread with the tier as its prefix;
/// when the prefix names one of the candidates the set is narrowed to it. Otherwise
/// the full candidate set is kept and the thread stays ambiguous.
///
/// # Arguments
/// - `candidates` - Tiers hosted by the thread's subforum
/// - `phrase_text` - Thread prefix label, if any
///
/// # Returns
/// - `Vec<String>` - One tier, several ambiguous tiers, or none for unmapped subforums
pub fn resolve(candidates: &[String], phrase_text: Option<&str>) -> Vec<String> {
    if candidates.len() > 1 {
        if let Some(tier) = phrase_text.and_then(|prefix| {
            candidates
                .iter()
                .find(|tier| tier.eq_ignore_ascii_case(prefix.trim()))
        }) {
            return vec![tier.clone()];
        }
    }

    candidates.to_vec()
}
