use crate::roadmap::catalog::Track;

/// Maximum number of gaps reported.
pub const MAX_GAPS: usize = 5;

/// Core competencies of `track` not evidenced by any token.
///
/// Only the first word of each competency is matched ("salary benchmarking" is covered
/// by any token containing "salary"). Output keeps catalog order and is capped at five.
pub fn skill_gaps(track: &Track, tokens: &[String]) -> Vec<String> {
    track
        .core_competencies
        .iter()
        .filter(|competency| {
            let head = first_word(competency);
            !tokens.iter().any(|token| token.contains(head))
        })
        .take(MAX_GAPS)
        .map(|competency| competency.to_string())
        .collect()
}

fn first_word(phrase: &str) -> &str {
    phrase.split(' ').next().unwrap_or(phrase)
}
