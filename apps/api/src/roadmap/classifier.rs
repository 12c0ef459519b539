//! Track classification and track/role resolution.
//!
//! Baseline track comes from keyword containment over all input tokens. A strong
//! role-combination match (score ≥ 3) may override it and supplies the next-role label.

use crate::roadmap::catalog::{default_track, find_track, Track, TRACKS};
use crate::roadmap::combinations::ScoredCombination;

/// Minimum combination score for a track override and a next-role prediction.
pub const STRONG_COMBO_THRESHOLD: f64 = 3.0;

const CONFIDENCE_FLOOR: f64 = 0.3;
const KEYWORD_WEIGHT: f64 = 0.6;
const COMBO_WEIGHT: f64 = 0.4;
/// Keyword hits at which the keyword signal saturates.
const KEYWORD_SATURATION: f64 = 5.0;
/// Combination score at which the combination signal saturates.
const COMBO_SATURATION: f64 = 6.0;

/// Number of a track's keywords contained in at least one token.
pub fn keyword_score(track: &Track, tokens: &[String]) -> usize {
    track
        .keywords
        .iter()
        .filter(|kw| tokens.iter().any(|token| token.contains(*kw)))
        .count()
}

/// Picks the track with the strictly highest keyword score; ties keep the earlier track.
pub fn classify_track(tokens: &[String]) -> (&'static Track, usize) {
    let mut best = default_track();
    let mut best_score: Option<usize> = None;

    for track in TRACKS {
        let score = keyword_score(track, tokens);
        if best_score.map_or(true, |s| score > s) {
            best = track;
            best_score = Some(score);
        }
    }

    (best, best_score.unwrap_or(0))
}

/// Outcome of combining the keyword baseline with the best role combination.
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    pub track: &'static Track,
    pub keyword_score: usize,
    pub combo_score: f64,
    pub next_likely_role: Option<&'static str>,
    pub confidence: f64,
}

/// Applies the override and threshold rules and blends the confidence.
pub fn resolve(
    baseline: &'static Track,
    keyword_score: usize,
    best: &ScoredCombination,
) -> Resolution {
    let strong = best.score >= STRONG_COMBO_THRESHOLD;

    let track = if strong {
        best.combination
            .track_id
            .and_then(find_track)
            .unwrap_or(baseline)
    } else {
        baseline
    };

    let next_likely_role = strong.then_some(best.combination.next_role);

    Resolution {
        track,
        keyword_score,
        combo_score: best.score,
        next_likely_role,
        confidence: blend_confidence(keyword_score, best.score),
    }
}

/// `clamp(0.6·min(kw/5, 1) + 0.4·min(combo/6, 1), 0.3, 1.0)`, rounded to two decimals.
pub fn blend_confidence(keyword_score: usize, combo_score: f64) -> f64 {
    let keyword_signal = (keyword_score as f64 / KEYWORD_SATURATION).clamp(0.0, 1.0);
    let combo_signal = (combo_score / COMBO_SATURATION).clamp(0.0, 1.0);
    let blended = (KEYWORD_WEIGHT * keyword_signal + COMBO_WEIGHT * combo_signal)
        .clamp(CONFIDENCE_FLOOR, 1.0);
    round2(blended)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
