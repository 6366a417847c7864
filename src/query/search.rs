// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pinwall-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pinwall and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::RegexBuilder;

use crate::model::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Substring,
    Regex,
    Fuzzy,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Notes whose content (or `YYYY-MM-DD` date) matches `query`, case-insensitively.
///
/// A blank query matches every note in wall order. Substring and regex results keep wall
/// order; fuzzy results are ranked best first.
pub fn search_notes<'a>(
    notes: &'a [Note],
    query: &str,
    mode: SearchMode,
) -> Result<Vec<&'a Note>, SearchError> {
    let needle = query.trim();
    if needle.is_empty() {
        return Ok(notes.iter().collect());
    }

    match mode {
        SearchMode::Substring => {
            let needle = needle.to_lowercase();
            Ok(notes
                .iter()
                .filter(|note| {
                    note.content().to_lowercase().contains(&needle)
                        || date_text(note).is_some_and(|date| date.contains(&needle))
                })
                .collect())
        }
        SearchMode::Regex => {
            let regex = RegexBuilder::new(needle).case_insensitive(true).build()?;
            Ok(notes
                .iter()
                .filter(|note| {
                    regex.is_match(note.content())
                        || date_text(note).is_some_and(|date| regex.is_match(&date))
                })
                .collect())
        }
        SearchMode::Fuzzy => {
            let needle = needle.to_lowercase();
            let mut scored: Vec<(i64, usize)> = notes
                .iter()
                .enumerate()
                .filter_map(|(idx, note)| {
                    let content = fuzzy_score(&needle, &note.content().to_lowercase());
                    let date = date_text(note).and_then(|date| fuzzy_score(&needle, &date));
                    content.max(date).map(|score| (score, idx))
                })
                .collect();
            scored.sort_by(|(score_a, idx_a), (score_b, idx_b)| {
                score_b.cmp(score_a).then_with(|| idx_a.cmp(idx_b))
            });
            Ok(scored.into_iter().map(|(_, idx)| &notes[idx]).collect())
        }
    }
}

fn date_text(note: &Note) -> Option<String> {
    note.date().map(|date| date.to_string())
}

#[derive(Debug, Clone, Copy)]
struct SubsequenceStats {
    first: usize,
    span: usize,
    consecutive: usize,
    start_boundary: bool,
}

/// `None` unless every needle char appears in order in the haystack.
fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let subseq = subsequence_stats(needle, haystack)?;
    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());

    let mut score = (ratio * 1000.0).round() as i64;
    score -= subseq.span as i64;
    score -= (subseq.first as i64) / 4;
    score += (subseq.consecutive as i64) * 40;
    if subseq.start_boundary {
        score += 150;
    }
    if haystack.contains(needle) {
        score += 2000;
    } else {
        score += 500;
    }
    Some(score)
}

fn subsequence_stats(needle: &str, haystack: &str) -> Option<SubsequenceStats> {
    let mut wanted = needle.chars().peekable();
    let mut first: Option<usize> = None;
    let mut last = 0usize;
    let mut prev_match: Option<usize> = None;
    let mut consecutive = 0usize;
    let mut start_boundary = false;
    let mut prev_char: Option<char> = None;

    for (idx, ch) in haystack.chars().enumerate() {
        let Some(&want) = wanted.peek() else {
            break;
        };
        if ch == want {
            wanted.next();
            if first.is_none() {
                first = Some(idx);
                start_boundary = prev_char.map_or(true, is_word_boundary);
            }
            if prev_match.is_some_and(|prev| idx == prev + 1) {
                consecutive += 1;
            }
            prev_match = Some(idx);
            last = idx;
        }
        prev_char = Some(ch);
    }

    if wanted.peek().is_some() {
        return None;
    }
    let first = first?;
    Some(SubsequenceStats {
        first,
        span: last.saturating_sub(first).saturating_add(1),
        consecutive,
        start_boundary,
    })
}

fn is_word_boundary(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '_' | ':' | ',' | '.' | '/')
}
