//! Ordered substring matching of keywords against titled records.
//!
//! Keyword order beats record order: every record is tried against the
//! first keyword before any record is tried against the second.

use std::collections::HashSet;
use std::hash::Hash;

use crate::keywords::KeywordSet;

/// Returns the first record whose lowercased title contains the earliest
/// matching keyword, or `None` when no keyword matches any record.
///
/// Blank keywords never match.
#[must_use]
pub fn find_best_match<'a, R, F>(
    keywords: &KeywordSet,
    records: &'a [R],
    title_of: F,
) -> Option<&'a R>
where
    F: Fn(&R) -> &str,
{
    let titles = lowercase_titles(records, &title_of);

    usable(keywords).find_map(|keyword| {
        titles
            .iter()
            .position(|title| title.contains(keyword.as_str()))
            .map(|idx| &records[idx])
    })
}

/// Returns every record whose lowercased title contains any keyword.
///
/// Records are collected keyword by keyword in record order; a record
/// already collected (same `id_of`) is not added again. The result may be
/// empty.
#[must_use]
pub fn find_all_matches<'a, R, F, I, K>(
    keywords: &KeywordSet,
    records: &'a [R],
    title_of: F,
    id_of: I,
) -> Vec<&'a R>
where
    F: Fn(&R) -> &str,
    I: Fn(&R) -> K,
    K: Eq + Hash,
{
    let titles = lowercase_titles(records, &title_of);
    let mut seen: HashSet<K> = HashSet::new();
    let mut matches = Vec::new();

    for keyword in usable(keywords) {
        for (record, title) in records.iter().zip(&titles) {
            if title.contains(keyword.as_str()) && seen.insert(id_of(record)) {
                matches.push(record);
            }
        }
    }

    matches
}

fn usable(keywords: &KeywordSet) -> impl Iterator<Item = &String> {
    keywords.iter().filter(|keyword| !keyword.trim().is_empty())
}

fn lowercase_titles<R, F>(records: &[R], title_of: &F) -> Vec<String>
where
    F: Fn(&R) -> &str,
{
    records.iter().map(|r| title_of(r).to_lowercase()).collect()
}
