//! Fuzzy Resolver: Matches human queries to hires and tasks.
//!
//! Resolution order: exact id, unique id prefix, exact name (case-insensitive),
//! then a word-overlap score. Strict mode stops before the fuzzy step.

use super::hire::Hire;
use super::types::Task;
use anyhow::{bail, Result};
use std::collections::HashSet;

const MIN_PREFIX: usize = 4;
const MIN_SCORE: f64 = 0.3;

/// Something a query can be matched against.
pub trait Resolvable {
    fn key(&self) -> &str;
    fn name(&self) -> &str;
}

impl Resolvable for Task {
    fn key(&self) -> &str {
        self.id()
    }

    fn name(&self) -> &str {
        self.title()
    }
}

impl Resolvable for Hire {
    fn key(&self) -> &str {
        self.id()
    }

    fn name(&self) -> &str {
        self.employee_name()
    }
}

pub struct Resolver {
    strict: bool,
}

impl Resolver {
    /// Creates a new resolver.
    #[must_use]
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Creates a resolver in strict mode.
    #[must_use]
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Resolves a user query against `items`.
    ///
    /// # Errors
    /// Returns an error if no match is found or the query is ambiguous.
    pub fn resolve<'a, T: Resolvable>(
        &self,
        items: &'a [T],
        query: &str,
    ) -> Result<&'a T> {
        let query = query.trim();
        if query.is_empty() {
            bail!("Empty reference");
        }

        if let Some(item) = items.iter().find(|i| i.key() == query) {
            return Ok(item);
        }

        if query.len() >= MIN_PREFIX {
            let prefixed: Vec<_> = items.iter().filter(|i| i.key().starts_with(query)).collect();
            match prefixed.as_slice() {
                [item] => return Ok(*item),
                [] => {}
                _ => bail!("Id prefix '{query}' is ambiguous ({} matches)", prefixed.len()),
            }
        }

        let query_lower = query.to_lowercase();
        let named: Vec<_> = items
            .iter()
            .filter(|i| i.name().to_lowercase() == query_lower)
            .collect();
        match named.as_slice() {
            [item] => return Ok(*item),
            [] => {}
            _ => bail!(
                "'{query}' names {} entries; use an id prefix instead",
                named.len()
            ),
        }

        if self.strict {
            bail!("No exact match for '{query}' in strict mode.");
        }
        Self::fuzzy_resolve(items, &query_lower)
    }

    fn fuzzy_resolve<'a, T: Resolvable>(
        items: &'a [T],
        query: &str,
    ) -> Result<&'a T> {
        let words: Vec<_> = query.split_whitespace().collect();

        let mut matches: Vec<_> = items
            .iter()
            .map(|i| (calculate_score(i.name(), query, &words), i))
            .filter(|(s, _)| *s > MIN_SCORE)
            .collect();

        matches.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        if let [(top, _), (second, next), ..] = matches.as_slice() {
            if (top - second).abs() < f64::EPSILON {
                bail!(
                    "'{query}' is ambiguous: matches '{}' and '{}'",
                    matches[0].1.name(),
                    next.name()
                );
            }
        }

        matches
            .into_iter()
            .next()
            .map(|(_, item)| item)
            .ok_or_else(|| anyhow::anyhow!("Nothing matches '{query}'"))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculates a match score between a name and a lowercased query.
fn calculate_score(name: &str, query: &str, query_words: &[&str]) -> f64 {
    let name_lower = name.to_lowercase();

    let mut score = 0.0;

    if name_lower.contains(query) {
        score += 0.7;
    }

    for word in query_words {
        if name_lower.contains(word) {
            score += 0.25;
        }
    }

    if name_lower.starts_with(query) {
        score += 0.5;
    }

    score += string_similarity(&name_lower, query) * 0.4;

    score.min(1.0)
}

#[allow(clippy::cast_precision_loss)]
fn string_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a_chars: HashSet<char> = a.chars().collect();
    let b_chars: HashSet<char> = b.chars().collect();

    let intersection = a_chars.intersection(&b_chars).count();
    let union = a_chars.union(&b_chars).count();

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::generate_default_tasks;
    use crate::engine::hire::DraftHire;
    use crate::engine::types::{Assignee, Due, Phase, Section};

    #[test]
    fn test_exact_id() {
        let tasks = generate_default_tasks();
        let id = tasks[3].id().to_string();
        let res = Resolver::new().resolve(&tasks, &id).unwrap();
        assert_eq!(res.id(), id);
    }

    #[test]
    fn test_id_prefix() {
        let tasks = generate_default_tasks();
        let prefix = &tasks[5].id()[..8];
        let res = Resolver::strict().resolve(&tasks, prefix).unwrap();
        assert_eq!(res.title(), "Set up direct deposit");
    }

    #[test]
    fn test_exact_title_case_insensitive() {
        let tasks = generate_default_tasks();
        let res = Resolver::strict().resolve(&tasks, "complete w-4").unwrap();
        assert_eq!(res.title(), "Complete W-4");
    }

    #[test]
    fn test_fuzzy_words() {
        let tasks = generate_default_tasks();
        let res = Resolver::new().resolve(&tasks, "direct deposit").unwrap();
        assert_eq!(res.title(), "Set up direct deposit");

        let res = Resolver::new().resolve(&tasks, "house rules").unwrap();
        assert!(res.title().starts_with("Review house rules"));
    }

    #[test]
    fn test_strict_refuses_fuzzy() {
        let tasks = generate_default_tasks();
        assert!(Resolver::strict().resolve(&tasks, "direct deposit").is_err());
    }

    #[test]
    fn test_no_match() {
        let tasks = generate_default_tasks();
        assert!(Resolver::new().resolve(&tasks, "zzzz qqqq").is_err());
        assert!(Resolver::new().resolve(&tasks, "  ").is_err());
    }

    #[test]
    fn test_duplicate_exact_title_is_ambiguous() {
        let mut tasks = generate_default_tasks();
        tasks.push(Task::new(
            Section::Compliance,
            "Complete W-4",
            Assignee::Employee,
            Due::BeforeDay1,
            Phase::PreBoarding,
        ));
        assert!(Resolver::strict().resolve(&tasks, "Complete W-4").is_err());
        assert!(Resolver::new().resolve(&tasks, "complete w-4").is_err());

        let prefix = &tasks[11].id()[..8];
        assert_eq!(Resolver::strict().resolve(&tasks, prefix).unwrap().id(), tasks[11].id());
    }

    #[test]
    fn test_same_named_hires_need_an_id() {
        let hires: Vec<_> = (0..2)
            .map(|_| DraftHire::new().employee_name("Jane Smith").finalize().unwrap())
            .collect();
        let err = Resolver::strict().resolve(&hires, "Jane Smith").unwrap_err();
        assert!(err.to_string().contains("names 2 entries"));

        let found = Resolver::strict().resolve(&hires, hires[1].id()).unwrap();
        assert_eq!(found.id(), hires[1].id());
    }
}
