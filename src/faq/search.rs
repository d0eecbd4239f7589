//! In-memory FAQ search index.
//!
//! Built once from the static dataset; every view (`filter`, `popular`,
//! `related`) is recomputed from the immutable records on each call, so
//! the index has no mutable state to coordinate.

use crate::faq::types::{Category, CategoryFilter, FaqEntry, FaqId, FaqRecord};
use ahash::AHashSet;
use memchr::memmem;

/// Default number of popular questions shown.
pub const POPULAR_LIMIT: usize = 5;

/// Popular question cap when the expanded view is requested.
pub const POPULAR_EXPANDED_LIMIT: usize = 10;

/// Maximum records sampled per category for the popular view.
pub const POPULAR_PER_CATEGORY: usize = 2;

/// Default number of related questions resolved for a record.
pub const RELATED_LIMIT: usize = 3;

/// Lowercased copy of a record's searchable text, precomputed at build time
/// so the per-query cost is a pair of substring scans.
struct Haystack {
    question: String,
    answer: String,
}

/// Immutable search index over the FAQ dataset.
pub struct FaqSearchIndex {
    records: Vec<FaqRecord>,
    haystacks: Vec<Haystack>,
    /// Distinct categories in first-encounter order.
    categories: Vec<Category>,
}

impl FaqSearchIndex {
    /// Build the index, assigning each entry a sequential id in dataset order.
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        let mut records = Vec::with_capacity(entries.len());
        let mut haystacks = Vec::with_capacity(entries.len());
        let mut categories = Vec::new();
        let mut seen_questions: AHashSet<String> = AHashSet::with_capacity(entries.len());

        for (i, entry) in entries.into_iter().enumerate() {
            if !seen_questions.insert(entry.question.to_lowercase()) {
                // Duplicate question text is a data-authoring mistake; ids keep
                // the records distinct, so surface it without rejecting anything.
                tracing::warn!(question = %entry.question, "duplicate question text in dataset");
            }
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
            haystacks.push(Haystack {
                question: entry.question.to_lowercase(),
                answer: entry.answer.to_lowercase(),
            });
            records.push(FaqRecord::from_entry(i as FaqId, entry));
        }

        tracing::debug!(records = records.len(), categories = categories.len(), "faq index built");

        Self {
            records,
            haystacks,
            categories,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: FaqId) -> Option<&FaqRecord> {
        self.records.get(id as usize)
    }

    /// Distinct categories present in the dataset, in first-encounter order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Filter records by a case-insensitive substring query and a category.
    ///
    /// A record matches when its question OR answer contains the query
    /// (the empty query matches everything) AND its category passes the
    /// filter. The query is matched verbatim; leading/trailing whitespace
    /// is significant. Result order is dataset order.
    pub fn filter(&self, query: &str, category: &CategoryFilter) -> Vec<&FaqRecord> {
        let needle = query.to_lowercase();
        let finder = (!needle.is_empty()).then(|| memmem::Finder::new(needle.as_bytes()));

        self.records
            .iter()
            .zip(&self.haystacks)
            .filter(|(record, hay)| {
                if !category.accepts(record.category) {
                    return false;
                }
                match &finder {
                    Some(f) => {
                        f.find(hay.question.as_bytes()).is_some()
                            || f.find(hay.answer.as_bytes()).is_some()
                    }
                    None => true,
                }
            })
            .map(|(record, _)| record)
            .collect()
    }

    /// Like [`filter`](Self::filter), taking the category as a raw name.
    /// An unrecognized name yields an empty result.
    pub fn filter_by_name(&self, query: &str, category: &str) -> Vec<&FaqRecord> {
        self.filter(query, &CategoryFilter::parse(category))
    }

    /// Sample up to [`POPULAR_PER_CATEGORY`] records per category in a single
    /// walk over the dataset, flatten the buckets in category first-encounter
    /// order, and truncate to `limit`.
    pub fn popular(&self, limit: usize) -> Vec<&FaqRecord> {
        // Buckets keyed by category, kept in first-encounter order.
        let mut buckets: Vec<(Category, Vec<&FaqRecord>)> = Vec::new();

        for record in &self.records {
            match buckets.iter_mut().find(|(cat, _)| *cat == record.category) {
                Some((_, bucket)) => {
                    if bucket.len() < POPULAR_PER_CATEGORY {
                        bucket.push(record);
                    }
                }
                None => buckets.push((record.category, vec![record])),
            }
        }

        let mut result: Vec<&FaqRecord> = buckets
            .into_iter()
            .flat_map(|(_, bucket)| bucket)
            .collect();
        result.truncate(limit);
        result
    }

    /// Up to `limit` records sharing the category of `id`, excluding `id`
    /// itself, in dataset order. An unknown id yields an empty result.
    pub fn related(&self, id: FaqId, limit: usize) -> Vec<&FaqRecord> {
        let Some(origin) = self.get(id) else {
            return Vec::new();
        };

        self.records
            .iter()
            .filter(|r| r.category == origin.category && r.id != id)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(question: &str, answer: &str, category: Category) -> FaqEntry {
        FaqEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
        }
    }

    /// Three categories, four records each, in interleaved dataset order.
    fn sample_index() -> FaqSearchIndex {
        let mut entries = Vec::new();
        for i in 0..4 {
            entries.push(entry(
                &format!("General question {i}"),
                &format!("General answer {i}"),
                Category::General,
            ));
            entries.push(entry(
                &format!("Residential question {i}"),
                &format!("Residential answer {i}"),
                Category::Residential,
            ));
            entries.push(entry(
                &format!("Commercial question {i}"),
                &format!("Commercial answer {i}"),
                Category::Commercial,
            ));
        }
        FaqSearchIndex::new(entries)
    }

    #[test]
    fn test_empty_query_with_category_returns_whole_category() {
        let index = sample_index();
        let results = index.filter("", &CategoryFilter::One(Category::Residential));

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.category == Category::Residential));
        // Dataset order preserved
        for pair in results.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[test]
    fn test_filter_matches_question_or_answer() {
        let index = FaqSearchIndex::new(vec![
            entry("Do you offer financing?", "Yes, through partners.", Category::Payment),
            entry("What is covered?", "Our Warranty covers labor.", Category::General),
            entry("How long do projects take?", "Four to six weeks.", Category::Process),
        ]);

        // Matches in the answer only, case-insensitively
        let results = index.filter("warranty", &CategoryFilter::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].question, "What is covered?");

        // Matches in the question only
        let results = index.filter("financing", &CategoryFilter::All);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, Category::Payment);
    }

    #[test]
    fn test_filter_is_case_insensitive_both_ways() {
        let index = FaqSearchIndex::new(vec![entry(
            "DESIGN consultations",
            "We offer them.",
            Category::Process,
        )]);
        assert_eq!(index.filter("design", &CategoryFilter::All).len(), 1);
        assert_eq!(index.filter("Design", &CategoryFilter::All).len(), 1);
    }

    #[test]
    fn test_filter_query_not_trimmed() {
        let index = FaqSearchIndex::new(vec![entry(
            "Question",
            "word here",
            Category::General,
        )]);
        assert_eq!(index.filter("word ", &CategoryFilter::All).len(), 1);
        assert_eq!(index.filter(" word", &CategoryFilter::All).len(), 0);
    }

    #[test]
    fn test_filter_ands_text_and_category() {
        let index = sample_index();
        let results = index.filter("question 2", &CategoryFilter::One(Category::Commercial));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].question, "Commercial question 2");
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let index = sample_index();
        assert!(index.filter_by_name("", "plumbing").is_empty());
        assert!(index.filter_by_name("question", "plumbing").is_empty());
    }

    #[test]
    fn test_wildcard_ignores_category() {
        let index = sample_index();
        let results = index.filter("question 1", &CategoryFilter::All);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_popular_caps_per_category_and_total() {
        let index = sample_index();

        let popular = index.popular(POPULAR_LIMIT);
        assert_eq!(popular.len(), POPULAR_LIMIT);
        for cat in Category::ALL {
            let per_cat = popular.iter().filter(|r| r.category == cat).count();
            assert!(per_cat <= POPULAR_PER_CATEGORY);
        }

        // Expanded view: 3 categories * 2 each = 6 available
        let expanded = index.popular(POPULAR_EXPANDED_LIMIT);
        assert_eq!(expanded.len(), 6);
    }

    #[test]
    fn test_popular_is_deterministic() {
        let index = sample_index();
        let a: Vec<FaqId> = index.popular(POPULAR_LIMIT).iter().map(|r| r.id).collect();
        let b: Vec<FaqId> = index.popular(POPULAR_LIMIT).iter().map(|r| r.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_popular_follows_category_first_encounter_order() {
        let index = sample_index();
        let popular = index.popular(POPULAR_EXPANDED_LIMIT);
        let cats: Vec<Category> = popular.iter().map(|r| r.category).collect();
        assert_eq!(
            cats,
            vec![
                Category::General,
                Category::General,
                Category::Residential,
                Category::Residential,
                Category::Commercial,
                Category::Commercial,
            ]
        );
    }

    #[test]
    fn test_related_excludes_origin_and_shares_category() {
        let index = sample_index();
        let origin = &index.records()[0];
        let related = index.related(origin.id, RELATED_LIMIT);

        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|r| r.id != origin.id));
        assert!(related.iter().all(|r| r.category == origin.category));
    }

    #[test]
    fn test_related_unknown_id_is_empty() {
        let index = sample_index();
        assert!(index.related(9999, RELATED_LIMIT).is_empty());
    }

    #[test]
    fn test_filter_result_is_subsequence_of_dataset() {
        let index = sample_index();
        let results = index.filter("question", &CategoryFilter::All);
        let ids: Vec<FaqId> = results.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
