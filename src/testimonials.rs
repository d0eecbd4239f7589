//! Testimonial aggregation: merges the general and commercial source lists,
//! deduplicates by `(name, text)`, and produces shuffled presentations.

use ahash::AHashSet;
use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Testimonial dataset shipped with the binary.
pub const BUNDLED_TESTIMONIALS: &str = include_str!("../data/testimonials.json");

/// Which source list a testimonial came from. The two lists carry different
/// authored shapes, so the origin is an explicit discriminant rather than
/// being sniffed from field presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialKind {
    General,
    Commercial,
}

/// One client testimonial, normalized from either source shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub kind: TestimonialKind,
    pub name: String,
    pub text: String,
    pub company: Option<String>,
    pub location: Option<String>,
}

impl Testimonial {
    /// Composite identity used for deduplication.
    fn key(&self) -> (String, String) {
        (self.name.clone(), self.text.clone())
    }
}

/// Authored shape of a general (homeowner) testimonial.
#[derive(Deserialize)]
struct GeneralSeed {
    name: String,
    text: String,
    #[serde(default)]
    location: Option<String>,
}

/// Authored shape of a commercial-client testimonial.
#[derive(Deserialize)]
struct CommercialSeed {
    client_name: String,
    text: String,
    #[serde(default)]
    company: Option<String>,
}

#[derive(Deserialize)]
struct TestimonialFile {
    general: Vec<GeneralSeed>,
    commercial: Vec<CommercialSeed>,
}

/// Parse the testimonial dataset, returning its source lists in file order.
pub fn parse_testimonials(json: &str) -> Result<Vec<Vec<Testimonial>>> {
    let file: TestimonialFile =
        serde_json::from_str(json).context("invalid testimonial dataset JSON")?;

    let general = file
        .general
        .into_iter()
        .map(|seed| Testimonial {
            kind: TestimonialKind::General,
            name: seed.name,
            text: seed.text,
            company: None,
            location: seed.location,
        })
        .collect();

    let commercial = file
        .commercial
        .into_iter()
        .map(|seed| Testimonial {
            kind: TestimonialKind::Commercial,
            name: seed.client_name,
            text: seed.text,
            company: seed.company,
            location: None,
        })
        .collect();

    Ok(vec![general, commercial])
}

/// Load a testimonial dataset from a file.
pub fn load_testimonials(path: &Path) -> Result<Vec<Vec<Testimonial>>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading testimonial dataset from {}", path.display()))?;
    parse_testimonials(&json)
}

/// The dataset bundled into the binary.
pub fn bundled_testimonials() -> Result<Vec<Vec<Testimonial>>> {
    parse_testimonials(BUNDLED_TESTIMONIALS)
}

/// Merge source lists into one, deduplicating by `(name, text)`.
/// The first occurrence wins and keeps its position.
pub fn dedupe<I>(lists: I) -> Vec<Testimonial>
where
    I: IntoIterator<Item = Vec<Testimonial>>,
{
    let mut seen: AHashSet<(String, String)> = AHashSet::new();
    let mut merged = Vec::new();

    for list in lists {
        for testimonial in list {
            if seen.insert(testimonial.key()) {
                merged.push(testimonial);
            }
        }
    }

    merged
}

/// A fresh uniformly random permutation of `records`.
///
/// Operates on a copy; the input is never reordered. Each call draws from
/// the thread RNG independently.
pub fn shuffle(records: &[Testimonial]) -> Vec<Testimonial> {
    let mut shuffled = records.to_vec();
    let mut rng = rand::thread_rng();

    // Fisher-Yates, walking down from the last index
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}
