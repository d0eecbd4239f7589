use serde::{Deserialize, Serialize};

/// Unique identifier for a record in the FAQ dataset.
/// Assigned sequentially in dataset order when the index is built, so two
/// records with identical question text still compare as distinct.
pub type FaqId = u32;

/// Closed set of FAQ categories. New categories require redeploying the
/// dataset, so this is an enum rather than an open string type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Residential,
    Commercial,
    Process,
    Payment,
    Warranty,
}

impl Category {
    /// All categories, in dataset-authoring order.
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Residential,
        Category::Commercial,
        Category::Process,
        Category::Payment,
        Category::Warranty,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "general" => Some(Category::General),
            "residential" => Some(Category::Residential),
            "commercial" => Some(Category::Commercial),
            "process" => Some(Category::Process),
            "payment" => Some(Category::Payment),
            "warranty" => Some(Category::Warranty),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Residential => "residential",
            Category::Commercial => "commercial",
            Category::Process => "process",
            Category::Payment => "payment",
            Category::Warranty => "warranty",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Category selection for a search.
///
/// `Unknown` carries the unrecognized name verbatim and matches no record,
/// so a bad filter value degrades to an empty result instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Wildcard: every category passes.
    All,
    /// Exactly one category passes.
    One(Category),
    /// Unrecognized category name; nothing passes.
    Unknown(String),
}

impl CategoryFilter {
    /// Parse a filter value. "all" (any case) is the wildcard.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            return CategoryFilter::All;
        }
        match Category::from_name(value) {
            Some(cat) => CategoryFilter::One(cat),
            None => CategoryFilter::Unknown(value.to_string()),
        }
    }

    /// Whether a record with the given category passes this filter.
    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::One(cat) => *cat == category,
            CategoryFilter::Unknown(_) => false,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(cat: Category) -> Self {
        CategoryFilter::One(cat)
    }
}

/// A question/answer/category triple as authored in the dataset file.
/// Answers may embed `[label](url)` link markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    pub category: Category,
}

/// An indexed FAQ record: an authored entry plus its assigned id.
#[derive(Debug, Clone, Serialize)]
pub struct FaqRecord {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    pub category: Category,
}

impl FaqRecord {
    pub fn from_entry(id: FaqId, entry: FaqEntry) -> Self {
        Self {
            id,
            question: entry.question,
            answer: entry.answer,
            category: entry.category,
        }
    }
}
