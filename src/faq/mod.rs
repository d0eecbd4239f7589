//! FAQ content engine: dataset types, search index, highlighter, answer
//! markup, and the debounced query commit.

pub mod dataset;
pub mod debounce;
pub mod highlight;
pub mod markup;
pub mod search;
pub mod types;

pub use dataset::{bundled_faq, load_faq, parse_faq};
pub use debounce::{DebounceConfig, QueryDebouncer};
pub use highlight::{highlight, HighlightSpan};
pub use markup::{parse_answer_markup, AnswerSegment};
pub use search::FaqSearchIndex;
pub use types::{Category, CategoryFilter, FaqEntry, FaqId, FaqRecord};
