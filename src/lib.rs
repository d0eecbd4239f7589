//! # FAQX - FAQ Search and Testimonial Engine
//!
//! FAQX is the terminal-first content engine behind a remodeling company's
//! FAQ and testimonial pages: full-text filtering, category partitioning,
//! relevance highlighting, popularity sampling, related-question resolution,
//! and testimonial aggregation over static datasets.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`faq`] - Dataset types, search index, highlighter, answer markup,
//!   and the debounced query commit
//! - [`testimonials`] - Deduplicating testimonial aggregator and shuffle
//! - [`output`] - Result formatting for the terminal
//! - `tui` - Interactive FAQ browser (with the `interactive` feature)
//!
//! ## Quick Start
//!
//! ```ignore
//! use faqx::faq::{bundled_faq, CategoryFilter, FaqSearchIndex};
//!
//! // Build the index from the bundled dataset
//! let index = FaqSearchIndex::new(bundled_faq().unwrap());
//!
//! // Filter by text and category
//! let results = index.filter("warranty", &CategoryFilter::All);
//!
//! for record in results {
//!     println!("[{}] {}", record.category, record.question);
//! }
//! ```
//!
//! ## Design
//!
//! The dataset is immutable after load. Every view (`filter`, `popular`,
//! `related`, `highlight`) is a pure function recomputed per call, so the
//! engine needs no locking and no cache invalidation; the only stateful
//! piece is the keystroke debouncer, which coalesces typing bursts into a
//! single committed query.

pub mod faq;
pub mod output;
pub mod testimonials;
#[cfg(feature = "interactive")]
pub mod tui;
