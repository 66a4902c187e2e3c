//! # worddee-algo - vocabulary practice core
//!
//! Pure Rust implementations of the deterministic parts of practice
//! handling:
//!
//! - **Text Normalization** - whitespace collapsing and word extraction
//! - **Sentence Scoring** - rule-based 0-10 grade with feedback and a cosmetic correction
//! - **Duration Normalization** - raw timer seconds to bounded minutes learned
//! - **Timestamp Resolution** - client clock first, server clock as fallback
//! - **Streak Aggregation** - consecutive practiced days with a one-day grace
//!
//! Nothing in this crate performs I/O. Storage and HTTP live in the backend.
//!
//! ## Modules
//!
//! - [`text`] - normalization and shape predicates
//! - [`scoring`] - scoring rules and the fold that combines them
//! - [`duration`] - minutes-learned policy
//! - [`timestamp`] - canonical-zone timestamp resolution
//! - [`streak`] - consecutive-day streak
//! - [`types`] - shared types and constants
//!
//! ## Example
//!
//! ```rust
//! use worddee_algo::{normalize, score_sentence};
//!
//! let normalized = normalize("the quick brown fox jumps");
//! let result = score_sentence(&normalized, "fox");
//! assert_eq!(result.score, 5.0);
//! assert_eq!(result.corrected_sentence, "The quick brown fox jumps.");
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod duration;
pub mod scoring;
pub mod streak;
pub mod text;
pub mod timestamp;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

pub use types::*;

pub use duration::normalize_duration;
pub use scoring::{correct_sentence, score_sentence};
pub use streak::compute_streak;
pub use text::{normalize, NormalizedText};
pub use timestamp::{
    default_zone, parse_client_time, parse_utc_offset, resolve_practiced_at, resolve_today,
    ClientTime,
};
