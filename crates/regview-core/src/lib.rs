//! # regview-core — Foundational Types for the Control-Mapping Core
//!
//! This crate is the leaf of the regview workspace. It defines the
//! type-system primitives the sorter, grouper, and strategy table are
//! built from. Every other crate in the workspace depends on
//! `regview-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Framework` enum.** One definition of the supported
//!    regulatory frameworks, with canonical keys and alias translation at
//!    the boundary. Exhaustive `match` everywhere: adding a framework
//!    forces every consumer to handle it.
//!
//! 2. **Named normalizers.** Control-ID sanitization comes in two distinct
//!    operations, [`sanitize_annotated`] and [`sanitize_labeled`]. They are
//!    not interchangeable; callers pick by the annotation style of the
//!    input string.
//!
//! 3. **Total-order comparators.** Every ID comparator in [`ordering`] is
//!    a strict total order over arbitrary strings. Malformed numeric
//!    segments compare as zero; no comparator panics or mutates its input.
//!
//! 4. **Silent degradation at the edges.** Unknown framework keys are a
//!    parse error only where a key is explicitly parsed. The view-model
//!    operations built on top of this crate fall back to identity
//!    behavior instead of failing.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `regview-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, `Serialize`,
//!   `Deserialize`.

pub mod control_id;
pub mod error;
pub mod framework;
pub mod ordering;
pub mod row;

// Re-export primary types for ergonomic imports.
pub use control_id::{extract_prefix, sanitize_annotated, sanitize_labeled};
pub use error::{RegviewError, ValidationError};
pub use framework::Framework;
pub use ordering::IdOrdering;
pub use row::{ControlRow, DomainOption};
