//! WCAG cell-contrast audit engine plus a sibling file-reader truncation
//! utility, both driven through an explicit document collaborator.

pub mod document;
pub mod engine;
pub mod math;
pub mod reader;
pub mod types;

pub use document::{Disposer, Document, DomEvent, StaticDocument};
pub use engine::audit;
pub use math::color::{Color, ParseColorError};
pub use types::{AuditOptions, AuditOutcome, ContrastRecord, RawCell, DEFAULT_RATIO_CUTOFF};
