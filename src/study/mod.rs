//! Study module - navigation and card sequencing
//!
//! UI-agnostic core of the study workflow. A presentation adapter drives a
//! [`StudySession`] through explicit transition functions and renders the
//! view data it returns; it never owns selection or sequencing logic.
//!
//! # Architecture
//!
//! - `navigation`: level sequence and bound selections (`NavigationState`)
//! - `sequence`: original vs. active card order and position (`CardSequence`)
//! - `session`: the controller that ties both to a catalog (`StudySession`)

pub mod navigation;
pub mod sequence;
pub mod session;

pub use navigation::{IgnoreReason, Layout, Level, NavOutcome, NavigationState};
pub use sequence::{CardSequence, shuffled_order};
pub use session::{
    CardView, ControlState, LOAD_ERROR_QUESTION, ListEntry, SelectionView, StudySession,
};
