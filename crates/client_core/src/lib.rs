//! Client-side core for the results dashboard: the result-source seam and
//! the filter/sort view state machine.

pub mod source;
pub mod view;

pub use source::{HttpResultSource, ResultSource, StaticResultSource, TransportError};
pub use view::{ResultsView, ViewOptions, ViewPhase};
