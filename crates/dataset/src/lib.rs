//! Solver-output datasets and pin-addressed result views.
//!
//! The external solver writes a line-oriented text dump; [`parse`] turns it
//! into a [`Dataset`] of named complex vectors without ever failing, and
//! the result types in [`results`] project a dataset into analysis-shaped
//! views that answer queries like "the voltage at this component's
//! terminal" using the node numbering resolved by `netbind_core`.

pub mod dataset;
pub mod errors;
pub mod parser;
pub mod results;

pub use dataset::{Dataset, Status, Vector};
pub use errors::{BindError, DatasetError};
pub use parser::parse;
pub use results::{
    AcResult, AnalysisKind, DcResult, SParamResult, TransientResult, TypedResult, typed_result,
};
