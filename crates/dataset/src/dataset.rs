//! Parsed solver output.

use indexmap::IndexMap;
use num_complex::Complex64;

use crate::errors::DatasetError;

/// Overall outcome of one solver invocation, reconstructed from its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// A dataset was found and no error lines were seen.
    Success,
    /// The solver printed error lines; partial vectors may still be present.
    Error,
    /// The output carried no recognizable dataset at all.
    ParseError,
    /// No output has been parsed yet.
    #[default]
    NotRun,
}

/// One named result vector.
#[derive(Debug, Clone)]
pub struct Vector {
    pub values: Vec<Complex64>,
    /// Names of the independent vectors this one is swept against. Empty
    /// for independent vectors.
    pub dependencies: Vec<String>,
    /// True for sweep axes (frequency, time), false for measured
    /// quantities.
    pub independent: bool,
}

/// In-memory form of a solver's raw text output.
///
/// Immutable once produced: re-parsing always builds a fresh instance.
/// Parse problems are data here, never panics or errors; see the `status`,
/// `errors` and `warnings` accessors.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub(crate) status: Status,
    pub(crate) version: Option<String>,
    pub(crate) vectors: IndexMap<String, Vector>,
    pub(crate) errors: Vec<String>,
    pub(crate) warnings: Vec<String>,
    pub(crate) raw: String,
}

impl Dataset {
    pub fn status(&self) -> Status {
        self.status
    }

    /// True unless the dataset parsed cleanly.
    pub fn is_err(&self) -> bool {
        self.status != Status::Success
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The raw text this dataset was parsed from, kept for diagnostics.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn vector_names(&self) -> Vec<&str> {
        self.vectors.keys().map(String::as_str).collect()
    }

    pub fn vectors(&self) -> impl Iterator<Item = (&str, &Vector)> {
        self.vectors.iter().map(|(name, v)| (name.as_str(), v))
    }

    pub fn independents(&self) -> impl Iterator<Item = (&str, &Vector)> {
        self.vectors().filter(|(_, v)| v.independent)
    }

    pub fn dependents(&self) -> impl Iterator<Item = (&str, &Vector)> {
        self.vectors().filter(|(_, v)| !v.independent)
    }

    pub fn vector(&self, name: &str) -> Result<&Vector, DatasetError> {
        self.vectors
            .get(name)
            .ok_or_else(|| DatasetError::VectorNotFound {
                name: name.to_string(),
                available: self.vectors.keys().cloned().collect(),
            })
    }

    /// Full complex values of a named vector.
    pub fn complex_vector(&self, name: &str) -> Result<&[Complex64], DatasetError> {
        Ok(&self.vector(name)?.values)
    }

    /// Real parts of a named vector.
    pub fn real_vector(&self, name: &str) -> Result<Vec<f64>, DatasetError> {
        Ok(self.vector(name)?.values.iter().map(|c| c.re).collect())
    }

    /// Imaginary parts of a named vector.
    pub fn imag_vector(&self, name: &str) -> Result<Vec<f64>, DatasetError> {
        Ok(self.vector(name)?.values.iter().map(|c| c.im).collect())
    }
}
