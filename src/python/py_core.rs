//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{StatusReport, TourStatus};

/// Python wrapper for StatusReport.
#[pyclass(name = "StatusReport")]
#[derive(Clone, Debug)]
pub struct PyStatusReport(pub StatusReport);

#[pymethods]
impl PyStatusReport {
    /// Status name.
    #[getter]
    fn status(&self) -> String {
        self.0.status.to_string()
    }

    #[getter]
    fn visited(&self) -> usize {
        self.0.visited
    }

    #[getter]
    fn total(&self) -> usize {
        self.0.total
    }

    #[getter]
    fn legal_moves(&self) -> usize {
        self.0.legal_moves
    }

    /// True once the tour is won or stuck.
    fn is_terminal(&self) -> bool {
        self.0.status.is_terminal()
    }

    fn is_won(&self) -> bool {
        self.0.status == TourStatus::Won
    }

    /// The one-line status message.
    fn message(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "StatusReport(status={}, visited={}, total={}, legal_moves={})",
            self.0.status, self.0.visited, self.0.total, self.0.legal_moves
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
