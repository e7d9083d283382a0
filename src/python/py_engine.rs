//! Tour engine bindings for Python.

use numpy::PyArray2;
use pyo3::prelude::*;

use crate::core::{BoardSize, Square, TourEngine, TourError};

use super::py_core::PyStatusReport;

fn to_py_err(e: TourError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

fn board_size(size: usize) -> PyResult<BoardSize> {
    BoardSize::new(size).map_err(to_py_err)
}

/// Python wrapper for TourEngine.
///
/// Squares are `(row, col)` tuples.
#[pyclass(name = "TourEngine")]
#[derive(Clone)]
pub struct PyTourEngine {
    engine: TourEngine,
}

#[pymethods]
impl PyTourEngine {
    /// Create an empty tour on a `size` x `size` board.
    #[new]
    #[pyo3(signature = (size = 8))]
    fn new(size: usize) -> PyResult<Self> {
        Ok(Self {
            engine: TourEngine::new(board_size(size)?),
        })
    }

    /// Place the knight. Returns the status name.
    fn place(&mut self, row: u8, col: u8) -> PyResult<String> {
        self.engine
            .place(Square::new(row, col))
            .map(|s| s.to_string())
            .map_err(to_py_err)
    }

    /// Move the knight. Returns the status name.
    #[pyo3(name = "move")]
    fn move_to(&mut self, row: u8, col: u8) -> PyResult<String> {
        self.engine
            .move_to(Square::new(row, col))
            .map(|s| s.to_string())
            .map_err(to_py_err)
    }

    /// Place if the board is empty, otherwise move.
    fn play(&mut self, row: u8, col: u8) -> PyResult<String> {
        self.engine
            .play(Square::new(row, col))
            .map(|s| s.to_string())
            .map_err(to_py_err)
    }

    /// Undo the last placement or move. Returns the vacated square, if any.
    fn undo(&mut self) -> Option<(u8, u8)> {
        self.engine.undo().map(|sq| (sq.row(), sq.col()))
    }

    /// Clear the tour, optionally changing the board size.
    #[pyo3(signature = (size = None))]
    fn reset(&mut self, size: Option<usize>) -> PyResult<()> {
        let size = size.map(board_size).transpose()?;
        self.engine.reset(size);
        Ok(())
    }

    /// Legal destinations from the current square.
    fn legal_moves(&self) -> Vec<(u8, u8)> {
        self.engine
            .legal_moves()
            .iter()
            .map(|sq| (sq.row(), sq.col()))
            .collect()
    }

    /// Status name: "empty", "in progress", "won" or "stuck".
    fn status(&self) -> String {
        self.engine.status().to_string()
    }

    /// Status with counts.
    fn report(&self) -> PyStatusReport {
        PyStatusReport(self.engine.report())
    }

    /// Visited squares in order.
    fn history(&self) -> Vec<(u8, u8)> {
        self.engine
            .history()
            .iter()
            .map(|sq| (sq.row(), sq.col()))
            .collect()
    }

    /// 1-based move number of a square, or None if unvisited.
    fn move_number(&self, row: u8, col: u8) -> Option<u32> {
        self.engine.move_number(Square::new(row, col))
    }

    /// Current square, or None before placement.
    #[getter]
    fn current(&self) -> Option<(u8, u8)> {
        self.engine.current().map(|sq| (sq.row(), sq.col()))
    }

    #[getter]
    fn size(&self) -> usize {
        self.engine.size().get()
    }

    #[getter]
    fn visited_count(&self) -> usize {
        self.engine.visited_count()
    }

    #[getter]
    fn total_squares(&self) -> usize {
        self.engine.total_squares()
    }

    /// Move numbers as a (size, size) uint32 array; 0 marks unvisited squares.
    fn board_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        let n = self.engine.size().get();
        let rows: Vec<Vec<u32>> = (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| {
                        self.engine
                            .move_number(Square::new(row as u8, col as u8))
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .collect();
        PyArray2::from_vec2_bound(py, &rows)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    fn __repr__(&self) -> String {
        format!(
            "TourEngine(size={}, visited={}/{}, status={})",
            self.engine.size().get(),
            self.engine.visited_count(),
            self.engine.total_squares(),
            self.engine.status()
        )
    }
}
