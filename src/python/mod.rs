//! Python bindings for the knights-tour engine.
//!
//! # Quick Start
//!
//! ```python
//! import knights_tour as kt
//!
//! engine = kt.TourEngine(size=5)
//! engine.place(0, 0)
//! engine.legal_moves()        # [(2, 1), (1, 2)]
//! engine.move(2, 1)
//! engine.undo()               # (2, 1)
//! engine.board_numpy()        # 5x5 array of move numbers
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// knights_tour: an interactive Knight's Tour engine.
#[pymodule]
fn knights_tour(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTourEngine>()?;
    m.add_class::<PyStatusReport>()?;
    Ok(())
}
