//! Python bindings for solitaire-sort.
//!
//! # Quick Start
//!
//! ```python
//! import solitaire_sort
//!
//! status, cards = solitaire_sort.solitaire_sort(b"15253969704")
//! assert status == 1  # the default deal never reorders
//! ```

use pyo3::prelude::*;

mod py_sort;

pub use py_sort::*;

/// solitaire_sort: sorting by faux-solitaire.
#[pymodule]
#[pyo3(name = "solitaire_sort")]
fn solitaire_sort_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_sort::solitaire_sort, m)?)?;
    m.add("MAX_RETRIES", crate::core::MAX_RETRIES)?;
    m.add("HAND_SIZE_MAX", crate::core::HAND_SIZE_MAX)?;
    Ok(())
}
