//! Sort bindings for Python.

use pyo3::exceptions::{PyMemoryError, PyValueError};
use pyo3::prelude::*;

use crate::board::ScrambleDeal;
use crate::core::{Card, SortConfig, SortError};
use crate::sort::{SolitaireSorter, SortReport};

fn to_py_err(err: SortError) -> PyErr {
    if err.is_fatal() {
        PyMemoryError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

/// Sort a sequence of byte-sized cards by playing solitaire with it.
///
/// # Arguments
/// - cards: The cards (bytes or a list of ints in 0..256)
/// - max_retries: Number of trials before giving up
/// - seed: RNG seed for the trials
/// - scramble: Shuffle each trial's deck instead of dealing it verbatim
///
/// Returns `(status, cards)`: status is 0 on success and 1 on failure; the
/// cards are sorted on success and unchanged otherwise.
#[pyfunction]
#[pyo3(signature = (
    cards,
    max_retries = crate::core::MAX_RETRIES,
    seed = crate::core::DEFAULT_SEED,
    scramble = false,
))]
pub fn solitaire_sort(
    cards: Vec<u8>,
    max_retries: usize,
    seed: u64,
    scramble: bool,
) -> PyResult<(i32, Vec<u8>)> {
    let config = SortConfig::default()
        .with_max_retries(max_retries)
        .with_seed(seed);
    let mut data: Vec<Card> = cards.into_iter().map(Card).collect();

    let report: SortReport = if scramble {
        SolitaireSorter::with_strategy(config, ScrambleDeal).sort(&mut data)
    } else {
        SolitaireSorter::new(config).sort(&mut data)
    }
    .map_err(to_py_err)?;

    Ok((report.status.code(), data.into_iter().map(u8::from).collect()))
}
