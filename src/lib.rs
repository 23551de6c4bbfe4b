use gravitas_core::Error;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3_stub_gen::define_stub_info_gatherer;

use diagnostics::py_loading_factors;
use metrics::{PyAccessibilityResult, accessibility_metrics};
use model::{PyTransitNetwork, py_load_network, py_load_network_dir};

pub mod diagnostics;
pub mod metrics;
pub mod model;

/// A Python module implemented in Rust.
#[pymodule]
fn gravitas(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyTransitNetwork>()?;
    m.add_function(wrap_pyfunction!(py_load_network, m)?)?;
    m.add_function(wrap_pyfunction!(py_load_network_dir, m)?)?;

    m.add_class::<PyAccessibilityResult>()?;
    m.add_function(wrap_pyfunction!(accessibility_metrics, m)?)?;

    m.add_function(wrap_pyfunction!(py_loading_factors, m)?)?;
    Ok(())
}

/// Bad parameters surface as `ValueError`, everything else as `RuntimeError`
pub(crate) fn to_py_err(error: Error) -> PyErr {
    match error {
        Error::ConfigurationError(_) | Error::InvalidSource(_) => {
            PyValueError::new_err(error.to_string())
        }
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

define_stub_info_gatherer!(stub_info);
