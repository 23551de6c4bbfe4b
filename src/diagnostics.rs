use std::path::PathBuf;

use gravitas_core::prelude::*;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::model::PyTransitNetwork;
use crate::to_py_err;

/// Flow-to-capacity ratios of the core arcs for an initial flow file
///
/// Returns a dict with ``factors`` (one per core arc), ``max``,
/// ``mean_core`` and ``mean_line``.
#[gen_stub_pyfunction]
#[pyfunction(name = "loading_factors")]
pub fn py_loading_factors<'py>(
    py: Python<'py>,
    network: &PyTransitNetwork,
    flow_file: PathBuf,
) -> PyResult<Bound<'py, PyDict>> {
    let summary = py
        .detach(|| {
            let flows = load_flows(&flow_file, &network.network)?;
            loading_factors(&network.network, &flows)
        })
        .map_err(to_py_err)?;

    let dict = PyDict::new(py);
    dict.set_item("factors", summary.factors)?;
    dict.set_item("max", summary.max)?;
    dict.set_item("mean_core", summary.mean_core)?;
    dict.set_item("mean_line", summary.mean_line)?;
    Ok(dict)
}
