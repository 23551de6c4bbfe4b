use std::path::PathBuf;

use gravitas_core::prelude::*;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

use crate::model::PyTransitNetwork;
use crate::to_py_err;

/// Gravity accessibility of every origin and the intermediate facility metrics
#[gen_stub_pyclass]
#[pyclass(name = "AccessibilityResult", frozen)]
pub struct PyAccessibilityResult {
    inner: AccessibilityResult,
}

#[gen_stub_pymethods]
#[pymethods]
impl PyAccessibilityResult {
    #[getter]
    fn origins(&self) -> Vec<usize> {
        self.inner.origins.iter().map(|n| n.index()).collect()
    }

    #[getter]
    fn metrics(&self) -> Vec<f64> {
        self.inner.metrics.clone()
    }

    #[getter]
    fn facilities(&self) -> Vec<usize> {
        self.inner.facilities.iter().map(|n| n.index()).collect()
    }

    #[getter]
    fn facility_metrics(&self) -> Vec<f64> {
        self.inner.facility_metrics.clone()
    }

    /// ``(origin_id, metric)`` pairs in origin order
    fn pairs(&self) -> Vec<(usize, f64)> {
        self.inner
            .pairs()
            .map(|(node, metric)| (node.index(), metric))
            .collect()
    }

    /// ``(line, stop_id, metric)`` rows, ascending by metric within each line
    fn line_metrics(&self, network: &PyTransitNetwork) -> Vec<(usize, usize, f64)> {
        line_metrics(&network.network, &self.inner)
            .into_iter()
            .map(|row| (row.line, row.stop.index(), row.metric))
            .collect()
    }

    /// Write the stop metric file and, when a network is given, the line metric file
    #[pyo3(signature = (stop_path, line_path = None, network = None))]
    fn write(
        &self,
        stop_path: PathBuf,
        line_path: Option<PathBuf>,
        network: Option<&PyTransitNetwork>,
    ) -> PyResult<()> {
        write_stop_metrics(&stop_path, &self.inner).map_err(to_py_err)?;
        if let (Some(path), Some(network)) = (line_path, network) {
            let rows = line_metrics(&network.network, &self.inner);
            write_line_metrics(&path, &rows).map_err(to_py_err)?;
        }
        Ok(())
    }

    fn __len__(&self) -> usize {
        self.inner.metrics.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "AccessibilityResult({} origins, {} facilities)",
            self.inner.origins.len(),
            self.inner.facilities.len()
        )
    }
}

/// Compute the two-stage gravity accessibility metric
///
/// Parameters
/// ----------
/// network : TransitNetwork
///     Network to evaluate
/// gravity_exponent : float, default=1.0
///     Positive distance decay exponent
/// multiplier : float, default=1.0
///     Scaling factor of the final metrics
/// lowest_metrics : int, default=1
///     Number of smallest facility contributions summed per origin
/// origins : str, default="stops"
///     ``"stops"`` or ``"population"``
/// threads : int, optional
///     Size of a dedicated worker pool
///
/// Raises
/// ------
/// ValueError
///     If the parameters are invalid for this network
///
/// Notes
/// -----
/// The function releases the GIL during processing to allow other Python threads to continue execution.
#[gen_stub_pyfunction]
#[pyfunction]
#[pyo3(signature = (
    network,
    gravity_exponent = 1.0,
    multiplier = 1.0,
    lowest_metrics = 1,
    origins = "stops",
    threads = None
))]
pub fn accessibility_metrics(
    py: Python<'_>,
    network: &PyTransitNetwork,
    gravity_exponent: f64,
    multiplier: f64,
    lowest_metrics: usize,
    origins: &str,
    threads: Option<usize>,
) -> PyResult<PyAccessibilityResult> {
    let origins = match origins {
        "stops" => Origins::Stops,
        "population" => Origins::Population,
        other => {
            return Err(PyValueError::new_err(format!(
                "origins must be 'stops' or 'population', got '{other}'"
            )));
        }
    };
    let config = AccessConfig {
        gravity_exponent,
        multiplier,
        lowest_metrics,
        origins,
        threads,
    };

    let inner = py
        .detach(|| compute_accessibility(&network.network, &config))
        .map_err(to_py_err)?;
    Ok(PyAccessibilityResult { inner })
}
