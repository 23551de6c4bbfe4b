use std::path::PathBuf;

use gravitas_core::prelude::*;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

use crate::to_py_err;

/// TransitNetwork
///
/// Immutable multi-modal transit network: stops, boarding points,
/// population centers and facilities joined by line, boarding, alighting,
/// walking and access arcs.
///
/// Example:
///
/// .. code-block:: python
///
///     network = load_network_dir("data")
///     result = accessibility_metrics(network, gravity_exponent=1.5)
#[gen_stub_pyclass]
#[pyclass(name = "TransitNetwork", frozen)]
pub struct PyTransitNetwork {
    pub(crate) network: Network,
}

#[gen_stub_pymethods]
#[pymethods]
impl PyTransitNetwork {
    pub fn node_count(&self) -> usize {
        self.network.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.network.arc_count()
    }

    pub fn line_count(&self) -> usize {
        self.network.lines().len()
    }

    /// IDs of the stop nodes in file order
    pub fn stop_ids(&self) -> Vec<usize> {
        self.network.stop_nodes().iter().map(|n| n.index()).collect()
    }

    /// IDs of the facility nodes in file order
    pub fn facility_ids(&self) -> Vec<usize> {
        self.network.facility_nodes().iter().map(|n| n.index()).collect()
    }

    /// ``(name, frequency, headway, capacity)`` of every line
    pub fn line_schedules(&self) -> Vec<(String, f64, f64, f64)> {
        self.network
            .lines()
            .iter()
            .map(|line| {
                (
                    line.name.clone(),
                    line.frequency(),
                    line.headway(),
                    line.capacity(),
                )
            })
            .collect()
    }

    fn __repr__(&self) -> String {
        format!("TransitNetwork with {}", self.network.network_info())
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Load a transit network from its tab-separated definition files
///
/// Parameters
/// ----------
/// node_file : str
///     ``ID Name Type Line Value`` rows, IDs consecutive from 0
/// arc_file : str
///     ``ID Type Line Tail Head Time`` rows
/// transit_file : str
///     Line definitions
/// vehicle_file : str
///     Vehicle types with their seating capacity
/// problem_file : str, optional
///     Planning horizon; 1440 minutes when omitted
///
/// Raises
/// ------
/// RuntimeError
///     If a file is missing or malformed
#[gen_stub_pyfunction]
#[pyfunction(name = "load_network")]
#[pyo3(signature = (node_file, arc_file, transit_file, vehicle_file, problem_file = None))]
pub fn py_load_network(
    py: Python<'_>,
    node_file: PathBuf,
    arc_file: PathBuf,
    transit_file: PathBuf,
    vehicle_file: PathBuf,
    problem_file: Option<PathBuf>,
) -> PyResult<PyTransitNetwork> {
    let files = NetworkFiles {
        node_file,
        arc_file,
        transit_file,
        vehicle_file,
        problem_file,
        flow_file: None,
    };
    load(py, &files)
}

/// Load a transit network from a directory using the conventional file names
/// (``node_data.txt``, ``arc_data.txt``, ``transit_data.txt``,
/// ``vehicle_data.txt``, ``problem_data.txt``)
#[gen_stub_pyfunction]
#[pyfunction(name = "load_network_dir")]
pub fn py_load_network_dir(py: Python<'_>, data_dir: PathBuf) -> PyResult<PyTransitNetwork> {
    load(py, &NetworkFiles::in_dir(data_dir))
}

fn load(py: Python<'_>, files: &NetworkFiles) -> PyResult<PyTransitNetwork> {
    // Release the GIL while reading files
    let network = py.detach(|| create_network(files)).map_err(to_py_err)?;
    Ok(PyTransitNetwork { network })
}
