//! Embedded Python runtime hosting the Ocean samplers.
//!
//! The interpreter is a process-wide singleton: initialized at most once,
//! never torn down. Every invocation runs under a process-wide critical
//! section held from path setup through result coercion, so concurrent
//! callers queue rather than interleave inside the interpreter.
//!
//! Failures while augmenting `sys.path` are swallowed after a debug log —
//! the solver's dependencies may already be satisfied by the ambient
//! environment, and the probe must never mask a working invocation.

use std::path::Path;
use std::sync::{Mutex, OnceLock};

use pyo3::prelude::*;
use pyo3::types::{PyList, PySequence};

use qanneal_qubo::QuadraticTerm;

use crate::backend::Backend;
use crate::error::{BridgeError, BridgeResult};
use crate::result::SolverResult;

/// Python module hosting the external solver.
const HELPER_MODULE: &str = "qanneal_dwave";

/// Entry point resolved by name inside [`HELPER_MODULE`].
const ENTRY_POINT: &str = "solve_qubo";

/// Default directory holding the helper module.
const DEFAULT_HELPER_DIR: &str = "python";

/// Environment variable overriding the helper-module directory.
const HELPER_DIR_ENV: &str = "QANNEAL_PYTHON_DIR";

/// Process-wide handle to the initialized interpreter.
struct ForeignRuntime {
    /// Serializes whole invocations, not just interpreter access.
    call_lock: Mutex<()>,
}

/// Initialize the interpreter exactly once and return the shared handle.
///
/// Construction races resolve to a single winner; losers block in
/// `get_or_init` until the interpreter is ready.
fn runtime() -> &'static ForeignRuntime {
    static RUNTIME: OnceLock<ForeignRuntime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        Python::initialize();
        ForeignRuntime {
            call_lock: Mutex::new(()),
        }
    })
}

/// Call `qanneal_dwave.solve_qubo` with the given term list.
///
/// Blocks for the solver's full runtime. Every Python-side failure is
/// folded into a [`BridgeError`]; this function never panics on foreign
/// input.
pub(crate) fn invoke(
    terms: &[QuadraticTerm],
    backend: Backend,
    config_path: Option<&Path>,
) -> BridgeResult<SolverResult> {
    let rt = runtime();
    let _guard = rt.call_lock.lock().unwrap_or_else(|e| e.into_inner());

    tracing::debug!(backend = %backend, terms = terms.len(), "invoking embedded solver");

    Python::attach(|py| {
        augment_sys_path(py);

        let solve = resolve_entry_point(py)
            .map_err(|e| BridgeError::InvocationFailed(exception_message(py, &e)))?;

        let wire_terms: Vec<(u32, u32, f64)> =
            terms.iter().map(|t| (t.row, t.col, t.weight)).collect();
        // "No config" must reach the solver as Python `None`, not as an
        // empty string — the two have different default-resolution
        // semantics on the far side.
        let config = config_path.map(|p| p.to_string_lossy().into_owned());

        let ret = solve
            .call1((wire_terms, backend.as_str(), config))
            .map_err(|e| BridgeError::InvocationFailed(exception_message(py, &e)))?;

        coerce_result(py, &ret)
    })
}

/// Interpret the foreign return value as `(assignment, objective)`.
fn coerce_result(py: Python<'_>, ret: &Bound<'_, PyAny>) -> BridgeResult<SolverResult> {
    let seq = ret.downcast::<PySequence>().map_err(|_| {
        BridgeError::MalformedResult("result is not an (assignment, objective) sequence".into())
    })?;

    let len = seq
        .len()
        .map_err(|e| BridgeError::MalformedResult(exception_message(py, &e)))?;
    if len != 2 {
        return Err(BridgeError::MalformedResult(format!(
            "expected 2 elements, got {len}"
        )));
    }

    let assignment: Vec<u8> = seq
        .get_item(0)
        .and_then(|v| v.extract())
        .map_err(|e| BridgeError::MalformedResult(exception_message(py, &e)))?;
    let objective: f64 = seq
        .get_item(1)
        .and_then(|v| v.extract())
        .map_err(|e| BridgeError::MalformedResult(exception_message(py, &e)))?;

    Ok(SolverResult {
        assignment,
        objective,
    })
}

/// Best-effort `sys.path` augmentation: the helper-module directory plus,
/// when present on disk, a project-local venv's site-packages.
fn augment_sys_path(py: Python<'_>) {
    let helper_dir =
        std::env::var(HELPER_DIR_ENV).unwrap_or_else(|_| DEFAULT_HELPER_DIR.to_string());
    if let Err(err) = insert_path(py, &helper_dir) {
        tracing::debug!(
            dir = %helper_dir,
            error = %exception_message(py, &err),
            "could not add helper directory to sys.path"
        );
    }

    match venv_site_packages(py) {
        Ok(Some(dir)) => {
            if let Err(err) = insert_path(py, &dir) {
                tracing::debug!(
                    dir = %dir,
                    error = %exception_message(py, &err),
                    "could not add venv site-packages to sys.path"
                );
            }
        }
        Ok(None) => {}
        Err(err) => {
            tracing::debug!(
                error = %exception_message(py, &err),
                "could not probe for a project-local venv"
            );
        }
    }
}

fn insert_path(py: Python<'_>, dir: &str) -> PyResult<()> {
    let sys = py.import("sys")?;
    let path_attr = sys.getattr("path")?;
    let path = path_attr.downcast::<PyList>().map_err(PyErr::from)?;
    path.insert(0, dir)?;
    Ok(())
}

/// Locate `.venv/lib/python{major}.{minor}/site-packages` for the running
/// interpreter version, if the directory exists.
fn venv_site_packages(py: Python<'_>) -> PyResult<Option<String>> {
    let version_info = py.import("sys")?.getattr("version_info")?;
    let major: u32 = version_info.getattr("major")?.extract()?;
    let minor: u32 = version_info.getattr("minor")?.extract()?;

    let dir = format!(".venv/lib/python{major}.{minor}/site-packages");
    if Path::new(&dir).is_dir() {
        Ok(Some(dir))
    } else {
        Ok(None)
    }
}

fn resolve_entry_point(py: Python<'_>) -> PyResult<Bound<'_, PyAny>> {
    let module = py.import(HELPER_MODULE)?;
    module.getattr(ENTRY_POINT)
}

/// The exception's own message, verbatim (`str(exc_value)`).
fn exception_message(py: Python<'_>, err: &PyErr) -> String {
    err.value(py).to_string()
}
