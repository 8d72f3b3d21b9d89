use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::catalog::Catalog as RustCatalog;
use crate::core::Category;
use crate::format::if_empty_zero_width_space;
use crate::resolver;
use crate::tree::collapse_and_format;

fn to_py_err(e: crate::error::LeaderboardError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

/// Python wrapper for a loaded leaderboard catalog
#[pyclass]
struct CategoryFormatter {
    catalog: RustCatalog,
}

#[pymethods]
impl CategoryFormatter {
    /// Load a catalog file (YAML, or JSON by extension)
    #[new]
    fn new(catalog_path: String) -> PyResult<Self> {
        let catalog = RustCatalog::load(&catalog_path).map_err(to_py_err)?;
        Ok(Self { catalog })
    }

    /// Resolve a typed name against the catalog entities
    fn resolve(&self, search: String) -> Vec<String> {
        resolver::resolve(&search, self.catalog.entities())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Resolve a typed name to exactly one entity, raising ValueError otherwise
    fn resolve_one(&self, search: String) -> PyResult<String> {
        resolver::resolve_one(&search, self.catalog.entities())
            .cloned()
            .map_err(to_py_err)
    }

    /// Collapsed label for a set of category ids or labels
    fn format(&self, categories: Vec<String>) -> PyResult<String> {
        let held = categories
            .iter()
            .map(|search| self.find_category(search))
            .collect::<PyResult<Vec<&Category>>>()?;
        Ok(if_empty_zero_width_space(collapse_and_format(
            held,
            self.catalog.reference_tree(),
        )))
    }

    /// Catalog categories as dicts
    fn categories(&self, py: Python<'_>) -> PyResult<Vec<PyObject>> {
        self.catalog
            .categories()
            .iter()
            .map(|category| category_to_py(py, category))
            .collect()
    }
}

impl CategoryFormatter {
    fn find_category(&self, search: &str) -> PyResult<&Category> {
        match self.catalog.category(search) {
            Some(category) => Ok(category),
            None => resolver::resolve_one(search, self.catalog.categories()).map_err(to_py_err),
        }
    }
}

/// Convert Category to Python dict
fn category_to_py(py: Python, category: &Category) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    dict.set_item("id", category.id())?;
    dict.set_item("label", category.label())?;
    let path: Vec<&str> = category.metrics().iter().map(|m| m.id.as_str()).collect();
    dict.set_item("path", path)?;
    Ok(dict.into())
}

/// Resolve `search` against a list of names
#[pyfunction]
fn resolve(search: String, names: Vec<String>) -> Vec<String> {
    resolver::resolve(&search, &names)
        .into_iter()
        .cloned()
        .collect()
}

/// Python module
#[pymodule]
fn kissbot_leaderboard(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<CategoryFormatter>()?;
    m.add_function(wrap_pyfunction!(resolve, m)?)?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
