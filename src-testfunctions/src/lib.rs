//! Optimization test functions library
//!
//! Benchmark objectives used to exercise the pollination optimizer, together
//! with their search box and known global minimum.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use pollinate_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let meta = get_function_metadata("rastrigin").unwrap();
//! assert_eq!(meta.bounds(3), vec![(-5.12, 5.12); 3]);
//! ```

use ndarray::Array1;

pub mod functions;
pub use functions::*;

/// Test function type definition
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Metadata for a test function
#[derive(Debug, Clone, Copy)]
pub struct FunctionMetadata {
    pub name: &'static str,
    pub function: TestFunction,
    /// Per-variable search interval
    pub lower: f64,
    pub upper: f64,
    /// Coordinate shared by every component of the minimizer
    pub minimizer: f64,
    /// Global minimum value for a given dimension
    pub minimum: fn(usize) -> f64,
    pub multimodal: bool,
    /// Recommended number of variables
    pub default_dim: usize,
    pub description: &'static str,
}

impl FunctionMetadata {
    /// Box bounds repeated over `dim` variables.
    pub fn bounds(&self, dim: usize) -> Vec<(f64, f64)> {
        vec![(self.lower, self.upper); dim]
    }

    pub fn global_minimum(&self, dim: usize) -> f64 {
        (self.minimum)(dim)
    }

    pub fn global_minimizer(&self, dim: usize) -> Vec<f64> {
        vec![self.minimizer; dim]
    }
}

fn zero(_dim: usize) -> f64 {
    0.0
}

fn styblinski_tang_minimum(dim: usize) -> f64 {
    -39.16617 * dim as f64
}

const REGISTRY: &[FunctionMetadata] = &[
    FunctionMetadata {
        name: "sphere",
        function: sphere,
        lower: -5.12,
        upper: 5.12,
        minimizer: 0.0,
        minimum: zero,
        multimodal: false,
        default_dim: 2,
        description: "N-dimensional bowl",
    },
    FunctionMetadata {
        name: "sum_squares",
        function: sum_squares,
        lower: -10.0,
        upper: 10.0,
        minimizer: 0.0,
        minimum: zero,
        multimodal: false,
        default_dim: 2,
        description: "N-dimensional axis-parallel hyper-ellipsoid",
    },
    FunctionMetadata {
        name: "rosenbrock",
        function: rosenbrock,
        lower: -5.0,
        upper: 10.0,
        minimizer: 1.0,
        minimum: zero,
        multimodal: false,
        default_dim: 2,
        description: "N-dimensional curved valley",
    },
    FunctionMetadata {
        name: "zakharov",
        function: zakharov,
        lower: -5.0,
        upper: 10.0,
        minimizer: 0.0,
        minimum: zero,
        multimodal: false,
        default_dim: 2,
        description: "N-dimensional plate-shaped function",
    },
    FunctionMetadata {
        name: "rastrigin",
        function: rastrigin,
        lower: -5.12,
        upper: 5.12,
        minimizer: 0.0,
        minimum: zero,
        multimodal: true,
        default_dim: 2,
        description: "N-dimensional lattice of local minima",
    },
    FunctionMetadata {
        name: "ackley",
        function: ackley,
        lower: -32.768,
        upper: 32.768,
        minimizer: 0.0,
        minimum: zero,
        multimodal: true,
        default_dim: 2,
        description: "N-dimensional flat plateau with a central hole",
    },
    FunctionMetadata {
        name: "griewank",
        function: griewank,
        lower: -600.0,
        upper: 600.0,
        minimizer: 0.0,
        minimum: zero,
        multimodal: true,
        default_dim: 2,
        description: "N-dimensional product of cosines over a wide bowl",
    },
    FunctionMetadata {
        name: "styblinski_tang",
        function: styblinski_tang,
        lower: -5.0,
        upper: 5.0,
        minimizer: -2.903534,
        minimum: styblinski_tang_minimum,
        multimodal: true,
        default_dim: 2,
        description: "N-dimensional quartic with 2^n local minima",
    },
    FunctionMetadata {
        name: "schwefel",
        function: schwefel,
        lower: -500.0,
        upper: 500.0,
        minimizer: 420.9687,
        minimum: zero,
        multimodal: true,
        default_dim: 2,
        description: "N-dimensional deceptive function, best minimum near the box corner",
    },
];

/// Metadata for every available test function, in a stable order.
pub fn all_functions() -> &'static [FunctionMetadata] {
    REGISTRY
}

pub fn get_function_metadata(name: &str) -> Option<&'static FunctionMetadata> {
    REGISTRY.iter().find(|m| m.name == name)
}

pub fn get_function(name: &str) -> Option<TestFunction> {
    get_function_metadata(name).map(|m| m.function)
}

/// Bounds of `name` over `dim` variables, or `default_bounds` if unknown.
pub fn get_function_bounds_vec(name: &str, dim: usize, default_bounds: (f64, f64)) -> Vec<(f64, f64)> {
    match get_function_metadata(name) {
        Some(meta) => meta.bounds(dim),
        None => vec![default_bounds; dim],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_minima_are_consistent() {
        for meta in all_functions() {
            for dim in [1, 2, 5] {
                let x = Array1::from(meta.global_minimizer(dim));
                let f = (meta.function)(&x);
                let expected = meta.global_minimum(dim);
                assert!(
                    (f - expected).abs() < 1e-3 * dim as f64,
                    "{} in {}D: f(x*) = {}, expected {}",
                    meta.name,
                    dim,
                    f,
                    expected
                );
                assert!(meta.lower <= meta.minimizer && meta.minimizer <= meta.upper);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert!(get_function("ackley").is_some());
        assert!(get_function("unknown").is_none());
        assert_eq!(get_function_bounds_vec("schwefel", 2, (-1.0, 1.0)), vec![(-500.0, 500.0); 2]);
        assert_eq!(get_function_bounds_vec("unknown", 3, (-1.0, 1.0)), vec![(-1.0, 1.0); 3]);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = all_functions().iter().map(|m| m.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all_functions().len());
    }
}
