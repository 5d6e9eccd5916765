use std::fmt;

use ndarray::Array1;

use crate::error::ObjectiveError;

type Pointer = Box<dyn Fn(&Array1<f64>) -> Result<f64, ObjectiveError>>;

/// Named objective function to minimize.
pub struct Function {
    name: String,
    pointer: Pointer,
}

impl Function {
    /// Wrap an objective that cannot fail.
    pub fn new<F>(name: &str, f: F) -> Self
    where
        F: Fn(&Array1<f64>) -> f64 + 'static,
    {
        let pointer = move |x: &Array1<f64>| -> Result<f64, ObjectiveError> { Ok(f(x)) };
        Self { name: name.to_string(), pointer: Box::new(pointer) }
    }

    /// Wrap an objective whose failures abort the run.
    pub fn try_new<F>(name: &str, f: F) -> Self
    where
        F: Fn(&Array1<f64>) -> Result<f64, ObjectiveError> + 'static,
    {
        Self { name: name.to_string(), pointer: Box::new(f) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn evaluate(&self, x: &Array1<f64>) -> Result<f64, ObjectiveError> {
        (self.pointer)(x)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function").field("name", &self.name).finish()
    }
}
