#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("Value does not match any accepted shape encoding")]
    ShapeMismatch,

    #[error("Invalid radius {0}: must be a finite number greater than 0")]
    InvalidRadius(String),

    #[error("Degenerate line: both endpoints are ({x}, {y})")]
    DegenerateLine { x: f64, y: f64 },
}

/// Raised by a [`ShapeSource`](crate::input::ShapeSource) while an attribute is read or invoked.
///
/// Never escapes the coercion layer: it is converted to [`ShapeError::ShapeMismatch`] at the probe boundary.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Attribute probe `{attr}` failed: {msg}")]
pub struct ProbeError {
    pub attr: &'static str,
    pub msg: String,
}

impl ProbeError {
    pub fn new(attr: &'static str, msg: impl Into<String>) -> Self {
        ProbeError { attr, msg: msg.into() }
    }
}
