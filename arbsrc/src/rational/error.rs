use thiserror::Error;

#[derive(Error, Debug, PartialEq, Copy, Clone)]
/// An error produced by rational arithmetic or approximation.
pub enum RationalError {
    /// The denominator is zero.
    #[error("Denominator must not be zero")]
    DivisionByZero,
    /// The value to approximate is NaN or infinite.
    #[error("Cannot approximate a non-finite value ({0})")]
    NotFinite(f64),
    /// The value to approximate does not fit into a 64-bit convergent.
    #[error("Value ({0}) is out of the representable range")]
    OutOfRange(f64),
}
