//! Connector error types

use lpconnector_math::MathError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ConnectorError {
    // Initialization
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Input validation
    /// Sqrt price outside pool bounds, width outside 1-9999 bps, or no amounts
    InvalidInput = 10,
    /// Zero sqrt price passed to a price conversion
    InvalidPrice = 11,
    /// Minimum leg share outside 1-5000 bps
    InvalidPolicy = 12,

    // Computation
    /// Range failed to bracket the current price
    InvariantViolation = 20,
    /// Result does not fit in 256 bits
    Overflow = 21,
}

impl From<MathError> for ConnectorError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidInput => ConnectorError::InvalidInput,
            MathError::InvalidPrice => ConnectorError::InvalidPrice,
            MathError::InvariantViolation => ConnectorError::InvariantViolation,
            MathError::Overflow => ConnectorError::Overflow,
        }
    }
}
