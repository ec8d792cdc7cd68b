pub mod number_validator;

pub use number_validator::{NumberValidator, NumberValidatorError};
