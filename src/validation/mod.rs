pub mod error;
pub mod rules;
pub mod validator;

pub use error::ValidationError;
pub use validator::{validate, ValidRecord, Validator};
