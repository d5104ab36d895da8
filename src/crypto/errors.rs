use thiserror::Error;

#[derive(Error, Debug)]
pub enum RlweError {
    #[error("Invalid parameters: {message}")]
    InvalidParameters { message: String },

    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    #[error("Coefficient index {index} outside ring degree {degree}")]
    IndexOutOfRange { index: usize, degree: usize },
}

pub type RlweResult<T> = Result<T, RlweError>;
