use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid month key `{0}`: expected YYYY-MM")]
    InvalidMonthKey(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
