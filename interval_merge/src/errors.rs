#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("start {start} must not be greater than end {end}")]
    InvalidStart { start: f64, end: f64 },

    #[error("end {end} must not be less than start {start}")]
    InvalidEnd { start: f64, end: f64 },

    #[error("interval list must start with '[' and end with ']': {0}")]
    Brackets(String),

    #[error("expected two boundaries, found {found} in {chunk}")]
    ElementCount { chunk: String, found: usize },

    #[error("invalid boundary {text:?} in {chunk}")]
    InvalidNumber {
        chunk: String,
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
