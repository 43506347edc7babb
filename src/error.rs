use std::fmt;

pub type VersorResult<T> = Result<T, VersorError>;

#[derive(Debug)]
pub enum VersorError {
    InvalidNumber(String),
    MissingValue(&'static str),
    UnexpectedValue(String),
}
impl fmt::Display for VersorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersorError::InvalidNumber(arg) => {
                write!(f, "
                    \rExpected a number, got {arg}",
                )
            }
            VersorError::MissingValue(flag) => {
                write!(f, "
                    \rMissing value for {flag}",
                )
            }
            VersorError::UnexpectedValue(arg) => {
                write!(f, "
                    \rUnexpected value {arg}",
                )
            }
        }
    }
}
