use std::fmt;

#[derive(Debug, PartialEq)]
pub enum BoardError {
    InvalidInput,
    AirportNotFound(String),   // No airport registered under that code
    InvalidDateFormat(String), // When the date format is incorrect
    InvalidStatus(String),     // Unrecognized flight status
    Other(String),             // Generic error case with a custom message
}

// Implement the Display trait for user-friendly error messages
impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BoardError::InvalidInput => {
                write!(f, "Invalid input. Please check your input and try again.")
            }
            BoardError::AirportNotFound(ref code) => write!(f, "Airport not found: {}", code),
            BoardError::InvalidDateFormat(ref date_str) => {
                write!(f, "Invalid date format: {}", date_str)
            }
            BoardError::InvalidStatus(ref status) => write!(f, "Invalid flight status: {}", status),
            BoardError::Other(ref message) => write!(f, "Error: {}", message),
        }
    }
}

impl BoardError {
    // Helper method to create an error with a custom message
    pub fn new(message: &str) -> Self {
        BoardError::Other(message.to_string())
    }
}
