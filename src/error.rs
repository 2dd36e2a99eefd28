/// Application-level failure carrying the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Contract violation when calling the curiosity predicate.
///
/// The enumeration only builds arguments that satisfy these preconditions, so
/// seeing one of these means the predicate was called from somewhere else with
/// values outside the two-digit domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Numerator outside `10..=99`.
    NumeratorOutOfRange { numerator: u32 },
    /// Denominator outside `11..=99`.
    DenominatorOutOfRange { denominator: u32 },
    /// Numerator not strictly less than the denominator.
    NotProperFraction { numerator: u32, denominator: u32 },
}

impl std::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumeratorOutOfRange { numerator } => write!(
                f,
                "Invalid argument: numerator {numerator} is not a two-digit number (expected 10..=99)."
            ),
            Self::DenominatorOutOfRange { denominator } => write!(
                f,
                "Invalid argument: denominator {denominator} is out of range (expected 11..=99)."
            ),
            Self::NotProperFraction {
                numerator,
                denominator,
            } => write!(
                f,
                "Invalid argument: numerator {numerator} must be less than denominator {denominator}."
            ),
        }
    }
}

impl std::error::Error for InvalidArgument {}

impl From<InvalidArgument> for AppError {
    fn from(err: InvalidArgument) -> Self {
        AppError::new(2, err.to_string())
    }
}
