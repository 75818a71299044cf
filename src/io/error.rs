//! Error types and context management for solver operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// A cell holds a glyph outside the connector alphabet
    UnrecognizedGlyph {
        /// The offending glyph
        glyph: char,
        /// Cell coordinates `[x, y]`
        position: [usize; 2],
    },

    /// No orientation of a tile agrees with its neighbors
    ///
    /// The puzzle has no valid solution from the current partial state.
    InconsistentCell {
        /// Cell coordinates `[x, y]`
        position: [usize; 2],
        /// Pass in which the contradiction surfaced (1-based, 0 when unknown)
        pass: usize,
    },

    /// A full pass locked no tile while unlocked tiles remain
    ///
    /// The puzzle cannot be solved by propagation alone.
    NonConvergence {
        /// Pass that made no progress
        pass: usize,
        /// Tiles still unlocked
        unlocked: usize,
    },

    /// Puzzle text does not describe a usable grid
    InvalidPuzzle {
        /// Description of what's wrong with the puzzle
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal bookkeeping produced an impossible state
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedGlyph { glyph, position } => {
                write!(
                    f,
                    "Unrecognized glyph {glyph:?} (U+{:04X}) at ({}, {})",
                    u32::from(*glyph),
                    position[0],
                    position[1]
                )
            }
            Self::InconsistentCell { position, pass } => {
                write!(
                    f,
                    "No valid rotation remains for tile ({}, {}) in pass {pass}",
                    position[0], position[1]
                )
            }
            Self::NonConvergence { pass, unlocked } => {
                write!(
                    f,
                    "Propagation stalled in pass {pass} with {unlocked} tiles still unlocked"
                )
            }
            Self::InvalidPuzzle { reason } => {
                write!(f, "Invalid puzzle: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Current solver pass
    pub pass: Option<usize>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with solver state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the pass number
    ///
    /// # Errors
    ///
    /// Propagates the original error with the pass context applied
    fn with_pass(self, pass: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<SolverError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only pass-scoped errors benefit from the pass number
            match &mut error {
                SolverError::InconsistentCell { pass, .. }
                | SolverError::NonConvergence { pass, .. } => {
                    if let Some(current) = context.pass {
                        *pass = current;
                    }
                }
                SolverError::Computation { operation, .. } => {
                    if let Some(current) = context.operation {
                        *operation = current;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_pass(self, pass: usize) -> Result<T> {
        self.with_context(ErrorContext {
            pass: Some(pass),
            ..Default::default()
        })
    }
}

impl From<image::ImageError> for SolverError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for SolverError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SolverError {
    SolverError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SolverError {
    SolverError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
