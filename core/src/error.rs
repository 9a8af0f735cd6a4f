use thiserror::Error;

/// Feil fra pakkelesing (velger av treningstype).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {0:?} (expected one of SWM, RUN, WLK)")]
    UnknownWorkoutType(String),

    #[error("workout type {code} takes {expected} values, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("duration must be a positive number of hours, got {0}")]
    InvalidDuration(f64),
}
