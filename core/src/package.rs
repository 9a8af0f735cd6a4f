use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// Rå pakke fra trackeren: typekode + tallverdier i konstruktørrekkefølge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self { workout_type: workout_type.to_string(), data: data.to_vec() }
    }

    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.workout_type, &self.data)
    }
}

/// Les data fra sensorene og bygg riktig økt ut fra typekoden.
///
/// Rekkefølgen i `data`:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, length_pool, count_pool
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutKind = workout_type.parse()?;

    if data.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            code: kind.code(),
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let duration = data[1];
    if !(duration.is_finite() && duration > 0.0) {
        return Err(WorkoutError::InvalidDuration(duration));
    }

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running {
            action: data[0],
            duration,
            weight: data[2],
        }),
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking {
            action: data[0],
            duration,
            weight: data[2],
            height: data[3],
        }),
        WorkoutKind::Swimming => Workout::Swimming(Swimming {
            action: data[0],
            duration,
            weight: data[2],
            length_pool: data[3],
            count_pool: data[4],
        }),
    };
    Ok(workout)
}

/// Innebygd pakkeliste som behandles når ingen fil er oppgitt.
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", &[15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}
