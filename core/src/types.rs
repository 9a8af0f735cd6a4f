use std::fmt;

use serde::{Deserialize, Serialize};

use crate::physics::RoundTo;

/// Ferdig beregnet rapport for én økt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64, // timer
    pub distance: f64, // km
    pub speed: f64,    // km/t
    pub calories: f64, // kcal
}

impl InfoMessage {
    /// Menneskelesbar linje, alle tall med tre desimaler.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Kopi med alle tallfelt avrundet til `dp` desimaler (for JSON-utskrift).
    pub fn rounded(&self, dp: u32) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type.clone(),
            duration: self.duration.round_to(dp),
            distance: self.distance.round_to(dp),
            speed: self.speed.round_to(dp),
            calories: self.calories.round_to(dp),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
