// core/src/physics.rs
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutKind};
use crate::types::InfoMessage;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const LEN_STEP: f64 = 0.65;   // skrittlengde (m per skritt / 1000 -> km)
pub const LEN_STROKE: f64 = 1.38; // taklengde for svømming

// Løping
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 20.0;

// Sportsgange
pub const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
pub const WLK_SPEED_EXP: i32 = 2;
pub const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

// Svømming
pub const SWM_SPEED_SHIFT: f64 = 1.1;
pub const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

// --- RoundTo trait (offentlig, brukt av types.rs) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Heltallsdivisjon på flyttall (gulv), med rest som har divisorens fortegn.
/// `1.0 // 0.1 == 9.0`, ikke 10.0 som `(a / b).floor()` ville gitt.
/// Divisor 0 gir NaN.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let m = a % b;
    let mut div = (a - m) / b;
    if m != 0.0 && ((b < 0.0) != (m < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let mut fd = div.floor();
    if div - fd > 0.5 {
        fd += 1.0;
    }
    fd
}

/// Felles grensesnitt for alle treningstyper.
///
/// `distance` og `mean_speed` har standardimplementasjoner; hver type
/// må selv levere kaloriformelen.
pub trait Training {
    fn kind(&self) -> WorkoutKind;
    fn action(&self) -> f64;
    fn duration(&self) -> f64;
    fn weight(&self) -> f64;

    /// Lengde per aksjon (skritt eller tak).
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distanse i km.
    fn distance(&self) -> f64 {
        self.action() * self.len_step() / M_IN_KM
    }

    /// Snittfart i km/t over hele økta.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    /// Forbrente kcal.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().name().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind { WorkoutKind::Running }
    fn action(&self) -> f64 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    fn spent_calories(&self) -> f64 {
        (RUN_SPEED_MULTIPLIER * self.mean_speed() - RUN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * self.duration
            * MIN_IN_H
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind { WorkoutKind::SportsWalking }
    fn action(&self) -> f64 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    fn spent_calories(&self) -> f64 {
        // NB: gulvdivisjonen er med vilje beholdt slik formelen er kalibrert
        let speed_term = floor_div(self.mean_speed().powi(WLK_SPEED_EXP), self.height);
        (WLK_WEIGHT_MULTIPLIER * self.weight
            + speed_term * WLK_SPEED_HEIGHT_MULTIPLIER * self.weight)
            * self.duration
            * MIN_IN_H
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind { WorkoutKind::Swimming }
    fn action(&self) -> f64 { self.action }
    fn duration(&self) -> f64 { self.duration }
    fn weight(&self) -> f64 { self.weight }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    /// Farten regnes fra bassenglengder, ikke fra antall tak.
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * self.weight
    }
}

impl Workout {
    pub fn training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w as &dyn Training,
            Workout::SportsWalking(w) => w as &dyn Training,
            Workout::Swimming(w) => w as &dyn Training,
        }
    }

    /// Beregn rapporten for økta.
    pub fn report(&self) -> InfoMessage {
        let info = self.training().show_training_info();
        log::debug!(
            "{}: distance={} km speed={} km/h calories={} kcal",
            info.training_type, info.distance, info.speed, info.calories
        );
        info
    }
}
