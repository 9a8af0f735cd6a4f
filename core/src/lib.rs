pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod package;
pub mod physics;
pub mod storage;
pub mod types;

pub use error::WorkoutError;
pub use models::{Running, SportsWalking, Swimming, Workout, WorkoutKind};
pub use package::{default_packages, read_package, SensorPackage};
pub use physics::{floor_div, RoundTo, Training};
pub use storage::{load_packages, save_packages};
pub use types::InfoMessage;
