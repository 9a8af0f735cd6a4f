use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::models::WorkoutKind;

pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static WORKOUTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    let c = IntCounterVec::new(
        Opts::new("fittrack_workouts_total", "Workouts reported, per type"),
        &["kind"],
    )
    .expect("static metric definition");
    REGISTRY
        .register(Box::new(c.clone()))
        .expect("metric registered once");
    c
});

static REJECTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    let c = IntCounter::new(
        "fittrack_rejected_packages_total",
        "Packages rejected by the workout type selector",
    )
    .expect("static metric definition");
    REGISTRY
        .register(Box::new(c.clone()))
        .expect("metric registered once");
    c
});

pub fn record_workout(kind: WorkoutKind) {
    WORKOUTS_TOTAL.with_label_values(&[kind.code()]).inc();
}

pub fn record_rejected() {
    REJECTED_TOTAL.inc();
}

pub fn workouts_total(kind: WorkoutKind) -> u64 {
    WORKOUTS_TOTAL.with_label_values(&[kind.code()]).get()
}

pub fn rejected_total() -> u64 {
    REJECTED_TOTAL.get()
}

/// Prometheus tekstformat for alle tellere.
pub fn render() -> anyhow::Result<String> {
    // Sørg for at tellerne er registrert selv om ingenting er talt ennå
    Lazy::force(&WORKOUTS_TOTAL);
    Lazy::force(&REJECTED_TOTAL);

    let mut buf = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
