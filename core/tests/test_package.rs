use fittrack_core::{default_packages, read_package, SensorPackage, Workout, WorkoutError, WorkoutKind};

#[test]
fn test_known_codes() {
    assert!(matches!(read_package("RUN", &[1.0, 1.0, 1.0]), Ok(Workout::Running(_))));
    assert!(matches!(read_package("WLK", &[1.0, 1.0, 1.0, 1.0]), Ok(Workout::SportsWalking(_))));
    assert!(matches!(read_package("SWM", &[1.0, 1.0, 1.0, 1.0, 1.0]), Ok(Workout::Swimming(_))));
}

#[test]
fn test_unknown_code_fails() {
    for code in ["BIK", "run", "", "RUNX", " SWM"] {
        let err = read_package(code, &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, WorkoutError::UnknownWorkoutType(code.to_string()));
    }
}

#[test]
fn test_arity_mismatch() {
    let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::ArityMismatch { code: "WLK", expected: 4, got: 3 }
    );
}

#[test]
fn test_invalid_duration() {
    assert!(matches!(
        read_package("RUN", &[15000.0, 0.0, 75.0]),
        Err(WorkoutError::InvalidDuration(_))
    ));
    assert!(matches!(
        read_package("RUN", &[15000.0, f64::NAN, 75.0]),
        Err(WorkoutError::InvalidDuration(_))
    ));
}

#[test]
fn test_fields_in_constructor_order() {
    match read_package("SWM", &[720.0, 1.5, 80.0, 25.0, 40.0]).unwrap() {
        Workout::Swimming(s) => {
            assert_eq!(s.action, 720.0);
            assert_eq!(s.duration, 1.5);
            assert_eq!(s.weight, 80.0);
            assert_eq!(s.length_pool, 25.0);
            assert_eq!(s.count_pool, 40.0);
        }
        other => panic!("expected swimming, got {:?}", other),
    }
}

#[test]
fn test_default_packages() {
    let packages = default_packages();
    let kinds: Vec<WorkoutKind> = packages.iter().map(|p| p.read().unwrap().kind()).collect();
    assert_eq!(kinds, vec![WorkoutKind::Swimming, WorkoutKind::Running, WorkoutKind::SportsWalking]);
}

#[test]
fn test_kind_codes_round_trip() {
    for kind in WorkoutKind::ALL {
        assert_eq!(kind.code().parse::<WorkoutKind>().unwrap(), kind);
    }
    let p = SensorPackage::new("SWM", &[1.0; 5]);
    assert_eq!(p.read().unwrap().kind().name(), "Swimming");
}
