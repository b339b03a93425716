use sleepcoach::predictor::{clamp_ratio, train, MAX_RATIO, MIN_RATIO};
use sleepcoach::{FeatureVector, FittedModel, Predictor};

/// Return True if 'val' carries no more than one decimal digit.
fn has_one_decimal(val: f64) -> bool {
    let scaled = val * 10.0;
    (scaled - scaled.round()).abs() < 1e-9
}

fn constant_predictor(raw: f64) -> Predictor {
    Predictor::with_model(FittedModel::new([0.0; 5], raw))
}

#[test]
fn test_train_is_memoized() {
    let first = train().unwrap();
    let second = train().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_train_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| train().unwrap() as *const _ as usize))
        .collect();
    let addrs: Vec<usize> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_deterministic() {
    let v = FeatureVector::new(120.0, 3.0, 21.0, 55.0, 72.0);
    let a = Predictor::new().unwrap().predict(&v);
    let b = Predictor::new().unwrap().predict(&v);
    assert_eq!(a, b);
}

#[test]
fn test_known_predictions() {
    let predictor = Predictor::new().unwrap();
    let cases = [
        ([100.0, 2.0, 22.0, 50.0, 70.0], 19.0),
        ([50.0, 3.0, 22.0, 40.0, 65.0], 21.0),
        ([200.0, 0.0, 22.0, 40.0, 60.0], 23.9),
        ([0.0, 0.0, 20.0, 30.0, 50.0], 33.9),
        // The raw predictions of these fall outside the reported range.
        ([300.0, 0.0, 26.0, 70.0, 85.0], 5.0),
        ([0.0, 5.0, 15.0, 30.0, 50.0], 35.0),
        ([300.0, 5.0, 28.0, 80.0, 100.0], 5.0),
    ];
    for (v, expected) in cases {
        assert_eq!(predictor.predict(&FeatureVector::from(v)), expected);
    }
}

#[test]
fn test_round_before_clamp() {
    let v = FeatureVector::default();
    assert_eq!(constant_predictor(4.96).predict(&v), 5.0);
    assert_eq!(constant_predictor(4.94).predict(&v), 5.0);
    assert_eq!(constant_predictor(34.96).predict(&v), 35.0);
    assert_eq!(constant_predictor(35.04).predict(&v), 35.0);
    assert_eq!(constant_predictor(19.04).predict(&v), 19.0);
    assert_eq!(clamp_ratio(5.04), 5.0);
    assert_eq!(clamp_ratio(5.06), 5.1);
    assert_eq!(clamp_ratio(34.94), 34.9);
}

#[test]
fn test_midpoints_round_on_exact_value() {
    // Each literal is stored a hair above or below the written midpoint, and
    // the rounding follows the stored value.
    let cases = [
        (10.05, 10.1),
        (17.05, 17.1),
        (30.15, 30.1),
        (12.45, 12.4),
        (8.85, 8.8),
        (5.15, 5.2),
        (20.35, 20.4),
    ];
    for (raw, expected) in cases {
        assert_eq!(clamp_ratio(raw), expected, "raw {}", raw);
        let v = FeatureVector::default();
        assert_eq!(constant_predictor(raw).predict(&v), expected);
    }
}

#[test]
fn test_non_finite_inputs_stay_in_range() {
    let predictor = Predictor::new().unwrap();
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut v = FeatureVector::default();
        v.noise_db = bad;
        let ratio = predictor.predict(&v);
        assert!((MIN_RATIO..=MAX_RATIO).contains(&ratio));
    }
}

#[test]
fn test_random_inputs_are_clamped() {
    use rand::{thread_rng, Rng};
    use rand_distr::{Distribution, Normal};

    let predictor = Predictor::new().unwrap();
    let mut rng = thread_rng();
    let spread = Normal::new(0.0_f64, 150.0_f64).unwrap();
    for _ in 0..10000 {
        let v = FeatureVector::new(
            rng.gen_range(-100.0..600.0),
            rng.gen_range(-2.0..8.0),
            spread.sample(&mut rng),
            rng.gen_range(0.0..120.0),
            spread.sample(&mut rng),
        );
        let ratio = predictor.predict(&v);
        assert!((MIN_RATIO..=MAX_RATIO).contains(&ratio), "{:?}", v);
        assert!(has_one_decimal(ratio), "{}", ratio);
    }
}
