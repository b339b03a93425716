use sleepcoach::features::InputRange;
use sleepcoach::{Feature, FeatureVector};

#[test]
fn test_input_range() {
    let r = InputRange::new(30.0, 80.0, 5.0);
    assert!(r.contains(30.0));
    assert!(r.contains(55.0));
    assert!(r.contains(80.0));
    assert!(!r.contains(52.0));
    assert!(!r.contains(85.0));
    assert!(!r.contains(f64::NAN));
}

#[test]
#[should_panic(expected = "input steps must be positive")]
#[cfg(debug_assertions)]
fn test_zero_step_is_rejected() {
    let _ = InputRange::new(0.0, 10.0, 0.0);
}

#[test]
fn test_default_is_in_range() {
    let v = FeatureVector::default();
    for feature in Feature::ALL {
        assert!(feature.range().contains(v.get(feature)), "{}", feature);
    }
    let mut v = FeatureVector::default();
    v.set(Feature::Caffeine, 305.0);
    v.set(Feature::Exercise, 2.5);
    assert!(!Feature::Caffeine.range().contains(v.get(Feature::Caffeine)));
    assert!(!Feature::Exercise.range().contains(v.get(Feature::Exercise)));
}

#[test]
fn test_training_order() {
    let v = FeatureVector::new(1.0, 2.0, 3.0, 4.0, 5.0);
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    for (i, feature) in Feature::ALL.into_iter().enumerate() {
        assert_eq!(v.get(feature), (i + 1) as f64);
        assert_eq!(Feature::from_name(feature.name()), Some(feature));
    }
    assert_eq!(Feature::from_name("humidity"), None);
}
