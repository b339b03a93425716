#![no_main]

use libfuzzer_sys::fuzz_target;
use sleepcoach::predictor::{MAX_RATIO, MIN_RATIO};
use sleepcoach::{FeatureVector, Predictor};

fuzz_target!(|data: &[u8]| {
    if data.len() < 40 {
        return;
    }
    let mut values = [0.0; 5];
    for (i, chunk) in data.chunks_exact(8).take(5).enumerate() {
        values[i] = f64::from_le_bytes(chunk.try_into().unwrap());
    }

    let predictor = Predictor::new().unwrap();
    let ratio = predictor.predict(&FeatureVector::from(values));
    assert!((MIN_RATIO..=MAX_RATIO).contains(&ratio));
});
