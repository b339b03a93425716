#![no_main]

use libfuzzer_sys::fuzz_target;
use sleepcoach::interventions::{evaluate, triggered, Intervention, HEADER};
use sleepcoach::FeatureVector;

fuzz_target!(|data: &[u8]| {
    if data.len() < 48 {
        return;
    }
    let mut values = [0.0; 6];
    for (i, chunk) in data.chunks_exact(8).take(6).enumerate() {
        values[i] = f64::from_le_bytes(chunk.try_into().unwrap());
    }
    let features = FeatureVector::new(
        values[0], values[1], values[2], values[3], values[4],
    );

    let lines = evaluate(&features, values[5]);
    assert_eq!(lines[0], HEADER);

    let list = triggered(&features, values[5]);
    assert_eq!(lines.len(), list.len() + 1);
    assert!(
        !(list.contains(&Intervention::Breathing)
            && list.contains(&Intervention::Activity))
    );
});
