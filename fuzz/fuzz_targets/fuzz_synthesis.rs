#![no_main]

use libfuzzer_sys::fuzz_target;

use confluence_core::ResultMap;
use confluence_synthesis::Synthesizer;

fuzz_target!(|data: &[u8]| {
    // Only well-formed result maps reach the synthesizer
    let Ok(results) = serde_json::from_slice::<ResultMap>(data) else {
        return;
    };

    let synthesizer = Synthesizer::default();
    let first = synthesizer.synthesize_reading(&results);
    let coherence = first.field_signature.coherence;
    assert!((0.0..=1.0).contains(&coherence));
    assert!(first.integration_guidance.len() <= 10);
    assert_eq!(first, synthesizer.synthesize_reading(&results));
});
