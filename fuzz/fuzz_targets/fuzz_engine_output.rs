#![no_main]

use std::time::Duration;

use libfuzzer_sys::fuzz_target;

use confluence_core::{CalculationResult, EngineId, ResultMap};
use confluence_synthesis::Synthesizer;

fuzz_target!(|data: &[u8]| {
    let Ok(output) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    // Arbitrary engine output under every engine id must synthesize cleanly
    let results: ResultMap = EngineId::ALL
        .into_iter()
        .map(|id| (id, CalculationResult::success(output.clone(), Duration::ZERO)))
        .collect();
    let synthesis = Synthesizer::default().synthesize_reading(&results);
    assert_eq!(synthesis.engines_analyzed.len(), EngineId::ALL.len());
});
