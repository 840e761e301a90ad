//! Numbers that recur across engines' raw data.

use std::collections::{BTreeSet, HashMap};

use serde_json::Value;

use confluence_core::{EngineId, ResultMap};

use crate::output::successful;
use crate::types::NumericalCorrelation;

const MASTER_NUMBERS: [f64; 3] = [11.0, 22.0, 33.0];

/// Find every numeric value present in the raw data of two or more engines.
///
/// Sorted by frequency, highest first, then by value.
pub fn correlate(results: &ResultMap) -> Vec<NumericalCorrelation> {
    // Keyed by bit pattern so that 7 and 7.0 collapse; -0.0 is folded into 0.0.
    let mut occurrences: HashMap<u64, (f64, BTreeSet<EngineId>)> = HashMap::new();

    for (engine, output) in successful(results) {
        if let Some(raw) = output.raw_data() {
            collect_numbers(raw, &mut |n| {
                let n = if n == 0.0 { 0.0 } else { n };
                occurrences
                    .entry(n.to_bits())
                    .or_insert_with(|| (n, BTreeSet::new()))
                    .1
                    .insert(engine);
            });
        }
    }

    let mut correlations: Vec<NumericalCorrelation> = occurrences
        .into_values()
        .filter(|(_, sources)| sources.len() >= 2)
        .map(|(number, sources)| NumericalCorrelation {
            number,
            frequency: sources.len(),
            significance: significance(number, sources.len()),
            sources: sources.into_iter().collect(),
        })
        .collect();

    correlations.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.number.total_cmp(&b.number))
    });
    correlations
}

fn collect_numbers(value: &Value, sink: &mut dyn FnMut(f64)) {
    match value {
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                sink(f);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_numbers(item, sink);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                collect_numbers(item, sink);
            }
        }
        Value::Null | Value::Bool(_) | Value::String(_) => {}
    }
}

/// Human-readable meaning of a recurring number.
#[must_use]
pub fn significance(number: f64, engines: usize) -> String {
    let is_integer = number.fract() == 0.0;
    if is_integer && (1.0..=9.0).contains(&number) {
        format!("Core vibration {number} resonates across {engines} engines")
    } else if MASTER_NUMBERS.contains(&number) {
        format!("Master number {number} amplifies across {engines} engines")
    } else {
        format!("Recurring number {number} appears in {engines} engines")
    }
}
