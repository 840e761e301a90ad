//! Cycle and period extraction for time-aware engines.

use serde_json::Value;

use confluence_core::{EngineId, ResultMap};

use crate::output::{lookup, successful};
use crate::types::TemporalCorrelation;

type Extractor = fn(EngineId, &Value) -> Vec<TemporalCorrelation>;

const BIORHYTHM_CYCLES: [&str; 4] = ["physical", "emotional", "intellectual", "intuitive"];
const DASHA_LEVELS: [(&str, &[&str]); 3] = [
    ("mahadasha", &["mahadasha", "maha_dasha"]),
    ("antardasha", &["antardasha", "antar_dasha"]),
    ("pratyantardasha", &["pratyantardasha", "pratyantar_dasha"]),
];

fn extractor(engine: EngineId) -> Option<Extractor> {
    match engine {
        EngineId::Biorhythm => Some(biorhythm),
        EngineId::Vimshottari => Some(vimshottari),
        _ => None,
    }
}

/// Cycles reported by the engines that have an extractor.
pub fn correlate(results: &ResultMap) -> Vec<TemporalCorrelation> {
    successful(results)
        .filter_map(|(engine, output)| Some((extractor(engine)?, engine, output.raw_data()?)))
        .flat_map(|(extract, engine, raw)| extract(engine, raw))
        .collect()
}

fn biorhythm(engine: EngineId, raw: &Value) -> Vec<TemporalCorrelation> {
    let cycles = lookup(raw, &["cycles"]).unwrap_or(raw);
    BIORHYTHM_CYCLES
        .iter()
        .filter_map(|name| {
            let cycle = cycles.get(*name)?;
            let (value, phase) = match cycle {
                Value::Number(n) => (n.as_f64(), None),
                Value::Object(_) => (
                    lookup(cycle, &["percentage", "value"]).and_then(Value::as_f64),
                    lookup(cycle, &["phase", "trend"])
                        .and_then(Value::as_str)
                        .map(str::to_string),
                ),
                _ => return None,
            };
            Some(TemporalCorrelation {
                engine,
                cycle: (*name).to_string(),
                value,
                phase,
                period: None,
            })
        })
        .collect()
}

fn vimshottari(engine: EngineId, raw: &Value) -> Vec<TemporalCorrelation> {
    let Some(current) = lookup(raw, &["currentDasha", "current_dasha", "currentPeriod", "current_period"]) else {
        return Vec::new();
    };
    DASHA_LEVELS
        .iter()
        .filter_map(|(level, keys)| {
            let period = lookup(current, keys)?;
            let (planet, span) = match period {
                Value::String(planet) => (Some(planet.clone()), None),
                Value::Object(_) => (
                    lookup(period, &["planet", "lord"])
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    date_span(period),
                ),
                _ => return None,
            };
            Some(TemporalCorrelation {
                engine,
                cycle: (*level).to_string(),
                value: None,
                phase: planet,
                period: span,
            })
        })
        .collect()
}

fn date_span(period: &Value) -> Option<String> {
    let start = lookup(period, &["startDate", "start_date", "start"]).and_then(Value::as_str);
    let end = lookup(period, &["endDate", "end_date", "end"]).and_then(Value::as_str);
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{s} to {e}")),
        (Some(s), None) => Some(format!("from {s}")),
        (None, Some(e)) => Some(format!("until {e}")),
        (None, None) => None,
    }
}
