//! Energy center and vibration extraction.

use serde_json::Value;

use confluence_core::{EngineId, ResultMap};

use crate::output::{lookup, successful};
use crate::types::EnergyCorrelation;

type Extractor = fn(EngineId, &Value) -> Vec<EnergyCorrelation>;

const CORE_NUMBERS: [(&str, &[&str]); 5] = [
    ("life_path", &["lifePath", "life_path"]),
    ("expression", &["expression", "destiny"]),
    ("soul_urge", &["soulUrge", "soul_urge"]),
    ("personality", &["personality"]),
    ("birthday", &["birthday", "birthDay"]),
];

const SPHERES: [(&str, &[&str]); 4] = [
    ("life_work", &["lifeWork", "life_work"]),
    ("evolution", &["evolution"]),
    ("radiance", &["radiance"]),
    ("purpose", &["purpose"]),
];

fn extractor(engine: EngineId) -> Option<Extractor> {
    match engine {
        EngineId::HumanDesign => Some(human_design),
        EngineId::Numerology => Some(numerology),
        EngineId::GeneKeys => Some(gene_keys),
        _ => None,
    }
}

/// Energy signatures from the engines that have an extractor.
pub fn correlate(results: &ResultMap) -> Vec<EnergyCorrelation> {
    successful(results)
        .filter_map(|(engine, output)| Some((extractor(engine)?, engine, output.raw_data()?)))
        .flat_map(|(extract, engine, raw)| extract(engine, raw))
        .collect()
}

fn human_design(engine: EngineId, raw: &Value) -> Vec<EnergyCorrelation> {
    let Some(centers) = lookup(raw, &["centers"]).and_then(Value::as_object) else {
        return Vec::new();
    };
    centers
        .iter()
        .filter_map(|(name, center)| {
            let defined = match center {
                Value::Bool(b) => *b,
                Value::Object(_) => lookup(center, &["defined", "isDefined", "is_defined"])?.as_bool()?,
                Value::String(s) => s.eq_ignore_ascii_case("defined"),
                _ => return None,
            };
            Some(EnergyCorrelation {
                engine,
                source: name.clone(),
                state: if defined { "defined" } else { "undefined" }.to_string(),
                intensity: Some(if defined { 1.0 } else { 0.0 }),
            })
        })
        .collect()
}

fn numerology(engine: EngineId, raw: &Value) -> Vec<EnergyCorrelation> {
    let numbers = lookup(raw, &["coreNumbers", "core_numbers"]).unwrap_or(raw);
    CORE_NUMBERS
        .iter()
        .filter_map(|(source, keys)| {
            let value = lookup(numbers, keys)?;
            // Either a bare number or `{ "number": n, ... }`.
            let n = value
                .as_f64()
                .or_else(|| lookup(value, &["number", "value"]).and_then(Value::as_f64))?;
            Some(EnergyCorrelation {
                engine,
                source: (*source).to_string(),
                state: format!("vibration {n}"),
                intensity: Some(n),
            })
        })
        .collect()
}

fn gene_keys(engine: EngineId, raw: &Value) -> Vec<EnergyCorrelation> {
    let sequence = lookup(raw, &["activationSequence", "activation_sequence"]).unwrap_or(raw);
    SPHERES
        .iter()
        .filter_map(|(sphere, keys)| {
            let value = lookup(sequence, keys)?;
            let key = value
                .as_f64()
                .or_else(|| lookup(value, &["geneKey", "gene_key", "key", "number"]).and_then(Value::as_f64))?;
            let line = lookup(value, &["line"]).and_then(Value::as_f64);
            let state = match line {
                Some(line) => format!("gene key {key}.{line}"),
                None => format!("gene key {key}"),
            };
            Some(EnergyCorrelation {
                engine,
                source: (*sphere).to_string(),
                state,
                intensity: Some(key),
            })
        })
        .collect()
}
