//! Family-specific input shaping.
//!
//! Each `EngineFamily` has one `InputShaper` that maps the birth-data bag
//! into the JSON shape that family's engines expect. Shapers live in a
//! `ShaperRegistry` owned by the orchestrator; adding a family means
//! registering another shaper.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::birth_data::BirthData;
use crate::engine_id::{EngineFamily, EngineId};

const DEFAULT_BIRTH_TIME: &str = "12:00";
const DEFAULT_TIMEZONE: &str = "UTC";

/// Caller options that influence shaping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeContext {
    /// Life area the reading concentrates on, e.g. "career".
    pub focus_area: Option<String>,
    /// Ask engines for their most detailed variant.
    pub detailed: bool,
}

impl ShapeContext {
    #[must_use]
    pub fn with_focus(mut self, focus: impl Into<String>) -> Self {
        self.focus_area = Some(focus.into());
        self
    }

    #[must_use]
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }
}

/// Maps birth data into one engine family's input shape.
pub trait InputShaper: Send + Sync {
    /// Build the input for `engine`, a member of this shaper's family.
    fn shape(&self, engine: EngineId, birth: &BirthData, ctx: &ShapeContext) -> Value;
}

/// Family-keyed table of shapers.
#[derive(Clone, Default)]
pub struct ShaperRegistry {
    shapers: HashMap<EngineFamily, Arc<dyn InputShaper>>,
}

impl ShaperRegistry {
    /// An empty registry: every engine is skipped until a shaper is registered.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the built-in shaper for every family.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(EngineFamily::Basic, Arc::new(BasicShaper));
        registry.register(EngineFamily::Astronomical, Arc::new(AstronomicalShaper));
        registry.register(EngineFamily::Lineage, Arc::new(LineageShaper));
        registry.register(EngineFamily::Divination, Arc::new(DivinationShaper));
        registry.register(EngineFamily::Personality, Arc::new(PersonalityShaper));
        registry.register(EngineFamily::Symbolic, Arc::new(SymbolicShaper));
        registry
    }

    /// Register (or replace) the shaper for a family.
    pub fn register(&mut self, family: EngineFamily, shaper: Arc<dyn InputShaper>) {
        self.shapers.insert(family, shaper);
    }

    /// Whether an engine's family has a shaper.
    #[must_use]
    pub fn supports(&self, engine: EngineId) -> bool {
        self.shapers.contains_key(&engine.family())
    }

    /// Shape the input for `engine`, or `None` when its family is unregistered.
    #[must_use]
    pub fn shape(&self, engine: EngineId, birth: &BirthData, ctx: &ShapeContext) -> Option<Value> {
        self.shapers
            .get(&engine.family())
            .map(|shaper| shaper.shape(engine, birth, ctx))
    }
}

fn opt_str(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |s| Value::String(s.to_string()))
}

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Name and date engines (numerology, biorhythm).
pub struct BasicShaper;

impl InputShaper for BasicShaper {
    fn shape(&self, engine: EngineId, birth: &BirthData, ctx: &ShapeContext) -> Value {
        match engine {
            EngineId::Biorhythm => json!({
                "birthDate": opt_str(birth.birth_date()),
                "targetDate": birth
                    .str_field(&["targetDate", "target_date"])
                    .map_or_else(today, str::to_string),
                "includeExtendedCycles": ctx.detailed,
                "forecastDays": if ctx.detailed { 30 } else { 7 },
            }),
            _ => json!({
                "fullName": opt_str(birth.full_name()),
                "birthDate": opt_str(birth.birth_date()),
                "preferredName": opt_str(birth.str_field(&["preferredName", "preferred_name"])),
                "system": "pythagorean",
            }),
        }
    }
}

/// Time-and-place engines (human design, vimshottari).
pub struct AstronomicalShaper;

impl AstronomicalShaper {
    fn base(birth: &BirthData) -> Map<String, Value> {
        let mut input = Map::new();
        input.insert("birthDate".into(), opt_str(birth.birth_date()));
        input.insert(
            "birthTime".into(),
            Value::String(birth.birth_time().unwrap_or(DEFAULT_BIRTH_TIME).to_string()),
        );
        input.insert(
            "birthLocation".into(),
            birth.birth_location().cloned().unwrap_or(Value::Null),
        );
        input.insert(
            "timezone".into(),
            Value::String(birth.timezone().unwrap_or(DEFAULT_TIMEZONE).to_string()),
        );
        input
    }
}

impl InputShaper for AstronomicalShaper {
    fn shape(&self, engine: EngineId, birth: &BirthData, ctx: &ShapeContext) -> Value {
        let mut input = Self::base(birth);
        if engine == EngineId::Vimshottari {
            input.insert("includeFuturePeriods".into(), Value::Bool(ctx.detailed));
        }
        Value::Object(input)
    }
}

/// Engines derived from astronomical activations (gene keys).
pub struct LineageShaper;

impl InputShaper for LineageShaper {
    fn shape(&self, _engine: EngineId, birth: &BirthData, ctx: &ShapeContext) -> Value {
        let mut input = AstronomicalShaper::base(birth);
        input.insert("focusSequence".into(), Value::String("activation".into()));
        input.insert("includeProgrammingPartner".into(), Value::Bool(ctx.detailed));
        Value::Object(input)
    }
}

/// Question-driven engines (tarot, i ching).
pub struct DivinationShaper;

impl DivinationShaper {
    /// The caller's question, or one composed from name and focus area.
    #[must_use]
    pub fn question(birth: &BirthData, ctx: &ShapeContext) -> String {
        if let Some(q) = birth.question() {
            return q.to_string();
        }
        let subject = birth.full_name().map_or_else(
            || "guidance is needed".to_string(),
            |name| format!("guidance does {name} need"),
        );
        match ctx.focus_area.as_deref() {
            Some(focus) => format!("What {subject} regarding {focus} at this time?"),
            None => format!("What {subject} at this time?"),
        }
    }
}

impl InputShaper for DivinationShaper {
    fn shape(&self, engine: EngineId, birth: &BirthData, ctx: &ShapeContext) -> Value {
        let question = Self::question(birth, ctx);
        match engine {
            EngineId::IChing => json!({
                "question": question,
                "method": "coins",
                "includeChangingLines": true,
            }),
            _ => json!({
                "question": question,
                "spreadType": if ctx.detailed { "celtic_cross" } else { "three_card" },
                "includeReversed": true,
            }),
        }
    }
}

/// Personality assessments (enneagram).
pub struct PersonalityShaper;

impl InputShaper for PersonalityShaper {
    fn shape(&self, _engine: EngineId, birth: &BirthData, _ctx: &ShapeContext) -> Value {
        let responses = birth.value_field(&["responses", "assessmentResponses"]).cloned();
        let method = if responses.is_some() { "assessment" } else { "intuitive" };
        json!({
            "identificationMethod": method,
            "responses": responses.unwrap_or(Value::Null),
            "behavioralDescription": opt_str(birth.str_field(&["behavioralDescription", "behavioral_description"])),
            "name": opt_str(birth.full_name()),
        })
    }
}

/// Symbolic and geometric engines (sacred geometry, sigil forge).
pub struct SymbolicShaper;

impl SymbolicShaper {
    fn intention(birth: &BirthData, ctx: &ShapeContext) -> String {
        if let Some(intention) = birth.intention() {
            return intention.to_string();
        }
        match (ctx.focus_area.as_deref(), birth.full_name()) {
            (Some(focus), _) => format!("Clarity and alignment in {focus}"),
            (None, Some(name)) => format!("Personal harmony and alignment for {name}"),
            (None, None) => "Personal harmony and alignment".to_string(),
        }
    }
}

impl InputShaper for SymbolicShaper {
    fn shape(&self, engine: EngineId, birth: &BirthData, ctx: &ShapeContext) -> Value {
        let intention = Self::intention(birth, ctx);
        match engine {
            EngineId::SigilForge => json!({
                "intention": intention,
                "method": "traditional",
                "name": opt_str(birth.full_name()),
            }),
            _ => json!({
                "intention": intention,
                "birthDate": opt_str(birth.birth_date()),
                "patternType": if ctx.detailed { "metatrons_cube" } else { "flower_of_life" },
            }),
        }
    }
}
