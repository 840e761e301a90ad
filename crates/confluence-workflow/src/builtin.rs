//! Built-in workflows and their static recommendation text.

use confluence_core::EngineId::{
    self, Biorhythm, Enneagram, GeneKeys, HumanDesign, IChing, Numerology, SacredGeometry,
    SigilForge, Tarot, Vimshottari,
};

use crate::definition::{
    AnalysisDepth, ExecutionMode, ReportFormat, WorkflowDefinition, WorkflowOptions,
};

pub const COMPLETE_NATAL: &str = "complete_natal";
pub const RELATIONSHIP_COMPATIBILITY: &str = "relationship_compatibility";
pub const CAREER_GUIDANCE: &str = "career_guidance";
pub const SPIRITUAL_DEVELOPMENT: &str = "spiritual_development";
pub const LIFE_TRANSITION: &str = "life_transition";
pub const DAILY_GUIDANCE: &str = "daily_guidance";
pub const SHADOW_WORK: &str = "shadow_work";
pub const MANIFESTATION_TIMING: &str = "manifestation_timing";

/// Names custom workflows may not take.
pub const BUILTIN_NAMES: [&str; 8] = [
    COMPLETE_NATAL,
    RELATIONSHIP_COMPATIBILITY,
    CAREER_GUIDANCE,
    SPIRITUAL_DEVELOPMENT,
    LIFE_TRANSITION,
    DAILY_GUIDANCE,
    SHADOW_WORK,
    MANIFESTATION_TIMING,
];

#[allow(clippy::too_many_arguments)]
fn define(
    name: &str,
    description: &str,
    engines: &[EngineId],
    execution_mode: ExecutionMode,
    include_divination: bool,
    analysis_depth: AnalysisDepth,
    format: ReportFormat,
    focus_area: Option<&str>,
) -> WorkflowDefinition {
    WorkflowDefinition {
        name: name.to_string(),
        description: description.to_string(),
        engines: engines.to_vec(),
        execution_mode,
        options: WorkflowOptions {
            include_divination,
            analysis_depth,
            format,
            focus_area: focus_area.map(str::to_string),
        },
    }
}

/// Every built-in workflow definition.
pub fn definitions() -> Vec<WorkflowDefinition> {
    use AnalysisDepth::{Basic, Deep, Standard};
    use ExecutionMode::{Parallel, Sequential};
    use ReportFormat::{Comprehensive, Detailed, Summary};

    vec![
        define(
            COMPLETE_NATAL,
            "Full natal portrait across numerology, design, timing and archetype",
            &[Numerology, Biorhythm, HumanDesign, Vimshottari, GeneKeys, Enneagram, SacredGeometry],
            Parallel,
            false,
            Deep,
            Comprehensive,
            None,
        ),
        define(
            RELATIONSHIP_COMPATIBILITY,
            "Relational patterns, needs and communication style",
            &[Numerology, HumanDesign, GeneKeys, Enneagram],
            Parallel,
            false,
            Standard,
            Detailed,
            Some("relationships"),
        ),
        define(
            CAREER_GUIDANCE,
            "Vocational strengths, working style and timing",
            &[Numerology, HumanDesign, Enneagram, Vimshottari],
            Parallel,
            false,
            Standard,
            Detailed,
            Some("career"),
        ),
        define(
            SPIRITUAL_DEVELOPMENT,
            "Layered path from design through gifts to contemplative practice",
            &[HumanDesign, GeneKeys, SacredGeometry, IChing],
            Sequential,
            true,
            Deep,
            Comprehensive,
            Some("spiritual growth"),
        ),
        define(
            LIFE_TRANSITION,
            "Timing and orientation through a period of change",
            &[Vimshottari, Biorhythm, IChing, Tarot],
            Sequential,
            true,
            Standard,
            Detailed,
            Some("life transition"),
        ),
        define(
            DAILY_GUIDANCE,
            "Quick daily check-in on energy and intention",
            &[Biorhythm, IChing, Tarot],
            Parallel,
            true,
            Basic,
            Summary,
            None,
        ),
        define(
            SHADOW_WORK,
            "Shadow patterns and their integration, each step building on the last",
            &[Enneagram, GeneKeys, HumanDesign, Tarot],
            Sequential,
            true,
            Deep,
            Detailed,
            Some("shadow integration"),
        ),
        define(
            MANIFESTATION_TIMING,
            "Aligning intention with favourable cycles",
            &[Numerology, Biorhythm, Vimshottari, SigilForge],
            Sequential,
            false,
            Standard,
            Detailed,
            Some("manifestation"),
        ),
    ]
}

/// Workflow-specific recommendations, with a generic fallback.
pub fn recommendations(workflow: &str) -> Vec<String> {
    let lines: &[&str] = match workflow {
        COMPLETE_NATAL => &[
            "Revisit your life path number whenever a major decision arises",
            "Follow your Human Design strategy for one full month and note the difference",
            "Read your current dasha period as the backdrop to everything else",
        ],
        RELATIONSHIP_COMPATIBILITY => &[
            "Share your Enneagram type with close partners to open honest dialogue",
            "Respect differences in energy type when planning shared time",
            "Notice where your gene key shadows show up in conflict",
        ],
        CAREER_GUIDANCE => &[
            "Favour roles that use your defined centers as a consistent resource",
            "Match big career moves to the supportive windows of your current period",
            "Let your expression number guide how you present your work",
        ],
        SPIRITUAL_DEVELOPMENT => &[
            "Contemplate one gene key for a full week before moving to the next",
            "Use sacred geometry as a meditation focus",
            "Consult the I Ching when your practice feels stuck",
        ],
        LIFE_TRANSITION => &[
            "Honour the ending before rushing into the beginning",
            "Time decisive actions to high points in your biorhythm",
            "Treat the current dasha as the season you are moving through",
        ],
        DAILY_GUIDANCE => &[
            "Set one intention this morning and review it tonight",
            "Adjust your pace to today's physical and emotional cycles",
        ],
        SHADOW_WORK => &[
            "Journal whenever your Enneagram stress pattern appears",
            "Name the shadow frequency of your life's work gene key when it surfaces",
            "Work with a trusted guide when old material feels overwhelming",
        ],
        MANIFESTATION_TIMING => &[
            "Charge your sigil during the peak of your intellectual cycle",
            "Begin new ventures in personal years that support initiation",
            "Restate your intention in the present tense each day",
        ],
        _ => &[
            "Reflect on the recurring themes across your results",
            "Choose one recommendation and practice it for a week",
        ],
    };
    lines.iter().map(|s| (*s).to_string()).collect()
}

/// Workflow-specific next steps, with a generic fallback.
pub fn next_steps(workflow: &str) -> Vec<String> {
    let lines: &[&str] = match workflow {
        COMPLETE_NATAL => &[
            "Explore the career_guidance workflow for vocational detail",
            "Schedule a follow-up reading at your next birthday",
        ],
        RELATIONSHIP_COMPATIBILITY => &[
            "Run the same workflow for your partner and compare the results",
            "Discuss one insight together this week",
        ],
        CAREER_GUIDANCE => &[
            "List three roles that fit your strongest correlations",
            "Check manifestation_timing before committing to a change",
        ],
        SPIRITUAL_DEVELOPMENT => &[
            "Begin a daily contemplation practice",
            "Return to this workflow in three months to track integration",
        ],
        LIFE_TRANSITION => &[
            "Run daily_guidance through the transition period",
            "Write down what you are releasing and what you are inviting",
        ],
        DAILY_GUIDANCE => &["Repeat tomorrow and notice patterns across days"],
        SHADOW_WORK => &[
            "Follow up with spiritual_development once the shadow material settles",
            "Revisit this workflow after a significant trigger",
        ],
        MANIFESTATION_TIMING => &[
            "Mark the next favourable window in your calendar",
            "Review progress at the end of the current cycle",
        ],
        _ => &["Run a complete_natal workflow for a broader picture"],
    };
    lines.iter().map(|s| (*s).to_string()).collect()
}
