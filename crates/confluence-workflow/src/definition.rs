//! Workflow definitions and their options.

use serde::{Deserialize, Serialize};

use confluence_core::{EngineId, ShapeContext};

/// How a workflow schedules its engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Parallel,
    /// Each engine sees the results of the engines before it.
    Sequential,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisDepth {
    Basic,
    #[default]
    Standard,
    Deep,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Summary,
    #[default]
    Detailed,
    Comprehensive,
}

/// Options a workflow runs with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowOptions {
    /// Add a divination engine when the workflow has none.
    pub include_divination: bool,
    pub analysis_depth: AnalysisDepth,
    pub format: ReportFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_area: Option<String>,
}

impl WorkflowOptions {
    /// Apply every field set in `overrides`.
    #[must_use]
    pub fn merged(&self, overrides: &WorkflowOverrides) -> Self {
        Self {
            include_divination: overrides.include_divination.unwrap_or(self.include_divination),
            analysis_depth: overrides.analysis_depth.unwrap_or(self.analysis_depth),
            format: overrides.format.unwrap_or(self.format),
            focus_area: overrides
                .focus_area
                .clone()
                .or_else(|| self.focus_area.clone()),
        }
    }

    /// Shaping context derived from these options.
    #[must_use]
    pub fn shape_context(&self) -> ShapeContext {
        ShapeContext {
            focus_area: self.focus_area.clone(),
            detailed: self.analysis_depth == AnalysisDepth::Deep,
        }
    }
}

/// Caller-supplied replacements for a workflow's default options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkflowOverrides {
    pub include_divination: Option<bool>,
    pub analysis_depth: Option<AnalysisDepth>,
    pub format: Option<ReportFormat>,
    pub focus_area: Option<String>,
}

impl WorkflowOverrides {
    #[must_use]
    pub fn with_focus(mut self, focus: impl Into<String>) -> Self {
        self.focus_area = Some(focus.into());
        self
    }

    #[must_use]
    pub fn with_divination(mut self, include: bool) -> Self {
        self.include_divination = Some(include);
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: AnalysisDepth) -> Self {
        self.analysis_depth = Some(depth);
        self
    }
}

/// A named engine subset with a scheduling mode and default options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinition {
    pub name: String,
    pub description: String,
    pub engines: Vec<EngineId>,
    pub execution_mode: ExecutionMode,
    pub options: WorkflowOptions,
}
