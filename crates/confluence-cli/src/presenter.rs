//! CLI result presenter.

use std::time::Duration;

use confluence_core::{success_ratio, ResultMap};
use confluence_orchestration::ResultPresenter;
use confluence_synthesis::{ReadingReport, SynthesisResult};
use confluence_workflow::WorkflowResult;

use crate::output::{format_duration, format_millis, format_percent};
use crate::ui::{print_error, print_header, print_section, status_tag};

/// Correlations listed per category unless verbose.
const BRIEF_LIMIT: usize = 5;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn limit(&self) -> usize {
        if self.verbose {
            usize::MAX
        } else {
            BRIEF_LIMIT
        }
    }

    /// Print the synthesis of a result map.
    pub fn present_synthesis(&self, synthesis: &SynthesisResult) {
        let field = &synthesis.field_signature;
        if self.quiet {
            println!(
                "coherence {:.2} ({})",
                field.coherence, field.consciousness_level
            );
            return;
        }

        print_section("Field signature");
        println!("  Coherence:          {:.2}", field.coherence);
        println!("  Consciousness:      {}", field.consciousness_level);
        println!("  Stability index:    {:.2}", field.stability_index);
        println!("  Dominant frequency: {}", field.dominant_frequency);
        println!("  Evolution vector:   {}", field.evolution_vector);
        println!("  Stage:              {}", synthesis.consciousness_map.integration_stage);

        print_section("Themes");
        println!("  {}", synthesis.unified_themes.narrative);

        let correlations = &synthesis.correlations;
        if !correlations.numerical_patterns.is_empty() {
            print_section("Numerical patterns");
            for pattern in correlations.numerical_patterns.iter().take(self.limit()) {
                println!("  {}", pattern.significance);
            }
        }
        if !correlations.archetypal_resonance.is_empty() {
            print_section("Archetypal resonance");
            for archetype in correlations.archetypal_resonance.iter().take(self.limit()) {
                println!("  {:<16} strength {}", archetype.archetype, archetype.strength);
                if self.verbose {
                    println!("    {}", archetype.interpretation);
                }
            }
        }
        if self.verbose && !correlations.temporal_alignments.is_empty() {
            print_section("Active cycles");
            for cycle in &synthesis.consciousness_map.active_cycles {
                println!("  {cycle}");
            }
        }
        if self.verbose && !correlations.energy_signatures.is_empty() {
            print_section("Energy signatures");
            for energy in &correlations.energy_signatures {
                println!("  {:<16} {:<14} {}", energy.engine, energy.source, energy.state);
            }
        }
        if !synthesis.integration_guidance.is_empty() {
            print_section("Integration guidance");
            for item in &synthesis.integration_guidance {
                println!("  [{:?}] {} ({})", item.priority, item.guidance, item.source);
            }
        }
        if !synthesis.reality_patches.is_empty() {
            print_section("Reality patches");
            for patch in &synthesis.reality_patches {
                println!("  {} ({})", patch.patch, patch.source);
                if self.verbose {
                    println!("    Activation: {}", patch.activation_method);
                    println!("    Outcome:    {}", patch.expected_outcome);
                }
            }
        }
    }

    /// Print a reading and its synthesis.
    pub fn present_report(&self, report: &ReadingReport) {
        let reading = report.reading();
        if !self.quiet {
            print_header("Comprehensive reading");
        }
        self.present_results(
            &reading.results,
            Duration::from_secs_f64(reading.processing_time.max(0.0) / 1000.0),
        );
        self.present_synthesis(report.synthesis());
    }

    /// Print a workflow result with its recommendations and next steps.
    pub fn present_workflow(&self, result: &WorkflowResult) {
        if !self.quiet {
            print_header(&format!("Workflow: {}", result.workflow_name));
            println!(
                "Mode: {:?}  Depth: {:?}  Format: {:?}",
                result.execution_mode, result.options.analysis_depth, result.options.format
            );
            if let Some(focus) = &result.options.focus_area {
                println!("Focus: {focus}");
            }
        }
        self.present_results(
            &result.results,
            Duration::from_secs_f64(result.processing_time.max(0.0) / 1000.0),
        );
        self.present_synthesis(&result.synthesis);
        if self.quiet {
            return;
        }

        print_section("Recommendations");
        for line in &result.recommendations {
            println!("  - {line}");
        }
        print_section("Next steps");
        for line in &result.next_steps {
            println!("  - {line}");
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_results(&self, results: &ResultMap, elapsed: Duration) {
        let succeeded = results.values().filter(|r| r.is_success()).count();
        let summary = format!(
            "{succeeded}/{} engines succeeded ({}) in {}",
            results.len(),
            format_percent(success_ratio(results)),
            format_duration(elapsed)
        );
        if self.quiet {
            println!("{summary}");
            return;
        }

        print_section("Engines");
        println!("{:-<60}", "");
        for (engine, result) in results {
            let detail = result
                .error
                .as_ref()
                .map(|e| format!("{}: {}", e.code, e.message))
                .unwrap_or_default();
            println!(
                "  {:<16} {:<6} {:>10}  {detail}",
                engine.as_str(),
                status_tag(result.is_success()),
                format_millis(result.processing_time),
            );
        }
        println!("{:-<60}", "");
        println!("{summary}");
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
