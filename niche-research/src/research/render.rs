//! Console rendering of reports

use std::fmt;

use crate::research::types::{ResearchReport, StagedReport};

impl fmt::Display for ResearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Business Research Summary ===\n")?;
        writeln!(f, "Niche: {}\n", self.niche)?;
        writeln!(f, "Audience summary:\n{}\n", self.audience_summary)?;

        writeln!(f, "Top problems:")?;
        for (i, p) in self.top_problems.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, p.problem)?;
            writeln!(f, "   Why it matters: {}", p.why_it_matters)?;
            if !p.current_solutions.is_empty() {
                writeln!(f, "   Current solutions: {}", p.current_solutions)?;
            }
            writeln!(f)?;
        }

        if !self.market_signals.is_empty() {
            writeln!(f, "Market signals:")?;
            for signal in &self.market_signals {
                writeln!(f, "- {}", signal)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Offer ideas:")?;
        for (i, o) in self.offer_ideas.iter().enumerate() {
            writeln!(f, "{}. {} ({})", i + 1, o.offer_name, o.offer_type)?;
            writeln!(f, "   Who it helps: {}", o.who_it_helps)?;
            writeln!(f, "   Deliverables: {}", o.deliverables)?;
            writeln!(f, "   Time to build (days): {}", o.time_to_build_days)?;
            if !o.difficulty.is_empty() {
                writeln!(f, "   Difficulty: {}", o.difficulty)?;
            }
            writeln!(f)?;
        }

        if !self.execution_notes.is_empty() {
            writeln!(f, "Execution notes:\n{}", self.execution_notes)?;
        }

        Ok(())
    }
}

/// Human-readable summary of a structured report
pub fn render_report(report: &ResearchReport) -> String {
    report.to_string()
}

/// Console rendering of the staged report
pub fn render_staged_report(report: &StagedReport) -> String {
    format!(
        "\n===== BUSINESS RESEARCH REPORT =====\n\n{}\n",
        report.final_report
    )
}
