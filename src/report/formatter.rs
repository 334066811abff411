use crate::optimizer::{ArtifactPlan, Solution};
use crate::simulator::ModeOutcome;
use itertools::Itertools;
use std::fmt::Write;

/// Formats solutions into human-readable tables
pub struct SolutionFormatter;

const HEADER: [&str; 9] = [
    "Artifact", "Count", "XP", "Cost", "XP/Cost", "Unit", "Discount", "Direct", "Auto",
];

impl SolutionFormatter {
    /// Renders every crafted artifact as a row, followed by a totals line.
    pub fn format_table(solution: &Solution) -> String {
        let rows: Vec<[String; 9]> = solution.planned().map(Self::row).collect();

        let mut widths = HEADER.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let mut out = String::new();
        Self::push_line(&mut out, &HEADER.map(String::from), &widths);
        let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        out.push_str(&"-".repeat(rule));
        out.push('\n');
        for row in &rows {
            Self::push_line(&mut out, row, &widths);
        }
        let _ = write!(
            out,
            "Total XP: {}  Total Cost: {}",
            Self::format_number(solution.total_xp),
            Self::format_number(solution.total_cost)
        );
        out
    }

    fn row(plan: &ArtifactPlan) -> [String; 9] {
        let details = &plan.cost_details;
        let (direct, auto) = match &plan.modes {
            Some(modes) => (
                Self::format_outcome(Some(&modes.direct)),
                Self::format_outcome(modes.auto.as_ref()),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        [
            plan.artifact.clone(),
            Self::format_number(plan.count),
            Self::format_number(plan.xp),
            Self::format_number(plan.cost),
            format!("{:.3}", plan.xp_per_cost),
            Self::format_number(details.unit_cost),
            format!("{:.1}%", details.discount * 100.0),
            direct,
            auto,
        ]
    }

    fn push_line(out: &mut String, cells: &[String; 9], widths: &[usize; 9]) {
        let line = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{:<width$}", cell, width = *width)
                } else {
                    format!("{:>width$}", cell, width = *width)
                }
            })
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    /// A capped run is shown with a trailing `+`.
    fn format_outcome(outcome: Option<&ModeOutcome>) -> String {
        match outcome {
            Some(o) if o.limited => format!("{}+", o.count),
            Some(o) => o.count.to_string(),
            None => "-".to_string(),
        }
    }

    fn format_number(n: f64) -> String {
        if n.fract() == 0.0 {
            format!("{}", n as i64)
        } else {
            format!("{:.2}", n)
        }
    }
}
