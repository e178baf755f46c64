//! Human-readable preview of a training plan

use std::fmt::Write;

use crate::models::{Step, TrainingPlan};

/// Render a plan as an indented text preview
///
/// One line per step: repeat groups announce their iteration count and
/// indent their children, rests show their duration, lap markers show as a
/// manual button press.
pub fn render_plan(plan: &TrainingPlan) -> String {
    let mut out = String::new();

    if plan.is_empty() {
        out.push_str("No training data to display.\n");
        return out;
    }

    let _ = writeln!(out, "Total distance: {}m", plan.total_distance_meters);

    for segment in &plan.segments {
        for step in &segment.steps {
            render_step(&mut out, step, 0);
        }
    }

    out
}

fn render_step(out: &mut String, step: &Step, depth: usize) {
    let indent = "  ".repeat(depth);
    match step {
        Step::Repeat {
            iterations, steps, ..
        } => {
            let _ = writeln!(out, "{}Loop {} times:", indent, iterations);
            for child in steps {
                render_step(out, child, depth + 1);
            }
        }
        Step::Main {
            distance_meters,
            description,
            ..
        } => {
            if description.is_empty() {
                let _ = writeln!(out, "{}{}m", indent, distance_meters);
            } else {
                let _ = writeln!(out, "{}{}m - {}", indent, distance_meters, description);
            }
        }
        Step::Rest {
            duration_seconds, ..
        } => {
            let _ = writeln!(out, "{}{} seconds rest", indent, duration_seconds);
        }
        Step::LapMarker { .. } => {
            let _ = writeln!(out, "{}Lap Button Press", indent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_training_text;

    #[test]
    fn test_render_empty_plan() {
        let plan = parse_training_text("");
        assert_eq!(render_plan(&plan), "No training data to display.\n");
    }

    #[test]
    fn test_render_repeat_with_rest() {
        let plan = parse_training_text("4x100m drill com 20\"");
        let preview = render_plan(&plan);

        assert_eq!(
            preview,
            "Total distance: 400m\n\
             Loop 4 times:\n  \
             100m - drill\n  \
             20 seconds rest\n\
             Lap Button Press\n"
        );
    }

    #[test]
    fn test_render_multiple_lines() {
        let plan = parse_training_text("200m warmup\n4x50m sprint");
        let preview = render_plan(&plan);

        assert!(preview.starts_with("Total distance: 400m\n"));
        assert!(preview.contains("Loop 1 times:\n  200m - warmup\n"));
        assert!(preview.contains("Loop 4 times:\n  50m - sprint\n"));
        assert_eq!(preview.matches("Lap Button Press").count(), 2);
    }

    #[test]
    fn test_render_degenerate_step_without_description() {
        let plan = parse_training_text("just text");
        let preview = render_plan(&plan);
        assert!(preview.contains("  0m\n"));
    }
}
