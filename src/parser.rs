//! Shorthand workout text parser
//!
//! Turns a compact, human-written swim workout notation into a structured
//! [`TrainingPlan`]. One line of input describes one training block, e.g.
//! `10x100m free com 20"` (ten repetitions of 100 meters freestyle with a
//! 20 second rest). Parsing is a pure computation over the text: no I/O,
//! no shared state, and it never fails - unrecognized lines degrade to
//! zero-distance steps instead of aborting the parse.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Segment, Sport, Step, StrokeKind, TrainingPlan};

// `10x100m ...` with an optional, discarded upper-bound range (`10 a 12x100m`).
// The multiplier must sit flush against the `x`, the distance flush against `m`.
static REPEAT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)(?:\s*a\s*\d+)?x(\d+)m\s+(.*)").unwrap());

// `200m ...` - a single effort, repetition count 1.
static SINGLE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)m\s+(.*)").unwrap());

// `com 20"` embedded in the description marks rest seconds.
static REST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"com (\d+)""#).unwrap());

/// What the line recognizer extracted from one non-blank input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePattern {
    /// Repetition count, defaults to 1
    pub repetitions: u32,

    /// Per-repetition distance in meters; 0 when no pattern matched
    pub distance_meters: u32,

    /// Description text with the rest marker removed and whitespace trimmed
    pub description: String,

    /// Rest in seconds taken from the `com N"` marker, 0 when absent
    pub rest_seconds: u32,
}

/// Classify one input line
///
/// Ordered rules, first match wins: repeat pattern, single pattern, then the
/// no-match fallback (distance 0, empty description - the line still
/// produces a degenerate step rather than being discarded). Afterwards the
/// description is scanned for the first `com N"` rest marker, which is
/// excised from the text. Pure function of the line; never fails.
pub fn recognize_line(line: &str) -> LinePattern {
    let mut repetitions = 1;
    let distance_meters;
    let mut description;

    if let Some(caps) = REPEAT_LINE.captures(line) {
        repetitions = parse_digits(&caps[1]);
        distance_meters = parse_digits(&caps[2]);
        description = caps[3].to_string();
    } else if let Some(caps) = SINGLE_LINE.captures(line) {
        distance_meters = parse_digits(&caps[1]);
        description = caps[2].to_string();
    } else {
        distance_meters = 0;
        description = String::new();
    }

    let mut rest_seconds = 0;
    let marker = REST_MARKER
        .captures(&description)
        .map(|caps| (parse_digits(&caps[1]), caps.get(0).map_or(0..0, |m| m.range())));
    if let Some((seconds, matched)) = marker {
        rest_seconds = seconds;
        let seam = matched.start;
        description.replace_range(matched, "");
        // Excising a mid-description marker leaves a doubled space at the seam
        if description[..seam].ends_with(' ') && description[seam..].starts_with(' ') {
            description.remove(seam);
        }
        description = description.trim().to_string();
    }

    LinePattern {
        repetitions,
        distance_meters,
        description,
        rest_seconds,
    }
}

// Captures are all-digit by construction; only absurdly long runs can
// overflow, and those degrade to 0 like any other unparseable input.
fn parse_digits(digits: &str) -> u32 {
    digits.parse().unwrap_or(0)
}

/// Accumulator threaded through the per-line step synthesis
///
/// Explicit value passed into and returned from each build so the fold over
/// lines carries no hidden mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BuildState {
    /// Next free global order slot
    next_order: u32,

    /// Distance in meters accumulated so far across all repetitions
    total_distance_meters: u32,
}

/// Synthesize the steps for one recognized line
///
/// Produces a repeat group (main effort plus optional rest as children)
/// followed by a standalone lap-marker step. The lap marker sits outside the
/// repeat loop: it delimits this block from the next on the device, so it is
/// a sibling of the group, not a child.
fn build_line_steps(state: BuildState, pattern: &LinePattern) -> (BuildState, Vec<Step>) {
    let order = state.next_order;

    let mut children = vec![Step::Main {
        order: order + 1,
        distance_meters: pattern.distance_meters,
        description: pattern.description.clone(),
        stroke: StrokeKind::Free,
    }];

    if pattern.rest_seconds > 0 {
        children.push(Step::Rest {
            order: order + 2,
            duration_seconds: pattern.rest_seconds,
        });
    }

    let lap_order = order + children.len() as u32 + 1;

    let steps = vec![
        Step::Repeat {
            order,
            iterations: pattern.repetitions,
            steps: children,
        },
        Step::LapMarker { order: lap_order },
    ];

    // Saturating: absurd numeric input degrades instead of overflowing
    let line_distance = pattern.distance_meters.saturating_mul(pattern.repetitions);
    let next = BuildState {
        next_order: lap_order + 1,
        total_distance_meters: state.total_distance_meters.saturating_add(line_distance),
    };

    (next, steps)
}

/// Parse shorthand workout text into a training plan
///
/// Lines are separated by newline; blank lines (after trimming) are skipped
/// entirely. Each remaining line contributes one repeat group and one lap
/// marker, with order numbering continuing across lines. Empty input yields
/// a plan with a single empty segment and zero total distance; callers
/// should check [`TrainingPlan::is_empty`] before submitting.
pub fn parse_training_text(text: &str) -> TrainingPlan {
    let mut state = BuildState {
        next_order: 1,
        total_distance_meters: 0,
    };
    let mut steps = Vec::new();

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let pattern = recognize_line(line);
        let (next, line_steps) = build_line_steps(state, &pattern);
        state = next;
        steps.extend(line_steps);
    }

    TrainingPlan {
        sport: Sport::Swimming,
        segments: vec![Segment {
            order: 1,
            sport: Sport::Swimming,
            steps,
        }],
        total_distance_meters: state.total_distance_meters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_repeat_line() {
        let pattern = recognize_line("4x100m drill");
        assert_eq!(
            pattern,
            LinePattern {
                repetitions: 4,
                distance_meters: 100,
                description: "drill".to_string(),
                rest_seconds: 0,
            }
        );
    }

    #[test]
    fn test_recognize_repeat_line_with_range() {
        // The upper bound of the range is tolerated but discarded
        let pattern = recognize_line("10 a 12x100m free");
        assert_eq!(pattern.repetitions, 10);
        assert_eq!(pattern.distance_meters, 100);
        assert_eq!(pattern.description, "free");
    }

    #[test]
    fn test_recognize_single_line() {
        let pattern = recognize_line("200m warmup");
        assert_eq!(pattern.repetitions, 1);
        assert_eq!(pattern.distance_meters, 200);
        assert_eq!(pattern.description, "warmup");
    }

    #[test]
    fn test_recognize_rest_marker() {
        let pattern = recognize_line("200m warmup com 30\"");
        assert_eq!(pattern.distance_meters, 200);
        assert_eq!(pattern.description, "warmup");
        assert_eq!(pattern.rest_seconds, 30);
    }

    #[test]
    fn test_rest_marker_removed_from_middle_of_description() {
        let pattern = recognize_line("4x50m drill com 20\" fast");
        assert_eq!(pattern.rest_seconds, 20);
        assert_eq!(pattern.description, "drill fast");
    }

    #[test]
    fn test_only_first_rest_marker_recognized() {
        let pattern = recognize_line("100m pull com 15\" com 45\"");
        assert_eq!(pattern.rest_seconds, 15);
        assert_eq!(pattern.description, "pull com 45\"");
    }

    #[test]
    fn test_recognize_unmatched_line_degrades() {
        let pattern = recognize_line("just text");
        assert_eq!(
            pattern,
            LinePattern {
                repetitions: 1,
                distance_meters: 0,
                description: String::new(),
                rest_seconds: 0,
            }
        );
    }

    #[test]
    fn test_spaced_multiplier_does_not_match_repeat_rule() {
        // `4 x100m` has a space before the `x`, so the repeat rule must not
        // fire; the line falls through to the no-match fallback (the digits
        // are not followed by `m`).
        let pattern = recognize_line("4 x100m drill");
        assert_eq!(pattern.repetitions, 1);
        assert_eq!(pattern.distance_meters, 0);
    }

    #[test]
    fn test_empty_text_yields_empty_plan() {
        let plan = parse_training_text("");
        assert!(plan.is_empty());
        assert_eq!(plan.total_distance_meters, 0);
        assert_eq!(plan.segments.len(), 1);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let plan = parse_training_text("\n   \n\t\n");
        assert!(plan.is_empty());
        assert_eq!(plan.total_distance_meters, 0);
    }

    #[test]
    fn test_single_repeat_line() {
        let plan = parse_training_text("4x100m drill");
        assert_eq!(plan.total_distance_meters, 400);

        let steps = &plan.segments[0].steps;
        assert_eq!(steps.len(), 2);

        match &steps[0] {
            Step::Repeat {
                order,
                iterations,
                steps,
            } => {
                assert_eq!(*order, 1);
                assert_eq!(*iterations, 4);
                assert_eq!(steps.len(), 1);
                match &steps[0] {
                    Step::Main {
                        order,
                        distance_meters,
                        description,
                        stroke,
                    } => {
                        assert_eq!(*order, 2);
                        assert_eq!(*distance_meters, 100);
                        assert_eq!(description, "drill");
                        assert_eq!(*stroke, StrokeKind::Free);
                    }
                    other => panic!("expected main step, got {:?}", other),
                }
            }
            other => panic!("expected repeat group, got {:?}", other),
        }

        assert_eq!(steps[1], Step::LapMarker { order: 3 });
    }

    #[test]
    fn test_single_line_with_rest() {
        let plan = parse_training_text("200m warmup com 30\"");
        assert_eq!(plan.total_distance_meters, 200);

        let steps = &plan.segments[0].steps;
        match &steps[0] {
            Step::Repeat {
                iterations, steps, ..
            } => {
                assert_eq!(*iterations, 1);
                assert_eq!(steps.len(), 2);
                assert_eq!(
                    steps[1],
                    Step::Rest {
                        order: 3,
                        duration_seconds: 30
                    }
                );
            }
            other => panic!("expected repeat group, got {:?}", other),
        }
        assert_eq!(steps[1], Step::LapMarker { order: 4 });
    }

    #[test]
    fn test_order_continues_across_lines() {
        let plan = parse_training_text("4x100m drill com 20\"\n200m cooldown");
        let orders: Vec<u32> = plan.steps().map(Step::order).collect();

        // Line 1: repeat 1, main 2, rest 3, lap 4. Line 2: repeat 5, main 6, lap 7.
        assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(plan.total_distance_meters, 600);
    }

    #[test]
    fn test_unmatched_line_does_not_abort_parse() {
        let plan = parse_training_text("just text\n100m sprint");
        let steps = &plan.segments[0].steps;
        assert_eq!(steps.len(), 4);

        match &steps[0] {
            Step::Repeat { steps, .. } => match &steps[0] {
                Step::Main {
                    distance_meters,
                    description,
                    ..
                } => {
                    assert_eq!(*distance_meters, 0);
                    assert_eq!(description, "");
                }
                other => panic!("expected main step, got {:?}", other),
            },
            other => panic!("expected repeat group, got {:?}", other),
        }

        assert_eq!(plan.total_distance_meters, 100);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "4x100m drill com 20\"\n10 a 12x50m sprint\n200m cooldown";
        assert_eq!(parse_training_text(text), parse_training_text(text));
    }

    #[test]
    fn test_accumulated_total_matches_tree_fold() {
        let plan = parse_training_text("4x100m drill\n200m swim com 15\"\n8x25m kick");
        assert_eq!(plan.total_distance(), plan.total_distance_meters);
        assert_eq!(plan.total_distance_meters, 400 + 200 + 200);
    }
}
