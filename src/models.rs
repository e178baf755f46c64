use serde::{Deserialize, Serialize};

/// Sport types a training plan can be built for
///
/// The shorthand grammar only produces swimming plans today, but the
/// plan structure itself is sport-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Swimming,
}

/// Swim stroke assigned to a main step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeKind {
    /// Freestyle - the only stroke the shorthand grammar assigns
    Free,
}

/// A single step in a training plan
///
/// One variant per concrete step kind, each carrying only the fields that
/// kind needs. `order` values are unique and strictly increasing across the
/// whole plan, in the exact sequence the steps were synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Step {
    /// Repeats its child steps a fixed number of iterations
    Repeat {
        order: u32,
        /// Number of iterations taken from the repetition count
        iterations: u32,
        steps: Vec<Step>,
    },

    /// A swim effort with a distance target
    Main {
        order: u32,
        /// Per-repetition distance in meters
        distance_meters: u32,
        /// Free-form description taken from the source line
        description: String,
        stroke: StrokeKind,
    },

    /// Fixed rest between efforts
    Rest {
        order: u32,
        duration_seconds: u32,
    },

    /// Completed by the athlete pressing the lap button, delimiting one
    /// training block from the next on the device
    LapMarker { order: u32 },
}

impl Step {
    /// The global order slot this step occupies
    pub fn order(&self) -> u32 {
        match self {
            Step::Repeat { order, .. }
            | Step::Main { order, .. }
            | Step::Rest { order, .. }
            | Step::LapMarker { order } => *order,
        }
    }

    /// Distance contribution of this step and its children, in meters
    ///
    /// Repeat groups multiply the children's contribution by the iteration
    /// count; rest and lap-marker steps contribute nothing.
    pub fn distance_meters(&self) -> u32 {
        match self {
            Step::Repeat {
                iterations, steps, ..
            } => steps
                .iter()
                .map(Step::distance_meters)
                .fold(0u32, u32::saturating_add)
                .saturating_mul(*iterations),
            Step::Main {
                distance_meters, ..
            } => *distance_meters,
            Step::Rest { .. } | Step::LapMarker { .. } => 0,
        }
    }
}

/// A top-level grouping of steps sharing one sport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// 1-based position among the plan's segments
    pub order: u32,

    /// Sport this segment belongs to
    pub sport: Sport,

    /// Ordered steps of the segment
    pub steps: Vec<Step>,
}

/// A parsed training plan
///
/// Built once per parse call and immutable thereafter; the caller owns it
/// outright (preview rendering, payload building).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Sport the plan targets
    pub sport: Sport,

    /// Ordered segments; the shorthand grammar produces exactly one
    pub segments: Vec<Segment>,

    /// Sum in meters of every effort's distance across all repetitions
    pub total_distance_meters: u32,
}

impl TrainingPlan {
    /// Whether the plan carries no steps at all
    ///
    /// Callers must check this before building a submission payload.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|segment| segment.steps.is_empty())
    }

    /// Recompute the total distance by folding over the step tree
    ///
    /// Numerically identical to `total_distance_meters`, which is
    /// accumulated during parsing.
    pub fn total_distance(&self) -> u32 {
        self.segments
            .iter()
            .flat_map(|segment| segment.steps.iter())
            .map(Step::distance_meters)
            .fold(0u32, u32::saturating_add)
    }

    /// Iterate over every step in the plan in order, depth-first
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        fn walk<'a>(steps: &'a [Step], out: &mut Vec<&'a Step>) {
            for step in steps {
                out.push(step);
                if let Step::Repeat { steps, .. } = step {
                    walk(steps, out);
                }
            }
        }

        let mut flattened = Vec::new();
        for segment in &self.segments {
            walk(&segment.steps, &mut flattened);
        }
        flattened.into_iter()
    }
}
