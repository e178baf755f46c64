//! Wire shape for the workout service API
//!
//! The service identifies step and end-condition kinds by fixed numeric ids
//! paired with string keys, and discriminates step objects with `type`
//! strings (`RepeatGroupDTO` / `ExecutableStepDTO`). The descriptor tables
//! here are part of the external contract and must not change.

use serde::Serialize;

use crate::models::{Segment, Sport, Step, StrokeKind, TrainingPlan};

/// Step type descriptor (`stepType` object on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTypeDto {
    pub step_type_id: u8,
    pub step_type_key: &'static str,
    pub display_order: u8,
}

/// End condition descriptor (`endCondition` object on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndConditionDto {
    pub condition_type_id: u8,
    pub condition_type_key: &'static str,
    pub display_order: u8,
    pub displayable: bool,
}

/// Stroke descriptor (`strokeType` object on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeTypeDto {
    pub stroke_type_id: u8,
    pub stroke_type_key: &'static str,
    pub display_order: u8,
}

/// Sport descriptor (`sportType` object on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportTypeDto {
    pub sport_type_id: u8,
    pub sport_type_key: &'static str,
    pub display_order: u8,
}

pub const MAIN_STEP_TYPE: StepTypeDto = StepTypeDto {
    step_type_id: 8,
    step_type_key: "main",
    display_order: 8,
};

pub const REST_STEP_TYPE: StepTypeDto = StepTypeDto {
    step_type_id: 5,
    step_type_key: "rest",
    display_order: 5,
};

pub const REPEAT_STEP_TYPE: StepTypeDto = StepTypeDto {
    step_type_id: 6,
    step_type_key: "repeat",
    display_order: 6,
};

pub const ITERATIONS_END_CONDITION: EndConditionDto = EndConditionDto {
    condition_type_id: 7,
    condition_type_key: "iterations",
    display_order: 7,
    displayable: false,
};

pub const DISTANCE_END_CONDITION: EndConditionDto = EndConditionDto {
    condition_type_id: 3,
    condition_type_key: "distance",
    display_order: 3,
    displayable: true,
};

pub const FIXED_REST_END_CONDITION: EndConditionDto = EndConditionDto {
    condition_type_id: 8,
    condition_type_key: "fixed.rest",
    display_order: 8,
    displayable: true,
};

pub const LAP_BUTTON_END_CONDITION: EndConditionDto = EndConditionDto {
    condition_type_id: 1,
    condition_type_key: "lap.button",
    display_order: 1,
    displayable: true,
};

pub const FREE_STROKE_TYPE: StrokeTypeDto = StrokeTypeDto {
    stroke_type_id: 6,
    stroke_type_key: "free",
    display_order: 6,
};

pub const SWIMMING_SPORT_TYPE: SportTypeDto = SportTypeDto {
    sport_type_id: 4,
    sport_type_key: "swimming",
    display_order: 4,
};

/// Nominal end-condition value the service stores on lap-button steps;
/// the step completes on a manual press, not on reaching this value.
pub const LAP_MARKER_VALUE: u32 = 200;

/// One workout step on the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum WorkoutStepDto {
    #[serde(rename = "RepeatGroupDTO", rename_all = "camelCase")]
    RepeatGroup {
        step_order: u32,
        step_type: StepTypeDto,
        end_condition: EndConditionDto,
        number_of_iterations: u32,
        workout_steps: Vec<WorkoutStepDto>,
    },

    #[serde(rename = "ExecutableStepDTO", rename_all = "camelCase")]
    Executable {
        step_order: u32,
        step_type: StepTypeDto,
        end_condition: EndConditionDto,
        end_condition_value: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        stroke_type: Option<StrokeTypeDto>,
    },
}

/// One workout segment on the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDto {
    pub segment_order: u32,
    pub sport_type: SportTypeDto,
    pub workout_steps: Vec<WorkoutStepDto>,
}

/// The full plan on the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPlanDto {
    pub sport_type: SportTypeDto,
    pub workout_segments: Vec<SegmentDto>,
    pub estimated_distance_in_meters: u32,
}

impl From<Sport> for SportTypeDto {
    fn from(sport: Sport) -> Self {
        match sport {
            Sport::Swimming => SWIMMING_SPORT_TYPE,
        }
    }
}

impl From<StrokeKind> for StrokeTypeDto {
    fn from(stroke: StrokeKind) -> Self {
        match stroke {
            StrokeKind::Free => FREE_STROKE_TYPE,
        }
    }
}

impl From<&Step> for WorkoutStepDto {
    fn from(step: &Step) -> Self {
        match step {
            Step::Repeat {
                order,
                iterations,
                steps,
            } => WorkoutStepDto::RepeatGroup {
                step_order: *order,
                step_type: REPEAT_STEP_TYPE,
                end_condition: ITERATIONS_END_CONDITION,
                number_of_iterations: *iterations,
                workout_steps: steps.iter().map(WorkoutStepDto::from).collect(),
            },
            Step::Main {
                order,
                distance_meters,
                description,
                stroke,
            } => WorkoutStepDto::Executable {
                step_order: *order,
                step_type: MAIN_STEP_TYPE,
                end_condition: DISTANCE_END_CONDITION,
                end_condition_value: *distance_meters,
                description: Some(description.clone()),
                stroke_type: Some(StrokeTypeDto::from(*stroke)),
            },
            Step::Rest {
                order,
                duration_seconds,
            } => WorkoutStepDto::Executable {
                step_order: *order,
                step_type: REST_STEP_TYPE,
                end_condition: FIXED_REST_END_CONDITION,
                end_condition_value: *duration_seconds,
                description: None,
                stroke_type: None,
            },
            Step::LapMarker { order } => WorkoutStepDto::Executable {
                step_order: *order,
                step_type: REST_STEP_TYPE,
                end_condition: LAP_BUTTON_END_CONDITION,
                end_condition_value: LAP_MARKER_VALUE,
                description: None,
                stroke_type: None,
            },
        }
    }
}

impl From<&Segment> for SegmentDto {
    fn from(segment: &Segment) -> Self {
        SegmentDto {
            segment_order: segment.order,
            sport_type: SportTypeDto::from(segment.sport),
            workout_steps: segment.steps.iter().map(WorkoutStepDto::from).collect(),
        }
    }
}

impl From<&TrainingPlan> for TrainingPlanDto {
    fn from(plan: &TrainingPlan) -> Self {
        TrainingPlanDto {
            sport_type: SportTypeDto::from(plan.sport),
            workout_segments: plan.segments.iter().map(SegmentDto::from).collect(),
            estimated_distance_in_meters: plan.total_distance_meters,
        }
    }
}
