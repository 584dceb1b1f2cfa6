//! Rotation intent classifier
//!
//! Keeps the previous reading and decides, per new reading, whether the
//! device turned far enough (but not too far) to mean "next" or "previous".

use tilt_core::{
    DirectionMap, NavigationIntent, OrientationSample, RotationSense, RotationTransition,
};

use crate::config::{GestureConfig, ThresholdPolicy};

/// Everything the classifier worked out for one reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedStep {
    /// Sign relationship of (current, previous)
    pub transition: RotationTransition,
    /// `|current| - |previous|`
    pub delta: f64,
    /// `|current| + |previous|`
    pub sum: f64,
    /// Physical direction detected, if any
    pub sense: Option<RotationSense>,
    /// Resulting paging decision, if any
    pub intent: Option<NavigationIntent>,
}

/// Stateful classifier over consecutive rotation readings
#[derive(Debug, Clone)]
pub struct RotationIntentClassifier {
    thresholds: ThresholdPolicy,
    direction: DirectionMap,
    initial_reading: OrientationSample,
    previous_reading: OrientationSample,
}

impl RotationIntentClassifier {
    /// Create a classifier from a gesture configuration
    pub fn new(config: &GestureConfig) -> Self {
        Self::with_parts(config.thresholds, config.direction, config.initial_reading)
    }

    /// Create a classifier from individual settings
    pub fn with_parts(
        thresholds: ThresholdPolicy,
        direction: DirectionMap,
        initial_reading: OrientationSample,
    ) -> Self {
        Self {
            thresholds,
            direction,
            initial_reading,
            previous_reading: initial_reading,
        }
    }

    /// The remembered reading the next sample will be compared against
    pub fn previous_reading(&self) -> OrientationSample {
        self.previous_reading
    }

    /// Evaluate a reading against memory without updating it
    pub fn evaluate(&self, current: OrientationSample) -> ClassifiedStep {
        let previous = self.previous_reading;
        let transition = RotationTransition::classify(current, previous);
        let delta = current.abs() - previous.abs();
        let sum = current.abs() + previous.abs();

        let sense = self.thresholds.sense(transition, delta, sum);
        let intent = sense.map(|s| self.direction.intent_for(s));

        ClassifiedStep {
            transition,
            delta,
            sum,
            sense,
            intent,
        }
    }

    /// Evaluate a reading, then remember it
    pub fn classify_step(&mut self, current: OrientationSample) -> ClassifiedStep {
        let step = self.evaluate(current);
        self.previous_reading = current;

        if let Some(intent) = step.intent {
            log::debug!(
                "{:?} delta={:.3} sum={:.3} -> {}",
                step.transition,
                step.delta,
                step.sum,
                intent
            );
        }

        step
    }

    /// Process one reading and return the paging decision, if any
    ///
    /// Memory is updated whether or not an intent fires.
    pub fn on_sample(&mut self, current: OrientationSample) -> Option<NavigationIntent> {
        self.classify_step(current).intent
    }

    /// Remember a reading without evaluating it (used while cooling down)
    pub fn observe(&mut self, current: OrientationSample) {
        self.previous_reading = current;
    }

    /// Forget history and start again from the configured initial reading
    pub fn reset(&mut self) {
        self.previous_reading = self.initial_reading;
    }
}
