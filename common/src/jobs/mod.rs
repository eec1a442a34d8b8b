//! Submission lifecycle shared by the generation and contact panels.

/// Display state of one panel's submission control.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum SubmissionState<T> {
    #[default]
    Idle,
    InProgress,
    Succeeded(T),
    Failed(String),
}

impl<T> SubmissionState<T> {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionState::InProgress)
    }

    /// Moves to `InProgress`. Returns `false` when a submission is already
    /// pending, in which case the caller must not issue another request.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = SubmissionState::InProgress;
        true
    }

    pub fn settle<E: ToString>(&mut self, outcome: Result<T, E>) {
        *self = match outcome {
            Ok(value) => SubmissionState::Succeeded(value),
            Err(err) => SubmissionState::Failed(err.to_string()),
        };
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            SubmissionState::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}

/// Cadence of a panel's cosmetic progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickProfile {
    pub interval_ms: u32,
    pub max_step: f64,
}

pub const TABULAR_TICK: TickProfile = TickProfile {
    interval_ms: 500,
    max_step: 15.0,
};

pub const QA_TICK: TickProfile = TickProfile {
    interval_ms: 400,
    max_step: 12.0,
};

impl TickProfile {
    /// Increment for one tick given a uniform sample in `[0, 1)`.
    pub fn step(&self, unit: f64) -> f64 {
        unit.clamp(0.0, 1.0) * self.max_step
    }
}

/// Purely decorative progress value.
///
/// It advances on a timer at random increments and stalls at
/// [`DecorativeProgress::CEILING`]. It knows nothing about the real request;
/// the panel forces it to 100 or 0 once the request settles.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DecorativeProgress {
    value: f64,
}

impl DecorativeProgress {
    pub const CEILING: f64 = 90.0;
    pub const COMPLETE: f64 = 100.0;

    /// Adds `step` without passing the ceiling. Returns `false` once the
    /// ceiling is reached, meaning the timer can stop.
    pub fn advance(&mut self, step: f64) -> bool {
        if self.value >= Self::CEILING {
            return false;
        }
        self.value = (self.value + step.max(0.0)).min(Self::CEILING);
        self.value < Self::CEILING
    }

    pub fn finish(&mut self) {
        self.value = Self::COMPLETE;
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn percent(&self) -> u32 {
        self.value.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_never_passes_ceiling() {
        let mut progress = DecorativeProgress::default();
        let mut ticks = 0;
        while progress.advance(TABULAR_TICK.step(0.99)) {
            ticks += 1;
            assert!(progress.value() < DecorativeProgress::CEILING);
        }
        assert!(ticks > 0);
        assert_eq!(progress.value(), DecorativeProgress::CEILING);
        assert!(!progress.advance(10.0));
        assert_eq!(progress.percent(), 90);
    }

    #[test]
    fn finish_and_reset_are_terminal_values() {
        let mut progress = DecorativeProgress::default();
        progress.advance(42.0);
        progress.finish();
        assert_eq!(progress.percent(), 100);
        progress.reset();
        assert_eq!(progress.value(), 0.0);
    }

    #[test]
    fn step_scales_unit_sample() {
        assert_eq!(QA_TICK.step(0.5), 6.0);
        assert_eq!(QA_TICK.step(-1.0), 0.0);
        assert_eq!(TABULAR_TICK.step(2.0), 15.0);
    }

    #[test]
    fn submission_rejects_double_begin() {
        let mut state: SubmissionState<u32> = SubmissionState::default();
        assert!(state.begin());
        assert!(state.is_busy());
        assert!(!state.begin());
        state.settle::<String>(Ok(7));
        assert_eq!(state.succeeded(), Some(&7));
        assert!(state.begin());
        state.settle::<&str>(Err("offline"));
        assert_eq!(state, SubmissionState::Failed("offline".to_string()));
    }
}
