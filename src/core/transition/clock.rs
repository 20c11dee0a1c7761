//=========================================================================
// Transition Clock
//=========================================================================
//
// Converts elapsed frame time into a normalized transition position.
//
//   position 0.0 ── fully on (visible)
//   position 1.0 ── fully off (hidden)
//
// Moving on decreases the position, moving off increases it. A zero
// ramp length completes in a single step.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Screen State ========================================================

/// Transition phase of a screen or of the shared fade signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenState {
    /// Ramping toward fully visible.
    TransitionOn,

    /// Fully visible.
    Active,

    /// Ramping toward fully hidden.
    TransitionOff,

    /// Fully hidden.
    Hidden,
}

impl ScreenState {
    /// Whether this phase allows input routing (`TransitionOn` or `Active`).
    pub fn accepts_input(self) -> bool {
        matches!(self, ScreenState::TransitionOn | ScreenState::Active)
    }
}

//=== Transition Direction ================================================

/// Direction in which a [`TransitionClock`] is advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    On,
    Off,
}

impl TransitionDirection {
    fn sign(self) -> f32 {
        match self {
            TransitionDirection::On => -1.0,
            TransitionDirection::Off => 1.0,
        }
    }
}

//=== Transition Clock ====================================================

/// Normalized transition progress for a single screen (or fade).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionClock {
    position: f32,
}

impl TransitionClock {
    /// Creates a clock at the fully-off position.
    pub fn new() -> Self {
        Self { position: 1.0 }
    }

    /// Current position, `0.0` = fully on, `1.0` = fully off.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Opacity matching the current position (`1.0 - position`).
    pub fn alpha(&self) -> f32 {
        1.0 - self.position
    }

    /// Moves the clock to `position`, clamped to `[0, 1]`.
    pub fn reset_to(&mut self, position: f32) {
        self.position = position.clamp(0.0, 1.0);
    }

    /// Advances the clock by `elapsed` over a ramp of length `ramp`.
    ///
    /// Returns `true` while the transition is still in flight and `false`
    /// once the clock has reached the end for `direction`.
    pub fn advance(
        &mut self,
        elapsed: Duration,
        ramp: Duration,
        direction: TransitionDirection,
    ) -> bool {
        let delta = if ramp.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / ramp.as_secs_f32()
        };

        self.position += delta * direction.sign();

        let finished = match direction {
            TransitionDirection::On => self.position <= 0.0,
            TransitionDirection::Off => self.position >= 1.0,
        };

        if finished {
            self.position = self.position.clamp(0.0, 1.0);
            return false;
        }

        true
    }
}

impl Default for TransitionClock {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
