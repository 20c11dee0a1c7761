//=========================================================================
// Transition Settings
//=========================================================================
//
// Builder for configuring a TransitionController before construction.
//
//   TransitionSettings ──build()──> TransitionController
//       ├─ with_tick_rate()
//       ├─ with_fade_ticks()
//       ├─ with_transition_on_time()
//       └─ with_transition_off_time()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::TransitionController;

//=== Defaults ============================================================

/// Default simulation rate the fade length is expressed in.
pub const DEFAULT_TICK_RATE: f64 = 60.0;

/// Default fade length, in ticks.
pub const DEFAULT_FADE_TICKS: u32 = 60;

//=== TransitionSettings ==================================================

/// Builder for a [`TransitionController`].
///
/// # Default Values
///
/// - **Tick rate**: 60.0 ticks per second
/// - **Fade length**: 60 ticks (one second at the default rate)
/// - **Transition on/off time**: zero (screens appear and leave instantly
///   until a fade configures a ramp)
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use aetheric_screens::prelude::*;
///
/// let transitions = TransitionSettings::new()
///     .with_tick_rate(120.0)
///     .with_fade_ticks(30)
///     .with_transition_off_time(Duration::from_millis(250))
///     .build();
///
/// assert_eq!(transitions.fade_duration(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSettings {
    tick_rate: f64,
    fade_ticks: u32,
    transition_on_time: Duration,
    transition_off_time: Duration,
}

impl TransitionSettings {
    /// Creates settings with default values.
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            fade_ticks: DEFAULT_FADE_TICKS,
            transition_on_time: Duration::ZERO,
            transition_off_time: Duration::ZERO,
        }
    }

    /// Sets the tick rate used to convert fade ticks into time.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tick_rate` is not a positive finite number.
    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        assert!(
            tick_rate.is_finite() && tick_rate > 0.0,
            "Tick rate must be positive, got {}",
            tick_rate
        );
        self.tick_rate = tick_rate;
        self
    }

    /// Sets the number of ticks `fade_in`/`fade_out` ramps last.
    ///
    /// Default: 60
    pub fn with_fade_ticks(mut self, ticks: u32) -> Self {
        self.fade_ticks = ticks;
        self
    }

    /// Sets the initial transition-on ramp length.
    pub fn with_transition_on_time(mut self, time: Duration) -> Self {
        self.transition_on_time = time;
        self
    }

    /// Sets the initial transition-off ramp length.
    ///
    /// A zero value makes `exit_screen` remove screens instantly.
    pub fn with_transition_off_time(mut self, time: Duration) -> Self {
        self.transition_off_time = time;
        self
    }

    /// Fade ramp length: `fade_ticks / tick_rate` seconds.
    ///
    /// Saturates at `Duration::MAX` when the ratio does not fit a
    /// `Duration` (extremely small tick rates).
    pub fn fade_duration(&self) -> Duration {
        let secs = self.fade_ticks as f64 / self.tick_rate;

        Duration::try_from_secs_f64(secs).unwrap_or_else(|_| {
            warn!("Fade of {} s does not fit a Duration, saturating", secs);
            Duration::MAX
        })
    }

    /// Builds the controller.
    pub fn build(self) -> TransitionController {
        info!(
            "Building transition controller (tick rate: {}, fade: {} ticks)",
            self.tick_rate, self.fade_ticks
        );

        TransitionController::from_parts(
            self.fade_duration(),
            self.transition_on_time,
            self.transition_off_time,
        )
    }
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
