//=========================================================================
// Transition Controller
//=========================================================================
//
// Owns the shared transition/fade signal read by every screen on a stack.
//
// State:
//   state                ── shared ScreenState gating Screen activity
//   transition_on/off    ── ramp lengths (zero off-time = instant removal)
//   fade_color           ── color currently shown by the overlay
//   fade_to_color        ── color the overlay animates toward
//   fading_out           ── set while a fade-out is in flight
//   tints                ── scoped color adjustments for fades
//
// There is a single writer per frame: whoever drives the frame loop.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use super::clock::{ScreenState, TransitionClock, TransitionDirection};
use super::tint::{ScreenKind, TintCoordinator};
use super::TransitionSettings;
use crate::core::color::Color;

//=== TransitionController ================================================

/// Shared transition and fade state for a screen stack.
///
/// Create via [`TransitionSettings`] or [`TransitionController::new`] for
/// defaults, and pass it by reference to screens each frame.
#[derive(Debug)]
pub struct TransitionController {
    state: ScreenState,
    transition_on_time: Duration,
    transition_off_time: Duration,
    fade_duration: Duration,
    fade_color: Color,
    fade_from_color: Color,
    fade_to_color: Color,
    fading_out: bool,
    fade_clock: TransitionClock,
    tints: TintCoordinator,
}

impl TransitionController {
    //--- Construction -----------------------------------------------------

    /// Creates a controller with default [`TransitionSettings`].
    pub fn new() -> Self {
        TransitionSettings::new().build()
    }

    pub(super) fn from_parts(
        fade_duration: Duration,
        transition_on_time: Duration,
        transition_off_time: Duration,
    ) -> Self {
        let mut fade_clock = TransitionClock::new();
        fade_clock.reset_to(0.0);

        Self {
            state: ScreenState::Active,
            transition_on_time,
            transition_off_time,
            fade_duration,
            fade_color: Color::TRANSPARENT_BLACK,
            fade_from_color: Color::TRANSPARENT_BLACK,
            fade_to_color: Color::TRANSPARENT_BLACK,
            fading_out: false,
            fade_clock,
            tints: TintCoordinator::new(),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Overrides the shared state, for sequencers that drive it directly.
    ///
    /// Leaving `TransitionOff` this way cancels any fade-out in flight.
    pub fn set_state(&mut self, state: ScreenState) {
        if state != ScreenState::TransitionOff && self.fading_out {
            debug!("State set to {:?}, cancelling fade-out", state);
            self.fading_out = false;
        }

        self.state = state;
    }

    pub fn transition_on_time(&self) -> Duration {
        self.transition_on_time
    }

    pub fn set_transition_on_time(&mut self, time: Duration) {
        self.transition_on_time = time;
    }

    pub fn transition_off_time(&self) -> Duration {
        self.transition_off_time
    }

    pub fn set_transition_off_time(&mut self, time: Duration) {
        self.transition_off_time = time;
    }

    /// Ramp length applied by `fade_in`/`fade_out`.
    pub fn fade_duration(&self) -> Duration {
        self.fade_duration
    }

    pub fn fade_color(&self) -> Color {
        self.fade_color
    }

    pub fn fade_to_color(&self) -> Color {
        self.fade_to_color
    }

    pub fn is_fading_out(&self) -> bool {
        self.fading_out
    }

    /// Position of the current fade ramp (`0.0` = fully on, `1.0` = fully off).
    pub fn fade_progress(&self) -> f32 {
        self.fade_clock.position()
    }

    pub fn tints(&self) -> &TintCoordinator {
        &self.tints
    }

    pub fn tints_mut(&mut self) -> &mut TintCoordinator {
        &mut self.tints
    }

    //--- Fades ------------------------------------------------------------

    /// Starts a fade to black (tinted), moving the shared state to
    /// `TransitionOff`.
    ///
    /// `top` is the kind of the screen currently on top of the stack; it
    /// selects which scoped tints apply.
    pub fn fade_out(&mut self, top: Option<ScreenKind>) {
        self.transition_off_time = self.fade_duration;
        self.fade_color = self.tints.compose(Color::BLACK, top);

        self.state = ScreenState::TransitionOff;
        self.fading_out = true;
        self.fade_clock.reset_to(0.0);

        debug!("Fading out to {:?} over {:?}", self.fade_color, self.fade_duration);
    }

    /// Starts a fade in from black toward the tinted target color, moving
    /// the shared state to `TransitionOn`.
    pub fn fade_in(&mut self, top: Option<ScreenKind>) {
        self.transition_on_time = self.fade_duration;

        let mut target = self.tints.compose(Color::TRANSPARENT_BLACK, top);
        if target == Color::WHITE {
            target = Color::TRANSPARENT_BLACK;
        }

        self.fade_to_color = target;
        self.fade_color = Color::BLACK;
        self.fade_from_color = Color::BLACK;

        self.state = ScreenState::TransitionOn;
        self.fading_out = false;
        self.fade_clock.reset_to(1.0);

        debug!("Fading in toward {:?} over {:?}", self.fade_to_color, self.fade_duration);
    }

    /// Sets the fade target unless a fade-out is in flight, in which case
    /// the call is dropped.
    pub fn reset_fade(&mut self, color: Color) {
        if self.fading_out {
            debug!("Fade-out in progress, dropping reset to {:?}", color);
            return;
        }

        self.fade_to_color = color;
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the shared fade ramp by one frame.
    ///
    /// `TransitionOn` interpolates the fade color toward its target and
    /// settles on `Active`. `TransitionOff` settles on `Hidden`, which also
    /// ends the fade-out.
    pub fn update(&mut self, elapsed: Duration) {
        match self.state {
            ScreenState::TransitionOn => {
                let in_flight = self.fade_clock.advance(
                    elapsed,
                    self.transition_on_time,
                    TransitionDirection::On,
                );
                self.fade_color = self
                    .fade_from_color
                    .lerp(self.fade_to_color, self.fade_clock.alpha());

                if !in_flight {
                    debug!("Fade in complete");
                    self.state = ScreenState::Active;
                }
            }
            ScreenState::TransitionOff => {
                let in_flight = self.fade_clock.advance(
                    elapsed,
                    self.transition_off_time,
                    TransitionDirection::Off,
                );

                if !in_flight {
                    debug!("Fade out complete");
                    self.state = ScreenState::Hidden;
                    self.fading_out = false;
                }
            }
            ScreenState::Active | ScreenState::Hidden => {}
        }
    }
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
