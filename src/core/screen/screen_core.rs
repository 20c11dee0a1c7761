//=========================================================================
// Screen Core
//=========================================================================
//
// Per-screen attributes and the transition state machine.
//
// Each frame the stack manager calls `update()` with focus and coverage:
//
//   exiting  ──► TransitionOff ──(ramp done)──► removal requested once
//   covered  ──► TransitionOff ──(ramp done)──► Hidden
//   visible  ──► TransitionOn  ──(ramp done)──► Active
//
// Activity (input eligibility) is gated by the shared controller state,
// not by the per-screen phase.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::player::PlayerIndex;
use crate::core::transition::{
    ScreenState, TransitionClock, TransitionController, TransitionDirection,
};

//=== Screen Id ===========================================================

/// Identifier assigned to a screen when it is added to a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(pub(crate) u64);

//=== Screen Host =========================================================

/// Receiver of removal requests issued by screens.
///
/// Implemented by the stack container that owns the screens.
pub trait ScreenHost {
    /// Removes the screen with the given id from the stack.
    fn remove_screen(&mut self, id: ScreenId);
}

//=== Screen Core =========================================================

/// State shared by every screen implementation.
///
/// Screens embed a `ScreenCore` and expose it through
/// [`Screen::core`](super::Screen::core).
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenCore {
    id: Option<ScreenId>,
    is_popup: bool,
    is_exiting: bool,
    other_screen_has_focus: bool,
    controlling_player: Option<PlayerIndex>,
    state: ScreenState,
    clock: TransitionClock,
    removal_requested: bool,
}

impl ScreenCore {
    //--- Construction -----------------------------------------------------

    /// Core for a regular (non-popup) screen.
    pub fn new() -> Self {
        Self {
            id: None,
            is_popup: false,
            is_exiting: false,
            other_screen_has_focus: false,
            controlling_player: None,
            state: ScreenState::TransitionOn,
            clock: TransitionClock::new(),
            removal_requested: false,
        }
    }

    /// Core for a popup screen; screens below a popup keep their state.
    pub fn popup() -> Self {
        Self {
            is_popup: true,
            ..Self::new()
        }
    }

    /// Binds the core to a stack slot.
    pub(crate) fn attach(&mut self, id: ScreenId, controlling_player: Option<PlayerIndex>) {
        self.id = Some(id);
        self.controlling_player = controlling_player;
        self.is_exiting = false;
        self.removal_requested = false;
    }

    //--- Accessors --------------------------------------------------------

    /// Id assigned by the stack, `None` until the screen is added.
    pub fn id(&self) -> Option<ScreenId> {
        self.id
    }

    pub fn is_popup(&self) -> bool {
        self.is_popup
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn other_screen_has_focus(&self) -> bool {
        self.other_screen_has_focus
    }

    /// `None` means input from any player is accepted.
    pub fn controlling_player(&self) -> Option<PlayerIndex> {
        self.controlling_player
    }

    pub fn set_controlling_player(&mut self, player: Option<PlayerIndex>) {
        self.controlling_player = player;
    }

    /// Whether input from `player` should drive this screen.
    pub fn accepts_player(&self, player: PlayerIndex) -> bool {
        self.controlling_player.map_or(true, |p| p == player)
    }

    /// Per-screen transition phase.
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// Transition position, `0.0` = fully on, `1.0` = fully off.
    pub fn transition_position(&self) -> f32 {
        self.clock.position()
    }

    /// Opacity to draw with.
    pub fn transition_alpha(&self) -> f32 {
        self.clock.alpha()
    }

    /// Whether this screen should receive input this frame.
    pub fn is_active(&self, transitions: &TransitionController) -> bool {
        !self.other_screen_has_focus && transitions.state().accepts_input()
    }

    //--- Lifecycle --------------------------------------------------------

    /// Closes the screen gracefully.
    ///
    /// With a zero transition-off time the removal is requested right away;
    /// otherwise the screen is flagged as exiting and removed once its
    /// transition off completes.
    pub fn exit_screen(&mut self, transitions: &TransitionController, host: &mut dyn ScreenHost) {
        if transitions.transition_off_time().is_zero() {
            self.request_removal(host);
        } else {
            debug!("Screen {:?} exiting", self.id);
            self.is_exiting = true;
        }
    }

    /// Records focus and advances the transition for one frame.
    pub fn update(
        &mut self,
        elapsed: Duration,
        other_screen_has_focus: bool,
        covered_by_other_screen: bool,
        transitions: &TransitionController,
        host: &mut dyn ScreenHost,
    ) {
        self.other_screen_has_focus = other_screen_has_focus;

        let off_time = transitions.transition_off_time();
        let on_time = transitions.transition_on_time();

        if self.is_exiting {
            self.state = ScreenState::TransitionOff;

            if !self.clock.advance(elapsed, off_time, TransitionDirection::Off) {
                self.request_removal(host);
            }
        } else if covered_by_other_screen {
            self.state = if self.clock.advance(elapsed, off_time, TransitionDirection::Off) {
                ScreenState::TransitionOff
            } else {
                ScreenState::Hidden
            };
        } else {
            self.state = if self.clock.advance(elapsed, on_time, TransitionDirection::On) {
                ScreenState::TransitionOn
            } else {
                ScreenState::Active
            };
        }
    }

    fn request_removal(&mut self, host: &mut dyn ScreenHost) {
        let Some(id) = self.id else {
            warn!("Exit requested for a screen that is not on a stack");
            return;
        };

        if self.removal_requested {
            return;
        }

        debug!("Requesting removal of screen {:?}", id);
        self.removal_requested = true;
        host.remove_screen(id);
    }
}

impl Default for ScreenCore {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Records removal requests
    #[derive(Default)]
    struct RecordingHost {
        removed: Vec<ScreenId>,
    }

    impl ScreenHost for RecordingHost {
        fn remove_screen(&mut self, id: ScreenId) {
            self.removed.push(id);
        }
    }

    fn attached(core: ScreenCore) -> ScreenCore {
        let mut core = core;
        core.attach(ScreenId(7), None);
        core
    }

    fn with_off_time(millis: u64) -> TransitionController {
        let mut transitions = TransitionController::new();
        transitions.set_transition_off_time(Duration::from_millis(millis));
        transitions
    }

    const ALL_STATES: [ScreenState; 4] = [
        ScreenState::TransitionOn,
        ScreenState::Active,
        ScreenState::TransitionOff,
        ScreenState::Hidden,
    ];

    //--- is_active --------------------------------------------------------

    #[test]
    fn focus_elsewhere_is_never_active() {
        let mut transitions = TransitionController::new();
        let mut host = RecordingHost::default();
        let mut core = attached(ScreenCore::new());
        core.update(Duration::ZERO, true, false, &transitions, &mut host);

        for state in ALL_STATES {
            transitions.set_state(state);
            assert!(!core.is_active(&transitions), "{:?}", state);
        }
    }

    #[test]
    fn active_iff_shared_state_accepts_input() {
        let mut transitions = TransitionController::new();
        let mut host = RecordingHost::default();
        let mut core = attached(ScreenCore::new());
        core.update(Duration::ZERO, false, false, &transitions, &mut host);

        for state in ALL_STATES {
            transitions.set_state(state);
            let expected = matches!(state, ScreenState::TransitionOn | ScreenState::Active);
            assert_eq!(core.is_active(&transitions), expected, "{:?}", state);
        }
    }

    #[test]
    fn popup_flag_does_not_affect_activity() {
        let transitions = TransitionController::new();
        let mut host = RecordingHost::default();
        let mut core = attached(ScreenCore::popup());
        core.update(Duration::ZERO, true, true, &transitions, &mut host);

        assert!(core.is_popup());
        assert!(!core.is_active(&transitions));
    }

    //--- exit_screen ------------------------------------------------------

    #[test]
    fn exit_with_zero_off_time_removes_immediately() {
        let transitions = with_off_time(0);
        let mut host = RecordingHost::default();
        let mut core = attached(ScreenCore::new());

        core.exit_screen(&transitions, &mut host);

        assert_eq!(host.removed, vec![ScreenId(7)]);
        assert!(!core.is_exiting());
    }

    #[test]
    fn exit_with_off_time_flags_without_removal() {
        let transitions = with_off_time(100);
        let mut host = RecordingHost::default();
        let mut core = attached(ScreenCore::new());

        core.exit_screen(&transitions, &mut host);

        assert!(core.is_exiting());
        assert!(host.removed.is_empty());
    }

    #[test]
    fn exiting_screen_is_removed_once_ramp_completes() {
        let transitions = with_off_time(500);
        let mut host = RecordingHost::default();
        let mut core = attached(ScreenCore::new());
        core.update(Duration::ZERO, false, false, &transitions, &mut host);
        assert_eq!(core.state(), ScreenState::Active);

        core.exit_screen(&transitions, &mut host);

        core.update(Duration::from_millis(250), false, false, &transitions, &mut host);
        assert_eq!(core.state(), ScreenState::TransitionOff);
        assert!(host.removed.is_empty());

        core.update(Duration::from_millis(250), false, false, &transitions, &mut host);
        assert_eq!(host.removed, vec![ScreenId(7)]);

        // Further frames never request a second removal
        core.update(Duration::from_millis(250), false, false, &transitions, &mut host);
        core.exit_screen(&transitions, &mut host);
        assert_eq!(host.removed.len(), 1);
    }

    #[test]
    fn detached_screen_exit_is_ignored() {
        let transitions = with_off_time(0);
        let mut host = RecordingHost::default();
        let mut core = ScreenCore::new();

        core.exit_screen(&transitions, &mut host);
        assert!(host.removed.is_empty());
    }

    //--- update -----------------------------------------------------------

    #[test]
    fn uncovered_screen_transitions_on_then_active() {
        let mut transitions = TransitionController::new();
        transitions.set_transition_on_time(Duration::from_millis(100));
        let mut host = RecordingHost::default();
        let mut core = attached(ScreenCore::new());

        core.update(Duration::from_millis(40), false, false, &transitions, &mut host);
        assert_eq!(core.state(), ScreenState::TransitionOn);
        assert!(core.transition_alpha() > 0.0);

        core.update(Duration::from_millis(80), false, false, &transitions, &mut host);
        assert_eq!(core.state(), ScreenState::Active);
        assert_eq!(core.transition_alpha(), 1.0);
    }

    #[test]
    fn covered_screen_transitions_off_then_hidden() {
        let transitions = with_off_time(100);
        let mut host = RecordingHost::default();
        let mut core = attached(ScreenCore::new());
        core.update(Duration::ZERO, false, false, &transitions, &mut host);

        core.update(Duration::from_millis(60), false, true, &transitions, &mut host);
        assert_eq!(core.state(), ScreenState::TransitionOff);

        core.update(Duration::from_millis(60), false, true, &transitions, &mut host);
        assert_eq!(core.state(), ScreenState::Hidden);
        assert!(host.removed.is_empty());
    }

    #[test]
    fn update_records_focus() {
        let transitions = TransitionController::new();
        let mut host = RecordingHost::default();
        let mut core = attached(ScreenCore::new());

        core.update(Duration::ZERO, true, false, &transitions, &mut host);
        assert!(core.other_screen_has_focus());
        core.update(Duration::ZERO, false, false, &transitions, &mut host);
        assert!(!core.other_screen_has_focus());
    }

    #[test]
    fn controlling_player_filters_input() {
        let mut core = ScreenCore::new();
        assert!(core.accepts_player(PlayerIndex::Three));

        core.set_controlling_player(Some(PlayerIndex::One));
        assert!(core.accepts_player(PlayerIndex::One));
        assert!(!core.accepts_player(PlayerIndex::Two));
    }
}
