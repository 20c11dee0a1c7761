//=========================================================================
// Screen Manager
//=========================================================================
//
// Owns the screen stack and drives the per-frame update and draw passes.
//
// Update pass (top of stack first):
//   1. advance the shared TransitionController
//   2. for each screen: ScreenCore::update(focus, covered)
//                       → handle_input() if active → Screen::update()
//   3. first screen in TransitionOn/Active takes focus from those below,
//      every non-popup screen covers those below it
//   4. apply queued commands (adds, removals) in FIFO order
//
// Draw pass runs bottom-up and skips hidden screens.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::screen_commands::{ScreenCommand, ScreenCommands};
use super::screen_context::ScreenContext;
use super::screen_core::ScreenId;
use super::Screen;
use crate::core::color::Color;
use crate::core::player::PlayerIndex;
use crate::core::transition::{ScreenKind, ScreenState, TransitionController};

//=== Screen Manager ======================================================

/// Stack of screens with shared transition state.
///
/// `I` is the input snapshot type handed to [`Screen::handle_input`].
///
/// # Example
///
/// ```rust
/// # use std::time::Duration;
/// # use aetheric_screens::prelude::*;
/// struct Title {
///     core: ScreenCore,
/// }
///
/// impl Screen<()> for Title {
///     fn core(&self) -> &ScreenCore { &self.core }
///     fn core_mut(&mut self) -> &mut ScreenCore { &mut self.core }
///     fn kind(&self) -> ScreenKind { ScreenKind::Menu }
/// }
///
/// let mut manager = ScreenManager::new();
/// let title = manager.add_screen(Title { core: ScreenCore::new() }, None);
///
/// manager.update(Duration::from_millis(16), &());
/// manager.draw(Duration::from_millis(16));
///
/// assert_eq!(manager.top_kind(), Some(ScreenKind::Menu));
/// manager.exit_screen(title);
/// assert!(manager.is_empty());
/// ```
pub struct ScreenManager<I> {
    screens: Vec<Box<dyn Screen<I>>>,
    transitions: TransitionController,
    commands: ScreenCommands<I>,
    next_id: u64,
    window_focused: bool,
}

impl<I> ScreenManager<I> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty stack with a default transition controller.
    pub fn new() -> Self {
        Self::with_transitions(TransitionController::new())
    }

    /// Creates an empty stack driven by `transitions`.
    pub fn with_transitions(transitions: TransitionController) -> Self {
        Self {
            screens: Vec::new(),
            transitions,
            commands: ScreenCommands::new(),
            next_id: 0,
            window_focused: true,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn transitions(&self) -> &TransitionController {
        &self.transitions
    }

    pub fn transitions_mut(&mut self) -> &mut TransitionController {
        &mut self.transitions
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: ScreenId) -> Option<&dyn Screen<I>> {
        self.position(id).map(|pos| self.screens[pos].as_ref())
    }

    /// Screens from bottom to top.
    pub fn screens(&self) -> impl Iterator<Item = &dyn Screen<I>> {
        self.screens.iter().map(|screen| screen.as_ref())
    }

    /// Kind of the screen on top of the stack.
    pub fn top_kind(&self) -> Option<ScreenKind> {
        self.screens.last().map(|screen| screen.kind())
    }

    /// Whether the application window has focus. An unfocused window
    /// withholds input from every screen.
    pub fn is_window_focused(&self) -> bool {
        self.window_focused
    }

    pub fn set_window_focused(&mut self, focused: bool) {
        self.window_focused = focused;
    }

    //--- Stack Operations -------------------------------------------------

    /// Pushes a screen on top of the stack and loads its content.
    ///
    /// `controlling_player` locks the screen to one player; `None` accepts
    /// input from anyone.
    pub fn add_screen<S>(&mut self, screen: S, controlling_player: Option<PlayerIndex>) -> ScreenId
    where
        S: Screen<I> + 'static,
    {
        self.add_boxed(Box::new(screen), controlling_player)
    }

    /// Pushes an already boxed screen.
    pub fn add_boxed(
        &mut self,
        mut screen: Box<dyn Screen<I>>,
        controlling_player: Option<PlayerIndex>,
    ) -> ScreenId {
        let id = ScreenId(self.next_id);
        self.next_id += 1;

        screen.core_mut().attach(id, controlling_player);
        screen.load_content();

        debug!("Pushing screen {} as {:?}", screen.name(), id);
        self.screens.push(screen);
        id
    }

    /// Removes a screen immediately, bypassing its transition off.
    ///
    /// Prefer [`ScreenManager::exit_screen`] to close a screen gracefully.
    pub fn remove_screen(&mut self, id: ScreenId) {
        let Some(pos) = self.position(id) else {
            debug!("Screen {:?} not found in stack, skipping removal", id);
            return;
        };

        let mut screen = self.screens.remove(pos);
        debug!("Removing screen {} ({:?}) at position {}", screen.name(), id, pos);
        screen.unload_content();
    }

    /// Gracefully exits a screen.
    ///
    /// Removal happens now if the transition-off time is zero, otherwise
    /// once the screen's transition off completes.
    pub fn exit_screen(&mut self, id: ScreenId) {
        let Some(pos) = self.position(id) else {
            warn!("Screen {:?} not found in stack, cannot exit", id);
            return;
        };

        self.screens[pos]
            .core_mut()
            .exit_screen(&self.transitions, &mut self.commands);
        self.apply_commands();
    }

    /// Removes every screen, unloading each from the top down.
    pub fn clear(&mut self) {
        debug!("Clearing all screens from stack");

        while let Some(mut screen) = self.screens.pop() {
            screen.unload_content();
        }
        self.commands.clear();
    }

    //--- Fades ------------------------------------------------------------

    /// Fades out using the tints that match the top of the stack.
    pub fn fade_out(&mut self) {
        let top = self.top_kind();
        self.transitions.fade_out(top);
    }

    /// Fades in using the tints that match the top of the stack.
    pub fn fade_in(&mut self) {
        let top = self.top_kind();
        self.transitions.fade_in(top);
    }

    pub fn reset_fade(&mut self, color: Color) {
        self.transitions.reset_fade(color);
    }

    //--- Frame Loop -------------------------------------------------------

    /// Runs the update pass for every screen on the stack.
    pub fn update(&mut self, elapsed: Duration, input: &I) {
        self.transitions.update(elapsed);

        let top_kind = self.top_kind();
        let mut other_screen_has_focus = !self.window_focused;
        let mut covered_by_other_screen = false;

        for screen in self.screens.iter_mut().rev() {
            screen.core_mut().update(
                elapsed,
                other_screen_has_focus,
                covered_by_other_screen,
                &self.transitions,
                &mut self.commands,
            );

            let mut context =
                ScreenContext::new(&mut self.transitions, &mut self.commands, top_kind);

            if screen.core().is_active(context.transitions()) {
                screen.handle_input(input, &mut context);
            }
            screen.update(elapsed, &mut context);

            let core = screen.core();
            if core.state().accepts_input() {
                other_screen_has_focus = true;

                if !core.is_popup() {
                    covered_by_other_screen = true;
                }
            }
        }

        self.apply_commands();
    }

    /// Runs the draw pass bottom-up, skipping hidden screens.
    pub fn draw(&mut self, elapsed: Duration) {
        for screen in self.screens.iter_mut() {
            if screen.core().state() == ScreenState::Hidden {
                continue;
            }

            screen.draw(elapsed, &self.transitions);
        }
    }

    /// Logs the current stack at debug level.
    pub fn trace_screens(&self) {
        let names: Vec<&str> = self.screens.iter().map(|screen| screen.name()).collect();
        debug!("Screen stack (bottom to top): [{}]", names.join(", "));
    }

    //--- Internal Helpers -------------------------------------------------

    fn position(&self, id: ScreenId) -> Option<usize> {
        self.screens
            .iter()
            .position(|screen| screen.core().id() == Some(id))
    }

    fn apply_commands(&mut self) {
        for command in self.commands.take() {
            match command {
                ScreenCommand::Add {
                    screen,
                    controlling_player,
                } => {
                    self.add_boxed(screen, controlling_player);
                }
                ScreenCommand::Remove(id) => self.remove_screen(id),
            }
        }
    }
}

impl<I> Default for ScreenManager<I> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
