//=========================================================================
// Screen Context
//=========================================================================
//
// Per-frame view of the stack handed to screen hooks.
//
// Gives screens access to the shared transition controller and lets
// them request stack changes without borrowing the manager itself.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::screen_commands::{ScreenCommand, ScreenCommands};
use super::screen_core::{ScreenCore, ScreenHost, ScreenId};
use super::Screen;
use crate::core::color::Color;
use crate::core::player::PlayerIndex;
use crate::core::transition::{ScreenKind, TransitionController};

//=== ScreenContext =======================================================

/// Context passed to [`Screen::update`] and [`Screen::handle_input`].
pub struct ScreenContext<'a, I> {
    transitions: &'a mut TransitionController,
    commands: &'a mut ScreenCommands<I>,
    top_kind: Option<ScreenKind>,
}

impl<'a, I> ScreenContext<'a, I> {
    pub fn new(
        transitions: &'a mut TransitionController,
        commands: &'a mut ScreenCommands<I>,
        top_kind: Option<ScreenKind>,
    ) -> Self {
        Self {
            transitions,
            commands,
            top_kind,
        }
    }

    pub fn transitions(&self) -> &TransitionController {
        &*self.transitions
    }

    pub fn transitions_mut(&mut self) -> &mut TransitionController {
        &mut *self.transitions
    }

    /// Kind of the screen on top of the stack at the start of the frame.
    pub fn top_kind(&self) -> Option<ScreenKind> {
        self.top_kind
    }

    //--- Stack Requests ---------------------------------------------------

    /// Queues a new screen, locked to `controlling_player` if given.
    pub fn add_screen<S>(&mut self, screen: S, controlling_player: Option<PlayerIndex>)
    where
        S: Screen<I> + 'static,
    {
        self.commands.push(ScreenCommand::Add {
            screen: Box::new(screen),
            controlling_player,
        });
    }

    /// Queues a direct removal, skipping any transition off.
    pub fn remove_screen(&mut self, id: ScreenId) {
        self.commands.remove_screen(id);
    }

    /// Gracefully exits the screen owning `core`.
    pub fn exit_screen(&mut self, core: &mut ScreenCore) {
        core.exit_screen(&*self.transitions, &mut *self.commands);
    }

    //--- Fades ------------------------------------------------------------

    pub fn fade_in(&mut self) {
        self.transitions.fade_in(self.top_kind);
    }

    pub fn fade_out(&mut self) {
        self.transitions.fade_out(self.top_kind);
    }

    pub fn reset_fade(&mut self, color: Color) {
        self.transitions.reset_fade(color);
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn exit_with_zero_off_time_queues_removal() {
        let mut transitions = TransitionController::new();
        let mut commands = ScreenCommands::<()>::new();
        let mut core = ScreenCore::new();
        core.attach(ScreenId(4), None);

        let mut context = ScreenContext::new(&mut transitions, &mut commands, None);
        context.exit_screen(&mut core);

        assert!(matches!(commands.take().as_slice(), [ScreenCommand::Remove(ScreenId(4))]));
    }

    #[test]
    fn exit_with_off_time_only_flags() {
        let mut transitions = TransitionController::new();
        transitions.set_transition_off_time(Duration::from_millis(300));
        let mut commands = ScreenCommands::<()>::new();
        let mut core = ScreenCore::new();
        core.attach(ScreenId(4), None);

        let mut context = ScreenContext::new(&mut transitions, &mut commands, None);
        context.exit_screen(&mut core);

        assert!(core.is_exiting());
        assert!(commands.is_empty());
    }

    #[test]
    fn fades_use_top_kind() {
        let mut transitions = TransitionController::new();
        transitions
            .tints_mut()
            .register_fn(crate::core::transition::TintScope::Gameplay, |c| c.inverted());
        let mut commands = ScreenCommands::<()>::new();

        let mut context =
            ScreenContext::new(&mut transitions, &mut commands, Some(ScreenKind::Gameplay));
        context.fade_out();
        context.reset_fade(Color::WHITE);

        assert_eq!(transitions.fade_color(), Color::WHITE);
        assert_eq!(transitions.fade_to_color(), Color::TRANSPARENT_BLACK);
    }
}
