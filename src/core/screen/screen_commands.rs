//=========================================================================
// Screen Commands
//=========================================================================
//
// Queue of stack changes requested while the stack is being walked.
//
// Screens queue additions and removals here during update and input
// handling. The screen manager applies the queue at the end of the
// update pass, in FIFO order.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::screen_core::{ScreenHost, ScreenId};
use super::Screen;
use crate::core::player::PlayerIndex;

//=== Screen Command ======================================================

/// A deferred stack operation.
pub enum ScreenCommand<I> {
    /// Pushes a screen on top of the stack.
    Add {
        screen: Box<dyn Screen<I>>,
        controlling_player: Option<PlayerIndex>,
    },

    /// Removes a screen from the stack by id.
    Remove(ScreenId),
}

impl<I> std::fmt::Debug for ScreenCommand<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenCommand::Add {
                screen,
                controlling_player,
            } => f
                .debug_struct("Add")
                .field("screen", &screen.name())
                .field("controlling_player", controlling_player)
                .finish(),
            ScreenCommand::Remove(id) => f.debug_tuple("Remove").field(id).finish(),
        }
    }
}

//=== Screen Commands =====================================================

/// FIFO queue of [`ScreenCommand`]s.
pub struct ScreenCommands<I> {
    queue: Vec<ScreenCommand<I>>,
}

impl<I> ScreenCommands<I> {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a command to be applied at the end of the update pass.
    pub fn push(&mut self, command: ScreenCommand<I>) {
        self.queue.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all commands from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<ScreenCommand<I>> {
        std::mem::take(&mut self.queue)
    }
}

impl<I> ScreenHost for ScreenCommands<I> {
    fn remove_screen(&mut self, id: ScreenId) {
        self.push(ScreenCommand::Remove(id));
    }
}

impl<I> Default for ScreenCommands<I> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::ScreenCore;

    struct Blank {
        core: ScreenCore,
    }

    impl Screen<()> for Blank {
        fn core(&self) -> &ScreenCore {
            &self.core
        }

        fn core_mut(&mut self) -> &mut ScreenCore {
            &mut self.core
        }
    }

    #[test]
    fn host_removal_is_queued() {
        let mut commands = ScreenCommands::<()>::new();
        commands.remove_screen(ScreenId(3));

        assert!(matches!(commands.take().as_slice(), [ScreenCommand::Remove(ScreenId(3))]));
    }

    #[test]
    fn take_preserves_order_and_empties() {
        let mut commands = ScreenCommands::<()>::new();
        commands.push(ScreenCommand::Add {
            screen: Box::new(Blank { core: ScreenCore::new() }),
            controlling_player: Some(PlayerIndex::Two),
        });
        commands.remove_screen(ScreenId(1));

        let taken = commands.take();
        assert!(commands.is_empty());
        assert_eq!(taken.len(), 2);
        assert!(matches!(
            taken[0],
            ScreenCommand::Add {
                controlling_player: Some(PlayerIndex::Two),
                ..
            }
        ));
        assert!(matches!(taken[1], ScreenCommand::Remove(ScreenId(1))));
    }

    #[test]
    fn debug_names_the_screen() {
        let command = ScreenCommand::<()>::Add {
            screen: Box::new(Blank { core: ScreenCore::new() }),
            controlling_player: None,
        };

        assert!(format!("{:?}", command).contains("Blank"));
    }
}
