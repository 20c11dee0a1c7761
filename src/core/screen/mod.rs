//=========================================================================
// Screen System
//=========================================================================
//
// Screen contract, per-screen state machine and the owning stack.
//
// Architecture:
//   ScreenManager<I>
//     ├─ screens: Vec<Box<dyn Screen<I>>>   (bottom → top)
//     ├─ transitions: TransitionController
//     └─ commands: ScreenCommands<I>        (applied after each pass)
//
// Flow:
//   update() → ScreenCore::update() → Screen::handle_input() → Screen::update()
//   draw()   → Screen::draw()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Module Declarations =================================================

mod screen_commands;
mod screen_context;
mod screen_core;
mod screen_manager;

//=== Public API ==========================================================

pub use screen_commands::{ScreenCommand, ScreenCommands};
pub use screen_context::ScreenContext;
pub use screen_core::{ScreenCore, ScreenHost, ScreenId};
pub use screen_manager::ScreenManager;

//=== Internal Dependencies ===============================================

use crate::core::transition::{ScreenKind, TransitionController};

//=== Screen Trait ========================================================

/// A single UI layer on the screen stack.
///
/// Implementors embed a [`ScreenCore`] and return it from `core()` /
/// `core_mut()`. The manager drives the core's state machine; every other
/// hook has an empty default.
///
/// `I` is the input snapshot type passed to [`Screen::handle_input`].
///
/// # Minimal Implementation
///
/// ```rust
/// # use aetheric_screens::prelude::*;
/// struct PauseMenu {
///     core: ScreenCore,
/// }
///
/// impl PauseMenu {
///     fn new() -> Self {
///         Self { core: ScreenCore::popup() }
///     }
/// }
///
/// impl Screen<()> for PauseMenu {
///     fn core(&self) -> &ScreenCore {
///         &self.core
///     }
///
///     fn core_mut(&mut self) -> &mut ScreenCore {
///         &mut self.core
///     }
/// }
/// ```
pub trait Screen<I>: Send {
    fn core(&self) -> &ScreenCore;

    fn core_mut(&mut self) -> &mut ScreenCore;

    /// Category used to filter fade tints while this screen is on top.
    fn kind(&self) -> ScreenKind {
        ScreenKind::Other
    }

    /// Name used in log output.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Called once when the screen is added to a stack.
    fn load_content(&mut self) {}

    /// Called once when the screen leaves the stack.
    fn unload_content(&mut self) {}

    /// Called every frame after the core has advanced its transition,
    /// whether or not the screen is visible.
    fn update(&mut self, _elapsed: Duration, _context: &mut ScreenContext<'_, I>) {}

    /// Called only while the screen is active.
    fn handle_input(&mut self, _input: &I, _context: &mut ScreenContext<'_, I>) {}

    /// Called every frame unless the screen is hidden.
    fn draw(&mut self, _elapsed: Duration, _transitions: &TransitionController) {}
}
