//=========================================================================
// Aetheric Screens — Library Root
//
// This crate manages a stack of overlapping UI screens (menus, popups,
// the gameplay view) inside a per-frame update/draw loop.
//
// Responsibilities:
// - Expose the screen contract (`Screen`, `ScreenCore`)
// - Derive transition phase and input focus for every screen each frame
// - Own the shared fade/tint signal (`TransitionController`)
//
// Typical usage:
// ```no_run
// use std::time::Duration;
// use aetheric_screens::prelude::*;
//
// # struct Gameplay { core: ScreenCore }
// # impl Screen<()> for Gameplay {
// #     fn core(&self) -> &ScreenCore { &self.core }
// #     fn core_mut(&mut self) -> &mut ScreenCore { &mut self.core }
// # }
// let mut screens = ScreenManager::new();
// screens.add_screen(Gameplay { core: ScreenCore::new() }, None);
//
// loop {
//     screens.update(Duration::from_millis(16), &());
//     screens.draw(Duration::from_millis(16));
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the screen stack, transition clock, fade controller
// and tint registry.
//
pub mod core;

// `prelude` re-exports the types most frame loops need.
//
pub mod prelude;
