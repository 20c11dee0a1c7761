//=========================================================================
// Core Systems
//
// Screen stack, transition state machine and fade signal.
//
// Responsibilities:
// - Derive each screen's transition phase from its stack position
// - Gate input on focus and on the shared transition state
// - Compose scoped tints into the fade overlay color
//
// Notes:
// Everything here runs on the frame loop thread. Nothing blocks or
// spawns background work; the stack is updated and drawn once per frame.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod color;
pub mod player;
pub mod screen;
pub mod transition;

//=== Public API ==========================================================

pub use color::Color;
pub use player::PlayerIndex;
pub use screen::{Screen, ScreenContext, ScreenCore, ScreenHost, ScreenId, ScreenManager};
pub use transition::{
    ScreenKind, ScreenState, Tint, TintCoordinator, TintScope, TransitionController,
    TransitionSettings,
};
