//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_screens::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Values
pub use crate::core::color::Color;
pub use crate::core::player::PlayerIndex;

// Screen system
pub use crate::core::screen::{
    Screen, ScreenCommand, ScreenCommands, ScreenContext, ScreenCore, ScreenHost, ScreenId,
    ScreenManager,
};

// Transition system
pub use crate::core::transition::{
    BlendTint, InvertTint, ScreenKind, ScreenState, Tint, TintCoordinator, TintId, TintScope,
    TransitionClock, TransitionController, TransitionDirection, TransitionSettings,
};
