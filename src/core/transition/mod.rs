//=========================================================================
// Transition System
//=========================================================================
//
// Shared transition/fade signal and the per-screen transition clock.
//
// Architecture:
//   TransitionController
//     ├─ state: ScreenState           (activity gate for all screens)
//     ├─ fade colors + fading_out     (overlay read by the renderer)
//     └─ tints: TintCoordinator       (scoped color adjustments)
//
//   TransitionClock                   (one per screen, plus the fade)
//
//=========================================================================

//=== Module Declarations =================================================

mod clock;
mod controller;
mod settings;
mod tint;

//=== Public API ==========================================================

pub use clock::{ScreenState, TransitionClock, TransitionDirection};
pub use controller::TransitionController;
pub use settings::{TransitionSettings, DEFAULT_FADE_TICKS, DEFAULT_TICK_RATE};
pub use tint::{BlendTint, InvertTint, ScreenKind, Tint, TintCoordinator, TintId, TintScope};
