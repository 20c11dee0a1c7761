//=========================================================================
// Tint Coordinator
//=========================================================================
//
// Ordered registry of color-tint effects applied to fade colors.
//
// Architecture:
//   TintCoordinator
//     └─ tints: Vec<(TintId, Box<dyn Tint>)>   (registration order)
//
// Flow:
//   compose(base, top_kind) → for each applicable tint: color = adjust(color)
//
// A tint applies when its scope is Global, or when its scope matches the
// kind of the screen currently on top of the stack.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::color::Color;

//=== Scopes & Kinds ======================================================

/// Screen-type category a tint is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TintScope {
    /// Always applies (e.g. a day/night overlay).
    Global,

    /// Applies only while a gameplay screen is on top.
    Gameplay,

    /// Applies only while a menu screen is on top.
    Menu,
}

/// Broad category of a screen, used to filter tints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenKind {
    Gameplay,
    Menu,
    #[default]
    Other,
}

impl TintScope {
    /// Whether a tint with this scope applies given the top-of-stack kind.
    pub fn applies_to(self, top: Option<ScreenKind>) -> bool {
        match self {
            TintScope::Global => true,
            TintScope::Gameplay => top == Some(ScreenKind::Gameplay),
            TintScope::Menu => top == Some(ScreenKind::Menu),
        }
    }
}

//=== Tint Trait ==========================================================

/// A color adjustment bound to a [`TintScope`].
///
/// ```rust
/// # use aetheric_screens::prelude::*;
/// struct Sepia;
///
/// impl Tint for Sepia {
///     fn scope(&self) -> TintScope {
///         TintScope::Gameplay
///     }
///
///     fn adjust(&self, color: Color) -> Color {
///         color.lerp(Color::rgb(112, 66, 20), 0.3)
///     }
/// }
/// ```
pub trait Tint: Send {
    /// Scope that decides when this tint is applied.
    fn scope(&self) -> TintScope;

    /// Returns the adjusted color.
    fn adjust(&self, color: Color) -> Color;
}

/// Inverts RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertTint {
    pub scope: TintScope,
}

impl Tint for InvertTint {
    fn scope(&self) -> TintScope {
        self.scope
    }

    fn adjust(&self, color: Color) -> Color {
        color.inverted()
    }
}

/// Blends toward a fixed color by `amount` (`0.0..=1.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendTint {
    pub scope: TintScope,
    pub color: Color,
    pub amount: f32,
}

impl Tint for BlendTint {
    fn scope(&self) -> TintScope {
        self.scope
    }

    fn adjust(&self, color: Color) -> Color {
        color.lerp(self.color, self.amount)
    }
}

struct FnTint<F> {
    scope: TintScope,
    adjust: F,
}

impl<F> Tint for FnTint<F>
where
    F: Fn(Color) -> Color + Send,
{
    fn scope(&self) -> TintScope {
        self.scope
    }

    fn adjust(&self, color: Color) -> Color {
        (self.adjust)(color)
    }
}

//=== Tint Coordinator ====================================================

/// Handle returned by [`TintCoordinator::register`], used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TintId(u64);

/// Ordered collection of tints, composed in registration order.
#[derive(Default)]
pub struct TintCoordinator {
    tints: Vec<(TintId, Box<dyn Tint>)>,
    next_id: u64,
}

impl TintCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Appends a tint. Later tints compose on top of earlier ones.
    pub fn register<T>(&mut self, tint: T) -> TintId
    where
        T: Tint + 'static,
    {
        let id = TintId(self.next_id);
        self.next_id += 1;

        debug!("Registering {:?} tint as {:?}", tint.scope(), id);
        self.tints.push((id, Box::new(tint)));
        id
    }

    /// Appends a tint backed by a closure.
    pub fn register_fn<F>(&mut self, scope: TintScope, adjust: F) -> TintId
    where
        F: Fn(Color) -> Color + Send + 'static,
    {
        self.register(FnTint { scope, adjust })
    }

    /// Removes a tint. Returns `false` if the id is unknown.
    pub fn remove(&mut self, id: TintId) -> bool {
        let Some(pos) = self.tints.iter().position(|(tint_id, _)| *tint_id == id) else {
            debug!("Tint {:?} not registered, skipping removal", id);
            return false;
        };

        self.tints.remove(pos);
        true
    }

    /// Removes every tint.
    pub fn clear(&mut self) {
        self.tints.clear();
    }

    pub fn len(&self) -> usize {
        self.tints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tints.is_empty()
    }

    //--- Composition ------------------------------------------------------

    /// Applies every tint whose scope matches `top`, in registration order.
    pub fn compose(&self, base: Color, top: Option<ScreenKind>) -> Color {
        self.tints
            .iter()
            .filter(|(_, tint)| tint.scope().applies_to(top))
            .fold(base, |color, (_, tint)| tint.adjust(color))
    }
}

impl std::fmt::Debug for TintCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TintCoordinator")
            .field("len", &self.tints.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn red(_: Color) -> Color {
        Color::rgb(255, 0, 0)
    }

    #[test]
    fn empty_coordinator_returns_base() {
        let tints = TintCoordinator::new();
        assert_eq!(tints.compose(Color::BLACK, None), Color::BLACK);
    }

    #[test]
    fn global_tint_applies_regardless_of_top() {
        let mut tints = TintCoordinator::new();
        tints.register(InvertTint { scope: TintScope::Global });

        for top in [None, Some(ScreenKind::Menu), Some(ScreenKind::Gameplay), Some(ScreenKind::Other)] {
            assert_eq!(tints.compose(Color::BLACK, top), Color::WHITE);
        }
    }

    #[test]
    fn scoped_tints_follow_top_of_stack() {
        let mut tints = TintCoordinator::new();
        tints.register_fn(TintScope::Gameplay, red);
        tints.register_fn(TintScope::Menu, |c| c.with_alpha(7));

        assert_eq!(
            tints.compose(Color::BLACK, Some(ScreenKind::Gameplay)),
            Color::rgb(255, 0, 0)
        );
        assert_eq!(
            tints.compose(Color::BLACK, Some(ScreenKind::Menu)),
            Color::new(0, 0, 0, 7)
        );
        assert_eq!(tints.compose(Color::BLACK, Some(ScreenKind::Other)), Color::BLACK);
        assert_eq!(tints.compose(Color::BLACK, None), Color::BLACK);
    }

    #[test]
    fn later_tints_compose_on_earlier_ones() {
        let mut tints = TintCoordinator::new();
        tints.register_fn(TintScope::Global, red);
        tints.register(InvertTint { scope: TintScope::Global });

        assert_eq!(tints.compose(Color::BLACK, None), Color::rgb(0, 255, 255));
    }

    #[test]
    fn more_than_three_tints_are_supported() {
        let mut tints = TintCoordinator::new();
        for _ in 0..5 {
            tints.register(InvertTint { scope: TintScope::Global });
        }

        assert_eq!(tints.len(), 5);
        assert_eq!(tints.compose(Color::BLACK, None), Color::WHITE);
    }

    #[test]
    fn remove_by_id() {
        let mut tints = TintCoordinator::new();
        let first = tints.register(InvertTint { scope: TintScope::Global });
        tints.register(BlendTint {
            scope: TintScope::Global,
            color: Color::WHITE,
            amount: 1.0,
        });

        assert!(tints.remove(first));
        assert!(!tints.remove(first));
        assert_eq!(tints.len(), 1);
        assert_eq!(tints.compose(Color::BLACK, None), Color::WHITE);

        tints.clear();
        assert!(tints.is_empty());
    }
}
