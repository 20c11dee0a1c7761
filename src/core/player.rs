//=========================================================================
// Player Index
//=========================================================================
//
// Identifies one of the local input sources (controllers/seats).
//
//=========================================================================

/// Local player slot.
///
/// Screens store an `Option<PlayerIndex>` as their controlling player:
/// `None` accepts input from any player, `Some(p)` locks the screen to `p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerIndex {
    One,
    Two,
    Three,
    Four,
}

impl PlayerIndex {
    /// All player slots in order.
    pub const ALL: [PlayerIndex; 4] = [
        PlayerIndex::One,
        PlayerIndex::Two,
        PlayerIndex::Three,
        PlayerIndex::Four,
    ];

    /// Zero-based slot number.
    pub fn index(self) -> usize {
        self as usize
    }
}
