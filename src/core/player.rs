//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Stable player identifier. Ids are handed out in join order and never
//! reused, so they stay valid when a bankrupt player leaves the rotation.
//!
//! ## Player
//!
//! Mutable per-participant state: position, balance, jail status and the
//! list of owned assets. The only computed behavior is monopoly detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::{PropertyColor, TileId};

/// Balance every player starts with unless configured otherwise.
pub const STARTING_BALANCE: i64 = 1500;

/// Player identifier.
///
/// Ids are 0-based in join order: the first player added is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based, join order).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// What kind of asset a player holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Property(Option<PropertyColor>),
    Railroad,
    Utility,
}

/// One owned tile, with enough kind information to answer monopoly and
/// rent-tier questions without consulting the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnedAsset {
    pub tile: TileId,
    pub kind: AssetKind,
}

/// A participant in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    token: String,
    current_tile: Option<TileId>,
    balance: i64,
    skip_next_turn: bool,
    in_jail: bool,
    jail_turns: u32,
    owned: SmallVec<[OwnedAsset; 8]>,
}

impl Player {
    /// Create a player with the default starting balance.
    pub fn new(id: PlayerId, name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            token: token.into(),
            current_tile: None,
            balance: STARTING_BALANCE,
            skip_next_turn: false,
            in_jail: false,
            jail_turns: 0,
            owned: SmallVec::new(),
        }
    }

    /// Override the starting balance (builder pattern).
    #[must_use]
    pub fn with_balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    // === Position ===

    /// Tile the player stands on; `None` before placement.
    #[must_use]
    pub fn current_tile(&self) -> Option<TileId> {
        self.current_tile
    }

    pub fn set_current_tile(&mut self, tile: TileId) {
        self.current_tile = Some(tile);
    }

    // === Money ===

    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Add `delta` to the balance. No floor; a negative balance is how
    /// bankruptcy is detected.
    pub fn adjust_balance(&mut self, delta: i64) {
        self.balance += delta;
    }

    // === Turn eligibility ===

    #[must_use]
    pub fn skip_next_turn(&self) -> bool {
        self.skip_next_turn
    }

    pub fn set_skip_next_turn(&mut self, skip: bool) {
        self.skip_next_turn = skip;
    }

    // === Jail ===

    #[must_use]
    pub fn in_jail(&self) -> bool {
        self.in_jail
    }

    #[must_use]
    pub fn jail_turns(&self) -> u32 {
        self.jail_turns
    }

    /// Enter jail. The jailed-turn counter restarts at 0.
    pub fn go_to_jail(&mut self) {
        self.in_jail = true;
        self.jail_turns = 0;
    }

    /// Leave jail and reset the counter.
    pub fn release_from_jail(&mut self) {
        self.in_jail = false;
        self.jail_turns = 0;
    }

    pub fn increment_jail_turns(&mut self) {
        self.jail_turns += 1;
    }

    // === Assets ===

    /// Record ownership of a tile. Adding the same tile twice is a no-op.
    pub fn add_owned(&mut self, asset: OwnedAsset) {
        if !self.owns(asset.tile) {
            self.owned.push(asset);
        }
    }

    /// Drop every owned asset, returning what was held.
    pub fn clear_owned(&mut self) -> Vec<OwnedAsset> {
        self.owned.drain(..).collect()
    }

    /// Does this player own the given tile?
    #[must_use]
    pub fn owns(&self, tile: TileId) -> bool {
        self.owned.iter().any(|a| a.tile == tile)
    }

    /// All owned assets in acquisition order.
    #[must_use]
    pub fn owned(&self) -> &[OwnedAsset] {
        &self.owned
    }

    /// Owned property tiles.
    pub fn properties(&self) -> impl Iterator<Item = TileId> + '_ {
        self.owned
            .iter()
            .filter(|a| matches!(a.kind, AssetKind::Property(_)))
            .map(|a| a.tile)
    }

    /// Owned railroad tiles.
    pub fn railroads(&self) -> impl Iterator<Item = TileId> + '_ {
        self.owned
            .iter()
            .filter(|a| a.kind == AssetKind::Railroad)
            .map(|a| a.tile)
    }

    /// Owned utility tiles.
    pub fn utilities(&self) -> impl Iterator<Item = TileId> + '_ {
        self.owned
            .iter()
            .filter(|a| a.kind == AssetKind::Utility)
            .map(|a| a.tile)
    }

    #[must_use]
    pub fn railroad_count(&self) -> usize {
        self.railroads().count()
    }

    #[must_use]
    pub fn utility_count(&self) -> usize {
        self.utilities().count()
    }

    /// Number of owned properties in a color group.
    #[must_use]
    pub fn properties_in(&self, color: PropertyColor) -> usize {
        self.owned
            .iter()
            .filter(|a| a.kind == AssetKind::Property(Some(color)))
            .count()
    }

    /// Does this player own every property of the color group?
    ///
    /// Always false for an absent color.
    #[must_use]
    pub fn has_monopoly(&self, color: Option<PropertyColor>) -> bool {
        match color {
            Some(color) => self.properties_in(color) == color.group_size(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(id: u32, color: PropertyColor) -> OwnedAsset {
        OwnedAsset {
            tile: TileId::new(id),
            kind: AssetKind::Property(Some(color)),
        }
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(PlayerId::new(0), "TestPlayer", "car");

        assert_eq!(player.name(), "TestPlayer");
        assert_eq!(player.token(), "car");
        assert_eq!(player.balance(), 1500);
        assert!(player.current_tile().is_none());
        assert!(!player.skip_next_turn());
        assert!(!player.in_jail());
        assert!(player.owned().is_empty());
    }

    #[test]
    fn test_empty_token() {
        let player = Player::new(PlayerId::new(0), "OldStyle", "");
        assert_eq!(player.token(), "");
    }

    #[test]
    fn test_balance_can_go_negative() {
        let mut player = Player::new(PlayerId::new(0), "A", "");

        player.adjust_balance(200);
        assert_eq!(player.balance(), 1700);

        player.adjust_balance(-1800);
        assert_eq!(player.balance(), -100);
    }

    #[test]
    fn test_jail_counter_resets() {
        let mut player = Player::new(PlayerId::new(0), "A", "");

        player.go_to_jail();
        assert!(player.in_jail());
        assert_eq!(player.jail_turns(), 0);

        player.increment_jail_turns();
        player.increment_jail_turns();
        assert_eq!(player.jail_turns(), 2);

        player.release_from_jail();
        assert!(!player.in_jail());
        assert_eq!(player.jail_turns(), 0);
    }

    #[test]
    fn test_owned_projections() {
        let mut player = Player::new(PlayerId::new(0), "A", "");

        player.add_owned(property(2, PropertyColor::Brown));
        player.add_owned(property(4, PropertyColor::Brown));
        player.add_owned(OwnedAsset { tile: TileId::new(6), kind: AssetKind::Railroad });
        player.add_owned(OwnedAsset { tile: TileId::new(13), kind: AssetKind::Utility });

        assert_eq!(player.properties().collect::<Vec<_>>(), vec![TileId::new(2), TileId::new(4)]);
        assert_eq!(player.railroads().collect::<Vec<_>>(), vec![TileId::new(6)]);
        assert_eq!(player.utilities().collect::<Vec<_>>(), vec![TileId::new(13)]);
        assert_eq!(player.railroad_count(), 1);
        assert_eq!(player.utility_count(), 1);
    }

    #[test]
    fn test_add_owned_is_idempotent() {
        let mut player = Player::new(PlayerId::new(0), "A", "");
        player.add_owned(property(2, PropertyColor::Brown));
        player.add_owned(property(2, PropertyColor::Brown));
        assert_eq!(player.owned().len(), 1);
    }

    #[test]
    fn test_clear_owned() {
        let mut player = Player::new(PlayerId::new(0), "A", "");
        player.add_owned(property(2, PropertyColor::Brown));
        player.add_owned(OwnedAsset { tile: TileId::new(6), kind: AssetKind::Railroad });

        let released = player.clear_owned();

        assert_eq!(released.len(), 2);
        assert!(player.owned().is_empty());
        assert_eq!(player.railroad_count(), 0);
    }

    #[test]
    fn test_has_monopoly() {
        let mut player = Player::new(PlayerId::new(0), "A", "");

        assert!(!player.has_monopoly(Some(PropertyColor::Brown)));
        assert!(!player.has_monopoly(None));

        player.add_owned(property(2, PropertyColor::Brown));
        assert!(!player.has_monopoly(Some(PropertyColor::Brown)));

        player.add_owned(property(4, PropertyColor::Brown));
        assert!(player.has_monopoly(Some(PropertyColor::Brown)));

        player.add_owned(property(38, PropertyColor::DarkBlue));
        assert!(!player.has_monopoly(Some(PropertyColor::DarkBlue)));
    }

    #[test]
    fn test_uncolored_property_never_counts() {
        let mut player = Player::new(PlayerId::new(0), "A", "");
        player.add_owned(OwnedAsset { tile: TileId::new(2), kind: AssetKind::Property(None) });
        player.add_owned(OwnedAsset { tile: TileId::new(3), kind: AssetKind::Property(None) });

        assert!(!player.has_monopoly(None));
        assert!(!player.has_monopoly(Some(PropertyColor::Brown)));
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId::new(1), "Bob", "hat");
        player.add_owned(property(2, PropertyColor::Brown));

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
