//! Tile action definitions.
//!
//! A `TileAction` is attached to at most one tile and runs when a player
//! lands there. Actions hold only tile-level data (amounts, destinations);
//! the player is supplied at resolution time.
//!
//! ## Action Categories
//!
//! - **Money**: `Go`, `Tax`, `Chance`, `Chest`
//! - **Deeds**: `Property`, `Railroad`, `Utility`
//! - **Movement**: `GoToJail`, `Ladder`
//! - **Turn order**: `SkipTurn`

use serde::{Deserialize, Serialize};

use crate::core::{BoardError, TileId};

/// Chance card outcomes, each equally likely.
pub const CHANCE_OUTCOMES: [i64; 2] = [150, -75];

/// Community chest outcomes, each equally likely.
pub const CHEST_OUTCOMES: [i64; 2] = [100, -50];

/// Effect attached to a tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileAction {
    /// Credit a salary.
    Go { salary: i64 },

    /// Offer an unowned property or charge rent on an owned one.
    Property,

    /// Offer an unowned railroad or charge tiered rent, clamped to the
    /// payer's balance.
    Railroad,

    /// Offer an unowned utility or charge dice-based rent, clamped to the
    /// payer's balance.
    Utility,

    /// Debit a fixed amount. May leave the balance negative.
    Tax { amount: i64 },

    /// Draw from [`CHANCE_OUTCOMES`].
    Chance,

    /// Draw from [`CHEST_OUTCOMES`].
    Chest,

    /// Send the player to jail without passing the first tile.
    GoToJail { jail: TileId },

    /// Flag the player to sit out their next turn.
    SkipTurn,

    /// Teleport to a fixed tile.
    Ladder { destination: TileId },
}

impl TileAction {
    /// Action name as reported to observers.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TileAction::Go { .. } => "GoAction",
            TileAction::Property => "PropertyAction",
            TileAction::Railroad => "RailroadAction",
            TileAction::Utility => "UtilityAction",
            TileAction::Tax { .. } => "TaxAction",
            TileAction::Chance => "ChanceAction",
            TileAction::Chest => "ChestAction",
            TileAction::GoToJail { .. } => "GoToJailAction",
            TileAction::SkipTurn => "SkipTurnAction",
            TileAction::Ladder { .. } => "LadderAction",
        }
    }

    /// Tile this action relocates the player to, if any.
    #[must_use]
    pub fn target(&self) -> Option<TileId> {
        match self {
            TileAction::GoToJail { jail } => Some(*jail),
            TileAction::Ladder { destination } => Some(*destination),
            _ => None,
        }
    }

    /// Tile kind label this action must be attached to, if it is typed.
    #[must_use]
    pub fn required_kind(&self) -> Option<&'static str> {
        match self {
            TileAction::Property => Some("property"),
            TileAction::Railroad => Some("railroad"),
            TileAction::Utility => Some("utility"),
            _ => None,
        }
    }

    /// Build an action from a layout key.
    ///
    /// `argument` is the salary for `go`, the amount for `tax`, and the
    /// destination tile id for `gotojail` and `ladder`; other keys ignore it.
    /// Keys are matched case-insensitively, with or without an `Action`
    /// suffix (`"Tax"`, `"TaxAction"`).
    ///
    /// ```
    /// use rust_estate::actions::TileAction;
    /// use rust_estate::core::TileId;
    ///
    /// assert_eq!(TileAction::from_key("Tax", 200).unwrap(), TileAction::Tax { amount: 200 });
    /// assert_eq!(
    ///     TileAction::from_key("gotojail", 11).unwrap(),
    ///     TileAction::GoToJail { jail: TileId::new(11) }
    /// );
    /// assert!(TileAction::from_key("teleport", 0).is_err());
    /// ```
    pub fn from_key(key: &str, argument: u32) -> Result<TileAction, BoardError> {
        let lowered = key.to_ascii_lowercase();
        let action = match lowered.strip_suffix("action").unwrap_or(lowered.as_str()) {
            "go" => TileAction::Go { salary: i64::from(argument) },
            "property" => TileAction::Property,
            "railroad" => TileAction::Railroad,
            "utility" => TileAction::Utility,
            "tax" => TileAction::Tax { amount: i64::from(argument) },
            "chance" => TileAction::Chance,
            "chest" => TileAction::Chest,
            "gotojail" => TileAction::GoToJail { jail: TileId::new(argument) },
            "skipturn" => TileAction::SkipTurn,
            "ladder" => TileAction::Ladder { destination: TileId::new(argument) },
            _ => return Err(BoardError::UnknownAction(key.to_string())),
        };
        Ok(action)
    }
}

impl std::fmt::Display for TileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(TileAction::Go { salary: 200 }.name(), "GoAction");
        assert_eq!(TileAction::Property.name(), "PropertyAction");
        assert_eq!(TileAction::Ladder { destination: TileId::new(7) }.to_string(), "LadderAction");
    }

    #[test]
    fn test_targets() {
        assert_eq!(
            TileAction::GoToJail { jail: TileId::new(11) }.target(),
            Some(TileId::new(11))
        );
        assert_eq!(TileAction::Ladder { destination: TileId::new(7) }.target(), Some(TileId::new(7)));
        assert!(TileAction::Chance.target().is_none());
        assert!(TileAction::SkipTurn.target().is_none());
    }

    #[test]
    fn test_required_kind() {
        assert_eq!(TileAction::Railroad.required_kind(), Some("railroad"));
        assert_eq!(TileAction::Tax { amount: 100 }.required_kind(), None);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(TileAction::from_key("GO", 200), Ok(TileAction::Go { salary: 200 }));
        assert_eq!(TileAction::from_key("SkipTurn", 0), Ok(TileAction::SkipTurn));
        assert_eq!(TileAction::from_key("ChestAction", 0), Ok(TileAction::Chest));
        assert_eq!(
            TileAction::from_key("Ladder", 7),
            Ok(TileAction::Ladder { destination: TileId::new(7) })
        );
        assert_eq!(
            TileAction::from_key("auction", 0),
            Err(BoardError::UnknownAction("auction".to_string()))
        );
    }
}
