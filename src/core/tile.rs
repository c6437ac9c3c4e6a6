//! Tile model: one space on the board.
//!
//! ## TileId
//!
//! Stable, unique, positive identifier assigned by whoever builds the board.
//!
//! ## TileKind
//!
//! The economic shape of a tile. Only `Property`, `Railroad` and `Utility`
//! tiles can be owned; everything else is scenery with an optional action.
//!
//! Ownership, houses and hotels are *not* stored here. The board topology is
//! fixed once play starts, so mutable per-tile state lives in
//! [`Deeds`](crate::board::Deeds), owned by the engine and keyed by `TileId`.

use serde::{Deserialize, Serialize};

use crate::actions::TileAction;

/// Tile identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile {}", self.0)
    }
}

/// Property color groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyColor {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
}

impl PropertyColor {
    /// All color groups in board order.
    pub const ALL: [PropertyColor; 8] = [
        PropertyColor::Brown,
        PropertyColor::LightBlue,
        PropertyColor::Pink,
        PropertyColor::Orange,
        PropertyColor::Red,
        PropertyColor::Yellow,
        PropertyColor::Green,
        PropertyColor::DarkBlue,
    ];

    /// Number of properties in this color group.
    ///
    /// The two corner groups have two properties, every other group three.
    #[must_use]
    pub const fn group_size(self) -> usize {
        match self {
            PropertyColor::Brown | PropertyColor::DarkBlue => 2,
            _ => 3,
        }
    }
}

/// Economic attributes of a tile, by variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Unnamed tile, displayed as "Tile {id}".
    Plain,

    /// Named scenery tile (GO, Jail, Free Parking, ...).
    Named { name: String },

    /// Purchasable street with a color group and buildings.
    Property {
        name: String,
        color: Option<PropertyColor>,
        price: i64,
        base_rent: i64,
        house_price: i64,
    },

    /// Railroad; rent depends on how many railroads the owner holds.
    Railroad { name: String, price: i64 },

    /// Utility; rent depends on the last dice total.
    Utility { name: String, price: i64 },
}

impl TileKind {
    /// Can this kind of tile be owned by a player?
    #[must_use]
    pub fn is_ownable(&self) -> bool {
        matches!(
            self,
            TileKind::Property { .. } | TileKind::Railroad { .. } | TileKind::Utility { .. }
        )
    }

    /// Short label used in error messages.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TileKind::Plain => "plain",
            TileKind::Named { .. } => "named",
            TileKind::Property { .. } => "property",
            TileKind::Railroad { .. } => "railroad",
            TileKind::Utility { .. } => "utility",
        }
    }
}

/// A single board space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    next: Option<TileId>,
    action: Option<TileAction>,
    kind: TileKind,
}

impl Tile {
    /// Create a plain tile.
    #[must_use]
    pub fn new(id: TileId) -> Self {
        Self::with_kind(id, TileKind::Plain)
    }

    /// Create a tile of the given kind.
    #[must_use]
    pub fn with_kind(id: TileId, kind: TileKind) -> Self {
        Self {
            id,
            next: None,
            action: None,
            kind,
        }
    }

    /// Create a named scenery tile.
    #[must_use]
    pub fn named(id: TileId, name: impl Into<String>) -> Self {
        Self::with_kind(id, TileKind::Named { name: name.into() })
    }

    /// Create a property tile.
    #[must_use]
    pub fn property(
        id: TileId,
        name: impl Into<String>,
        color: Option<PropertyColor>,
        price: i64,
        base_rent: i64,
        house_price: i64,
    ) -> Self {
        Self::with_kind(
            id,
            TileKind::Property {
                name: name.into(),
                color,
                price,
                base_rent,
                house_price,
            },
        )
    }

    /// Create a railroad tile.
    #[must_use]
    pub fn railroad(id: TileId, name: impl Into<String>, price: i64) -> Self {
        Self::with_kind(id, TileKind::Railroad { name: name.into(), price })
    }

    /// Create a utility tile.
    #[must_use]
    pub fn utility(id: TileId, name: impl Into<String>, price: i64) -> Self {
        Self::with_kind(id, TileKind::Utility { name: name.into(), price })
    }

    /// Set the successor (builder pattern).
    #[must_use]
    pub fn with_next(mut self, next: TileId) -> Self {
        self.next = Some(next);
        self
    }

    /// Attach an action (builder pattern).
    ///
    /// No type check happens here; [`Board::attach_action`](crate::board::Board::attach_action)
    /// is the checked path.
    #[must_use]
    pub fn with_action(mut self, action: TileAction) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn next(&self) -> Option<TileId> {
        self.next
    }

    #[must_use]
    pub fn action(&self) -> Option<&TileAction> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    pub(crate) fn set_next(&mut self, next: TileId) {
        self.next = Some(next);
    }

    pub(crate) fn set_action(&mut self, action: TileAction) {
        self.action = Some(action);
    }

    /// Display name. Plain tiles are "Tile {id}".
    #[must_use]
    pub fn name(&self) -> String {
        match &self.kind {
            TileKind::Plain => format!("Tile {}", self.id.0),
            TileKind::Named { name }
            | TileKind::Property { name, .. }
            | TileKind::Railroad { name, .. }
            | TileKind::Utility { name, .. } => name.clone(),
        }
    }

    /// Purchase price; 0 for tiles that cannot be bought.
    #[must_use]
    pub fn price(&self) -> i64 {
        match &self.kind {
            TileKind::Property { price, .. }
            | TileKind::Railroad { price, .. }
            | TileKind::Utility { price, .. } => *price,
            TileKind::Plain | TileKind::Named { .. } => 0,
        }
    }

    /// Base rent before any monopoly or building multiplier.
    ///
    /// Railroads and utilities have no base rent; theirs is contextual.
    #[must_use]
    pub fn base_rent(&self) -> i64 {
        match &self.kind {
            TileKind::Property { base_rent, .. } => *base_rent,
            _ => 0,
        }
    }

    /// Color group for properties; `None` for everything else.
    #[must_use]
    pub fn color(&self) -> Option<PropertyColor> {
        match &self.kind {
            TileKind::Property { color, .. } => *color,
            _ => None,
        }
    }

    /// House price for properties; 0 for everything else.
    #[must_use]
    pub fn house_price(&self) -> i64 {
        match &self.kind {
            TileKind::Property { house_price, .. } => *house_price,
            _ => 0,
        }
    }

    /// Can this tile be owned?
    #[must_use]
    pub fn is_ownable(&self) -> bool {
        self.kind.is_ownable()
    }
}
