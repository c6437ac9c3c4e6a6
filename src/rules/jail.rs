//! Jail release rules.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// What happened to a jailed player on their roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JailRelease {
    /// Rolled doubles: released, no fine.
    Doubles,
    /// Hit the jailed-turn limit: released, fined only if solvent.
    Forced { fined: bool },
    /// Still in jail; the turn ends without movement.
    Stay,
}

impl JailRelease {
    /// Did the player leave jail?
    #[must_use]
    pub fn released(self) -> bool {
        !matches!(self, JailRelease::Stay)
    }
}

/// Serve one jailed turn.
///
/// Doubles release immediately. Otherwise the counter goes up, and on
/// reaching `limit` the player is released anyway. The fine is charged on a
/// forced release only when the player can cover it; an unaffordable fine is
/// waived, not deferred.
pub fn serve_jail_turn(player: &mut Player, doubles: bool, fine: i64, limit: u32) -> JailRelease {
    if doubles {
        player.release_from_jail();
        return JailRelease::Doubles;
    }

    player.increment_jail_turns();
    if player.jail_turns() < limit {
        return JailRelease::Stay;
    }

    let fined = player.balance() >= fine;
    if fined {
        player.adjust_balance(-fine);
    }
    player.release_from_jail();
    JailRelease::Forced { fined }
}
