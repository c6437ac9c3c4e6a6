//! Property-based tests for rent schedules, monopoly detection, ring
//! validation and whole-game invariants.

use proptest::prelude::*;

use rust_estate::engine::{Game, TurnOutcome};
use rust_estate::games::classic;
use rust_estate::rules::{property_rent, railroad_rent, utility_rent};
use rust_estate::{AssetKind, Board, BoardError, GameConfig, OwnedAsset, Player, PlayerId, PropertyColor, Tile, TileId};

fn color() -> impl Strategy<Value = PropertyColor> {
    prop::sample::select(PropertyColor::ALL.to_vec())
}

/// A ring over the given ids, linked in order.
fn ring(ids: &[u32]) -> Board {
    let mut board = Board::new();
    board.set_first_tile(Tile::new(TileId::new(ids[0]))).unwrap();
    for &id in &ids[1..] {
        board.register_tile(Tile::new(TileId::new(id))).unwrap();
    }
    for (index, &id) in ids.iter().enumerate() {
        board
            .link(TileId::new(id), TileId::new(ids[(index + 1) % ids.len()]))
            .unwrap();
    }
    board
}

proptest! {
    #[test]
    fn prop_utility_rent_formula(roll in 2u32..=12, owned in 1usize..=2) {
        let multiplier = if owned == 1 { 4 } else { 10 };
        prop_assert_eq!(utility_rent(roll, owned), i64::from(roll) * multiplier);
    }

    #[test]
    fn prop_railroad_rent_tiers(owned in 0usize..10) {
        let expected = match owned {
            1 => 25,
            2 => 50,
            3 => 100,
            4 => 200,
            _ => 0,
        };
        prop_assert_eq!(railroad_rent(owned), expected);
    }

    #[test]
    fn prop_property_rent_idempotent(
        base in 0i64..100,
        monopoly in any::<bool>(),
        houses in 0u8..=4,
        hotel in any::<bool>(),
    ) {
        let first = property_rent(base, monopoly, houses, hotel);
        prop_assert_eq!(first, property_rent(base, monopoly, houses, hotel));
        prop_assert!(first >= base);
    }

    #[test]
    fn prop_monopoly_iff_full_group(target in color(), owned in 0usize..=3, noise in 0usize..=3) {
        let mut player = Player::new(PlayerId::new(0), "P", "");
        let mut next_id = 1;
        for _ in 0..owned.min(target.group_size()) {
            player.add_owned(OwnedAsset { tile: TileId::new(next_id), kind: AssetKind::Property(Some(target)) });
            next_id += 1;
        }
        // Railroads and utilities never count toward a color group.
        for index in 0..noise {
            let kind = if index % 2 == 0 { AssetKind::Railroad } else { AssetKind::Utility };
            player.add_owned(OwnedAsset { tile: TileId::new(next_id), kind });
            next_id += 1;
        }

        let expected = owned.min(target.group_size()) == target.group_size();
        prop_assert_eq!(player.has_monopoly(Some(target)), expected);
        prop_assert!(!player.has_monopoly(None));
    }

    #[test]
    fn prop_shuffled_ring_validates(ids in Just((1u32..=40).collect::<Vec<_>>()).prop_shuffle()) {
        let board = ring(&ids);
        prop_assert!(board.validate().is_ok());

        let first = board.first_tile().unwrap();
        let mut current = first;
        for _ in 0..40 {
            current = board.next_of(current).unwrap();
        }
        prop_assert_eq!(current, first);
    }

    #[test]
    fn prop_short_circuit_is_rejected(cut in 1usize..39) {
        let ids: Vec<u32> = (1..=40).collect();
        let mut board = ring(&ids);
        board.link(TileId::new(ids[cut - 1]), TileId::new(ids[0])).unwrap();

        let is_not_circular = matches!(board.validate(), Err(BoardError::NotCircular { .. }));
        prop_assert!(is_not_circular);
    }

    #[test]
    fn prop_ring_of_any_size(size in 1u32..80) {
        let ids: Vec<u32> = (1..=size).collect();
        prop_assert!(ring(&ids).validate_ring(size as usize).is_ok());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Random games on the standard board keep ownership consistent, keep
    /// solvent players in the game, and end with exactly one winner.
    #[test]
    fn prop_classic_game_invariants(seed in any::<u64>(), players in 2usize..=4, buy_mask in any::<u8>()) {
        let mut game = classic::new_game(GameConfig::new(seed)).unwrap();
        let ids: Vec<PlayerId> = (0..players).map(|i| game.add_player(format!("P{i}"), "")).collect();

        for _ in 0..400 {
            if game.is_finished() {
                break;
            }
            if let TurnOutcome::Moved { player, pending_purchase: Some(tile), .. } = game.play_turn() {
                if buy_mask & (1 << player.index()) != 0 {
                    game.buy_property(player, tile);
                }
                game.end_turn();
            }

            prop_assert!(game.current_player_index() < game.players().len().max(1));
            for player in game.players() {
                prop_assert!(player.balance() >= 0);
                for asset in player.owned() {
                    prop_assert_eq!(game.owner_of(asset.tile), Some(player.id()));
                }
            }
            for tile in game.board().tiles() {
                if let Some(owner) = game.owner_of(tile.id()) {
                    let holder = game.player(owner);
                    prop_assert!(holder.is_some_and(|p| p.owns(tile.id())));
                }
            }
        }

        if game.is_finished() {
            prop_assert_eq!(game.players().len(), 1);
            let winner = game.winner();
            prop_assert!(winner.is_some_and(|w| ids.contains(&w)));
            prop_assert_eq!(winner, game.players().first().map(|p| p.id()));
        }
    }
}
