#![allow(dead_code)]

use battle_core::{BattleField, BattleStats, Combatant, FixedRng, Side};

/// `FixedRng` value that flips heads and rolls the top of the damage window.
pub const HEADS_TOP_ROLL: u32 = 15;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Player: level 50, 80 HP, 100/100. Enemy: level 50, 120 HP, 90/110.
pub fn field(rng: u32) -> BattleField<FixedRng> {
    init_tracing();
    let player = Combatant::new(Side::Player, 50, BattleStats::new(80, 100, 100))
        .expect("valid player stats");
    let enemy = Combatant::new(Side::Enemy, 50, BattleStats::new(120, 90, 110))
        .expect("valid enemy stats");
    BattleField::new(player, enemy, FixedRng(rng), 0xBA77_1E)
}
