//! The mob type
//!
//! Everything in the pit is a `Mob`: a name, hit points, attack, and
//! defense, mutated freely through accessors. A process-wide counter
//! tracks how many mobs have ever been constructed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Total mobs constructed this process. Incremented by every
/// constructor, never decremented.
static MOBS_CREATED: AtomicU64 = AtomicU64::new(0);

/// A combatant.
///
/// Defense is stored and reported but not consulted by the damage
/// exchange; see [`crate::combat::exchange_blows`].
#[derive(Debug, Clone)]
pub struct Mob {
    name: String,
    hp: i32,
    atk: i32,
    def: i32,
    /// Gold reserve, untouched by every current operation.
    // TODO: turn this into a roulette-style pouch that can win or lose gold.
    #[allow(dead_code)]
    gold_pouch: i64,
}

impl Mob {
    /// Create a mob with caller-supplied attributes. No validation:
    /// zero and negative values are stored as-is.
    pub fn new(name: impl Into<String>, hp: i32, atk: i32, def: i32) -> Self {
        MOBS_CREATED.fetch_add(1, Ordering::SeqCst);
        Self {
            name: name.into(),
            hp,
            atk,
            def,
            gold_pouch: 0,
        }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp;
    }

    pub fn atk(&self) -> i32 {
        self.atk
    }

    pub fn set_atk(&mut self, atk: i32) {
        self.atk = atk;
    }

    pub fn def(&self) -> i32 {
        self.def
    }

    pub fn set_def(&mut self, def: i32) {
        self.def = def;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether this mob is out of the fight (hit points at or below
    /// zero).
    pub fn is_down(&self) -> bool {
        self.hp <= 0
    }

    /// Total mobs constructed in this process so far. Counts
    /// constructions, not live mobs: dropping a mob never decrements
    /// it, and cloning one never increments it.
    pub fn creation_count() -> u64 {
        MOBS_CREATED.load(Ordering::SeqCst)
    }
}

impl Default for Mob {
    /// The placeholder combatant: "John Doe", 15 across the board.
    fn default() -> Self {
        Self::new("John Doe", 15, 15, 15)
    }
}
