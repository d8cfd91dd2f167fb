//! # Entity Model
//!
//! The player, the monsters, and the items they contend over.
//!
//! Combat is deliberately simple: every combatant exposes a damage value and
//! a hit-point pool through the [`Combatant`] trait, and a strike is one
//! unconditional damage transfer. All randomness lives in the generator;
//! once an entity exists, its behavior is fully deterministic.

use crate::{config, MazeboundError, MazeboundResult};
use serde::{Deserialize, Serialize};

/// Hit-point pool shared by every combatant.
///
/// Damage subtracts unconditionally and may drive the pool negative; there
/// is no floor clamp, and death is simply `current <= 0`. Healing adds and
/// then clamps to the hard ceiling of [`config::MAX_HEALTH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: i32,
}

impl Health {
    /// Creates a health pool with the given starting value.
    pub fn new(current: i32) -> Self {
        Self { current }
    }

    /// Current hit points. May be negative after a fatal blow.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Subtracts `amount` unconditionally.
    pub fn take_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    /// Adds `amount`, clamped to [`config::MAX_HEALTH`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::Health;
    ///
    /// let mut health = Health::new(145);
    /// health.heal(20);
    /// assert_eq!(health.current(), 150);
    /// ```
    pub fn heal(&mut self, amount: i32) {
        self.current = (self.current + amount).min(config::MAX_HEALTH);
    }

    /// True iff current health is zero or below.
    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// A weapon the player can carry. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    damage: i32,
}

impl Weapon {
    /// Creates a weapon with a descriptive name and a damage bonus.
    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }
}

/// A healing potion. Consumed on pickup; always restores the same amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    name: String,
    heal_amount: i32,
}

impl Potion {
    /// Creates a potion with a descriptive name and the fixed heal amount.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            heal_amount: config::POTION_HEAL_AMOUNT,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heal_amount(&self) -> i32 {
        self.heal_amount
    }
}

/// The player's weapon collection.
///
/// Append-only, ordered by acquisition; duplicates are allowed. Only the
/// strongest weapon matters in combat; the rest are trophies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    weapons: Vec<Weapon>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a weapon to the collection.
    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    /// The weapons held, in acquisition order.
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    /// The highest damage bonus across all held weapons, or 0 when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::{Inventory, Weapon};
    ///
    /// let mut inventory = Inventory::new();
    /// assert_eq!(inventory.strongest_weapon_damage(), 0);
    ///
    /// inventory.add_weapon(Weapon::new("ancient sword", 12));
    /// inventory.add_weapon(Weapon::new("blazing hammer", 27));
    /// assert_eq!(inventory.strongest_weapon_damage(), 27);
    /// ```
    pub fn strongest_weapon_damage(&self) -> i32 {
        self.weapons
            .iter()
            .map(Weapon::damage)
            .max()
            .unwrap_or(0)
    }
}

/// The player character.
///
/// The name is fixed at creation; health and inventory mutate during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    health: Health,
    inventory: Inventory,
}

impl Player {
    /// Creates a player with full starting health and an empty inventory.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::{Combatant, Player};
    ///
    /// let player = Player::new("Hero");
    /// assert_eq!(player.name(), "Hero");
    /// assert_eq!(player.health(), 100);
    /// assert!(!player.is_dead());
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: Health::new(config::PLAYER_STARTING_HEALTH),
            inventory: Inventory::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current hit points.
    pub fn health(&self) -> i32 {
        self.health.current()
    }

    /// Restores health, clamped to the hard ceiling.
    pub fn heal(&mut self, amount: i32) {
        self.health.heal(amount);
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

/// A stationary monster guarding its tile.
///
/// Health and damage are fixed at spawn. Monsters never move and never act
/// outside a battle the player started by stepping onto them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    health: Health,
    damage: i32,
}

impl Monster {
    /// Creates a monster, validating its stats against the spawn ranges.
    ///
    /// Generation always draws stats inside the ranges, so the validation is
    /// a constructor-level contract rather than a runtime guard.
    ///
    /// # Errors
    ///
    /// Returns [`MazeboundError::InvalidArgument`] when `health` is outside
    /// `[30, 50]` or `damage` is outside `[10, 30]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazebound::Monster;
    ///
    /// assert!(Monster::new(30, 10).is_ok());
    /// assert!(Monster::new(29, 10).is_err());
    /// ```
    pub fn new(health: i32, damage: i32) -> MazeboundResult<Self> {
        if !(config::MONSTER_HEALTH_MIN..=config::MONSTER_HEALTH_MAX).contains(&health) {
            return Err(MazeboundError::InvalidArgument(format!(
                "monster health must be between {} and {}, got {health}",
                config::MONSTER_HEALTH_MIN,
                config::MONSTER_HEALTH_MAX
            )));
        }
        if !(config::MONSTER_DAMAGE_MIN..=config::MONSTER_DAMAGE_MAX).contains(&damage) {
            return Err(MazeboundError::InvalidArgument(format!(
                "monster damage must be between {} and {}, got {damage}",
                config::MONSTER_DAMAGE_MIN,
                config::MONSTER_DAMAGE_MAX
            )));
        }
        Ok(Self {
            health: Health::new(health),
            damage,
        })
    }

    /// Current hit points.
    pub fn health(&self) -> i32 {
        self.health.current()
    }

    /// The fixed damage this monster deals per strike.
    pub fn damage(&self) -> i32 {
        self.damage
    }
}

/// Capability seam for combat.
///
/// Any attacker/defender pairing works through this one trait: the attacker
/// supplies its damage value, the defender absorbs it. The player's damage
/// is derived from its inventory; a monster's is fixed at spawn.
pub trait Combatant {
    /// Damage dealt per strike.
    fn attack_damage(&self) -> i32;

    /// Absorbs damage unconditionally.
    fn take_damage(&mut self, amount: i32);

    /// True iff health is zero or below.
    fn is_dead(&self) -> bool;
}

impl Combatant for Player {
    /// Base unarmed damage plus the strongest held weapon's bonus.
    fn attack_damage(&self) -> i32 {
        config::UNARMED_DAMAGE + self.inventory.strongest_weapon_damage()
    }

    fn take_damage(&mut self, amount: i32) {
        self.health.take_damage(amount);
    }

    fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}

impl Combatant for Monster {
    fn attack_damage(&self) -> i32 {
        self.damage
    }

    fn take_damage(&mut self, amount: i32) {
        self.health.take_damage(amount);
    }

    fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}

/// One attacker strikes one defender; returns the damage dealt.
pub fn strike<A, D>(attacker: &A, defender: &mut D) -> i32
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    let damage = attacker.attack_damage();
    defender.take_damage(damage);
    damage
}
