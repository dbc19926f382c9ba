//! Powerup use counters and the earned-use economy.

use serde::{Deserialize, Serialize};

use super::config::{PowerupMode, PowerupRules};
use super::grid::Level;

/// The three powerup actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Powerup {
    #[display("undo")]
    Undo,
    #[display("swap")]
    Swap,
    #[display("delete")]
    Delete,
}

/// Remaining uses of one powerup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Uses {
    Limited(u8),
    Unlimited,
}

impl Default for Uses {
    fn default() -> Self {
        Self::Limited(0)
    }
}

impl Uses {
    #[must_use]
    pub const fn is_available(self) -> bool {
        !matches!(self, Self::Limited(0))
    }

    /// Remaining count, `None` when unlimited.
    #[must_use]
    pub const fn remaining(self) -> Option<u8> {
        match self {
            Self::Limited(n) => Some(n),
            Self::Unlimited => None,
        }
    }

    pub(crate) fn consume(&mut self) {
        if let Self::Limited(n) = self {
            *n = n.saturating_sub(1);
        }
    }

    /// Add one use without going above `cap`. Returns whether a use was added.
    pub(crate) fn grant(&mut self, cap: u8) -> bool {
        match self {
            Self::Limited(n) if *n < cap => {
                *n += 1;
                true
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Uses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limited(n) => write!(f, "{n}"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Powerup economy of one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Powerups {
    mode: PowerupMode,
    pub undo: Uses,
    pub swap: Uses,
    pub delete: Uses,
    /// Undo, swap and delete calls that succeeded since the last restart.
    pub used: u32,
}

impl Powerups {
    /// Fresh counters for a (re)started game.
    #[must_use]
    pub fn for_mode(mode: PowerupMode, rules: &PowerupRules) -> Self {
        let mut powerups = Self {
            mode,
            ..Self::default()
        };
        if mode.powerups_enabled() {
            powerups.undo = Uses::Limited(rules.starting_undos);
            powerups.swap = Uses::Limited(rules.starting_swaps);
            powerups.delete = Uses::Limited(rules.starting_deletes);
        }
        if mode.is_practice() {
            powerups.undo = Uses::Unlimited;
        }
        powerups
    }

    #[must_use]
    pub fn mode(&self) -> PowerupMode {
        self.mode
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.mode.powerups_enabled()
    }

    #[must_use]
    pub fn practice(&self) -> bool {
        self.mode.is_practice()
    }

    #[must_use]
    pub fn uses(&self, powerup: Powerup) -> Uses {
        match powerup {
            Powerup::Undo => self.undo,
            Powerup::Swap => self.swap,
            Powerup::Delete => self.delete,
        }
    }

    pub(crate) fn uses_mut(&mut self, powerup: Powerup) -> &mut Uses {
        match powerup {
            Powerup::Undo => &mut self.undo,
            Powerup::Swap => &mut self.swap,
            Powerup::Delete => &mut self.delete,
        }
    }

    /// Grant the use earned by merging into `level`, if any.
    ///
    /// Returns the powerup that actually gained a use.
    pub(crate) fn grant_for_level(&mut self, level: Level, rules: &PowerupRules) -> Option<Powerup> {
        if !self.enabled() {
            return None;
        }
        let powerup = if level == rules.undo_unlock_level && !self.practice() {
            Powerup::Undo
        } else if level == rules.swap_unlock_level {
            Powerup::Swap
        } else if level == rules.delete_unlock_level {
            Powerup::Delete
        } else {
            return None;
        };
        self.uses_mut(powerup).grant(rules.grant_cap).then_some(powerup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_per_mode() {
        let rules = PowerupRules::default();

        let off = Powerups::for_mode(PowerupMode::Off, &rules);
        assert_eq!((off.undo, off.swap, off.delete), (Uses::Limited(0), Uses::Limited(0), Uses::Limited(0)));

        let on = Powerups::for_mode(PowerupMode::On, &rules);
        assert_eq!((on.undo, on.swap, on.delete), (Uses::Limited(2), Uses::Limited(1), Uses::Limited(0)));

        let practice = Powerups::for_mode(PowerupMode::Practice, &rules);
        assert_eq!(practice.undo, Uses::Unlimited);
        assert_eq!(practice.swap, Uses::Limited(1));
        assert!(practice.practice());
    }

    #[test]
    fn test_consume_and_grant() {
        let mut uses = Uses::Limited(1);
        uses.consume();
        assert_eq!(uses, Uses::Limited(0));
        assert!(!uses.is_available());
        uses.consume();
        assert_eq!(uses, Uses::Limited(0));

        assert!(uses.grant(2));
        assert!(uses.grant(2));
        assert!(!uses.grant(2));
        assert_eq!(uses, Uses::Limited(2));

        let mut unlimited = Uses::Unlimited;
        unlimited.consume();
        assert_eq!(unlimited, Uses::Unlimited);
        assert!(!unlimited.grant(2));
    }

    #[test]
    fn test_grant_for_level() {
        let rules = PowerupRules::default();
        let mut powerups = Powerups::for_mode(PowerupMode::On, &rules);

        assert_eq!(powerups.grant_for_level(8, &rules), Some(Powerup::Swap));
        assert_eq!(powerups.swap, Uses::Limited(2));
        assert_eq!(powerups.grant_for_level(8, &rules), None);

        assert_eq!(powerups.grant_for_level(9, &rules), Some(Powerup::Delete));
        assert_eq!(powerups.delete, Uses::Limited(1));

        // Already at the cap.
        assert_eq!(powerups.grant_for_level(7, &rules), None);
        assert_eq!(powerups.grant_for_level(3, &rules), None);
    }

    #[test]
    fn test_no_grants_when_disabled() {
        let rules = PowerupRules::default();
        let mut powerups = Powerups::for_mode(PowerupMode::Off, &rules);
        assert_eq!(powerups.grant_for_level(8, &rules), None);
        assert_eq!(powerups.swap, Uses::Limited(0));
    }

    #[test]
    fn test_practice_skips_undo_grant() {
        let rules = PowerupRules::default();
        let mut powerups = Powerups::for_mode(PowerupMode::Practice, &rules);
        assert_eq!(powerups.grant_for_level(7, &rules), None);
        assert_eq!(powerups.undo, Uses::Unlimited);
    }

    #[test]
    fn test_uses_display() {
        assert_eq!(Uses::Limited(2).to_string(), "2");
        assert_eq!(Uses::Unlimited.to_string(), "unlimited");
        assert_eq!(Powerup::Swap.to_string(), "swap");
    }
}
