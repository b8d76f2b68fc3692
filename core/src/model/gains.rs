//! Small additive delta types shared by turns, encounters, intervals and
//! consumables.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Substat deltas for the three stat classes. Signed: "You lose 50
/// Chutzpah" is a negative moxie gain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statgain {
    pub muscle: i64,
    pub mysticality: i64,
    pub moxie: i64,
}

impl Statgain {
    pub const ZERO: Statgain = Statgain {
        muscle: 0,
        mysticality: 0,
        moxie: 0,
    };

    pub fn new(muscle: i64, mysticality: i64, moxie: i64) -> Self {
        Self {
            muscle,
            mysticality,
            moxie,
        }
    }

    pub fn total(&self) -> i64 {
        self.muscle + self.mysticality + self.moxie
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl AddAssign for Statgain {
    fn add_assign(&mut self, rhs: Self) {
        self.muscle = self.muscle.saturating_add(rhs.muscle);
        self.mysticality = self.mysticality.saturating_add(rhs.mysticality);
        self.moxie = self.moxie.saturating_add(rhs.moxie);
    }
}

impl Add for Statgain {
    type Output = Statgain;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

/// MP gained, broken down by source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MpGain {
    pub encounter: i64,
    pub starfish: i64,
    pub resting: i64,
    pub out_of_encounter: i64,
    pub consumable: i64,
}

impl MpGain {
    pub fn total(&self) -> i64 {
        self.encounter + self.starfish + self.resting + self.out_of_encounter + self.consumable
    }
}

impl AddAssign for MpGain {
    fn add_assign(&mut self, rhs: Self) {
        self.encounter += rhs.encounter;
        self.starfish += rhs.starfish;
        self.resting += rhs.resting;
        self.out_of_encounter += rhs.out_of_encounter;
        self.consumable += rhs.consumable;
    }
}

/// Meat deltas. `spent` is recorded as a positive amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeatGain {
    pub encounter: i64,
    pub other: i64,
    pub spent: i64,
}

impl MeatGain {
    pub fn gained(&self) -> i64 {
        self.encounter + self.other
    }

    pub fn net(&self) -> i64 {
        self.gained() - self.spent
    }
}

impl AddAssign for MeatGain {
    fn add_assign(&mut self, rhs: Self) {
        self.encounter += rhs.encounter;
        self.other += rhs.other;
        self.spent += rhs.spent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statgain_accumulates() {
        let mut gain = Statgain::new(10, 0, -5);
        gain += Statgain::new(1, 2, 3);
        assert_eq!(gain, Statgain::new(11, 2, -2));
        assert_eq!(gain.total(), 11);
    }

    #[test]
    fn test_statgain_saturates_instead_of_overflowing() {
        let mut gain = Statgain::new(i64::MAX, 0, 0);
        gain += Statgain::new(1, 0, 0);
        assert_eq!(gain.muscle, i64::MAX);
    }

    #[test]
    fn test_meat_net() {
        let meat = MeatGain {
            encounter: 300,
            other: 200,
            spent: 100,
        };
        assert_eq!(meat.gained(), 500);
        assert_eq!(meat.net(), 400);
    }
}
