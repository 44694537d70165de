//! Progress Classification
//!
//! Pure functions from (checked, total) to tier, color and message.

use serde::{Deserialize, Serialize};

/// Fraction of the list needed for the "Eco Hero" tier
const HERO_FRACTION: f64 = 0.7;

/// Progress tier, ordered Beginner < Warrior < Hero < Champion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Beginner,
    Warrior,
    Hero,
    Champion,
}

impl Tier {
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Beginner => "Eco Beginner",
            Tier::Warrior => "Eco Warrior",
            Tier::Hero => "Eco Hero",
            Tier::Champion => "Eco Champion",
        }
    }

    /// Level text shown above the progress bar
    pub fn display(&self) -> &'static str {
        match self {
            Tier::Beginner => "🌎 Eco Beginner",
            Tier::Warrior => "🌿 Eco Warrior",
            Tier::Hero => "🌱 Eco Hero",
            Tier::Champion => "🌟 Eco Champion!",
        }
    }

    /// CSS background of the progress bar
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Beginner => "linear-gradient(90deg, #BDBDBD, #EEEEEE)",
            Tier::Warrior => "linear-gradient(90deg, #2196F3, #00BCD4)",
            Tier::Hero => "linear-gradient(90deg, #4CAF50, #8BC34A)",
            Tier::Champion => "linear-gradient(90deg, #FFD700, #FFA500)",
        }
    }
}

/// Minimum checked count for "Eco Hero": ceil(total * 0.7)
pub(crate) fn hero_threshold(total: usize) -> usize {
    (total as f64 * HERO_FRACTION).ceil() as usize
}

/// Classify progress. First matching row wins.
pub fn classify(checked: usize, total: usize) -> Tier {
    if checked == total && total > 0 {
        Tier::Champion
    } else if checked >= hero_threshold(total) {
        Tier::Hero
    } else if checked >= 1 {
        Tier::Warrior
    } else {
        Tier::Beginner
    }
}

/// Motivational line shown under the bar
pub fn motivation(checked: usize, total: usize) -> String {
    if checked == total && total > 0 {
        "Congratulations! You've completed all challenges!".to_string()
    } else if checked > 0 {
        format!("Great job! Only {} left to go!", total.saturating_sub(checked))
    } else {
        "Start your first eco challenge!".to_string()
    }
}

/// Derived summary of the challenge list. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub checked: usize,
    pub total: usize,
    /// checked / total, 0 when the list is empty
    pub ratio: f64,
    pub tier: Tier,
    /// Set exactly when every challenge of a non-empty list is done
    pub celebrate: bool,
}

impl ProgressSnapshot {
    pub fn compute(checked: usize, total: usize) -> Self {
        let ratio = if total == 0 {
            0.0
        } else {
            checked as f64 / total as f64
        };
        let tier = classify(checked, total);
        Self {
            checked,
            total,
            ratio,
            tier,
            celebrate: tier == Tier::Champion,
        }
    }

    /// Bar width in percent
    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }

    pub fn color(&self) -> &'static str {
        self.tier.color()
    }

    pub fn level_text(&self) -> &'static str {
        self.tier.display()
    }

    pub fn motivation(&self) -> String {
        motivation(self.checked, self.total)
    }
}

impl Default for ProgressSnapshot {
    fn default() -> Self {
        Self::compute(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straight transcription of the tier table, evaluated per row
    fn expected_tier(checked: usize, total: usize) -> Tier {
        let hero = (total as f64 * 0.7).ceil() as usize;
        if checked == total && total > 0 {
            Tier::Champion
        } else if checked >= hero {
            Tier::Hero
        } else if checked >= 1 {
            Tier::Warrior
        } else {
            Tier::Beginner
        }
    }

    #[test]
    fn test_classify_matches_table() {
        for total in 0..=30 {
            for checked in 0..=total {
                assert_eq!(classify(checked, total), expected_tier(checked, total), "{}/{}", checked, total);
            }
        }
    }

    #[test]
    fn test_five_challenges() {
        assert_eq!(classify(5, 5), Tier::Champion);
        assert_eq!(classify(4, 5), Tier::Hero);
        assert_eq!(classify(3, 5), Tier::Warrior);
        assert_eq!(classify(1, 5), Tier::Warrior);
        assert_eq!(classify(0, 5), Tier::Beginner);
    }

    #[test]
    fn test_hero_unreachable_for_tiny_lists() {
        // ceil(0.7) == 1 and ceil(1.4) == 2: hitting the threshold means hitting 100%
        assert_eq!(hero_threshold(1), 1);
        assert_eq!(hero_threshold(2), 2);
        assert_eq!(classify(1, 1), Tier::Champion);
        assert_eq!(classify(1, 2), Tier::Warrior);
        assert_eq!(classify(2, 2), Tier::Champion);
    }

    #[test]
    fn test_hero_reachable_from_three() {
        assert_eq!(hero_threshold(3), 3);
        assert_eq!(classify(2, 3), Tier::Warrior);
        assert_eq!(hero_threshold(4), 3);
        assert_eq!(classify(3, 4), Tier::Hero);
    }

    #[test]
    fn test_empty_list() {
        // hero threshold is 0, so an empty list lands on Hero, not Champion
        let snap = ProgressSnapshot::compute(0, 0);
        assert_eq!(snap.ratio, 0.0);
        assert_eq!(snap.tier, Tier::Hero);
        assert!(!snap.celebrate);
        assert_eq!(snap.motivation(), "Start your first eco challenge!");
    }

    #[test]
    fn test_snapshot_complete() {
        let snap = ProgressSnapshot::compute(5, 5);
        assert_eq!(snap.tier, Tier::Champion);
        assert!(snap.celebrate);
        assert_eq!(snap.percent(), 100.0);
        assert_eq!(snap.level_text(), "🌟 Eco Champion!");
        assert_eq!(snap.motivation(), "Congratulations! You've completed all challenges!");
    }

    #[test]
    fn test_snapshot_partial() {
        let snap = ProgressSnapshot::compute(4, 5);
        assert_eq!(snap.tier, Tier::Hero);
        assert!(!snap.celebrate);
        assert_eq!(snap.percent(), 80.0);
        assert_eq!(snap.motivation(), "Great job! Only 1 left to go!");
        assert_eq!(snap.color(), "linear-gradient(90deg, #4CAF50, #8BC34A)");
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(Tier::Beginner < Tier::Warrior);
        assert!(Tier::Warrior < Tier::Hero);
        assert!(Tier::Hero < Tier::Champion);
    }
}
