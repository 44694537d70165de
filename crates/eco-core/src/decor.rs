//! Badge and Fact Decoration
//!
//! Extra output produced after each progress recomputation: a random eco
//! fact and a badge glyph for the current tier.

use crate::progress::ProgressSnapshot;

pub const ECO_FACTS: &[&str] = &[
    "Recycling one aluminum can saves enough energy to run a TV for 3 hours.",
    "Glass can be recycled endlessly without loss in quality.",
    "Plastic takes up to 1,000 years to decompose in landfills.",
    "Composting food waste reduces methane emissions.",
    "Recycling one ton of paper saves 17 trees.",
];

/// Badge glyph for (checked, total).
///
/// Computed on its own thresholds; must agree with `classify`.
pub fn badge_for(checked: usize, total: usize) -> &'static str {
    if checked == total && total > 0 {
        "🏆"
    } else if checked >= (total as f64 * 0.7).ceil() as usize {
        "🥇"
    } else if checked >= 1 {
        "🥈"
    } else {
        "🔰"
    }
}

/// Output of one decoration pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub fact: &'static str,
    pub badge: &'static str,
}

impl Decoration {
    pub fn fact_text(&self) -> String {
        format!("🌟 Eco Fact: {}", self.fact)
    }
}

/// Picks facts with an injected random source returning values in `[0, 1)`
pub struct BadgeFactDecorator<R> {
    random: R,
}

impl<R: FnMut() -> f64> BadgeFactDecorator<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Uniform pick from `ECO_FACTS`
    pub fn pick_fact(&mut self) -> &'static str {
        let roll = (self.random)();
        let index = (roll * ECO_FACTS.len() as f64).floor() as usize;
        ECO_FACTS[index.min(ECO_FACTS.len() - 1)]
    }

    pub fn decorate(&mut self, snapshot: &ProgressSnapshot) -> Decoration {
        Decoration {
            fact: self.pick_fact(),
            badge: badge_for(snapshot.checked, snapshot.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{classify, Tier};

    #[test]
    fn test_badge_agrees_with_tier() {
        for total in 0..=30 {
            for checked in 0..=total {
                let expected = match classify(checked, total) {
                    Tier::Champion => "🏆",
                    Tier::Hero => "🥇",
                    Tier::Warrior => "🥈",
                    Tier::Beginner => "🔰",
                };
                assert_eq!(badge_for(checked, total), expected, "{}/{}", checked, total);
            }
        }
    }

    #[test]
    fn test_pick_fact_covers_range() {
        let rolls = [0.0, 0.2, 0.4, 0.6, 0.8, 0.999_999];
        let mut i = 0;
        let mut decorator = BadgeFactDecorator::new(move || {
            let r = rolls[i];
            i += 1;
            r
        });

        let picked: Vec<_> = (0..rolls.len()).map(|_| decorator.pick_fact()).collect();
        assert_eq!(picked[0], ECO_FACTS[0]);
        assert_eq!(picked[1], ECO_FACTS[1]);
        assert_eq!(picked[4], ECO_FACTS[4]);
        assert_eq!(picked[5], ECO_FACTS[4]);
    }

    #[test]
    fn test_pick_fact_clamps_out_of_range_roll() {
        let mut decorator = BadgeFactDecorator::new(|| 1.0);
        assert_eq!(decorator.pick_fact(), ECO_FACTS[ECO_FACTS.len() - 1]);
    }

    #[test]
    fn test_decorate() {
        let mut decorator = BadgeFactDecorator::new(|| 0.0);
        let deco = decorator.decorate(&ProgressSnapshot::compute(4, 5));
        assert_eq!(deco.badge, "🥇");
        assert_eq!(
            deco.fact_text(),
            "🌟 Eco Fact: Recycling one aluminum can saves enough energy to run a TV for 3 hours."
        );
    }
}
