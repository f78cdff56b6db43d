//! Party vibe scale keyed by drinks per person per hour

/// One named band of the vibe scale, covering `[min_drinks_per_hour, max_drinks_per_hour)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibeTier {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub min_drinks_per_hour: f64,
    pub max_drinks_per_hour: f64,
}

impl VibeTier {
    pub fn contains(&self, drinks_per_hour: f64) -> bool {
        drinks_per_hour >= self.min_drinks_per_hour && drinks_per_hour < self.max_drinks_per_hour
    }
}

/// Ordered tiers from calmest to rowdiest; the last one is open-ended
static VIBE_TIERS: [VibeTier; 5] = [
    VibeTier {
        level: 1,
        name: "Stone Cold Sober Squad",
        description: "Minimal alcohol presence",
        min_drinks_per_hour: 0.0,
        max_drinks_per_hour: 0.5,
    },
    VibeTier {
        level: 2,
        name: "\"I'll Have ONE Beer\"",
        description: "Light, controlled sipping",
        min_drinks_per_hour: 0.5,
        max_drinks_per_hour: 0.7,
    },
    VibeTier {
        level: 3,
        name: "Social Sippers",
        description: "Moderate, dinner-party vibes",
        min_drinks_per_hour: 0.7,
        max_drinks_per_hour: 1.0,
    },
    VibeTier {
        level: 4,
        name: "We're Here to Party",
        description: "Generous pours, good time",
        min_drinks_per_hour: 1.0,
        max_drinks_per_hour: 1.5,
    },
    VibeTier {
        level: 5,
        name: "Eternal Frat Boys",
        description: "Hold onto your hats",
        min_drinks_per_hour: 1.5,
        max_drinks_per_hour: f64::INFINITY,
    },
];

/// Vibe scale lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibeScale {
    tiers: &'static [VibeTier],
}

impl Default for VibeScale {
    fn default() -> Self {
        Self { tiers: &VIBE_TIERS }
    }
}

impl VibeScale {
    pub fn tiers(&self) -> &'static [VibeTier] {
        self.tiers
    }

    /// Highest level on the scale
    pub fn max_level(&self) -> u8 {
        self.top().level
    }

    /// First tier containing the rate, or the top tier if none does
    pub fn classify(&self, drinks_per_hour: f64) -> &'static VibeTier {
        self.tiers
            .iter()
            .find(|tier| tier.contains(drinks_per_hour))
            .unwrap_or_else(|| self.top())
    }

    fn top(&self) -> &'static VibeTier {
        &self.tiers[self.tiers.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_contiguous() {
        for pair in VIBE_TIERS.windows(2) {
            assert_eq!(pair[0].max_drinks_per_hour, pair[1].min_drinks_per_hour);
            assert_eq!(pair[0].level + 1, pair[1].level);
        }
        assert_eq!(VIBE_TIERS[0].min_drinks_per_hour, 0.0);
    }

    #[test]
    fn test_classify_boundaries() {
        let scale = VibeScale::default();
        assert_eq!(scale.classify(0.0).level, 1);
        assert_eq!(scale.classify(0.4).level, 1);
        assert_eq!(scale.classify(0.5).level, 2);
        assert_eq!(scale.classify(0.69).level, 2);
        assert_eq!(scale.classify(0.7).level, 3);
        assert_eq!(scale.classify(0.85).level, 3);
        assert_eq!(scale.classify(1.0).level, 4);
        assert_eq!(scale.classify(1.25).level, 4);
        assert_eq!(scale.classify(1.5).level, 5);
        assert_eq!(scale.classify(100.0).level, 5);
    }

    #[test]
    fn test_unmatched_rate_falls_back_to_top() {
        let scale = VibeScale::default();
        assert_eq!(scale.classify(-1.0).level, 5);
        assert_eq!(scale.classify(f64::NAN).level, 5);
        assert_eq!(scale.max_level(), 5);
    }

    #[test]
    fn test_tiers_cover_every_level() {
        let scale = VibeScale::default();
        let levels: Vec<u8> = scale.tiers().iter().map(|tier| tier.level).collect();
        assert_eq!(levels, (1..=scale.max_level()).collect::<Vec<_>>());
    }

    #[test]
    fn test_names() {
        let scale = VibeScale::default();
        assert_eq!(scale.classify(0.85).name, "Social Sippers");
        assert_eq!(scale.classify(1.25).name, "We're Here to Party");
        assert_eq!(scale.classify(0.6).name, "\"I'll Have ONE Beer\"");
    }
}
