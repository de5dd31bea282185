//! Complexity Tiering.
//!
//! Tallies keyword hits per complexity tier and picks the tier with the
//! strictly greatest count. Ties keep the tier that reached the maximum
//! first, so declaration order in the lexicon matters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::lexicon::Lexicon;

/// Complexity tier of a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Complexity scorer for prompt analysis
pub struct ComplexityScorer {
    lexicon: Arc<Lexicon>,
}

impl ComplexityScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Hit count per tier, in lexicon order
    pub fn tally(&self, lower: &str) -> Vec<(Complexity, usize)> {
        self.lexicon
            .complexity
            .iter()
            .map(|tier| (tier.tag, tier.hits(lower)))
            .collect()
    }

    /// Assess an already lower-cased text
    pub fn assess(&self, lower: &str) -> Complexity {
        let mut max_hits = 0;
        let mut detected = Complexity::default();

        for (tier, hits) in self.tally(lower) {
            if hits > max_hits {
                max_hits = hits;
                detected = tier;
            }
        }

        detected
    }
}
