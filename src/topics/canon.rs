// The canonical topic taxonomy.
//
// Eight fixed categories, decided during the annotation pass and never
// extended at runtime. Everything downstream (cleaning, distribution,
// sentiment, TF-IDF) keys off this set, so the enum is the single source
// of truth for the canonical strings and their display order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight canonical topics articles are filed under.
///
/// Serializes to the exact canonical string so cleaned JSON matches the
/// annotated corpus format byte-for-byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalTopic {
    #[serde(rename = "Election Victory/Results")]
    ElectionVictoryResults,
    #[serde(rename = "Trump Conflicts")]
    TrumpConflicts,
    #[serde(rename = "Israel/Palestine/Antisemitism")]
    IsraelPalestineAntisemitism,
    #[serde(rename = "Personal Background/Family")]
    PersonalBackgroundFamily,
    #[serde(rename = "Controversies/Personal Attacks")]
    ControversiesPersonalAttacks,
    #[serde(rename = "Policy Positions")]
    PolicyPositions,
    #[serde(rename = "Campaign/Endorsements")]
    CampaignEndorsements,
    #[serde(rename = "India/Hindu Relations")]
    IndiaHinduRelations,
}

impl CanonicalTopic {
    /// All topics in the fixed order used for tallies and reports.
    pub const ALL: [CanonicalTopic; 8] = [
        CanonicalTopic::ElectionVictoryResults,
        CanonicalTopic::TrumpConflicts,
        CanonicalTopic::IsraelPalestineAntisemitism,
        CanonicalTopic::PersonalBackgroundFamily,
        CanonicalTopic::ControversiesPersonalAttacks,
        CanonicalTopic::PolicyPositions,
        CanonicalTopic::CampaignEndorsements,
        CanonicalTopic::IndiaHinduRelations,
    ];

    /// Fallback for empty, absent, or unrecognizable labels.
    pub const DEFAULT: CanonicalTopic = CanonicalTopic::ControversiesPersonalAttacks;

    /// The exact canonical string for this topic.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalTopic::ElectionVictoryResults => "Election Victory/Results",
            CanonicalTopic::TrumpConflicts => "Trump Conflicts",
            CanonicalTopic::IsraelPalestineAntisemitism => "Israel/Palestine/Antisemitism",
            CanonicalTopic::PersonalBackgroundFamily => "Personal Background/Family",
            CanonicalTopic::ControversiesPersonalAttacks => "Controversies/Personal Attacks",
            CanonicalTopic::PolicyPositions => "Policy Positions",
            CanonicalTopic::CampaignEndorsements => "Campaign/Endorsements",
            CanonicalTopic::IndiaHinduRelations => "India/Hindu Relations",
        }
    }

    /// Exact (case-sensitive) membership test against the canonical set.
    pub fn from_exact(label: &str) -> Option<CanonicalTopic> {
        CanonicalTopic::ALL
            .iter()
            .find(|t| t.as_str() == label)
            .copied()
    }
}

impl fmt::Display for CanonicalTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_eight_distinct_topics() {
        let mut seen = std::collections::HashSet::new();
        for topic in CanonicalTopic::ALL {
            assert!(seen.insert(topic.as_str()));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_from_exact_round_trips() {
        for topic in CanonicalTopic::ALL {
            assert_eq!(CanonicalTopic::from_exact(topic.as_str()), Some(topic));
        }
    }

    #[test]
    fn test_from_exact_is_case_sensitive() {
        assert_eq!(CanonicalTopic::from_exact("policy positions"), None);
        assert_eq!(CanonicalTopic::from_exact("Trump conflicts"), None);
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&CanonicalTopic::TrumpConflicts).unwrap();
        assert_eq!(json, "\"Trump Conflicts\"");
        let back: CanonicalTopic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CanonicalTopic::TrumpConflicts);
    }
}
