// The topic normalizer — maps free-text labels onto the canonical set.
//
// The annotation pass produced labels like "Election results / victory
// speech" or disjunctions like "Policy coverage OR Crime narratives".
// Normalization is total: every input, including None and garbage, maps to
// exactly one canonical topic.
//
// Resolution order (first match wins):
//   1. empty/absent       -> default topic
//   2. "A OR B"           -> continue with A
//   3. already canonical  -> unchanged
//   4. known synonym      -> mapped topic
//   5. keyword scan       -> first keyword group with a hit
//   6. nothing matched    -> default topic, with a warning
//
// The keyword groups are checked in a fixed order because a label can match
// several groups ("policing controversy" hits both the policy and the
// controversy keywords). The order is inherited from the annotation pass and
// changing it changes classification outcomes.

use tracing::warn;

use super::canon::CanonicalTopic;

/// Historical label variants from earlier annotation rounds, mapped to their
/// canonical topic. Exact-match only; anything fuzzier falls through to the
/// keyword scan.
const SYNONYMS: &[(&str, CanonicalTopic)] = &[
    // Election related
    (
        "Election results / official reporting",
        CanonicalTopic::ElectionVictoryResults,
    ),
    (
        "Election results / victory speech",
        CanonicalTopic::ElectionVictoryResults,
    ),
    (
        "Election results / policy coverage",
        CanonicalTopic::ElectionVictoryResults,
    ),
    (
        "Electoral coverage / horse race",
        CanonicalTopic::ElectionVictoryResults,
    ),
    // Trump related
    ("Trump / GOP reactions", CanonicalTopic::TrumpConflicts),
    // Personal background
    (
        "Personal background / identity",
        CanonicalTopic::PersonalBackgroundFamily,
    ),
    // Controversies
    (
        "Criticism / scandal / accusations",
        CanonicalTopic::ControversiesPersonalAttacks,
    ),
    (
        "Public backlash / mockery",
        CanonicalTopic::ControversiesPersonalAttacks,
    ),
    (
        "Political attacks / debate coverage",
        CanonicalTopic::ControversiesPersonalAttacks,
    ),
    // Policy
    ("Policing / NYPD controversy", CanonicalTopic::PolicyPositions),
    (
        "Crime & public safety narratives",
        CanonicalTopic::PolicyPositions,
    ),
    ("Crime / economic anxiety", CanonicalTopic::PolicyPositions),
    (
        "Fearmongering / crime / public reaction",
        CanonicalTopic::PolicyPositions,
    ),
    ("Right-wing fear narratives", CanonicalTopic::PolicyPositions),
    // Campaign
    ("Support & voter appeal", CanonicalTopic::CampaignEndorsements),
];

/// Ordered keyword groups for the fallback scan. Evaluated top to bottom;
/// the generic controversy group is deliberately last so more specific
/// groups claim ambiguous labels first.
const KEYWORD_GROUPS: &[(CanonicalTopic, &[&str])] = &[
    (
        CanonicalTopic::ElectionVictoryResults,
        &["election", "victory", "results", "win", "electoral"],
    ),
    (
        CanonicalTopic::TrumpConflicts,
        &["trump", "gop", "republican"],
    ),
    (
        CanonicalTopic::IsraelPalestineAntisemitism,
        &[
            "israel",
            "palestine",
            "antisemitism",
            "antisemite",
            "jewish",
            "jihadist",
            "hamas",
            "bds",
        ],
    ),
    (
        CanonicalTopic::PersonalBackgroundFamily,
        &[
            "personal",
            "background",
            "family",
            "identity",
            "net worth",
            "biography",
        ],
    ),
    (
        CanonicalTopic::PolicyPositions,
        &[
            "policy",
            "policing",
            "crime",
            "safety",
            "nypd",
            "tax",
            "billionaire",
            "economic",
        ],
    ),
    (
        CanonicalTopic::CampaignEndorsements,
        &[
            "campaign",
            "endorsement",
            "support",
            "voter",
            "appeal",
            "pac",
        ],
    ),
    (
        CanonicalTopic::IndiaHinduRelations,
        &["india", "hindu", "modi", "kangana", "bollywood"],
    ),
    (
        CanonicalTopic::ControversiesPersonalAttacks,
        &[
            "controversy",
            "attack",
            "scandal",
            "criticism",
            "backlash",
            "mockery",
        ],
    ),
];

/// Normalize a raw topic label onto the canonical set.
///
/// Total over all inputs: absent, empty, and unrecognized labels all resolve
/// to [`CanonicalTopic::DEFAULT`]. Already-canonical labels pass through
/// unchanged.
pub fn normalize(raw: Option<&str>) -> CanonicalTopic {
    let label = match raw {
        Some(s) if !s.trim().is_empty() => s.trim(),
        _ => return CanonicalTopic::DEFAULT,
    };

    // Only the first alternative of a disjunctive label is honored
    let label = match label.split_once(" OR ") {
        Some((first, _)) => first.trim(),
        None => label,
    };

    if let Some(topic) = CanonicalTopic::from_exact(label) {
        return topic;
    }

    if let Some(&(_, topic)) = SYNONYMS.iter().find(|(variant, _)| *variant == label) {
        return topic;
    }

    let lower = label.to_lowercase();
    for &(topic, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return topic;
        }
    }

    warn!(label, "could not categorize topic, using default");
    CanonicalTopic::DEFAULT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_use_default() {
        assert_eq!(normalize(None), CanonicalTopic::DEFAULT);
        assert_eq!(normalize(Some("")), CanonicalTopic::DEFAULT);
        assert_eq!(normalize(Some("   ")), CanonicalTopic::DEFAULT);
    }

    #[test]
    fn test_canonical_labels_pass_through() {
        for topic in CanonicalTopic::ALL {
            assert_eq!(normalize(Some(topic.as_str())), topic);
        }
    }

    #[test]
    fn test_synonym_table_hit() {
        assert_eq!(
            normalize(Some("Election results / victory speech")),
            CanonicalTopic::ElectionVictoryResults
        );
        assert_eq!(
            normalize(Some("Right-wing fear narratives")),
            CanonicalTopic::PolicyPositions
        );
    }

    #[test]
    fn test_or_label_takes_first_alternative() {
        assert_eq!(
            normalize(Some("Coverage of Modi visit OR Bollywood reaction")),
            CanonicalTopic::IndiaHinduRelations
        );
        // Resolution continues on the first alternative only — the second
        // would have matched a different group
        assert_eq!(
            normalize(Some("Trump feud coverage OR Election night results")),
            CanonicalTopic::TrumpConflicts
        );
    }

    #[test]
    fn test_keyword_fallback() {
        assert_eq!(
            normalize(Some("Some new election win coverage")),
            CanonicalTopic::ElectionVictoryResults
        );
        assert_eq!(
            normalize(Some("Mayoral TAX plan explained")),
            CanonicalTopic::PolicyPositions
        );
    }

    #[test]
    fn test_unrecognized_label_uses_default() {
        assert_eq!(
            normalize(Some("totally unrelated gibberish")),
            CanonicalTopic::DEFAULT
        );
    }

    #[test]
    fn test_policy_group_beats_controversy_group() {
        // Matches both "policing" (policy group) and "controversy"
        // (catch-all group); policy is checked first
        assert_eq!(
            normalize(Some("Policing budget controversy")),
            CanonicalTopic::PolicyPositions
        );
    }
}
