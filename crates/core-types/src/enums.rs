use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed age partition used by the age-group breakdown.
///
/// Variants are declared in display order, so deriving `Ord` gives the
/// bracket ordering (`Below 20` first, `50+` last) for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBracket {
    #[serde(rename = "Below 20")]
    Below20,
    #[serde(rename = "20s")]
    Twenties,
    #[serde(rename = "30s")]
    Thirties,
    #[serde(rename = "40s")]
    Forties,
    #[serde(rename = "50+")]
    FiftyPlus,
}

impl AgeBracket {
    /// All brackets in display order.
    pub const ALL: [AgeBracket; 5] = [
        AgeBracket::Below20,
        AgeBracket::Twenties,
        AgeBracket::Thirties,
        AgeBracket::Forties,
        AgeBracket::FiftyPlus,
    ];

    /// Assigns an age to its bracket. Total: every age maps to exactly one bracket.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=19 => AgeBracket::Below20,
            20..=29 => AgeBracket::Twenties,
            30..=39 => AgeBracket::Thirties,
            40..=49 => AgeBracket::Forties,
            _ => AgeBracket::FiftyPlus,
        }
    }

    /// The human-readable label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Below20 => "Below 20",
            AgeBracket::Twenties => "20s",
            AgeBracket::Thirties => "30s",
            AgeBracket::Forties => "40s",
            AgeBracket::FiftyPlus => "50+",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_ages_map_to_specified_brackets() {
        let cases = [
            (0, AgeBracket::Below20),
            (19, AgeBracket::Below20),
            (20, AgeBracket::Twenties),
            (29, AgeBracket::Twenties),
            (30, AgeBracket::Thirties),
            (39, AgeBracket::Thirties),
            (40, AgeBracket::Forties),
            (49, AgeBracket::Forties),
            (50, AgeBracket::FiftyPlus),
            (97, AgeBracket::FiftyPlus),
        ];
        for (age, expected) in cases {
            assert_eq!(AgeBracket::from_age(age), expected, "age {age}");
        }
    }

    #[test]
    fn assignment_is_exhaustive_over_plausible_ages() {
        for age in 0..=120 {
            let bracket = AgeBracket::from_age(age);
            assert!(AgeBracket::ALL.contains(&bracket));
        }
    }

    #[test]
    fn all_is_in_display_order() {
        let mut sorted = AgeBracket::ALL;
        sorted.sort();
        assert_eq!(sorted, AgeBracket::ALL);
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&AgeBracket::Below20).unwrap();
        assert_eq!(json, "\"Below 20\"");
        let back: AgeBracket = serde_json::from_str("\"50+\"").unwrap();
        assert_eq!(back, AgeBracket::FiftyPlus);
    }
}
