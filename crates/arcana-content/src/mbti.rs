//! Personality-type profiles.
//!
//! Short descriptions of the sixteen MBTI types, each paired with the Major
//! Arcana card that shares its temperament.

use std::str::FromStr;

use arcana_core::{Card, CardKey};
use serde::Serialize;

use crate::error::ContentError;

/// One of the sixteen personality types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PersonalityType {
    /// INTJ, the Architect.
    Intj,
    /// INTP, the Logician.
    Intp,
    /// ENTJ, the Commander.
    Entj,
    /// ENTP, the Debater.
    Entp,
    /// INFJ, the Advocate.
    Infj,
    /// INFP, the Mediator.
    Infp,
    /// ENFJ, the Protagonist.
    Enfj,
    /// ENFP, the Campaigner.
    Enfp,
    /// ISTJ, the Logistician.
    Istj,
    /// ISFJ, the Defender.
    Isfj,
    /// ESTJ, the Executive.
    Estj,
    /// ESFJ, the Consul.
    Esfj,
    /// ISTP, the Virtuoso.
    Istp,
    /// ISFP, the Adventurer.
    Isfp,
    /// ESTP, the Entrepreneur.
    Estp,
    /// ESFP, the Entertainer.
    Esfp,
}

/// Descriptive text for a personality type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PersonalityProfile {
    /// Four-letter code, e.g. `"INFJ"`.
    pub code: &'static str,
    /// Common nickname.
    pub nickname: &'static str,
    /// One-paragraph summary.
    pub summary: &'static str,
    /// What the type does well.
    pub strengths: &'static [&'static str],
    /// Where the type tends to struggle.
    pub growth_edges: &'static [&'static str],
    /// Key of the Major Arcana card that mirrors the type.
    pub affinity_card: CardKey,
}

impl PersonalityType {
    /// All types, analysts first.
    pub const ALL: [PersonalityType; 16] = [
        Self::Intj,
        Self::Intp,
        Self::Entj,
        Self::Entp,
        Self::Infj,
        Self::Infp,
        Self::Enfj,
        Self::Enfp,
        Self::Istj,
        Self::Isfj,
        Self::Estj,
        Self::Esfj,
        Self::Istp,
        Self::Isfp,
        Self::Estp,
        Self::Esfp,
    ];

    /// The type's profile.
    pub fn profile(self) -> &'static PersonalityProfile {
        &PROFILES[self as usize]
    }

    /// Four-letter code.
    pub fn code(self) -> &'static str {
        self.profile().code
    }

    /// Temperament group: Analyst (NT), Diplomat (NF), Sentinel (SJ) or
    /// Explorer (SP).
    pub fn temperament(self) -> &'static str {
        let code = self.code().as_bytes();
        match (code[1], code[2], code[3]) {
            (b'N', b'T', _) => "Analyst",
            (b'N', b'F', _) => "Diplomat",
            (b'S', _, b'J') => "Sentinel",
            _ => "Explorer",
        }
    }

    /// The Major Arcana card that mirrors the type.
    pub fn affinity_card(self) -> Option<Card> {
        Card::from_key(self.profile().affinity_card)
    }
}

impl FromStr for PersonalityType {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        // Drop an identity suffix such as "-A" or "-T".
        let wanted = wanted.split('-').next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|t| t.code() == wanted)
            .ok_or_else(|| ContentError::UnknownPersonalityType(s.to_string()))
    }
}

impl std::fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

static PROFILES: [PersonalityProfile; 16] = [
    PersonalityProfile {
        code: "INTJ",
        nickname: "The Architect",
        summary: "Strategic and independent, builds long-range plans and holds them to a high standard.",
        strengths: &["Strategic vision", "Self-direction", "Decisiveness"],
        growth_edges: &["Impatience with feelings", "Perfectionism"],
        affinity_card: CardKey(4),
    },
    PersonalityProfile {
        code: "INTP",
        nickname: "The Logician",
        summary: "Curious and analytical, happiest taking ideas apart to see how they work.",
        strengths: &["Original thinking", "Objectivity", "Precision"],
        growth_edges: &["Follow-through", "Overthinking"],
        affinity_card: CardKey(9),
    },
    PersonalityProfile {
        code: "ENTJ",
        nickname: "The Commander",
        summary: "Bold and organized, turns a goal into a plan and a plan into momentum.",
        strengths: &["Leadership", "Efficiency", "Confidence"],
        growth_edges: &["Patience", "Listening"],
        affinity_card: CardKey(7),
    },
    PersonalityProfile {
        code: "ENTP",
        nickname: "The Debater",
        summary: "Quick and inventive, loves a challenge and an argument almost as much as a new idea.",
        strengths: &["Ingenuity", "Adaptability", "Wit"],
        growth_edges: &["Finishing what they start", "Tact"],
        affinity_card: CardKey(1),
    },
    PersonalityProfile {
        code: "INFJ",
        nickname: "The Advocate",
        summary: "Quietly intense idealist who reads people well and works toward meaning.",
        strengths: &["Insight", "Compassion", "Principle"],
        growth_edges: &["Burnout", "Taking criticism personally"],
        affinity_card: CardKey(2),
    },
    PersonalityProfile {
        code: "INFP",
        nickname: "The Mediator",
        summary: "Gentle and imaginative, guided by an inner compass of values.",
        strengths: &["Empathy", "Creativity", "Authenticity"],
        growth_edges: &["Practicality", "Self-criticism"],
        affinity_card: CardKey(17),
    },
    PersonalityProfile {
        code: "ENFJ",
        nickname: "The Protagonist",
        summary: "Warm and persuasive, draws people together and helps them grow.",
        strengths: &["Charisma", "Encouragement", "Reliability"],
        growth_edges: &["Over-giving", "Approval seeking"],
        affinity_card: CardKey(19),
    },
    PersonalityProfile {
        code: "ENFP",
        nickname: "The Campaigner",
        summary: "Enthusiastic free spirit who sees possibility everywhere.",
        strengths: &["Enthusiasm", "Curiosity", "Warmth"],
        growth_edges: &["Focus", "Overcommitting"],
        affinity_card: CardKey(0),
    },
    PersonalityProfile {
        code: "ISTJ",
        nickname: "The Logistician",
        summary: "Dependable and thorough, honors commitments and proven methods.",
        strengths: &["Responsibility", "Consistency", "Attention to detail"],
        growth_edges: &["Flexibility", "Expressing feelings"],
        affinity_card: CardKey(5),
    },
    PersonalityProfile {
        code: "ISFJ",
        nickname: "The Defender",
        summary: "Caring and steady, quietly looks after the people and places they love.",
        strengths: &["Loyalty", "Patience", "Practical care"],
        growth_edges: &["Saying no", "Change"],
        affinity_card: CardKey(3),
    },
    PersonalityProfile {
        code: "ESTJ",
        nickname: "The Executive",
        summary: "Direct and organized, brings order and clear standards to any group.",
        strengths: &["Organization", "Honesty", "Dedication"],
        growth_edges: &["Rigidity", "Sensitivity to others"],
        affinity_card: CardKey(11),
    },
    PersonalityProfile {
        code: "ESFJ",
        nickname: "The Consul",
        summary: "Sociable and attentive, keeps communities connected and cared for.",
        strengths: &["Generosity", "Harmony", "Loyalty"],
        growth_edges: &["Need for approval", "Conflict avoidance"],
        affinity_card: CardKey(14),
    },
    PersonalityProfile {
        code: "ISTP",
        nickname: "The Virtuoso",
        summary: "Calm and hands-on, learns by doing and stays cool in a crisis.",
        strengths: &["Practical problem solving", "Composure", "Independence"],
        growth_edges: &["Long-term planning", "Opening up"],
        affinity_card: CardKey(10),
    },
    PersonalityProfile {
        code: "ISFP",
        nickname: "The Adventurer",
        summary: "Sensitive and artistic, lives in the present and by personal values.",
        strengths: &["Aesthetic sense", "Kindness", "Spontaneity"],
        growth_edges: &["Planning ahead", "Handling conflict"],
        affinity_card: CardKey(6),
    },
    PersonalityProfile {
        code: "ESTP",
        nickname: "The Entrepreneur",
        summary: "Energetic and perceptive, acts first and adjusts on the fly.",
        strengths: &["Boldness", "Resourcefulness", "Directness"],
        growth_edges: &["Patience", "Risk awareness"],
        affinity_card: CardKey(8),
    },
    PersonalityProfile {
        code: "ESFP",
        nickname: "The Entertainer",
        summary: "Spontaneous and playful, brings joy and presence to every room.",
        strengths: &["Warmth", "Enjoyment of life", "Observation"],
        growth_edges: &["Long-term focus", "Sitting with discomfort"],
        affinity_card: CardKey(21),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn profiles_line_up_with_variants() {
        for t in PersonalityType::ALL {
            let expected = format!("{t:?}").to_uppercase();
            assert_eq!(t.code(), expected);
        }
    }

    #[test]
    fn parse_codes() {
        assert_eq!("infj".parse::<PersonalityType>().unwrap(), PersonalityType::Infj);
        assert_eq!(" ENTP ".parse::<PersonalityType>().unwrap(), PersonalityType::Entp);
        assert_eq!("ISTJ-A".parse::<PersonalityType>().unwrap(), PersonalityType::Istj);
        assert!(matches!(
            "XYZW".parse::<PersonalityType>(),
            Err(ContentError::UnknownPersonalityType(_))
        ));
        assert!("".parse::<PersonalityType>().is_err());
    }

    #[test]
    fn temperaments() {
        assert_eq!(PersonalityType::Intj.temperament(), "Analyst");
        assert_eq!(PersonalityType::Enfp.temperament(), "Diplomat");
        assert_eq!(PersonalityType::Isfj.temperament(), "Sentinel");
        assert_eq!(PersonalityType::Estp.temperament(), "Explorer");
    }

    #[test]
    fn affinity_cards_are_distinct_major_arcana() {
        let mut seen = HashSet::new();
        for t in PersonalityType::ALL {
            let card = t.affinity_card().unwrap();
            assert!(card.is_major(), "{t} maps to {}", card.name);
            assert!(seen.insert(card.key), "{t} reuses {}", card.name);
        }
    }

    #[test]
    fn display_and_serialize() {
        assert_eq!(PersonalityType::Infp.to_string(), "INFP");
        assert_eq!(
            serde_json::to_string(&PersonalityType::Infp).unwrap(),
            "\"INFP\""
        );
    }
}
