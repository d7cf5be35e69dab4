//! Typed lexicon tables and their load-time validation.
//!
//! A [`Lexicon`] holds every hand-authored resource the generator draws
//! from: noun classes, verb subcategorization frames, adjective and adverb
//! classes, the plural map and the two by-phrase groups. Cross-references
//! between tables are checked once, when the lexicon is loaded, so the
//! sampler never has to discover an inconsistency mid-sentence.

use ahash::{HashMap, HashSet};
use serde::Deserialize;
use std::fmt::Display;
use thiserror::Error;

/// Class key that selects the determiner `my`.
pub const HUMAN_CLASS: &str = "human";
/// Class key whose objects take possessive determiners.
pub const ACHIEVABLE_CLASS: &str = "achievable";
/// Class key that forces `its` on an achievable object.
pub const ANTIPOWER_CLASS: &str = "antipower";
/// Adverb class whose members prefer post-verbal placement.
pub const TEMPORAL_ADVERB_CLASS: &str = "time";

/// Words that may intensify an adjective, drawn uniformly.
pub const INTENSIFIERS: [&str; 4] = ["extremely", "quite", "really", "rather"];
/// Reflexive by-phrases that agree with a singular subject.
pub const REFLEXIVE_SINGULAR: [&str; 3] = ["by himself", "by herself", "by itself"];
/// The reflexive form substituted under a plural subject.
pub const REFLEXIVE_PLURAL: &str = "by themselves";

/// Grammatical number of a noun phrase, decided at selection time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Singular => write!(f, "singular"),
            Number::Plural => write!(f, "plural"),
        }
    }
}

/// A semantic noun class: its lemmas, the verbs that can serve as matrix
/// verb when a member of this class heads the matrix clause, and the
/// adjective classes its members accept.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NounClass {
    pub nouns: Vec<String>,
    pub matrix_verbs: Vec<String>,
    pub adjective_classes: Vec<String>,
}

/// Subcategorization frame of one verb lemma.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VerbFrame {
    pub subject_classes: Vec<String>,
    pub object_classes: Vec<String>,
    pub adverb_classes: Vec<String>,
    pub by_phrases: Vec<String>,
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("noun class `{0}` has no nouns")]
    EmptyNounClass(String),
    #[error("verb `{verb}` is listed as a matrix verb of `{class}` but does not select it")]
    BadMatrixVerb { class: String, verb: String },
    #[error("`{referrer}` refers to unknown noun class `{class}`")]
    UnknownNounClass { referrer: String, class: String },
    #[error("`{referrer}` refers to unknown adjective class `{class}`")]
    UnknownAdjectiveClass { referrer: String, class: String },
    #[error("verb `{verb}` refers to unknown adverb class `{class}`")]
    UnknownAdverbClass { verb: String, class: String },
    #[error("verb `{0}` has an empty subject or object class list")]
    UnusableVerb(String),
    #[error("verb `{verb}` lists by-phrase `{phrase}` that belongs to no by-phrase group")]
    UnknownByPhrase { verb: String, phrase: String },
    #[error("the singular reflexive by-phrases must all be authored in one group")]
    SplitReflexives,
    #[error("by-phrase `{0}` appears in both groups")]
    OverlappingByPhraseGroups(String),
    #[error("noun `{0}` has no plural form")]
    MissingPlural(String),
    #[error("`{0}` cannot be classified as singular or plural")]
    UnknownNumber(String),
    #[error("`{0}` is both a singular and a plural form")]
    AmbiguousNumber(String),
    #[error("plural forms of `{0}` and `{1}` collide")]
    CollidingPlurals(String, String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The full set of lexical resources one generation pass draws from.
///
/// The adapt/test partitioner produces smaller `Lexicon` values from a full
/// one, so everything downstream of the partitioner is agnostic about which
/// side it is generating for.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    pub noun_classes: HashMap<String, NounClass>,
    pub verbs: HashMap<String, VerbFrame>,
    pub adjectives: HashMap<String, Vec<String>>,
    pub adverbs: HashMap<String, Vec<String>>,
    pub plurals: HashMap<String, String>,
    pub by_phrase_groups: [Vec<String>; 2],
}

impl Lexicon {
    /// Parses a lexicon from its JSON document and validates every
    /// cross-reference between tables.
    pub fn from_json(s: &str) -> Result<Self, LexiconError> {
        let lexicon: Lexicon = serde_json::from_str(s)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// The built-in English lexicon from [`crate::lexicons::ENGLISH`].
    pub fn builtin() -> Self {
        Self::from_json(crate::lexicons::ENGLISH).expect("the built-in lexicon is well-formed")
    }

    /// Checks the table invariants: matrix verbs must select the class that
    /// lists them, every referenced class key must resolve, every noun must
    /// pluralize, and the two by-phrase groups must be disjoint.
    pub fn validate(&self) -> Result<(), LexiconError> {
        for (key, class) in &self.noun_classes {
            if class.nouns.is_empty() {
                return Err(LexiconError::EmptyNounClass(key.clone()));
            }
            for verb in &class.matrix_verbs {
                let selects = self.verbs.get(verb).is_some_and(|frame| {
                    frame.subject_classes.contains(key) || frame.object_classes.contains(key)
                });
                if !selects {
                    return Err(LexiconError::BadMatrixVerb {
                        class: key.clone(),
                        verb: verb.clone(),
                    });
                }
            }
            for adj_class in &class.adjective_classes {
                if !self.adjectives.contains_key(adj_class) {
                    return Err(LexiconError::UnknownAdjectiveClass {
                        referrer: key.clone(),
                        class: adj_class.clone(),
                    });
                }
            }
            for noun in &class.nouns {
                if !self.plurals.contains_key(noun) {
                    return Err(LexiconError::MissingPlural(noun.clone()));
                }
            }
        }

        for (verb, frame) in &self.verbs {
            if frame.subject_classes.is_empty() || frame.object_classes.is_empty() {
                return Err(LexiconError::UnusableVerb(verb.clone()));
            }
            for class in frame.subject_classes.iter().chain(&frame.object_classes) {
                if !self.noun_classes.contains_key(class) {
                    return Err(LexiconError::UnknownNounClass {
                        referrer: verb.clone(),
                        class: class.clone(),
                    });
                }
            }
            for class in &frame.adverb_classes {
                if !self.adverbs.contains_key(class) {
                    return Err(LexiconError::UnknownAdverbClass {
                        verb: verb.clone(),
                        class: class.clone(),
                    });
                }
            }
            for phrase in &frame.by_phrases {
                if !self.by_phrase_groups.iter().any(|g| g.contains(phrase)) {
                    return Err(LexiconError::UnknownByPhrase {
                        verb: verb.clone(),
                        phrase: phrase.clone(),
                    });
                }
            }
        }

        let [first, second] = &self.by_phrase_groups;
        if let Some(shared) = first.iter().find(|p| second.contains(p)) {
            return Err(LexiconError::OverlappingByPhraseGroups(shared.clone()));
        }
        // The plural rewrite maps every singular reflexive to the same
        // surface form, so splitting them across groups would leak
        // `by themselves` into both partitions.
        for group in &self.by_phrase_groups {
            let reflexives = group
                .iter()
                .filter(|p| REFLEXIVE_SINGULAR.contains(&p.as_str()))
                .count();
            if reflexives != 0 && reflexives != REFLEXIVE_SINGULAR.len() {
                return Err(LexiconError::SplitReflexives);
            }
        }

        let mut plural_forms: HashMap<&str, &str> = HashMap::default();
        for (singular, plural) in &self.plurals {
            if self.plurals.contains_key(plural.as_str()) {
                return Err(LexiconError::AmbiguousNumber(plural.clone()));
            }
            if let Some(other) = plural_forms.insert(plural.as_str(), singular.as_str()) {
                return Err(LexiconError::CollidingPlurals(
                    other.to_string(),
                    singular.clone(),
                ));
            }
        }
        Ok(())
    }

    /// Classifies a surface noun as singular or plural by plural-map
    /// membership. An unknown lemma is a data-authoring error.
    pub fn classify(&self, noun: &str) -> Result<Number, LexiconError> {
        if self.plurals.contains_key(noun) {
            Ok(Number::Singular)
        } else if self.plurals.values().any(|p| p == noun) {
            Ok(Number::Plural)
        } else {
            Err(LexiconError::UnknownNumber(noun.to_string()))
        }
    }

    /// The plural form of a noun lemma.
    pub(crate) fn plural_of(&self, noun: &str) -> &str {
        self.plurals
            .get(noun)
            .expect("every noun lemma has a plural form after validation")
    }

    /// Every surface form of every open-class lemma, for overlap checks.
    pub fn open_class_vocabulary(&self) -> HashSet<String> {
        let mut vocab: HashSet<String> = HashSet::default();
        for class in self.noun_classes.values() {
            for noun in &class.nouns {
                vocab.insert(noun.clone());
                vocab.insert(self.plural_of(noun).to_string());
            }
        }
        vocab.extend(self.adjectives.values().flatten().cloned());
        vocab.extend(self.adverbs.values().flatten().cloned());
        vocab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lexicon_is_valid() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.noun_classes.contains_key(HUMAN_CLASS));
        assert!(lexicon.adverbs.contains_key(TEMPORAL_ADVERB_CLASS));
    }

    #[test]
    fn toy_lexicon_is_valid() {
        Lexicon::from_json(crate::lexicons::TOY).unwrap();
    }

    #[test]
    fn classify_uses_the_plural_map() {
        let lexicon = Lexicon::from_json(crate::lexicons::TOY).unwrap();
        assert_eq!(lexicon.classify("teacher").unwrap(), Number::Singular);
        assert_eq!(lexicon.classify("teachers").unwrap(), Number::Plural);
        assert!(matches!(
            lexicon.classify("giraffe"),
            Err(LexiconError::UnknownNumber(_))
        ));
    }

    #[test]
    fn bad_matrix_verb_is_rejected() {
        let mut lexicon = Lexicon::from_json(crate::lexicons::TOY).unwrap();
        lexicon
            .noun_classes
            .get_mut("thing")
            .unwrap()
            .matrix_verbs
            .push("polished".to_string());
        assert!(matches!(
            lexicon.validate(),
            Err(LexiconError::BadMatrixVerb { .. })
        ));
    }

    #[test]
    fn unusable_verb_is_rejected() {
        let mut lexicon = Lexicon::from_json(crate::lexicons::TOY).unwrap();
        lexicon
            .verbs
            .get_mut("admired")
            .unwrap()
            .object_classes
            .clear();
        assert!(matches!(
            lexicon.validate(),
            Err(LexiconError::UnusableVerb(_))
        ));
    }

    #[test]
    fn overlapping_by_phrase_groups_are_rejected() {
        let mut lexicon = Lexicon::from_json(crate::lexicons::TOY).unwrap();
        let phrase = lexicon.by_phrase_groups[0][0].clone();
        lexicon.by_phrase_groups[1].push(phrase);
        assert!(matches!(
            lexicon.validate(),
            Err(LexiconError::OverlappingByPhraseGroups(_))
        ));
    }

    #[test]
    fn missing_plural_is_rejected() {
        let mut lexicon = Lexicon::from_json(crate::lexicons::TOY).unwrap();
        lexicon
            .noun_classes
            .get_mut("thing")
            .unwrap()
            .nouns
            .push("giraffe".to_string());
        assert!(matches!(
            lexicon.validate(),
            Err(LexiconError::MissingPlural(_))
        ));
    }
}
