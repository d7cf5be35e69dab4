//! The constrained lexical sampler.
//!
//! [`Selector::select`] assembles one [`ArgumentBundle`] per call: a main
//! verb, two matrix verbs, four determined and inflected noun phrases,
//! up to three adverbs, a by-phrase and two coordinated noun phrases.
//! Within a sentence no open-class lemma repeats; across sentences the
//! selector records everything it consumed in [`UsageSets`] so the
//! adapt/test partitioner can subtract it from the other side's lexicon.

use ahash::HashSet;
use itertools::Itertools;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use thiserror::Error;
use tracing::warn;

use crate::lexicon::{
    ACHIEVABLE_CLASS, ANTIPOWER_CLASS, HUMAN_CLASS, INTENSIFIERS, Lexicon, Number,
    REFLEXIVE_PLURAL, REFLEXIVE_SINGULAR, TEMPORAL_ADVERB_CLASS,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Every candidate verb was tried and none could supply matrix verbs
    /// for both the subject and the object clause. A data-authoring error,
    /// not a condition to paper over with a sentinel.
    #[error("no verb frame can supply matrix verbs for both clauses")]
    NoFeasibleVerb,
    #[error("verb `{0}` has no by-phrase in the active group")]
    NoByPhrase(String),
    #[error("no coordination partner exists for `{0}`")]
    NoCoordinationLemma(String),
}

/// A determined, optionally modified, inflected noun phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounPhrase {
    pub determiner: String,
    /// Adjective with optional intensifier, e.g. `"extremely honest"`.
    pub adjective: Option<String>,
    /// The surface noun, already pluralized when `number` is plural.
    pub noun: String,
    pub number: Number,
}

impl NounPhrase {
    pub fn text(&self) -> String {
        self.text_with_determiner(&self.determiner)
    }

    /// The phrase with its determiner replaced, for the `that`-substituted
    /// conditions.
    pub fn text_with_determiner(&self, determiner: &str) -> String {
        match &self.adjective {
            Some(adj) => format!("{determiner} {adj} {}", self.noun),
            None => format!("{determiner} {}", self.noun),
        }
    }
}

/// An adverb tagged with whether it came from the temporal class, which
/// the renderer's placement rule needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adverb {
    pub text: String,
    pub temporal: bool,
}

/// Everything the renderer needs for one sentence, resolved down to
/// surface strings. Built fresh per sentence and consumed immediately.
#[derive(Debug, Clone)]
pub struct ArgumentBundle {
    pub verb: String,
    pub subj_mv: String,
    pub obj_mv: String,
    pub subj: NounPhrase,
    pub obj: NounPhrase,
    pub obj2: NounPhrase,
    pub obj3: NounPhrase,
    pub rc_adv: Option<Adverb>,
    pub subjmv_adv: Option<Adverb>,
    pub objmv_adv: Option<Adverb>,
    pub by_phrase: String,
    /// Subject NP coordinated with a second lemma from its class.
    pub subj_coord: String,
    /// Object NP coordinated with a second lemma from its class.
    pub obj_coord: String,
}

/// Open-class items consumed while generating one partition. Grows
/// monotonically; the partitioner subtracts it from the other side.
#[derive(Debug, Clone, Default)]
pub struct UsageSets {
    pub verbs: HashSet<String>,
    pub nouns: HashSet<String>,
    pub adjectives: HashSet<String>,
    pub adverbs: HashSet<String>,
}

/// Draws argument bundles from one (already partitioned) lexicon.
pub struct Selector<'a> {
    lexicon: &'a Lexicon,
    by_group: &'a [String],
    pub usage: UsageSets,
}

impl<'a> Selector<'a> {
    pub fn new(lexicon: &'a Lexicon, by_group: &'a [String]) -> Self {
        Selector {
            lexicon,
            by_group,
            usage: UsageSets::default(),
        }
    }

    /// Resumes with the verb bookkeeping of an earlier pass, so the test
    /// partition prefers verbs the adapt partition never touched.
    pub fn with_used_verbs(lexicon: &'a Lexicon, by_group: &'a [String], verbs: HashSet<String>) -> Self {
        Selector {
            lexicon,
            by_group,
            usage: UsageSets {
                verbs,
                ..UsageSets::default()
            },
        }
    }

    pub fn select(&mut self, rng: &mut impl Rng) -> Result<ArgumentBundle, SelectionError> {
        let lexicon = self.lexicon;
        let (verb, subj_class, subj_mv, obj_class, obj_mv) = self.choose_verbs(rng)?;

        let (subj_det, obj_det) = determiners(&subj_class, &obj_class, rng);

        let subj_nouns = &lexicon.noun_classes[subj_class.as_str()].nouns;
        let subj_lemma = subj_nouns
            .choose(rng)
            .expect("noun classes are non-empty after validation")
            .clone();

        let obj_nouns = &lexicon.noun_classes[obj_class.as_str()].nouns;
        let mut obj_lemma = obj_nouns
            .choose(rng)
            .expect("noun classes are non-empty after validation")
            .clone();
        if obj_nouns.len() > 1 {
            // Resample until distinct; a singleton class accepts subj == obj.
            while obj_lemma == subj_lemma {
                obj_lemma = obj_nouns
                    .choose(rng)
                    .expect("noun classes are non-empty after validation")
                    .clone();
            }
        }

        let (obj2_class, obj2_lemma) = self.secondary_object(&subj_mv, &subj_lemma, &obj_lemma, rng);
        let (_, obj2_det) = determiners(&subj_class, &obj2_class, rng);
        let (obj3_class, obj3_lemma) = self.secondary_object(&obj_mv, &subj_lemma, &obj_lemma, rng);
        let (_, obj3_det) = determiners(&obj_class, &obj3_class, rng);

        let mut sentence_adjs: HashSet<String> = HashSet::default();
        let subj_adj = self.adjective(&subj_class, &mut sentence_adjs, rng);
        let obj_adj = self.adjective(&obj_class, &mut sentence_adjs, rng);
        let obj2_adj = self.adjective(&obj2_class, &mut sentence_adjs, rng);
        let obj3_adj = self.adjective(&obj3_class, &mut sentence_adjs, rng);

        // At least one of subj/obj and the object-matrix object must stay
        // singular or the that-substituted forms become ungrammatical.
        let [subj_pl, obj_pl, obj2_pl, obj3_pl] = plural_flags(rng);

        let subj = self.noun_phrase(subj_det, subj_adj, &subj_lemma, subj_pl);
        let obj = self.noun_phrase(obj_det, obj_adj, &obj_lemma, obj_pl);
        let obj2 = self.noun_phrase(obj2_det, obj2_adj, &obj2_lemma, obj2_pl);
        let obj3 = self.noun_phrase(obj3_det, obj3_adj, &obj3_lemma, obj3_pl);

        let mut sentence_advs: HashSet<String> = HashSet::default();
        let rc_adv = self.adverb(&verb, &mut sentence_advs, rng);
        let subjmv_adv = self.adverb(&subj_mv, &mut sentence_advs, rng);
        let objmv_adv = self.adverb(&obj_mv, &mut sentence_advs, rng);

        let subj_coord = self.coordinate(
            &subj_class,
            &subj,
            &subj_lemma,
            [&obj_lemma, &obj3_lemma],
            rng,
        )?;
        let obj_coord = self.coordinate(
            &obj_class,
            &obj,
            &obj_lemma,
            [&subj_lemma, &obj2_lemma],
            rng,
        )?;

        let by_phrase = self.by_phrase(&verb, subj.number, rng)?;

        Ok(ArgumentBundle {
            verb,
            subj_mv,
            obj_mv,
            subj,
            obj,
            obj2,
            obj3,
            rc_adv,
            subjmv_adv,
            objmv_adv,
            by_phrase,
            subj_coord,
            obj_coord,
        })
    }

    /// Picks the relative-clause verb together with a matrix verb for the
    /// subject clause and one for the object clause. Nothing is recorded
    /// in the usage sets until a candidate supplies both matrix verbs, so
    /// a failed candidate leaves the bookkeeping untouched.
    fn choose_verbs(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<(String, String, String, String, String), SelectionError> {
        let mut candidates: Vec<&String> = self.lexicon.verbs.keys().sorted().collect();
        candidates.shuffle(rng);
        let (fresh, stale): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|v| !self.usage.verbs.contains(v.as_str()));

        for verb in fresh.into_iter().chain(stale) {
            let frame = &self.lexicon.verbs[verb.as_str()];
            let subj = self.find_matrix_verb(&frame.subject_classes, verb, rng);
            let obj = self.find_matrix_verb(&frame.object_classes, verb, rng);
            if let (Some((subj_class, subj_mv)), Some((obj_class, obj_mv))) = (subj, obj) {
                self.usage.verbs.insert(verb.clone());
                self.usage.verbs.insert(subj_mv.clone());
                self.usage.verbs.insert(obj_mv.clone());
                return Ok((verb.clone(), subj_class, subj_mv, obj_class, obj_mv));
            }
        }
        Err(SelectionError::NoFeasibleVerb)
    }

    /// Walks a shuffled class list looking for a matrix verb that exists
    /// in the current verb table, preferring unused verbs and falling back
    /// to a used one only when nothing fresh remains anywhere. The clause
    /// verb itself is never a candidate; a sentence must not repeat it.
    fn find_matrix_verb(
        &self,
        class_list: &[String],
        clause_verb: &str,
        rng: &mut impl Rng,
    ) -> Option<(String, String)> {
        let mut classes: Vec<&String> = class_list.iter().collect();
        classes.shuffle(rng);
        let mut fallback = None;
        for class in classes {
            let Some(noun_class) = self.lexicon.noun_classes.get(class.as_str()) else {
                continue;
            };
            let mut verbs: Vec<&String> = noun_class
                .matrix_verbs
                .iter()
                .filter(|v| self.lexicon.verbs.contains_key(v.as_str()))
                .collect();
            verbs.shuffle(rng);
            for verb in verbs {
                if verb.as_str() == clause_verb {
                    continue;
                }
                if !self.usage.verbs.contains(verb.as_str()) {
                    return Some((class.clone(), verb.clone()));
                }
                if fallback.is_none() {
                    fallback = Some((class.clone(), verb.clone()));
                }
            }
        }
        fallback
    }

    /// Object for a matrix clause: shuffle the matrix verb's object
    /// classes and take the first lemma colliding with neither the subject
    /// nor the object. When no disjoint lemma exists at all, the collision
    /// is kept and flagged.
    fn secondary_object(
        &self,
        matrix_verb: &str,
        subj_lemma: &str,
        obj_lemma: &str,
        rng: &mut impl Rng,
    ) -> (String, String) {
        let frame = &self.lexicon.verbs[matrix_verb];
        let mut classes: Vec<&String> = frame.object_classes.iter().collect();
        classes.shuffle(rng);
        for class in &classes {
            let Some(noun_class) = self.lexicon.noun_classes.get(class.as_str()) else {
                continue;
            };
            if let Some(lemma) = noun_class
                .nouns
                .iter()
                .find(|n| n.as_str() != subj_lemma && n.as_str() != obj_lemma)
            {
                return ((*class).clone(), lemma.clone());
            }
        }
        warn!(
            matrix_verb,
            "no secondary object disjoint from subject and object"
        );
        let class = classes
            .first()
            .expect("verb frames have object classes after validation");
        ((*class).clone(), obj_lemma.to_string())
    }

    /// 50% no adjective; otherwise the first lemma of a shuffled class
    /// walk that has not yet modified anything in this sentence, with a
    /// 2-in-5 chance of an intensifier.
    fn adjective(
        &mut self,
        class_key: &str,
        excluded: &mut HashSet<String>,
        rng: &mut impl Rng,
    ) -> Option<String> {
        if !rng.random_bool(0.5) {
            return None;
        }
        let lexicon = self.lexicon;
        let mut adj_classes: Vec<&String> = lexicon.noun_classes[class_key]
            .adjective_classes
            .iter()
            .collect();
        adj_classes.shuffle(rng);
        for adj_class in adj_classes {
            let mut lemmas: Vec<&String> = lexicon.adjectives[adj_class.as_str()].iter().collect();
            lemmas.shuffle(rng);
            if let Some(adj) = lemmas.into_iter().find(|a| !excluded.contains(a.as_str())) {
                excluded.insert(adj.clone());
                self.usage.adjectives.insert(adj.clone());
                let text = if rng.random_range(0..5) < 2 {
                    let intensifier = INTENSIFIERS[rng.random_range(0..INTENSIFIERS.len())];
                    format!("{intensifier} {adj}")
                } else {
                    adj.clone()
                };
                return Some(text);
            }
        }
        None
    }

    /// 50% no adverb; otherwise the first unused lemma of a shuffled walk
    /// over the verb's adverb classes, tagged temporal when it came from
    /// the `time` class.
    fn adverb(
        &mut self,
        verb: &str,
        excluded: &mut HashSet<String>,
        rng: &mut impl Rng,
    ) -> Option<Adverb> {
        if !rng.random_bool(0.5) {
            return None;
        }
        let lexicon = self.lexicon;
        let mut adv_classes: Vec<&String> =
            lexicon.verbs[verb].adverb_classes.iter().collect();
        adv_classes.shuffle(rng);
        for adv_class in adv_classes {
            let mut lemmas: Vec<&String> = lexicon.adverbs[adv_class.as_str()].iter().collect();
            lemmas.shuffle(rng);
            if let Some(adv) = lemmas.into_iter().find(|a| !excluded.contains(a.as_str())) {
                excluded.insert(adv.clone());
                self.usage.adverbs.insert(adv.clone());
                return Some(Adverb {
                    text: adv.clone(),
                    temporal: adv_class == TEMPORAL_ADVERB_CLASS,
                });
            }
        }
        None
    }

    fn noun_phrase(
        &mut self,
        determiner: String,
        adjective: Option<String>,
        lemma: &str,
        plural: bool,
    ) -> NounPhrase {
        self.usage.nouns.insert(lemma.to_string());
        let (noun, number) = if plural {
            (self.lexicon.plural_of(lemma).to_string(), Number::Plural)
        } else {
            (lemma.to_string(), Number::Singular)
        };
        NounPhrase {
            determiner,
            adjective,
            noun,
            number,
        }
    }

    /// Coordinates a head NP with a second, singular lemma from the same
    /// class, preferring one disjoint from the rest of the sentence.
    fn coordinate(
        &mut self,
        class_key: &str,
        head: &NounPhrase,
        head_lemma: &str,
        avoid: [&str; 2],
        rng: &mut impl Rng,
    ) -> Result<String, SelectionError> {
        let mut candidates: Vec<&String> = self.lexicon.noun_classes[class_key]
            .nouns
            .iter()
            .filter(|n| n.as_str() != head_lemma)
            .collect();
        candidates.shuffle(rng);
        let lemma = candidates
            .iter()
            .find(|n| !avoid.contains(&n.as_str()))
            .or_else(|| {
                warn!(
                    class = class_key,
                    "no coordination partner disjoint from the rest of the sentence"
                );
                candidates.first()
            })
            .ok_or_else(|| SelectionError::NoCoordinationLemma(head_lemma.to_string()))?;
        self.usage.nouns.insert((*lemma).clone());
        let determiner = if class_key == HUMAN_CLASS { "my" } else { "the" };
        Ok(format!("{} and {determiner} {lemma}", head.text()))
    }

    /// Uniform draw from the verb's by-phrases restricted to the
    /// partition's group, with reflexive agreement for plural subjects.
    fn by_phrase(
        &self,
        verb: &str,
        subj_number: Number,
        rng: &mut impl Rng,
    ) -> Result<String, SelectionError> {
        let pool: Vec<&String> = self.lexicon.verbs[verb]
            .by_phrases
            .iter()
            .filter(|p| self.by_group.contains(*p))
            .collect();
        let phrase = pool
            .choose(rng)
            .ok_or_else(|| SelectionError::NoByPhrase(verb.to_string()))?;
        if subj_number == Number::Plural && REFLEXIVE_SINGULAR.contains(&phrase.as_str()) {
            Ok(REFLEXIVE_PLURAL.to_string())
        } else {
            Ok((*phrase).clone())
        }
    }
}

fn determiners(subj_class: &str, obj_class: &str, rng: &mut impl Rng) -> (String, String) {
    let subj_det = if subj_class == HUMAN_CLASS { "my" } else { "the" };
    let obj_det = if obj_class == HUMAN_CLASS {
        "my"
    } else if obj_class == ACHIEVABLE_CLASS {
        if subj_class == ANTIPOWER_CLASS {
            "its"
        } else if rng.random_bool(0.5) {
            "his"
        } else {
            "her"
        }
    } else {
        "the"
    };
    (subj_det.to_string(), obj_det.to_string())
}

/// Plurality flags for subj/obj/obj2/obj3, each plural with probability
/// 2/5, rejection-sampled until neither both subj and obj nor obj3 are
/// plural.
fn plural_flags(rng: &mut impl Rng) -> [bool; 4] {
    loop {
        let flags: [bool; 4] = std::array::from_fn(|_| rng.random_range(0..5) < 2);
        let [subj, obj, _, obj3] = flags;
        if !(subj && obj) && !obj3 {
            return flags;
        }
    }
}
