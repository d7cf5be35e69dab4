//! Adapt/test partitioning of a lexicon.
//!
//! The adapt side draws from a truncated half of every open-class table;
//! the test side draws from what the adapt pass provably never touched.
//! Verbs are the one category without structural disjointness: the test
//! verb table is rebuilt from the full verb set (filtered by the surviving
//! test noun classes) and the adapt pass's verb bookkeeping is carried
//! into the test selector so unused verbs are preferred. By-phrases are
//! partitioned by assigning one pre-authored group to each side.

use ahash::HashMap;
use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::lexicon::{Lexicon, NounClass, VerbFrame};
use crate::select::{ArgumentBundle, SelectionError, Selector, UsageSets};

/// The two bundle batches of one adapt/test split, with the usage
/// bookkeeping of each generation pass.
#[derive(Debug, Clone)]
pub struct AdaptTestPair {
    pub adapt: Vec<ArgumentBundle>,
    pub test: Vec<ArgumentBundle>,
    pub adapt_usage: UsageSets,
    pub test_usage: UsageSets,
}

/// Splits the lexicon and runs the selector once per side. Selection
/// failures propagate; they mean the lexicon is too small for the
/// requested sizes.
pub fn generate_adapt_test(
    lexicon: &Lexicon,
    n_adapt: usize,
    n_test: usize,
    rng: &mut impl Rng,
) -> Result<AdaptTestPair, SelectionError> {
    let [first, second] = &lexicon.by_phrase_groups;
    let (adapt_group, test_group) = if rng.random_bool(0.5) {
        (first, second)
    } else {
        (second, first)
    };

    let adapt_lexicon = adapt_sublexicon(lexicon, rng);
    let mut adapt_selector = Selector::new(&adapt_lexicon, adapt_group);
    let adapt = (0..n_adapt)
        .map(|_| adapt_selector.select(rng))
        .collect::<Result<Vec<_>, _>>()?;
    let adapt_usage = adapt_selector.usage;

    let test_lexicon = test_sublexicon(lexicon, &adapt_usage);
    let mut test_selector =
        Selector::with_used_verbs(&test_lexicon, test_group, adapt_usage.verbs.clone());
    let test = (0..n_test)
        .map(|_| test_selector.select(rng))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AdaptTestPair {
        adapt,
        test,
        adapt_usage,
        test_usage: test_selector.usage,
    })
}

/// The adapt half: a shuffled copy of each noun class truncated to
/// `len/2 + 1`, adjective and adverb classes truncated to `len/2`, and
/// the verb table filtered to frames still selectable on this side.
fn adapt_sublexicon(lexicon: &Lexicon, rng: &mut impl Rng) -> Lexicon {
    let mut noun_classes: HashMap<String, NounClass> = HashMap::default();
    for key in lexicon.noun_classes.keys().sorted() {
        let class = &lexicon.noun_classes[key.as_str()];
        let mut nouns = class.nouns.clone();
        nouns.shuffle(rng);
        nouns.truncate(nouns.len() / 2 + 1);
        noun_classes.insert(
            key.clone(),
            NounClass {
                nouns,
                matrix_verbs: class.matrix_verbs.clone(),
                adjective_classes: class.adjective_classes.clone(),
            },
        );
    }
    let adjectives = halved(&lexicon.adjectives, rng);
    let adverbs = halved(&lexicon.adverbs, rng);
    let verbs = filter_verbs(&lexicon.verbs, &noun_classes);
    Lexicon {
        noun_classes,
        verbs,
        adjectives,
        adverbs,
        plurals: lexicon.plurals.clone(),
        by_phrase_groups: lexicon.by_phrase_groups.clone(),
    }
}

/// The test remainder: everything the adapt pass never consumed. Noun
/// classes with fewer than two unused lemmas are dropped, and the verb
/// table is refiltered against the surviving classes.
fn test_sublexicon(lexicon: &Lexicon, usage: &UsageSets) -> Lexicon {
    let mut noun_classes: HashMap<String, NounClass> = HashMap::default();
    for (key, class) in &lexicon.noun_classes {
        let nouns: Vec<String> = class
            .nouns
            .iter()
            .filter(|n| !usage.nouns.contains(n.as_str()))
            .cloned()
            .collect();
        if nouns.len() > 1 {
            noun_classes.insert(
                key.clone(),
                NounClass {
                    nouns,
                    matrix_verbs: class.matrix_verbs.clone(),
                    adjective_classes: class.adjective_classes.clone(),
                },
            );
        }
    }
    let adjectives = subtracted(&lexicon.adjectives, &usage.adjectives);
    let adverbs = subtracted(&lexicon.adverbs, &usage.adverbs);
    let verbs = filter_verbs(&lexicon.verbs, &noun_classes);
    Lexicon {
        noun_classes,
        verbs,
        adjectives,
        adverbs,
        plurals: lexicon.plurals.clone(),
        by_phrase_groups: lexicon.by_phrase_groups.clone(),
    }
}

fn halved(
    table: &HashMap<String, Vec<String>>,
    rng: &mut impl Rng,
) -> HashMap<String, Vec<String>> {
    let mut out: HashMap<String, Vec<String>> = HashMap::default();
    for key in table.keys().sorted() {
        let mut lemmas = table[key.as_str()].clone();
        lemmas.shuffle(rng);
        lemmas.truncate(lemmas.len() / 2);
        out.insert(key.clone(), lemmas);
    }
    out
}

fn subtracted(
    table: &HashMap<String, Vec<String>>,
    used: &ahash::HashSet<String>,
) -> HashMap<String, Vec<String>> {
    table
        .iter()
        .map(|(key, lemmas)| {
            let rest = lemmas
                .iter()
                .filter(|l| !used.contains(l.as_str()))
                .cloned()
                .collect();
            (key.clone(), rest)
        })
        .collect()
}

/// Keeps only verbs whose subject and object class lists both intersect
/// the side's noun classes, with the lists themselves filtered.
fn filter_verbs(
    verbs: &HashMap<String, VerbFrame>,
    classes: &HashMap<String, NounClass>,
) -> HashMap<String, VerbFrame> {
    let mut out: HashMap<String, VerbFrame> = HashMap::default();
    for (verb, frame) in verbs {
        let subject_classes: Vec<String> = frame
            .subject_classes
            .iter()
            .filter(|c| classes.contains_key(c.as_str()))
            .cloned()
            .collect();
        let object_classes: Vec<String> = frame
            .object_classes
            .iter()
            .filter(|c| classes.contains_key(c.as_str()))
            .cloned()
            .collect();
        if !subject_classes.is_empty() && !object_classes.is_empty() {
            out.insert(
                verb.clone(),
                VerbFrame {
                    subject_classes,
                    object_classes,
                    adverb_classes: frame.adverb_classes.clone(),
                    by_phrases: frame.by_phrases.clone(),
                },
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn adapt_sublexicon_takes_truncated_halves() {
        let lexicon = Lexicon::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let adapt = adapt_sublexicon(&lexicon, &mut rng);
        for (key, class) in &lexicon.noun_classes {
            let half = &adapt.noun_classes[key.as_str()];
            assert_eq!(half.nouns.len(), class.nouns.len() / 2 + 1);
            assert!(half.nouns.iter().all(|n| class.nouns.contains(n)));
        }
        for (key, lemmas) in &lexicon.adjectives {
            assert_eq!(adapt.adjectives[key.as_str()].len(), lemmas.len() / 2);
        }
        assert_eq!(adapt.verbs.len(), lexicon.verbs.len());
    }

    #[test]
    fn test_sublexicon_excludes_consumed_items_and_dead_classes() {
        let lexicon = Lexicon::builtin();
        let mut usage = UsageSets::default();
        for noun in &lexicon.noun_classes["achievable"].nouns {
            usage.nouns.insert(noun.clone());
        }
        usage.nouns.insert("lawyer".to_string());
        usage.adjectives.insert("honest".to_string());

        let test = test_sublexicon(&lexicon, &usage);
        assert!(!test.noun_classes.contains_key("achievable"));
        assert!(!test.noun_classes["human"].nouns.contains(&"lawyer".to_string()));
        assert!(!test.adjectives["character"].contains(&"honest".to_string()));

        // Verbs whose only object class was achievable go with it.
        assert!(!test.verbs.contains_key("awarded"));
        assert!(!test.verbs.contains_key("promised"));
        assert_eq!(
            test.verbs["presented"].object_classes,
            vec!["artifact".to_string()]
        );
    }

    #[test]
    fn by_phrase_groups_go_to_opposite_sides() {
        let lexicon = Lexicon::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let pair = generate_adapt_test(&lexicon, 5, 5, &mut rng).unwrap();
        let [first, second] = &lexicon.by_phrase_groups;
        let group_of = |phrase: &str| -> usize {
            if phrase == crate::lexicon::REFLEXIVE_PLURAL {
                // The plural reflexive can only arise from the group that
                // holds the singular reflexives.
                usize::from(
                    !first
                        .iter()
                        .any(|p| crate::lexicon::REFLEXIVE_SINGULAR.contains(&p.as_str())),
                )
            } else if first.iter().any(|p| p == phrase) {
                0
            } else {
                assert!(second.iter().any(|p| p == phrase), "unknown by-phrase `{phrase}`");
                1
            }
        };
        let adapt_groups: ahash::HashSet<usize> =
            pair.adapt.iter().map(|b| group_of(&b.by_phrase)).collect();
        let test_groups: ahash::HashSet<usize> =
            pair.test.iter().map(|b| group_of(&b.by_phrase)).collect();
        assert!(adapt_groups.len() <= 1);
        assert!(test_groups.len() <= 1);
        if let (Some(a), Some(t)) = (adapt_groups.iter().next(), test_groups.iter().next()) {
            assert_ne!(a, t);
        }
    }

    #[test]
    fn partitions_share_no_open_class_nouns() {
        let lexicon = Lexicon::builtin();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let pair = generate_adapt_test(&lexicon, 10, 10, &mut rng).unwrap();
        for noun in &pair.test_usage.nouns {
            assert!(!pair.adapt_usage.nouns.contains(noun), "shared noun `{noun}`");
        }
        for adj in &pair.test_usage.adjectives {
            assert!(
                !pair.adapt_usage.adjectives.contains(adj),
                "shared adjective `{adj}`"
            );
        }
        for adv in &pair.test_usage.adverbs {
            assert!(
                !pair.adapt_usage.adverbs.contains(adv),
                "shared adverb `{adv}`"
            );
        }
    }
}
