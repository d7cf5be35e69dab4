//! Generation of linguistically controlled relative-clause stimuli.
//!
//! A [`Lexicon`] describes semantic noun classes, transitive verb frames and
//! closed adjective/adverb/by-phrase inventories. The [`Selector`] samples
//! argument bundles that satisfy every selectional constraint, the renderer
//! spells each bundle out in sixteen parallel surface forms (subject and
//! object relatives, passives, coordination controls and their variants),
//! and the [`partition`] and [`batch`] modules split the lexicon into
//! vocabulary-disjoint adapt and test halves and write one file per list
//! and condition.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use rc_stimuli::{Lexicon, RenderPolicy, Selector, render};
//!
//! let lexicon = Lexicon::builtin();
//! let group = lexicon.by_phrase_groups[0].clone();
//! let mut selector = Selector::new(&lexicon, &group);
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let bundle = selector.select(&mut rng).unwrap();
//! for (condition, form) in render(&bundle, &RenderPolicy::default(), &mut rng) {
//!     println!("{}: {}", condition.name(), form.sentence);
//! }
//! ```

pub mod batch;
pub mod lexicon;
pub mod lexicons;
pub mod partition;
pub mod render;
pub mod select;

pub use batch::{BatchConfig, BatchError};
pub use lexicon::{Lexicon, LexiconError, Number};
pub use partition::{AdaptTestPair, generate_adapt_test};
pub use render::{
    Condition, CoordinationPolicy, Placement, PlacementPolicy, RenderPolicy, Rendered, render,
};
pub use select::{ArgumentBundle, NounPhrase, SelectionError, Selector, UsageSets};

#[cfg(test)]
mod tests;
