//! Surface realization of an [`ArgumentBundle`].
//!
//! [`render`] turns one bundle into all sixteen condition forms. Two
//! decisions are drawn once per bundle and shared by every form: the
//! adverb placement and whether the relative-clause-internal argument is
//! realized as a coordinated noun phrase. Sentences are assembled from
//! phrase chunks through a word-counting [`Assembler`], so the reported
//! relative-clause offset and length are closed-form counts over exactly
//! the components that produced the string.

use rand::Rng;

use crate::lexicon::Number;
use crate::select::{Adverb, ArgumentBundle, NounPhrase};

/// The seven base frames, their `that`-substituted variants and the two
/// by-phrase variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    Src,
    Orc,
    Orrc,
    Prc,
    Prrc,
    Ocont,
    Scont,
    SrcThat,
    OrcThat,
    OrrcThat,
    PrcThat,
    PrrcThat,
    OcontThat,
    ScontThat,
    SrcBy,
    OrcBy,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum BaseForm {
    Src,
    Orc,
    Orrc,
    Prc,
    Prrc,
    Ocont,
    Scont,
}

impl Condition {
    pub const ALL: [Condition; 16] = [
        Condition::Src,
        Condition::Orc,
        Condition::Orrc,
        Condition::Prc,
        Condition::Prrc,
        Condition::Ocont,
        Condition::Scont,
        Condition::SrcThat,
        Condition::OrcThat,
        Condition::OrrcThat,
        Condition::PrcThat,
        Condition::PrrcThat,
        Condition::OcontThat,
        Condition::ScontThat,
        Condition::SrcBy,
        Condition::OrcBy,
    ];

    /// The condition name used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            Condition::Src => "src",
            Condition::Orc => "orc",
            Condition::Orrc => "orrc",
            Condition::Prc => "prc",
            Condition::Prrc => "prrc",
            Condition::Ocont => "ocont",
            Condition::Scont => "scont",
            Condition::SrcThat => "src_that",
            Condition::OrcThat => "orc_that",
            Condition::OrrcThat => "orrc_that",
            Condition::PrcThat => "prc_that",
            Condition::PrrcThat => "prrc_that",
            Condition::OcontThat => "ocont_that",
            Condition::ScontThat => "scont_that",
            Condition::SrcBy => "src_by",
            Condition::OrcBy => "orc_by",
        }
    }

    fn base(self) -> BaseForm {
        match self {
            Condition::Src | Condition::SrcThat | Condition::SrcBy => BaseForm::Src,
            Condition::Orc | Condition::OrcThat | Condition::OrcBy => BaseForm::Orc,
            Condition::Orrc | Condition::OrrcThat => BaseForm::Orrc,
            Condition::Prc | Condition::PrcThat => BaseForm::Prc,
            Condition::Prrc | Condition::PrrcThat => BaseForm::Prrc,
            Condition::Ocont | Condition::OcontThat => BaseForm::Ocont,
            Condition::Scont | Condition::ScontThat => BaseForm::Scont,
        }
    }

    fn that_substituted(self) -> bool {
        matches!(
            self,
            Condition::SrcThat
                | Condition::OrcThat
                | Condition::OrrcThat
                | Condition::PrcThat
                | Condition::PrrcThat
                | Condition::OcontThat
                | Condition::ScontThat
        )
    }

    fn with_by_phrase(self) -> bool {
        matches!(self, Condition::SrcBy | Condition::OrcBy)
    }
}

/// Where the relative-clause adverb and the matrix-clause adverb land.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Relative-clause adverb at the end of the clause instead of before
    /// its verb.
    pub rc_postverbal: bool,
    /// Matrix adverb after the matrix object instead of before the matrix
    /// verb.
    pub matrix_postverbal: bool,
}

/// Placement selection: the temporally-weighted random rule, or a fixed
/// placement for fully deterministic output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlacementPolicy {
    Weighted,
    Fixed(Placement),
}

/// Whether the relative-clause-internal argument is coordinated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CoordinationPolicy {
    Random(f64),
    Always,
    Never,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderPolicy {
    pub placement: PlacementPolicy,
    pub coordination: CoordinationPolicy,
}

impl Default for RenderPolicy {
    fn default() -> Self {
        RenderPolicy {
            placement: PlacementPolicy::Weighted,
            coordination: CoordinationPolicy::Random(1.0 / 3.0),
        }
    }
}

/// One rendered surface form with its metadata record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub sentence: String,
    /// Word index at which the relative clause starts.
    pub rc_start: usize,
    /// Word length of the relative clause.
    pub rc_length: usize,
    /// Number of the head noun of the sentence-initial noun phrase.
    pub head_number: Number,
}

/// Renders all sixteen conditions for one bundle. The placement and
/// coordination draws happen once, up front, so every form of the same
/// bundle is structurally parallel.
pub fn render(
    bundle: &ArgumentBundle,
    policy: &RenderPolicy,
    rng: &mut impl Rng,
) -> Vec<(Condition, Rendered)> {
    let placement = decide_placement(bundle, policy.placement, rng);
    let coordinated = match policy.coordination {
        CoordinationPolicy::Always => true,
        CoordinationPolicy::Never => false,
        CoordinationPolicy::Random(p) => rng.random_bool(p),
    };
    let frame = Frame {
        bundle,
        placement,
        coordinated,
    };
    Condition::ALL
        .iter()
        .map(|&condition| (condition, frame.build(condition)))
        .collect()
}

/// Temporal adverbs read oddly clause-initially, so a temporal
/// relative-clause adverb forces the postverbal slot and a temporal matrix
/// adverb forces the post-object slot; free axes are drawn uniformly.
fn decide_placement(
    bundle: &ArgumentBundle,
    policy: PlacementPolicy,
    rng: &mut impl Rng,
) -> Placement {
    match policy {
        PlacementPolicy::Fixed(placement) => placement,
        PlacementPolicy::Weighted => {
            let temporal = |adv: &Option<Adverb>| adv.as_ref().is_some_and(|a| a.temporal);
            let rc = temporal(&bundle.rc_adv);
            let matrix = temporal(&bundle.subjmv_adv) || temporal(&bundle.objmv_adv);
            Placement {
                rc_postverbal: rc || rng.random_bool(0.5),
                matrix_postverbal: matrix || rng.random_bool(0.5),
            }
        }
    }
}

struct Frame<'b> {
    bundle: &'b ArgumentBundle,
    placement: Placement,
    coordinated: bool,
}

impl Frame<'_> {
    fn build(&self, condition: Condition) -> Rendered {
        let that = condition.that_substituted();
        let by = condition.with_by_phrase();
        match condition.base() {
            BaseForm::Src => self.src(that, by),
            BaseForm::Orc => self.orc(that, by, true, false),
            BaseForm::Orrc => self.orc(that, false, false, false),
            BaseForm::Prc => self.orc(that, false, true, true),
            BaseForm::Prrc => self.orc(that, false, false, true),
            BaseForm::Ocont => self.control(that, false),
            BaseForm::Scont => self.control(that, true),
        }
    }

    /// The relative-clause-internal subject, coordinated when the
    /// coordination toggle fired.
    fn rc_subject(&self) -> String {
        if self.coordinated {
            self.bundle.subj_coord.clone()
        } else {
            self.bundle.subj.text()
        }
    }

    fn rc_object(&self) -> String {
        if self.coordinated {
            self.bundle.obj_coord.clone()
        } else {
            self.bundle.obj.text()
        }
    }

    fn head(&self, np: &NounPhrase, that: bool) -> String {
        if that {
            np.text_with_determiner("that")
        } else {
            np.text()
        }
    }

    fn auxiliary(&self) -> &'static str {
        if self.bundle.obj.number == Number::Singular {
            "was"
        } else {
            "were"
        }
    }

    /// Subject-relative: `subj [that A verb obj] MV obj2`.
    fn src(&self, that: bool, by: bool) -> Rendered {
        let b = self.bundle;
        let mut a = Assembler::default();
        a.push(&self.head(&b.subj, that));
        a.begin_rc();
        a.push("that");
        if !self.placement.rc_postverbal {
            a.push_adv(&b.rc_adv);
        }
        a.push(&b.verb);
        a.push(&self.rc_object());
        if self.placement.rc_postverbal {
            a.push_adv(&b.rc_adv);
        }
        if by {
            a.push(&b.by_phrase);
        }
        a.end_rc();
        if !self.placement.matrix_postverbal {
            a.push_adv(&b.subjmv_adv);
        }
        a.push(&b.subj_mv);
        a.push(&b.obj2.text());
        if self.placement.matrix_postverbal {
            a.push_adv(&b.subjmv_adv);
        }
        a.finish(b.subj.number)
    }

    /// The object-headed family: `obj [(that) (was) subj A verb] MV obj3`,
    /// covering ORC, ORRC and the two passives.
    fn orc(&self, that: bool, by: bool, relativizer: bool, passive: bool) -> Rendered {
        let b = self.bundle;
        let mut a = Assembler::default();
        a.push(&self.head(&b.obj, that));
        a.begin_rc();
        if relativizer {
            a.push("that");
        }
        if passive {
            if relativizer {
                a.push(self.auxiliary());
            }
            if !self.placement.rc_postverbal {
                a.push_adv(&b.rc_adv);
            }
            a.push(&b.verb);
            a.push("by");
            a.push(&self.rc_subject());
        } else {
            a.push(&self.rc_subject());
            if !self.placement.rc_postverbal {
                a.push_adv(&b.rc_adv);
            }
            a.push(&b.verb);
        }
        if self.placement.rc_postverbal {
            a.push_adv(&b.rc_adv);
        }
        if by {
            a.push(&b.by_phrase);
        }
        a.end_rc();
        if !self.placement.matrix_postverbal {
            a.push_adv(&b.objmv_adv);
        }
        a.push(&b.obj_mv);
        a.push(&b.obj3.text());
        if self.placement.matrix_postverbal {
            a.push_adv(&b.objmv_adv);
        }
        a.finish(b.obj.number)
    }

    /// Coordinated-clause baselines. The span between the initial NP and
    /// `and` is the region structurally parallel to a relative clause and
    /// is what the metrics report.
    fn control(&self, that: bool, subject_initial: bool) -> Rendered {
        let b = self.bundle;
        let mut a = Assembler::default();
        let (head, inner, matrix_adv, matrix_verb, matrix_obj) = if subject_initial {
            (&b.subj, &b.obj, &b.subjmv_adv, &b.subj_mv, &b.obj2)
        } else {
            (&b.obj, &b.subj, &b.objmv_adv, &b.obj_mv, &b.obj3)
        };
        a.push(&self.head(head, that));
        a.begin_rc();
        if !self.placement.rc_postverbal {
            a.push_adv(&b.rc_adv);
        }
        a.push(&b.verb);
        a.push(&inner.text());
        if self.placement.rc_postverbal {
            a.push_adv(&b.rc_adv);
        }
        a.end_rc();
        a.push("and");
        if !self.placement.matrix_postverbal {
            a.push_adv(matrix_adv);
        }
        a.push(matrix_verb);
        a.push(&matrix_obj.text());
        if self.placement.matrix_postverbal {
            a.push_adv(matrix_adv);
        }
        a.finish(head.number)
    }
}

/// Joins phrase chunks into a sentence while tracking word offsets, so the
/// relative-clause metrics cannot drift from the concatenation order.
#[derive(Debug, Default)]
struct Assembler {
    parts: Vec<String>,
    words: usize,
    rc_start: usize,
    rc_length: usize,
}

impl Assembler {
    fn push(&mut self, chunk: &str) {
        if chunk.is_empty() {
            return;
        }
        self.words += chunk.split_whitespace().count();
        self.parts.push(chunk.to_string());
    }

    fn push_adv(&mut self, adverb: &Option<Adverb>) {
        if let Some(adverb) = adverb {
            self.push(&adverb.text);
        }
    }

    fn begin_rc(&mut self) {
        self.rc_start = self.words;
    }

    fn end_rc(&mut self) {
        self.rc_length = self.words - self.rc_start;
    }

    fn finish(self, head_number: Number) -> Rendered {
        Rendered {
            sentence: format!("{} .", self.parts.join(" ")),
            rc_start: self.rc_start,
            rc_length: self.rc_length,
            head_number,
        }
    }
}
