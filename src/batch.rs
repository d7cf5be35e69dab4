//! Batch generation of stimulus files.
//!
//! One adapt/test split is generated per list and per size pair, and each
//! bundle is rendered exactly once so the sixteen per-condition files of a
//! list stay row-aligned: line `i` of every file realises the same argument
//! bundle.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::lexicon::Lexicon;
use crate::partition::generate_adapt_test;
use crate::render::{Condition, RenderPolicy, Rendered, render};
use crate::select::{ArgumentBundle, SelectionError};

/// Column header shared by every output file.
pub const HEADER: &str = "sentence, rc_startpos, rc_length, subj_num";

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// What to generate and where to put it.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub out_dir: PathBuf,
    /// One adapt/test split per name; names become part of the file names.
    pub list_names: Vec<String>,
    /// `(n_adapt, n_test)` pairs; each pair gets its own directory level.
    pub sizes: Vec<(usize, usize)>,
    pub policy: RenderPolicy,
}

/// Writes `<out>/{adapt,test}/<n_adapt>/list<name>_<condition>.txt` for
/// every size pair, list and condition.
pub fn run(lexicon: &Lexicon, config: &BatchConfig, rng: &mut impl Rng) -> Result<(), BatchError> {
    for &(n_adapt, n_test) in &config.sizes {
        let adapt_dir = config.out_dir.join("adapt").join(n_adapt.to_string());
        let test_dir = config.out_dir.join("test").join(n_adapt.to_string());
        fs::create_dir_all(&adapt_dir)?;
        fs::create_dir_all(&test_dir)?;
        for name in &config.list_names {
            let pair = generate_adapt_test(lexicon, n_adapt, n_test, rng)?;
            write_list(&adapt_dir, name, &pair.adapt, &config.policy, rng)?;
            write_list(&test_dir, name, &pair.test, &config.policy, rng)?;
            info!(list = name.as_str(), n_adapt, n_test, "wrote stimulus list");
        }
    }
    Ok(())
}

fn write_list(
    dir: &Path,
    name: &str,
    bundles: &[ArgumentBundle],
    policy: &RenderPolicy,
    rng: &mut impl Rng,
) -> Result<(), BatchError> {
    let rendered: Vec<Vec<(Condition, Rendered)>> = bundles
        .iter()
        .map(|bundle| render(bundle, policy, rng))
        .collect();
    for (i, condition) in Condition::ALL.iter().enumerate() {
        let path = dir.join(format!("list{name}_{}.txt", condition.name()));
        let mut out = BufWriter::new(File::create(&path)?);
        writeln!(out, "{HEADER}")?;
        for forms in &rendered {
            let (form_condition, row) = &forms[i];
            debug_assert_eq!(form_condition, condition);
            writeln!(
                out,
                "{}, {}, {}, {}",
                row.sentence, row.rc_start, row.rc_length, row.head_number
            )?;
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn run_writes_one_file_per_condition_and_side() {
        let lexicon = Lexicon::from_json(crate::lexicons::TOY).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig {
            out_dir: dir.path().to_path_buf(),
            list_names: vec!["1".to_string()],
            sizes: vec![(3, 3)],
            policy: RenderPolicy::default(),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        run(&lexicon, &config, &mut rng).unwrap();

        for side in ["adapt", "test"] {
            let side_dir = dir.path().join(side).join("3");
            let mut files: Vec<String> = fs::read_dir(&side_dir)
                .unwrap()
                .map(|e| e.unwrap().file_name().into_string().unwrap())
                .collect();
            files.sort();
            assert_eq!(files.len(), Condition::ALL.len());
            for condition in Condition::ALL {
                assert!(files.contains(&format!("list1_{}.txt", condition.name())));
            }
            let contents =
                fs::read_to_string(side_dir.join("list1_src.txt")).unwrap();
            let lines: Vec<&str> = contents.lines().collect();
            assert_eq!(lines[0], HEADER);
            assert_eq!(lines.len(), 4);
        }
    }
}
