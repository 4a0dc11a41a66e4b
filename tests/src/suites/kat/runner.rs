//! Runs known-answer cases against the engine.

use tinyblake_algorithms::{Blake2s, Blake2sConfig, HashFunction};
use tinyblake_api::error::ResultExt;

use super::error::{KatError, Result};
use super::model::{KatCase, KatSummary};

/// Hash one case with `config`, feeding the input in `chunk`-sized pieces
pub fn run_case(case: &KatCase, config: Blake2sConfig, chunk: usize) -> Result<()> {
    let input = hex::decode(&case.input)?;
    let mut hasher = Blake2s::with_config(config);
    for piece in input.chunks(chunk.max(1)) {
        hasher.update(piece).with_context("KAT update")?;
    }
    let digest = hasher.finalize().with_context("KAT finalize")?;
    let actual = hex::encode(digest);
    if actual != case.out {
        return Err(KatError::Mismatch {
            input: case.input.clone(),
            expected: case.out.clone(),
            actual,
        });
    }
    Ok(())
}

/// Run every case through the one-shot facade and tally the results
pub fn run_cases(cases: &[KatCase], skipped: usize) -> (KatSummary, Vec<KatError>) {
    let mut summary = KatSummary {
        skip: skipped,
        ..KatSummary::default()
    };
    let mut failures = Vec::new();
    for case in cases {
        let outcome = hex::decode(&case.input)
            .map_err(KatError::from)
            .and_then(|input| Ok(tinyblake::hash(&input)?))
            .and_then(|digest| {
                let actual = hex::encode(digest);
                if actual == case.out {
                    Ok(())
                } else {
                    Err(KatError::Mismatch {
                        input: case.input.clone(),
                        expected: case.out.clone(),
                        actual,
                    })
                }
            });
        match outcome {
            Ok(()) => summary.success += 1,
            Err(e) => {
                summary.fail += 1;
                failures.push(e);
            }
        }
    }
    (summary, failures)
}
