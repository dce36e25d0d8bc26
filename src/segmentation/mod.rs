//! Instruction segmentation: stages that turn raw instruction blocks into
//! atomic step texts.
//!
//! Clause splitting, atomic segmentation, merging and filtering are pure
//! string heuristics. Only coreference consults the tagger, to find the head
//! noun of every ingredient line.

mod atomic;
mod clauses;
mod coreference;
mod filter;
mod merge;

pub use atomic::split_atomic_steps;
pub use clauses::split_clauses;
pub use coreference::CoreferenceResolver;
pub use filter::{filter_non_steps, is_non_step};
pub use merge::{merge_fragments, FragmentMerger, MergeState};

use crate::config::Vocabulary;
use crate::tagger::Tagger;
use log::debug;

/// Run stages 1 to 5 over a recipe's instruction blocks, in order.
///
/// Every returned step is non-empty and has no leading connector.
pub fn segment_instructions<T: Tagger + ?Sized>(
    blocks: &[String],
    ingredient_lines: &[String],
    vocab: &Vocabulary,
    tagger: &T,
    filter: bool,
) -> Vec<String> {
    let atomic: Vec<String> = blocks
        .iter()
        .flat_map(|block| split_clauses(block))
        .flat_map(|clause| split_atomic_steps(&clause, vocab))
        .collect();
    debug!(
        "Segmented {} instruction blocks into {} atomic steps",
        blocks.len(),
        atomic.len()
    );

    let resolved = CoreferenceResolver::new(ingredient_lines, tagger).resolve(atomic);
    let merged = merge_fragments(resolved, vocab);
    let steps = if filter {
        filter_non_steps(merged, vocab)
    } else {
        merged
    };

    steps
        .into_iter()
        .map(|step| atomic::strip_leading_connectors(&step).to_string())
        .filter(|step| !step.is_empty())
        .collect()
}
