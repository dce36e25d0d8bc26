use crate::config::Vocabulary;
use log::debug;

/// Whether a line is attribution or metadata ("Recipe by ...") instead of an instruction
pub fn is_non_step(step: &str, vocab: &Vocabulary) -> bool {
    let lowered = step.trim().to_lowercase();
    vocab
        .non_step_prefixes
        .iter()
        .any(|prefix| lowered.starts_with(prefix.as_str()))
}

pub fn filter_non_steps(steps: Vec<String>, vocab: &Vocabulary) -> Vec<String> {
    steps
        .into_iter()
        .filter(|step| {
            let drop = is_non_step(step, vocab);
            if drop {
                debug!("Dropping non-step line '{}'", step);
            }
            !drop
        })
        .collect()
}
