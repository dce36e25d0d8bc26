use crate::config::Vocabulary;
use log::debug;

/// What the merger is currently waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeState {
    Normal,
    /// A section header such as "For the sauce:" waits for its first step
    HoldingHeader,
    /// An unfinished fragment ("Cover and") waits for its continuation
    HoldingPhrase,
}

/// Reattaches section headers and dangling fragments to the step that follows
#[derive(Debug)]
pub struct FragmentMerger<'a> {
    vocab: &'a Vocabulary,
    header: Option<String>,
    phrase: Option<String>,
    merged: Vec<String>,
}

impl<'a> FragmentMerger<'a> {
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self {
            vocab,
            header: None,
            phrase: None,
            merged: Vec::new(),
        }
    }

    pub fn state(&self) -> MergeState {
        if self.phrase.is_some() {
            MergeState::HoldingPhrase
        } else if self.header.is_some() {
            MergeState::HoldingHeader
        } else {
            MergeState::Normal
        }
    }

    pub fn push(&mut self, step: String) {
        if is_section_header(&step, self.vocab) {
            if let Some(previous) = self.header.replace(step) {
                debug!("Header '{}' replaced before any step followed it", previous);
            }
            return;
        }

        let text = match self.phrase.take() {
            Some(phrase) => format!("{} {}", phrase, step),
            None => step,
        };
        if ends_with_dangling_connector(&text) {
            self.phrase = Some(text);
            return;
        }

        let text = match self.header.take() {
            Some(header) => format!("{} {}", header, text),
            None => text,
        };
        self.merged.push(text);
    }

    /// Emit whatever is still pending, phrase first, then header
    pub fn finish(mut self) -> Vec<String> {
        if self.state() != MergeState::Normal {
            debug!("Flushing pending fragments at end of recipe");
        }
        self.merged.extend(self.phrase.take());
        self.merged.extend(self.header.take());
        self.merged
    }
}

/// Run the merger over a whole step stream
pub fn merge_fragments(steps: Vec<String>, vocab: &Vocabulary) -> Vec<String> {
    let mut merger = FragmentMerger::new(vocab);
    for step in steps {
        merger.push(step);
    }
    merger.finish()
}

fn is_section_header(step: &str, vocab: &Vocabulary) -> bool {
    step.trim_end().ends_with(':')
        && !words(step).any(|word| vocab.is_cooking_verb(&word))
}

fn ends_with_dangling_connector(text: &str) -> bool {
    let text = text.trim_end();
    if text.ends_with(',') {
        return true;
    }
    let lowered: Vec<String> = words(text).collect();
    match lowered.as_slice() {
        [.., last] if last == "and" || last == "to" => true,
        [.., and, then] => and == "and" && then == "then",
        _ => false,
    }
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
}
