const TERMINATORS: &[char] = &['.', '!', '?'];

/// Split one raw instruction block into clauses.
///
/// Semicolons count as sentence terminators. A terminator only ends a clause
/// when whitespace or the end of the block follows it, so decimals like
/// "1.5 cups" stay intact. Terminators are dropped from the output.
pub fn split_clauses(block: &str) -> Vec<String> {
    let text = block.replace(';', ". ");
    let mut clauses = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let ends_clause =
            TERMINATORS.contains(&c) && chars.peek().map_or(true, |next| next.is_whitespace());
        if ends_clause {
            push_clause(&mut clauses, &current);
            current.clear();
        } else {
            current.push(c);
        }
    }
    push_clause(&mut clauses, &current);

    clauses
}

fn push_clause(clauses: &mut Vec<String>, text: &str) {
    let clause = text.trim().trim_end_matches(TERMINATORS).trim();
    if !clause.is_empty() {
        clauses.push(clause.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_sentence_end() {
        assert_eq!(
            split_clauses("Mix the flour and sugar in a bowl. Bake at 350F for 20 minutes."),
            vec!["Mix the flour and sugar in a bowl", "Bake at 350F for 20 minutes"]
        );
    }

    #[test]
    fn test_semicolons_split() {
        assert_eq!(
            split_clauses("Drain the pasta; reserve a cup of water"),
            vec!["Drain the pasta", "reserve a cup of water"]
        );
        assert_eq!(split_clauses("Stir;serve"), vec!["Stir", "serve"]);
    }

    #[test]
    fn test_decimals_are_not_terminators() {
        assert_eq!(
            split_clauses("Add 1.5 cups of stock. Simmer!"),
            vec!["Add 1.5 cups of stock", "Simmer"]
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(split_clauses("").is_empty());
        assert!(split_clauses("  .  ; ").is_empty());
    }

    #[test]
    fn test_repeated_terminators_collapse() {
        assert_eq!(split_clauses("Enjoy!! Done..."), vec!["Enjoy", "Done"]);
    }
}
