//! Case-duplicate removal for token-separated output

use std::collections::HashSet;

/// Drop every term whose lowercase form is also in the list
///
/// `["Python", "python"]` keeps only `"python"`. Terms without a lowercase
/// twin are left alone, and the order of the rest is preserved.
pub fn remove_case_duplicates(terms: Vec<String>) -> Vec<String> {
    let present: HashSet<String> = terms.iter().cloned().collect();
    terms
        .into_iter()
        .filter(|term| {
            let lower = term.to_lowercase();
            lower == *term || !present.contains(&lower)
        })
        .collect()
}
