//! Template/fragment merge.

/// Merge template segments and learner fragments into one SQL string.
///
/// Pairwise concatenation `template[i] + fragments[i]` in index order, with
/// the shorter side padded by empty strings. No separators, no escaping,
/// no quoting: the merge is injection-transparent on purpose, and safety
/// comes entirely from the ephemeral instance the result runs against.
pub fn interleave(template: &[String], fragments: &[String]) -> String {
    let len = template.len().max(fragments.len());
    let mut merged = String::new();
    for i in 0..len {
        if let Some(segment) = template.get(i) {
            merged.push_str(segment);
        }
        if let Some(fragment) = fragments.get(i) {
            merged.push_str(fragment);
        }
    }
    merged
}
