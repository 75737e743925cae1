//! Unique name generation.

/// Produce a name derived from `base` that `is_taken` rejects.
///
/// Returns `base` itself when free, otherwise `base` followed by the first
/// integer suffix from 2 upward that is free ("Function", "Function2",
/// "Function3", ...). Terminates for any predicate that accepts only finitely
/// many names.
pub fn new_name(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    if !is_taken(base) {
        return base.to_string();
    }

    let mut suffix: u64 = 2;
    loop {
        let candidate = format!("{base}{suffix}");
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
