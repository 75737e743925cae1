//! Search filtering of a functions container.
//!
//! A filter only subsets: matches keep the container order. Each match also
//! carries its index in the container so positions in the filtered list can
//! be mapped back to the container (reordering needs this).

use crate::model::{EventsFunction, EventsFunctionsContainer};

/// Predicate deciding whether a function is visible for a search text.
pub trait FunctionFilter {
    /// Whether `function` is shown for `search_text`.
    fn matches(&self, function: &EventsFunction, search_text: &str) -> bool;
}

/// Substring match on the function name.
///
/// Case-insensitive unless built with `case_sensitive`. An empty search text
/// matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameContains {
    /// Compare without folding case.
    pub case_sensitive: bool,
}

impl NameContains {
    /// Filter that respects case.
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl FunctionFilter for NameContains {
    fn matches(&self, function: &EventsFunction, search_text: &str) -> bool {
        if search_text.is_empty() {
            return true;
        }
        if self.case_sensitive {
            function.name().contains(search_text)
        } else {
            function
                .name()
                .to_lowercase()
                .contains(&search_text.to_lowercase())
        }
    }
}

impl<F> FunctionFilter for F
where
    F: Fn(&EventsFunction, &str) -> bool,
{
    fn matches(&self, function: &EventsFunction, search_text: &str) -> bool {
        self(function, search_text)
    }
}

/// A visible function and its index in the container.
#[derive(Debug, Clone, Copy)]
pub struct FilteredItem<'a> {
    /// Index in the container.
    pub index: usize,
    /// The function.
    pub function: &'a EventsFunction,
}

/// Functions of `container` visible for `search_text`, in container order.
pub fn filter_functions<'a>(
    container: &'a EventsFunctionsContainer,
    search_text: &str,
    filter: &dyn FunctionFilter,
) -> Vec<FilteredItem<'a>> {
    container
        .iter()
        .enumerate()
        .filter(|(_, function)| filter.matches(function, search_text))
        .map(|(index, function)| FilteredItem { index, function })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(names: &[&str]) -> EventsFunctionsContainer {
        let mut c = EventsFunctionsContainer::new();
        for name in names {
            c.push_new(*name);
        }
        c
    }

    fn visible_names(c: &EventsFunctionsContainer, text: &str, f: &dyn FunctionFilter) -> Vec<String> {
        filter_functions(c, text, f)
            .iter()
            .map(|item| item.function.name().to_string())
            .collect()
    }

    #[test]
    fn empty_search_matches_everything_in_order() {
        let c = container(&["Jump", "Run", "Crouch"]);
        assert_eq!(visible_names(&c, "", &NameContains::default()), vec!["Jump", "Run", "Crouch"]);
    }

    #[test]
    fn default_filter_is_case_insensitive() {
        let c = container(&["JumpHigh", "Run", "doublejump"]);
        assert_eq!(
            visible_names(&c, "JUMP", &NameContains::default()),
            vec!["JumpHigh", "doublejump"]
        );
    }

    #[test]
    fn case_sensitive_filter() {
        let c = container(&["JumpHigh", "doublejump"]);
        assert_eq!(
            visible_names(&c, "Jump", &NameContains::case_sensitive()),
            vec!["JumpHigh"]
        );
    }

    #[test]
    fn filtered_items_carry_container_indices() {
        let c = container(&["A1", "B", "A2", "C", "A3"]);
        let indices: Vec<usize> = filter_functions(&c, "a", &NameContains::default())
            .iter()
            .map(|item| item.index)
            .collect();
        assert_eq!(indices, vec![0, 2, 4]);
    }

    #[test]
    fn closures_can_be_used_as_filters() {
        let c = container(&["Short", "AVeryLongName"]);
        let long_only = |f: &EventsFunction, _: &str| f.name().len() > 6;
        assert_eq!(visible_names(&c, "ignored", &long_only), vec!["AVeryLongName"]);
    }
}
