//! Selectable options for the selection prompts

use indexmap::IndexMap;

/// One selectable option: a value, a display label and an optional hint.
///
/// The label is always explicit. For values with an obvious textual form,
/// [`Opt::of`] derives it; for anything else [`Opt::new`] makes the caller
/// name the option.
#[derive(Debug, Clone, PartialEq)]
pub struct Opt<V> {
    pub value: V,
    pub label: String,
    pub hint: Option<String>,
}

impl<V> Opt<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self { value, label: label.into(), hint: None }
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl<V: ToString> Opt<V> {
    /// Builds an option labelled with the value's textual form.
    pub fn of(value: V) -> Self {
        let label = value.to_string();
        Self::new(value, label)
    }
}

/// Options arranged under named group headers, for the grouped multi-select.
///
/// Construction guarantees the grouping invariant: every leaf belongs to
/// exactly one declared group. Groups keep their declaration order.
#[derive(Debug)]
pub struct GroupedOpts<V> {
    groups: IndexMap<String, Vec<Opt<V>>>,
}

impl<V> Default for GroupedOpts<V> {
    fn default() -> Self {
        Self { groups: IndexMap::new() }
    }
}

impl<V> GroupedOpts<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group of options under a header, replacing a group declared
    /// earlier under the same name.
    pub fn group(mut self, name: impl Into<String>, options: Vec<Opt<V>>) -> Self {
        self.groups.insert(name.into(), options);
        self
    }

    pub fn get(&self, name: &str) -> Option<&[Opt<V>]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Opt<V>])> {
        self.groups.iter().map(|(name, options)| (name.as_str(), options.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<V: PartialEq> GroupedOpts<V> {
    /// True iff every leaf of `group` is present in `selection`.
    ///
    /// Rendering feedback only: a header is drawn as selected when its group
    /// is fully selected, but storage always remains the flat leaf set.
    pub fn is_group_selected(&self, group: &str, selection: &[V]) -> bool {
        match self.groups.get(group) {
            Some(leaves) => {
                leaves.iter().all(|option| selection.contains(&option.value))
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tools() -> GroupedOpts<&'static str> {
        GroupedOpts::new()
            .group("build", vec![Opt::of("cargo"), Opt::of("make")])
            .group("test", vec![Opt::of("nextest")])
    }

    #[test]
    fn test_of_derives_label() {
        let option = Opt::of(42);
        assert_eq!(option.label, "42");
        assert_eq!(option.value, 42);
    }

    #[test]
    fn test_group_selected_requires_every_leaf() {
        let grouped = tools();
        assert!(!grouped.is_group_selected("build", &["cargo"]));
        assert!(grouped.is_group_selected("build", &["cargo", "make"]));
        assert!(grouped.is_group_selected("test", &["nextest", "cargo"]));
    }

    #[test]
    fn test_unknown_group_is_never_selected() {
        let grouped = tools();
        assert!(!grouped.is_group_selected("deploy", &["cargo", "make", "nextest"]));
    }

    #[test]
    fn test_groups_keep_declaration_order() {
        let grouped = tools();
        let names: Vec<&str> = grouped.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["build", "test"]);
    }
}
