//! Module selection passed by callers to control assembly.

use std::collections::BTreeMap;

/// Which modules to assemble, and in what order.
///
/// `All` is the "nothing provided" sentinel and resolves to every known
/// module in lexicographic order. `Only` is taken literally: names are used
/// in the given order, duplicates are kept, unknown names are skipped during
/// assembly, and an empty list yields a header-only prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleSelection {
    #[default]
    All,
    Only(Vec<String>),
}

impl ModuleSelection {
    /// Select exactly the given names.
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ModuleSelection::Only(names.into_iter().map(Into::into).collect())
    }

    /// Build a selection from repeated command-line names.
    ///
    /// No names means `All` unless `explicit_empty` asks for the empty selection.
    pub fn from_args(names: Vec<String>, explicit_empty: bool) -> Self {
        if names.is_empty() && !explicit_empty {
            ModuleSelection::All
        } else {
            ModuleSelection::Only(names)
        }
    }

    /// Resolve to the ordered list of names to visit.
    pub fn resolve<'a>(&'a self, modules: &'a BTreeMap<String, String>) -> Vec<&'a str> {
        match self {
            ModuleSelection::All => modules.keys().map(String::as_str).collect(),
            ModuleSelection::Only(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl From<Vec<String>> for ModuleSelection {
    fn from(names: Vec<String>) -> Self {
        ModuleSelection::Only(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules() -> BTreeMap<String, String> {
        [("b", "Y"), ("a", "X")].into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn all_resolves_to_sorted_names() {
        let modules = modules();
        assert_eq!(ModuleSelection::All.resolve(&modules), vec!["a", "b"]);
    }

    #[test]
    fn only_keeps_order_duplicates_and_unknowns() {
        let modules = modules();
        let selection = ModuleSelection::only(["b", "z", "b"]);
        assert_eq!(selection.resolve(&modules), vec!["b", "z", "b"]);
    }

    #[test]
    fn from_args_distinguishes_absent_from_empty() {
        assert_eq!(ModuleSelection::from_args(vec![], false), ModuleSelection::All);
        assert_eq!(ModuleSelection::from_args(vec![], true), ModuleSelection::Only(vec![]));
        assert_eq!(
            ModuleSelection::from_args(vec!["a".into()], false),
            ModuleSelection::only(["a"])
        );
    }
}
