use batchql_parser::ast::AstNode;
use batchql_parser::ast::FragmentDefinition;
use batchql_parser::ast::FragmentSpread;
use batchql_parser::ast::Selection;
use batchql_parser::ast::SelectionSet;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;

/// Original fragment name to the name it is emitted under, for one call.
pub(crate) type FragmentRenames = HashMap<String, String>;

/// The fragment definitions of a merged batch, keyed by emitted name.
///
/// Calls defining a fragment identical to one already registered share it.
/// A call whose fragment differs from the one registered under its name
/// gets its own copy under `<name>_<call_index>` (suffixed `_2`, `_3`, ...
/// while that is taken by a different body).
#[derive(Debug, Default)]
pub(crate) struct FragmentRegistry {
    fragments: IndexMap<String, FragmentDefinition>,
    renamed: usize,
}

impl FragmentRegistry {
    /// Registers one call's fragments, whose variables are already
    /// namespaced, and returns the name each of them is emitted under.
    pub(crate) fn register_call(
        &mut self,
        call_index: usize,
        fragments: &[FragmentDefinition],
    ) -> FragmentRenames {
        // A fragment's emitted body depends on the emitted names of the
        // fragments it spreads, so names are reassigned until they settle.
        let mut renames = FragmentRenames::new();
        for _ in 0..=fragments.len() {
            let next = self.assign_names(call_index, fragments, &renames);
            if next == renames {
                break;
            }
            renames = next;
        }

        for fragment in fragments {
            let emitted = emitted_fragment(fragment, &renames);
            if emitted.name != fragment.name {
                self.renamed += 1;
            }
            self.fragments.entry(emitted.name.clone()).or_insert(emitted);
        }
        renames
    }

    fn assign_names(
        &self,
        call_index: usize,
        fragments: &[FragmentDefinition],
        renames: &FragmentRenames,
    ) -> FragmentRenames {
        let mut claimed: HashSet<String> = HashSet::new();
        let mut assigned = FragmentRenames::new();
        for fragment in fragments {
            let mut candidate = fragment.clone();
            rename_spreads(&mut candidate.selection_set, renames);
            let name = self.free_name(call_index, &candidate, &claimed);
            claimed.insert(name.clone());
            assigned.insert(fragment.name.clone(), name);
        }
        assigned
    }

    /// The fragment's own name when that is free or already holds the same
    /// body, otherwise the first free `<name>_<call_index>` variant.
    fn free_name(
        &self,
        call_index: usize,
        candidate: &FragmentDefinition,
        claimed: &HashSet<String>,
    ) -> String {
        let fits = |name: &str| {
            if claimed.contains(name) {
                return false;
            }
            match self.fragments.get(name) {
                Some(existing) => {
                    let mut renamed = candidate.clone();
                    renamed.name = name.to_string();
                    existing.to_canonical() == renamed.to_canonical()
                },
                None => true,
            }
        };

        if fits(&candidate.name) {
            return candidate.name.clone();
        }
        let base = format!("{}_{call_index}", candidate.name);
        let mut name = base.clone();
        let mut suffix = 2;
        while !fits(&name) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        name
    }

    pub(crate) fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Number of definitions emitted under a name other than their own.
    pub(crate) fn renamed(&self) -> usize {
        self.renamed
    }

    pub(crate) fn into_fragments(self) -> Vec<FragmentDefinition> {
        self.fragments.into_values().collect()
    }
}

fn emitted_fragment(
    fragment: &FragmentDefinition,
    renames: &FragmentRenames,
) -> FragmentDefinition {
    let mut emitted = fragment.clone();
    if let Some(name) = renames.get(&fragment.name) {
        emitted.name = name.clone();
    }
    rename_spreads(&mut emitted.selection_set, renames);
    emitted
}

/// Points every fragment spread in `selection_set` at its emitted name.
pub(crate) fn rename_spreads(
    selection_set: &mut SelectionSet,
    renames: &FragmentRenames,
) {
    for selection in &mut selection_set.selections {
        match selection {
            Selection::Field(field) => {
                if let Some(nested) = &mut field.selection_set {
                    rename_spreads(nested, renames);
                }
            },
            Selection::FragmentSpread(spread) => {
                if let Some(name) = renames.get(&spread.fragment_name) {
                    spread.fragment_name = name.clone();
                }
            },
            Selection::InlineFragment(inline) => {
                rename_spreads(&mut inline.selection_set, renames);
            },
        }
    }
}

/// Calls `f` with every fragment spread in `selection_set`, depth first.
pub(crate) fn for_each_spread<'a>(
    selection_set: &'a SelectionSet,
    f: &mut impl FnMut(&'a FragmentSpread),
) {
    for selection in &selection_set.selections {
        match selection {
            Selection::Field(field) => {
                if let Some(nested) = &field.selection_set {
                    for_each_spread(nested, f);
                }
            },
            Selection::FragmentSpread(spread) => f(spread),
            Selection::InlineFragment(inline) => {
                for_each_spread(&inline.selection_set, f);
            },
        }
    }
}
