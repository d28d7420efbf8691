use indexmap::IndexMap;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::collections::HashSet;

/// A sequence of response keys locating a field within a response tree.
///
/// The empty path is the operation root. Paths render dot-separated
/// (`user.friends.name`).
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldPath(SmallVec<[String; 4]>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// This path extended by one response key.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.into());
        Self(segments)
    }

    pub fn parent(&self) -> Option<FieldPath> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.iter().cloned().collect()))
    }

    /// The response key of the field this path points at.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

/// Where each call's fields ended up in the merged operation.
///
/// For every call, maps each field path of the call's original query to
/// the path of the field serving it in the merged query. Entries keep the
/// order the merge produced them in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathMapping {
    calls: IndexMap<usize, IndexMap<FieldPath, FieldPath>>,

    /// Original paths of each call grouped under their parent path.
    children: HashMap<(usize, FieldPath), Vec<FieldPath>>,

    fragment_levels: HashSet<(usize, FieldPath)>,
}

impl PathMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where a call's field at `original` lives in the merged
    /// operation. The root path names no field and is ignored.
    pub fn insert(
        &mut self,
        call_index: usize,
        original: FieldPath,
        merged: FieldPath,
    ) {
        let Some(parent) = original.parent() else {
            return;
        };
        let previous = self.calls
            .entry(call_index)
            .or_default()
            .insert(original.clone(), merged);
        if previous.is_none() {
            self.children
                .entry((call_index, parent))
                .or_default()
                .push(original);
        }
    }

    pub fn get(
        &self,
        call_index: usize,
        original: &FieldPath,
    ) -> Option<&FieldPath> {
        self.calls.get(&call_index)?.get(original)
    }

    /// Records that the call's selection set at `original` contains
    /// fragment spreads or inline fragments, whose fields are not mapped
    /// individually.
    pub fn mark_fragment_level(&mut self, call_index: usize, original: FieldPath) {
        self.fragment_levels.insert((call_index, original));
    }

    pub fn selects_fragments(
        &self,
        call_index: usize,
        original: &FieldPath,
    ) -> bool {
        self.fragment_levels.contains(&(call_index, original.clone()))
    }

    pub fn call_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.calls.keys().copied()
    }

    /// All `(original, merged)` entries of one call.
    pub fn entries(
        &self,
        call_index: usize,
    ) -> impl Iterator<Item = (&FieldPath, &FieldPath)> {
        self.calls.get(&call_index).into_iter().flatten()
    }

    /// Entries of one call whose original path is a direct child of
    /// `parent`.
    pub fn children_of(
        &self,
        call_index: usize,
        parent: &FieldPath,
    ) -> impl Iterator<Item = (&FieldPath, &FieldPath)> {
        let entries = self.calls.get(&call_index);
        self.children
            .get(&(call_index, parent.clone()))
            .into_iter()
            .flatten()
            .filter_map(move |original| {
                entries?.get_key_value(original)
            })
    }

    pub fn has_children(&self, call_index: usize, parent: &FieldPath) -> bool {
        self.children.contains_key(&(call_index, parent.clone()))
    }

    /// Total number of entries across all calls.
    pub fn len(&self) -> usize {
        self.calls.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for PathMapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (call_index, entries) in &self.calls {
            for (original, merged) in entries {
                writeln!(f, "call {call_index}: {original} -> {merged}")?;
            }
        }
        Ok(())
    }
}
