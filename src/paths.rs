// ABOUTME: Resource path string algebra for server-resident objects
// ABOUTME: Provides join/split/parent/common-prefix operations over canonical paths

//! Resource path utilities.
//!
//! A resource path identifies one server-resident object as an alternating
//! sequence of collection labels and unique ids, joined with `/`:
//! `models/<uid>/fabrics/<uid>`. An empty path denotes "unset". The first
//! two parts identify the model a resource belongs to.

/// Join path parts with `/`, skipping empty parts.
pub fn join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Split a path into its parts. An empty path has no parts.
pub fn to_parts(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').collect()
}

/// The parent path, i.e. the path with the last `(collection, uid)` pair
/// removed. Returns `None` if the path has no parent.
pub fn parent(path: &str) -> Option<String> {
    let parts = to_parts(path);
    if parts.len() < 3 {
        return None;
    }
    Some(join(parts[..parts.len() - 2].iter().copied()))
}

/// The collection label of a path, i.e. its second-to-last part.
pub fn collection_label(path: &str) -> Option<&str> {
    let parts = to_parts(path);
    if parts.len() < 2 {
        return None;
    }
    Some(parts[parts.len() - 2])
}

/// The longest common prefix (in whole parts) of the given paths.
pub fn common_path(paths: &[&str]) -> String {
    let mut iter = paths.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };
    let mut prefix: Vec<&str> = to_parts(first);
    for path in iter {
        let parts = to_parts(path);
        let shared = prefix
            .iter()
            .zip(parts.iter())
            .take_while(|(a, b)| a == b)
            .count();
        prefix.truncate(shared);
        if prefix.is_empty() {
            break;
        }
    }
    join(prefix)
}

/// Whether all given paths belong to the same model, i.e. share at least
/// their first two parts.
pub fn share_model(paths: &[&str]) -> bool {
    to_parts(&common_path(paths)).len() >= 2
}

/// Value type wrapping a canonical resource path string.
///
/// The empty path denotes "unset"; non-empty paths always have an even
/// number of parts, alternating collection labels and ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct ResourcePath {
    value: String,
}

impl ResourcePath {
    /// Build a path from alternating `(collection label, id)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut parts = Vec::new();
        for (label, id) in pairs {
            parts.push(label);
            parts.push(id);
        }
        Self { value: join(parts) }
    }

    /// Parse a canonical path string. Non-empty paths must have an even
    /// number of parts.
    pub fn from_string(value: impl Into<String>) -> crate::error::Result<Self> {
        let value = value.into();
        let part_count = to_parts(&value).len();
        if part_count % 2 != 0 {
            return Err(crate::error::AcpError::invalid_argument(format!(
                "Invalid resource path '{value}': expected an even number of parts."
            )));
        }
        Ok(Self { value })
    }

    pub(crate) fn from_string_unchecked(value: String) -> Self {
        Self { value }
    }

    /// The canonical string form.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the path is unset.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The path parts, alternating collection labels and ids.
    pub fn to_parts(&self) -> Vec<&str> {
        to_parts(&self.value)
    }

    /// The path with the last `(collection, id)` pair removed.
    pub fn parent(&self) -> Option<ResourcePath> {
        parent(&self.value).map(|value| Self { value })
    }

    /// The collection label of the object the path points at.
    pub fn collection_label(&self) -> Option<&str> {
        collection_label(&self.value)
    }

    /// The longest common prefix with `other`, in whole parts.
    pub fn common_prefix(&self, other: &ResourcePath) -> ResourcePath {
        Self {
            value: common_path(&[&self.value, &other.value]),
        }
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
