use crate::value::MapKey;
use serde::{Serialize, Serializer};
use std::fmt;

/// One step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Select a named record field.
    Field(Box<str>),
    /// Select a sequence element by zero-based index.
    Index(usize),
    /// Select a mapping entry by key.
    Key(MapKey),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, ".{name}"),
            Segment::Index(i) => write!(f, "[{i}]"),
            Segment::Key(k) => write!(f, "[{k}]"),
        }
    }
}

/// Location of a sub-value inside a nested value.
///
/// The root path is empty. `Display` renders fields joined with `.` and
/// indices/keys in brackets, e.g. `V[1]` or `inner.items[0]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// New path extended by one segment.
    pub fn child(&self, segment: Segment) -> Self {
        let mut path = self.clone();
        path.push(segment);
        path
    }

    /// Render with a leading root name, e.g. `v.V[1]` for root `v`.
    pub fn qualified(&self, root: &str) -> String {
        let mut out = String::from(root);
        for segment in &self.segments {
            out.push_str(&segment.to_string());
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => f.write_str(name)?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str) -> Segment {
        Segment::Field(name.into())
    }

    #[test]
    fn test_root_renders_empty() {
        let path = Path::root();
        assert!(path.is_root());
        assert_eq!(path.to_string(), "");
        assert_eq!(path.qualified("v"), "v");
    }

    #[test]
    fn test_field_then_index() {
        let path = Path::from(vec![field("V"), Segment::Index(1)]);
        assert_eq!(path.to_string(), "V[1]");
        assert_eq!(path.qualified("v"), "v.V[1]");
    }

    #[test]
    fn test_nested_fields_join_with_dot() {
        let path = Path::from(vec![field("inner"), field("items"), Segment::Index(0)]);
        assert_eq!(path.to_string(), "inner.items[0]");
    }

    #[test]
    fn test_leading_index_and_key() {
        let path = Path::from(vec![Segment::Index(2), Segment::Key("name".into())]);
        assert_eq!(path.to_string(), "[2][name]");
        assert_eq!(path.qualified("v"), "v[2][name]");
    }

    #[test]
    fn test_push_pop_and_child() {
        let mut path = Path::root();
        path.push(field("a"));
        let child = path.child(Segment::Index(3));
        assert_eq!(child.to_string(), "a[3]");
        assert_eq!(path.pop(), Some(field("a")));
        assert!(path.is_root());
    }

    #[test]
    fn test_serializes_as_display_string() {
        let path = Path::from(vec![field("V"), Segment::Index(0)]);
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"V[0]\"");
    }
}
