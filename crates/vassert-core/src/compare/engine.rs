//! Comparison engine.
//!
//! The entry point is [`compare`], which never fails: every disagreement,
//! including heterogeneous or irregular shapes, is reported as a
//! [`Mismatch`] rather than an error.

use crate::compare::model::{ComparisonResult, Mismatch, Mode};
use crate::config::CompareOptions;
use crate::path::{Path, Segment};
use crate::value::{Kind, MapKey, Mapping, Nilness, Record, Sequence, Value};

/// Compare two values with default options.
///
/// Shallow mode yields at most one mismatch at the root path. Deep mode walks
/// both values and collects every leaf disagreement in traversal order.
pub fn compare(got: &Value, want: &Value, mode: Mode) -> ComparisonResult {
    compare_with(got, want, mode, &CompareOptions::default())
}

/// Compare two values, honouring `options.max_mismatches` in deep mode.
pub fn compare_with(
    got: &Value,
    want: &Value,
    mode: Mode,
    options: &CompareOptions,
) -> ComparisonResult {
    let mismatches = match mode {
        Mode::Shallow => {
            if shallow_equal(got, want) {
                Vec::new()
            } else {
                vec![Mismatch::leaf(
                    Path::root(),
                    Some(got.clone()),
                    Some(want.clone()),
                )]
            }
        }
        Mode::Deep => {
            let mut walker = DeepWalker::new(options.max_mismatches);
            walker.walk(got, want);
            walker.mismatches
        }
    };

    tracing::debug!(
        mode = %mode,
        mismatches = mismatches.len(),
        "comparison complete"
    );

    ComparisonResult::from_mismatches(mode, mismatches)
}

/// Unary nil predicate: true for untyped and typed nil.
pub fn is_nil(value: &Value) -> bool {
    value.is_nil()
}

/// Negation of [`is_nil`].
pub fn is_not_nil(value: &Value) -> bool {
    !value.is_nil()
}

/// Shallow equality.
///
/// - untyped nil equals only untyped nil
/// - a typed nil on the `got` side equals untyped nil, and a typed nil of the
///   same type
/// - sequences, mappings and references are equal only when they share storage
/// - records are value types: same type name and shallow-equal fields
/// - scalars compare by native equality within the same variant
pub fn shallow_equal(got: &Value, want: &Value) -> bool {
    match (got, want) {
        (Value::Nil, Value::Nil) => true,
        (Value::Nil, _) => false,
        (Value::TypedNil(_), Value::Nil) => true,
        (Value::TypedNil(a), Value::TypedNil(b)) => a == b,
        (Value::TypedNil(_), _) | (_, Value::Nil) | (_, Value::TypedNil(_)) => false,
        (Value::Seq(a), Value::Seq(b)) => a.same_storage(b),
        (Value::Map(a), Value::Map(b)) => a.same_storage(b),
        (Value::Ref(a), Value::Ref(b)) => a.same_target(b),
        (Value::Record(a), Value::Record(b)) => record_shallow_equal(a, b),
        _ => scalar_equal(got, want),
    }
}

fn record_shallow_equal(a: &Record, b: &Record) -> bool {
    a.type_name == b.type_name
        && a.fields.len() == b.fields.len()
        && a
            .fields
            .iter()
            .zip(&b.fields)
            .all(|(fa, fb)| fa.name == fb.name && shallow_equal(&fa.value, &fb.value))
}

/// Same scalar variant and equal payload. False for any non-scalar pair.
fn scalar_equal(got: &Value, want: &Value) -> bool {
    match (got, want) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Uint(a), Value::Uint(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        _ => false,
    }
}

fn segment_key(segment: &Segment) -> Option<&MapKey> {
    match segment {
        Segment::Key(k) => Some(k),
        _ => None,
    }
}

/// Recursive deep walk state: the current path and the collected mismatches.
struct DeepWalker {
    path: Path,
    mismatches: Vec<Mismatch>,
    limit: Option<usize>,
}

impl DeepWalker {
    /// A limit of zero is raised to one so the first mismatch is never hidden.
    fn new(limit: Option<usize>) -> Self {
        Self {
            path: Path::root(),
            mismatches: Vec::new(),
            limit: limit.map(|l| l.max(1)),
        }
    }

    fn full(&self) -> bool {
        self.limit
            .is_some_and(|limit| self.mismatches.len() >= limit)
    }

    fn push(&mut self, mismatch: Mismatch) {
        if !self.full() {
            self.mismatches.push(mismatch);
        }
    }

    fn leaf(&mut self, got: Option<&Value>, want: Option<&Value>) {
        let path = self.path.clone();
        self.push(Mismatch::leaf(path, got.cloned(), want.cloned()));
    }

    fn walk(&mut self, got: &Value, want: &Value) {
        if self.full() {
            return;
        }

        // Nilness first: operands must agree on it before any descent
        match (got.nilness(), want.nilness()) {
            (Nilness::Untyped, Nilness::Untyped) => return,
            (Nilness::Typed, Nilness::Typed) => {
                if !shallow_equal(got, want) {
                    self.leaf(Some(got), Some(want));
                }
                return;
            }
            (g, w) if g != w => {
                let path = self.path.clone();
                self.push(Mismatch::nil(path, got.clone(), want.clone()));
                return;
            }
            _ => {}
        }

        match (got, want) {
            (Value::Record(g), Value::Record(w)) if g.type_name == w.type_name => {
                self.walk_children(got, want);
            }
            (Value::Seq(g), Value::Seq(w)) => self.walk_sequence(g, w, got, want),
            (Value::Map(g), Value::Map(w)) => self.walk_mapping(g, w, got, want),
            (Value::Ref(g), Value::Ref(w)) => {
                if !g.same_target(w) {
                    self.walk(g.target(), w.target());
                }
            }
            _ => {
                if !scalar_equal(got, want) {
                    self.leaf(Some(got), Some(want));
                }
            }
        }
    }

    fn walk_sequence(&mut self, g: &Sequence, w: &Sequence, got: &Value, want: &Value) {
        if g.same_storage(w) {
            return;
        }
        // Irregular shape degrades to one leaf mismatch for the whole sequence
        if g.len() != w.len() {
            self.leaf(Some(got), Some(want));
            return;
        }
        self.walk_children(got, want);
    }

    fn walk_mapping(&mut self, g: &Mapping, w: &Mapping, got: &Value, want: &Value) {
        if g.same_storage(w) {
            return;
        }
        self.walk_children(got, want);
    }

    /// Pair up children by segment and recurse.
    ///
    /// Pairs follow `got` order, followed by entries only present in `want`.
    /// Mapping pairs are re-sorted by key so traversal stays in key order.
    fn walk_children(&mut self, got: &Value, want: &Value) {
        let mut remaining = want.children();
        let mut pairs: Vec<(Segment, Option<&Value>, Option<&Value>)> = Vec::new();

        for (segment, g) in got.children() {
            let w = remaining
                .iter()
                .position(|(s, _)| *s == segment)
                .map(|i| remaining.remove(i).1);
            pairs.push((segment, Some(g), w));
        }
        for (segment, w) in remaining {
            pairs.push((segment, None, Some(w)));
        }

        if got.kind() == Kind::Mapping {
            pairs.sort_by(|a, b| segment_key(&a.0).cmp(&segment_key(&b.0)));
        }

        for (segment, g, w) in pairs {
            if self.full() {
                break;
            }
            self.path.push(segment);
            match (g, w) {
                (Some(g), Some(w)) => self.walk(g, w),
                (g, w) => self.leaf(g, w),
            }
            self.path.pop();
        }
    }
}
