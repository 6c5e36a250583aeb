//! Dynamically-typed value model
//!
//! A [`Value`] is the operand handed to the comparator. Every value carries an
//! explicit three-state nilness classification ([`Nilness`]) and a kind tag
//! ([`Kind`]) that the comparator dispatches on.
//!
//! Sequences, mappings and references share their storage through `Rc`, so
//! cloning a [`Value`] keeps the "same object" identity that shallow
//! comparison observes.

use crate::path::Segment;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Runtime value under comparison.
#[derive(Debug, Clone)]
pub enum Value {
    /// Untyped nil: no type, no value.
    Nil,
    /// Typed nil: a known type whose content is absent.
    TypedNil(TypeTag),
    /// Boolean scalar.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// Unsigned integer scalar.
    Uint(u64),
    /// 64-bit float scalar.
    Float(f64),
    /// String scalar.
    Str(Box<str>),
    /// Ordered sequence with shared storage.
    Seq(Sequence),
    /// Key-ordered mapping with shared storage.
    Map(Mapping),
    /// Named record with fields in declaration order.
    Record(Record),
    /// Shared reference to another value.
    Ref(Reference),
}

/// Nilness classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nilness {
    /// [`Value::Nil`]
    Untyped,
    /// [`Value::TypedNil`]
    Typed,
    /// Anything else
    NonNil,
}

/// Kind tag used for comparison dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Nil,
    Scalar,
    Sequence,
    Mapping,
    Record,
    Reference,
}

/// Type name carried by a typed nil, e.g. `*int`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag(Box<str>);

impl TypeTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().into_boxed_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sequence payload. Clones share the backing storage.
#[derive(Debug, Clone)]
pub struct Sequence(Rc<Vec<Value>>);

impl Sequence {
    pub fn new(items: Vec<Value>) -> Self {
        Self(Rc::new(items))
    }

    pub fn items(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if both handles point at the same backing storage.
    pub fn same_storage(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Scalar key of a [`Mapping`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKey {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Str(Box<str>),
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapKey::Bool(b) => write!(f, "{b}"),
            MapKey::Int(i) => write!(f, "{i}"),
            MapKey::Uint(u) => write!(f, "{u}"),
            MapKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MapKey {
    fn from(s: &str) -> Self {
        MapKey::Str(s.into())
    }
}

impl From<String> for MapKey {
    fn from(s: String) -> Self {
        MapKey::Str(s.into_boxed_str())
    }
}

impl From<i64> for MapKey {
    fn from(i: i64) -> Self {
        MapKey::Int(i)
    }
}

impl From<u64> for MapKey {
    fn from(u: u64) -> Self {
        MapKey::Uint(u)
    }
}

impl From<bool> for MapKey {
    fn from(b: bool) -> Self {
        MapKey::Bool(b)
    }
}

/// Mapping payload. Keys iterate in sorted order; clones share storage.
#[derive(Debug, Clone)]
pub struct Mapping(Rc<BTreeMap<MapKey, Value>>);

impl Mapping {
    pub fn new(entries: BTreeMap<MapKey, Value>) -> Self {
        Self(Rc::new(entries))
    }

    pub fn entries(&self) -> &BTreeMap<MapKey, Value> {
        &self.0
    }

    pub fn get(&self, key: &MapKey) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if both handles point at the same backing storage.
    pub fn same_storage(&self, other: &Mapping) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Record value with field names preserved.
#[derive(Debug, Clone)]
pub struct Record {
    /// Record type name.
    pub type_name: Box<str>,
    /// Field values in declaration order.
    pub fields: Vec<Field>,
}

impl Record {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| &*f.name == name)
            .map(|f| &f.value)
    }
}

/// Named record field.
#[derive(Debug, Clone)]
pub struct Field {
    /// Field identifier.
    pub name: Box<str>,
    /// Field payload.
    pub value: Value,
}

/// Non-nil shared reference. Clones point at the same target.
#[derive(Debug, Clone)]
pub struct Reference(Rc<Value>);

impl Reference {
    pub fn new(target: Value) -> Self {
        Self(Rc::new(target))
    }

    pub fn target(&self) -> &Value {
        &self.0
    }

    /// True if both references point at the same target.
    pub fn same_target(&self, other: &Reference) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Value {
    /// Typed nil of the named type.
    pub fn typed_nil(type_name: impl Into<String>) -> Self {
        Value::TypedNil(TypeTag::new(type_name))
    }

    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into().into_boxed_str())
    }

    /// Sequence built from any iterator of convertible items.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(Sequence::new(items.into_iter().map(Into::into).collect()))
    }

    /// Mapping built from `(key, value)` pairs. Later duplicates win.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<MapKey>,
        V: Into<Value>,
    {
        Value::Map(Mapping::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Record built from `(field name, value)` pairs in declaration order.
    pub fn record<I, N, V>(type_name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<Value>,
    {
        Value::Record(Record {
            type_name: type_name.into().into_boxed_str(),
            fields: fields
                .into_iter()
                .map(|(name, value)| Field {
                    name: name.into().into_boxed_str(),
                    value: value.into(),
                })
                .collect(),
        })
    }

    /// Reference to a freshly allocated target.
    pub fn reference(target: impl Into<Value>) -> Self {
        Value::Ref(Reference::new(target.into()))
    }

    pub fn nilness(&self) -> Nilness {
        match self {
            Value::Nil => Nilness::Untyped,
            Value::TypedNil(_) => Nilness::Typed,
            _ => Nilness::NonNil,
        }
    }

    /// True for both untyped and typed nil.
    pub fn is_nil(&self) -> bool {
        self.nilness() != Nilness::NonNil
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil | Value::TypedNil(_) => Kind::Nil,
            Value::Bool(_)
            | Value::Int(_)
            | Value::Uint(_)
            | Value::Float(_)
            | Value::Str(_) => Kind::Scalar,
            Value::Seq(_) => Kind::Sequence,
            Value::Map(_) => Kind::Mapping,
            Value::Record(_) => Kind::Record,
            Value::Ref(_) => Kind::Reference,
        }
    }

    /// Enumerate `(segment, child)` pairs of a decomposable value.
    ///
    /// Records yield fields in declaration order, sequences yield indices in
    /// order and mappings yield keys in sorted order. Scalars, nils and
    /// references have no children: a reference is compared through its
    /// target at the same path.
    pub fn children(&self) -> Vec<(Segment, &Value)> {
        match self {
            Value::Record(r) => r
                .fields
                .iter()
                .map(|f| (Segment::Field(f.name.clone()), &f.value))
                .collect(),
            Value::Seq(s) => s
                .items()
                .iter()
                .enumerate()
                .map(|(i, v)| (Segment::Index(i), v))
                .collect(),
            Value::Map(m) => m
                .entries()
                .iter()
                .map(|(k, v)| (Segment::Key(k.clone()), v))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Uint(u64::from(u))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s.into_boxed_str())
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Value::Seq(s)
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Map(m)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<Reference> for Value {
    fn from(r: Reference) -> Self {
        Value::Ref(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::seq(items)
    }
}
