use std::collections::{HashMap as DefaultHashMap, HashSet as DefaultHashSet};

use ahash::RandomState;
use indexmap::IndexMap;

use crate::indexes::VertexId;

pub(crate) type HashSet<K> = DefaultHashSet<K, RandomState>;
pub(crate) type HashMap<K, V> = DefaultHashMap<K, V, RandomState>;

/// Type alias to use `AHash` as a faster hasher for `IndexMap`.
pub(crate) type AIndexMap<K, V> = IndexMap<K, V, RandomState>;

/// A set of vertices, e.g. a (k,g)-core or a residual stored in an index.
/// Value equality is order-independent.
pub type VertexSet = DefaultHashSet<VertexId, RandomState>;
