/// Zero sized value, for maps that index keys alone, like
/// ``OrderedMap<K, Empty>``.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Empty;
