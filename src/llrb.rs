use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    iter::{FromIterator, FusedIterator},
    mem,
    ops::DerefMut,
};

use log::{debug, error, trace};
use rand::Rng;

use crate::depth::Depth;
use crate::error::Error;

/// Random sampling stops descending after this many links.
const RANDOM_MAX_DEPTH: u8 = 40;

/// OrderedMap manage a single instance of in-memory sorted key-value
/// map using [left-leaning-red-black][llrb] tree.
///
/// A default constructed instance is empty and ready to use:
///
/// ```
/// use llrb_map::OrderedMap;
///
/// let mut map: OrderedMap<&str, i32> = Default::default();
/// assert!(map.insert("b", 2));
/// assert!(map.insert("a", 1));
/// assert!(!map.insert("b", 20));
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.find("b"), Some(&20));
/// let keys: Vec<&str> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["a", "b"]);
/// ```
///
/// Not safe for concurrent mutation, callers sharing an instance across
/// threads must provide their own exclusion.
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    root: Option<Box<Node<K, V>>>,
    n_count: usize, // number of entries in the tree.
}

impl<K, V> OrderedMap<K, V> {
    /// Create an empty instance of OrderedMap.
    pub fn new() -> OrderedMap<K, V> {
        OrderedMap {
            root: None,
            n_count: 0,
        }
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> OrderedMap<K, V> {
        OrderedMap::new()
    }
}

/// Maintenance API.
impl<K, V> OrderedMap<K, V> {
    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Remove all entries. The instance stays usable.
    pub fn clear(&mut self) {
        trace!("clear, dropping {} entries", self.n_count);
        self.root = None;
        self.n_count = 0;
    }

    /// Return quickly with basic statisics, only entries() and
    /// node_size() are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<K, V>>())
    }
}

type Insert<K, V> = (Box<Node<K, V>>, bool);

type Delete<K, V> = (Option<Box<Node<K, V>>>, Option<V>);

type DeleteRight<K, V> = (Box<Node<K, V>>, Option<V>);

type Delmin<K, V> = (Option<Box<Node<K, V>>>, Option<Box<Node<K, V>>>);

/// Write operations on OrderedMap instance.
impl<K, V> OrderedMap<K, V>
where
    K: Ord,
{
    /// Insert {key, value} entry. Return true if key is new, if key is
    /// already present, overwrite its value and return false.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let (mut root, added) = OrderedMap::do_insert(self.root.take(), key, value);
        root.set_black();
        self.root = Some(root);
        if added {
            self.n_count += 1;
        }
        added
    }

    /// Delete key from this instance. Return true if the key was present.
    /// Deleting a missing key leaves the tree untouched.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Delete key from this instance and return its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // a miss must leave the tree untouched.
        if !self.contains(key) {
            return None;
        }

        let (root, old_value) = match self.root.take() {
            None => (None, None),
            Some(root) => OrderedMap::do_delete(root, key),
        };
        self.root = root.map(|mut root| {
            root.set_black();
            root
        });
        if old_value.is_some() {
            self.n_count -= 1;
        }
        old_value
    }
}

/// Read operations on OrderedMap instance.
impl<K, V> OrderedMap<K, V>
where
    K: Ord,
{
    /// Get the value for key.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root.as_deref();
        while let Some(nref) = node {
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Some(&nref.value),
            };
        }
        None
    }

    /// Check whether key is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }
}

/// Traversal over OrderedMap instance. All of them start from the
/// smallest key. Holding any of the iterators borrows the map, so it
/// can't be mutated while a traversal is in progress.
impl<K, V> OrderedMap<K, V> {
    /// Return an iterator over all entries in ascending key order.
    pub fn iter(&self) -> Iter<K, V> {
        Iter::new(self.root.as_deref(), self.n_count)
    }

    /// Return an iterator over all keys in ascending order.
    pub fn keys(&self) -> Keys<K, V> {
        Keys { iter: self.iter() }
    }

    /// Return an iterator over all values, in ascending order of their
    /// keys.
    pub fn values(&self) -> Values<K, V> {
        Values { iter: self.iter() }
    }

    /// Visit every entry in ascending key order, `callb` shall return
    /// false to stop the walk. Return true if all entries were visited.
    ///
    /// ```
    /// use llrb_map::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = (0..10).map(|i| (i, i * 10)).collect();
    /// let mut seen = vec![];
    /// let done = map.walk(|key, _value| {
    ///     seen.push(*key);
    ///     *key < 3
    /// });
    /// assert!(!done);
    /// assert_eq!(seen, vec![0, 1, 2, 3]);
    /// ```
    pub fn walk<F>(&self, mut callb: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        walk_tree(self.root.as_deref(), &mut callb)
    }

    /// Return a random entry from this map, picked by walking down a
    /// random path.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(&K, &V)> {
        let mut nref = self.root.as_deref()?;

        let mut at_depth = rng.gen::<u8>() % RANDOM_MAX_DEPTH;
        loop {
            let next = match rng.gen::<bool>() {
                true => nref.left_deref(),
                false => nref.right_deref(),
            };
            match next {
                Some(next) if at_depth > 0 => {
                    at_depth -= 1;
                    nref = next;
                }
                _ => break Some((&nref.key, &nref.value)),
            }
        }
    }
}

/// Validation.
impl<K, V> OrderedMap<K, V>
where
    K: Ord + Clone + fmt::Debug,
{
    /// Validate LLRB tree with following rules:
    ///
    /// * Root node is black.
    /// * Red links lean left, a red node never sits on the right.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order.
    /// * Number of nodes matches len().
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>> {
        match self.do_validate() {
            Ok(stats) => {
                debug!(
                    "validate ok, entries:{} blacks:{:?}",
                    stats.entries(),
                    stats.blacks()
                );
                Ok(stats)
            }
            Err(err) => {
                error!("validate failed, {}", err);
                Err(err)
            }
        }
    }

    fn do_validate(&self) -> Result<Stats, Error<K>> {
        let root = self.root.as_deref();
        if is_red(root) {
            return Err(Error::RedRoot);
        }

        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K, V>>());
        stats.set_depths(Depth::new());

        let mut counted = 0;
        let bounds = (None, None);
        let blacks =
            OrderedMap::validate_tree(root, false, 0, 0, bounds, &mut counted, &mut stats)?;
        if counted != self.n_count {
            let cached = self.n_count;
            return Err(Error::CountMismatch { cached, counted });
        }
        stats.set_blacks(blacks);
        Ok(stats)
    }

    fn validate_tree(
        node: Option<&Node<K, V>>,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        (low, high): (Option<&K>, Option<&K>), // keys must sort between
        counted: &mut usize,
        stats: &mut Stats,
    ) -> Result<usize, Error<K>> {
        let node = match node {
            None => {
                match stats.depths.as_mut() {
                    Some(depths) if depth > 0 => depths.sample(depth),
                    _ => (),
                }
                return Ok(nb);
            }
            Some(node) => node,
        };

        let red = !node.is_black();
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if is_red(node.right_deref()) {
            return Err(Error::RightLeaningRed);
        }
        match (low, high) {
            (Some(low), _) if node.key.le(low) => {
                return Err(Error::SortError(node.key.clone(), low.clone()));
            }
            (_, Some(high)) if node.key.ge(high) => {
                return Err(Error::SortError(node.key.clone(), high.clone()));
            }
            _ => (),
        }
        if !red {
            nb += 1;
        }
        *counted += 1;

        let (left, right) = (node.left_deref(), node.right_deref());
        let d = depth + 1;
        let lbounds = (low, Some(&node.key));
        let lblacks = OrderedMap::validate_tree(left, red, nb, d, lbounds, counted, stats)?;
        let rbounds = (Some(&node.key), high);
        let rblacks = OrderedMap::validate_tree(right, red, nb, d, rbounds, counted, stats)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {} depth: {}", lblacks, rblacks, depth);
            return Err(Error::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Ord,
{
    fn do_insert(node: Option<Box<Node<K, V>>>, key: K, value: V) -> Insert<K, V> {
        let mut node = match node {
            None => return (Node::new(key, value, false /*black*/), true),
            Some(node) => OrderedMap::walkdown_flip(node),
        };

        let added = match node.key.cmp(&key) {
            Ordering::Greater => {
                let (left, added) = OrderedMap::do_insert(node.left.take(), key, value);
                node.left = Some(left);
                added
            }
            Ordering::Less => {
                let (right, added) = OrderedMap::do_insert(node.right.take(), key, value);
                node.right = Some(right);
                added
            }
            Ordering::Equal => {
                node.set_value(value);
                false
            }
        };
        (OrderedMap::walkuprot_23(node), added)
    }

    fn do_delete<Q>(mut node: Box<Node<K, V>>, key: &Q) -> Delete<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let old_value = if node.key.borrow().gt(key) {
            let left = node.left_deref();
            if left.is_some() && !is_red(left) && !is_left_red(left) {
                node = OrderedMap::move_red_left(node);
            }
            match node.left.take() {
                Some(left) => {
                    let (left, old_value) = OrderedMap::do_delete(left, key);
                    node.left = left;
                    old_value
                }
                None => None,
            }
        } else {
            if is_red(node.left_deref()) {
                node = OrderedMap::rotate_right(node);
            }

            if node.key.borrow().eq(key) && node.right.is_none() {
                // leaf node, and red by now.
                let Node { value, .. } = *node;
                return (None, Some(value));
            }

            if node.right.is_some() {
                let (newnode, old_value) = OrderedMap::delete_right(node, key);
                node = newnode;
                old_value
            } else {
                None
            }
        };
        (Some(OrderedMap::fixup(node)), old_value)
    }

    fn delete_right<Q>(mut node: Box<Node<K, V>>, key: &Q) -> DeleteRight<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let right = node.right_deref();
        if !is_red(right) && !is_left_red(right) {
            node = OrderedMap::move_red_right(node);
        }

        if node.key.borrow().eq(key) {
            // copy in-order successor into this node and remove the
            // successor instead.
            let (right, min) = match node.right.take() {
                Some(right) => OrderedMap::delete_min(right),
                None => (None, None),
            };
            node.right = right;
            match min {
                Some(min) => {
                    let Node {
                        key: min_key,
                        value: min_value,
                        ..
                    } = *min;
                    node.key = min_key;
                    let old_value = mem::replace(&mut node.value, min_value);
                    (node, Some(old_value))
                }
                None => (node, None),
            }
        } else {
            match node.right.take() {
                Some(right) => {
                    let (right, old_value) = OrderedMap::do_delete(right, key);
                    node.right = right;
                    (node, old_value)
                }
                None => (node, None),
            }
        }
    }

    fn delete_min(mut node: Box<Node<K, V>>) -> Delmin<K, V> {
        if node.left.is_none() {
            return (None, Some(node));
        }
        let left = node.left_deref();
        if !is_red(left) && !is_left_red(left) {
            node = OrderedMap::move_red_left(node);
        }
        let (left, min) = match node.left.take() {
            Some(left) => OrderedMap::delete_min(left),
            None => (None, None),
        };
        node.left = left;
        (Some(OrderedMap::fixup(node)), min)
    }

    //--------- rotation routines for 2-3 algorithm ----------------

    // split a 4-node before descending into it. Unreachable on trees
    // built by insert and delete, walkuprot_23 leaves no 4-node behind.
    fn walkdown_flip(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            OrderedMap::flip(node.deref_mut());
        }
        node
    }

    // a 4-node left behind on the way up is split as well, so that a
    // node never holds two red children once insert returns.
    fn walkuprot_23(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_red(node.right_deref()) && !is_red(node.left_deref()) {
            node = OrderedMap::rotate_left(node);
        }
        let left = node.left_deref();
        if is_red(left) && is_left_red(left) {
            node = OrderedMap::rotate_right(node);
        }
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            OrderedMap::flip(node.deref_mut());
        }
        node
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    (r)                 (r)  \
    //            /       \                 /     \
    //          left       x             node      xr
    //                    / \            /  \
    //                  xl   xr       left   xl
    //
    fn rotate_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        debug_assert!(is_red(node.right_deref()), "rotate_left(): black link");
        let mut x = match node.right.take() {
            Some(x) => x,
            None => return node,
        };
        node.right = x.left.take();
        x.black = node.black;
        node.set_red();
        x.left = Some(node);
        x
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //            (r)   \                   (r)  \
    //           /       \                 /      \
    //          x       right             xl      node
    //         / \                                / \
    //       xl   xr                             xr  right
    //
    fn rotate_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        debug_assert!(is_red(node.left_deref()), "rotate_right(): black link");
        let mut x = match node.left.take() {
            Some(x) => x,
            None => return node,
        };
        node.left = x.right.take();
        x.black = node.black;
        node.set_red();
        x.right = Some(node);
        x
    }

    //        (x)                   (!x)
    //         |                     |
    //        node                  node
    //        / \                   / \
    //      (y) (z)              (!y) (!z)
    //     /      \              /      \
    //   left    right         left    right
    //
    fn flip(node: &mut Node<K, V>) {
        if let Some(left) = node.left.as_mut() {
            left.toggle_link();
        }
        if let Some(right) = node.right.as_mut() {
            right.toggle_link();
        }
        node.toggle_link();
    }

    fn fixup(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if is_red(node.right_deref()) {
            node = OrderedMap::rotate_left(node);
        }
        let left = node.left_deref();
        if is_red(left) && is_left_red(left) {
            node = OrderedMap::rotate_right(node);
        }
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            OrderedMap::flip(node.deref_mut());
        }
        node
    }

    fn move_red_left(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        OrderedMap::flip(node.deref_mut());
        if is_left_red(node.right_deref()) {
            node.right = node.right.take().map(OrderedMap::rotate_right);
            node = OrderedMap::rotate_left(node);
            OrderedMap::flip(node.deref_mut());
        }
        node
    }

    fn move_red_right(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
        OrderedMap::flip(node.deref_mut());
        if is_left_red(node.left_deref()) {
            node = OrderedMap::rotate_right(node);
            OrderedMap::flip(node.deref_mut());
        }
        node
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Ord,
{
    /// Later duplicates overwrite earlier ones.
    fn from_iter<I>(iter: I) -> OrderedMap<K, V>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap<K, V>
where
    K: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

fn walk_tree<K, V, F>(node: Option<&Node<K, V>>, callb: &mut F) -> bool
where
    F: FnMut(&K, &V) -> bool,
{
    match node {
        None => true,
        Some(node) => {
            walk_tree(node.left_deref(), callb)
                && callb(&node.key, &node.value)
                && walk_tree(node.right_deref(), callb)
        }
    }
}

fn is_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

// is the left child of node red.
fn is_left_red<K, V>(node: Option<&Node<K, V>>) -> bool {
    node.map_or(false, |node| is_red(node.left_deref()))
}

/// Iterator over (key, value) entries in ascending key order, created
/// by [`OrderedMap::iter`]. Dropping the iterator ends the traversal.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>, // nodes whose left subtree is done.
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, remaining: usize) -> Iter<'a, K, V> {
        let mut iter = Iter {
            stack: vec![],
            remaining,
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(nref) = node {
            self.stack.push(nref);
            node = nref.left_deref();
        }
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Iter<'a, K, V> {
        Iter {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// Iterator over keys in ascending order, created by
/// [`OrderedMap::keys`].
pub struct Keys<'a, K, V> {
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// Iterator over values in ascending order of their keys, created by
/// [`OrderedMap::values`].
pub struct Values<'a, K, V> {
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

/// Node corresponds to a single entry in OrderedMap instance.
#[derive(Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    black: bool,                    // store: black or red
    left: Option<Box<Node<K, V>>>,  // store: left child
    right: Option<Box<Node<K, V>>>, // store: right child
}

// Primary operations on a single node.
impl<K, V> Node<K, V> {
    // CREATE operation
    fn new(key: K, value: V, black: bool) -> Box<Node<K, V>> {
        Box::new(Node {
            key,
            value,
            black,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn left_deref(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    #[inline]
    fn right_deref(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }

    #[inline]
    fn set_value(&mut self, value: V) {
        self.value = value
    }

    #[inline]
    fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    fn toggle_link(&mut self) {
        self.black = !self.black
    }

    #[inline]
    fn is_black(&self) -> bool {
        self.black
    }
}

/// Statistics on [`OrderedMap`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`OrderedMap::stats`] method.
/// * To get full statisics via [`OrderedMap::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`OrderedMap`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `OrderedMap<K,V>`.
    /// Although the node overhead is constant, the node size varies
    /// based on key and value types. EG:
    ///
    /// ```
    /// use llrb_map::OrderedMap;
    /// let map: OrderedMap<u64, i128> = OrderedMap::new();
    ///
    /// // size of key: 8 bytes
    /// // size of value: 16 bytes
    /// // overhead is 24 bytes
    /// assert_eq!(map.stats().node_size(), 48);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child. Available only from [`OrderedMap::validate`].
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics, None for an empty tree or when
    /// obtained via [`OrderedMap::stats`].
    pub fn depths(&self) -> Option<Depth> {
        self.depths.as_ref().filter(|d| d.samples() > 0).cloned()
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;
