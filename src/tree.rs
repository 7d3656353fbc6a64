//! An unbalanced, owning BST. Every `Node` is owned by exactly one parent link (or by the
//! `OrderedTree` itself for the root) so there are no parent pointers and no shared nodes.
//!
//! Keys that compare equal are allowed. They are always routed to the right, which makes the
//! tree a multiset whose in-order enumeration is non-decreasing.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//! assert_eq!(tree.min_value(), None);
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//! assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
//!
//! // Traversal is pre-order, not sorted.
//! let keys: Vec<_> = tree.traversal().iter().map(|n| *n.key()).collect();
//! assert_eq!(keys, [2, 1, 3]);
//!
//! // Removing reports whether something was removed.
//! assert!(tree.remove(&2));
//! assert!(!tree.remove(&2));
//! assert_eq!(tree.in_order(), [&1, &3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

/// An owning link to a subtree. `None` marks the empty slot at the bottom of a subtree.
type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree that is never rebalanced. This can be used for inserting, searching,
/// and removing keys as well as for reading its extremes and traversing it.
pub struct OrderedTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for OrderedTree<K> {
    // Detach children before each node drops so a long chain doesn't recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K: Clone> Clone for OrderedTree<K> {
    // Children come right before their parent in reverse pre-order, so every subtree is built
    // (and waiting on `built`) by the time its parent is reached. The left child was built last.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<K>>> = Vec::with_capacity(self.len);
        for node in self.traversal().into_iter().rev() {
            let left = if node.left.is_some() { built.pop() } else { None };
            let right = if node.right.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                key: node.key.clone(),
                left,
                right,
            }));
        }
        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

/// The pre-order keys pin down the shape of the tree so they're all that gets printed.
impl<K: fmt::Debug> fmt::Debug for OrderedTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pre_order: Vec<&K> = self.traversal().into_iter().map(Node::key).collect();
        f.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("pre_order", &pre_order)
            .finish()
    }
}

impl<K> OrderedTree<K> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of nodes in the tree. Every duplicate counts.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Inserts the key into the tree. Keys strictly less than a node's key go to its left, all
    /// others (including equal keys) go to its right, so inserting an existing key adds another
    /// node rather than replacing anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.root().and_then(|n| n.right()).map(|n| *n.key()), Some(1));
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut depth = 0_usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Node::new_boxed(key));
        self.len += 1;

        trace!(depth, len = self.len, "inserted node");
    }

    /// Potentially finds a node holding the given key. If several nodes hold an equal key, the
    /// one closest to the root is returned. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether some node holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Removes one node holding the given key and reports whether anything was removed. If the
    /// tree does not contain the key, nothing happens.
    ///
    /// A node with two children is not unlinked itself. Instead, its in-order predecessor (the
    /// largest node of its left subtree) is unlinked and its key moves into the matched node.
    /// When that largest key is repeated in the left subtree, the in-order successor is used the
    /// same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [10, 5, 13].into_iter().collect();
    ///
    /// assert!(tree.remove(&10));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(5));
    /// assert!(!tree.remove(&10));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let slot = find_link(&mut self.root, key);
        let Some(mut node) = slot.take() else {
            return false;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => {
                trace!("removing leaf");
                None
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!("removing node with one child");
                Some(child)
            }
            (Some(left), Some(right)) => {
                let unique_predecessor = left.has_unique_largest();
                node.left = Some(left);
                node.right = Some(right);
                // Moving one of several equal largest keys up would leave its twin on the
                // strictly-less side, so the successor is promoted instead.
                let promoted = if unique_predecessor {
                    trace!("removing node with two children via predecessor");
                    take_largest(&mut node.left)
                } else {
                    trace!("removing node with two children via successor");
                    take_smallest(&mut node.right)
                };
                if let Some(promoted) = promoted {
                    node.key = promoted;
                }
                Some(node)
            }
        };

        self.len -= 1;
        trace!(len = self.len, "removed node");
        true
    }

    /// The smallest key in the tree or `None` if the tree is empty.
    pub fn min_value(&self) -> Option<&K> {
        self.root().map(|root| &root.leftmost().key)
    }

    /// The largest key in the tree or `None` if the tree is empty.
    pub fn max_value(&self) -> Option<&K> {
        self.root().map(|root| &root.rightmost().key)
    }

    /// Collects every node in pre-order: a node, then its left subtree, then its right subtree.
    /// This is **not** sorted order; use [`OrderedTree::in_order`] for that. An empty tree gives
    /// an empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 13, 14, 12, 5, 3, 2, 4, 1].into_iter().collect();
    /// let keys: Vec<_> = tree.traversal().iter().map(|n| *n.key()).collect();
    ///
    /// assert_eq!(keys, [10, 5, 3, 2, 1, 4, 13, 12, 14]);
    /// ```
    pub fn traversal(&self) -> Vec<&Node<K>> {
        let mut path = Vec::with_capacity(self.len);
        let mut pending: Vec<&Node<K>> = self.root().into_iter().collect();
        while let Some(node) = pending.pop() {
            path.push(node);
            // Right first so the left subtree is popped (visited) first.
            pending.extend(node.right());
            pending.extend(node.left());
        }
        path
    }

    /// Collects every key in sorted (non-decreasing) order.
    pub fn in_order(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.len);
        let mut pending = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left();
            }
            let Some(node) = pending.pop() else {
                break;
            };
            keys.push(&node.key);
            current = node.right();
        }
        keys
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a tree with only a
    /// root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<K>, usize)> =
            self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|n| (n, depth + 1)));
            pending.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }
}

impl<K: Ord> Extend<K> for OrderedTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for OrderedTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// A `Node` has a key that is used for searching/sorting and two children, either of which may
/// be missing. Nodes are only handed out as shared references so callers can look but never
/// restructure.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

/// Children are shown by key only, so printing a node never walks its whole subtree.
impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree. Every key in it is strictly less than this node's key.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree. Every key in it is greater than or equal to this node's
    /// key.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Whether the largest key of this subtree is held by a single node. Nodes holding the
    /// largest key all sit on the right spine, so a repeat can only be the rightmost node's
    /// parent.
    fn has_unique_largest(&self) -> bool
    where
        K: Ord,
    {
        let mut parent = None;
        let mut node = self;
        while let Some(right) = node.right() {
            parent = Some(node);
            node = right;
        }
        parent.map_or(true, |parent| parent.key < node.key)
    }
}

/// Follows `key` down from `slot` and returns the link holding the first node with an equal key,
/// or the empty link where such a node would go.
fn find_link<'a, K: Ord>(mut slot: &'a mut Link<K>, key: &K) -> &'a mut Link<K> {
    loop {
        let go_left = match slot.as_deref() {
            None => break,
            Some(node) => match key.cmp(&node.key) {
                Ordering::Less => true,
                Ordering::Equal => break,
                Ordering::Greater => false,
            },
        };
        if let Some(node) = slot {
            slot = if go_left {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }
    slot
}

/// Unlinks the largest node under `slot` by walking right until there is no right child. The
/// unlinked node's left child takes its place. Returns `None` only if `slot` is empty.
fn take_largest<K>(mut slot: &mut Link<K>) -> Option<K> {
    while slot.as_deref().map_or(false, |node| node.right.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.right;
        }
    }
    let node = slot.take()?;
    let Node { key, left, .. } = *node;
    *slot = left;
    Some(key)
}

/// Mirror of [`take_largest`]: unlinks the leftmost node and lets its right child take its place.
fn take_smallest<K>(mut slot: &mut Link<K>) -> Option<K> {
    while slot.as_deref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }
    let node = slot.take()?;
    let Node { key, right, .. } = *node;
    *slot = right;
    Some(key)
}
