//! A tiny command language for driving an [`OrderedTree`] from the command line and narrating
//! what happened to it.
//!
//! Each command is a single token: `insert=K`, `remove=K`, `search=K`, `min`, `max`,
//! `preorder`, `inorder` or `sum`. Keys have to widen losslessly into `i128` so `sum` can add
//! up any tree of 64-bit keys without overflowing.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::script::parse_script;
//! use ordered_tree::tree::OrderedTree;
//!
//! let commands = parse_script::<i64, _>(["insert=2", "insert=1", "preorder"]).unwrap();
//! let mut tree = OrderedTree::new();
//! let narration: Vec<String> = commands
//!     .into_iter()
//!     .map(|command| command.run(&mut tree).to_string())
//!     .collect();
//!
//! assert_eq!(
//!     narration,
//!     ["Node 2 inserted as the root", "Node 1 inserted", "Pre-order traversal: [2, 1]"],
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tree::OrderedTree;

/// Why a script token couldn't be turned into a [`Command`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// The token doesn't name any command.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    /// The command needs a key (`name=K`) but none was given.
    #[error("command `{0}` needs a key, e.g. `{0}=10`")]
    MissingKey(String),
    /// The command takes no key but one was given.
    #[error("command `{0}` does not take a key")]
    UnexpectedKey(String),
    /// The key couldn't be parsed into the tree's key type.
    #[error("invalid key `{key}`: {reason}")]
    InvalidKey {
        /// The key as written.
        key: String,
        /// Why parsing it failed.
        reason: String,
    },
}

/// A single operation on an [`OrderedTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<K> {
    /// Insert the key.
    Insert(K),
    /// Remove one occurrence of the key.
    Remove(K),
    /// Look the key up.
    Search(K),
    /// Read the smallest key.
    Min,
    /// Read the largest key.
    Max,
    /// List the keys in pre-order.
    PreOrder,
    /// List the keys in sorted order.
    InOrder,
    /// Add up every key.
    Sum,
}

impl<K> FromStr for Command<K>
where
    K: FromStr,
    K::Err: fmt::Display,
{
    type Err = ScriptError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (name, key) = match token.split_once('=') {
            Some((name, key)) => (name.trim(), Some(key.trim())),
            None => (token.trim(), None),
        };
        let parse_key = || -> Result<K, ScriptError> {
            let key = key
                .filter(|key| !key.is_empty())
                .ok_or_else(|| ScriptError::MissingKey(name.to_owned()))?;
            key.parse().map_err(|err: K::Err| ScriptError::InvalidKey {
                key: key.to_owned(),
                reason: err.to_string(),
            })
        };
        let no_key = |command: Self| match key {
            Some(_) => Err(ScriptError::UnexpectedKey(name.to_owned())),
            None => Ok(command),
        };

        match name {
            "insert" => parse_key().map(Self::Insert),
            "remove" => parse_key().map(Self::Remove),
            "search" => parse_key().map(Self::Search),
            "min" => no_key(Self::Min),
            "max" => no_key(Self::Max),
            "preorder" => no_key(Self::PreOrder),
            "inorder" => no_key(Self::InOrder),
            "sum" => no_key(Self::Sum),
            _ => Err(ScriptError::UnknownCommand(token.to_owned())),
        }
    }
}

/// Parses every token into a [`Command`], stopping at the first one that doesn't parse.
pub fn parse_script<K, S>(
    tokens: impl IntoIterator<Item = S>,
) -> Result<Vec<Command<K>>, ScriptError>
where
    K: FromStr,
    K::Err: fmt::Display,
    S: AsRef<str>,
{
    tokens.into_iter().map(|token| token.as_ref().parse()).collect()
}

impl<K> Command<K>
where
    K: Ord + Clone + Into<i128>,
{
    /// Applies the command to the tree and reports what happened.
    pub fn run(self, tree: &mut OrderedTree<K>) -> Report<K> {
        match self {
            Self::Insert(key) => {
                let root = tree.is_empty();
                tree.insert(key.clone());
                Report::Inserted { key, root }
            }
            Self::Remove(key) => {
                let found = tree.remove(&key);
                Report::Removed { key, found }
            }
            Self::Search(key) => {
                let found = tree.contains(&key);
                Report::Searched { key, found }
            }
            Self::Min => Report::Min(tree.min_value().cloned()),
            Self::Max => Report::Max(tree.max_value().cloned()),
            Self::PreOrder => {
                Report::PreOrder(tree.traversal().into_iter().map(|n| n.key().clone()).collect())
            }
            Self::InOrder => Report::InOrder(tree.in_order().into_iter().cloned().collect()),
            Self::Sum => Report::Sum(
                tree.traversal()
                    .into_iter()
                    .map(|node| -> i128 { node.key().clone().into() })
                    .sum(),
            ),
        }
    }
}

/// The outcome of running a [`Command`]. Its `Display` impl is the narration shown to users.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report<K> {
    /// A key was inserted, possibly as the root of an empty tree.
    Inserted {
        /// The inserted key.
        key: K,
        /// Whether the tree was empty beforehand.
        root: bool,
    },
    /// A removal was attempted.
    Removed {
        /// The key to remove.
        key: K,
        /// Whether a node was actually removed.
        found: bool,
    },
    /// A key was looked up.
    Searched {
        /// The key looked for.
        key: K,
        /// Whether some node holds it.
        found: bool,
    },
    /// The smallest key, if any.
    Min(Option<K>),
    /// The largest key, if any.
    Max(Option<K>),
    /// Keys in pre-order.
    PreOrder(Vec<K>),
    /// Keys in sorted order.
    InOrder(Vec<K>),
    /// The sum of every key, widened so that it can't overflow for 64-bit keys.
    Sum(i128),
}

struct Keys<'a, K>(&'a [K]);

impl<K: fmt::Display> fmt::Display for Keys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            key.fmt(f)?;
        }
        f.write_str("]")
    }
}

impl<K: fmt::Display> fmt::Display for Report<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inserted { key, root: true } => write!(f, "Node {key} inserted as the root"),
            Self::Inserted { key, root: false } => write!(f, "Node {key} inserted"),
            Self::Removed { key, found: true } => write!(f, "Node {key} removed"),
            Self::Removed { key, found: false } | Self::Searched { key, found: false } => {
                write!(f, "Node {key} not found")
            }
            Self::Searched { key, found: true } => write!(f, "Node {key} found"),
            Self::Min(Some(key)) => write!(f, "Min value: {key}"),
            Self::Min(None) => f.write_str("Min value: None"),
            Self::Max(Some(key)) => write!(f, "Max value: {key}"),
            Self::Max(None) => f.write_str("Max value: None"),
            Self::PreOrder(keys) => write!(f, "Pre-order traversal: {}", Keys(keys)),
            Self::InOrder(keys) => write!(f, "In-order traversal: {}", Keys(keys)),
            Self::Sum(total) => write!(f, "Sum of nodes: {total}"),
        }
    }
}
