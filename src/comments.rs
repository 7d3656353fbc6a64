//! A comment thread. Each `Comment` owns its replies outright, so a whole discussion is one
//! tree rooted at the first comment. Removing a comment only blanks it out; its replies stay.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::comments::Comment;
//!
//! let mut thread = Comment::new("What a wonderful book!", "John");
//! thread
//!     .add_reply(Comment::new("The book was a disappointment :(", "Jane"))
//!     .remove();
//!
//! assert_eq!(
//!     thread.to_string(),
//!     "John: What a wonderful book!\n    [deleted]: This comment has been removed.\n",
//! );
//! ```

use std::fmt;

/// The text a comment is left with once it has been removed.
pub const REMOVED_TEXT: &str = "This comment has been removed.";

/// How far each level of replies is indented when displayed.
const INDENT: &str = "    ";

/// A single comment along with every reply made to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    text: String,
    author: String,
    replies: Vec<Comment>,
    deleted: bool,
}

impl Comment {
    /// Creates a comment with no replies.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            replies: Vec::new(),
            deleted: false,
        }
    }

    /// Appends a reply and hands it back so replies to the reply can be added.
    pub fn add_reply(&mut self, reply: Comment) -> &mut Comment {
        self.replies.push(reply);
        self.replies.last_mut().expect("a reply was just pushed")
    }

    /// Soft-deletes this comment. The author is hidden and the text is replaced but the replies
    /// are kept. Removing twice is the same as removing once.
    pub fn remove(&mut self) {
        self.text = REMOVED_TEXT.to_owned();
        self.deleted = true;
    }

    /// What the comment says, or [`REMOVED_TEXT`] once removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Who wrote the comment.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Direct replies, oldest first.
    pub fn replies(&self) -> &[Comment] {
        &self.replies
    }

    /// Whether [`Comment::remove`] has been called.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        for _ in 0..level {
            f.write_str(INDENT)?;
        }
        if self.deleted {
            writeln!(f, "[deleted]: {}", self.text)?;
        } else {
            writeln!(f, "{}: {}", self.author, self.text)?;
        }
        self.replies
            .iter()
            .try_for_each(|reply| reply.fmt_at(f, level + 1))
    }
}

/// One line per comment, each reply indented one level deeper than its parent.
impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_thread() -> Comment {
        let mut root = Comment::new("What a wonderful book!", "John");
        root.add_reply(Comment::new("The book was a disappointment :(", "Jane"))
            .add_reply(Comment::new("It was a waste of paper...", "Bill"));
        root.add_reply(Comment::new("What's so wonderful about it?", "Mary"));
        root
    }

    #[test]
    fn display_indents_replies() {
        let thread = sample_thread();

        assert_eq!(
            thread.to_string(),
            "John: What a wonderful book!\n\
             \x20   Jane: The book was a disappointment :(\n\
             \x20       Bill: It was a waste of paper...\n\
             \x20   Mary: What's so wonderful about it?\n"
        );
    }

    #[test]
    fn remove_keeps_replies() {
        let mut thread = Comment::new("What a wonderful book!", "John");
        let jane = thread.add_reply(Comment::new("The book was a disappointment :(", "Jane"));
        jane.add_reply(Comment::new("It was a waste of paper...", "Bill"));
        jane.remove();
        thread.add_reply(Comment::new("What's so wonderful about it?", "Mary"));

        let jane = &thread.replies()[0];
        assert!(jane.is_deleted());
        assert_eq!(jane.text(), REMOVED_TEXT);
        assert_eq!(jane.author(), "Jane");
        assert_eq!(jane.replies().len(), 1);

        assert_eq!(
            thread.to_string(),
            "John: What a wonderful book!\n\
             \x20   [deleted]: This comment has been removed.\n\
             \x20       Bill: It was a waste of paper...\n\
             \x20   Mary: What's so wonderful about it?\n"
        );
    }

    #[test]
    fn remove_twice_is_idempotent() {
        let mut comment = Comment::new("hi", "Ann");
        comment.remove();
        let once = comment.clone();
        comment.remove();

        assert_eq!(comment, once);
    }

    #[test]
    fn add_reply_returns_the_new_reply() {
        let mut comment = Comment::new("hi", "Ann");
        comment.add_reply(Comment::new("first", "Bob"));
        let second = comment.add_reply(Comment::new("second", "Cat"));
        second.add_reply(Comment::new("nested", "Dan"));

        assert_eq!(comment.replies().len(), 2);
        assert!(comment.replies()[0].replies().is_empty());
        assert_eq!(comment.replies()[1].replies()[0].text(), "nested");
    }
}
