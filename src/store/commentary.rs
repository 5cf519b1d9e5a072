use crate::store::cell::Store;
use crate::store::counter::NameChangeCounter;

/// Comments indexed directly by change count. Index 0 is intentionally blank.
pub const COMMENTS: [&str; 6] = [
    "",
    "Way to be consistent!",
    "That's how many moons Mars has.",
    "That's how many sides a triangle has.",
    "That's a typical number of beats in a measure of music.",
    "Jackson 5 was a great band.",
];

pub const FALLBACK_COMMENT: &str = "That's a lot of names!";

/// Comment for a change count. Total over every `u64`.
pub fn commentary_for(count: u64) -> &'static str {
    usize::try_from(count)
        .ok()
        .and_then(|index| COMMENTS.get(index))
        .copied()
        .unwrap_or(FALLBACK_COMMENT)
}

/// Derives the comment shown under the counter.
#[derive(Clone, Debug)]
pub struct CommentarySelector {
    comment: Store<&'static str>,
}

impl CommentarySelector {
    pub fn new(counter: &NameChangeCounter) -> Self {
        let comment = counter.store().map(|count| commentary_for(*count));
        Self { comment }
    }

    pub fn comment(&self) -> Option<&'static str> {
        self.comment.get()
    }

    pub fn store(&self) -> &Store<&'static str> {
        &self.comment
    }
}
