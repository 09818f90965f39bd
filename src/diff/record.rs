//! Match records produced by the aligners.
//!
//! A record pairs a unit of text from input A with a unit from input B.
//! Word-level records are plain [`TextPair`]s. Line-level records are
//! [`LineMatch`]es, which are either a leaf pair or a composite carrying the
//! word-level alignment of a "similar" line. Nesting stops at one level: a
//! [`WordMatch`] has no room for children.

use serde::{Deserialize, Serialize};

/// Classification of a match record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Both sides carry identical text (including both empty)
    Same,
    /// Text only present in input A
    OnlyInA,
    /// Text only present in input B
    OnlyInB,
    /// Lines differ but share enough words to be paired
    Similar,
}

impl MatchKind {
    /// Short label used by reporters.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::OnlyInA => "only_in_a",
            Self::OnlyInB => "only_in_b",
            Self::Similar => "similar",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A pair of text fragments, one per input. An absent side is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextPair {
    a: String,
    b: String,
}

/// Word-level match record. Never carries children.
pub type WordMatch = TextPair;

impl TextPair {
    /// Create a pair from both sides.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// A pair with identical text on both sides.
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            a: text.clone(),
            b: text,
        }
    }

    /// A pair with text only on the A side.
    pub fn only_in_a(text: impl Into<String>) -> Self {
        Self::new(text, String::new())
    }

    /// A pair with text only on the B side.
    pub fn only_in_b(text: impl Into<String>) -> Self {
        Self::new(String::new(), text)
    }

    /// Text from input A.
    #[must_use]
    pub fn a(&self) -> &str {
        &self.a
    }

    /// Text from input B.
    #[must_use]
    pub fn b(&self) -> &str {
        &self.b
    }

    #[must_use]
    pub fn is_same(&self) -> bool {
        self.a == self.b
    }

    #[must_use]
    pub fn is_only_in_a(&self) -> bool {
        !self.a.is_empty() && self.b.is_empty()
    }

    #[must_use]
    pub fn is_only_in_b(&self) -> bool {
        !self.b.is_empty() && self.a.is_empty()
    }

    /// Classify this pair.
    ///
    /// Returns `None` for two unequal non-empty sides, which the aligners
    /// never produce for a leaf.
    #[must_use]
    pub fn kind(&self) -> Option<MatchKind> {
        if self.is_same() {
            Some(MatchKind::Same)
        } else if self.is_only_in_a() {
            Some(MatchKind::OnlyInA)
        } else if self.is_only_in_b() {
            Some(MatchKind::OnlyInB)
        } else {
            None
        }
    }
}

/// Line-level match record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum LineMatch {
    /// Same, only-in-A or only-in-B line
    Leaf(TextPair),
    /// Similar line with its word-level alignment
    Composite {
        pair: TextPair,
        words: Vec<WordMatch>,
    },
}

impl LineMatch {
    /// Leaf record for a line present on both sides.
    pub fn same(text: impl Into<String>) -> Self {
        Self::Leaf(TextPair::same(text))
    }

    /// Leaf record for a line only in A.
    pub fn only_in_a(text: impl Into<String>) -> Self {
        Self::Leaf(TextPair::only_in_a(text))
    }

    /// Leaf record for a line only in B.
    pub fn only_in_b(text: impl Into<String>) -> Self {
        Self::Leaf(TextPair::only_in_b(text))
    }

    /// Record for two lines paired through their word alignment.
    ///
    /// An empty word list cannot describe a similar line, so it yields a leaf.
    pub fn similar(a: impl Into<String>, b: impl Into<String>, words: Vec<WordMatch>) -> Self {
        let pair = TextPair::new(a, b);
        if words.is_empty() {
            Self::Leaf(pair)
        } else {
            Self::Composite { pair, words }
        }
    }

    /// The underlying text pair.
    #[must_use]
    pub const fn pair(&self) -> &TextPair {
        match self {
            Self::Leaf(pair) | Self::Composite { pair, .. } => pair,
        }
    }

    /// Text from input A.
    #[must_use]
    pub fn a(&self) -> &str {
        self.pair().a()
    }

    /// Text from input B.
    #[must_use]
    pub fn b(&self) -> &str {
        self.pair().b()
    }

    /// Word-level children; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[WordMatch] {
        match self {
            Self::Leaf(_) => &[],
            Self::Composite { words, .. } => words,
        }
    }

    #[must_use]
    pub fn is_same(&self) -> bool {
        self.pair().is_same()
    }

    #[must_use]
    pub fn is_only_in_a(&self) -> bool {
        self.pair().is_only_in_a()
    }

    #[must_use]
    pub fn is_only_in_b(&self) -> bool {
        self.pair().is_only_in_b()
    }

    #[must_use]
    pub const fn is_similar(&self) -> bool {
        matches!(self, Self::Composite { .. })
    }

    /// Classify this record.
    ///
    /// Checks equality first, then the composite shape, then the one-sided
    /// cases. `None` marks a leaf with two unequal non-empty sides.
    #[must_use]
    pub fn kind(&self) -> Option<MatchKind> {
        if self.is_same() {
            Some(MatchKind::Same)
        } else if self.is_similar() {
            Some(MatchKind::Similar)
        } else {
            self.pair().kind()
        }
    }
}
