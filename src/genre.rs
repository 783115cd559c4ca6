//! Genre categories offered by the calculator.
//!
//! The form restricts the choice to [`Genre`], but input can still arrive as
//! free text (query strings, saved forms). [`GenreCategory`] keeps such
//! labels instead of rejecting them so the estimator can fall back to the
//! default rate.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    Pop,
    HipHop,
    Electronic,
    Rock,
    Indie,
    Other,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Pop,
        Genre::HipHop,
        Genre::Electronic,
        Genre::Rock,
        Genre::Indie,
        Genre::Other,
    ];

    /// Form value, e.g. `"hip-hop"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Pop => "pop",
            Genre::HipHop => "hip-hop",
            Genre::Electronic => "electronic",
            Genre::Rock => "rock",
            Genre::Indie => "indie",
            Genre::Other => "other",
        }
    }

    /// Option label shown in the genre select.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::HipHop => "Hip-Hop/Rap",
            Genre::Electronic => "Electronic/EDM",
            Genre::Rock => "Rock",
            Genre::Indie => "Indie",
            Genre::Other => "Other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre: {0:?}")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact form values only; "Pop" or " rock " are outside the set.
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// A genre as submitted: one of the known categories, or a label outside the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenreCategory {
    Known(Genre),
    Unrecognized(String),
}

impl GenreCategory {
    /// Never fails; labels outside the set are kept as `Unrecognized`.
    pub fn parse(label: &str) -> Self {
        match label.parse::<Genre>() {
            Ok(g) => GenreCategory::Known(g),
            Err(UnknownGenre(s)) => GenreCategory::Unrecognized(s),
        }
    }

    pub fn known(&self) -> Option<Genre> {
        match self {
            GenreCategory::Known(g) => Some(*g),
            GenreCategory::Unrecognized(_) => None,
        }
    }
}

impl From<Genre> for GenreCategory {
    fn from(g: Genre) -> Self {
        GenreCategory::Known(g)
    }
}

impl From<&str> for GenreCategory {
    fn from(label: &str) -> Self {
        GenreCategory::parse(label)
    }
}

impl fmt::Display for GenreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreCategory::Known(g) => g.fmt(f),
            GenreCategory::Unrecognized(s) => f.write_str(s),
        }
    }
}
