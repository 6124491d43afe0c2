//! Per-letter feedback status
//!
//! Statuses are totally ordered by how much they reveal about a letter:
//! `Pending < Outcast < IllPositioned < Positioned`.

use std::fmt;

/// Outcome of a single letter once a guess has been evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Not evaluated yet
    #[default]
    Pending,
    /// Letter does not occur in the answer (gray)
    Outcast,
    /// Letter occurs in the answer, but elsewhere (yellow)
    IllPositioned,
    /// Letter is in the right position (green)
    Positioned,
}

impl LetterStatus {
    /// Every status, lowest first
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::Outcast,
        Self::IllPositioned,
        Self::Positioned,
    ];

    /// Combine two observations, keeping the more informative one
    ///
    /// # Examples
    /// ```
    /// use waddle::core::LetterStatus;
    ///
    /// let seen = LetterStatus::Positioned.merge(LetterStatus::Outcast);
    /// assert_eq!(seen, LetterStatus::Positioned);
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    /// True once the letter has been evaluated at least once
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Square emoji used when sharing a result
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Pending => '⬛',
            Self::Outcast => '⬜',
            Self::IllPositioned => '🟨',
            Self::Positioned => '🟩',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "pending",
            Self::Outcast => "outcast",
            Self::IllPositioned => "ill-positioned",
            Self::Positioned => "positioned",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_informativeness() {
        assert!(LetterStatus::Pending < LetterStatus::Outcast);
        assert!(LetterStatus::Outcast < LetterStatus::IllPositioned);
        assert!(LetterStatus::IllPositioned < LetterStatus::Positioned);

        let mut sorted = LetterStatus::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, LetterStatus::ALL);
    }

    #[test]
    fn merge_never_downgrades() {
        for a in LetterStatus::ALL {
            for b in LetterStatus::ALL {
                let merged = a.merge(b);
                assert!(merged >= a);
                assert!(merged >= b);
                assert_eq!(merged, b.merge(a));
            }
        }
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(LetterStatus::default(), LetterStatus::Pending);
        assert!(!LetterStatus::default().is_known());
        assert!(LetterStatus::Outcast.is_known());
    }
}
