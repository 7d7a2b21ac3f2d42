//! Game number range and iteration.

use crate::GameRangeError;

/// An inclusive range of game numbers for result retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRange {
    /// First game number (inclusive).
    pub min: u32,
    /// Last game number (inclusive).
    pub max: u32,
}

impl GameRange {
    /// Creates a new game range, validating that 1 <= min <= max.
    ///
    /// # Errors
    ///
    /// Returns an error if min < 1 or min > max.
    pub fn new(min: u32, max: u32) -> Result<Self, GameRangeError> {
        if min < 1 {
            return Err(GameRangeError::MinTooSmall { min });
        }
        if min > max {
            return Err(GameRangeError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Creates a range covering a single drawing.
    #[must_use]
    pub const fn single(game: u32) -> Self {
        Self {
            min: game,
            max: game,
        }
    }

    /// Returns an iterator over all game numbers in the range, ascending.
    ///
    /// Stepped retrieval is expressed with [`Iterator::step_by`] on the
    /// returned iterator.
    pub fn games(&self) -> GameIter {
        GameIter::new(self.min, self.max)
    }

    /// Returns the total number of drawings in the range.
    #[must_use]
    pub const fn total_games(&self) -> usize {
        (self.max - self.min + 1) as usize
    }

    /// Returns true if the range contains the given game number.
    #[must_use]
    pub const fn contains(&self, game: u32) -> bool {
        game >= self.min && game <= self.max
    }

    /// Checks that the range does not reach past the latest published drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if max > latest.
    pub const fn ensure_within(&self, latest: u32) -> Result<(), GameRangeError> {
        if self.max > latest {
            return Err(GameRangeError::BeyondLatest {
                max: self.max,
                latest,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for GameRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}

/// Iterator over all game numbers in a range, ascending.
#[derive(Debug, Clone)]
pub struct GameIter {
    next: Option<u32>,
    max: u32,
}

impl GameIter {
    fn new(min: u32, max: u32) -> Self {
        Self {
            next: Some(min),
            max,
        }
    }
}

impl Iterator for GameIter {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let game = self.next?;
        if game > self.max {
            self.next = None;
            return None;
        }
        self.next = game.checked_add(1);
        Some(game)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) if next <= self.max => (self.max - next + 1) as usize,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GameIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_range_new() {
        let range = GameRange::new(1, 100).unwrap();
        assert_eq!(range.min, 1);
        assert_eq!(range.max, 100);
    }

    #[test]
    fn test_game_range_min_above_max() {
        assert_eq!(
            GameRange::new(500, 10),
            Err(GameRangeError::InvalidRange { min: 500, max: 10 })
        );
    }

    #[test]
    fn test_game_range_min_zero() {
        assert_eq!(
            GameRange::new(0, 10),
            Err(GameRangeError::MinTooSmall { min: 0 })
        );
    }

    #[test]
    fn test_ensure_within() {
        let range = GameRange::new(1, 3000).unwrap();
        assert!(range.ensure_within(3000).is_ok());
        assert_eq!(
            range.ensure_within(2999),
            Err(GameRangeError::BeyondLatest {
                max: 3000,
                latest: 2999
            })
        );
    }

    #[test]
    fn test_total_games() {
        assert_eq!(GameRange::single(5).total_games(), 1);
        assert_eq!(GameRange::new(10, 19).unwrap().total_games(), 10);
    }

    #[test]
    fn test_games_iterator() {
        let games: Vec<_> = GameRange::new(3, 6).unwrap().games().collect();
        assert_eq!(games, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_games_iterator_len() {
        let mut iter = GameRange::new(1, 4).unwrap().games();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_games_step_by() {
        let games: Vec<_> = GameRange::new(1, 10).unwrap().games().step_by(3).collect();
        assert_eq!(games, vec![1, 4, 7, 10]);
    }

    #[test]
    fn test_games_iterator_at_u32_max() {
        let games: Vec<_> = GameRange::single(u32::MAX).games().collect();
        assert_eq!(games, vec![u32::MAX]);
    }

    #[test]
    fn test_contains() {
        let range = GameRange::new(10, 20).unwrap();
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn test_display() {
        let range = GameRange::new(100, 200).unwrap();
        assert_eq!(range.to_string(), "100 to 200");
    }
}
