//! Seasons: a cyclic four-state calendar.

use serde::{Deserialize, Serialize};

/// Number of seasons in a year.
pub const SEASON_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; SEASON_COUNT] = [
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    /// Season for an index, wrapping modulo 4.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % SEASON_COUNT]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The following season; Winter wraps to Spring.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        };
        f.write_str(name)
    }
}

/// Season and year tracking.
///
/// A year starts whenever a round begins in the season the game started in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    first_season: Season,
    current: Season,
    year_count: u32,
}

impl Calendar {
    /// A calendar at `first_season`, before any year has started.
    #[must_use]
    pub fn new(first_season: Season) -> Self {
        Self {
            first_season,
            current: first_season,
            year_count: 0,
        }
    }

    #[must_use]
    pub fn first_season(&self) -> Season {
        self.first_season
    }

    #[must_use]
    pub fn current(&self) -> Season {
        self.current
    }

    #[must_use]
    pub fn year_count(&self) -> u32 {
        self.year_count
    }

    /// Year check at the start of a round.
    pub fn begin_round(&mut self) {
        if self.current == self.first_season {
            self.year_count += 1;
        }
    }

    /// Move to the next season at the end of a round.
    pub fn advance(&mut self) {
        self.current = self.current.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_has_period_four() {
        for start in Season::ALL {
            let mut season = start;
            for _ in 0..SEASON_COUNT {
                season = season.next();
            }
            assert_eq!(season, start);
        }
        assert_eq!(Season::Winter.next(), Season::Spring);
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Season::from_index(0), Season::Spring);
        assert_eq!(Season::from_index(6), Season::Autumn);
        assert_eq!(Season::Autumn.index(), 2);
    }

    #[test]
    fn test_year_counts_every_four_rounds() {
        let mut calendar = Calendar::new(Season::Autumn);
        let mut years = Vec::new();
        for _ in 0..9 {
            calendar.begin_round();
            years.push(calendar.year_count());
            calendar.advance();
        }
        assert_eq!(years, vec![1, 1, 1, 1, 2, 2, 2, 2, 3]);
        assert_eq!(calendar.current(), Season::Winter);
        assert_eq!(calendar.first_season(), Season::Autumn);
    }
}
