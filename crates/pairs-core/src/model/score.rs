use crate::model::player::PlayerSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBoard {
    totals: [u32; 2],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 2] }
    }

    pub fn add_point(&mut self, side: PlayerSide) {
        self.totals[side.index()] += 1;
    }

    pub fn score(&self, side: PlayerSide) -> u32 {
        self.totals[side.index()]
    }

    pub fn totals(&self) -> &[u32; 2] {
        &self.totals
    }

    /// Claimed pairs so far; the game ends when this reaches the deck's
    /// pair count.
    pub fn total(&self) -> u32 {
        self.totals.iter().sum()
    }

    pub fn reset(&mut self) {
        self.totals = [0; 2];
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreBoard;
    use crate::model::player::PlayerSide;

    #[test]
    fn points_accumulate_per_side() {
        let mut board = ScoreBoard::new();
        board.add_point(PlayerSide::A);
        board.add_point(PlayerSide::A);
        board.add_point(PlayerSide::B);
        assert_eq!(board.score(PlayerSide::A), 2);
        assert_eq!(board.score(PlayerSide::B), 1);
        assert_eq!(board.total(), 3);
    }

    #[test]
    fn reset_clears_both_sides() {
        let mut board = ScoreBoard::new();
        board.add_point(PlayerSide::B);
        board.reset();
        assert_eq!(board.totals(), &[0, 0]);
    }
}
