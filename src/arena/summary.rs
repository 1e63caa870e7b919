use serde::Serialize;

use crate::game::Player;

use super::game::GameRecord;

/// Aggregated results of a match between two agents. "First" is the agent
/// that plays Red in game one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchSummary {
    pub first: String,
    pub second: String,
    pub games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub red_wins: usize,
    pub yellow_wins: usize,
    total_moves: usize,
}

impl MatchSummary {
    pub fn new(first: &str, second: &str) -> Self {
        MatchSummary {
            first: first.to_string(),
            second: second.to_string(),
            ..Default::default()
        }
    }

    /// Record a finished game. `first_is_red` tells which seat the first
    /// agent had.
    pub fn record(&mut self, game: &GameRecord, first_is_red: bool) {
        self.games += 1;
        self.total_moves += game.length();

        match game.winner {
            None => self.draws += 1,
            Some(winner) => {
                match winner {
                    Player::Red => self.red_wins += 1,
                    Player::Yellow => self.yellow_wins += 1,
                }
                if (winner == Player::Red) == first_is_red {
                    self.first_wins += 1;
                } else {
                    self.second_wins += 1;
                }
            }
        }
    }

    /// Share of games won by the first agent.
    pub fn first_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.first_wins as f32 / self.games as f32
    }

    /// Share of games won by the second agent.
    pub fn second_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.second_wins as f32 / self.games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games as f32
    }

    /// Average number of moves per game.
    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}
