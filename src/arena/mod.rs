//! Match runner: drives two agents through complete games, validating every
//! move, and aggregates the results.

mod game;
mod summary;

pub use game::{play_game, GameRecord};
pub use summary::MatchSummary;

use log::info;

use crate::ai::Agent;
use crate::error::MatchError;

/// Match configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: usize,
    /// Alternate which agent plays Red every game.
    pub swap_colors: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            swap_colors: true,
        }
    }
}

/// Play `config.games` games between `first` and `second`. `first` plays Red
/// in game one. `on_game` is called after every finished game with its
/// zero-based index.
pub fn play_match<F>(
    config: &ArenaConfig,
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    mut on_game: F,
) -> Result<MatchSummary, MatchError>
where
    F: FnMut(usize, &GameRecord),
{
    let mut summary = MatchSummary::new(first.name(), second.name());

    for index in 0..config.games {
        let first_is_red = !config.swap_colors || index % 2 == 0;
        let record = if first_is_red {
            play_game(&mut *first, &mut *second)?
        } else {
            play_game(&mut *second, &mut *first)?
        };
        summary.record(&record, first_is_red);
        on_game(index, &record);
    }

    info!(
        "match finished: {} {} - {} {} ({} draws, avg {:.1} moves)",
        summary.first,
        summary.first_wins,
        summary.second_wins,
        summary.second,
        summary.draws,
        summary.average_game_length()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};

    #[test]
    fn plays_requested_number_of_games() {
        let config = ArenaConfig {
            games: 4,
            swap_colors: true,
        };
        let mut first = RandomAgent::with_seed(10);
        let mut second = RandomAgent::with_seed(20);
        let mut seats = Vec::new();
        let summary = play_match(&config, &mut first, &mut second, |index, record| {
            seats.push((index, record.red.clone()));
        })
        .unwrap();

        assert_eq!(summary.games, 4);
        assert_eq!(summary.first_wins + summary.second_wins + summary.draws, 4);
        assert_eq!(summary.red_wins + summary.yellow_wins + summary.draws, 4);
        assert_eq!(seats.len(), 4);
    }

    #[test]
    fn minimax_dominates_random() {
        let config = ArenaConfig {
            games: 6,
            swap_colors: true,
        };
        let mut minimax = MinimaxAgent::new(4);
        let mut random = RandomAgent::with_seed(99);
        let summary = play_match(&config, &mut minimax, &mut random, |_, _| {}).unwrap();
        assert_eq!(summary.first, "Minimax");
        assert!(
            summary.first_wins >= 5,
            "minimax won only {}/{}",
            summary.first_wins,
            summary.games
        );
    }

    #[test]
    fn fixed_colors_keep_first_as_red() {
        let config = ArenaConfig {
            games: 3,
            swap_colors: false,
        };
        let mut first = MinimaxAgent::new(2);
        let mut second = RandomAgent::with_seed(5);
        let mut reds = Vec::new();
        play_match(&config, &mut first, &mut second, |_, record| {
            reds.push(record.red.clone());
        })
        .unwrap();
        assert!(reds.iter().all(|name| name == "Minimax"));
    }
}
