use log::{debug, info};
use serde::Serialize;

use crate::ai::{Agent, SavedState};
use crate::error::MatchError;
use crate::game::{Board, GameResult, GameState, Player};

/// Everything recorded about one finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub red: String,
    pub yellow: String,
    /// Columns played in order, Red first.
    pub moves: Vec<usize>,
    pub winner: Option<Player>,
    #[serde(skip)]
    pub final_board: Board,
}

impl GameRecord {
    pub fn length(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game, Red moving first. Each agent's saved state is threaded
/// back into its next call. Illegal columns and agent faults end the game
/// with an error.
pub fn play_game<'a>(
    red: &'a mut dyn Agent,
    yellow: &'a mut dyn Agent,
) -> Result<GameRecord, MatchError> {
    let mut state = GameState::initial();
    let mut red_state: Option<SavedState> = None;
    let mut yellow_state: Option<SavedState> = None;
    let mut moves = Vec::new();

    let result = loop {
        if let Some(result) = state.result() {
            break result;
        }

        let player = state.current_player();
        let (agent, saved): (&mut dyn Agent, _) = match player {
            Player::Red => (&mut *red, &mut red_state),
            Player::Yellow => (&mut *yellow, &mut yellow_state),
        };

        let (column, next_saved) = agent
            .generate_move(state.board(), player, saved.take())
            .map_err(|source| MatchError::Agent {
                agent: agent.name().to_string(),
                source,
            })?;
        *saved = next_saved;

        let legal = state.legal_actions();
        if !legal.contains(&column) {
            return Err(MatchError::IllegalMove {
                agent: agent.name().to_string(),
                column,
                legal,
            });
        }

        debug!("{} ({}) plays column {column}", agent.name(), player.name());
        state = state.apply_move(column)?;
        moves.push(column);
    };

    let winner = result.winner();
    match result {
        GameResult::Winner(player) => info!(
            "{} ({}) wins after {} moves",
            match player {
                Player::Red => red.name(),
                Player::Yellow => yellow.name(),
            },
            player.name(),
            moves.len()
        ),
        GameResult::Draw => info!("draw after {} moves", moves.len()),
    }

    Ok(GameRecord {
        red: red.name().to_string(),
        yellow: yellow.name().to_string(),
        moves,
        winner,
        final_board: *state.board(),
    })
}
