use super::{Board, Cell, Player, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won(Player),
    Tied,
}

/// A game in progress or finished. Once the status leaves
/// [`Status::InProgress`] every move is rejected; start a new game instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: Status,
}

impl GameState {
    /// Create a fresh game: empty board, player one to move.
    ///
    /// # Panics
    ///
    /// Panics if `height` or `width` is zero.
    pub fn new(height: usize, width: usize) -> Self {
        GameState {
            board: Board::new(height, width),
            current_player: Player::One,
            status: Status::InProgress,
        }
    }

    /// Resume from an arbitrary position, deriving the status from the board.
    /// If both players own a run, player one is reported as the winner.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        let status = if board.has_win(Player::One) {
            Status::Won(Player::One)
        } else if board.has_win(Player::Two) {
            Status::Won(Player::Two)
        } else if board.is_full() {
            Status::Tied
        } else {
            Status::InProgress
        };
        GameState {
            board,
            current_player,
            status,
        }
    }

    /// Get current player. After a win this is still the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.board.cell_at(row, col)
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Pieces played so far
    pub fn move_count(&self) -> usize {
        self.board.piece_count()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: isize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place. On error nothing is modified.
    pub fn apply_move_mut(&mut self, column: isize) -> Result<(), MoveError> {
        if self.is_terminal() {
            log::trace!("rejected move in column {column}: game over");
            return Err(MoveError::GameOver);
        }

        let width = self.board.width();
        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < width)
            .ok_or(MoveError::InvalidColumn { column, width })?;

        let player = self.current_player;
        let row = self.board.drop_piece(col, player).inspect_err(|e| {
            log::trace!("rejected move in column {col}: {e}");
        })?;
        log::debug!("player {} dropped into ({row}, {col})", player.id());

        if self.board.has_win(player) {
            self.status = Status::Won(player);
            log::debug!("player {} won after {} moves", player.id(), self.move_count());
        } else if self.board.is_full() {
            self.status = Status::Tied;
            log::debug!("board full, game tied\n{}", self.board);
        } else {
            self.current_player = player.other();
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// A full 6x7 game that never completes a run.
    const TIE_SEQUENCE: [isize; 42] = [
        3, 4, 4, 6, 0, 3, 5, 2, 6, 5, 0, 6, 5, 0, 3, 6, 5, 6, 1, 3, 1, 3, 6, 5, 2, 0, 5, 3, 4,
        4, 0, 1, 1, 1, 0, 1, 4, 2, 4, 2, 2, 2,
    ];

    fn play(moves: &[isize]) -> GameState {
        moves.iter().fold(GameState::default(), |state, &col| {
            state.apply_move(col).unwrap()
        })
    }

    fn assert_gravity(board: &Board) {
        for col in 0..board.width() {
            let mut seen_piece = false;
            for row in 0..board.height() {
                let empty = board.is_empty(row, col);
                assert!(
                    !(seen_piece && empty),
                    "empty cell below a piece at ({row}, {col})\n{board}"
                );
                seen_piece |= !empty;
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(6, 7);
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.status(), Status::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state, GameState::default());
    }

    #[test]
    #[should_panic(expected = "board dimensions must be non-zero")]
    fn test_new_game_rejects_empty_grid() {
        GameState::new(0, 0);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::default();
        let next = state.apply_move(3).unwrap();

        assert_eq!(next.current_player(), Player::Two);
        assert_eq!(next.cell_at(5, 3), Ok(Cell::Occupied(Player::One)));
        // The previous state is untouched.
        assert_eq!(state.cell_at(5, 3), Ok(Cell::Empty));
    }

    #[test]
    fn test_apply_move_mut_matches_apply_move() {
        let mut state = GameState::default();
        for col in [3, 3, 2, 4, 0] {
            let expected = state.apply_move(col).unwrap();
            state.apply_move_mut(col).unwrap();
            assert_eq!(state, expected);
        }
    }

    #[test]
    fn test_vertical_stack_wins() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_piece(3, Player::One).unwrap();
        }
        let state = GameState::from_board(board, Player::Two);
        assert_eq!(state.status(), Status::Won(Player::One));
    }

    #[test]
    fn test_alternating_vertical_win() {
        let state = play(&[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(state.status(), Status::Won(Player::One));
        // The winner stays the current player.
        assert_eq!(state.current_player(), Player::One);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_diagonal_win_for_player_two() {
        let mut board = Board::default();
        board.drop_piece(0, Player::Two).unwrap();
        board.drop_piece(1, Player::One).unwrap();
        board.drop_piece(1, Player::Two).unwrap();
        board.drop_piece(2, Player::One).unwrap();
        board.drop_piece(2, Player::One).unwrap();
        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::One).unwrap();
        board.drop_piece(3, Player::Two).unwrap();

        for (row, col) in [(5, 0), (4, 1), (3, 2), (2, 3)] {
            assert_eq!(board.cell_at(row, col), Ok(Cell::Occupied(Player::Two)));
        }
        let state = GameState::from_board(board, Player::One);
        assert_eq!(state.status(), Status::Won(Player::Two));
    }

    #[test]
    fn test_full_board_without_run_is_tied() {
        let mut state = GameState::default();
        for (i, &col) in TIE_SEQUENCE.iter().enumerate() {
            assert_eq!(state.status(), Status::InProgress, "ended early at move {i}");
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(state.status(), Status::Tied);
        assert!(state.board().is_full());
        assert!(!state.board().has_win(Player::One));
        assert!(!state.board().has_win(Player::Two));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        // Player two's 42nd piece both fills the board and completes a row.
        let moves = [
            3, 1, 1, 1, 4, 3, 6, 3, 2, 5, 2, 6, 4, 0, 6, 6, 2, 0, 6, 4, 5, 6, 1, 2, 4, 4, 4, 1,
            5, 2, 3, 1, 3, 2, 0, 5, 5, 3, 0, 0, 5, 0,
        ];
        let state = play(&moves[..41]);
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.current_player(), Player::Two);

        let state = state.apply_move(moves[41]).unwrap();
        assert!(state.board().is_full());
        assert_eq!(state.status(), Status::Won(Player::Two));
    }

    #[test]
    fn test_column_full_leaves_state_unchanged() {
        let state = play(&[2, 2, 2, 2, 2, 2]);
        assert!(state.board().is_column_full(2));
        assert_eq!(state.apply_move(2), Err(MoveError::ColumnFull(2)));

        let mut same = state.clone();
        assert_eq!(same.apply_move_mut(2), Err(MoveError::ColumnFull(2)));
        assert_eq!(same, state);
        assert!(!state.legal_columns().contains(&2));
    }

    #[test]
    fn test_invalid_column() {
        let mut state = GameState::default();
        let before = state.clone();
        for column in [-1, 7, isize::MIN, isize::MAX] {
            assert_eq!(
                state.apply_move_mut(column),
                Err(MoveError::InvalidColumn { column, width: 7 })
            );
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_moves_after_win_are_rejected() {
        let won = play(&[0, 1, 0, 1, 0, 1, 0]);
        for col in 0..7 {
            assert_eq!(won.apply_move(col), Err(MoveError::GameOver));
        }
        // Game over is reported before column validation.
        assert_eq!(won.apply_move(-1), Err(MoveError::GameOver));

        let mut same = won.clone();
        assert_eq!(same.apply_move_mut(3), Err(MoveError::GameOver));
        assert_eq!(same, won);
    }

    #[test]
    fn test_moves_after_tie_are_rejected() {
        let tied = play(&TIE_SEQUENCE);
        assert_eq!(tied.apply_move(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_read_queries_are_idempotent() {
        let state = play(&[3, 2, 3]);
        let status = state.status();
        let cells: Vec<_> = (0..6)
            .flat_map(|r| (0..7).map(move |c| (r, c)))
            .map(|(r, c)| state.cell_at(r, c))
            .collect();
        for _ in 0..3 {
            assert_eq!(state.status(), status);
            let again: Vec<_> = (0..6)
                .flat_map(|r| (0..7).map(move |c| (r, c)))
                .map(|(r, c)| state.cell_at(r, c))
                .collect();
            assert_eq!(again, cells);
        }
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let state = GameState::default();
        assert!(matches!(
            state.cell_at(0, 9),
            Err(BoardError::OutOfBounds { col: 9, .. })
        ));
    }

    #[test]
    fn test_non_default_dimensions() {
        let mut state = GameState::new(4, 5);
        assert_eq!(state.legal_columns().len(), 5);
        assert_eq!(
            state.apply_move(5),
            Err(MoveError::InvalidColumn {
                column: 5,
                width: 5
            })
        );
        for col in [0, 0, 1, 1, 2, 2, 3] {
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(state.status(), Status::Won(Player::One));
    }

    #[test]
    fn test_random_playouts_keep_invariants() {
        let mut rng = StdRng::seed_from_u64(0xC4);
        for _ in 0..200 {
            let mut state = GameState::default();
            while !state.is_terminal() {
                let legal = state.legal_columns();
                assert!(!legal.is_empty());
                let col = legal[rng.random_range(0..legal.len())];
                let mover = state.current_player();
                let row = state.board().find_drop_row(col).unwrap();

                let next = state.apply_move(col as isize).unwrap();

                // Exactly one cell changed, the one the drop scan picked.
                for r in 0..6 {
                    for c in 0..7 {
                        let expected = if (r, c) == (row, col) {
                            Ok(Cell::Occupied(mover))
                        } else {
                            state.cell_at(r, c)
                        };
                        assert_eq!(next.cell_at(r, c), expected);
                    }
                }
                assert_gravity(next.board());
                assert_eq!(next.move_count(), state.move_count() + 1);

                match next.status() {
                    Status::InProgress => assert_eq!(next.current_player(), mover.other()),
                    Status::Won(winner) => {
                        assert_eq!(winner, mover);
                        assert_eq!(next.current_player(), mover);
                    }
                    Status::Tied => {
                        assert!(next.board().is_full());
                        assert!(!next.board().has_win(mover));
                    }
                }
                state = next;
            }
            assert!(state.legal_columns().is_empty());
        }
    }
}
