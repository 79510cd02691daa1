use std::collections::VecDeque;

use rand::thread_rng;
use tracing::debug;

use crate::game::{Board, BoxPos, ConfigError, IconColor, RevealGrid, Shape};
use crate::{BOARD_H, BOARD_W};

/// What a single pick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    /// Box already in the selection, or an animation currently owns the board.
    Ignored,
    /// First box of a pair turned face-up.
    Revealed,
    Match,
    Mismatch,
}

pub struct Game {
    pub board: Board,
    pub revealed: RevealGrid,
    /// Box under the pointer, fed by the input loop for the highlight ring.
    pub hover: Option<BoxPos>,
    selection: Vec<BoxPos>,
    // Animation state, ticked by process_effects (see effects.rs).
    pub(super) flash_boxes: Vec<BoxPos>,
    pub(super) flash_frames: u8,
    pub(super) pending_cover: Vec<BoxPos>,
    pub(super) cover_frames: u8,
    pub(super) intro_groups: VecDeque<Vec<BoxPos>>,
    pub(super) intro_frames: u8,
    pub(super) win_frames: u8,
}

impl Game {
    pub fn new() -> Result<Self, ConfigError> {
        let board = Board::generate(
            BOARD_W,
            BOARD_H,
            &Shape::ALL,
            &IconColor::ALL,
            &mut thread_rng(),
        )?;
        let mut game = Self::from_board(board);
        game.begin_intro();
        Ok(game)
    }

    fn from_board(board: Board) -> Self {
        let revealed = RevealGrid::new(board.width, board.height);
        Self {
            board,
            revealed,
            hover: None,
            selection: Vec::new(),
            flash_boxes: Vec::new(),
            flash_frames: 0,
            pending_cover: Vec::new(),
            cover_frames: 0,
            intro_groups: VecDeque::new(),
            intro_frames: 0,
            win_frames: 0,
        }
    }

    /// Turn a box face-up and resolve the selection once it holds two boxes.
    /// A box already in the selection is rejected; a box that is merely
    /// face-up from an earlier match is not.
    pub fn pick(&mut self, pos: BoxPos) -> PickOutcome {
        if self.is_animating() {
            return PickOutcome::Ignored;
        }
        if self.selection.contains(&pos) {
            return PickOutcome::Ignored;
        }
        self.selection.push(pos);
        self.revealed.set_visible(pos, true);
        self.flash(pos);
        debug!(?pos, selected = self.selection.len(), "box picked");
        if self.selection.len() < 2 {
            return PickOutcome::Revealed;
        }
        let (a, b) = (self.selection[0], self.selection[1]);
        let outcome = if self.board.icon_at(a) == self.board.icon_at(b) {
            debug!(?a, ?b, "match");
            PickOutcome::Match
        } else {
            debug!(?a, ?b, "mismatch");
            self.schedule_cover([a, b]);
            PickOutcome::Mismatch
        };
        self.selection.clear();
        outcome
    }

    /// Settled pairs currently face-up. A mismatched pair on its hold and a
    /// lone first pick are still unsettled and do not count.
    pub fn matched_pairs(&self) -> usize {
        let face_up = self
            .board
            .boxes()
            .filter(|&pos| self.revealed.is_visible(pos))
            .count();
        (face_up - self.pending_cover.len() - self.selection.len()) / 2
    }

    /// Win poll, once per frame. Starts the celebration on the frame the
    /// last pair goes up.
    pub fn check_win(&mut self) -> bool {
        if self.win_frames == 0 && self.revealed.all_visible() {
            self.start_win_celebration();
            return true;
        }
        false
    }

    /// Replace board and reveal grid wholesale and play the next round's
    /// intro hint.
    pub(super) fn reset_round(&mut self) {
        // The standard deal is validated by the const assertions in config.
        let board = Board::generate(
            BOARD_W,
            BOARD_H,
            &Shape::ALL,
            &IconColor::ALL,
            &mut thread_rng(),
        )
        .expect("standard board deal is valid");
        *self = Self::from_board(board);
        self.begin_intro();
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::MISMATCH_HOLD_FRAMES;

    use super::*;

    fn drain_animations(game: &mut Game) {
        let mut guard = 0;
        while game.is_animating() {
            game.process_effects();
            guard += 1;
            assert!(guard < 10_000, "animation never settled");
        }
    }

    fn settled_game() -> Game {
        let mut game = Game::new().unwrap();
        drain_animations(&mut game);
        game
    }

    fn small_game() -> Game {
        let board = Board::generate(
            4,
            2,
            &Shape::ALL,
            &IconColor::ALL,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        Game::from_board(board)
    }

    fn matching_pair(game: &Game) -> (BoxPos, BoxPos) {
        let boxes: Vec<BoxPos> = game.board.boxes().collect();
        for (i, &a) in boxes.iter().enumerate() {
            for &b in &boxes[i + 1..] {
                if game.board.icon_at(a) == game.board.icon_at(b) {
                    return (a, b);
                }
            }
        }
        unreachable!("a dealt board always holds pairs");
    }

    fn mismatched_pair(game: &Game) -> (BoxPos, BoxPos) {
        let boxes: Vec<BoxPos> = game.board.boxes().collect();
        for (i, &a) in boxes.iter().enumerate() {
            for &b in &boxes[i + 1..] {
                if game.board.icon_at(a) != game.board.icon_at(b) {
                    return (a, b);
                }
            }
        }
        unreachable!("a board with more than one pair holds mismatches");
    }

    #[test]
    fn matching_pair_stays_visible() {
        let mut game = settled_game();
        let (a, b) = matching_pair(&game);
        assert_eq!(game.pick(a), PickOutcome::Revealed);
        assert!(game.revealed.is_visible(a));
        assert_eq!(game.pick(b), PickOutcome::Match);
        for _ in 0..MISMATCH_HOLD_FRAMES {
            game.process_effects();
        }
        assert!(game.revealed.is_visible(a));
        assert!(game.revealed.is_visible(b));
    }

    #[test]
    fn mismatched_pair_is_covered_after_the_hold() {
        let mut game = settled_game();
        let (a, b) = mismatched_pair(&game);
        assert_eq!(game.pick(a), PickOutcome::Revealed);
        assert_eq!(game.pick(b), PickOutcome::Mismatch);
        // Both stay up for the hold, then both go back down.
        assert!(game.revealed.is_visible(a));
        assert!(game.revealed.is_visible(b));
        assert!(game.is_animating());
        for _ in 0..MISMATCH_HOLD_FRAMES {
            game.process_effects();
        }
        assert!(!game.revealed.is_visible(a));
        assert!(!game.revealed.is_visible(b));
        assert!(!game.is_animating());
    }

    #[test]
    fn picking_the_same_box_twice_is_ignored() {
        let mut game = settled_game();
        let (a, b) = mismatched_pair(&game);
        assert_eq!(game.pick(a), PickOutcome::Revealed);
        assert_eq!(game.pick(a), PickOutcome::Ignored);
        assert!(game.revealed.is_visible(a));
        // The selection did not grow: the next distinct box resolves the pair.
        assert_eq!(game.pick(b), PickOutcome::Mismatch);
    }

    #[test]
    fn picks_are_ignored_while_the_intro_plays() {
        let mut game = Game::new().unwrap();
        assert!(game.is_animating());
        assert_eq!(game.pick((0, 0)), PickOutcome::Ignored);
        assert!(!game.revealed.is_visible((0, 0)));
    }

    #[test]
    fn four_by_two_scenario_resolves_by_icon_value() {
        let mut game = small_game();
        let (a, b) = matching_pair(&game);
        game.pick(a);
        assert_eq!(game.pick(b), PickOutcome::Match);

        let mut game = small_game();
        let (a, b) = mismatched_pair(&game);
        game.pick(a);
        assert_eq!(game.pick(b), PickOutcome::Mismatch);
        for _ in 0..MISMATCH_HOLD_FRAMES {
            game.process_effects();
        }
        assert!(!game.revealed.is_visible(a));
        assert!(!game.revealed.is_visible(b));
    }

    #[test]
    fn winning_celebrates_then_deals_a_fresh_round() {
        let mut game = settled_game();
        for pos in game.board.boxes().collect::<Vec<_>>() {
            game.revealed.set_visible(pos, true);
        }
        assert!(game.check_win());
        // The celebration runs once; the poll does not retrigger it.
        assert!(!game.check_win());
        drain_animations(&mut game);
        assert!(!game.revealed.all_visible());
        assert!(!game.revealed.is_visible((0, 0)));
        // The fresh board still satisfies the pairing invariant.
        let boxes: Vec<BoxPos> = game.board.boxes().collect();
        for &pos in &boxes {
            let twin_count = boxes
                .iter()
                .filter(|&&other| game.board.icon_at(other) == game.board.icon_at(pos))
                .count();
            assert_eq!(twin_count, 2);
        }
        // And play continues normally.
        let (a, _) = matching_pair(&game);
        assert_eq!(game.pick(a), PickOutcome::Revealed);
    }
}
