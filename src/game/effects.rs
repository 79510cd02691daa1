use rand::seq::SliceRandom;
use rand::thread_rng;
use tracing::debug;

use crate::game::BoxPos;
use crate::{
    INTRO_GROUP_FRAMES, INTRO_GROUP_SIZE, MISMATCH_HOLD_FRAMES, REVEAL_FLASH_FRAMES,
    WIN_FLASH_FRAMES, WIN_FLASH_PERIOD,
};

use super::Game;

impl Game {
    /// Advance every animation counter by one frame.
    pub fn process_effects(&mut self) {
        if self.flash_frames > 0 {
            self.flash_frames -= 1;
            if self.flash_frames == 0 {
                self.flash_boxes.clear();
            }
        }
        if self.cover_frames > 0 {
            self.cover_frames -= 1;
            if self.cover_frames == 0 {
                self.perform_pending_cover();
            }
        }
        if !self.intro_groups.is_empty() {
            if self.intro_frames > 0 {
                self.intro_frames -= 1;
            }
            if self.intro_frames == 0 {
                self.intro_groups.pop_front();
                if !self.intro_groups.is_empty() {
                    self.intro_frames = INTRO_GROUP_FRAMES;
                }
            }
        }
        if self.win_frames > 0 {
            self.win_frames -= 1;
            if self.win_frames == 0 {
                debug!("celebration over, dealing a new board");
                self.reset_round();
            }
        }
    }

    /// True while an animation owns the board and picks are rejected: the
    /// mismatch hold, the intro hint, and the win celebration. The reveal
    /// flash is cosmetic and does not block.
    pub fn is_animating(&self) -> bool {
        !self.intro_groups.is_empty() || self.cover_frames > 0 || self.win_frames > 0
    }

    pub(super) fn flash(&mut self, pos: BoxPos) {
        self.flash_boxes.push(pos);
        self.flash_frames = REVEAL_FLASH_FRAMES;
    }

    pub fn is_flashing(&self, pos: BoxPos) -> bool {
        self.flash_frames > 0 && self.flash_boxes.contains(&pos)
    }

    pub(super) fn schedule_cover(&mut self, pair: [BoxPos; 2]) {
        self.pending_cover = pair.to_vec();
        self.cover_frames = MISMATCH_HOLD_FRAMES;
    }

    fn perform_pending_cover(&mut self) {
        for pos in self.pending_cover.drain(..) {
            self.revealed.set_visible(pos, false);
        }
    }

    /// Flash all boxes face-up in shuffled groups, one group at a time, as a
    /// hint before the round starts.
    pub(super) fn begin_intro(&mut self) {
        let mut boxes: Vec<BoxPos> = self.board.boxes().collect();
        boxes.shuffle(&mut thread_rng());
        self.intro_groups = boxes
            .chunks(INTRO_GROUP_SIZE)
            .map(|group| group.to_vec())
            .collect();
        self.intro_frames = INTRO_GROUP_FRAMES;
    }

    /// True while the intro hint has `pos` turned up. Display-only; the
    /// reveal grid itself stays covered.
    pub fn intro_preview(&self, pos: BoxPos) -> bool {
        self.intro_groups
            .front()
            .is_some_and(|group| group.contains(&pos))
    }

    pub(super) fn start_win_celebration(&mut self) {
        debug!("board cleared");
        self.win_frames = WIN_FLASH_FRAMES;
    }

    /// Celebration background phase, alternating every few frames; `None`
    /// while no celebration runs.
    pub fn win_flash_phase(&self) -> Option<bool> {
        (self.win_frames > 0).then(|| (self.win_frames / WIN_FLASH_PERIOD) % 2 == 0)
    }
}
