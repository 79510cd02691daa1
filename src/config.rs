// Shared board/UI constants.
use crate::game::{IconColor, Shape};

pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 7;
pub const CELL_W: usize = 5; // width of one box's glyph stamp
pub const CELL_H: usize = 3;
pub const GAP: usize = 1; // blank ring between boxes, also holds the hover highlight
pub const PLAY_W: usize = BOARD_W * (CELL_W + GAP) + GAP + 2; // boxes + gaps + side walls
pub const PLAY_H: usize = BOARD_H * (CELL_H + GAP) + GAP + 2; // boxes + gaps + ceiling/floor
// Minimal pane width to fit the playfield + cabinet border.
pub const MIN_PANE_WIDTH: u16 = PLAY_W as u16 + 2;

pub const FRAME_MS: u64 = 50;
pub const REVEAL_FLASH_FRAMES: u8 = 2;
pub const MISMATCH_HOLD_FRAMES: u8 = 20; // ~1s before a mismatched pair is covered again
pub const INTRO_GROUP_SIZE: usize = 8;
pub const INTRO_GROUP_FRAMES: u8 = 12;
pub const WIN_FLASH_FRAMES: u8 = 70;
pub const WIN_FLASH_PERIOD: u8 = 6; // frames per background alternation

// The standard deal must split into pairs, and the icon catalog must cover it.
const _: () = assert!(BOARD_W * BOARD_H % 2 == 0);
const _: () = assert!(Shape::ALL.len() * IconColor::ALL.len() * 2 >= BOARD_W * BOARD_H);
