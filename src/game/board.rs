use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::game::{Icon, IconColor, Shape};

/// Box coordinate: (column, row), zero-indexed.
pub type BoxPos = (usize, usize);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a {width}x{height} board has an odd number of boxes")]
    OddBoxCount { width: usize, height: usize },
    #[error("icon catalog holds {available} kinds but the board needs {needed} pairs")]
    CatalogTooSmall { available: usize, needed: usize },
}

#[derive(Clone, Debug)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    icons: Vec<Icon>,
}

impl Board {
    /// Deal a randomized board: pick `width * height / 2` distinct icons from
    /// the shape/color cross product, duplicate each once, shuffle, assign
    /// row-major. Both shuffles are rand's Fisher-Yates.
    pub fn generate(
        width: usize,
        height: usize,
        shapes: &[Shape],
        colors: &[IconColor],
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        let boxes = width * height;
        if boxes % 2 != 0 {
            return Err(ConfigError::OddBoxCount { width, height });
        }
        let needed = boxes / 2;
        let mut catalog: Vec<Icon> = shapes
            .iter()
            .flat_map(|&shape| colors.iter().map(move |&color| Icon { shape, color }))
            .collect();
        if catalog.len() < needed {
            return Err(ConfigError::CatalogTooSmall {
                available: catalog.len(),
                needed,
            });
        }
        catalog.shuffle(rng);
        catalog.truncate(needed);
        // Two of each icon, dealt in shuffled order.
        let mut icons = catalog.clone();
        icons.extend(catalog);
        icons.shuffle(rng);
        Ok(Self {
            width,
            height,
            icons,
        })
    }

    fn idx(&self, (x, y): BoxPos) -> usize {
        assert!(
            x < self.width && y < self.height,
            "box ({x}, {y}) outside {}x{} board",
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn icon_at(&self, pos: BoxPos) -> Icon {
        self.icons[self.idx(pos)]
    }

    /// All box coordinates, row-major.
    pub fn boxes(&self) -> impl Iterator<Item = BoxPos> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| (x, y)))
    }
}

/// Which boxes currently show their icon. Created all-covered alongside a
/// board and replaced with it when a round ends.
pub struct RevealGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl RevealGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    fn idx(&self, (x, y): BoxPos) -> usize {
        assert!(
            x < self.width && y < self.height,
            "box ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn is_visible(&self, pos: BoxPos) -> bool {
        self.cells[self.idx(pos)]
    }

    pub fn set_visible(&mut self, pos: BoxPos, visible: bool) {
        let idx = self.idx(pos);
        self.cells[idx] = visible;
    }

    /// The win condition: every box face-up.
    pub fn all_visible(&self) -> bool {
        self.cells.iter().all(|&v| v)
    }
}
