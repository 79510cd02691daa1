use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::game::{BoxPos, Game, IconColor, Shape};
use crate::{BOARD_H, BOARD_W, CELL_H, CELL_W, GAP, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

const INFO_H: u16 = 4;
const CONTROLS_H: u16 = 5;

const HIGHLIGHT: Color = Color::LightBlue;
const COVER: Color = Color::White;

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE TERMINAL (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("PAIRS"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("PAIRS")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    frame.render_widget(cabinet, area);

    let (info_rect, well_rect, controls_rect) = layout_rects(area);
    draw_info(frame, game, info_rect);
    draw_playfield(frame, game, well_rect);
    draw_controls(frame, controls_rect);
}

/// Screen rectangle of the playfield, given the full terminal area. Shared
/// by drawing and mouse hit-testing so both always agree.
pub fn playfield_rect(area: Rect) -> Rect {
    layout_rects(area).1
}

fn layout_rects(area: Rect) -> (Rect, Rect, Rect) {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(0),
        ])
        .split(inner)[1];

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INFO_H),
            Constraint::Length(PLAY_H as u16),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(col_rect);

    (stack[1], stack[2], stack[3])
}

/// Map a terminal-cell position to the enclosing box, `None` in the margin
/// and the gaps between boxes.
pub fn box_at(play: Rect, column: u16, row: u16) -> Option<BoxPos> {
    let inner_x = (column as usize).checked_sub(play.x as usize + 1 + GAP)?;
    let inner_y = (row as usize).checked_sub(play.y as usize + 1 + GAP)?;
    let (bx, dx) = (inner_x / (CELL_W + GAP), inner_x % (CELL_W + GAP));
    let (by, dy) = (inner_y / (CELL_H + GAP), inner_y % (CELL_H + GAP));
    if bx < BOARD_W && by < BOARD_H && dx < CELL_W && dy < CELL_H {
        Some((bx, by))
    } else {
        None
    }
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![(' ', Style::default()); PLAY_W]; PLAY_H];

    // Border: top/ceiling, sides, heavy floor.
    grid[0][0].0 = '┌';
    grid[0][PLAY_W - 1].0 = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x].0 = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0].0 = '│';
        grid[y][PLAY_W - 1].0 = '│';
    }
    grid[PLAY_H - 1][0].0 = '└';
    grid[PLAY_H - 1][PLAY_W - 1].0 = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x].0 = '═';
    }

    for pos in game.board.boxes() {
        let face_up = game.revealed.is_visible(pos) || game.intro_preview(pos);
        if game.is_flashing(pos) {
            stamp(&mut grid, pos, ["▓▓▓▓▓"; CELL_H], Style::default().fg(COVER));
        } else if face_up {
            let icon = game.board.icon_at(pos);
            stamp(&mut grid, pos, shape_rows(icon.shape), color_style(icon.color));
        } else {
            stamp(&mut grid, pos, ["▒▒▒▒▒"; CELL_H], Style::default().fg(COVER));
        }
    }

    // Highlight ring for the box under the pointer, covered boxes only.
    if let Some(pos) = game.hover {
        if !game.revealed.is_visible(pos) && !game.is_animating() {
            stamp_ring(&mut grid, pos);
        }
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    // Celebration: alternate the playfield background.
    let base = match game.win_flash_phase() {
        Some(true) => Style::default().bg(Color::DarkGray),
        _ => Style::default(),
    };

    let paragraph = Paragraph::new(lines).style(base).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);
}

/// Top-left corner of a box's glyph stamp within the playfield char grid.
fn cell_origin((x, y): BoxPos) -> (usize, usize) {
    (1 + GAP + x * (CELL_W + GAP), 1 + GAP + y * (CELL_H + GAP))
}

fn stamp(grid: &mut [Vec<(char, Style)>], pos: BoxPos, rows: [&str; CELL_H], style: Style) {
    let (gx, gy) = cell_origin(pos);
    for (dy, row) in rows.iter().enumerate() {
        for (dx, ch) in row.chars().enumerate() {
            if ch != ' ' {
                grid[gy + dy][gx + dx] = (ch, style);
            }
        }
    }
}

fn stamp_ring(grid: &mut [Vec<(char, Style)>], pos: BoxPos) {
    let (gx, gy) = cell_origin(pos);
    let (left, top) = (gx - 1, gy - 1);
    let (right, bottom) = (gx + CELL_W, gy + CELL_H);
    let style = Style::default().fg(HIGHLIGHT);
    for x in left..=right {
        grid[top][x] = ('─', style);
        grid[bottom][x] = ('─', style);
    }
    for y in top..=bottom {
        grid[y][left] = ('│', style);
        grid[y][right] = ('│', style);
    }
    grid[top][left] = ('┌', style);
    grid[top][right] = ('┐', style);
    grid[bottom][left] = ('└', style);
    grid[bottom][right] = ('┘', style);
}

fn shape_rows(shape: Shape) -> [&'static str; CELL_H] {
    match shape {
        Shape::Donut => [" ███ ", "█   █", " ███ "],
        Shape::Square => ["█████", "█████", "█████"],
        Shape::Diamond => ["  █  ", " ███ ", "  █  "],
        Shape::Triangle => ["  █  ", " ███ ", "█████"],
        Shape::Circle => [" ███ ", "█████", " ███ "],
    }
}

fn color_style(color: IconColor) -> Style {
    let fg = match color {
        IconColor::Red => Color::Red,
        IconColor::Green => Color::Green,
        IconColor::Blue => Color::Blue,
        IconColor::Yellow => Color::Yellow,
        IconColor::Orange => Color::Rgb(255, 165, 0),
        IconColor::Purple => Color::Magenta,
        IconColor::Cyan => Color::Cyan,
    };
    Style::default().fg(fg)
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let status = match game.win_flash_phase() {
        Some(true) => "WON!",
        Some(false) => "    ",
        None if game.is_animating() => "DEAL",
        None => "PLAY",
    };

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(vec![
        Line::raw(format!(
            "{:<8} {}/{}",
            "PAIRS:",
            game.matched_pairs(),
            BOARD_W * BOARD_H / 2
        )),
        Line::raw(format!("{:<8} {}", "STATUS:", status)),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(text, inner);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(vec![
        Line::raw("point  aim"),
        Line::raw("click  reveal"),
        Line::raw("q/esc  quit"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(text, inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play() -> Rect {
        Rect::new(5, 3, PLAY_W as u16, PLAY_H as u16)
    }

    #[test]
    fn playfield_rect_has_the_fixed_size() {
        let rect = playfield_rect(Rect::new(0, 0, 80, 50));
        assert_eq!(rect.width, PLAY_W as u16);
        assert_eq!(rect.height, PLAY_H as u16);
    }

    #[test]
    fn hits_inside_a_box_map_to_it() {
        // First box starts one border plus one gap in from the rect origin.
        assert_eq!(box_at(play(), 7, 5), Some((0, 0)));
        assert_eq!(box_at(play(), 7 + CELL_W as u16 - 1, 5), Some((0, 0)));
        // Last box.
        let gx = 5 + 2 + 9 * (CELL_W + GAP) as u16;
        let gy = 3 + 2 + 6 * (CELL_H + GAP) as u16;
        assert_eq!(box_at(play(), gx, gy), Some((9, 6)));
    }

    #[test]
    fn margins_and_gaps_miss() {
        // Border and margin.
        assert_eq!(box_at(play(), 5, 3), None);
        assert_eq!(box_at(play(), 6, 4), None);
        // Gap column between box 0 and box 1.
        assert_eq!(box_at(play(), 7 + CELL_W as u16, 5), None);
        // Gap row below box (0, 0).
        assert_eq!(box_at(play(), 7, 5 + CELL_H as u16), None);
        // Beyond the last box.
        assert_eq!(box_at(play(), play().right(), 5), None);
        assert_eq!(box_at(play(), 7, play().bottom()), None);
    }
}
