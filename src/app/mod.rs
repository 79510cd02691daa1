use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::ui::{box_at, draw_game, playfield_rect};
use crate::{Game, FRAME_MS, MIN_PANE_WIDTH};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let mut game = Game::new()?;
    info!("board dealt, entering main loop");
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &game))?;

        if event::poll(Duration::from_millis(FRAME_MS))? {
            match event::read()? {
                Event::Key(key) if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) => {
                    break;
                }
                Event::Mouse(mouse) => handle_mouse(mouse, &mut game, terminal.size()?),
                _ => {}
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(FRAME_MS) {
            game.process_effects();
            last_tick = Instant::now();
        }

        if game.check_win() {
            info!("board cleared, celebration started");
        }
    }
    Ok(())
}

fn handle_mouse(mouse: MouseEvent, game: &mut Game, area: Rect) {
    if area.width < MIN_PANE_WIDTH {
        return;
    }
    let play = playfield_rect(area);
    match mouse.kind {
        MouseEventKind::Moved => {
            game.hover = box_at(play, mouse.column, mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(pos) = box_at(play, mouse.column, mouse.row) {
                let outcome = game.pick(pos);
                debug!(?pos, ?outcome, "click");
            }
        }
        _ => {}
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
