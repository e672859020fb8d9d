//! Crossterm/ratatui implementation of the game console.

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stdout};
use strictly_connect4::{
    Board, Console, ConsoleError, GameState, GameView, Player, RenderKind, Scoreboard, TurnInput,
    WinningLine,
};
use tracing::{debug, info, instrument, warn};

use crate::keymap::{column_from_key, restart_from_key, should_quit};
use crate::ui;

/// Owned copy of the last view drawn, kept for repaints.
#[derive(Debug, Clone)]
struct Snapshot {
    board: Board,
    state: GameState,
    players: [Player; 2],
    scoreboard: Scoreboard,
    winning_line: Option<WinningLine>,
}

impl Snapshot {
    fn capture(view: &GameView<'_>) -> Self {
        Self {
            board: view.board.clone(),
            state: view.state.clone(),
            players: view.players.clone(),
            scoreboard: *view.scoreboard,
            winning_line: view.winning_line.copied(),
        }
    }

    fn view(&self) -> GameView<'_> {
        GameView::new(
            &self.board,
            &self.state,
            &self.players,
            &self.scoreboard,
            self.winning_line.as_ref(),
        )
    }
}

/// A ratatui terminal that keeps the last view it drew, so it can repaint
/// after a resize clears the viewport.
pub struct Screen<B: Backend> {
    terminal: Terminal<B>,
    last: Option<Snapshot>,
}

impl<B: Backend> Screen<B> {
    /// Wraps a terminal that has not drawn anything yet.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            last: None,
        }
    }

    /// Draws `view`, clearing first on the initial render.
    pub fn render(&mut self, view: &GameView<'_>, kind: RenderKind) -> Result<(), B::Error> {
        if kind == RenderKind::Initial {
            self.terminal.clear()?;
        }
        self.terminal.draw(|frame| ui::draw(frame, view))?;
        self.last = Some(Snapshot::capture(view));
        Ok(())
    }

    /// Draws the last rendered view again at the current terminal size.
    /// Does nothing before the first render.
    pub fn repaint(&mut self) -> Result<(), B::Error> {
        let Self { terminal, last } = self;
        if let Some(last) = last {
            terminal.draw(|frame| ui::draw(frame, &last.view()))?;
        }
        Ok(())
    }

    /// The wrapped terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The wrapped terminal, mutably.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Full-screen terminal console.
///
/// Owns raw mode and the alternate screen for its lifetime; [`exit`] (or
/// drop) restores the terminal.
///
/// [`exit`]: TerminalConsole::exit
pub struct TerminalConsole {
    screen: Screen<CrosstermBackend<Stdout>>,
    entered: bool,
}

impl TerminalConsole {
    /// Switches the terminal to raw mode on the alternate screen.
    #[instrument]
    pub fn enter() -> Result<Self, ConsoleError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info!("Terminal console entered");
        Ok(Self {
            screen: Screen::new(terminal),
            entered: true,
        })
    }

    /// Leaves the alternate screen and raw mode. Safe to call twice.
    #[instrument(skip(self))]
    pub fn exit(&mut self) -> Result<(), ConsoleError> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        disable_raw_mode()?;
        let terminal = self.screen.terminal_mut();
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("Terminal console restored");
        Ok(())
    }

    /// Blocks until a key press arrives.
    fn next_key(&mut self) -> Result<KeyEvent, ConsoleError> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.screen.repaint()?;
                }
                _ => {}
            }
        }
    }
}

impl Console for TerminalConsole {
    #[instrument(skip(self, view))]
    fn render(&mut self, view: &GameView<'_>, kind: RenderKind) -> Result<(), ConsoleError> {
        self.screen.render(view, kind)?;
        Ok(())
    }

    #[instrument(skip(self, active), fields(player = %active.name()))]
    fn request_column_choice(&mut self, active: &Player) -> Result<TurnInput, ConsoleError> {
        loop {
            let key = self.next_key()?;
            if should_quit(key) {
                return Ok(TurnInput::Quit);
            }
            match column_from_key(key) {
                Some(column) => {
                    debug!(column, "Column chosen");
                    return Ok(TurnInput::Column(column));
                }
                None => debug!(?key, "Key ignored"),
            }
        }
    }

    #[instrument(skip(self))]
    fn request_restart_choice(&mut self) -> Result<bool, ConsoleError> {
        loop {
            let key = self.next_key()?;
            if should_quit(key) {
                return Ok(false);
            }
            if let Some(restart) = restart_from_key(key) {
                debug!(restart, "Restart answered");
                return Ok(restart);
            }
        }
    }
}

impl Drop for TerminalConsole {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}
