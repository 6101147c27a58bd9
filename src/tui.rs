//! TUI (Terminal User Interface) front end for the guessing game.
//!
//! # State Machine
//! - `EnteringGuess`: typing into the input row; ENTER submits, ESC quits
//! - `GameOver`: secret guessed; any key leaves
//!
//! Scoring and validation stay in `game_state`; this module only collects
//! keystrokes and draws the guess history the loop reports back.

use crate::cli::{VICTORY_MESSAGE, length_error_message};
use crate::error::GameError;
use crate::game_state::GameInterface;
use crate::scorer::Feedback;
use crate::secret::CODE_LENGTH;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

/// Longest input the row accepts; longer than the code so a
/// wrong-length guess can still be submitted and reported.
const MAX_INPUT_LEN: usize = CODE_LENGTH * 2;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const EXACT_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const PARTIAL_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const INPUT_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    GameOver,
}

/// What a key press did to the input row.
#[derive(Debug, PartialEq, Eq)]
enum InputAction {
    Submit(String),
    Quit,
    Edited,
    Ignored,
}

#[derive(Debug, Clone)]
struct ScoredGuess {
    guess: String,
    feedback: Feedback,
}

/// Input row and history, independent of the terminal so key handling is
/// testable.
#[derive(Debug)]
struct Board {
    history: Vec<ScoredGuess>,
    current_input: String,
    state: TuiState,
    message: String,
    error_message: String,
}

impl Board {
    fn new() -> Self {
        Self {
            history: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            message: format!("Guess the {CODE_LENGTH}-digit code. No digit repeats."),
            error_message: String::new(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        if key.kind != KeyEventKind::Press {
            return InputAction::Ignored;
        }
        match key.code {
            KeyCode::Enter => {
                let guess = std::mem::take(&mut self.current_input);
                debug_log!("handle_key() - submitting {:?}", guess);
                InputAction::Submit(guess)
            }
            KeyCode::Esc => InputAction::Quit,
            KeyCode::Backspace => {
                self.current_input.pop();
                InputAction::Edited
            }
            KeyCode::Char(c) if !c.is_control() => {
                if self.current_input.chars().count() < MAX_INPUT_LEN {
                    self.current_input.push(c);
                    self.error_message.clear();
                    InputAction::Edited
                } else {
                    InputAction::Ignored
                }
            }
            _ => InputAction::Ignored,
        }
    }

    fn record(&mut self, guess: &str, feedback: Feedback) {
        self.history.push(ScoredGuess {
            guess: guess.to_string(),
            feedback,
        });
        self.error_message.clear();
    }
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Board,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info_log!("Terminal setup complete");
        Ok(Self {
            terminal,
            board: Board::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let board = &self.board;
        self.terminal.draw(|f| render(f, board))?;
        Ok(())
    }

    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_guess(&mut self) -> Result<Option<String>, GameError> {
        loop {
            self.draw()?;
            let Some(key) = self.next_key()? else {
                continue;
            };
            match self.board.handle_key(key) {
                InputAction::Submit(guess) => return Ok(Some(guess)),
                InputAction::Quit => {
                    info_log!("read_guess() - ESC pressed");
                    return Ok(None);
                }
                InputAction::Edited | InputAction::Ignored => {}
            }
        }
    }

    fn display_length_error(&mut self, expected: usize) -> Result<(), GameError> {
        self.board.error_message = length_error_message(expected);
        self.draw()?;
        Ok(())
    }

    fn display_feedback(&mut self, guess: &str, feedback: &Feedback) -> Result<(), GameError> {
        self.board.record(guess, *feedback);
        self.draw()?;
        Ok(())
    }

    fn display_victory(&mut self) -> Result<(), GameError> {
        self.board.state = TuiState::GameOver;
        self.board.message = VICTORY_MESSAGE.to_string();
        loop {
            self.draw()?;
            if let Some(key) = self.next_key()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(());
            }
        }
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn render(f: &mut Frame, board: &Board) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // History
            Constraint::Length(3), // Input
            Constraint::Length(4), // Messages
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_history(f, chunks[1], &board.history);
    render_input(f, chunks[2], &board.current_input, board.state);
    render_messages(f, chunks[3], board);
    render_instructions(f, chunks[4], board.state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("BULLS AND COWS")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn history_line(entry: &ScoredGuess) -> Line<'_> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!(" {} ", entry.guess), INPUT_STYLE),
        Span::raw("  "),
        Span::styled(format!(" {} ", entry.feedback.exact), EXACT_STYLE),
        Span::raw(" "),
        Span::styled(format!(" {} ", entry.feedback.partial), PARTIAL_STYLE),
        Span::raw(format!("  {}", entry.feedback)),
    ])
}

fn render_history(f: &mut Frame, area: Rect, history: &[ScoredGuess]) {
    let block = Block::default().title("Guesses").borders(Borders::ALL);
    let visible = block.inner(area).height as usize;
    // Most recent guesses win when the panel is too short
    let skip = history.len().saturating_sub(visible);
    let lines: Vec<Line> = history.iter().skip(skip).map(history_line).collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_input(f: &mut Frame, area: Rect, current_input: &str, state: TuiState) {
    let text = match state {
        TuiState::EnteringGuess => Line::from(vec![
            Span::raw("Guess: "),
            Span::styled(format!("{current_input:<width$}", width = CODE_LENGTH), INPUT_STYLE),
        ]),
        TuiState::GameOver => Line::from(""),
    };
    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, area: Rect, board: &Board) {
    let message_style = match board.state {
        TuiState::GameOver => SUCCESS_STYLE,
        TuiState::EnteringGuess => Style::default(),
    };
    let mut lines = vec![Line::from(Span::styled(board.message.as_str(), message_style))];
    if !board.error_message.is_empty() {
        lines.push(Line::from(Span::styled(
            board.error_message.as_str(),
            ERROR_STYLE,
        )));
    }
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
    let text = match state {
        TuiState::EnteringGuess => "Type your guess | ENTER: Submit | BACKSPACE: Delete | ESC: Quit",
        TuiState::GameOver => "Press any key to exit",
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
