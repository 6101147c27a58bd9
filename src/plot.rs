//! Chart rendering for fitted insertion-loss series.
//!
//! The same layout is drawn into an in-memory buffer for the figure file
//! and onto the real terminal for interactive viewing.

use crate::error::PlotError;
use crate::fit::{FIT_X_RANGE, Series};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{CrosstermBackend, TestBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
};
use std::io;
use std::path::Path;

pub const DEFAULT_FIGURE_PATH: &str = "figure.txt";
pub const FIGURE_WIDTH: u16 = 110;
pub const FIGURE_HEIGHT: u16 = 32;

const X_LABEL: &str = "Length (cm)";
const Y_LABEL: &str = "Insertion Loss (dB)";
const Y_PADDING_DB: f64 = 1.0;

const AXIS_STYLE: Style = Style::new().fg(Color::Gray);
const TITLE_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Marker and colours for each panel, cycled if there are more series.
const PANEL_STYLES: [(Marker, Color, Color); 2] = [
    (Marker::Dot, Color::Cyan, Color::Yellow),
    (Marker::Block, Color::Magenta, Color::Green),
];

fn y_bounds(series: &Series) -> [f64; 2] {
    let fit_ends = FIT_X_RANGE.iter().map(|&x| series.fit.eval(x));
    let (lo, hi) = series
        .y
        .iter()
        .copied()
        .chain(fit_ends)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    [(lo - Y_PADDING_DB).floor(), (hi + Y_PADDING_DB).ceil()]
}

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect()
}

fn render_panel(f: &mut Frame, area: Rect, series: &Series, index: usize) {
    let (marker, data_color, fit_color) = PANEL_STYLES[index % PANEL_STYLES.len()];
    let points = series.points();
    let fit_points = series.fit_points();

    let datasets = vec![
        Dataset::default()
            .name(format!("{} data", series.name))
            .marker(marker)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(data_color))
            .data(&points),
        Dataset::default()
            .name(series.fit.label())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(fit_color))
            .data(&fit_points),
    ];

    let x_bounds = FIT_X_RANGE;
    let y_bounds = y_bounds(series);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(series.name, TITLE_STYLE))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title(X_LABEL)
                .style(AXIS_STYLE)
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title(Y_LABEL)
                .style(AXIS_STYLE)
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        )
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Percentage(100), Constraint::Percentage(100)));

    f.render_widget(chart, area);
}

/// Draw one chart per series, side by side.
pub fn render_figure(f: &mut Frame, series: &[Series]) {
    if series.is_empty() {
        return;
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Fill(1); series.len()])
        .split(f.area());

    for (i, (s, area)) in series.iter().zip(chunks.iter()).enumerate() {
        render_panel(f, *area, s, i);
    }
}

/// Render the figure into an off-screen buffer and return it as text.
pub fn render_to_text(series: &[Series], width: u16, height: u16) -> Result<String, PlotError> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| render_figure(f, series))?;

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            line.push_str(buffer[(x, y)].symbol());
        }
        text.push_str(line.trim_end());
        text.push('\n');
    }
    Ok(text)
}

/// Write the rendered figure to `path` under a timestamp header.
pub fn write_figure(path: &Path, series: &[Series]) -> Result<(), PlotError> {
    let body = render_to_text(series, FIGURE_WIDTH, FIGURE_HEIGHT)?;
    let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let contents = format!("# Insertion loss fit, generated {generated}\n{body}");
    std::fs::write(path, contents).map_err(|source| PlotError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info_log!("write_figure() - wrote {}", path.display());
    Ok(())
}

/// Full-screen viewer that restores the terminal when dropped.
pub struct FigureViewer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl FigureViewer {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug_log!("FigureViewer::new() - terminal ready");
        Ok(Self { terminal })
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

    /// Redraw on resize; return on the first key press.
    pub fn show(&mut self, series: &[Series]) -> Result<(), PlotError> {
        loop {
            self.terminal.draw(|f| render_figure(f, series))?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    debug_log!("FigureViewer::show() - key {:?}, closing", key.code);
                    return Ok(());
                }
                _ => {}
            }
        }
    }
}

impl Drop for FigureViewer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
