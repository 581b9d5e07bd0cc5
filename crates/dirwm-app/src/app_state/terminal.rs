//! The crossterm/ratatui terminal surface.

use std::collections::BTreeMap;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;

use dirwm_common::{CellRect, UiError, WindowId};

use super::render::PaneSurface;

type Backend = CrosstermBackend<Stdout>;

/// Set while raw mode is on.
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Put the terminal back into cooked mode on the main screen.
///
/// Does nothing unless [`TerminalGuard::enter`] took the terminal, so the
/// panic hook leaves a plain shell alone. Returns whether anything was undone.
pub fn restore_terminal() -> bool {
    if !TERMINAL_ACTIVE.swap(false, Ordering::SeqCst) {
        return false;
    }
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    true
}

/// Raw mode plus the alternate screen, released on drop.
pub struct TerminalGuard {
    terminal: Terminal<Backend>,
}

impl TerminalGuard {
    pub fn enter() -> Result<Self, UiError> {
        enable_raw_mode()?;
        TERMINAL_ACTIVE.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        let entered = match execute!(stdout, EnterAlternateScreen, Hide) {
            Ok(()) => Terminal::new(CrosstermBackend::new(stdout)),
            Err(e) => Err(e),
        };

        match entered {
            Ok(terminal) => {
                tracing::info!("terminal initialized");
                Ok(Self { terminal })
            }
            Err(e) => {
                restore_terminal();
                Err(UiError::Terminal(e))
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
        tracing::info!("terminal restored");
    }
}

#[derive(Debug, Clone)]
struct PaneView {
    rect: CellRect,
    body: String,
}

/// Panes drawn as bordered blocks on the alternate screen.
pub struct TerminalSurface {
    guard: TerminalGuard,
    panes: BTreeMap<WindowId, PaneView>,
}

impl TerminalSurface {
    pub fn new(guard: TerminalGuard) -> Self {
        Self {
            guard,
            panes: BTreeMap::new(),
        }
    }
}

impl PaneSurface for TerminalSurface {
    fn upsert_pane(
        &mut self,
        id: &WindowId,
        rect: CellRect,
        _title: &str,
        body: &str,
    ) -> Result<(), UiError> {
        // The title is already the first body line.
        self.panes.insert(
            id.clone(),
            PaneView {
                rect,
                body: body.to_string(),
            },
        );
        Ok(())
    }

    fn remove_pane(&mut self, id: &WindowId) -> Result<(), UiError> {
        self.panes
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| UiError::ViewNotFound(id.clone()))
    }

    fn present(&mut self) -> Result<(), UiError> {
        let Self { guard, panes } = self;
        guard.terminal.draw(|frame| {
            let area = frame.area();
            for pane in panes.values() {
                let Some(rect) = clip(pane.rect, area) else {
                    continue;
                };
                let block = Block::default().borders(Borders::ALL);
                frame.render_widget(Paragraph::new(pane.body.as_str()).block(block), rect);
            }
        })?;
        Ok(())
    }
}

/// Screen rectangle for a pane, or `None` if it starts off screen.
///
/// The frame sits on both far edges, so a pane of `width` columns covers
/// `width + 1` cells and its interior is `width - 1` wide.
pub(super) fn clip(pane: CellRect, area: Rect) -> Option<Rect> {
    let x = u16::try_from(pane.x).ok()?.checked_add(area.x)?;
    let y = u16::try_from(pane.y).ok()?.checked_add(area.y)?;
    if x >= area.right() || y >= area.bottom() {
        return None;
    }

    let span = |len: usize| u16::try_from(len.saturating_add(1)).unwrap_or(u16::MAX);
    let width = span(pane.width).min(area.right() - x);
    let height = span(pane.height).min(area.bottom() - y);
    Some(Rect::new(x, y, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane(x: usize, width: usize, height: usize) -> CellRect {
        CellRect {
            x,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn restore_without_enter_is_a_no_op() {
        assert!(!restore_terminal());
        assert!(!restore_terminal());
    }

    #[test]
    fn pane_covers_frame_on_far_edges() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(clip(pane(0, 4, 6), area), Some(Rect::new(0, 0, 5, 7)));
    }

    #[test]
    fn pane_is_cut_at_screen_edge() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(clip(pane(7, 4, 6), area), Some(Rect::new(7, 0, 3, 5)));
    }

    #[test]
    fn pane_off_screen_is_skipped() {
        let area = Rect::new(0, 0, 10, 5);
        assert_eq!(clip(pane(10, 4, 6), area), None);
        assert_eq!(clip(pane(usize::MAX, 4, 6), area), None);
    }

    #[test]
    fn oversized_pane_saturates() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(
            clip(pane(0, usize::MAX, usize::MAX), area),
            Some(Rect::new(0, 0, 80, 24))
        );
    }
}
