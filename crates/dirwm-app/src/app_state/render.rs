//! Frame rendering: windows → pane geometry → flow layout → surface.

use std::collections::BTreeSet;

use dirwm_common::{CellRect, UiError, WindowId};
use dirwm_fs::{WatchRegistry, Window};
use dirwm_layout::{LayoutEngine, PaneGeometry};

use super::core::DirwmApp;

/// Whatever displays panes: the terminal in production, a recorder in tests.
///
/// Both pane operations are idempotent. `remove_pane` on an unknown id
/// reports [`UiError::ViewNotFound`].
pub trait PaneSurface {
    fn upsert_pane(
        &mut self,
        id: &WindowId,
        rect: CellRect,
        title: &str,
        body: &str,
    ) -> Result<(), UiError>;

    fn remove_pane(&mut self, id: &WindowId) -> Result<(), UiError>;

    /// Flush all pending pane changes to the screen.
    fn present(&mut self) -> Result<(), UiError>;
}

/// Tracks which panes are on the surface so vanished windows get removed.
#[derive(Debug, Default)]
pub struct Renderer {
    rendered: BTreeSet<WindowId>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every pane from `windows` (in display order) and push the
    /// result to `surface`, presenting once.
    pub fn render<S: PaneSurface>(
        &mut self,
        surface: &mut S,
        layout: &LayoutEngine,
        windows: &[Window],
    ) -> Result<(), UiError> {
        let measured = windows.iter().map(|w| {
            let geometry = PaneGeometry::measure(w.id.as_str(), &w.tag, &w.content);
            let (width, height) = (geometry.width, geometry.height);
            ((w, geometry), width, height)
        });
        let placed = layout.compute(measured);

        let live: BTreeSet<WindowId> = windows.iter().map(|w| w.id.clone()).collect();
        for stale in self.rendered.difference(&live) {
            ignore_missing_view(surface.remove_pane(stale))?;
        }

        for ((window, geometry), rect) in placed {
            let body = geometry.body_text(&window.content);
            ignore_missing_view(surface.upsert_pane(&window.id, rect, &geometry.title, &body))?;
        }

        tracing::trace!("rendered {} panes", live.len());
        self.rendered = live;
        surface.present()
    }
}

fn ignore_missing_view(result: Result<(), UiError>) -> Result<(), UiError> {
    match result {
        Err(e) if e.is_view_not_found() => {
            tracing::debug!("{e}, skipped");
            Ok(())
        }
        other => other,
    }
}

impl<W: WatchRegistry> DirwmApp<W> {
    /// Render a single frame from the current store.
    pub fn redraw<S: PaneSurface>(&mut self, surface: &mut S) -> Result<(), UiError> {
        let windows = self.store.snapshot();
        self.renderer.render(surface, &self.layout, &windows)
    }
}

#[cfg(test)]
pub(super) mod recording {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedPane {
        pub rect: CellRect,
        pub title: String,
        pub body: String,
    }

    /// In-memory surface that records what it was asked to show.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub panes: BTreeMap<WindowId, RecordedPane>,
        pub removed: Vec<WindowId>,
        pub presents: usize,
    }

    impl RecordingSurface {
        pub fn xs(&self) -> Vec<(String, usize)> {
            let mut xs: Vec<_> = self
                .panes
                .iter()
                .map(|(id, p)| (id.to_string(), p.rect.x))
                .collect();
            xs.sort_by_key(|(_, x)| *x);
            xs
        }
    }

    impl PaneSurface for RecordingSurface {
        fn upsert_pane(
            &mut self,
            id: &WindowId,
            rect: CellRect,
            title: &str,
            body: &str,
        ) -> Result<(), UiError> {
            self.panes.insert(
                id.clone(),
                RecordedPane {
                    rect,
                    title: title.into(),
                    body: body.into(),
                },
            );
            Ok(())
        }

        fn remove_pane(&mut self, id: &WindowId) -> Result<(), UiError> {
            self.panes
                .remove(id)
                .map(|_| self.removed.push(id.clone()))
                .ok_or_else(|| UiError::ViewNotFound(id.clone()))
        }

        fn present(&mut self) -> Result<(), UiError> {
            self.presents += 1;
            Ok(())
        }
    }
}
