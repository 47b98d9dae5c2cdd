//! Explorer application state and logic.

use crate::{CellReport, TilingKind};

/// How a grid cell relates to the cursor along the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// The selected cell.
    Cursor,
    /// One step back along the curve.
    Previous,
    /// One step forward along the curve.
    Next,
    /// Anything else.
    Other,
}

/// One labelled cell of the grid view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Stored axes of the cell.
    pub coord: (i64, i64),
    /// Curve index numeral, empty if the cell cannot be indexed.
    pub label: String,
    pub role: CellRole,
}

/// Explorer application state.
pub struct ExplorerApp {
    /// Tiling being browsed.
    pub tiling: TilingKind,
    /// Selected cell, as stored axes.
    pub cursor: (i64, i64),
    /// Should we quit?
    pub should_quit: bool,
    /// Status message to display.
    pub status: String,
}

impl ExplorerApp {
    /// Create an explorer with the cursor on the origin.
    pub fn new(tiling: TilingKind) -> Self {
        Self {
            tiling,
            cursor: (0, 0),
            should_quit: false,
            status: "Ready. Arrows move, n/p walk the curve, t switches tiling, q quits.".into(),
        }
    }

    /// Report for the selected cell.
    pub fn selected(&self) -> crate::Result<CellReport> {
        self.tiling.locate(self.cursor.0, self.cursor.1)
    }

    /// Move the cursor by a lattice offset.
    pub fn move_by(&mut self, da: i64, db: i64) {
        match (self.cursor.0.checked_add(da), self.cursor.1.checked_add(db)) {
            (Some(a), Some(b)) => {
                self.cursor = (a, b);
                self.status = format!("Moved to ({}, {})", a, b);
            }
            _ => self.status = "Edge of the coordinate range".into(),
        }
    }

    /// Walk `delta` steps along the curve from the selected cell.
    pub fn step_curve(&mut self, delta: i64) {
        let target = self
            .selected()
            .and_then(|report| {
                let value = report.curve_value.checked_add(delta).unwrap_or(report.curve_value);
                self.tiling.find_value(value)
            });

        match target {
            Ok(report) => {
                self.cursor = (report.coord[0], report.coord[1]);
                self.status = format!("Curve {} = {}", report.curve, report.curve_value);
            }
            Err(e) => self.status = format!("Error: {}", e),
        }
    }

    /// Switch between the hex and square tilings, keeping the curve index.
    pub fn toggle_tiling(&mut self) {
        let value = self.selected().map(|r| r.curve_value).unwrap_or(0);
        self.tiling = self.tiling.toggled();
        match self.tiling.find_value(value) {
            Ok(report) => self.cursor = (report.coord[0], report.coord[1]),
            Err(_) => self.cursor = (0, 0),
        }
        self.status = format!("Switched to {} at curve {}", self.tiling, value);
    }

    /// Back to the origin.
    pub fn reset(&mut self) {
        self.cursor = (0, 0);
        self.status = "Reset. Ready.".into();
    }

    /// Curve indices around the cursor: (value, numeral, coord, is_current).
    pub fn curve_window(&self, lines: usize) -> Vec<(i64, String, (i64, i64), bool)> {
        let Ok(current) = self.selected() else {
            return Vec::new();
        };
        let start = current.curve_value.saturating_sub(lines as i64 / 2);

        (0..lines as i64)
            .filter_map(|i| {
                let value = start.checked_add(i)?;
                let report = self.tiling.find_value(value).ok()?;
                let coord = (report.coord[0], report.coord[1]);
                Some((value, report.curve, coord, value == current.curve_value))
            })
            .collect()
    }

    /// Labelled cells of a `cols` x `rows` window centred on the cursor,
    /// row by row.
    ///
    /// Hex rows use an odd-r offset layout: each row holds one r, and the
    /// caller indents odd rows by half a cell.
    pub fn grid(&self, cols: usize, rows: usize) -> Vec<Vec<GridCell>> {
        let (prev, next) = self.curve_neighbours();
        let (a0, b0) = self.cursor;

        (0..rows as i64)
            .map(|row| {
                let b = b0.saturating_add(row - rows as i64 / 2);
                (0..cols as i64)
                    .map(|col| {
                        let dc = col - cols as i64 / 2;
                        let a = match self.tiling {
                            TilingKind::Hex => offset_col(a0, b0).saturating_add(dc).saturating_sub(row_shift(b)),
                            TilingKind::Square => a0.saturating_add(dc),
                        };
                        let coord = (a, b);
                        let role = if coord == self.cursor {
                            CellRole::Cursor
                        } else if Some(coord) == prev {
                            CellRole::Previous
                        } else if Some(coord) == next {
                            CellRole::Next
                        } else {
                            CellRole::Other
                        };
                        let label = self.tiling.locate(a, b).map(|r| r.curve).unwrap_or_default();
                        GridCell { coord, label, role }
                    })
                    .collect()
            })
            .collect()
    }

    fn curve_neighbours(&self) -> (Option<(i64, i64)>, Option<(i64, i64)>) {
        let Ok(current) = self.selected() else {
            return (None, None);
        };
        let at = |delta: i64| {
            let value = current.curve_value.checked_add(delta)?;
            let report = self.tiling.find_value(value).ok()?;
            Some((report.coord[0], report.coord[1]))
        };
        (at(-1), at(1))
    }
}

/// Horizontal shift of hex row `r` in the odd-r layout.
fn row_shift(r: i64) -> i64 {
    (r - (r & 1)) / 2
}

/// Offset column of hex (q, r).
fn offset_col(q: i64, r: i64) -> i64 {
    q.saturating_add(row_shift(r))
}

/// Run the explorer.
pub fn run_explorer(tiling: TilingKind) -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::prelude::*;
    use std::io::stdout;
    use std::time::Duration;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = ExplorerApp::new(tiling);

    // Main loop
    loop {
        terminal.draw(|frame| {
            super::ui::draw(frame, &app);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Left => app.move_by(-1, 0),
                        KeyCode::Right => app.move_by(1, 0),
                        KeyCode::Up => app.move_by(0, -1),
                        KeyCode::Down => app.move_by(0, 1),
                        KeyCode::Char('n') => app.step_curve(1),
                        KeyCode::Char('p') => app.step_curve(-1),
                        KeyCode::Char('N') => app.step_curve(app.tiling.base() as i64),
                        KeyCode::Char('P') => app.step_curve(-(app.tiling.base() as i64)),
                        KeyCode::Char('t') => app.toggle_tiling(),
                        KeyCode::Char('x') => app.reset(),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_follows_the_curve() {
        let mut app = ExplorerApp::new(TilingKind::Hex);
        app.step_curve(1);
        assert_eq!(app.cursor, (1, 0));
        app.step_curve(1);
        assert_eq!(app.cursor, (1, -1));
        app.step_curve(-3);
        assert_eq!(app.cursor, (-1, 1));
        app.reset();
        assert_eq!(app.cursor, (0, 0));
    }

    #[test]
    fn toggling_keeps_curve_position() {
        let mut app = ExplorerApp::new(TilingKind::Hex);
        app.step_curve(-2);
        app.toggle_tiling();
        assert_eq!(app.tiling, TilingKind::Square);
        assert_eq!(app.selected().unwrap().curve_value, -2);
        assert_eq!(app.cursor, (2, 0));
    }

    #[test]
    fn grid_marks_cursor_and_neighbours() {
        for tiling in TilingKind::ALL {
            let app = ExplorerApp::new(tiling);
            let grid = app.grid(9, 7);
            assert_eq!(grid.len(), 7);
            assert!(grid.iter().all(|row| row.len() == 9));

            let centre = &grid[3][4];
            assert_eq!(centre.coord, (0, 0));
            assert_eq!(centre.role, CellRole::Cursor);
            assert_eq!(centre.label, "0");

            let count = |role| grid.iter().flatten().filter(|c| c.role == role).count();
            assert_eq!(count(CellRole::Previous), 1);
            assert_eq!(count(CellRole::Next), 1);
        }
    }

    #[test]
    fn hex_grid_rows_are_offset() {
        let app = ExplorerApp::new(TilingKind::Hex);
        let grid = app.grid(5, 3);
        // odd-r layout: the first column of row r = -1 sits at q = -1
        assert_eq!(grid[1][0].coord, (-2, 0));
        assert_eq!(grid[2][0].coord, (-2, 1));
        assert_eq!(grid[0][0].coord, (-1, -1));
    }

    #[test]
    fn curve_window_is_centred() {
        let app = ExplorerApp::new(TilingKind::Square);
        let window = app.curve_window(5);
        let values: Vec<i64> = window.iter().map(|w| w.0).collect();
        assert_eq!(values, vec![-2, -1, 0, 1, 2]);
        assert!(window[2].3);
        assert_eq!(window[3].2, (0, 1));
    }
}
