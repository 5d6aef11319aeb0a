//! Wrapped message printing with remembered formatting.

use log::debug;

use crate::{
    color::Color,
    format::FormatState,
    grid::{Capacity, ConfigError, GlyphGrid, GridGeometry},
    orientation::Orientation,
    wrap::{Line, wrap},
};

/// Outcome of one successful print.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PrintReport {
    pub lines_drawn: u16,
    pub glyphs_drawn: usize,
    /// Message bytes that did not fit below the last visible line.
    pub bytes_dropped: usize,
}

impl PrintReport {
    pub const fn truncated(&self) -> bool {
        self.bytes_dropped > 0
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PrintError<E> {
    /// Requested formatting cannot be laid out; nothing was drawn.
    Config(ConfigError),
    /// The display rejected a rotation, clear or glyph draw.
    Grid(E),
}

impl<E> From<ConfigError> for PrintError<E> {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

pub type PrintResult<E> = Result<PrintReport, PrintError<E>>;

/// Draws one wrapped line on `row`, one monospaced cell per byte.
pub fn render_line<G>(
    grid: &mut G,
    text: &[u8],
    row: u16,
    foreground: Color,
    background: Color,
    scale: u8,
) -> Result<usize, G::Error>
where
    G: GlyphGrid + ?Sized,
{
    let geometry = grid.geometry();

    for (column, &glyph) in text.iter().enumerate() {
        let (x, y) = geometry.cell_origin(column as u16, row, scale);
        grid.draw_glyph(x, y, foreground, background, glyph, scale)?;
    }

    Ok(text.len())
}

/// Wrap engine bound to one display, owning the remembered formatting.
pub struct Printer<G> {
    grid: G,
    state: FormatState,
}

impl<G> Printer<G>
where
    G: GlyphGrid,
{
    /// Starts from [`FormatState::DEFAULT`].
    pub fn new(grid: G) -> Self {
        Self::with_state(grid, FormatState::DEFAULT)
    }

    pub fn with_state(grid: G, state: FormatState) -> Self {
        Self { grid, state }
    }

    pub fn state(&self) -> FormatState {
        self.state
    }

    pub fn geometry(&self) -> GridGeometry {
        self.grid.geometry()
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    /// Releases the owned grid.
    pub fn release(self) -> G {
        self.grid
    }

    pub fn capacity(&self, orientation: Orientation, scale: u8) -> Result<Capacity, ConfigError> {
        self.grid.geometry().capacity(orientation, scale)
    }

    /// Prints with the remembered orientation, colors and scale.
    pub fn print(&mut self, message: &str) -> PrintResult<G::Error> {
        let state = self.state;
        self.print_all(
            state.orientation,
            state.foreground,
            state.background,
            message,
            state.scale,
        )
    }

    /// Prints in new colors and remembers them.
    pub fn print_color(
        &mut self,
        foreground: Color,
        background: Color,
        message: &str,
    ) -> PrintResult<G::Error> {
        let state = self.state;
        self.print_all(state.orientation, foreground, background, message, state.scale)
    }

    /// Prints at a new scale and remembers it.
    pub fn print_size(&mut self, message: &str, scale: u8) -> PrintResult<G::Error> {
        let state = self.state;
        self.print_all(
            state.orientation,
            state.foreground,
            state.background,
            message,
            scale,
        )
    }

    /// Prints in new colors at a new scale and remembers both.
    pub fn print_both(
        &mut self,
        foreground: Color,
        background: Color,
        message: &str,
        scale: u8,
    ) -> PrintResult<G::Error> {
        let orientation = self.state.orientation;
        self.print_all(orientation, foreground, background, message, scale)
    }

    /// Clears the screen and prints `message` wrapped to fit, remembering
    /// every parameter for later calls.
    ///
    /// Invalid formatting is reported before anything changes: the
    /// remembered state and the display are left untouched.
    pub fn print_all(
        &mut self,
        orientation: Orientation,
        foreground: Color,
        background: Color,
        message: &str,
        scale: u8,
    ) -> PrintResult<G::Error> {
        let capacity = self.capacity(orientation, scale)?;
        self.state = FormatState::new(orientation, foreground, background, scale);

        debug!(
            "printer: print_all orientation={:?} scale={} fg={:#06x} bg={:#06x} columns={} lines={} bytes={}",
            orientation,
            scale,
            foreground.raw(),
            background.raw(),
            capacity.columns,
            capacity.lines,
            message.len()
        );

        self.prepare_screen(orientation, background)
            .map_err(PrintError::Grid)?;

        let bytes = message.as_bytes();
        let mut lines = wrap(bytes, capacity);
        let mut report = PrintReport::default();

        for Line { start, end, row } in lines.by_ref() {
            report.glyphs_drawn += render_line(
                &mut self.grid,
                &bytes[start..end],
                row,
                foreground,
                background,
                scale,
            )
            .map_err(PrintError::Grid)?;
            report.lines_drawn += 1;
        }
        report.bytes_dropped = lines.dropped();

        if report.truncated() {
            debug!(
                "printer: truncated lines={} dropped_bytes={}",
                report.lines_drawn, report.bytes_dropped
            );
        }

        Ok(report)
    }

    /// Rotates and clears. The panel only clears correctly from the
    /// portrait baseline, so landscape orientations are applied after it.
    fn prepare_screen(&mut self, orientation: Orientation, background: Color) -> Result<(), G::Error> {
        if orientation.is_landscape() {
            self.grid.set_rotation(Orientation::CLEAR_BASELINE)?;
            self.grid.clear_background(background)?;
            self.grid.set_rotation(orientation)
        } else {
            self.grid.set_rotation(orientation)?;
            self.grid.clear_background(background)
        }
    }
}
