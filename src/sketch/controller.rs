//! Stroke recording, undo, clear, export, import and rasterization.

use super::history::UndoHistory;
use super::presenter::{LogPresenter, Presenter};
use crate::config::{Action, Config, KeyBinding, KeybindingsConfig};
use crate::draw::{Drawing, PEN, Point, Segment, Stroke};
use crate::export::{
    DEFAULT_IMAGE_FILENAME, DEFAULT_NICKNAME, DirectorySink, DownloadSink, ExportError,
    ImportError, decode_drawing, encode_drawing, export_filename, file, sanitize_nickname,
};
use crate::input::SurfaceOrigin;
use crate::surface::{RASTER_SIZE, Surface};
use log::{debug, error, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Notice shown when an imported file cannot be parsed.
pub const INVALID_FILE_MESSAGE: &str = "Invalid JSON file. Please check the input file.";

/// Tunables for a controller instance.
#[derive(Debug, Clone)]
pub struct SketchOptions {
    /// Initial nickname used to name exported files
    pub nickname: String,
    /// Filename of the rasterized PNG
    pub image_filename: String,
    /// Pause between segments while replaying an import
    pub segment_delay: Duration,
    /// Global keyboard shortcuts
    pub action_map: HashMap<KeyBinding, Action>,
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            nickname: DEFAULT_NICKNAME.to_string(),
            image_filename: DEFAULT_IMAGE_FILENAME.to_string(),
            segment_delay: Duration::from_millis(10),
            action_map: KeybindingsConfig::default()
                .build_action_map()
                .unwrap_or_default(),
        }
    }
}

impl SketchOptions {
    /// Builds options from a loaded configuration.
    ///
    /// # Errors
    /// Returns an error if a configured keybinding is invalid or duplicated.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)?;

        Ok(Self {
            nickname: config.export.nickname.clone(),
            image_filename: config.export.image_filename.clone(),
            segment_delay: config.segment_delay(),
            action_map,
        })
    }
}

/// Host collaborators the controller reports to. Each can be mocked in tests.
pub struct SketchDependencies {
    pub sink: Box<dyn DownloadSink>,
    pub presenter: Box<dyn Presenter>,
}

impl Default for SketchDependencies {
    fn default() -> Self {
        Self {
            sink: Box::new(DirectorySink::default()),
            presenter: Box::new(LogPresenter),
        }
    }
}

/// Owns the sketch state for one session and renders it onto a [`Surface`].
///
/// Outside of an in-progress stroke, `history().len() == drawing().len()` and
/// `stroke_order()` equals the number of completed strokes.
pub struct SketchController<S: Surface> {
    surface: S,
    drawing: Drawing,
    history: UndoHistory,
    /// Accumulator for the stroke being drawn; its order tag is the session counter
    current: Stroke,
    is_drawing: bool,
    last_point: Point,
    nickname: String,
    origin: SurfaceOrigin,
    image_filename: String,
    segment_delay: Duration,
    pub(super) action_map: HashMap<KeyBinding, Action>,
    pub(super) deps: SketchDependencies,
}

impl<S: Surface> SketchController<S> {
    /// Creates a controller with an empty drawing and blanks the surface.
    pub fn new(mut surface: S, options: SketchOptions, deps: SketchDependencies) -> Self {
        surface.clear();
        Self {
            surface,
            drawing: Drawing::new(),
            history: UndoHistory::new(),
            current: Stroke::new(0),
            is_drawing: false,
            last_point: Point::default(),
            nickname: sanitize_nickname(&options.nickname),
            origin: SurfaceOrigin::default(),
            image_filename: options.image_filename,
            segment_delay: options.segment_delay,
            action_map: options.action_map,
            deps,
        }
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Order tag the next completed stroke will carry.
    pub fn stroke_order(&self) -> u64 {
        self.current.stroke_order
    }

    /// Stroke currently being accumulated (empty between gestures).
    pub fn in_progress(&self) -> &Stroke {
        &self.current
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Updates where the surface sits in the viewport, used to normalize touches.
    pub fn set_surface_origin(&mut self, origin: SurfaceOrigin) {
        self.origin = origin;
    }

    pub fn surface_origin(&self) -> SurfaceOrigin {
        self.origin
    }

    /// Starts a gesture at `position`. Nothing is recorded until the pointer moves.
    pub fn begin_stroke(&mut self, position: Point) {
        self.is_drawing = true;
        self.last_point = position;
    }

    /// Records and renders the segment from the last point to `position`.
    pub fn extend_stroke(&mut self, position: Point) {
        if !self.is_drawing {
            return;
        }

        let segment = Segment::between(self.last_point, position);
        self.surface.draw_line(&segment, &PEN);
        self.current.push(segment);
        self.last_point = position;
    }

    /// Completes the gesture, even when no segment was recorded.
    pub fn end_stroke(&mut self) {
        if !self.is_drawing {
            return;
        }

        let next = Stroke::new(self.current.stroke_order + 1);
        let stroke = std::mem::replace(&mut self.current, next);
        debug!(
            "Stroke {} completed with {} segments",
            stroke.stroke_order,
            stroke.segments.len()
        );
        self.drawing.push(stroke);
        self.history.push(self.surface.snapshot());
        self.is_drawing = false;
    }

    /// Removes the most recent stroke and redraws the rest from their segments.
    pub fn undo(&mut self) {
        if self.history.pop().is_none() {
            return;
        }

        self.drawing.undo();
        self.current.stroke_order = self.current.stroke_order.saturating_sub(1);
        self.redraw();
        debug!("Undo: {} strokes remain", self.drawing.len());
    }

    /// Blanks the surface and forgets every stroke.
    pub fn clear(&mut self) {
        self.surface.clear();
        self.drawing.clear();
        self.history.clear();
        self.current = Stroke::new(0);
        info!("Drawing cleared");
    }

    /// Serializes the drawing and delivers it as `<nickname>_<NNNNNN>.json`.
    ///
    /// # Returns
    /// Where the sink put the file
    pub fn export(&self) -> Result<PathBuf, ExportError> {
        let snapshot = self.drawing.clone();
        let json = encode_drawing(&snapshot)?;
        let filename = export_filename(&self.nickname, file::random_suffix()?);
        let path = self.deps.sink.deliver(&filename, json.as_bytes())?;
        info!(
            "Exported {} strokes to {}",
            snapshot.len(),
            path.display()
        );
        Ok(path)
    }

    /// Copies the surface onto a 512×512 white image and delivers it as PNG.
    pub fn rasterize_to_image(&mut self) -> Result<PathBuf, ExportError> {
        let png = self.surface.export_raster(RASTER_SIZE, RASTER_SIZE)?;
        let path = self.deps.sink.deliver(&self.image_filename, &png)?;
        info!("Saved image to {}", path.display());
        Ok(path)
    }

    /// Stores the nickname used for exports; blank input falls back to the default.
    pub fn save_nickname(&mut self, input: &str) {
        self.nickname = sanitize_nickname(input);
        self.deps
            .presenter
            .notify(&format!("Your nickname is \"{}\".", self.nickname));
    }

    /// Replaces the drawing with `contents` and replays it with paced rendering.
    ///
    /// On a parse failure nothing is changed and the user is alerted. The loading
    /// indicator is shown for the duration and the file chooser is reset on both paths.
    ///
    /// # Returns
    /// Number of imported strokes
    pub async fn import(&mut self, contents: &str) -> Result<usize, ImportError> {
        self.deps.presenter.set_loading(true);
        let result = self.replace_and_replay(contents).await;
        self.finish_import(&result);
        result
    }

    /// Reads `path` asynchronously, then behaves like [`Self::import`].
    pub async fn import_file(&mut self, path: &Path) -> Result<usize, ImportError> {
        self.deps.presenter.set_loading(true);
        let result = match tokio::fs::read_to_string(path).await {
            Ok(contents) => self.replace_and_replay(&contents).await,
            Err(err) => Err(ImportError::Read(err)),
        };
        self.finish_import(&result);
        result
    }

    async fn replace_and_replay(&mut self, contents: &str) -> Result<usize, ImportError> {
        let drawing = decode_drawing(contents)?;
        info!(
            "Importing {} strokes ({} segments)",
            drawing.len(),
            drawing.segment_count()
        );

        self.drawing = drawing;
        self.history.clear();
        self.surface.clear();
        self.current = Stroke::new(0);
        self.is_drawing = false;

        for stroke in self.drawing.strokes() {
            for segment in &stroke.segments {
                self.surface.draw_line(segment, &PEN);
                pace(self.segment_delay).await;
            }
            self.history.push(self.surface.snapshot());
            self.current.stroke_order += 1;
        }

        Ok(self.drawing.len())
    }

    fn finish_import(&self, result: &Result<usize, ImportError>) {
        if let Err(err) = result {
            error!("Import failed: {}", err);
            self.deps.presenter.alert(INVALID_FILE_MESSAGE);
        }
        self.deps.presenter.set_loading(false);
        self.deps.presenter.reset_file_input();
    }

    fn redraw(&mut self) {
        self.surface.clear();
        for stroke in self.drawing.strokes() {
            for segment in &stroke.segments {
                self.surface.draw_line(segment, &PEN);
            }
        }
    }
}

/// Gives the event loop a turn between replayed segments.
async fn pace(delay: Duration) {
    if delay.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(delay).await;
    }
}
