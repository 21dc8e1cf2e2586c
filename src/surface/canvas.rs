use super::{RasterSnapshot, Surface, SurfaceError};
use crate::draw::{Segment, StrokeStyle, WHITE, fill_background, render_segment};
use cairo::{Context, Format, ImageSurface};
use log::warn;

/// In-memory ARGB32 canvas backed by a Cairo image surface.
///
/// Starts filled with the white background. Every operation creates a short
/// lived Cairo context so the pixel buffer stays uniquely owned between calls.
pub struct CairoSurface {
    surface: ImageSurface,
    width: u32,
    height: u32,
}

impl CairoSurface {
    /// Creates a blank white canvas of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let surface = create_image(width, height)?;
        let mut canvas = Self {
            surface,
            width,
            height,
        };
        canvas.clear();
        Ok(canvas)
    }

    /// Reads one pixel as native-endian ARGB32 bytes (B, G, R, A on little-endian hosts).
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.surface.flush();
        let stride = usize::try_from(self.surface.stride()).ok()?;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        data.get(offset..offset + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    fn with_context(&self, draw: impl FnOnce(&Context)) {
        match Context::new(&self.surface) {
            Ok(ctx) => draw(&ctx),
            Err(err) => warn!("Failed to create drawing context: {}", err),
        }
    }
}

impl Surface for CairoSurface {
    fn clear(&mut self) {
        self.with_context(|ctx| fill_background(ctx, WHITE));
    }

    fn draw_line(&mut self, segment: &Segment, style: &StrokeStyle) {
        self.with_context(|ctx| render_segment(ctx, segment, style));
    }

    fn snapshot(&mut self) -> RasterSnapshot {
        let mut png = Vec::new();
        if let Err(err) = self.surface.write_to_png(&mut png) {
            warn!("Failed to encode surface snapshot: {}", err);
            png.clear();
        }

        RasterSnapshot {
            width: self.width,
            height: self.height,
            png,
        }
    }

    fn export_raster(&mut self, width: u32, height: u32) -> Result<Vec<u8>, SurfaceError> {
        let target = create_image(width, height)?;
        {
            let ctx = Context::new(&target)?;
            fill_background(&ctx, WHITE);
            ctx.scale(
                width as f64 / self.width as f64,
                height as f64 / self.height as f64,
            );
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }

        let mut png = Vec::new();
        target.write_to_png(&mut png)?;
        log::debug!(
            "Rasterized {}x{} surface to {}x{} PNG ({} bytes)",
            self.width,
            self.height,
            width,
            height,
            png.len()
        );
        Ok(png)
    }
}

fn create_image(width: u32, height: u32) -> Result<ImageSurface, SurfaceError> {
    let invalid = || SurfaceError::InvalidSize { width, height };
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    let w = i32::try_from(width).map_err(|_| invalid())?;
    let h = i32::try_from(height).map_err(|_| invalid())?;
    Ok(ImageSurface::create(Format::ARgb32, w, h)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{PEN, Point};
    use std::io::Cursor;

    const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];
    const OPAQUE_BLACK: [u8; 4] = [0, 0, 0, 255];

    fn horizontal_line() -> Segment {
        Segment::between(Point::new(0.0, 10.0), Point::new(20.0, 10.0))
    }

    #[test]
    fn new_surface_is_white() {
        let mut canvas = CairoSurface::new(32, 32).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(OPAQUE_WHITE));
        assert_eq!(canvas.pixel(31, 31), Some(OPAQUE_WHITE));
        assert_eq!(canvas.pixel(32, 0), None);
    }

    #[test]
    fn draw_line_paints_pen_pixels() {
        let mut canvas = CairoSurface::new(32, 32).unwrap();
        canvas.draw_line(&horizontal_line(), &PEN);

        assert_eq!(canvas.pixel(5, 9), Some(OPAQUE_BLACK));
        assert_eq!(canvas.pixel(5, 10), Some(OPAQUE_BLACK));
        assert_eq!(canvas.pixel(5, 20), Some(OPAQUE_WHITE));
    }

    #[test]
    fn clear_restores_background() {
        let mut canvas = CairoSurface::new(32, 32).unwrap();
        canvas.draw_line(&horizontal_line(), &PEN);
        canvas.clear();
        assert_eq!(canvas.pixel(5, 10), Some(OPAQUE_WHITE));
    }

    #[test]
    fn snapshot_encodes_whole_surface_as_png() {
        let mut canvas = CairoSurface::new(32, 16).unwrap();
        canvas.draw_line(&horizontal_line(), &PEN);

        let snapshot = canvas.snapshot();
        assert_eq!((snapshot.width, snapshot.height), (32, 16));

        let mut decoded = ImageSurface::create_from_png(&mut Cursor::new(snapshot.png)).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 16));
        let stride = decoded.stride() as usize;
        let data = decoded.data().unwrap();
        let offset = 10 * stride + 5 * 4;
        assert_eq!(&data[offset..offset + 4], &OPAQUE_BLACK);
    }

    #[test]
    fn snapshot_is_much_smaller_than_raw_pixels() {
        let mut canvas = CairoSurface::new(512, 512).unwrap();
        canvas.draw_line(&horizontal_line(), &PEN);

        let raw_size = 512 * 512 * 4;
        let snapshot = canvas.snapshot();
        assert!(!snapshot.is_empty());
        assert!(
            snapshot.png.len() * 32 < raw_size,
            "snapshot is {} bytes for {} raw bytes",
            snapshot.png.len(),
            raw_size
        );
    }

    #[test]
    fn export_raster_scales_to_requested_size() {
        let mut canvas = CairoSurface::new(64, 32).unwrap();
        canvas.draw_line(&horizontal_line(), &PEN);

        let png = canvas.export_raster(512, 512).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = ImageSurface::create_from_png(&mut Cursor::new(png)).unwrap();
        assert_eq!(decoded.width(), 512);
        assert_eq!(decoded.height(), 512);
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        assert!(matches!(
            CairoSurface::new(0, 10),
            Err(SurfaceError::InvalidSize {
                width: 0,
                height: 10
            })
        ));
    }
}
