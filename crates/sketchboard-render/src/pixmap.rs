//! CPU bitmap surface backed by tiny-skia.

use crate::renderer::{RenderResult, RendererError};
use crate::surface::{LineCap, LineJoin, StrokeStyle, Surface};
use kurbo::{Affine, Point, Rect, Size};
use tiny_skia::{BlendMode, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

/// Rendered bitmap: straight-alpha RGBA pixel data and dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// RGBA pixel data (4 bytes per pixel, row-major).
    pub rgba_data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Snapshot {
    /// RGBA value of one pixel, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.rgba_data
            .get(i..i + 4)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Encode the bitmap as PNG bytes.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        let mut png_data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_data, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header().map_err(|e| {
                log::error!("Failed to write PNG header: {e}");
                RendererError::Encode(e.to_string())
            })?;
            writer.write_image_data(&self.rgba_data).map_err(|e| {
                log::error!("Failed to write PNG data: {e}");
                RendererError::Encode(e.to_string())
            })?;
        }
        Ok(png_data)
    }
}

/// Surface that rasterizes into an in-memory pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
    color: tiny_skia::Color,
    stroke: Stroke,
}

impl PixmapSurface {
    /// Create a transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RendererError::InitFailed(format!("cannot allocate a {width}x{height} pixmap"))
        })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            color: tiny_skia::Color::BLACK,
            stroke: Stroke {
                width: 1.0,
                line_cap: tiny_skia::LineCap::Round,
                line_join: tiny_skia::LineJoin::Round,
                ..Default::default()
            },
        })
    }

    /// Create a surface matching a viewport size (rounded up to whole pixels).
    pub fn for_viewport(size: Size) -> RenderResult<Self> {
        Self::new(size.width.ceil() as u32, size.height.ceil() as u32)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The underlying pixmap (premultiplied alpha).
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Copy the current contents out as straight-alpha RGBA.
    pub fn snapshot(&self) -> Snapshot {
        let mut rgba_data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            rgba_data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Snapshot {
            rgba_data,
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        }
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(self.color);
        paint.anti_alias = true;
        paint
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.pixmap.width()), f64::from(self.pixmap.height()))
    }

    fn clear_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        let Some(rect) =
            tiny_skia::Rect::from_ltrb(rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32)
        else {
            return;
        };
        let paint = Paint {
            blend_mode: BlendMode::Clear,
            ..Paint::default()
        };
        self.pixmap.fill_rect(rect, &paint, self.transform, None);
    }

    fn set_transform(&mut self, transform: Affine) {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        self.transform =
            Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32);
    }

    fn set_stroke(&mut self, style: &StrokeStyle) {
        let c = style.color;
        self.color = tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a);
        let dash = if style.is_dashed() {
            let mut intervals: Vec<f32> = style.dash.iter().map(|&v| v as f32).collect();
            // Odd-length patterns repeat once to pair every dash with a gap.
            if intervals.len() % 2 == 1 {
                intervals.extend_from_within(..);
            }
            let dash = StrokeDash::new(intervals, 0.0);
            if dash.is_none() {
                log::warn!("Ignoring invalid dash pattern {:?}", style.dash);
            }
            dash
        } else {
            None
        };
        self.stroke = Stroke {
            width: style.width as f32,
            line_cap: match style.cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Round => tiny_skia::LineCap::Round,
                LineCap::Square => tiny_skia::LineCap::Square,
            },
            line_join: match style.join {
                LineJoin::Miter => tiny_skia::LineJoin::Miter,
                LineJoin::Round => tiny_skia::LineJoin::Round,
                LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
            },
            dash,
            ..Default::default()
        };
    }

    fn stroke_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        let Some(rect) =
            tiny_skia::Rect::from_ltrb(rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32)
        else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let paint = self.paint();
        self.pixmap
            .stroke_path(&path, &paint, &self.stroke, self.transform, None);
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        else {
            return;
        };
        let paint = self.paint();
        self.pixmap
            .stroke_path(&path, &paint, &self.stroke, self.transform, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchboard_core::shapes::SerializableColor;

    fn alpha(surface: &PixmapSurface, x: u32, y: u32) -> u8 {
        surface.snapshot().pixel(x, y).unwrap()[3]
    }

    #[test]
    fn test_zero_size_fails() {
        assert!(matches!(
            PixmapSurface::new(0, 10),
            Err(RendererError::InitFailed(_))
        ));
    }

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = PixmapSurface::new(4, 3).unwrap();
        let snapshot = surface.snapshot();
        assert_eq!(snapshot.rgba_data.len(), 4 * 3 * 4);
        assert!(snapshot.rgba_data.iter().all(|&b| b == 0));
        assert!(snapshot.pixel(4, 0).is_none());
    }

    #[test]
    fn test_stroke_rect_outline_only() {
        let mut surface = PixmapSurface::new(64, 64).unwrap();
        surface.set_stroke(&StrokeStyle::solid(SerializableColor::black(), 4.0));
        surface.stroke_rect(Rect::new(50.0, 50.0, 10.0, 10.0));

        assert!(alpha(&surface, 10, 30) > 200);
        assert_eq!(alpha(&surface, 30, 30), 0);
        assert_eq!(alpha(&surface, 60, 30), 0);
    }

    #[test]
    fn test_stroke_circle_color() {
        let mut surface = PixmapSurface::new(64, 64).unwrap();
        let blue = SerializableColor::new(0, 0, 255, 255);
        surface.set_stroke(&StrokeStyle::solid(blue, 4.0));
        surface.stroke_circle(Point::new(32.0, 32.0), 20.0);

        let edge = surface.snapshot().pixel(52, 32).unwrap();
        assert!(edge[3] > 200);
        assert!(edge[2] > 200 && edge[0] < 30);
        assert_eq!(alpha(&surface, 32, 32), 0);
    }

    #[test]
    fn test_transform_applied() {
        let mut surface = PixmapSurface::new(64, 64).unwrap();
        surface.set_stroke(&StrokeStyle::solid(SerializableColor::black(), 4.0));
        surface.set_transform(Affine::translate((-100.0, -100.0)));
        surface.stroke_rect(Rect::new(110.0, 110.0, 150.0, 150.0));

        assert!(alpha(&surface, 10, 30) > 200);
        assert_eq!(alpha(&surface, 30, 30), 0);
    }

    #[test]
    fn test_clear_rect() {
        let mut surface = PixmapSurface::new(32, 32).unwrap();
        surface.set_stroke(&StrokeStyle::solid(SerializableColor::black(), 4.0));
        surface.stroke_rect(Rect::new(4.0, 4.0, 28.0, 28.0));
        assert!(alpha(&surface, 4, 16) > 200);

        surface.clear_rect(Rect::new(0.0, 0.0, 3000.0, 3000.0));
        assert!(surface.snapshot().rgba_data.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_dashed_stroke_has_gaps() {
        let mut surface = PixmapSurface::new(64, 48).unwrap();
        let style = StrokeStyle {
            cap: LineCap::Butt,
            ..StrokeStyle::solid(SerializableColor::black(), 4.0)
        }
        .with_dash(vec![10.0, 10.0]);
        surface.set_stroke(&style);
        surface.stroke_rect(Rect::new(0.0, 8.0, 60.0, 40.0));

        // Top edge: on for x in 0..10, off for 10..20, on again for 20..30.
        assert!(alpha(&surface, 5, 8) > 200);
        assert_eq!(alpha(&surface, 15, 8), 0);
        assert!(alpha(&surface, 25, 8) > 200);
    }

    #[test]
    fn test_odd_dash_pattern_repeats() {
        let mut surface = PixmapSurface::new(64, 48).unwrap();
        let style = StrokeStyle {
            cap: LineCap::Butt,
            ..StrokeStyle::solid(SerializableColor::black(), 4.0)
        }
        .with_dash(vec![10.0]);
        surface.set_stroke(&style);
        surface.stroke_rect(Rect::new(0.0, 8.0, 60.0, 40.0));

        assert!(alpha(&surface, 5, 8) > 200);
        assert_eq!(alpha(&surface, 15, 8), 0);
        assert!(alpha(&surface, 25, 8) > 200);
    }

    #[test]
    fn test_canvas_render_pipeline() {
        use crate::renderer::Renderer;
        use sketchboard_core::canvas::Canvas;
        use sketchboard_core::input::PointerEvent;
        use sketchboard_core::tools::Mode;

        let viewport = Size::new(200.0, 200.0);
        let mut canvas = Canvas::new(viewport);
        canvas.set_stroke_width(4.0);
        canvas.handle_pointer_event(PointerEvent::down(Point::new(20.0, 20.0)));
        canvas.handle_pointer_event(PointerEvent::moved(Point::new(80.0, 80.0)));
        canvas.handle_pointer_event(PointerEvent::up(Point::new(80.0, 80.0)));

        let mut renderer = Renderer::new(PixmapSurface::for_viewport(viewport).unwrap());
        assert!(canvas.take_redraw());
        renderer.render(&canvas);
        let black = renderer.surface().snapshot().pixel(20, 50).unwrap();
        assert!(black[3] > 200 && black[0] < 30);

        // Selecting the shape redraws it with the red highlight.
        canvas.handle_pointer_event(PointerEvent::down(Point::new(50.0, 50.0)));
        canvas.handle_pointer_event(PointerEvent::up(Point::new(50.0, 50.0)));
        renderer.render(&canvas);
        let red = renderer.surface().snapshot().pixel(22, 20).unwrap();
        assert!(red[3] > 200 && red[0] > 200 && red[1] < 50);

        // Clicking empty space deselects; panning right by 50 moves the drawing with the view.
        canvas.handle_pointer_event(PointerEvent::down(Point::new(150.0, 150.0)));
        canvas.handle_pointer_event(PointerEvent::up(Point::new(150.0, 150.0)));
        assert!(canvas.history().selected().is_none());
        canvas.set_mode(Mode::Pan);
        canvas.handle_pointer_event(PointerEvent::down(Point::new(0.0, 0.0)));
        canvas.handle_pointer_event(PointerEvent::moved(Point::new(50.0, 0.0)));
        canvas.handle_pointer_event(PointerEvent::up(Point::new(50.0, 0.0)));
        renderer.render(&canvas);
        let snapshot = renderer.surface().snapshot();
        assert_eq!(snapshot.pixel(20, 50).unwrap()[3], 0);
        assert!(snapshot.pixel(70, 50).unwrap()[3] > 200);
    }

    #[test]
    fn test_encode_png_signature() {
        let surface = PixmapSurface::new(8, 8).unwrap();
        let png = surface.snapshot().encode_png().unwrap();
        assert_eq!(&png[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_encode_png_rejects_short_buffer() {
        let snapshot = Snapshot {
            rgba_data: vec![0; 3],
            width: 2,
            height: 2,
        };
        assert!(matches!(snapshot.encode_png(), Err(RendererError::Encode(_))));
    }
}
