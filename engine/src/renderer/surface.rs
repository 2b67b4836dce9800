//! CPU Pixel Surface
//!
//! A framebuffer that consumes a renderer's vertex buffer and draw list the
//! way a GPU would: each region is mapped through the world-to-screen
//! transform into window pixels and rasterized according to its primitive.
//!
//! Point regions are plotted directly. Line loops and triangle fans (the
//! pass-through path) are projected to window pixels and run through the
//! same midpoint tracer and scanline filler as the software path.

use std::path::Path;

use glam::{IVec2, Vec2};
use image::{Rgba, RgbaImage};

use super::{DrawCommand, Primitive, Renderer};
use crate::raster::{CrossingTable, PixelVertex, fill, trace_polygon};
use crate::view::{ViewTransform, Viewport};

/// Errors raised while writing a surface to disk.
#[derive(Debug)]
pub enum SurfaceError {
    /// Surface dimensions are zero or too large.
    InvalidSize { width: f32, height: f32 },
    /// Image encoding or I/O failure.
    ImageError(image::ImageError),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::InvalidSize { width, height } => {
                write!(f, "invalid surface size: {width}x{height}")
            }
            SurfaceError::ImageError(e) => write!(f, "image error: {e}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

impl From<image::ImageError> for SurfaceError {
    fn from(e: image::ImageError) -> Self {
        SurfaceError::ImageError(e)
    }
}

/// Convert a normalized RGBA color to 8-bit.
fn to_rgba8(color: [f32; 4]) -> Rgba<u8> {
    Rgba(color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8))
}

pub struct PixelSurface {
    image: RgbaImage,
    viewport: Viewport,
}

impl PixelSurface {
    /// Create a surface matching `viewport`, cleared to transparent black.
    pub fn new(viewport: Viewport) -> Result<Self, SurfaceError> {
        let invalid = SurfaceError::InvalidSize {
            width: viewport.width,
            height: viewport.height,
        };
        if !(viewport.width >= 1.0 && viewport.height >= 1.0)
            || viewport.width > u32::MAX as f32
            || viewport.height > u32::MAX as f32
        {
            return Err(invalid);
        }
        Ok(Self {
            image: RgbaImage::new(viewport.width as u32, viewport.height as u32),
            viewport,
        })
    }

    pub fn clear(&mut self, color: [f32; 4]) {
        let rgba = to_rgba8(color);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.image.width() && y < self.image.height()).then(|| self.image.get_pixel(x, y).0)
    }

    /// Execute a renderer's draw list.
    pub fn draw(&mut self, renderer: &Renderer, commands: &[DrawCommand]) {
        let vertices = renderer.vertices();
        let view = *renderer.view();
        for command in commands {
            let start = command.offset / std::mem::size_of::<PixelVertex>();
            let end = (start + command.count).min(vertices.len());
            let region = &vertices[start.min(end)..end];
            self.draw_region(region, command, &view);
        }
    }

    fn draw_region(&mut self, region: &[PixelVertex], command: &DrawCommand, view: &ViewTransform) {
        let color = to_rgba8(command.color);
        let screen: Vec<Vec2> = region
            .iter()
            .map(|v| self.viewport.from_ndc(view.project(Vec2::from(v.position))))
            .collect();

        match command.primitive {
            Primitive::Points => {
                for p in &screen {
                    self.plot(p.floor().as_ivec2(), color);
                }
            }
            Primitive::LineLoop => {
                let mut outline = Vec::new();
                let mut crossings = CrossingTable::new();
                trace_polygon(&screen, &mut outline, &mut crossings);
                for p in outline {
                    self.plot(p, color);
                }
            }
            Primitive::TriangleFan => {
                let mut outline = Vec::new();
                let mut crossings = CrossingTable::new();
                trace_polygon(&screen, &mut outline, &mut crossings);
                for p in fill(&crossings) {
                    self.plot(p, color);
                }
            }
        }
    }

    fn plot(&mut self, p: IVec2, color: Rgba<u8>) {
        if p.x < 0 || p.y < 0 {
            return;
        }
        let (x, y) = (p.x as u32, p.y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Write the surface as a PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), SurfaceError> {
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
