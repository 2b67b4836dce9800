//! Pixel Buffer Layout
//!
//! The rendering surface reads one linear buffer: the outline pixels first,
//! then the fill pixels (when the polygon is fillable). Offsets are in bytes
//! so they can be handed straight to a vertex-buffer upload.

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

/// One pixel as uploaded to the surface: a pair of floating-point coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PixelVertex {
    pub position: [f32; 2],
}

static_assertions::assert_eq_size!(PixelVertex, [f32; 2]);

impl From<IVec2> for PixelVertex {
    fn from(p: IVec2) -> Self {
        Self {
            position: [p.x as f32, p.y as f32],
        }
    }
}

/// Byte offsets and element counts of the two regions of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferLayout {
    pub outline_offset: usize,
    pub outline_len: usize,
    pub fill_offset: usize,
    pub fill_len: usize,
}

impl BufferLayout {
    /// Layout for `outline_len` outline entries followed by `fill_len` fill
    /// entries.
    pub fn new(outline_len: usize, fill_len: usize) -> Self {
        Self {
            outline_offset: 0,
            outline_len,
            fill_offset: std::mem::size_of::<PixelVertex>() * outline_len,
            fill_len,
        }
    }

    /// Total size of the buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.fill_offset + std::mem::size_of::<PixelVertex>() * self.fill_len
    }
}

/// Concatenated outline + fill pixels.
#[derive(Debug, Clone, Default)]
pub struct PixelBuffer {
    vertices: Vec<PixelVertex>,
    layout: BufferLayout,
}

impl PixelBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the buffer from the outline and fill pixels.
    pub fn rebuild(&mut self, outline: &[IVec2], fill: &[IVec2]) {
        self.vertices.clear();
        self.vertices.reserve(outline.len() + fill.len());
        self.vertices.extend(outline.iter().copied().map(PixelVertex::from));
        self.vertices.extend(fill.iter().copied().map(PixelVertex::from));
        self.layout = BufferLayout::new(outline.len(), fill.len());
    }

    pub fn layout(&self) -> BufferLayout {
        self.layout
    }

    pub fn vertices(&self) -> &[PixelVertex] {
        &self.vertices
    }

    /// Raw bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The outline region.
    pub fn outline(&self) -> &[PixelVertex] {
        &self.vertices[..self.layout.outline_len]
    }

    /// The fill region (empty when the polygon is not fillable).
    pub fn fill(&self) -> &[PixelVertex] {
        &self.vertices[self.layout.outline_len..]
    }

    /// Entries in the byte range starting at `offset` and spanning `count`
    /// vertices.
    pub fn region(&self, offset: usize, count: usize) -> &[PixelVertex] {
        let start = offset / std::mem::size_of::<PixelVertex>();
        let end = (start + count).min(self.vertices.len());
        &self.vertices[start.min(end)..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_offset_follows_outline_bytes() {
        let layout = BufferLayout::new(5, 3);
        assert_eq!(layout.outline_offset, 0);
        assert_eq!(layout.fill_offset, 5 * 8);
        assert_eq!(layout.byte_len(), 8 * 8);
    }

    #[test]
    fn test_rebuild_concatenates_regions() {
        let outline = [IVec2::new(0, 0), IVec2::new(1, 0)];
        let fill = [IVec2::new(5, 5)];
        let mut buffer = PixelBuffer::new();
        buffer.rebuild(&outline, &fill);

        assert_eq!(buffer.vertices().len(), 3);
        assert_eq!(buffer.outline()[1].position, [1.0, 0.0]);
        assert_eq!(buffer.fill(), &[PixelVertex { position: [5.0, 5.0] }]);
        assert_eq!(buffer.as_bytes().len(), buffer.layout().byte_len());

        let layout = buffer.layout();
        assert_eq!(buffer.region(layout.fill_offset, layout.fill_len), buffer.fill());
    }

    #[test]
    fn test_rebuild_without_fill() {
        let mut buffer = PixelBuffer::new();
        buffer.rebuild(&[IVec2::new(2, 3)], &[]);
        assert!(buffer.fill().is_empty());
        assert_eq!(buffer.layout().fill_len, 0);
        assert_eq!(buffer.layout().fill_offset, 8);
    }
}
