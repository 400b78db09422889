//! Bundled logo lookup and rasterization.
//!
//! Uses `usvg` for SVG parsing and `resvg` for rendering into a tiny-skia
//! pixmap, then converts to Rgb888 pixels with transparent pixels dropped so
//! the logo composites over whatever is already on the framebuffer.

use resvg::{
    render,
    usvg::{Options as ResvgUsvgOptions, Transform, Tree as ResvgTree},
};

use embedded_graphics::Pixel;
use embedded_graphics::geometry::Point;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use tiny_skia::Pixmap;

/// Alpha below this renders as background
const ALPHA_THRESHOLD: u8 = 128;

/// Conventional logo filenames, first hit wins.
const LOGO_NAMES: &[&str] = &[
    "olympic-rings.svg",
    "olympics-logo.svg",
    "logo.svg",
];

/// Custom error type for logo rendering operations.
#[derive(Debug)]
pub enum LogoError {
    /// Error parsing the SVG data.
    SvgParseError(String),
    /// Error creating a pixmap for rendering.
    PixmapCreationError(String),
    /// The target region leaves no room for the logo.
    EmptyRegion,
}

impl fmt::Display for LogoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogoError::SvgParseError(msg) => write!(f, "SVG parse error: {}", msg),
            LogoError::PixmapCreationError(msg) => write!(f, "Pixmap creation error: {}", msg),
            LogoError::EmptyRegion => write!(f, "Logo region has zero width or height"),
        }
    }
}

impl Error for LogoError {}

/// Parsed logo SVG, ready to rasterize at any size.
#[derive(Debug)]
pub struct LogoRenderer {
    tree: ResvgTree,
}

/// A rasterized logo. `pixels` is row-major; `None` marks transparency.
#[derive(Debug, Clone)]
pub struct RenderedLogo {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Option<Rgb888>>,
}

impl LogoRenderer {
    /// Creates a `LogoRenderer` from SVG string data.
    pub fn from_svg(svg_data: &str) -> Result<Self, LogoError> {
        let usvg_options = ResvgUsvgOptions::default();
        let tree = ResvgTree::from_str(svg_data, &usvg_options)
            .map_err(|e| LogoError::SvgParseError(format!("Failed to parse SVG: {:?}", e)))?;
        Ok(LogoRenderer { tree })
    }

    /// Search `asset_dir` for a logo under the conventional filenames.
    ///
    /// Missing or unparsable files are not errors; the caller falls back to
    /// the programmatic rings.
    pub fn load(asset_dir: &Path) -> Option<Self> {
        for name in LOGO_NAMES {
            let path = asset_dir.join(name);
            if !path.exists() {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(data) => match Self::from_svg(&data) {
                    Ok(renderer) => {
                        info!("Loaded logo from {}", path.display());
                        return Some(renderer);
                    }
                    Err(e) => {
                        warn!("Ignoring logo {}: {}", path.display(), e);
                    }
                },
                Err(e) => {
                    warn!("Ignoring logo {}: {}", path.display(), e);
                }
            }
        }
        debug!("No logo found under {}, using programmatic rings", asset_dir.display());
        None
    }

    /// Rasterize at the largest size fitting `max_width` x `max_height`
    /// while preserving the SVG's aspect ratio.
    pub fn render(&self, max_width: u32, max_height: u32) -> Result<RenderedLogo, LogoError> {
        if max_width == 0 || max_height == 0 {
            return Err(LogoError::EmptyRegion);
        }

        let svg_size = self.tree.size();
        let width_ratio = max_width as f32 / svg_size.width();
        let height_ratio = max_height as f32 / svg_size.height();
        // smaller ratio fits both dimensions
        let scale = width_ratio.min(height_ratio);

        let width = ((svg_size.width() * scale) as u32).max(1);
        let height = ((svg_size.height() * scale) as u32).max(1);

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| LogoError::PixmapCreationError("Failed to create pixmap".to_string()))?;

        let transform = Transform::from_scale(scale, scale);
        render(&self.tree, transform, &mut pixmap.as_mut());

        let pixels = pixmap
            .pixels()
            .iter()
            .map(|p| {
                let c = p.demultiply();
                if c.alpha() >= ALPHA_THRESHOLD {
                    Some(Rgb888::new(c.red(), c.green(), c.blue()))
                } else {
                    None
                }
            })
            .collect();

        debug!("Logo rasterized at {}x{}", width, height);

        Ok(RenderedLogo {
            width,
            height,
            pixels,
        })
    }
}

impl RenderedLogo {
    /// Blit onto a draw target, skipping transparent pixels.
    pub fn draw_at<D>(&self, target: &mut D, top_left: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let pixels = self.pixels.iter().enumerate().filter_map(|(i, p)| {
            p.map(|color| {
                let x = (i as u32 % self.width) as i32;
                let y = (i as u32 / self.width) as i32;
                Pixel(Point::new(top_left.x + x, top_left.y + y), color)
            })
        });
        target.draw_iter(pixels)
    }

    #[cfg(test)]
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::framebuffer::VarFrameBuf;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
        <rect x="0" y="0" width="10" height="10" fill="#ff0000"/>
    </svg>"##;

    const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
        <rect x="0" y="0" width="20" height="10" fill="#00ff00"/>
    </svg>"##;

    #[test]
    fn test_render_square_fills() {
        let renderer = LogoRenderer::from_svg(SQUARE_SVG).unwrap();
        let logo = renderer.render(8, 8).unwrap();
        assert_eq!((logo.width, logo.height), (8, 8));
        assert_eq!(logo.opaque_count(), 64);
    }

    #[test]
    fn test_render_preserves_aspect_ratio() {
        let renderer = LogoRenderer::from_svg(WIDE_SVG).unwrap();
        // 2:1 source into a 16x16 box scales to 16x8
        let logo = renderer.render(16, 16).unwrap();
        assert_eq!((logo.width, logo.height), (16, 8));
    }

    #[test]
    fn test_render_rejects_empty_region() {
        let renderer = LogoRenderer::from_svg(SQUARE_SVG).unwrap();
        assert!(renderer.render(0, 10).is_err());
    }

    #[test]
    fn test_invalid_svg_rejected() {
        assert!(LogoRenderer::from_svg("not svg at all").is_err());
    }

    #[test]
    fn test_draw_at_composites() {
        let renderer = LogoRenderer::from_svg(SQUARE_SVG).unwrap();
        let logo = renderer.render(4, 4).unwrap();

        let mut fb = VarFrameBuf::new(8, 8, Rgb888::new(0, 0, 0));
        logo.draw_at(&mut fb, Point::new(2, 2)).unwrap();

        assert_eq!(fb.get_pixel(2, 2), Some(Rgb888::new(255, 0, 0)));
        assert_eq!(fb.get_pixel(5, 5), Some(Rgb888::new(255, 0, 0)));
        assert_eq!(fb.get_pixel(0, 0), Some(Rgb888::new(0, 0, 0)));
        assert_eq!(fb.get_pixel(6, 6), Some(Rgb888::new(0, 0, 0)));
    }

    #[test]
    fn test_load_missing_dir_is_none() {
        assert!(LogoRenderer::load(Path::new("/nonexistent/assets")).is_none());
    }
}
