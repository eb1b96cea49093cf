//! Canvas export to raster images and vector page descriptions.
//!
//! The file extension picks the format. Raster formats are stroked with
//! anti-aliasing onto a `tiny_skia::Pixmap` and encoded through `image`;
//! vector formats write one round-capped polyline per primitive.

use std::fmt::Write as _;
use std::path::Path;

use egui::{Color32, Pos2, Rect};
use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Transform};

use crate::error::{ExportError, ExportResult};
use crate::scene::{Primitive, SceneStore};

/// Export output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Bmp,
    /// SVG vector graphics
    Svg,
    /// Encapsulated PostScript page description
    PostScript,
}

impl ExportFormat {
    /// Pick the format from a path's extension. No extension means PNG.
    pub fn from_path(path: &Path) -> ExportResult<Self> {
        let Some(ext) = path.extension() else {
            return Ok(Self::Png);
        };
        match ext.to_string_lossy().to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "svg" => Ok(Self::Svg),
            "ps" | "eps" => Ok(Self::PostScript),
            other => Err(ExportError::UnsupportedFormat(other.to_owned())),
        }
    }

    pub fn is_raster(self) -> bool {
        matches!(self, Self::Png | Self::Jpeg | Self::Bmp)
    }
}

/// Renders a [`SceneStore`] to files.
#[derive(Debug, Clone)]
pub struct SceneExporter {
    background: Color32,
    max_dimension: u32,
}

impl SceneExporter {
    pub fn new(background: Color32, max_dimension: u32) -> Self {
        Self {
            background,
            max_dimension,
        }
    }

    /// Area to export: the scroll region grown to cover everything drawn.
    pub fn export_bounds(scene: &SceneStore, scroll_region: Rect) -> Rect {
        let bounds = scroll_region.union(scene.recompute_extents());
        if bounds.is_positive() {
            bounds
        } else {
            Rect::from_min_size(bounds.min, egui::vec2(1.0, 1.0))
        }
    }

    /// Write `scene` to `path` in the format named by its extension.
    pub fn export_to_path(
        &self,
        scene: &SceneStore,
        bounds: Rect,
        path: &Path,
    ) -> ExportResult<ExportFormat> {
        let format = ExportFormat::from_path(path)?;
        log::info!("Exporting {} primitives to {} as {:?}", scene.len(), path.display(), format);

        match format {
            ExportFormat::Png => {
                let image = DynamicImage::ImageRgba8(self.render_raster(scene, bounds)?);
                save_image(&image, path, ImageFormat::Png)?;
            }
            ExportFormat::Bmp => {
                let image = DynamicImage::ImageRgba8(self.render_raster(scene, bounds)?);
                save_image(&image, path, ImageFormat::Bmp)?;
            }
            ExportFormat::Jpeg => {
                let rgb = DynamicImage::ImageRgba8(self.render_raster(scene, bounds)?).to_rgb8();
                save_image(&DynamicImage::ImageRgb8(rgb), path, ImageFormat::Jpeg)?;
            }
            ExportFormat::Svg => write_text(path, &self.render_svg(scene, bounds))?,
            ExportFormat::PostScript => write_text(path, &self.render_postscript(scene, bounds))?,
        }
        Ok(format)
    }

    /// Rasterize the scene inside `bounds`, one pixel per scene unit.
    pub fn render_raster(&self, scene: &SceneStore, bounds: Rect) -> ExportResult<RgbaImage> {
        let width = bounds.width().ceil().max(1.0) as u32;
        let height = bounds.height().ceil().max(1.0) as u32;
        if width > self.max_dimension || height > self.max_dimension {
            return Err(ExportError::TooLarge {
                width,
                height,
                max: self.max_dimension,
            });
        }

        let mut pixmap =
            Pixmap::new(width, height).ok_or(ExportError::Allocate { width, height })?;
        let [r, g, b, a] = self.background.to_srgba_unmultiplied();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));

        let transform = Transform::from_translate(-bounds.min.x, -bounds.min.y);
        for primitive in scene.primitives() {
            stroke_primitive(&mut pixmap, primitive, transform);
        }

        let pixels = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        RgbaImage::from_raw(width, height, pixels).ok_or(ExportError::Allocate { width, height })
    }

    pub fn render_svg(&self, scene: &SceneStore, bounds: Rect) -> String {
        let mut svg = String::with_capacity(256 + scene.len() * 96);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"{x} {y} {w} {h}\">",
            x = bounds.min.x,
            y = bounds.min.y,
            w = bounds.width(),
            h = bounds.height(),
        );
        let _ = write!(
            svg,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            bounds.min.x,
            bounds.min.y,
            bounds.width(),
            bounds.height(),
            hex(self.background),
        );

        for primitive in scene.primitives() {
            let points = primitive
                .points()
                .iter()
                .map(|p| format!("{:.2},{:.2}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            let [.., a] = primitive.color().to_srgba_unmultiplied();
            let _ = write!(
                svg,
                "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{:.3}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
                points,
                hex(primitive.color()),
                f32::from(a) / 255.0,
                primitive.width(),
            );
        }

        svg.push_str("</svg>");
        svg
    }

    /// Encapsulated PostScript, y axis flipped to PostScript's bottom-up convention.
    pub fn render_postscript(&self, scene: &SceneStore, bounds: Rect) -> String {
        let width = bounds.width();
        let height = bounds.height();
        let to_ps = |p: Pos2| (p.x - bounds.min.x, height - (p.y - bounds.min.y));

        let mut ps = String::with_capacity(256 + scene.len() * 128);
        let _ = writeln!(ps, "%!PS-Adobe-3.0 EPSF-3.0");
        let _ = writeln!(ps, "%%BoundingBox: 0 0 {} {}", width.ceil() as i64, height.ceil() as i64);
        let _ = writeln!(ps, "%%Creator: drawpad");
        let _ = writeln!(ps, "%%EndComments");
        let _ = writeln!(ps, "1 setlinecap 1 setlinejoin");

        let (r, g, b) = ps_rgb(self.background);
        let _ = writeln!(ps, "{r:.3} {g:.3} {b:.3} setrgbcolor");
        let _ = writeln!(ps, "0 0 {width:.2} {height:.2} rectfill");

        for primitive in scene.primitives() {
            let Some((first, rest)) = primitive.points().split_first() else {
                continue;
            };
            let (r, g, b) = ps_rgb(primitive.color());
            let _ = writeln!(ps, "{r:.3} {g:.3} {b:.3} setrgbcolor {:.2} setlinewidth", primitive.width());
            let (x, y) = to_ps(*first);
            let _ = write!(ps, "newpath {x:.2} {y:.2} moveto");
            for point in rest {
                let (x, y) = to_ps(*point);
                let _ = write!(ps, " {x:.2} {y:.2} lineto");
            }
            let _ = writeln!(ps, " stroke");
        }

        let _ = writeln!(ps, "showpage");
        let _ = writeln!(ps, "%%EOF");
        ps
    }
}

fn write_text(path: &Path, contents: &str) -> ExportResult<()> {
    std::fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn hex(color: Color32) -> String {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn ps_rgb(color: Color32) -> (f32, f32, f32) {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    (f32::from(r) / 255.0, f32::from(g) / 255.0, f32::from(b) / 255.0)
}

fn save_image(image: &DynamicImage, path: &Path, format: ImageFormat) -> ExportResult<()> {
    image.save_with_format(path, format).map_err(|err| match err {
        ImageError::IoError(source) => ExportError::Write {
            path: path.to_path_buf(),
            source,
        },
        other => ExportError::Encode(other),
    })
}

/// Stroke one primitive with round caps and joins. A primitive whose points
/// all coincide is painted as a filled dot of the stroke width.
fn stroke_primitive(pixmap: &mut Pixmap, primitive: &Primitive, transform: Transform) {
    let Some((first, rest)) = primitive.points().split_first() else {
        return;
    };

    let mut paint = Paint::default();
    let [r, g, b, a] = primitive.color().to_srgba_unmultiplied();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    if rest.iter().all(|point| point == first) {
        if let Some(dot) = PathBuilder::from_circle(first.x, first.y, primitive.width() / 2.0) {
            pixmap.fill_path(&dot, &paint, FillRule::Winding, transform, None);
        }
        return;
    }

    let mut builder = PathBuilder::new();
    builder.move_to(first.x, first.y);
    for point in rest {
        builder.line_to(point.x, point.y);
    }
    let Some(path) = builder.finish() else {
        return;
    };

    let stroke = tiny_skia::Stroke {
        width: primitive.width(),
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
}
