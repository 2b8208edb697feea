//! `icons`
//!
//! Renders the extension's vector logo into the raster icon sizes that the
//! Chrome manifest requires. When the vector conversion fails for a size,
//! a procedurally drawn placeholder of that exact size is produced instead,
//! so a run always yields a complete icon set.

mod fallback;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use resvg::tiny_skia::Pixmap;

/// The square icon sizes, in pixels, that the extension manifest requires.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Where to find the vector logo and where to put the rendered icons.
pub struct IconConfig {
    /// Path to the source vector logo.
    pub svg_path: PathBuf,
    /// Directory the rendered `icon{size}.png` files are written into.
    pub output_directory: PathBuf,
    /// The square pixel sizes to render.
    pub sizes: Vec<u32>,
}

impl Default for IconConfig {
    fn default() -> Self {
        let icons_directory = Path::new("chrome-pdf-extension")
            .join("assets")
            .join("icons");
        IconConfig {
            svg_path: icons_directory.join("icon.svg"),
            output_directory: icons_directory,
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

/// Which rendering path produced an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    /// The vector logo was rasterised directly.
    Svg,
    /// Vector conversion failed and the procedural placeholder was drawn.
    Fallback,
}

/// One icon written to disk.
#[derive(Debug)]
pub struct RenderedIcon {
    /// The square pixel size of the icon.
    pub size: u32,
    /// Where the PNG was written.
    pub path: PathBuf,
    /// Which rendering path produced it.
    pub source: IconSource,
}

/// Errors that abort an icon-rendering run.
///
/// Per-size vector conversion failures are not represented here; they are
/// recovered locally by falling back to the procedural placeholder.
#[derive(Debug)]
pub enum IconError {
    /// A size of zero pixels was requested.
    ZeroSize,
    /// Failed to create the output directory.
    CreateOutputDirectory(io::Error),
    /// Failed to encode or write a rendered icon.
    WriteIcon {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying encoder or filesystem error.
        source: image::ImageError,
    },
}

/// Why the vector rendering path failed for one size.
#[derive(Debug)]
enum ConvertError {
    /// Could not read the logo file.
    ReadSvg(io::Error),
    /// The logo file did not parse as SVG.
    ParseSvg(resvg::usvg::Error),
    /// Could not allocate the target pixmap.
    CreatePixmap,
}

/// Renders every configured size, writing `icon{size}.png` into the output
/// directory. A vector conversion failure for one size falls back to the
/// procedural placeholder and never aborts the remaining sizes.
///
/// # Arguments
/// * `config`: The logo path, output directory and sizes to render.
///
/// # Returns
/// One [`RenderedIcon`] per configured size, recording which path produced
/// each icon.
///
/// # Errors
/// [`IconError`] when the output directory cannot be created or a finished
/// icon cannot be written to disk.
pub fn render_icons(config: &IconConfig) -> Result<Vec<RenderedIcon>, IconError> {
    fs::create_dir_all(&config.output_directory).map_err(IconError::CreateOutputDirectory)?;

    let mut rendered = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        if size == 0 {
            return Err(IconError::ZeroSize);
        }

        let path = config.output_directory.join(format!("icon{size}.png"));
        let (pixmap, source) = match rasterise_logo(&config.svg_path, size) {
            Ok(pixmap) => (pixmap, IconSource::Svg),
            Err(error) => {
                log::warn!("SVG conversion failed for size {size}: {error:?}");
                (fallback::placeholder_icon(size), IconSource::Fallback)
            }
        };
        write_png(&pixmap, size, &path)?;

        match source {
            IconSource::Svg => println!("Converted SVG to {} ({size}x{size})", path.display()),
            IconSource::Fallback => println!("Created {} ({size}x{size})", path.display()),
        }
        rendered.push(RenderedIcon { size, path, source });
    }

    Ok(rendered)
}

/// Rasterises the vector logo to a square pixmap of exactly `size` pixels.
///
/// # Arguments
/// * `svg_path`: The logo file to read.
/// * `size`: The square pixel size to render at, must be non-zero.
///
/// # Returns
/// The rendered pixmap if the whole read-parse-render chain succeeded,
/// otherwise the [`ConvertError`] that selects the fallback path.
fn rasterise_logo(svg_path: &Path, size: u32) -> Result<Pixmap, ConvertError> {
    let svg_bytes = fs::read(svg_path).map_err(ConvertError::ReadSvg)?;
    let tree = resvg::usvg::Tree::from_data(&svg_bytes, &resvg::usvg::Options::default())
        .map_err(ConvertError::ParseSvg)?;

    let mut pixmap = Pixmap::new(size, size).ok_or(ConvertError::CreatePixmap)?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default().pre_scale(
            size as f32 / tree.size().width(),
            size as f32 / tree.size().height(),
        ),
        &mut pixmap.as_mut(),
    );

    Ok(pixmap)
}

/// Encodes a pixmap as PNG and writes it to `path`. Both rendering paths
/// converge here; a failure at this point is fatal to the run.
fn write_png(pixmap: &Pixmap, size: u32, path: &Path) -> Result<(), IconError> {
    let buffer = image::RgbaImage::from_vec(size, size, pixmap.data().to_vec())
        .expect("pixmap buffer length matches its dimensions");
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| IconError::WriteIcon {
            path: path.to_path_buf(),
            source,
        })
}
