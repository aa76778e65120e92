//! Raster export: PNG-encoded data URI snapshots of the surface.

use crate::raster::RasterSurface;
use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Raster export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported raster format: {0:?}")]
    UnsupportedFormat(String),
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("png decoding failed: {0}")]
    Decode(#[from] png::DecodingError),
}

/// Supported raster snapshot formats, identified MIME-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterFormat {
    #[default]
    Png,
}

impl RasterFormat {
    /// Parse a MIME-like format identifier.
    pub fn parse(identifier: &str) -> Result<Self, ExportError> {
        match identifier {
            "image/png" => Ok(Self::Png),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }

    /// The MIME type written into the data URI.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
        }
    }
}

/// Encode the current pixel buffer as a base64 data URI. Pure read; an
/// empty surface produces a valid blank image.
///
/// `quality` is clamped to [0, 1] and has no effect on PNG, which is
/// lossless. It is accepted for parity with `canvas.toDataURL`.
pub fn export_raster(
    surface: &RasterSurface,
    format: RasterFormat,
    quality: f64,
) -> Result<String, ExportError> {
    let _quality = quality.clamp(0.0, 1.0);

    let mut encoded = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut encoded, surface.width(), surface.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&surface.data())?;
    }

    Ok(format!(
        "data:{};base64,{}",
        format.mime(),
        STANDARD.encode(&encoded)
    ))
}

/// Decode a PNG data URI back to (rgba, width, height). Used to verify
/// the export round trip.
pub fn decode_png(data_uri: &str) -> Result<(Vec<u8>, u32, u32), ExportError> {
    let payload = data_uri
        .strip_prefix("data:image/png;base64,")
        .ok_or_else(|| ExportError::UnsupportedFormat(data_uri.chars().take(32).collect()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ExportError::UnsupportedFormat(e.to_string()))?;

    let decoder = png::Decoder::new(bytes.as_slice());
    let mut reader = decoder.read_info()?;
    let mut buffer = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buffer)?;
    buffer.truncate(info.buffer_size());

    Ok((buffer, info.width, info.height))
}
