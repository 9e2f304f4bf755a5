//! PNM container I/O
//!
//! Reading accepts any PBM/PGM/PPM/PAM variant the `image` crate decodes.
//! 8-bit sources become rasters with denominator 255, 16-bit sources keep
//! 65535. Writing always produces binary PPM (P6) with maxval 255.

use comp40_core::{Comp40Error, Comp40Result, Dimensions, Raster, Rgb};
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageError, ImageFormat};
use log::debug;
use std::io::{Read, Write};

fn image_error(e: ImageError) -> Comp40Error {
    Comp40Error::Image(e.to_string())
}

/// Read a whole PNM image from a stream
pub fn read_pnm<R: Read>(mut reader: R) -> Comp40Result<Raster> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_pnm(&bytes)
}

/// Decode a PNM image held in memory
pub fn decode_pnm(bytes: &[u8]) -> Comp40Result<Raster> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Pnm).map_err(image_error)?;
    let dimensions = Dimensions::new(image.width(), image.height());
    debug!(
        "read {}x{} PNM image ({:?})",
        dimensions.width,
        dimensions.height,
        image.color()
    );

    let wide = matches!(
        image,
        DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_)
    );

    if wide {
        let pixels = image
            .to_rgb16()
            .pixels()
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
            .collect();
        Raster::from_pixels(dimensions, u16::MAX, pixels)
    } else {
        let pixels = image
            .to_rgb8()
            .pixels()
            .map(|p| Rgb::new(p.0[0] as u16, p.0[1] as u16, p.0[2] as u16))
            .collect();
        Raster::from_pixels(dimensions, u8::MAX as u16, pixels)
    }
}

/// Write an image as binary PPM, rescaling samples to maxval 255
pub fn write_ppm<W: Write>(image: &Raster, writer: W) -> Comp40Result<()> {
    let samples = image.to_rgb8();
    PnmEncoder::new(writer)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(&samples, image.width(), image.height(), ExtendedColorType::Rgb8)
        .map_err(image_error)
}
