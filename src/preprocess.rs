//! Image normalization: orientation correction, resizing and conversion of a
//! photo into the model's input tensor.

use std::io::Cursor;

use burn::tensor::{backend::Backend, Device, Shape, Tensor, TensorData};
use image::{imageops::FilterType, DynamicImage};
use log::warn;

use crate::error::Result;

/// Physical rotation needed to display a photo upright, as recorded by the
/// camera in the image's orientation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Orientation {
    /// Map a raw orientation tag value to a rotation.
    ///
    /// Only the three rotation-only tag values are honored: 6 -> 90, 3 -> 180
    /// and 8 -> 270. Everything else, including the mirrored variants and an
    /// absent or undefined tag, maps to no rotation.
    pub fn from_exif_tag(tag: u32) -> Self {
        match tag {
            6 => Self::Rotate90,
            3 => Self::Rotate180,
            8 => Self::Rotate270,
            _ => Self::Normal,
        }
    }

    /// Clockwise rotation in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }
}

/// Read the orientation tag from an encoded photo.
///
/// Unreadable or absent metadata is recoverable: a warning is logged and the
/// photo is treated as upright.
pub fn read_orientation(encoded: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(encoded);
    let metadata = match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(metadata) => metadata,
        Err(err) => {
            warn!("could not read orientation metadata, assuming upright: {err}");
            return Orientation::Normal;
        }
    };

    let tag = metadata
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .unwrap_or(1);

    Orientation::from_exif_tag(tag)
}

/// Decode an encoded photo into pixels.
///
/// A photo that cannot be decoded is terminal for the request; no tensor can
/// be produced from it.
pub fn decode_image(encoded: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(encoded)?)
}

/// Convert a source photo into the model input tensor.
///
/// The photo is stretched to the target dimensions with interpolated
/// (bilinear) scaling, rotated upright per `orientation`, and emitted as a
/// `[1, height, width, 3]` tensor with each RGB channel scaled to `[0, 1]`.
/// The stretch is anisotropic on purpose: distortion is accepted in exchange
/// for a guaranteed fixed output shape.
pub fn normalize<B: Backend>(
    image: &DynamicImage,
    orientation: Orientation,
    width: usize,
    height: usize,
    device: &Device<B>,
) -> Tensor<B, 4> {
    // A quarter turn swaps the axes, so resize to the swapped dimensions
    // first to come out at `width` x `height` after rotating.
    let (resize_width, resize_height) = match orientation {
        Orientation::Rotate90 | Orientation::Rotate270 => (height, width),
        _ => (width, height),
    };
    let resized = image.resize_exact(
        resize_width as u32,
        resize_height as u32,
        FilterType::Triangle, // also known as bilinear in 2D
    );

    let upright = match orientation {
        Orientation::Normal => resized,
        Orientation::Rotate90 => resized.rotate90(),
        Orientation::Rotate180 => resized.rotate180(),
        Orientation::Rotate270 => resized.rotate270(),
    };

    to_tensor(upright.into_rgb8().into_raw(), [height, width, 3], device)
}

/// Build a `[1, H, W, C]` float tensor from interleaved RGB bytes.
pub fn to_tensor<B: Backend>(
    rgb: Vec<u8>,
    shape: [usize; 3],
    device: &Device<B>,
) -> Tensor<B, 4> {
    Tensor::<B, 3>::from_data(
        TensorData::new(rgb, Shape::new(shape)).convert::<B::FloatElem>(),
        device,
    )
    // [H, W, C] -> [1, H, W, C]
    .unsqueeze::<4>()
        / 255 // scale to [0, 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_tags_map_to_their_angles() {
        assert_eq!(Orientation::from_exif_tag(6), Orientation::Rotate90);
        assert_eq!(Orientation::from_exif_tag(3), Orientation::Rotate180);
        assert_eq!(Orientation::from_exif_tag(8), Orientation::Rotate270);
    }

    #[test]
    fn every_other_tag_falls_back_to_no_rotation() {
        for tag in [0u32, 1, 2, 4, 5, 7, 9, 42, u32::MAX] {
            assert_eq!(Orientation::from_exif_tag(tag), Orientation::Normal);
        }
    }

    #[test]
    fn degrees_match_the_rotation() {
        assert_eq!(Orientation::Normal.degrees(), 0);
        assert_eq!(Orientation::Rotate90.degrees(), 90);
        assert_eq!(Orientation::Rotate180.degrees(), 180);
        assert_eq!(Orientation::Rotate270.degrees(), 270);
    }

    #[test]
    fn no_metadata_reads_as_upright() {
        // A bare PNG carries no orientation metadata.
        let mut png = Vec::new();
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([10, 20, 30]));
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut png), image::ImageOutputFormat::Png)
            .unwrap();
        assert_eq!(read_orientation(&png), Orientation::Normal);
    }
}
