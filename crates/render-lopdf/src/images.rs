use folio_render_core::RenderError;
use image::{GenericImageView, ImageFormat};
use lopdf::{Stream, dictionary};

/// An image ready to be added as an XObject.
pub(crate) struct EncodedImage {
    pub stream: Stream,
    pub width: u32,
    pub height: u32,
}

/// Decodes `data` into an image XObject stream.
///
/// JPEG data is embedded as-is with `DCTDecode`. Everything else is decoded
/// to 8-bit RGB, with transparency composited onto white. Grayscale and CMYK
/// JPEGs are decoded too.
/// Number of colour components declared in a JPEG's start-of-frame header.
fn jpeg_components(data: &[u8]) -> Option<u8> {
    let mut pos = 2;
    while pos + 4 <= data.len() {
        if data[pos] != 0xFF {
            return None;
        }
        let marker = data[pos + 1];
        if marker == 0xFF {
            pos += 1;
            continue;
        }
        let len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        let is_sof = matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_sof {
            return data.get(pos + 9).copied();
        }
        pos += 2 + len;
    }
    None
}

pub(crate) fn encode_image(data: &[u8]) -> Result<EncodedImage, RenderError> {
    let format = image::guess_format(data).map_err(|e| RenderError::Image(e.to_string()))?;
    let decoded = image::load_from_memory_with_format(data, format)
        .map_err(|e| RenderError::Image(e.to_string()))?;
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::Image("image has no pixels".into()));
    }

    if format == ImageFormat::Jpeg && jpeg_components(data) == Some(3) {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8_i64,
            "Filter" => "DCTDecode",
        };
        let mut stream = Stream::new(dict, data.to_vec());
        stream.allows_compression = false;
        return Ok(EncodedImage {
            stream,
            width,
            height,
        });
    }

    let rgba = decoded.to_rgba8();
    let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = u16::from(a);
        for channel in [r, g, b] {
            let blended = (u16::from(channel) * alpha + 255 * (255 - alpha)) / 255;
            rgb.push(blended as u8);
        }
    }

    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width as i64,
        "Height" => height as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8_i64,
    };
    Ok(EncodedImage {
        stream: Stream::new(dict, rgb),
        width,
        height,
    })
}
