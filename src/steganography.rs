use crate::constants::{HEADER_PIXELS, LENGTH_DIGITS, MAX_MESSAGE_LEN, START_MARKER};
use crate::error::EditError;
use crate::raster::{Pixel, RasterImage};

pub fn encode(image: &mut RasterImage, text: &str) -> Result<bool, EditError> {
    if let Some(bad) = text.chars().find(|&ch| u32::from(ch) > 255) {
        return Err(EditError::InvalidArgument {
            reason: format!("the character '{}' cannot be stored in a single pixel", bad),
        });
    }

    let count = text.chars().count();
    if count > MAX_MESSAGE_LEN || HEADER_PIXELS + count > image.len() {
        return Ok(false);
    }

    let payload = format!(
        "{}{:0width$}{}",
        START_MARKER,
        count,
        text,
        width = LENGTH_DIGITS
    );
    for (pos, ch) in payload.chars().enumerate() {
        let replaced = encode_pixel(image.flat_pixel(pos), ch as u8);
        image.set_flat_pixel(pos, replaced);
    }
    Ok(true)
}

pub fn decode(image: &RasterImage) -> Option<String> {
    if image.len() < HEADER_PIXELS {
        return None;
    }

    let marker_found = START_MARKER
        .bytes()
        .enumerate()
        .all(|(pos, byte)| decode_pixel(image.flat_pixel(pos)) == u16::from(byte));
    if !marker_found {
        return None;
    }

    let mut length: usize = 0;
    for pos in START_MARKER.len()..HEADER_PIXELS {
        let ch = char::from_u32(u32::from(decode_pixel(image.flat_pixel(pos))))?;
        length = length * 10 + ch.to_digit(10)? as usize;
    }
    if image.len() < HEADER_PIXELS + length {
        return None;
    }

    let mut message = String::with_capacity(length);
    for pos in HEADER_PIXELS..HEADER_PIXELS + length {
        message.push(char::from_u32(u32::from(decode_pixel(image.flat_pixel(pos))))?);
    }
    Some(message)
}

pub fn decode_pixel(pixel: Pixel) -> u16 {
    u16::from(pixel.r % 10) * 100 + u16::from(pixel.g % 10) * 10 + u16::from(pixel.b % 10)
}

pub fn encode_pixel(pixel: Pixel, code: u8) -> Pixel {
    Pixel::new(
        embed_digit(pixel.r, code / 100),
        embed_digit(pixel.g, code % 100 / 10),
        embed_digit(pixel.b, code % 10),
    )
}

// 替换通道的个位数字；若结果超出 255 则借位退一个十位。
fn embed_digit(channel: u8, digit: u8) -> u8 {
    let replaced = u16::from(channel) - u16::from(channel % 10) + u16::from(digit);
    if replaced > 255 {
        (replaced - 10) as u8
    } else {
        replaced as u8
    }
}
