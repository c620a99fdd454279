//! Bitmap pixel decoding, supplemented from `original_source/tinsel.cpp`'s
//! `get_rgb`/`decode_image`. The typed [`crate::records::Image`] header
//! stops at exposing its fields; this module turns the header plus its
//! backing `hImgBits` bytes into a flat RGBA8 buffer, the data-transform
//! portion of image handling as opposed to `viewer.cpp`'s rendering.

use crate::error::EndOfInput;
use crate::reader::ByteReader;
use crate::records::Image;

/// Tinsel's 16-bit colors are 5-6-5 packed (5 red, 6 green, 5 blue).
pub fn get_rgb(color: u16) -> (u8, u8, u8) {
    let r = (((color >> 11) & 0x1F) << 3) as u8;
    let g = (((color >> 5) & 0x3F) << 2) as u8;
    let b = ((color & 0x1F) << 3) as u8;
    (r, g, b)
}

/// Decodes `image`'s pixels out of `bits` (the bytes at `image.h_img_bits`)
/// into a row-major RGBA8 buffer of `width * height * 4` bytes.
pub fn decode_rgba(image: &Image, bits: &[u8]) -> Result<Vec<u8>, EndOfInput> {
    let width = image.width as usize;
    let height = image.height as usize;
    let mut out = vec![0u8; width * height * 4];
    let mut r = ByteReader::new(bits);

    if image.is_rle != 0 {
        let mut pixel = 0usize;
        for _ in 0..height {
            let mut row_pixels = 0usize;
            while row_pixels < width {
                let num = r.read_u16()?;
                if num & 0x8000 != 0 {
                    let count = (num & 0x7FFF) as usize;
                    let color = r.read_u16()?;
                    let (red, green, blue) = get_rgb(color);
                    for _ in 0..count {
                        write_pixel(&mut out, pixel, red, green, blue, 0);
                        pixel += 1;
                    }
                    row_pixels += count;
                } else {
                    let count = num as usize;
                    for _ in 0..count {
                        let color = r.read_u16()?;
                        let (red, green, blue) = get_rgb(color);
                        write_pixel(&mut out, pixel, red, green, blue, 0);
                        pixel += 1;
                    }
                    row_pixels += count;
                }
            }
        }
    } else {
        for pixel in 0..width * height {
            let color = r.read_u16()?;
            let (red, green, blue) = get_rgb(color);
            write_pixel(&mut out, pixel, red, green, blue, 0);
        }
    }

    Ok(out)
}

fn write_pixel(out: &mut [u8], pixel: usize, r: u8, g: u8, b: u8, a: u8) {
    let base = pixel * 4;
    if base + 4 <= out.len() {
        out[base] = r;
        out[base + 1] = g;
        out[base + 2] = b;
        out[base + 3] = a;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::Handle;

    fn image(width: u16, height: u16, is_rle: u16) -> Image {
        Image {
            handle: Handle::NULL,
            width,
            height,
            ani_off_x: 0,
            ani_off_y: 0,
            h_img_bits: Handle::NULL,
            is_rle,
            color_flags: 0,
        }
    }

    #[test]
    fn get_rgb_splits_565_packed_color() {
        // Pure red (5 high bits set), left-shifted into 8-bit range.
        let (r, g, b) = get_rgb(0xF800);
        assert_eq!((r, g, b), (0xF8, 0, 0));
    }

    #[test]
    fn decodes_a_flat_two_by_one_bitmap() {
        let img = image(2, 1, 0);
        let mut bits = Vec::new();
        bits.extend_from_slice(&0xF800u16.to_le_bytes()); // red
        bits.extend_from_slice(&0x001Fu16.to_le_bytes()); // blue
        let out = decode_rgba(&img, &bits).unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(&out[0..4], &[0xF8, 0, 0, 0]);
        assert_eq!(&out[4..8], &[0, 0, 0xF8, 0]);
    }

    #[test]
    fn decodes_an_rle_run_with_alpha_zero() {
        let img = image(3, 1, 1);
        let mut bits = Vec::new();
        bits.extend_from_slice(&(0x8000u16 | 3).to_le_bytes());
        bits.extend_from_slice(&0x001Fu16.to_le_bytes()); // blue, repeated 3x
        let out = decode_rgba(&img, &bits).unwrap();
        assert_eq!(out.len(), 12);
        for chunk in out.chunks(4) {
            assert_eq!(chunk, &[0, 0, 0xF8, 0]);
        }
    }

    #[test]
    fn decodes_an_rle_run_of_distinct_pixels() {
        let img = image(2, 1, 1);
        let mut bits = Vec::new();
        bits.extend_from_slice(&2u16.to_le_bytes());
        bits.extend_from_slice(&0xF800u16.to_le_bytes());
        bits.extend_from_slice(&0x001Fu16.to_le_bytes());
        let out = decode_rgba(&img, &bits).unwrap();
        assert_eq!(&out[0..4], &[0xF8, 0, 0, 0]);
        assert_eq!(&out[4..8], &[0, 0, 0xF8, 0]);
    }
}
