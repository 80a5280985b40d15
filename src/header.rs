//! # 载荷长度头
//!
//! 长度 `L` 以两个字节存放：低字节写入像素 `(0, 0)`，高字节写入像素 `(0, 1)`，
//! 每个字节的写法与一个载荷字节完全相同。

use crate::codec::{decode_byte, encode_byte};
use crate::constants::{HEADER_HIGH, HEADER_LOW, MAX_PAYLOAD_LEN};
use crate::error::{PackError, UnpackError};
use crate::grid::PixelGrid;
use crate::traversal::has_header;

/// 把载荷长度写入两个长度头像素。
///
/// # Errors
///
/// * 长度超过 65535 时返回 [`PackError::InvalidPayloadSize`]。
/// * 网格不包含两个长度头像素时返回 [`PackError::InsufficientCapacity`]。
///
/// 两种情况下网格都不会被修改。
pub fn write_length<G: PixelGrid + ?Sized>(grid: &mut G, len: usize) -> Result<(), PackError> {
    if len > MAX_PAYLOAD_LEN {
        return Err(PackError::InvalidPayloadSize { len });
    }
    if !has_header(grid.width(), grid.height()) {
        return Err(PackError::InsufficientCapacity {
            required: len,
            available: 0,
        });
    }

    let [low, high] = (len as u16).to_le_bytes();
    for ((x, y), byte) in [(HEADER_LOW, low), (HEADER_HIGH, high)] {
        let pixel = grid.get_pixel(x, y);
        grid.set_pixel(x, y, encode_byte(pixel, byte));
    }
    Ok(())
}

/// 从两个长度头像素读出载荷长度。
///
/// # Errors
///
/// 网格不包含两个长度头像素时返回 [`UnpackError::MissingHeader`]。
pub fn read_length<G: PixelGrid + ?Sized>(grid: &G) -> Result<u16, UnpackError> {
    let (width, height) = (grid.width(), grid.height());
    if !has_header(width, height) {
        return Err(UnpackError::MissingHeader { width, height });
    }

    let low = decode_byte(grid.get_pixel(HEADER_LOW.0, HEADER_LOW.1));
    let high = decode_byte(grid.get_pixel(HEADER_HIGH.0, HEADER_HIGH.1));
    Ok(u16::from_le_bytes([low, high]))
}
