//! # 打包与解包
//!
//! 组合长度头、遍历顺序和像素编解码，完成整段载荷的隐藏与恢复。

use crate::codec::{decode_byte, encode_byte};
use crate::constants::{HEADER_LOW, INTEGRITY_PROBE_PIXELS, MAX_PAYLOAD_LEN};
use crate::error::{PackError, UnpackError};
use crate::grid::PixelGrid;
use crate::header::{read_length, write_length};
use crate::traversal::{Traversal, data_capacity};
use log::debug;

/// 把 `payload` 隐藏进 `grid`。
///
/// 先写长度头，再按 [`Traversal`] 的顺序每个像素写入一个字节；
/// 载荷写完后剩余像素保持不变。
///
/// # Errors
///
/// * 载荷超过 65535 字节时返回 [`PackError::InvalidPayloadSize`]。
/// * 图像放不下长度头和载荷时返回 [`PackError::InsufficientCapacity`]。
/// * 写入后读回校验失败时返回 [`PackError::IntegrityViolation`]。
///
/// 前两种错误在修改网格之前就会被检测到。
pub fn pack<G: PixelGrid + ?Sized>(grid: &mut G, payload: &[u8]) -> Result<(), PackError> {
    let (width, height) = (grid.width(), grid.height());

    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(PackError::InvalidPayloadSize { len: payload.len() });
    }
    let available = data_capacity(width, height);
    if payload.len() > available {
        return Err(PackError::InsufficientCapacity {
            required: payload.len(),
            available,
        });
    }

    write_length(grid, payload.len())?;
    match read_length(grid) {
        Ok(found) if usize::from(found) == payload.len() => {}
        found => {
            return Err(PackError::IntegrityViolation {
                x: HEADER_LOW.0,
                y: HEADER_LOW.1,
                expected: payload.len() as u16,
                found: found.unwrap_or_default(),
            });
        }
    }
    debug!("length header written: {} bytes into a {width}x{height} grid", payload.len());

    for (index, ((x, y), &byte)) in Traversal::new(width, height).zip(payload).enumerate() {
        let encoded = encode_byte(grid.get_pixel(x, y), byte);
        grid.set_pixel(x, y, encoded);

        if index < INTEGRITY_PROBE_PIXELS {
            let found = decode_byte(grid.get_pixel(x, y));
            if found != byte {
                return Err(PackError::IntegrityViolation {
                    x,
                    y,
                    expected: byte.into(),
                    found: found.into(),
                });
            }
        } else {
            debug_assert_eq!(decode_byte(encoded), byte, "pixel ({x}, {y})");
        }
    }

    debug!("packed {} bytes", payload.len());
    Ok(())
}

/// 从 `grid` 中恢复之前隐藏的载荷。
///
/// 读出长度 `L` 后按与 [`pack`] 相同的顺序读取 `L` 个像素，读够即停止。
///
/// # Errors
///
/// * 图像不包含长度头时返回 [`UnpackError::MissingHeader`]。
/// * 长度头声明的字节数超过图像容量时返回 [`UnpackError::CorruptHeader`]。
pub fn unpack<G: PixelGrid + ?Sized>(grid: &G) -> Result<Vec<u8>, UnpackError> {
    let (width, height) = (grid.width(), grid.height());
    let declared = read_length(grid)? as usize;

    let capacity = data_capacity(width, height);
    if declared > capacity {
        return Err(UnpackError::CorruptHeader { declared, capacity });
    }
    debug!("length header declares {declared} bytes, grid holds {capacity}");

    let payload: Vec<u8> = Traversal::new(width, height)
        .take(declared)
        .map(|(x, y)| decode_byte(grid.get_pixel(x, y)))
        .collect();

    debug!("unpacked {} bytes", payload.len());
    Ok(payload)
}
