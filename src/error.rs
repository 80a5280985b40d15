//! # 错误类型
//!
//! 核心隐写函数返回的强类型错误。命令处理层再用 `anyhow` 为其附加上下文。

use thiserror::Error;

/// 隐藏载荷时可能出现的错误。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    /// 载荷长度无法用 16 位长度头表示。
    #[error("payload of {len} bytes exceeds the 65535 byte limit of the length header")]
    InvalidPayloadSize { len: usize },

    /// 图像放不下长度头和全部载荷。`available` 为除长度头外的数据像素数。
    #[error("Not enough space in the image: required {required} bytes, available {available}")]
    InsufficientCapacity { required: usize, available: usize },

    /// 写入后立即读回的值与写入值不一致，说明编解码器本身有缺陷。
    #[error(
        "integrity check failed at pixel ({x}, {y}): wrote {expected}, read back {found}"
    )]
    IntegrityViolation {
        x: u32,
        y: u32,
        expected: u16,
        found: u16,
    },
}

/// 恢复载荷时可能出现的错误。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnpackError {
    /// 图像尺寸不足以包含两个长度头像素。
    #[error("a {width}x{height} image cannot contain a length header")]
    MissingHeader { width: u32, height: u32 },

    /// 长度头声明的载荷长度超出了图像可容纳的范围。
    #[error("length header declares {declared} bytes but the image holds at most {capacity}")]
    CorruptHeader { declared: usize, capacity: usize },
}
