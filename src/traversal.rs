//! # 像素遍历顺序
//!
//! 打包和解包必须以完全相同的顺序访问数据像素，否则无法还原载荷。
//! 顺序为按列优先：外层 `x` 从 0 到 `width - 1`，内层 `y` 从 0 到 `height - 1`，
//! 并跳过两个长度头像素 `(0, 0)` 与 `(0, 1)`。

use crate::constants::{HEADER_HIGH, HEADER_LOW, HEADER_PIXELS, MAX_PAYLOAD_LEN};

/// 判断网格是否包含两个长度头像素。
pub fn has_header(width: u32, height: u32) -> bool {
    width > HEADER_HIGH.0 && height > HEADER_HIGH.1
}

/// 除长度头以外可用于数据的像素数；网格放不下长度头时为 0。
pub fn data_capacity(width: u32, height: u32) -> usize {
    if !has_header(width, height) {
        return 0;
    }
    (width as usize * height as usize).saturating_sub(HEADER_PIXELS)
}

/// 网格实际能承载的最大载荷字节数，同时受长度头上限约束。
pub fn payload_capacity(width: u32, height: u32) -> usize {
    data_capacity(width, height).min(MAX_PAYLOAD_LEN)
}

/// 按固定顺序产出数据像素坐标的惰性迭代器。
///
/// 每次调用 [`Traversal::new`] 都从头开始，相同尺寸总是得到相同的序列。
#[derive(Debug, Clone)]
pub struct Traversal {
    width: u32,
    height: u32,
    x: u32,
    y: u32,
}

impl Traversal {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            x: 0,
            y: 0,
        }
    }

    fn is_header(&self, x: u32, y: u32) -> bool {
        (x, y) == HEADER_LOW || (x, y) == HEADER_HIGH
    }
}

impl Iterator for Traversal {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.height == 0 {
            return None;
        }
        while self.x < self.width {
            let coord = (self.x, self.y);

            self.y += 1;
            if self.y == self.height {
                self.y = 0;
                self.x += 1;
            }

            if !self.is_header(coord.0, coord.1) {
                return Some(coord);
            }
        }
        None
    }
}
