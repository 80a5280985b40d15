//! # 像素网格抽象
//!
//! 隐写核心只通过 [`PixelGrid`] 读写像素，不关心图像格式。
//! 本模块为 `image` crate 的常用缓冲区类型实现了该 trait。
//! Alpha 通道不参与编码，写入时一律设为不透明。

use crate::codec::Pixel;
use image::{DynamicImage, GenericImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

/// 可按 `(x, y)` 读写 RGB 三通道的二维像素网格。
///
/// 坐标越界属于调用方错误；核心代码只会访问 `0..width` × `0..height` 内的坐标。
pub trait PixelGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn get_pixel(&self, x: u32, y: u32) -> Pixel;
    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel);
}

impl PixelGrid for RgbImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        self.get_pixel(x, y).0
    }

    fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        self.put_pixel(x, y, Rgb(pixel));
    }
}

impl PixelGrid for RgbaImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        [r, g, b]
    }

    fn set_pixel(&mut self, x: u32, y: u32, [r, g, b]: Pixel) {
        self.put_pixel(x, y, Rgba([r, g, b, u8::MAX]));
    }
}

/// 通过 `GenericImage` 读写；16 位或浮点图像会在每次访问时转换，
/// 因此命令处理层在打包前会先把图像归一化为 8 位。
impl PixelGrid for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        let [r, g, b, _] = GenericImageView::get_pixel(self, x, y).0;
        [r, g, b]
    }

    fn set_pixel(&mut self, x: u32, y: u32, [r, g, b]: Pixel) {
        self.put_pixel(x, y, Rgba([r, g, b, u8::MAX]));
    }
}
