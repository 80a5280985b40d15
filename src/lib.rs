//! # image_packer 库
//!
//! 本库包含把任意文件打包进图像像素的核心逻辑。
//! 核心部分 (`codec`, `header`, `traversal`, `steganography`) 只依赖 [`grid::PixelGrid`]，
//! 与具体的图像格式无关。

// 声明库包含的所有模块。

pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod grid;
pub mod handler;
pub mod header;
pub mod steganography;
pub mod traversal;

pub use error::{PackError, UnpackError};
pub use grid::PixelGrid;
pub use steganography::{pack, unpack};
