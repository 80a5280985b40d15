//! # 命令处理逻辑模块
//!
//! 包含处理各子命令的高级业务逻辑。
//! 本模块负责协调文件与图像 I/O、调用核心打包算法以及向用户报告结果。

use crate::cli::{CapacityArgs, DemoArgs, PackArgs, UnpackArgs};
use crate::constants::{
    DEMO_IMAGE, DEMO_PAYLOAD, DEMO_RECOVERED, PACKED_SUFFIX, RECOVERED_EXTENSION, RECOVERED_PREFIX,
};
use crate::steganography::{pack, unpack};
use crate::traversal::payload_capacity;
use anyhow::{Context, Result};
use colored::Colorize;
use image::{DynamicImage, ImageFormat, ImageReader};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Pack' 命令的执行逻辑。
///
/// 读取载荷与图像，把载荷打包进像素，再以无损格式写出结果图像。
/// 输出格式由目标路径的扩展名决定；无法识别时沿用输入图像的格式。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `PackArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像或载荷文件。
/// * 图像没有足够的空间，或载荷超过 65535 字节。
/// * 无法写入到目标图像文件。
///
/// 打包失败时不会写出任何文件。
pub fn handle_pack(args: PackArgs) -> Result<()> {
    let dest = args.dest.unwrap_or_else(|| default_packed_path(&args.image));
    ensure_writable(&dest, args.force)?;

    let payload = fs::read(&args.payload).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.payload.to_string_lossy().red().bold()
        )
    })?;

    let (mut picture, format) = load_image(&args.image)?;

    pack(&mut picture, &payload).with_context(|| {
        format!(
            "Failed to pack {} bytes into '{}'.",
            payload.len().to_string().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    save_image(&picture, &dest, format)?;

    println!(
        "File '{}' has been packed into: {}",
        args.payload.to_string_lossy().green(),
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Unpack' 命令的执行逻辑。
///
/// 读取打包过的图像，按长度头还原载荷并写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `UnpackArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 目标文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 图像缺少长度头，或长度头声明的长度超出图像容量。
/// * 无法写入到目标文件。
pub fn handle_unpack(args: UnpackArgs) -> Result<()> {
    let dest = args
        .payload
        .unwrap_or_else(|| default_recovered_path(&args.image));
    ensure_writable(&dest, args.force)?;

    let (picture, _) = load_image(&args.image)?;

    let payload = unpack(&picture).with_context(|| {
        format!(
            "Failed to unpack payload from '{}'. \nThe image may not contain a packed payload or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, &payload).with_context(|| {
        format!(
            "Unable to write to target payload file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;
    info!("wrote {} bytes to {}", payload.len(), dest.display());

    println!(
        "File '{}' has been unpacked from: {}",
        dest.to_string_lossy().green().bold(),
        args.image.to_string_lossy().green()
    );
    Ok(())
}

/// 处理 'Demo' 命令的执行逻辑。
///
/// 把 `1.txt` 打包进 `1.bmp` 得到 `1.bmp.changed`，再把它解包到 `2.txt`。
///
/// # Errors
///
/// 任一步骤失败时返回该步骤的错误。
pub fn handle_demo(args: DemoArgs) -> Result<()> {
    let image = args.dir.join(DEMO_IMAGE);
    let packed = default_packed_path(&image);

    handle_pack(PackArgs {
        image,
        payload: args.dir.join(DEMO_PAYLOAD),
        dest: Some(packed.clone()),
        force: args.force,
    })?;

    handle_unpack(UnpackArgs {
        image: packed,
        payload: Some(args.dir.join(DEMO_RECOVERED)),
        force: args.force,
    })
}

/// 处理 'Capacity' 命令的执行逻辑：打印图像可容纳的最大载荷字节数。
///
/// # Errors
///
/// 无法读取或解码图像时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let (picture, _) = load_image(&args.image)?;
    let capacity = payload_capacity(picture.width(), picture.height());

    println!(
        "'{}' ({}x{}) can hold up to {} bytes.",
        args.image.to_string_lossy().green(),
        picture.width(),
        picture.height(),
        capacity.to_string().green().bold()
    );
    Ok(())
}

/// 默认的打包输出路径：`<image>.changed`。
pub fn default_packed_path(image: &Path) -> PathBuf {
    let mut path = image.as_os_str().to_owned();
    path.push(PACKED_SUFFIX);
    PathBuf::from(path)
}

/// 默认的解包输出路径：图像所在目录下的 `recovered_<图像文件名>.bin`。
pub fn default_recovered_path(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("{RECOVERED_PREFIX}{name}.{RECOVERED_EXTENSION}"))
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse {} to overwrite it.",
        path.to_string_lossy().red().bold(),
        "--force".yellow()
    );
    Ok(())
}

/// 读取并解码图像，返回 8 位 RGB(A) 图像及其探测到的格式。
///
/// 带 alpha 的图像按 RGBA8 处理，其余按 RGB8 处理，写回时不会凭空多出 alpha 通道。
fn load_image(path: &Path) -> Result<(DynamicImage, Option<ImageFormat>)> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?;
    let format = reader.format();

    let picture = reader.decode().with_context(|| {
        format!(
            "Unable to decode image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    info!(
        "loaded {} ({}x{}, {:?}, {:?})",
        path.display(),
        picture.width(),
        picture.height(),
        picture.color(),
        format
    );

    let picture = if matches!(
        picture,
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_)
    ) {
        picture
    } else if picture.color().has_alpha() {
        DynamicImage::ImageRgba8(picture.into_rgba8())
    } else {
        DynamicImage::ImageRgb8(picture.into_rgb8())
    };
    Ok((picture, format))
}

fn save_image(picture: &DynamicImage, dest: &Path, fallback: Option<ImageFormat>) -> Result<()> {
    let format = ImageFormat::from_path(dest)
        .ok()
        .or(fallback)
        .with_context(|| {
            format!(
                "Unable to determine an output image format for: {}",
                dest.to_string_lossy().red().bold()
            )
        })?;

    picture.save_with_format(dest, format).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;
    info!("saved {} as {:?}", dest.display(), format);
    Ok(())
}
