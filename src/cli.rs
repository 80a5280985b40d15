//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 把任意文件打包进无损格式图像 (如 PNG, BMP) 的像素中，或从中解包还原。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "把任意文件 (最多 65535 字节) 打包进无损格式图像 (如 PNG, BMP) 的像素中，或从中解包还原。每个像素存放一个字节，写在 R/G/B 通道值的十进制个位上。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 把载荷文件打包进图像。
    Pack(PackArgs),

    /// 从打包过的图像中解包出载荷文件。
    Unpack(UnpackArgs),

    /// 演示：把 `1.txt` 打包进 `1.bmp`，再解包到 `2.txt`。
    Demo(DemoArgs),

    /// 查看图像最多能容纳多少字节的载荷。
    Capacity(CapacityArgs),
}

/// 'pack' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct PackArgs {
    /// 用作载体的输入图像路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的载荷文件路径。
    #[arg(short, long)]
    pub payload: PathBuf,

    /// 结果图像的输出路径。默认为输入路径后追加 `.changed`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'unpack' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct UnpackArgs {
    /// 已打包载荷的图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 还原出的载荷的输出路径。默认为图像所在目录下的 `recovered_<图像文件名>.bin`。
    #[arg(short, long)]
    pub payload: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'demo' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// 存放 `1.bmp` 与 `1.txt` 的目录。
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要检查的图像路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
