use clap::Parser;

use image_packer::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_demo, handle_pack, handle_unpack},
};

/// 程序的主入口点
///
/// 初始化日志 (默认只输出警告，可通过 `RUST_LOG` 调整)，解析命令行参数，
/// 并根据指定的子命令将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Pack(args) => handle_pack(args),
        Commands::Unpack(args) => handle_unpack(args),
        Commands::Demo(args) => handle_demo(args),
        Commands::Capacity(args) => handle_capacity(args),
    }
}
