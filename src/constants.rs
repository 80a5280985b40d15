/// 存放载荷长度低字节的像素坐标 `(x, y)`。
pub const HEADER_LOW: (u32, u32) = (0, 0);

/// 存放载荷长度高字节的像素坐标 `(x, y)`。
pub const HEADER_HIGH: (u32, u32) = (0, 1);

/// 长度头占用的像素数。
pub const HEADER_PIXELS: usize = 2;

/// 长度头为 16 位，因此载荷最多 65535 字节。
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// 写入后立即解码校验的数据像素个数。
/// 其余像素只在 debug 构建中通过 `debug_assert!` 校验。
pub const INTEGRITY_PROBE_PIXELS: usize = 8;

/// 未指定输出路径时，隐写图像在输入路径后追加的后缀。
pub const PACKED_SUFFIX: &str = ".changed";

/// 未指定输出路径时，恢复出的载荷文件名前缀与扩展名。
pub const RECOVERED_PREFIX: &str = "recovered_";
pub const RECOVERED_EXTENSION: &str = "bin";

/// `demo` 子命令使用的固定文件名。
pub const DEMO_IMAGE: &str = "1.bmp";
pub const DEMO_PAYLOAD: &str = "1.txt";
pub const DEMO_RECOVERED: &str = "2.txt";
