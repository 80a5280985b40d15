//! # 通道与像素编解码
//!
//! 数据并不写在二进制最低位上，而是写在通道值的**十进制个位**上，
//! 因此每个通道的改动最多为 9 个亮度级。
//!
//! 一个载荷字节被拆成 3+3+2 位，分别写入 R、G、B 三个通道。

/// 一个像素的三个 8 位通道 `[R, G, B]`。
pub type Pixel = [u8; 3];

/// 十位取整后加上数据可能得到 256 或 257，
/// 分别改写为个位为 8、9 的 248、249 (编码器本身不会产生这两个个位)。
const WRAPPED_256: u8 = 248;
const WRAPPED_257: u8 = 249;

/// 把 0..=7 的数据写入通道值的十进制个位。
///
/// `quantum` 必须小于 8，调用方通过位掩码保证这一点。
pub fn encode_channel(original: u8, quantum: u8) -> u8 {
    debug_assert!(quantum < 8, "quantum {quantum} does not fit in 3 bits");

    match u16::from(original - original % 10) + u16::from(quantum) {
        256 => WRAPPED_256,
        257 => WRAPPED_257,
        value => value as u8,
    }
}

/// 从通道值中读出 [`encode_channel`] 写入的数据。
///
/// 只对本编解码器写过的通道值有意义：未经编码、个位为 8 或 9 的值同样会被读成 6 或 7。
pub fn decode_channel(value: u8) -> u8 {
    match value {
        WRAPPED_256 => 6,
        WRAPPED_257 => 7,
        _ => value % 10,
    }
}

/// 把一个字节写入像素：第 0–2 位进 R，第 3–5 位进 G，第 6–7 位进 B。
pub fn encode_byte(pixel: Pixel, data: u8) -> Pixel {
    let [r, g, b] = pixel;
    [
        encode_channel(r, data & 0x07),
        encode_channel(g, (data & 0x38) >> 3),
        encode_channel(b, (data & 0xC0) >> 6),
    ]
}

/// [`encode_byte`] 的逆运算。
///
/// 对未经编码的像素，各通道可能读出 8 或 9，结果按 8 位截断而不是溢出。
pub fn decode_byte(pixel: Pixel) -> u8 {
    let [r, g, b] = pixel.map(|channel| u16::from(decode_channel(channel)));
    (r + (g << 3) + (b << 6)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_round_trip_for_every_original_and_quantum() {
        for original in 0..=u8::MAX {
            for quantum in 0..8 {
                let encoded = encode_channel(original, quantum);
                assert_eq!(
                    decode_channel(encoded),
                    quantum,
                    "original {original}, quantum {quantum}, encoded {encoded}"
                );
            }
        }
    }

    #[test]
    fn channel_overflow_is_remapped() {
        assert_eq!(encode_channel(250, 6), 248);
        assert_eq!(decode_channel(248), 6);
        assert_eq!(encode_channel(255, 7), 249);
        assert_eq!(decode_channel(249), 7);
        assert_eq!(encode_channel(250, 5), 255);
    }

    #[test]
    fn channel_change_stays_within_nine_levels() {
        for original in 0..=u8::MAX {
            for quantum in 0..8 {
                let encoded = encode_channel(original, quantum);
                assert!(original.abs_diff(encoded) <= 9, "{original} -> {encoded}");
            }
        }
    }

    #[test]
    fn byte_round_trip_on_extreme_pixels() {
        for pixel in [[0, 0, 0], [255, 255, 255], [250, 251, 252], [9, 128, 249]] {
            assert_eq!(decode_byte(encode_byte(pixel, 0xFF)), 0xFF);
            assert_eq!(decode_byte(encode_byte(pixel, 0x00)), 0x00);
        }
    }

    #[test]
    fn byte_split_lands_in_expected_channels() {
        // 0b10_011_101: R=5, G=3, B=2
        assert_eq!(encode_byte([100, 100, 100], 0b1001_1101), [105, 103, 102]);
    }

    #[test]
    fn byte_round_trip_for_every_value() {
        let pixel = [37, 248, 255];
        for data in 0..=u8::MAX {
            assert_eq!(decode_byte(encode_byte(pixel, data)), data);
        }
    }
}
