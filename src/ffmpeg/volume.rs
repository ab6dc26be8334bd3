//! 音量信息提取
//!
//! 从volumedetect的合并输出中抓取峰值电平，并计算编码阶段的目标增益。

use regex::Regex;
use std::sync::LazyLock;

/// volumedetect输出中的峰值行
///
/// 只认第一个匹配；FFmpeg不提供结构化输出，字段顺序即契约
static MAX_VOLUME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"max_volume: ([-\d.]+) dB").expect("音量正则应当合法"));

/// 从合并输出中提取max_volume值（dB）
///
/// 无匹配（或捕获无法解析）说明FFmpeg输出格式变化，返回None由
/// 调用方归入执行错误
pub fn parse_max_volume(output: &str) -> Option<f64> {
    MAX_VOLUME_RE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// 计算目标增益（dB）
///
/// 恒为非负：负峰值被拉升到0dB；峰值已为正时同样取绝对值作为
/// 增益，不向下截断
#[inline]
pub fn target_gain_db(max_volume: f64) -> f64 {
    max_volume.abs().max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 真实volumedetect输出的缩减样本
    const DETECT_TRANSCRIPT: &str = "\
Input #0, mp3, from 'song.mp3':
  Duration: 00:03:24.12, start: 0.025057, bitrate: 192 kb/s
Output #0, null, to 'null':
  Stream #0:0: Audio: pcm_s16le, 44100 Hz, stereo, s16, 1411 kb/s
size=N/A time=00:03:24.12 bitrate=N/A speed= 644x
[Parsed_volumedetect_0 @ 0x55d2c0a1b2c0] n_samples: 18015232
[Parsed_volumedetect_0 @ 0x55d2c0a1b2c0] mean_volume: -17.8 dB
[Parsed_volumedetect_0 @ 0x55d2c0a1b2c0] max_volume: -3.2 dB
[Parsed_volumedetect_0 @ 0x55d2c0a1b2c0] histogram_3db: 12
[Parsed_volumedetect_0 @ 0x55d2c0a1b2c0] histogram_4db: 187
";

    #[test]
    fn test_extracts_from_realistic_transcript() {
        assert_eq!(parse_max_volume(DETECT_TRANSCRIPT), Some(-3.2));
    }

    #[test]
    fn test_extracts_positive_value() {
        let output = "[Parsed_volumedetect_0 @ 0x1] max_volume: 1.5 dB\n";
        assert_eq!(parse_max_volume(output), Some(1.5));
    }

    #[test]
    fn test_first_match_wins() {
        let output = "\
[Parsed_volumedetect_0 @ 0x1] max_volume: -6.0 dB
[Parsed_volumedetect_1 @ 0x2] max_volume: -1.0 dB
";
        assert_eq!(parse_max_volume(output), Some(-6.0));
    }

    #[test]
    fn test_mean_volume_is_not_mistaken_for_max() {
        let output = "[Parsed_volumedetect_0 @ 0x1] mean_volume: -17.8 dB\n";
        assert_eq!(parse_max_volume(output), None);
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(parse_max_volume(""), None);
        assert_eq!(parse_max_volume("size=N/A time=00:00:01.00\n"), None);
    }

    #[test]
    fn test_unparseable_capture_returns_none() {
        // 字符类允许的组合不全是合法浮点数
        let output = "max_volume: 1.2.3 dB\n";
        assert_eq!(parse_max_volume(output), None);
    }

    #[test]
    fn test_gain_boosts_negative_peak_to_zero() {
        assert_eq!(target_gain_db(-3.2), 3.2);
        assert_eq!(target_gain_db(0.0), 0.0);
    }

    #[test]
    fn test_gain_keeps_boosting_positive_peak() {
        // 已削波的峰值同样得到正增益，不做向下截断
        assert_eq!(target_gain_db(2.0), 2.0);
    }
}
