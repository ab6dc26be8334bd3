//! 编码预设模块
//!
//! 维护预设名到编码参数的固定映射，并负责把位置参数分类为
//! 预设选择或文件模式。

use regex::Regex;
use std::sync::LazyLock;

use super::constants::defaults;

/// 预设候选token的形状：字母开头，其余为字母或数字
///
/// 预设名本身可含数字（m4a、mp3），因此不能只允许"字母+数字后缀"
static PRESET_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("预设token正则应当合法"));

/// 预设表：名称 → (编码器, 扩展名, 默认码率)
///
/// wav与flac为无损输出，不设码率
const PRESET_INFO: &[(&str, &str, &str, Option<&str>)] = &[
    ("m4a", "libfdk_aac", "m4a", Some("128K")),
    ("aac", "libfdk_aac", "m4a", Some("128K")),
    ("mp3", "libmp3lame", "mp3", Some("192K")),
    ("opus", "libopus", "opus", Some("128K")),
    ("ogg", "libvorbis", "ogg", Some("160K")),
    ("wav", "pcm_s16le", "wav", None),
    ("flac", "flac", "flac", None),
];

/// 编码格式配置
///
/// 预设解析的产物，编码阶段直接取用。extension可被 -e 覆盖，
/// bitrate可被预设token的数字后缀覆盖。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// FFmpeg编码器名称（-c:a参数值）
    pub encoder: String,
    /// 输出文件扩展名（不含点号）
    pub extension: String,
    /// 码率参数值（-b:a），无损预设为None
    pub bitrate: Option<String>,
}

/// 位置参数分类结果
#[derive(Debug)]
pub enum InputToken {
    /// 预设选择（码率覆盖已应用的完整格式）
    Preset(FormatConfig),
    /// 文件路径或通配符模式
    Pattern(String),
}

/// 按名称精确查找预设（大小写敏感）
pub fn lookup(name: &str) -> Option<FormatConfig> {
    PRESET_INFO
        .iter()
        .find(|(preset, _, _, _)| *preset == name)
        .map(|&(_, encoder, extension, bitrate)| FormatConfig {
            encoder: encoder.to_string(),
            extension: extension.to_string(),
            bitrate: bitrate.map(str::to_string),
        })
}

/// 无预设token时的默认格式
pub fn default_format() -> FormatConfig {
    lookup(defaults::PRESET).expect("默认预设必须存在于预设表中")
}

/// 对单个位置参数进行分类
///
/// 形状符合且能解析出预设名的token视为预设选择，其余一律作为
/// 文件/模式返回。未知名称不报错（"xyz999"可能是真实文件名）。
pub fn classify_token(token: &str) -> InputToken {
    if PRESET_TOKEN_RE.is_match(token)
        && let Some(format) = resolve_preset(token)
    {
        return InputToken::Preset(format);
    }
    InputToken::Pattern(token.to_string())
}

/// 预设token解析
///
/// 整名命中直接取表项（"mp3"不会被拆成"mp"+"3"）；否则按最长
/// 前缀名命中，剩余部分须全为数字并作为千比特码率覆盖
/// （"mp3320" → mp3预设 + 320K）。
fn resolve_preset(token: &str) -> Option<FormatConfig> {
    if let Some(format) = lookup(token) {
        return Some(format);
    }

    let mut best: Option<(&'static str, &str)> = None;
    for &(name, _, _, _) in PRESET_INFO {
        if let Some(rest) = token.strip_prefix(name)
            && !rest.is_empty()
            && rest.bytes().all(|b| b.is_ascii_digit())
            && best.is_none_or(|(prev, _)| prev.len() < name.len())
        {
            best = Some((name, rest));
        }
    }

    best.and_then(|(name, digits)| {
        let mut format = lookup(name)?;
        format.bitrate = Some(format!("{digits}K"));
        Some(format)
    })
}
