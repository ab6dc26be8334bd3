//! FFmpeg进程调用
//!
//! 负责FFmpeg的可用性探测、参数构建与同步调用。每次调用阻塞等待
//! 进程结束，stdout与stderr合并为一段文本返回给上层解析。

use crate::error::{self, NormalizeError, NormalizeResult};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// FFmpeg可执行文件名（按平台区分，通过PATH查找）
#[cfg(target_os = "windows")]
const FFMPEG_BINARY: &str = "ffmpeg.exe";
#[cfg(not(target_os = "windows"))]
const FFMPEG_BINARY: &str = "ffmpeg";

/// 流选择参数：固定选取第一条音频流
const AUDIO_STREAM_MAP: &str = "0:a:0";

/// 检测阶段的输出占位符
///
/// null muxer会丢弃所有数据，此文件名不会被真正写入
const NULL_SINK: &str = "null";

/// FFmpeg安装指南（跨平台）
pub const FFMPEG_INSTALL_GUIDE: &str = r#"
FFmpeg is required for volume detection and encoding / 音量检测与编码需要FFmpeg

Installation / 安装方法:
  macOS:   brew install ffmpeg
  Windows: https://www.gyan.dev/ffmpeg/builds/ (推荐Full版本)
           或使用: winget install Gyan.FFmpeg
  Linux:
    - Ubuntu/Debian: sudo apt install ffmpeg
    - Fedora/RHEL:   sudo dnf install ffmpeg
    - Arch:          sudo pacman -S ffmpeg

Official site / 官方网站: https://ffmpeg.org/download.html
"#;

/// 检测FFmpeg是否可用（PATH查找 + -version探针）
pub fn is_available() -> bool {
    Command::new(FFMPEG_BINARY)
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// FFmpeg预检：批次开始前确认工具可用，避免处理到一半才失败
pub fn ensure_available() -> NormalizeResult<()> {
    if is_available() {
        Ok(())
    } else {
        Err(NormalizeError::ToolMissingError)
    }
}

/// 调用FFmpeg并返回合并输出
pub fn call_ffmpeg(args: &[String]) -> NormalizeResult<String> {
    call_tool(FFMPEG_BINARY, args)
}

/// 通用的外部工具调用：spawn + 阻塞等待 + 合并捕获
///
/// spawn失败按NotFound与否分流为工具缺失/启动失败，
/// 非零退出映射为执行失败并附带输出末行
pub fn call_tool(program: &str, args: &[String]) -> NormalizeResult<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(error::spawn_error)?;

    // volumedetect的统计走stderr，合并后作为同一段文本扫描
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(NormalizeError::ToolExecutionError(describe_exit(
            output.status,
            &text,
        )));
    }

    Ok(text)
}

/// 非零退出的描述：状态加输出末行（FFmpeg的报错原因通常在最后）
fn describe_exit(status: ExitStatus, text: &str) -> String {
    let last_line = text
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .trim();

    if last_line.is_empty() {
        status.to_string()
    } else {
        format!("{status}: {last_line}")
    }
}

/// 检测阶段参数：volumedetect滤镜，输出丢弃到null muxer
pub fn detect_args(input: &Path) -> Vec<String> {
    vec![
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-map".to_string(),
        AUDIO_STREAM_MAP.to_string(),
        "-af".to_string(),
        "volumedetect".to_string(),
        "-f".to_string(),
        "null".to_string(),
        NULL_SINK.to_string(),
    ]
}

/// 编码阶段参数：volume滤镜施加增益，编码器与可选码率来自格式配置
///
/// 增益按一位小数写入滤镜参数
pub fn encode_args(
    input: &Path,
    output: &Path,
    gain_db: f64,
    encoder: &str,
    bitrate: Option<&str>,
) -> Vec<String> {
    let mut args = vec![
        "-y".to_string(),
        "-i".to_string(),
        input.to_string_lossy().into_owned(),
        "-map".to_string(),
        AUDIO_STREAM_MAP.to_string(),
        "-af".to_string(),
        format!("volume={gain_db:.1}dB"),
        "-c:a".to_string(),
        encoder.to_string(),
    ];

    if let Some(rate) = bitrate {
        args.push("-b:a".to_string());
        args.push(rate.to_string());
    }

    args.push(output.to_string_lossy().into_owned());
    args
}
