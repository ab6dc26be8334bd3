//! MacinMeter Volume Normalization Tool
//!
//! 基于FFmpeg volumedetect滤镜的峰值音量归一化工具。
//! 以0 dBFS为归一化目标，对批量音频文件执行检测与增益编码两阶段处理。
//!
//! ## 核心特性
//! - 两阶段流水线：volumedetect峰值测量 + volume滤镜增益编码
//! - 预设驱动的编码参数：m4a/aac/mp3/opus/ogg/wav/flac，可附码率后缀（如mp3320）
//! - 通配符批量输入：glob模式展开、去重与可读性预检
//! - 自动输出命名：{stem}-1.{ext}，输入文件永不被覆盖

pub mod error;
pub mod ffmpeg;
pub mod tools;

// 重新导出核心类型
pub use error::{ErrorCategory, NormalizeError, NormalizeResult};
pub use ffmpeg::{call_ffmpeg, detect_args, encode_args, parse_max_volume, target_gain_db};
pub use tools::{AppConfig, FileOutcome, FileTask, FormatConfig, RunPlan};
