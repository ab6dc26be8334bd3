//! 单文件处理模块
//!
//! 执行检测→提取→增益→编码的两阶段流水线，并随进度输出各阶段信息。

use super::presets::FormatConfig;
use super::scanner::RunPlan;
use super::utils;
use crate::error::{NormalizeError, NormalizeResult};
use crate::ffmpeg;
use std::path::{Path, PathBuf};

/// 单文件任务（创建后不再变更）
///
/// 输入路径在任务创建前已通过可读性验证
#[derive(Debug, Clone)]
pub struct FileTask {
    /// 规范化的输入路径
    pub in_path: PathBuf,
    /// 派生的输出路径
    pub out_path: PathBuf,
}

/// 单文件处理结果（用于完成汇总）
#[derive(Debug)]
pub struct FileOutcome {
    /// 输入文件名
    pub file_name: String,
    /// 检测到的峰值（dB）
    pub max_volume: f64,
    /// 施加的增益（dB）
    pub gain_db: f64,
    /// 写出的文件路径
    pub out_path: PathBuf,
}

/// 派生输出路径：output_dir/{stem}-1.{extension}
///
/// stem后缀保证派生名永不等于输入名，输入文件不会被覆盖
pub fn derive_out_path(output_dir: &Path, format: &FormatConfig, in_path: &Path) -> PathBuf {
    let stem = utils::extract_file_stem_string(in_path);
    output_dir.join(format!("{stem}-1.{}", format.extension))
}

/// 从运行计划构建单文件任务
pub fn build_task(plan: &RunPlan, in_path: &Path) -> FileTask {
    FileTask {
        in_path: in_path.to_path_buf(),
        out_path: derive_out_path(&plan.output_dir, &plan.format, in_path),
    }
}

/// 处理单个文件：音量检测 + 增益编码
pub fn process_file(
    task: &FileTask,
    format: &FormatConfig,
    verbose: bool,
) -> NormalizeResult<FileOutcome> {
    // 第一阶段：volumedetect测量峰值
    let detect_output = ffmpeg::call_ffmpeg(&ffmpeg::detect_args(&task.in_path))?;
    let max_volume = ffmpeg::parse_max_volume(&detect_output).ok_or_else(|| {
        NormalizeError::ToolExecutionError(
            "输出中未找到max_volume / max_volume not found in output".to_string(),
        )
    })?;
    // volumedetect固定报告一位小数，按同样精度回显
    println!("    Max volume: {max_volume:.1} dB");

    let gain_db = ffmpeg::target_gain_db(max_volume);
    if verbose {
        println!("    [INFO] 目标增益 / Target gain: {gain_db:.1} dB");
        println!("    [INFO] 输出 / Output: {}", task.out_path.display());
    }

    // 第二阶段：volume滤镜施加增益并编码
    println!("    Encoding...\n");
    let encode_args = ffmpeg::encode_args(
        &task.in_path,
        &task.out_path,
        gain_db,
        &format.encoder,
        format.bitrate.as_deref(),
    );
    ffmpeg::call_ffmpeg(&encode_args)?;

    Ok(FileOutcome {
        file_name: utils::extract_filename_lossy(&task.in_path),
        max_volume,
        gain_db,
        out_path: task.out_path.clone(),
    })
}
