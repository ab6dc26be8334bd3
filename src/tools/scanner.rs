//! 输入解析模块
//!
//! 把命令行输入整理成可执行的运行计划：输出目录预备、预设与
//! 文件模式分离、通配符展开、路径规范化与顺序保持去重。

use super::cli::AppConfig;
use super::presets::{self, FormatConfig, InputToken};
use super::utils;
use crate::error::{self, NormalizeError, NormalizeResult};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// 解析完成的运行计划（构建后只读）
#[derive(Debug)]
pub struct RunPlan {
    /// 规范化后的输出目录
    pub output_dir: PathBuf,
    /// 最终生效的编码格式
    pub format: FormatConfig,
    /// 规范化、去重后的输入文件（保持首次出现顺序）
    pub files: Vec<PathBuf>,
}

/// 把CLI配置解析为运行计划
pub fn prepare_run(config: &AppConfig) -> NormalizeResult<RunPlan> {
    let output_dir = prepare_output_dir(&config.output_dir)?;

    // 预设分离：后出现的预设整体覆盖先前的选择（编码器、扩展名、码率一起换）
    let mut format = presets::default_format();
    let mut patterns: Vec<String> = Vec::new();
    for token in &config.inputs {
        match presets::classify_token(token) {
            InputToken::Preset(selected) => format = selected,
            InputToken::Pattern(pattern) => patterns.push(pattern),
        }
    }

    // 显式扩展名只覆盖扩展名，编码器与码率不受影响
    if let Some(extension) = &config.extension {
        format.extension = extension.clone();
    }

    let files = resolve_patterns(&patterns)?;

    Ok(RunPlan {
        output_dir,
        format,
        files,
    })
}

/// 输出目录预备：不存在则逐级创建，然后规范化为绝对路径
fn prepare_output_dir(dir: &str) -> NormalizeResult<PathBuf> {
    let path = Path::new(dir);
    if !path.is_dir() {
        std::fs::create_dir_all(path).map_err(|_| NormalizeError::ConfigError(dir.to_string()))?;
    }
    std::fs::canonicalize(path).map_err(|_| NormalizeError::ConfigError(dir.to_string()))
}

/// 模式展开与路径验证
///
/// 含通配符的条目相对工作目录展开，零匹配即报错；
/// 其余条目按字面路径验证。最后跨模式去重。
fn resolve_patterns(patterns: &[String]) -> NormalizeResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') {
            let entries = glob::glob(pattern).map_err(|_| {
                NormalizeError::InputError(format!(
                    "无效的通配符模式 / Invalid glob pattern: {pattern}"
                ))
            })?;

            let mut has_file = false;
            for entry in entries {
                let path = entry.map_err(|e| error::unreadable_input(e.path()))?;
                files.push(verify_and_canonicalize(&path)?);
                has_file = true;
            }

            if !has_file {
                return Err(error::empty_pattern(pattern));
            }
        } else {
            files.push(verify_and_canonicalize(Path::new(pattern))?);
        }
    }

    // 同一文件经多个模式到达时只处理一次，保持首次出现顺序
    let mut seen: HashSet<PathBuf> = HashSet::new();
    files.retain(|path| seen.insert(path.clone()));

    Ok(files)
}

/// 路径验证：规范化（解析符号链接）并确认可读
///
/// 以读取1字节作为可读性探针，零字节文件读出0字节同样算通过
fn verify_and_canonicalize(path: &Path) -> NormalizeResult<PathBuf> {
    let canonical = std::fs::canonicalize(path).map_err(|_| error::unreadable_input(path))?;

    let mut probe = [0u8; 1];
    File::open(&canonical)
        .and_then(|mut f| f.read(&mut probe))
        .map_err(|_| error::unreadable_input(&canonical))?;

    Ok(canonical)
}

/// 显示运行计划
pub fn show_plan(config: &AppConfig, plan: &RunPlan) {
    println!("📁 输出目录: {}", plan.output_dir.display());
    println!("🎵 待处理文件: {} 个", plan.files.len());

    if config.verbose {
        // 双语标签按显示宽度对齐（CJK字符占两列）
        let labels = [
            "编码器 / Encoder",
            "扩展名 / Extension",
            "码率 / Bitrate",
        ];
        let width = labels
            .iter()
            .map(|label| utils::display_width(label))
            .max()
            .unwrap_or(0);

        println!(
            "   {}: {}",
            utils::pad_label(labels[0], width),
            plan.format.encoder
        );
        println!(
            "   {}: {}",
            utils::pad_label(labels[1], width),
            plan.format.extension
        );
        println!(
            "   {}: {}",
            utils::pad_label(labels[2], width),
            plan.format.bitrate.as_deref().unwrap_or("-")
        );

        for (i, file) in plan.files.iter().enumerate() {
            println!("   {}. {}", i + 1, utils::extract_filename_lossy(file));
        }
    }
    println!();
}
