//! MacinMeter VolNorm Tool - 主程序入口
//!
//! 纯流程控制器，负责协调各个工具模块完成音量归一化任务。

use macinmeter_volnorm_tool::{
    error::{ErrorCategory, NormalizeError, NormalizeResult},
    ffmpeg,
    tools::{self, AppConfig, FileOutcome, RunPlan},
};
use std::process;

/// 错误退出码定义
mod exit_codes {
    /// 配置错误（输出目录不可用）
    pub const CONFIG_ERROR: i32 = 2;
    /// 输入错误（文件或模式无效）
    pub const INPUT_ERROR: i32 = 3;
    /// FFmpeg未安装
    pub const TOOL_MISSING_ERROR: i32 = 4;
    /// FFmpeg启动失败
    pub const TOOL_LAUNCH_ERROR: i32 = 5;
    /// FFmpeg执行失败
    pub const TOOL_EXECUTION_ERROR: i32 = 6;
}

/// 获取错误建议文本
fn get_error_suggestion(error: &NormalizeError) -> &'static str {
    match error {
        NormalizeError::ConfigError(_) => {
            "检查输出目录参数是否正确，使用 --help 查看完整用法 / Check if the output directory argument is correct, use --help to see full usage"
        }
        NormalizeError::InputError(_) => {
            "检查文件路径或通配符模式是否正确，文件是否存在且可读 / Check if file paths or glob patterns are correct, and files exist and are readable"
        }
        NormalizeError::ToolMissingError => ffmpeg::FFMPEG_INSTALL_GUIDE,
        NormalizeError::ToolLaunchError(_) => {
            "请检查FFmpeg安装是否完整，或重新安装FFmpeg / Please check your FFmpeg installation is intact, or reinstall FFmpeg"
        }
        NormalizeError::ToolExecutionError(_) => {
            "检查编码器是否被当前FFmpeg构建支持（libfdk_aac需自编译启用），以及输入文件是否为有效音频 / Check if the encoder is supported by your FFmpeg build (libfdk_aac requires a custom build) and the input is valid audio"
        }
    }
}

/// 错误处理和建议
fn handle_error(error: NormalizeError) -> ! {
    eprintln!("\nERROR: {error}");
    eprintln!("[INFO] 建议 / Suggestion: {}", get_error_suggestion(&error));

    // 按错误分类映射退出码
    let exit_code = match ErrorCategory::from_error(&error) {
        ErrorCategory::Config => exit_codes::CONFIG_ERROR,
        ErrorCategory::Input => exit_codes::INPUT_ERROR,
        ErrorCategory::ToolMissing => exit_codes::TOOL_MISSING_ERROR,
        ErrorCategory::ToolLaunch => exit_codes::TOOL_LAUNCH_ERROR,
        ErrorCategory::ToolExecution => exit_codes::TOOL_EXECUTION_ERROR,
    };

    process::exit(exit_code);
}

/// 串行批量处理音频文件
///
/// 任一文件失败即中止整个批次，未完成的文件不再处理
fn process_batch_serial(config: &AppConfig, plan: &RunPlan) -> NormalizeResult<Vec<FileOutcome>> {
    let total = plan.files.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, in_path) in plan.files.iter().enumerate() {
        let file_name = tools::utils::extract_filename_lossy(in_path);

        if config.verbose {
            println!(
                "[PROCESSING] [{}/{}] 处理 / Processing: {file_name}",
                index + 1,
                total
            );
        }
        println!("> File {}: {file_name}", index + 1);

        let task = tools::build_task(plan, in_path);
        let outcome = tools::process_file(&task, &plan.format, config.verbose)?;

        if config.verbose {
            println!("   [OK] 处理成功 / Processing succeeded");
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// 应用程序主逻辑（便于测试和复用）
fn run() -> NormalizeResult<()> {
    // 1. 解析命令行参数
    let config = tools::parse_args();

    // 2. 显示启动信息
    tools::show_startup_info(&config);

    // 3. 解析预设与输入，生成运行计划
    let plan = tools::prepare_run(&config)?;
    tools::show_plan(&config, &plan);

    // 4. FFmpeg可用性预检
    ffmpeg::ensure_available()?;

    // 5. 串行批量处理
    let outcomes = process_batch_serial(&config, &plan)?;

    // 6. 显示完成信息与汇总
    tools::show_completion_info(&config, &outcomes);
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        handle_error(error);
    }
}
