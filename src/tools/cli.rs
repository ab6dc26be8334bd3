//! 命令行接口模块
//!
//! 负责命令行参数解析、配置管理和程序信息展示。

use clap::{Arg, Command};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};

use super::constants::defaults;
use super::processor::FileOutcome;

/// 应用程序版本信息
const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// 应用程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 输出目录（不存在时自动创建）
    pub output_dir: String,

    /// 强制输出扩展名（覆盖预设默认值）
    pub extension: Option<String>,

    /// 位置参数：预设名与文件模式的混合序列
    pub inputs: Vec<String>,

    /// 是否显示详细信息
    pub verbose: bool,
}

/// 解析命令行参数并创建配置
pub fn parse_args() -> AppConfig {
    let matches = Command::new("volnorm")
        .version(VERSION)
        .about(DESCRIPTION)
        .author("MacinMeter Team")
        .arg(
            Arg::new("INPUTS")
                .help(
                    "预设名或文件路径/通配符模式的混合序列 \
                     (预设: m4a, aac, mp3, opus, ogg, wav, flac, 可带码率后缀如mp3320)",
                )
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('d')
                .help("输出目录（不存在时自动创建）")
                .value_name("DIR")
                .default_value(defaults::OUTPUT_DIR),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .short('e')
                .help("覆盖输出文件的扩展名")
                .value_name("EXT"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("显示详细处理信息")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    AppConfig {
        output_dir: matches
            .get_one::<String>("output-dir")
            .cloned()
            .unwrap_or_else(|| defaults::OUTPUT_DIR.to_string()),
        extension: matches.get_one::<String>("extension").cloned(),
        inputs: matches
            .get_many::<String>("INPUTS")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        verbose: matches.get_flag("verbose"),
    }
}

/// 显示程序启动信息
pub fn show_startup_info(config: &AppConfig) {
    println!("🚀 MacinMeter VolNorm Tool v{VERSION} 启动");
    println!("📝 {DESCRIPTION}");
    if config.verbose {
        println!("🔧 输出目录: {}", config.output_dir);
    }
    println!();
}

/// 显示程序完成信息与处理汇总
pub fn show_completion_info(config: &AppConfig, outcomes: &[FileOutcome]) {
    if !config.verbose {
        return;
    }

    if !outcomes.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            "File / 文件",
            "Peak / 峰值 (dB)",
            "Gain / 增益 (dB)",
            "Output / 输出",
        ]);
        for outcome in outcomes {
            table.add_row(vec![
                Cell::new(&outcome.file_name),
                Cell::new(format!("{:.1}", outcome.max_volume))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{:+.1}", outcome.gain_db)).set_alignment(CellAlignment::Right),
                Cell::new(outcome.out_path.display().to_string()),
            ]);
        }
        println!("{table}");
    }

    println!("✅ 所有任务处理完成！");
}
