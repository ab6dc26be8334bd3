//! 工具模块集合
//!
//! 包含CLI、预设解析、文件解析与处理等工具模块，支持main.rs的流程控制。

pub mod cli;
pub mod constants;
pub mod presets;
pub mod processor;
pub mod scanner;
pub mod utils;

// 重新导出主要的公共接口
pub use cli::{AppConfig, parse_args, show_completion_info, show_startup_info};
pub use presets::{FormatConfig, InputToken, classify_token, default_format, lookup};
pub use processor::{FileOutcome, FileTask, build_task, derive_out_path, process_file};
pub use scanner::{RunPlan, prepare_run, show_plan};
pub use utils::{path, table};
