//! 统一错误处理框架
//!
//! 归一化流程的核心错误类型定义，覆盖配置、输入、外部工具三类失败来源。

use std::fmt;
use std::io;

/// 音量归一化相关的统一错误类型
#[derive(Debug)]
pub enum NormalizeError {
    /// 输出目录错误（无法创建或解析）
    ConfigError(String),

    /// 输入文件错误（不可读文件、空的通配符匹配）
    InputError(String),

    /// FFmpeg未安装或不在PATH中
    ToolMissingError,

    /// FFmpeg进程启动失败（非"未找到"类原因）
    ToolLaunchError(io::Error),

    /// FFmpeg以非零状态退出，或输出不符合预期
    ToolExecutionError(String),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::ConfigError(dir) => {
                write!(f, "无法创建输出目录 / Unable to create output directory: {dir}")
            }
            NormalizeError::InputError(msg) => write!(f, "{msg}"),
            NormalizeError::ToolMissingError => {
                write!(f, "FFmpeg未安装 / FFmpeg is not installed. Please install FFmpeg first.")
            }
            NormalizeError::ToolLaunchError(err) => {
                write!(f, "无法启动FFmpeg / Failed to start FFmpeg: {err}")
            }
            NormalizeError::ToolExecutionError(msg) => {
                write!(f, "FFmpeg异常退出 / FFmpeg exited abnormally: {msg}")
            }
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NormalizeError::ToolLaunchError(err) => Some(err),
            _ => None,
        }
    }
}

/// 归一化操作的标准Result类型
pub type NormalizeResult<T> = Result<T, NormalizeError>;

// ==================== 错误构造Helper函数 ====================
// 统一错误消息的双语格式，避免构造处各写各的

/// 输入文件无法打开（路径来自字面参数或通配符展开结果）
#[inline]
pub fn unreadable_input(path: &std::path::Path) -> NormalizeError {
    NormalizeError::InputError(format!(
        "无法打开文件 / Failed to open file: {}",
        path.display()
    ))
}

/// 通配符模式没有匹配到任何文件
#[inline]
pub fn empty_pattern(pattern: &str) -> NormalizeError {
    NormalizeError::InputError(format!(
        "未找到匹配文件 / No files found for pattern: {pattern}"
    ))
}

/// 进程spawn失败的分流：NotFound归为工具缺失，其余归为启动失败
#[inline]
pub fn spawn_error(err: io::Error) -> NormalizeError {
    if err.kind() == io::ErrorKind::NotFound {
        NormalizeError::ToolMissingError
    } else {
        NormalizeError::ToolLaunchError(err)
    }
}

// ==================== 错误分类系统 ====================
// 用于退出码映射和失败输出中的类别展示

/// 错误类别枚举
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ErrorCategory {
    /// 输出目录配置错误
    Config,
    /// 输入文件/模式错误
    Input,
    /// 外部工具缺失
    ToolMissing,
    /// 外部工具启动失败
    ToolLaunch,
    /// 外部工具执行失败
    ToolExecution,
}

impl ErrorCategory {
    /// 从NormalizeError提取错误类别
    pub fn from_error(e: &NormalizeError) -> Self {
        match e {
            NormalizeError::ConfigError(_) => Self::Config,
            NormalizeError::InputError(_) => Self::Input,
            NormalizeError::ToolMissingError => Self::ToolMissing,
            NormalizeError::ToolLaunchError(_) => Self::ToolLaunch,
            NormalizeError::ToolExecutionError(_) => Self::ToolExecution,
        }
    }

    /// 获取错误类别的显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Config => "配置错误",
            Self::Input => "输入错误",
            Self::ToolMissing => "工具缺失",
            Self::ToolLaunch => "启动错误",
            Self::ToolExecution => "执行错误",
        }
    }
}
