//! 常量和默认配置集中管理
//!
//! 将所有重要常量集中定义，避免"默认值漂移"和重复定义

/// 默认配置值
pub mod defaults {
    /// 默认输出目录
    ///
    /// 未指定 -d/--output-dir 时输出到当前工作目录
    pub const OUTPUT_DIR: &str = ".";

    /// 默认预设名称
    ///
    /// 参数中没有任何预设token时使用wav预设，
    /// 无损PCM输出在任何FFmpeg构建中都可用
    pub const PRESET: &str = "wav";
}
