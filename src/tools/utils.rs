//! 工具函数模块
//!
//! 提供文件路径处理、双语标签对齐等通用工具函数。

/// 文件路径处理工具函数
pub mod path {
    use std::path::Path;

    /// 提取文件名（返回String，用于进度显示）
    #[inline]
    pub fn extract_filename_lossy(path: &Path) -> String {
        path.file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    /// 提取文件stem（不含扩展名，返回String）
    #[inline]
    pub fn extract_file_stem_string(path: &Path) -> String {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("audio")
            .to_string()
    }
}

/// 双语标签对齐工具函数
pub mod table {
    use unicode_width::UnicodeWidthStr;

    /// 计算字符串的终端显示宽度（CJK字符占两列）
    #[inline]
    pub fn display_width(s: &str) -> usize {
        UnicodeWidthStr::width(s)
    }

    /// 将标签按显示宽度右补空格，保证中英混排标签列对齐
    #[inline]
    pub fn pad_label(label: &str, target_width: usize) -> String {
        let width = display_width(label);
        if width >= target_width {
            label.to_string()
        } else {
            format!("{label}{}", " ".repeat(target_width - width))
        }
    }
}

// 重新导出为平级函数，保持向后兼容
pub use path::{extract_file_stem_string, extract_filename_lossy};
pub use table::{display_width, pad_label};
