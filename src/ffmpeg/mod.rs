//! FFmpeg子进程层
//!
//! 封装FFmpeg的定位、两阶段调用与输出解析。所有信号处理
//! （音量检测、编码、重采样）都委托给FFmpeg完成。

pub mod invoker;
pub mod volume;

pub use invoker::{
    FFMPEG_INSTALL_GUIDE, call_ffmpeg, call_tool, detect_args, encode_args, ensure_available,
    is_available,
};
pub use volume::{parse_max_volume, target_gain_db};
