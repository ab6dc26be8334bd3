//! 错误体系与流水线属性测试
//!
//! 验证错误消息的固定措辞、类别映射的完备性，以及输出命名在
//! 全部预设下都不会与输入相撞。

use macinmeter_volnorm_tool::error::{self, ErrorCategory, NormalizeError};
use macinmeter_volnorm_tool::ffmpeg::{parse_max_volume, target_gain_db};
use macinmeter_volnorm_tool::tools::{derive_out_path, lookup};
use std::collections::HashSet;
use std::error::Error;
use std::io;
use std::path::Path;

fn log(msg_zh: impl AsRef<str>, msg_en: impl AsRef<str>) {
    println!("{} / {}", msg_zh.as_ref(), msg_en.as_ref());
}

/// 每个错误变体各取一个代表样本
fn sample_errors() -> Vec<NormalizeError> {
    vec![
        NormalizeError::ConfigError("out".to_string()),
        error::unreadable_input(Path::new("ghost.wav")),
        NormalizeError::ToolMissingError,
        NormalizeError::ToolLaunchError(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        NormalizeError::ToolExecutionError("exit status: 1".to_string()),
    ]
}

// ========== 错误消息措辞 ==========

#[test]
fn test_error_messages_keep_fixed_phrases() {
    let expectations = [
        "Unable to create output directory",
        "Failed to open file",
        "FFmpeg is not installed. Please install FFmpeg first.",
        "Failed to start FFmpeg",
        "FFmpeg exited abnormally",
    ];

    log("错误消息措辞固定", "error messages keep their fixed phrases");
    for (err, phrase) in sample_errors().iter().zip(expectations) {
        assert!(err.to_string().contains(phrase), "{err} 应包含 {phrase}");
    }

    let empty = error::empty_pattern("*.wav");
    assert!(
        empty
            .to_string()
            .contains("No files found for pattern: *.wav")
    );
}

// ========== 错误分类 ==========

#[test]
fn test_each_variant_maps_to_distinct_category() {
    let categories: HashSet<ErrorCategory> = sample_errors()
        .iter()
        .map(ErrorCategory::from_error)
        .collect();
    assert_eq!(categories.len(), 5);

    let names: HashSet<&str> = categories.iter().map(|c| c.display_name()).collect();
    assert_eq!(names.len(), 5, "类别显示名不应重复");
}

#[test]
fn test_source_chain_only_for_launch_failures() {
    for err in sample_errors() {
        match &err {
            NormalizeError::ToolLaunchError(_) => {
                assert!(err.source().is_some(), "启动错误应保留底层io原因")
            }
            _ => assert!(err.source().is_none()),
        }
    }
}

#[test]
fn test_spawn_error_splits_not_found_from_other_failures() {
    let missing = error::spawn_error(io::Error::new(io::ErrorKind::NotFound, "no ffmpeg"));
    assert!(matches!(missing, NormalizeError::ToolMissingError));

    let denied = error::spawn_error(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
    assert!(matches!(denied, NormalizeError::ToolLaunchError(_)));
}

// ========== 纯函数链与命名属性 ==========

#[test]
fn test_transcript_to_gain_chain() {
    let transcript = "\
[Parsed_volumedetect_0 @ 0x1] mean_volume: -14.9 dB
[Parsed_volumedetect_0 @ 0x1] max_volume: -6.3 dB
";
    let max_volume = parse_max_volume(transcript).expect("应当提取到峰值");
    let gain = target_gain_db(max_volume);

    assert_eq!(gain, 6.3);
    assert_eq!(format!("volume={gain:.1}dB"), "volume=6.3dB");
}

#[test]
fn test_derived_names_never_collide_with_input() {
    log(
        "全部预设下输出名都不等于输入名",
        "derived names never equal the input under any preset",
    );
    for name in ["m4a", "aac", "mp3", "opus", "ogg", "wav", "flac"] {
        let format = lookup(name).expect("预设表应包含该名称");
        let input = Path::new("music").join(format!("track.{}", format.extension));
        let out = derive_out_path(Path::new("music"), &format, &input);

        assert_ne!(out, input, "{name} 预设下输出不应覆盖输入");
        assert!(
            out.to_string_lossy()
                .ends_with(&format!("-1.{}", format.extension))
        );
    }
}
