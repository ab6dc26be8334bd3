//! 集成测试支撑工具
//!
//! 为各集成测试提供相互隔离的临时工作区，Drop时整体清理。
//! 目录名带进程号与序号，并行测试不会互相踩踏。

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

/// 单个测试独享的临时工作区
pub struct TempWorkspace {
    root: PathBuf,
}

impl TempWorkspace {
    pub fn new(tag: &str) -> Self {
        let seq = DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let root = std::env::temp_dir().join(format!(
            "volnorm-test-{tag}-{}-{seq}",
            std::process::id()
        ));
        create_dir_all(&root).expect("无法创建临时测试目录");
        Self { root }
    }

    #[allow(dead_code)]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 工作区内的路径（不创建文件）
    #[allow(dead_code)]
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// 写入文件并返回其路径，父目录按需创建
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            create_dir_all(parent).expect("无法创建测试文件父目录");
        }
        let mut file = File::create(&path).expect("无法创建测试文件");
        file.write_all(contents).expect("无法写入测试文件");
        path
    }
}

impl Drop for TempWorkspace {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
