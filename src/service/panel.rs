use std::sync::Mutex;

/// 页面上承载汇总结果的目标区域
///
/// 返回 false 表示目标区域不存在, 调用方记录日志后跳过, 不视为失败
pub trait SummaryPanel: Send + Sync {
    fn replace_content(&self, markup: &str) -> bool;
}

/// 内存面板, 记录每次写入的内容
#[derive(Debug, Default)]
pub struct MemoryPanel {
    history: Mutex<Vec<String>>,
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次写入的内容
    pub fn content(&self) -> Option<String> {
        self.history.lock().unwrap().last().cloned()
    }

    /// 累计写入次数
    pub fn write_count(&self) -> usize {
        self.history.lock().unwrap().len()
    }
}

impl SummaryPanel for MemoryPanel {
    fn replace_content(&self, markup: &str) -> bool {
        self.history.lock().unwrap().push(markup.to_string());
        true
    }
}
