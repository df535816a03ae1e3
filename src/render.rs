//! 将窗口渲染为字符串，错配位置替换为占位符。

use serde::Serialize;

use crate::window::{check_pair, checked_range, mismatch_count, Window, WindowError};

/// 默认的错配占位符
pub const PLACEHOLDER: char = '?';

/// 使用默认占位符 `?` 渲染窗口
pub fn render(a: &[char], b: &[char], window: Window) -> Result<String, WindowError> {
    render_with(a, b, window, PLACEHOLDER)
}

/// 逐位输出 `a[i]`（两序列一致时）或 `placeholder`（不一致时），
/// 输出长度恰为 `window.length`。
pub fn render_with(a: &[char], b: &[char], window: Window, placeholder: char) -> Result<String, WindowError> {
    check_pair(a, b)?;
    let range = checked_range(window, a.len())?;
    Ok(a[range.clone()]
        .iter()
        .zip(&b[range])
        .map(|(&x, &y)| if x == y { x } else { placeholder })
        .collect())
}

/// 一次搜索的完整结果，用于 JSON 输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowReport {
    pub start: usize,
    pub length: usize,
    pub mismatches: usize,
    pub rendered: String,
}

impl WindowReport {
    pub fn build(a: &[char], b: &[char], window: Window, placeholder: char) -> Result<Self, WindowError> {
        Ok(Self {
            start: window.start,
            length: window.length,
            mismatches: mismatch_count(a, b, window)?,
            rendered: render_with(a, b, window, placeholder)?,
        })
    }
}
