//! 有界错配窗口搜索
//!
//! 在两条等长序列上寻找错配数严格小于阈值的最长连续窗口。
//! 平局时保留最先枚举到的窗口（`start` 升序，再按 `length` 升序）。

pub mod exhaustive;
pub mod sliding;

use std::ops::Range;

use serde::Serialize;
use thiserror::Error;

/// 窗口搜索与渲染中可能出现的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("input sequences differ in length: first has {first} symbols, second has {second}")]
    InputLengthMismatch { first: usize, second: usize },

    #[error("mismatch threshold must be at least 1")]
    InvalidThreshold,

    #[error("window ends at {end} but the sequences are only {len} symbols long")]
    WindowOutOfBounds { end: usize, len: usize },
}

/// 半开区间 `[start, start + length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Window {
    pub start: usize,
    pub length: usize,
}

impl Window {
    pub const EMPTY: Window = Window { start: 0, length: 0 };

    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// 结束位置；溢出时饱和为 `usize::MAX`
    #[inline]
    pub fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// 扫描引擎选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// 逐个枚举所有 (start, length)，每个窗口重新计数，O(N^3)
    Exhaustive,
    /// 双指针 + 滚动错配计数，O(N)
    #[default]
    Sliding,
}

/// 检查两条序列可以逐位比较
pub fn check_pair<T>(a: &[T], b: &[T]) -> Result<(), WindowError> {
    if a.len() != b.len() {
        return Err(WindowError::InputLengthMismatch { first: a.len(), second: b.len() });
    }
    Ok(())
}

/// 校验窗口落在长度为 `len` 的序列内，返回对应的下标区间
pub fn checked_range(window: Window, len: usize) -> Result<Range<usize>, WindowError> {
    match window.start.checked_add(window.length) {
        Some(end) if end <= len => Ok(window.start..end),
        _ => Err(WindowError::WindowOutOfBounds { end: window.end(), len }),
    }
}

/// 统计窗口内的错配位置数
pub fn mismatch_count<T: PartialEq>(a: &[T], b: &[T], window: Window) -> Result<usize, WindowError> {
    check_pair(a, b)?;
    let range = checked_range(window, a.len())?;
    Ok(a[range.clone()].iter().zip(&b[range]).filter(|(x, y)| x != y).count())
}

/// 使用默认引擎（滑动窗口）搜索最佳窗口
pub fn find_best_window<T: PartialEq>(a: &[T], b: &[T], threshold: usize) -> Result<Window, WindowError> {
    find_best_window_with(a, b, threshold, Strategy::default())
}

/// 使用指定引擎搜索最佳窗口。
///
/// 输入形状在扫描开始前校验；空序列返回 [`Window::EMPTY`]。
pub fn find_best_window_with<T: PartialEq>(
    a: &[T],
    b: &[T],
    threshold: usize,
    strategy: Strategy,
) -> Result<Window, WindowError> {
    check_pair(a, b)?;
    if threshold == 0 {
        return Err(WindowError::InvalidThreshold);
    }
    let best = match strategy {
        Strategy::Exhaustive => exhaustive::scan(a, b, threshold),
        Strategy::Sliding => sliding::scan(a, b, threshold),
    };
    Ok(best)
}
