//! # mismatch-window
//!
//! 在两条等长序列上寻找错配数低于阈值的最长连续窗口，并将该窗口渲染为
//! 错配位置被占位符替换的字符串。
//!
//! - **窗口搜索**：穷举（O(N^3)）与滑动窗口（O(N)）两种引擎，结果完全一致
//! - **窗口渲染**：一致位置输出原字符，错配位置输出 `?`
//! - **输入加载**：命令行参数、标准输入两行、FASTA 文件
//!
//! ## 快速示例
//!
//! ```rust
//! use mismatch_window::render::render;
//! use mismatch_window::window::{find_best_window, Window};
//!
//! let a: Vec<char> = "xxxxxxxxxx".chars().collect();
//! let b: Vec<char> = "oxooxooxxo".chars().collect();
//!
//! let best = find_best_window(&a, &b, 3).unwrap();
//! assert_eq!(best, Window::new(4, 5));
//! assert_eq!(render(&a, &b, best).unwrap(), "x??xx");
//! ```
//!
//! ## 模块说明
//!
//! - [`window`] — 有界错配窗口搜索
//! - [`render`] — 窗口渲染与结果报告
//! - [`io`] — 序列输入（文本行 / FASTA）

pub mod io;
pub mod render;
pub mod window;
