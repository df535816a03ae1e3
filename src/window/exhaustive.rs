use super::Window;

/// 穷举扫描：`start` 升序，`length` 升序，每个候选窗口重新统计错配。
///
/// 仅当错配数 `< threshold` 且长度严格更长时才替换当前最佳，
/// 因此等长窗口中最早出现的胜出。调用方负责校验输入等长。
pub fn scan<T: PartialEq>(a: &[T], b: &[T], threshold: usize) -> Window {
    let n = a.len().min(b.len());
    let mut best = Window::EMPTY;

    for start in 0..n {
        for length in 0..=n - start {
            let span = start..start + length;
            let diffs = a[span.clone()].iter().zip(&b[span]).filter(|(x, y)| x != y).count();
            if diffs < threshold && length > best.length {
                best = Window { start, length };
            }
        }
    }

    best
}
