use super::Window;

/// 双指针扫描，维护 `[start, end)` 内的错配计数。
///
/// 对每个 `start`，合法长度构成前缀（错配数随长度单调不减），
/// 所以只需把 `end` 推到最远的合法位置。`start` 升序且仅在严格更长时更新，
/// 选出的窗口与 [`super::exhaustive::scan`] 完全一致。
pub fn scan<T: PartialEq>(a: &[T], b: &[T], threshold: usize) -> Window {
    let n = a.len().min(b.len());
    let mut best = Window::EMPTY;
    let mut end = 0usize;
    let mut diffs = 0usize;

    for start in 0..n {
        // no later start can be strictly longer
        if best.length >= n - start {
            break;
        }
        if end < start {
            end = start;
            diffs = 0;
        }

        while end < n {
            let d = usize::from(a[end] != b[end]);
            if diffs + d >= threshold {
                break;
            }
            diffs += d;
            end += 1;
        }

        if end - start > best.length {
            best = Window { start, length: end - start };
        }

        if end > start && a[start] != b[start] {
            diffs -= 1;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::tests::chars;

    #[test]
    fn sliding_reference_fixture() {
        let best = scan(&chars("xxxxxxxxxx"), &chars("oxooxooxxo"), 3);
        assert_eq!(best, Window { start: 4, length: 5 });
    }

    #[test]
    fn sliding_restarts_after_blocked_position() {
        // with threshold 1 every mismatch splits the input
        let best = scan(&chars("aaXbbbXc"), &chars("aaYbbbZc"), 1);
        assert_eq!(best, Window { start: 3, length: 3 });
    }

    #[test]
    fn sliding_window_reaching_the_end() {
        let best = scan(&chars("ooooxxxx"), &chars("xxxxxxxx"), 2);
        assert_eq!(best, Window { start: 3, length: 5 });
    }
}
