//! 输入加载：命令行参数、标准输入两行、或 FASTA 文件的前两条记录。

pub mod fasta;

use anyhow::{anyhow, bail, Result};
use std::io::BufRead;

use self::fasta::FastaReader;

/// 待比较的两条序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    pub first: Vec<char>,
    pub second: Vec<char>,
}

impl SequencePair {
    pub fn from_strs(first: &str, second: &str) -> Self {
        Self {
            first: first.chars().collect(),
            second: second.chars().collect(),
        }
    }
}

/// 从文本流读取两行，只去掉行尾的 `\n` / `\r\n`
pub fn read_line_pair<R: BufRead>(mut reader: R) -> Result<SequencePair> {
    let mut lines = [String::new(), String::new()];
    for (i, line) in lines.iter_mut().enumerate() {
        let n = reader.read_line(line)?;
        if n == 0 {
            bail!("expected two input lines, got {}", i);
        }
        strip_line_ending(line);
    }
    Ok(SequencePair::from_strs(&lines[0], &lines[1]))
}

/// 读取 FASTA 的前两条记录；多余记录被忽略
pub fn read_fasta_pair<R: BufRead>(reader: R) -> Result<SequencePair> {
    let mut r = FastaReader::new(reader);
    let first = r
        .next_record()?
        .ok_or_else(|| anyhow!("FASTA input contains no sequences"))?;
    let second = r
        .next_record()?
        .ok_or_else(|| anyhow!("FASTA input contains only one sequence ('{}')", first.id))?;
    log::info!(
        "FASTA records: '{}' ({} symbols), '{}' ({} symbols)",
        first.id,
        first.seq.chars().count(),
        second.id,
        second.seq.chars().count()
    );
    for rec in [&first, &second] {
        if let Some(desc) = &rec.desc {
            log::debug!("FASTA record '{}': {}", rec.id, desc);
        }
    }
    if let Some(extra) = r.next_record()? {
        log::warn!("ignoring FASTA records after the second, starting at '{}'", extra.id);
    }
    Ok(SequencePair::from_strs(&first.seq, &second.seq))
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn line_pair_strips_only_line_endings() {
        let pair = read_line_pair(Cursor::new(" ab \r\nba\n")).unwrap();
        assert_eq!(pair, SequencePair::from_strs(" ab ", "ba"));
    }

    #[test]
    fn line_pair_without_trailing_newline() {
        let pair = read_line_pair(Cursor::new("aaa\naaa")).unwrap();
        assert_eq!(pair, SequencePair::from_strs("aaa", "aaa"));
    }

    #[test]
    fn line_pair_accepts_empty_lines() {
        let pair = read_line_pair(Cursor::new("\n\n")).unwrap();
        assert!(pair.first.is_empty() && pair.second.is_empty());
    }

    #[test]
    fn line_pair_requires_two_lines() {
        let err = read_line_pair(Cursor::new("only\n")).unwrap_err();
        assert!(err.to_string().contains("got 1"));
        assert!(read_line_pair(Cursor::new("")).is_err());
    }

    #[test]
    fn fasta_pair_takes_first_two_records() {
        let data = ">a\nxxxxx\nxxxxx\n>b\noxooxooxxo\n>c\nzzz\n";
        let pair = read_fasta_pair(Cursor::new(data)).unwrap();
        assert_eq!(pair, SequencePair::from_strs("xxxxxxxxxx", "oxooxooxxo"));
    }

    #[test]
    fn fasta_pair_needs_two_records() {
        let err = read_fasta_pair(Cursor::new(">a\nACGT\n")).unwrap_err();
        assert!(err.to_string().contains("only one sequence"));
        let err = read_fasta_pair(Cursor::new("")).unwrap_err();
        assert!(err.to_string().contains("no sequences"));
    }
}
