// 字符串工具函数
//
// 无状态的匹配/校验函数，被 matcher、filter 等模块共享使用

use crate::error::{check_argument, Result};

/// 判断 `sentence` 中是否有某个词包含 `word`
///
/// 忽略大小写，进行子词匹配：
/// - `contains_subword("ABc def", "abc")` == true
/// - `contains_subword("ABc def", "DEF")` == true
/// - `contains_subword("ABc def", "AB")` == true
/// - `contains_subword("ABc def", "Ac")` == false
///
/// # Errors
/// `word` 去除首尾空白后为空，或包含多个词时返回 InvalidArgument
pub fn contains_subword(sentence: &str, word: &str) -> Result<bool> {
    check_single_word(word)?;
    let prepped_word = word.trim().to_lowercase();

    Ok(sentence
        .split_whitespace()
        .any(|token| token.to_lowercase().contains(&prepped_word)))
}

/// 校验 `word` 去除首尾空白后非空且为单个词
pub fn check_single_word(word: &str) -> Result<()> {
    let trimmed = word.trim();
    check_argument(!trimmed.is_empty(), "Word parameter cannot be empty")?;
    check_argument(
        trimmed.split_whitespace().count() == 1,
        "Word parameter should be a single word",
    )
}

/// 忽略大小写比较两个字符串
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// 判断 `s` 是否为非零无符号整数
///
/// 如 1, 2, 3, ..., `i32::MAX`。
/// 其余输入均返回 false：空串、"-1"、"0"、"+1"、" 2 "（未 trim）、"3 0"、"1 a"
pub fn is_non_zero_unsigned_integer(s: &str) -> bool {
    // "+1" 能被 parse 成功，需要单独排除
    if s.starts_with('+') {
        return false;
    }
    matches!(s.parse::<i32>(), Ok(value) if value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_contains_subword() {
        assert!(contains_subword("ABc def", "abc").unwrap());
        assert!(contains_subword("ABc def", "DEF").unwrap());
        assert!(contains_subword("ABc def", "AB").unwrap());
        assert!(!contains_subword("ABc def", "Ac").unwrap());
        // 词两侧空白会被去除
        assert!(contains_subword("aaa bBb ccc", "  bbb  ").unwrap());
        // 多余空白不影响
        assert!(contains_subword("  AAA   bBb   ccc  ", "ccc").unwrap());
    }

    #[test]
    fn test_contains_subword_does_not_span_words() {
        assert!(!contains_subword("abc def", "cd").unwrap());
        assert!(!contains_subword("", "abc").unwrap());
        assert!(!contains_subword("    ", "abc").unwrap());
    }

    #[test]
    fn test_contains_subword_invalid_word() {
        assert!(matches!(
            contains_subword("typical sentence", ""),
            Err(Error::InvalidArgument(msg)) if msg == "Word parameter cannot be empty"
        ));
        assert!(matches!(
            contains_subword("typical sentence", "   "),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            contains_subword("typical sentence", "aaa BBB"),
            Err(Error::InvalidArgument(msg)) if msg == "Word parameter should be a single word"
        ));
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("T05", "t05"));
        assert!(eq_ignore_case("", ""));
        assert!(!eq_ignore_case("T05", "T05x"));
    }

    #[test]
    fn test_is_non_zero_unsigned_integer() {
        for s in ["", "a", "aaa", "-1", "0", "+1", " 2 ", "3 0", "1 a", "2147483648"] {
            assert!(!is_non_zero_unsigned_integer(s), "{:?} 不应通过", s);
        }

        assert!(is_non_zero_unsigned_integer("1"));
        assert!(is_non_zero_unsigned_integer("42"));
        assert!(is_non_zero_unsigned_integer(&i32::MAX.to_string()));
    }
}
