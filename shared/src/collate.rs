//! 西班牙语排序
//!
//! 近似 `localeCompare(.., "es")`：先比较去掉重音、忽略大小写的主键
//! （`ñ` 排在 `n` 之后），相同时再按原始字符串比较，保证结果稳定。

use std::cmp::Ordering;

fn primary(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' | 'Á' | 'À' | 'Ä' | 'Â' => 'a',
        'é' | 'è' | 'ë' | 'ê' | 'É' | 'È' | 'Ë' | 'Ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' | 'Í' | 'Ì' | 'Ï' | 'Î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' | 'Ó' | 'Ò' | 'Ö' | 'Ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' | 'Ú' | 'Ù' | 'Ü' | 'Û' => 'u',
        'ç' | 'Ç' => 'c',
        other => other.to_lowercase().next().unwrap_or(other),
    }
}

/// 排序键：字母映射到基本形，`ñ` 映射为 `n` 后接一个大于所有字母的标记
fn sort_key(s: &str) -> Vec<(char, u8)> {
    s.chars()
        .map(|c| match c {
            'ñ' | 'Ñ' => ('n', 1),
            other => (primary(other), 0),
        })
        .collect()
}

pub fn compare(a: &str, b: &str) -> Ordering {
    sort_key(a).cmp(&sort_key(b)).then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_do_not_push_words_to_the_end() {
        let mut names = vec!["Traumatología", "Ópticos", "Cardiología", "oftalmología"];
        names.sort_by(|a, b| compare(a, b));
        assert_eq!(
            names,
            vec!["Cardiología", "oftalmología", "Ópticos", "Traumatología"]
        );
    }

    #[test]
    fn enie_sorts_after_n() {
        assert_eq!(compare("niño", "nina"), Ordering::Greater);
        assert_eq!(compare("ñu", "nz"), Ordering::Greater);
        assert_eq!(compare("ñu", "o"), Ordering::Less);
    }

    #[test]
    fn case_only_differences_are_ordered_deterministically() {
        assert_ne!(compare("Pediatría", "pediatría"), Ordering::Equal);
        assert_eq!(compare("Pediatría", "Pediatría"), Ordering::Equal);
    }
}
