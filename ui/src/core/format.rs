//! Formatting helpers for presenting stats.

/// Group digits in threes with a narrow no-break space: `12345` → `"12 345"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202F}');
        }
        out.push(ch);
    }
    out
}

pub fn format_rank(rank: usize) -> String {
    format!("{rank}.")
}
