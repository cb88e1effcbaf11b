const KB: u64 = 1_000;
const MB: u64 = 1_000_000;
const GB: u64 = 1_000_000_000;

/// Upper-case copy of `input`. Only ASCII letters change.
pub fn str_toupper(input: &str) -> String {
    input.to_ascii_uppercase()
}

/// Human readable size using decimal units, e.g. `1.5 kB` or `500 Bytes`.
pub fn format_size_for_display(size: u64) -> String {
    if size >= GB {
        format!("{:.1} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.1} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.1} kB", size as f64 / KB as f64)
    } else {
        format!("{size} Bytes")
    }
}

/// Render the low three protection bits as `rwx` letters, `-` when unset.
pub fn prot2str(prot: u32) -> String {
    [(4, 'r'), (2, 'w'), (1, 'x')]
        .iter()
        .map(|&(bit, letter)| if prot & bit != 0 { letter } else { '-' })
        .collect()
}
