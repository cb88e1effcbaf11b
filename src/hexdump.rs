use std::fmt::Write as _;
use std::io::{self, Write};

const LINE_WIDTH: usize = 16;
const GROUP_WIDTH: usize = 8;

/// Dump `data` to stderr. Write errors are ignored; this is a debug aid.
pub fn hexdump(data: &[u8]) {
    let stderr = io::stderr();
    let mut lock = stderr.lock();
    let _ = write_hexdump(&mut lock, data);
    let _ = lock.flush();
}

pub fn write_hexdump<W: Write>(mut w: W, data: &[u8]) -> io::Result<()> {
    w.write_all(render_hexdump(data).as_bytes())
}

/// Render the dump: 16 bytes per line in two groups of eight, followed by a
/// `|` column of printable characters.
pub fn render_hexdump(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() / LINE_WIDTH + 1) * 68);

    for line in data.chunks(LINE_WIDTH) {
        for (idx, byte) in line.iter().enumerate() {
            let _ = write!(out, "{byte:02x} ");
            if (idx + 1) % GROUP_WIDTH == 0 {
                out.push(' ');
            }
        }

        if line.len() == LINE_WIDTH {
            out.push_str("| ");
            push_printable(&mut out, line);
            out.push('\n');
        } else {
            let missing = LINE_WIDTH - line.len();
            let pad = missing * 3 + usize::from(line.len() < GROUP_WIDTH);
            out.extend(std::iter::repeat_n(' ', pad));
            out.push_str(" | ");
            push_printable(&mut out, line);
        }
    }

    out.push('\n');
    out
}

fn push_printable(out: &mut String, bytes: &[u8]) {
    out.extend(bytes.iter().map(|&b| {
        if (b' '..=b'~').contains(&b) {
            b as char
        } else {
            '.'
        }
    }));
}
