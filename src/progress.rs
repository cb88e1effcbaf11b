use std::io::{self, Write};

const BAR_WIDTH: usize = 50;

/// Which of the two progress renderings to produce.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgressStyle {
    /// One decimal place and a newline once 100% is reached. Negative
    /// progress draws nothing. Every update is flushed.
    Precise,
    /// Whole percent. With `flush` set the writer is flushed after every
    /// update and a newline follows 100%.
    Coarse { flush: bool },
}

/// Draw the precise bar on stdout.
pub fn print_progress(progress: f64) {
    let stdout = io::stdout();
    let _ = write_progress(stdout.lock(), progress, ProgressStyle::Precise);
}

/// Draw the coarse bar on stderr.
pub fn print_progress_real(progress: f64, flush: bool) {
    let stderr = io::stderr();
    let _ = write_progress(stderr.lock(), progress, ProgressStyle::Coarse { flush });
}

pub fn write_progress<W: Write>(mut w: W, progress: f64, style: ProgressStyle) -> io::Result<()> {
    let Some(rendered) = render_progress(progress, style) else {
        return Ok(());
    };
    w.write_all(rendered.as_bytes())?;
    match style {
        ProgressStyle::Precise | ProgressStyle::Coarse { flush: true } => w.flush(),
        ProgressStyle::Coarse { flush: false } => Ok(()),
    }
}

/// Render `\r[====    ] 42.0%`, clamping progress to `0..=100`.
///
/// Returns `None` when there is nothing to draw.
pub fn render_progress(progress: f64, style: ProgressStyle) -> Option<String> {
    if progress.is_nan() {
        return None;
    }
    if style == ProgressStyle::Precise && progress < 0.0 {
        return None;
    }
    let progress = progress.clamp(0.0, 100.0);

    let mut out = String::with_capacity(BAR_WIDTH + 12);
    out.push_str("\r[");
    for cell in 0..BAR_WIDTH {
        out.push(if (cell as f64) < progress / 2.0 { '=' } else { ' ' });
    }

    let done = progress == 100.0;
    match style {
        ProgressStyle::Precise => {
            out.push_str(&format!("] {progress:3.1}%"));
            if done {
                out.push('\n');
            }
        }
        ProgressStyle::Coarse { flush } => {
            out.push_str(&format!("] {progress:3.0}%"));
            if flush && done {
                out.push('\n');
            }
        }
    }
    Some(out)
}
