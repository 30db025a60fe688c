//! Line-ending detection and normalisation.
//!
//! Recipe text is written with LF line breaks. Steps convert the text they
//! add to the buffer's dominant ending and leave existing line breaks alone.

/// Line terminator style of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

/// Returns the line ending used by most lines of `content`.
///
/// Ties and buffers without line breaks resolve to [`LineEnding::Lf`] unless
/// at least one CRLF is present and CRLF is not outnumbered.
#[must_use]
pub fn dominant_line_ending(content: &str) -> LineEnding {
    let crlf = content.matches("\r\n").count();
    let lf = content.matches('\n').count().saturating_sub(crlf);

    if crlf > 0 && crlf >= lf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    }
}

/// Rewrites every line break in `input` to `line_ending`.
#[must_use]
pub fn normalise_line_endings(input: &str, line_ending: LineEnding) -> String {
    let unix = input.replace("\r\n", "\n");
    match line_ending {
        LineEnding::Lf => unix,
        LineEnding::CrLf => unix.replace('\n', "\r\n"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", LineEnding::Lf)]
    #[case::single_line("one", LineEnding::Lf)]
    #[case::unix("a\nb\nc\n", LineEnding::Lf)]
    #[case::windows("a\r\nb\r\n", LineEnding::CrLf)]
    #[case::mostly_windows("a\r\nb\r\nc\n", LineEnding::CrLf)]
    #[case::mostly_unix("a\nb\nc\r\n", LineEnding::Lf)]
    fn detects_dominant_ending(#[case] content: &str, #[case] expected: LineEnding) {
        assert_eq!(dominant_line_ending(content), expected);
    }

    #[rstest]
    #[case::to_lf("a\r\nb\nc", LineEnding::Lf, "a\nb\nc")]
    #[case::to_crlf("a\r\nb\nc", LineEnding::CrLf, "a\r\nb\r\nc")]
    fn normalises_mixed_endings(
        #[case] input: &str,
        #[case] line_ending: LineEnding,
        #[case] expected: &str,
    ) {
        assert_eq!(normalise_line_endings(input, line_ending), expected);
    }
}
