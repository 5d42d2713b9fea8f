use crate::report::SourceRange;

/// Split source text into physical lines without their terminators.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line).to_string()).collect()
}

/// Replace every reported comment span with spaces.
///
/// Columns are character offsets. The result has the same number of lines as
/// the input and every line keeps its character length, so ranges computed
/// against the raw text stay valid against the stripped text.
pub fn strip_comments(
    lines: &[String],
    comments: &[SourceRange],
) -> Vec<String> {
    let mut stripped: Vec<Vec<char>> = lines.iter().map(|line| line.chars().collect()).collect();

    for comment in comments {
        let start_line = comment.start_line as usize;
        let end_line = (comment.end_line as usize).max(start_line);
        if start_line >= stripped.len() {
            continue;
        }

        if start_line == end_line {
            blank(&mut stripped[start_line], comment.start_col as usize, comment.end_col as usize);
            continue;
        }

        blank(&mut stripped[start_line], comment.start_col as usize, usize::MAX);
        let last = end_line.min(stripped.len() - 1);
        for line in stripped.iter_mut().take(last).skip(start_line + 1) {
            blank(line, 0, usize::MAX);
        }
        if last == end_line {
            blank(&mut stripped[last], 0, comment.end_col as usize);
        } else {
            blank(&mut stripped[last], 0, usize::MAX);
        }
    }

    stripped.into_iter().map(|chars| chars.into_iter().collect()).collect()
}

/// Character column of the first `//` that is not inside a string literal.
pub fn line_comment_start(line: &str) -> Option<usize> {
    let chars: Vec<char> = line.chars().collect();
    let mut in_string = false;
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '"' => in_string = !in_string,
            '\\' if in_string => i += 1,
            '/' if !in_string && chars.get(i + 1) == Some(&'/') => return Some(i),
            _ => {}
        }
        i += 1;
    }
    None
}

fn blank(
    line: &mut [char],
    start: usize,
    end: usize,
) {
    let end = end.min(line.len());
    if start >= end {
        return;
    }
    for ch in &mut line[start..end] {
        *ch = ' ';
    }
}
