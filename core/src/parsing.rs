/// One database line: a movie title followed by its cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord<'a> {
    pub title: &'a str,
    pub cast: Vec<&'a str>,
}

/// Splits a database line on `delimiter`. Returns `None` for blank lines.
/// Empty fields between consecutive delimiters are dropped.
pub fn parse_record_line(line: &str, delimiter: char) -> Option<MovieRecord<'_>> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split(delimiter).filter(|field| !field.is_empty());

    let title = fields.next()?;
    Some(MovieRecord {
        title,
        cast: fields.collect(),
    })
}

pub fn parse_records(text: &str, delimiter: char) -> Vec<MovieRecord<'_>> {
    text.lines()
        .filter_map(|line| parse_record_line(line, delimiter))
        .collect()
}

/// Movie titles end in a four-digit year in parentheses, e.g.
/// `"Alien (1979)"`. Everything else is an actor.
pub fn is_movie_title(name: &str) -> bool {
    let bytes = name.as_bytes();
    let Some(suffix) = bytes.len().checked_sub(6).map(|start| &bytes[start..]) else {
        return false;
    };

    suffix[0] == b'(' && suffix[1..5].iter().all(u8::is_ascii_digit) && suffix[5] == b')'
}
