use crate::error;

/// Convert every string of `seq` with `converter`.
///
/// The first error returned by `converter` is passed through unchanged and
/// no partial result is produced.
pub fn convert_string_vector<S, U, E, F>(seq: &[S], mut converter: F) -> Result<Vec<U>, E>
where
    S: AsRef<str>,
    F: FnMut(&str) -> Result<U, E>,
{
    seq.iter().map(|s| converter(s.as_ref())).collect()
}

/// Parse every string of `seq` as a base-10 number of type `N`.
///
/// Each string is read the way `strtol` reads it: leading whitespace is
/// skipped, an optional sign and as many digits as possible are taken, and
/// whatever follows is ignored, so `" 12"` and `"12abc"` both give 12. A
/// string with no leading number, or one out of range for `N`, is an error.
pub fn parse_all<N, S>(seq: &[S]) -> error::Result<Vec<N>>
where
    N: lexical::FromLexical,
    S: AsRef<str>,
{
    seq.iter()
        .enumerate()
        .map(|(index, s)| {
            let s = s.as_ref();
            parse_leading::<N>(s).map_err(|source| {
                tracing::debug!(index, value = s, %source, "cannot parse element");
                error::Error::Parse {
                    index,
                    value: s.to_string(),
                    source,
                }
            })
        })
        .collect()
}

// includes vertical tab, which `char::is_ascii_whitespace` leaves out
fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

fn parse_leading<N: lexical::FromLexical>(s: &str) -> Result<N, lexical::Error> {
    let trimmed = s.trim_start_matches(is_c_space);
    let skipped = s.len() - trimmed.len();
    match lexical::parse_partial::<N, _>(trimmed) {
        Ok((value, count)) if count > 0 => Ok(value),
        Ok(_) => Err(lexical::Error::Empty(skipped)),
        Err(err) => Err(err),
    }
}

/// Parse every string of `seq` as an `i32`.
pub fn vec_of_strings_to_vec_of_ints<S: AsRef<str>>(seq: &[S]) -> error::Result<Vec<i32>> {
    parse_all(seq)
}

/// Parse every string of `seq` as an `i64`.
pub fn vec_of_strings_to_vec_of_long_long_ints<S: AsRef<str>>(
    seq: &[S],
) -> error::Result<Vec<i64>> {
    parse_all(seq)
}
