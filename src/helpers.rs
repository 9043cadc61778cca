/// Fast check if input contains a space, carriage return or line feed.
/// Any of them kills the URL machine, so a hit rejects the input outright.
pub fn has_space_or_newline(input: &[u8]) -> Option<usize> {
    memchr::memchr3(b' ', b'\r', b'\n', input)
}
