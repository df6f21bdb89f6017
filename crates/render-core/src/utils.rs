/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Encode text for a WinAnsi (Latin-1 compatible) Type1 font.
///
/// Typographic punctuation is folded to its ASCII form; anything else outside
/// Latin-1 becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => b'\'',
            '\u{201C}' | '\u{201D}' => b'"',
            '\u{2013}' | '\u{2014}' => b'-',
            '\u{2022}' => b'*',
            c if (c as u32) <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}
