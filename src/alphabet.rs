pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

pub fn get_idx(a: char) -> Option<usize> {
    let a = a.to_ascii_lowercase();
    if a.is_ascii_lowercase() {
        Some((a as u8 - b'a') as usize)
    } else {
        None
    }
}

pub fn letter_of(idx: usize) -> char {
    ALPHABET[idx] as char
}

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}
