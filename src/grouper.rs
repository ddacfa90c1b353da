use std::collections::BTreeMap;
use std::fmt::Write;

/// Buckets words by character count. Words inside a bucket are in input order.
pub fn group_by_length<I>(words: I) -> BTreeMap<usize, Vec<String>>
    where I: IntoIterator, I::Item: Into<String> {
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for word in words {
        let word = word.into();
        groups.entry(word.chars().count()).or_default().push(word);
    }
    groups
}

pub fn sort_groups(groups: &mut BTreeMap<usize, Vec<String>>) {
    groups.values_mut().for_each(|words| words.sort_unstable());
}

/// One block per length, shortest first:
///
/// ```text
/// 4-letter words (2 words):
/// area, fire
/// ```
pub fn format_groups(groups: &BTreeMap<usize, Vec<String>>) -> String {
    let mut out = String::new();
    for (length, words) in groups {
        let mut words = words.clone();
        words.sort_unstable();
        // writing to a String cannot fail
        let _ = writeln!(out, "{}-letter words ({} words):", length, words.len());
        let _ = writeln!(out, "{}", words.join(", "));
        out.push('\n');
    }
    out
}
