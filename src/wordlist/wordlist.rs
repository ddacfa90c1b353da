use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::{is_word_char, normalize};
use crate::errors::WordlistError;
use crate::wordlist::trie::Trie;

/// A filtered dictionary: lowercase, alphabetic-only words within a length range.
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    words: HashSet<String>,
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
    #[builder(default = 4)]
    min_len: usize,
    #[builder(default = 11)]
    max_len: usize,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    /// The word column of `line`, or `None` when the line is too short to have it.
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column),
        }
    }

    /// The normalized word if it passes the length and letter filters.
    fn accept(&self, word: &str) -> Option<String> {
        let word = normalize(word);
        let len = word.chars().count();
        if len >= self.min_len && len <= self.max_len && word.chars().all(is_word_char) {
            Some(word)
        } else {
            None
        }
    }
}

impl Wordlist {
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist, WordlistError> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);

        let file = File::open(path).map_err(|source| WordlistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Wordlist::from_reader(BufReader::new(file), format).map_err(|e| match e {
            WordlistError::Read { source, .. } => WordlistError::Io {
                path: path.to_path_buf(),
                source,
            },
            e => e,
        })
    }

    /// Reads one entry per line. Lines that are not valid UTF-8 or lack the word
    /// column are skipped and counted; any other read error stops the load.
    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Result<Wordlist, WordlistError> {
        let start = Instant::now();
        let mut words = HashSet::new();
        let mut count: usize = 0;
        let mut failures: usize = 0;

        for (i, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    debug!("Line #{} - {}", i + 1, e);
                    failures += 1;
                    continue;
                }
                Err(source) => return Err(WordlistError::Read { line: i + 1, source }),
            };
            if line.trim().is_empty() {
                continue;
            }
            count += 1;
            match format.parse_line(&line) {
                Some(word) => {
                    if let Some(word) = format.accept(word) {
                        words.insert(word);
                    }
                }
                None => {
                    debug!("Line #{} - no column {}", i + 1, format.word_column);
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            warn!("{} malformed lines skipped", failures);
        }
        info!("Kept {} of {} words in {:.3}s", words.len(), count, start.elapsed().as_secs_f64());
        Ok(Wordlist { words })
    }

    /// Builds a word list from in-memory words, with the same filtering as a file.
    pub fn from_words<I>(items: I, format: &FileFormat) -> Wordlist
        where I: IntoIterator, I::Item: AsRef<str> {
        let words = items.into_iter().filter_map(|x| format.accept(x.as_ref())).collect();
        Wordlist { words }
    }

    delegate! {
        to self.words {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn to_trie(&self) -> Trie {
        let start = Instant::now();
        let trie = Trie::from_words(&self.words);
        info!("Built trie of {} words in {:.3}s", trie.len(), start.elapsed().as_secs_f64());
        trie
    }
}
