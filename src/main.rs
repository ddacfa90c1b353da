use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use squares_solver::grouper::{format_groups, group_by_length, sort_groups};
use squares_solver::{Board, FileFormat, SearchConfig, SearchStatus, Searcher, Wordlist};

const DEFAULT_BOARD: &str = "IAKW/FRIT/UEAA/JLLG";

/// Find every dictionary word that can be traced on a letter grid.
#[derive(StructOpt, Debug)]
struct Cli {
    /// Dictionary file, one word per line
    #[structopt(parse(from_os_str), default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Board rows separated by '/', e.g. "IAKW/FRIT/UEAA/JLLG"
    #[structopt(short, long)]
    board: Option<String>,

    /// Read the board from a file, one row per line
    #[structopt(long, parse(from_os_str), conflicts_with = "board")]
    board_file: Option<PathBuf>,

    /// Search a random board of the given size, e.g. "5x5"
    #[structopt(long, conflicts_with_all = &["board", "board-file"])]
    random: Option<String>,

    /// Seed for --random
    #[structopt(long)]
    seed: Option<u64>,

    /// Shortest dictionary word kept
    #[structopt(long, default_value = "4")]
    min_len: usize,

    /// Longest dictionary word kept
    #[structopt(long, default_value = "11")]
    max_len: usize,

    /// Shortest path recorded as a found word (at least 4)
    #[structopt(long, default_value = "4")]
    min_word_len: usize,

    /// Column delimiter for dictionaries with extra columns
    #[structopt(long)]
    delimiter: Option<char>,

    /// Column holding the word when --delimiter is given
    #[structopt(long, default_value = "0")]
    word_column: usize,

    /// Search starting cells in parallel
    #[structopt(short, long)]
    multithreaded: bool,

    /// Stop starting new cells after this many milliseconds
    #[structopt(long)]
    time_limit_ms: Option<u64>,

    /// Print the groups as JSON
    #[structopt(long)]
    json: bool,

    /// Debug logging (also enabled by SQUARES_DEBUG)
    #[structopt(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::from_args();

    let debug_enabled = cli.debug || std::env::var("SQUARES_DEBUG").is_ok();
    squares_solver::log::init_logger(debug_enabled);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), Box<dyn Error>> {
    let board = read_board(&cli)?;
    log::info!("Board:\n{}", board);

    let format = match cli.delimiter {
        Some(delimiter) => FileFormat::builder()
            .delimiter(delimiter)
            .word_column(cli.word_column)
            .min_len(cli.min_len)
            .max_len(cli.max_len)
            .build(),
        None => FileFormat::builder().min_len(cli.min_len).max_len(cli.max_len).build(),
    };
    let wordlist = Wordlist::from_file(&cli.dictionary, &format)?;
    let trie = wordlist.to_trie();

    let config = match cli.time_limit_ms {
        Some(ms) => SearchConfig::builder()
            .min_word_len(cli.min_word_len)
            .time_limit(Duration::from_millis(ms))
            .build(),
        None => SearchConfig::builder().min_word_len(cli.min_word_len).build(),
    };
    let searcher = Searcher::new(&board, &trie, &config);
    let result = if cli.multithreaded {
        searcher.run_multithreaded()
    } else {
        searcher.run()
    };

    if let SearchStatus::TimedOut { elapsed } = result.status {
        log::warn!("Timed out after {:.3}s; some words may be missing", elapsed.as_secs_f64());
    }
    log::info!("Found {} words in {:.3}s", result.len(), result.elapsed.as_secs_f64());

    let mut groups = group_by_length(result.into_word_set());
    if cli.json {
        sort_groups(&mut groups);
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        print!("{}", format_groups(&groups));
    }
    Ok(())
}

fn read_board(cli: &Cli) -> Result<Board, Box<dyn Error>> {
    if let Some(size) = &cli.random {
        let (rows, cols) = parse_size(size)?;
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return Ok(Board::random(rows, cols, &mut rng));
    }
    if let Some(path) = &cli.board_file {
        return Ok(std::fs::read_to_string(path)?.parse()?);
    }
    Ok(cli.board.as_deref().unwrap_or(DEFAULT_BOARD).parse()?)
}

fn parse_size(size: &str) -> Result<(usize, usize), Box<dyn Error>> {
    let (rows, cols) = size
        .split_once(|c: char| c == 'x' || c == 'X')
        .ok_or_else(|| format!("board size {:?} is not of the form RxC", size))?;
    Ok((rows.trim().parse()?, cols.trim().parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_board_sizes() {
        assert_eq!(parse_size("5x4").unwrap(), (5, 4));
        assert_eq!(parse_size("3X3").unwrap(), (3, 3));
        assert!(parse_size("55").is_err());
        assert!(parse_size("ax3").is_err());
    }

    #[test]
    fn default_board_is_the_sample_grid() {
        let cli = Cli::from_iter(&["squares-solver"]);
        let board = read_board(&cli).unwrap();
        assert_eq!(board.letter_at(1, 0), Ok('f'));
        assert_eq!(cli.dictionary, PathBuf::from("dictionary.txt"));
    }

    #[test]
    fn seeded_random_boards_repeat() {
        let cli = Cli::from_iter(&["squares-solver", "--random", "3x5", "--seed", "9"]);
        let first = read_board(&cli).unwrap();
        let second = read_board(&cli).unwrap();
        assert_eq!(first, second);
        assert_eq!((first.rows(), first.cols()), (3, 5));
    }
}
