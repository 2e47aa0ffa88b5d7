use clap::{Parser, Subcommand};
use log::{debug, info};
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::process;
use std::time::Instant;
use wordle_knowledge::*;

/// Finds the words that are still possible given the feedback from a game of Wordle.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// The maximum number of matching words to print.
    #[clap(short = 'n', long, default_value_t = 20)]
    limit: usize,

    /// Checks the words in parallel.
    #[clap(long)]
    parallel: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the words by the given guesses, each written as `guess:feedback`, e.g.
    /// `crate:.g.y.`.
    Filter { guesses: Vec<String> },
    /// Enter guesses one at a time, and see the remaining words after each one.
    Interactive,
}

/// The guesses played so far, laid out as a board.
#[derive(Default)]
struct Board {
    word_grid: Vec<Vec<char>>,
    state_grid: Vec<Vec<LetterResult>>,
}

impl Board {
    fn push(&mut self, result: GuessResult) {
        self.word_grid.push(result.letters());
        self.state_grid.push(result.results);
    }
}

fn main() -> Result<(), WordleError> {
    env_logger::init();
    let start_time = Instant::now();
    let args = Args::parse();
    info!("Reading words from {}", args.words_file);

    let word_bank = WordBank::from_reader(io::BufReader::new(File::open(&args.words_file)?))?;
    println!("There are {} possible words.", word_bank.len());

    match &args.command {
        Command::Filter { guesses } => run_filter(guesses, &word_bank, &args),
        Command::Interactive => play_interactive(&word_bank, &args)?,
    }

    debug!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn parse_row(row: &str) -> Result<GuessResult, WordleError> {
    let (guess, pattern) = row
        .trim()
        .split_once(|c: char| c == ':' || c.is_whitespace())
        .unwrap_or((row, ""));
    GuessResult::parse(guess, pattern)
}

fn run_filter(rows: &[String], word_bank: &WordBank, args: &Args) {
    let mut board = Board::default();
    for row in rows {
        match parse_row(row) {
            Ok(result) => board.push(result),
            Err(error) => {
                eprintln!("Error: invalid guess \"{}\": {}", row, error);
                process::exit(1);
            }
        }
    }
    print_matches(&board, word_bank, args, true);
}

fn play_interactive(word_bank: &WordBank, args: &Args) -> Result<(), WordleError> {
    println!(
        "Enter each guess followed by its feedback, e.g. \"crate .g.y.\".\n\n\
         For the feedback, enter the correctness of each letter as:\n\n\
           * '.' = this letter is not in the word\n\
           * 'y' = this letter is in the word, but not in this location\n\
           * 'g' = this letter is in the word and in the right location.\n\n\
         Enter \"exit\" to quit."
    );

    let mut board = Board::default();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        let result = match parse_row(line) {
            Ok(result) => result,
            Err(error) => {
                println!("{}. Try again.", error);
                continue;
            }
        };
        let solved = result.is_solved();
        board.push(result);
        let num_matches = print_matches(&board, word_bank, args, false);
        if solved || num_matches <= 1 {
            break;
        }
    }
    Ok(())
}

/// Prints the words that match the board, returning how many there are.
fn print_matches(board: &Board, word_bank: &WordBank, args: &Args, show_knowledge: bool) -> usize {
    let knowledge = Knowledge::from_history(&board.word_grid, &board.state_grid);
    if show_knowledge {
        print!("{}", knowledge);
    }
    for letter in knowledge.contradictions() {
        println!(
            "The feedback for '{}' contradicts itself, so no word can match.",
            letter
        );
    }

    let words = if args.parallel {
        par_filter_words(&word_bank[..], &knowledge)
    } else {
        filter_words(&word_bank[..], &knowledge)
    };

    println!("{} matching words:", words.len());
    for word in words.iter().take(args.limit) {
        println!("\t{}", word);
    }
    if words.len() > args.limit {
        println!("\t...and {} more", words.len() - args.limit);
    }
    words.len()
}
