use clap::Parser;
use std::num::NonZeroUsize;
use std::process::ExitCode;
use std::time::Instant;

use scrabblegram::board::BoardLayout;
use scrabblegram::cipher;
use scrabblegram::errors::InputError;
use scrabblegram::letter_values::LetterValueTable;
use scrabblegram::render::{self, ResultPrinter};
use scrabblegram::score_index::WordScoreIndex;
use scrabblegram::search::{PuzzleSearch, SearchError};
use scrabblegram::word_list::WordList;

/// Scrabblegram cryptogram crossword generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// The hidden message (e.g., "hello"), or a code list such as "7,4,11" with --codes
    input: String,

    /// Treat INPUT as a comma-separated list of codes instead of plaintext
    #[arg(long)]
    codes: bool,

    /// Show bonus squares with ANSI colors
    #[arg(short, long)]
    color: bool,

    /// Also print each solution as a spreadsheet grid
    #[arg(short, long)]
    grid: bool,

    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.txt")
    )]
    dictionary: String,

    /// Path to the letter values file ("letter value" per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/letter_values.txt")
    )]
    letter_values: String,

    /// Codes are matched modulo this base
    #[arg(short, long, default_value_t = cipher::ALPHABET_SIZE, conflicts_with = "exact")]
    modulo: u16,

    /// Match codes exactly instead of modulo --modulo
    #[arg(long)]
    exact: bool,

    /// Maximum number of solutions to print, at least 1 (default: all)
    #[arg(short = 'n', long)]
    num_results: Option<NonZeroUsize>,
}

/// Entry point of the scrabblegram CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("SCRABBLEGRAM_DEBUG").is_ok();
    scrabblegram::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(search_err) = e.downcast_ref::<SearchError>() {
            if search_err.is_internal() {
                eprintln!("Internal error (likely bug): {search_err}");
            }
            eprintln!("Error: {}", search_err.display_detailed());
        } else if let Some(input_err) = e.downcast_ref::<InputError>() {
            eprintln!("Error: {}", input_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap and turn INPUT into target codes.
/// 2. Load letter values and dictionary, and build the word score index.
/// 3. Pull solutions from the search, printing each on stdout.
/// 4. Print timings and counts on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let targets = if cli.codes {
        cipher::parse_codes(&cli.input)?
    } else {
        cipher::plaintext_to_targets(&cli.input)?
    };
    if targets.is_empty() {
        return Err(SearchError::EmptyTargets.into());
    }
    let modulo = (!cli.exact).then_some(cli.modulo);

    // 1. Load data and build the index
    let t_load = Instant::now();
    let values = LetterValueTable::load_from_path(&cli.letter_values)?;
    let word_list = WordList::load_from_path(&cli.dictionary)?;
    let index = WordScoreIndex::build(values, &word_list.words, modulo)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Search, stopping after the requested number of solutions
    let layout = BoardLayout::standard();
    let search = PuzzleSearch::new(&index, layout);
    let printer = ResultPrinter::new(cli.color);
    let limit = cli.num_results.map_or(usize::MAX, NonZeroUsize::get);

    let t_search = Instant::now();
    let mut found = 0;
    for chain in search.solutions(&targets)?.take(limit) {
        found += 1;
        println!("{}", printer.print_chain(layout, &chain));
        if cli.grid {
            println!("{}\n", render::format_grid(&chain)?);
        }
    }
    let search_secs = t_search.elapsed().as_secs_f64();

    if found == 0 {
        eprintln!("No solution found");
    } else if found == limit {
        eprintln!("✓ Printed the {found} requested solutions");
    } else {
        eprintln!("✓ Search exhausted ({found} solutions)");
    }

    eprintln!(
        "Loaded {} words in {:.3}s; searched in {:.3}s ({} codes).",
        word_list.len(),
        load_secs,
        search_secs,
        targets.len()
    );

    Ok(())
}
