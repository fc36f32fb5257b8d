// triespell-check: Flag misspelled words and suggest corrections.
//
// Reads words from stdin (one per line) unless words are given as
// arguments. Correct words are printed as-is, flagged words with their
// suggestions.
//
// Usage:
//   triespell-check [-w WORDLIST] [OPTIONS] [WORD...]

use std::io::{self, BufRead, Write};

use env_logger::Builder;

fn print_help() {
    println!("triespell-check: Flag misspelled words and suggest corrections.");
    println!();
    println!("Usage: triespell-check [-w WORDLIST] [OPTIONS] [WORD...]");
    println!();
    println!("If WORD arguments are given, checks each word.");
    println!("Otherwise reads words from stdin (one per line).");
    println!();
    println!("Options:");
    println!("  -w, --wordlist PATH      Dictionary file, one word per line");
    println!("                           (default: ${}, ~/.triespell/words.txt, ./words.txt)", triespell_cli::WORDLIST_ENV);
    println!("  -a, --alphabet CHARS     Dictionary alphabet (default: characters of the word list)");
    println!("  -c, --config FILE        JSON checker tree; overrides the flags below");
    println!("      --insertions N       Letters the typist may have left out");
    println!("      --deletions N        Extra letters the typist may have added");
    println!("      --swaps N            Adjacent letters the typist may have swapped");
    println!("      --substitutions N    Letters the typist may have mistyped");
    println!("                           (all four default to 1 when none is given)");
    println!("      --min-length N       Only check words of at least N characters");
    println!("      --all                Print every suggestion, not just the first");
    println!("      --json               Print one JSON verdict per line");
    println!("      --print-config       Print the checker tree as JSON and exit");
    println!("  -v, --verbose            More log output (repeatable)");
    println!("  -q, --quiet              Only log errors");
    println!("  -h, --help               Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if triespell_cli::wants_help(&args) {
        print_help();
        return;
    }

    let options = triespell_cli::parse_args(&args).unwrap_or_else(|e| triespell_cli::fatal(&e));

    Builder::new()
        .filter_level(options.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let config = triespell_cli::checker_config(&options).unwrap_or_else(|e| triespell_cli::fatal(&e));
    if options.print_config {
        let json = config.to_json().unwrap_or_else(|e| triespell_cli::fatal(&e.to_string()));
        println!("{json}");
        return;
    }

    let words = triespell_cli::load_wordlist(options.wordlist.as_deref())
        .unwrap_or_else(|e| triespell_cli::fatal(&e));
    let trie = triespell_cli::load_trie(&words, options.alphabet.as_deref())
        .unwrap_or_else(|e| triespell_cli::fatal(&e));
    let checker = config.build();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut check = |word: &str| {
        if let Err(e) = triespell_cli::report(&mut out, word, checker.as_ref(), &trie, options.json) {
            triespell_cli::fatal(&format!("failed to write output: {e}"));
        }
    };

    if options.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    log::error!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            check(word);
        }
    } else {
        for word in &options.words {
            check(word.as_str());
        }
    }

    if let Err(e) = out.flush() {
        triespell_cli::fatal(&format!("failed to write output: {e}"));
    }
}
