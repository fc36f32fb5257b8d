// triespell-cli: shared utilities for the command-line checker.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use log::{LevelFilter, info, warn};
use triespell::{Alphabet, Checker, CheckerConfig, EditBudget, Trie, Verdict};

/// Word list file name looked up in the default search directories.
const WORDLIST_FILE: &str = "words.txt";

/// Environment variable naming the word list file.
pub const WORDLIST_ENV: &str = "TRIESPELL_WORDLIST";

/// Command-line options of `triespell-check`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub wordlist: Option<String>,
    pub alphabet: Option<String>,
    pub config: Option<String>,
    pub insertions: Option<u32>,
    pub deletions: Option<u32>,
    pub swaps: Option<u32>,
    pub substitutions: Option<u32>,
    pub min_length: Option<usize>,
    pub all: bool,
    pub json: bool,
    pub print_config: bool,
    /// 0 is quiet, 1 the default, each `-v` adds one.
    pub verbosity: u8,
    pub words: Vec<String>,
}

impl Options {
    /// Returns `true` if any of the per-operation budget flags was given.
    pub fn has_budget_flags(&self) -> bool {
        self.insertions.is_some()
            || self.deletions.is_some()
            || self.swaps.is_some()
            || self.substitutions.is_some()
    }

    /// Budget from the shorthand flags. Without any flag every operation
    /// gets one edit.
    pub fn budget(&self) -> EditBudget {
        if !self.has_budget_flags() {
            return EditBudget::uniform(1);
        }
        EditBudget::new(
            self.insertions.unwrap_or(0),
            self.deletions.unwrap_or(0),
            self.swaps.unwrap_or(0),
            self.substitutions.unwrap_or(0),
        )
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Parse command-line arguments (without the program name).
///
/// Arguments not starting with `-` are words to check. A lone `-`
/// is also treated as a word.
pub fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        verbosity: 1,
        ..Options::default()
    };
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => iter.next().cloned().ok_or_else(|| format!("{name} requires a value")),
            }
        };

        match flag {
            "-w" | "--wordlist" => options.wordlist = Some(value(flag)?),
            "-a" | "--alphabet" => options.alphabet = Some(value(flag)?),
            "-c" | "--config" => options.config = Some(value(flag)?),
            "--insertions" => options.insertions = Some(parse_number(flag, &value(flag)?)?),
            "--deletions" => options.deletions = Some(parse_number(flag, &value(flag)?)?),
            "--swaps" => options.swaps = Some(parse_number(flag, &value(flag)?)?),
            "--substitutions" => options.substitutions = Some(parse_number(flag, &value(flag)?)?),
            "--min-length" => options.min_length = Some(parse_number(flag, &value(flag)?)?),
            "--all" => options.all = true,
            "--json" => options.json = true,
            "--print-config" => options.print_config = true,
            "-q" | "--quiet" => options.verbosity = 0,
            "-h" | "--help" => {}
            _ if is_verbose_flag(flag) => {
                let count = if flag == "--verbose" { 1 } else { flag.len() - 1 };
                options.verbosity = options.verbosity.saturating_add(count as u8);
            }
            _ if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option {flag}"));
            }
            _ => options.words.push(arg.clone()),
        }
    }

    Ok(options)
}

fn is_verbose_flag(flag: &str) -> bool {
    flag == "--verbose" || (flag.len() > 1 && flag.starts_with('-') && flag[1..].chars().all(|c| c == 'v'))
}

fn parse_number<T: std::str::FromStr>(flag: &str, text: &str) -> Result<T, String> {
    text.parse()
        .map_err(|_| format!("invalid number for {flag}: {text:?}"))
}

/// Read a word list: one word per line, surrounding whitespace trimmed,
/// blank lines skipped.
///
/// Search order:
/// 1. `path` argument (if provided)
/// 2. `TRIESPELL_WORDLIST` environment variable
/// 3. `~/.triespell/words.txt`
/// 4. `words.txt` in the current working directory
pub fn load_wordlist(path: Option<&str>) -> Result<Vec<String>, String> {
    let candidates = build_search_paths(path);

    // An explicitly named file must exist; defaults are only candidates.
    let explicit = path.is_some() || std::env::var(WORDLIST_ENV).is_ok();
    for (i, candidate) in candidates.iter().enumerate() {
        if candidate.is_file() {
            let text = std::fs::read_to_string(candidate)
                .map_err(|e| format!("failed to read {}: {}", candidate.display(), e))?;
            let words = parse_wordlist(&text);
            info!("loaded {} words from {}", words.len(), candidate.display());
            return Ok(words);
        }
        if i == 0 && explicit {
            return Err(format!("word list {} not found", candidate.display()));
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn build_search_paths(path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = path {
        paths.push(PathBuf::from(p));
    } else if let Ok(env_path) = std::env::var(WORDLIST_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = std::env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(".triespell").join(WORDLIST_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDLIST_FILE));
    }

    paths
}

/// Split word list text into words.
pub fn parse_wordlist(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the dictionary trie. Without an explicit alphabet, the alphabet is
/// every character of the word list in first-appearance order.
pub fn load_trie(words: &[String], alphabet: Option<&str>) -> Result<Trie, String> {
    let alphabet = match alphabet {
        Some(chars) => Alphabet::new(chars),
        None => Alphabet::from_words(words),
    };
    Trie::build(words, alphabet).map_err(|e| format!("failed to build dictionary: {e}"))
}

/// Describe the checker tree selected by `options`.
///
/// `--config FILE` wins over the shorthand flags. Otherwise any word not in
/// the dictionary is flagged, with fuzzy suggestions within the budget,
/// and `--min-length` gates the whole check.
pub fn checker_config(options: &Options) -> Result<CheckerConfig, String> {
    if let Some(path) = &options.config {
        if options.has_budget_flags() || options.min_length.is_some() || options.all {
            warn!("--config given; ignoring budget, --min-length and --all flags");
        }
        let text = std::fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
        return CheckerConfig::from_json(&text).map_err(|e| format!("{path}: {e}"));
    }

    let budget = options.budget();
    let fuzzy = CheckerConfig::BoundedFuzzy {
        insertions: budget.insertions,
        deletions: budget.deletions,
        swaps: budget.swaps,
        substitutions: budget.substitutions,
        max_suggestions: options.all.then_some(usize::MAX),
    };
    let lookup = CheckerConfig::Union {
        checkers: vec![CheckerConfig::ExactMatch, fuzzy],
    };

    Ok(match options.min_length {
        Some(threshold) => CheckerConfig::Intersect {
            checkers: vec![CheckerConfig::LengthGate { threshold }, lookup],
        },
        None => lookup,
    })
}

/// Check `word` and write the result in the plain or JSON format.
pub fn report<W: Write>(
    out: &mut W,
    word: &str,
    checker: &dyn Checker,
    trie: &Trie,
    json: bool,
) -> io::Result<()> {
    let verdict = checker.check(word, trie);
    if json {
        writeln!(out, "{}", verdict_json(word, &verdict)?)
    } else {
        write_plain(out, word, &verdict)
    }
}

fn verdict_json(word: &str, verdict: &Verdict) -> io::Result<String> {
    let mut value = serde_json::to_value(verdict)?;
    if let serde_json::Value::Object(map) = &mut value {
        map.insert("word".to_string(), word.into());
    }
    Ok(value.to_string())
}

fn write_plain<W: Write>(out: &mut W, word: &str, verdict: &Verdict) -> io::Result<()> {
    if !verdict.is_misspelled() {
        return writeln!(out, "{word} (correct)");
    }
    if verdict.suggestions().is_empty() {
        return writeln!(out, "{word}: (no suggestions)");
    }
    writeln!(out, "{word}:")?;
    for s in verdict.suggestions() {
        writeln!(out, "  {s}")?;
    }
    Ok(())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
