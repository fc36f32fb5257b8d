//! A built trie and checker tree are shared read-only across threads.

use std::sync::Arc;
use std::thread;

use triespell::{Alphabet, Checker, Trie, default_typing_checker, typing_checker};

fn dictionary() -> Trie {
    let words = ["kala", "kalat", "kalastaa", "talo", "talot", "salko", "sakko", "lasta"];
    Trie::build(words, Alphabet::from_words(words)).unwrap()
}

const INPUTS: &[&str] = &[
    "kala", "klaa", "kaala", "tlao", "talo", "salok", "sako", "kalastaaa", "lsata", "xyz", "ka",
];

#[test]
fn scoped_threads_share_trie_and_checker() {
    let trie = dictionary();
    let checker = default_typing_checker();
    let expected: Vec<_> = INPUTS.iter().map(|w| checker.check(w, &trie)).collect();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| INPUTS.iter().map(|w| checker.check(w, &trie)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn arc_checker_across_spawned_threads() {
    let trie = Arc::new(dictionary());
    let checker: Arc<dyn Checker> = Arc::new(typing_checker(3));
    let expected: Vec<_> = INPUTS.iter().map(|w| checker.check(w, &trie)).collect();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let trie = Arc::clone(&trie);
            let checker = Arc::clone(&checker);
            thread::spawn(move || {
                // each thread walks the inputs from a different offset
                let mut results = vec![None; INPUTS.len()];
                for k in 0..INPUTS.len() {
                    let idx = (k + i) % INPUTS.len();
                    results[idx] = Some(checker.check(INPUTS[idx], &trie));
                }
                results.into_iter().map(Option::unwrap).collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn short_words_pass_the_typing_preset() {
    let trie = dictionary();
    let checker = default_typing_checker();
    assert!(!checker.is_misspelled("ka", &trie));
    assert_eq!(checker.check("klaa", &trie).suggestions(), ["kala"]);
}
