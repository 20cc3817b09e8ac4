//! The word finder: a prefix-pruned depth-first search over the board graph.
//!
//! Every vertex is tried as a path origin. From the current vertex the
//! search extends the accumulated string into each unvisited neighbor, but
//! only descends when the trie still knows the extended string as a prefix
//! of some dictionary word — that prefix test is the sole pruning mechanism
//! and is what keeps the search tractable on a worst-case-exponential walk.
//!
//! The whole solve is single-threaded and purely CPU-bound: the board and
//! trie are read-only here, and the visited buffer plus accumulated string
//! are exclusively owned by the in-flight call chain. Recursion depth is
//! bounded by the vertex count (at most twice the cell count, for double
//! tiles), which is comfortably within stack limits.
//!
//! # Example
//!
//! ```
//! use tileword::board::Board;
//! use tileword::solver::{solve, DEFAULT_MIN_LEN};
//! use tileword::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("CAT");
//!
//! let grid = vec![
//!     vec!["C".to_string(), "A".to_string()],
//!     vec!["T".to_string(), "S".to_string()],
//! ];
//! let board = Board::from_grid(&grid)?;
//!
//! assert_eq!(solve(&board, &trie, DEFAULT_MIN_LEN), vec!["CAT"]);
//! # Ok::<(), tileword::errors::GridError>(())
//! ```

use crate::board::Board;
use crate::trie::Trie;
use std::collections::HashSet;

/// Words shorter than this are never reported.
pub const DEFAULT_MIN_LEN: usize = 3;

/// Finds every dictionary word reachable by walking adjacent tiles without
/// reusing a tile, with length at least `min_len`.
///
/// The returned list is deduplicated and ordered longest-first; equal-length
/// words are in lexicographic order, so output is deterministic.
#[must_use]
pub fn solve(board: &Board, trie: &Trie, min_len: usize) -> Vec<String> {
    let mut found: HashSet<String> = HashSet::new();
    let mut visited = vec![false; board.len()];
    let mut word = String::new();

    for start in 0..board.len() {
        word.clear();
        word.push(board.tiles[start].content);
        visited[start] = true;
        extend(board, trie, start, &mut word, &mut visited, min_len, &mut found);
        visited[start] = false;
    }
    debug_assert!(visited.iter().all(|&v| !v));

    log::debug!(
        "solve: {} distinct words from {} start vertices",
        found.len(),
        board.len()
    );

    let mut words: Vec<String> = found.into_iter().collect();
    // Longest first; lexicographic within a length, for reproducible output.
    words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words
}

/// One step of the backtracking search. `word` holds the letters of the
/// path so far; `visited` marks the vertices on it. Both are restored
/// before returning, so sibling branches see clean state.
fn extend(
    board: &Board,
    trie: &Trie,
    index: usize,
    word: &mut String,
    visited: &mut [bool],
    min_len: usize,
    found: &mut HashSet<String>,
) {
    if word.len() >= min_len && trie.contains(word) && !found.contains(word.as_str()) {
        found.insert(word.clone());
    }
    for &next in &board.tiles[index].neighbors {
        if visited[next] {
            continue;
        }
        word.push(board.tiles[next].content);
        if trie.node(word).is_some() {
            visited[next] = true;
            extend(board, trie, next, word, visited, min_len, found);
            visited[next] = false;
        }
        word.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for w in words {
            trie.add(w);
        }
        trie
    }

    #[test]
    fn test_min_len_excludes_short_words() {
        let board = Board::from_grid(&grid(&[&["C", "A"], &["T", "S"]])).unwrap();
        let trie = trie_of(&["CAT", "AT"]);

        let words = solve(&board, &trie, DEFAULT_MIN_LEN);
        assert_eq!(words, vec!["CAT"]);
    }

    #[test]
    fn test_min_len_override() {
        let board = Board::from_grid(&grid(&[&["C", "A"], &["T", "S"]])).unwrap();
        let trie = trie_of(&["CAT", "AT"]);

        let words = solve(&board, &trie, 2);
        assert_eq!(words, vec!["CAT", "AT"]);
    }

    #[test]
    fn test_empty_trie_yields_nothing() {
        let board = Board::from_grid(&grid(&[&["C", "A"], &["T", "S"]])).unwrap();
        let words = solve(&board, &Trie::new(), DEFAULT_MIN_LEN);
        assert!(words.is_empty());
    }

    #[test]
    fn test_empty_board_yields_nothing() {
        let board = Board::from_grid(&[]).unwrap();
        let trie = trie_of(&["CAT"]);
        assert!(solve(&board, &trie, DEFAULT_MIN_LEN).is_empty());
    }

    #[test]
    fn test_no_tile_reuse_within_a_path() {
        // "TOT" needs two T tiles; a single T next to an O must not find it.
        let board = Board::from_grid(&grid(&[&["T", "O"]])).unwrap();
        let trie = trie_of(&["TOT"]);
        assert!(solve(&board, &trie, DEFAULT_MIN_LEN).is_empty());

        // With a second T it is reachable.
        let board = Board::from_grid(&grid(&[&["T", "O", "T"]])).unwrap();
        assert_eq!(solve(&board, &trie, DEFAULT_MIN_LEN), vec!["TOT"]);
    }

    #[test]
    fn test_word_requires_adjacency() {
        // C and T are not adjacent (hole between them).
        let board = Board::from_grid(&grid(&[&["C", "", "T"], &["", "", "A"]])).unwrap();
        let trie = trie_of(&["CAT"]);
        assert!(solve(&board, &trie, DEFAULT_MIN_LEN).is_empty());
    }

    #[test]
    fn test_same_word_via_two_paths_reported_once() {
        // Two A tiles flank the C; "CAB" is reachable both ways.
        let board = Board::from_grid(&grid(&[&["A", "C", "A"], &["B", "B", "B"]])).unwrap();
        let trie = trie_of(&["CAB"]);
        assert_eq!(solve(&board, &trie, DEFAULT_MIN_LEN), vec!["CAB"]);
    }

    #[test]
    fn test_ordering_longest_first_then_lexicographic() {
        let board = Board::from_grid(&grid(&[&["S", "T", "A"], &["R", "E", "P"]])).unwrap();
        let trie = trie_of(&["REST", "PEST", "STEP", "SET", "TAP"]);

        let words = solve(&board, &trie, DEFAULT_MIN_LEN);
        assert_eq!(words, vec!["PEST", "REST", "STEP", "SET", "TAP"]);
    }

    #[test]
    fn test_results_are_sound() {
        let board =
            Board::from_grid(&grid(&[&["S", "T", "A"], &["R", "E", "P"], &["O", "N", "D"]]))
                .unwrap();
        let trie = trie_of(&["STERN", "PEAT", "DARN", "TONE", "ZEBRA", "AT"]);

        let words = solve(&board, &trie, DEFAULT_MIN_LEN);
        let mut seen = std::collections::HashSet::new();
        for w in &words {
            assert!(w.len() >= DEFAULT_MIN_LEN);
            assert!(trie.contains(w), "{} not in dictionary", w);
            assert!(seen.insert(w.clone()), "{} reported twice", w);
        }
        assert!(!words.contains(&"ZEBRA".to_string()));
        assert!(!words.contains(&"AT".to_string()));
    }
}
