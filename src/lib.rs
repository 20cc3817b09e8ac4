// Reusable library API — the CLI is one caller; a capture/display loop
// feeding OCR'd grids would be another.
pub mod board;
pub mod errors;
pub mod grid;
pub mod log;
pub mod solver;
pub mod trie;
pub mod word_list;
