/*
word_set.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordgrid.

Wordgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Words to hide in the grid.

use log::debug;
use serde::{Deserialize, Serialize};

use super::word_lists;
use crate::config::GRID_SIZE;

/// Word category.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// The player must find the word to complete the game.
    Primary,
    /// Bonus word, never displayed.
    Hidden,
}

/// A word and its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry<'a> {
    pub word: &'a str,
    pub category: Category,
}

/// Word lists and grid dimension of a game.
///
/// Words are stored in uppercase. The lists do not change once the object is created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    /// Words to find.
    primary: Vec<String>,

    /// Bonus words.
    hidden: Vec<String>,

    /// Number of rows and columns of the grid.
    grid_size: usize,
}

impl Default for WordSet {
    fn default() -> Self {
        Self::new(word_lists::PRIMARY_WORDS, word_lists::HIDDEN_WORDS, GRID_SIZE)
    }
}

impl WordSet {
    /// Create a [`WordSet`] object.
    ///
    /// Words are converted to uppercase. Empty words, words with characters other than the
    /// letters `A` to `Z`, and duplicates inside a list are ignored.
    pub fn new<P, H>(primary: P, hidden: H, grid_size: usize) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        H: IntoIterator,
        H::Item: AsRef<str>,
    {
        Self {
            primary: Self::normalize(primary),
            hidden: Self::normalize(hidden),
            grid_size,
        }
    }

    fn normalize<I>(words: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut ret: Vec<String> = Vec::new();
        for word in words {
            let word: String = word.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() || ret.contains(&word) {
                continue;
            }
            if !word.chars().all(|c| c.is_ascii_uppercase()) {
                debug!("Ignoring {word:?}: only the letters A to Z are allowed");
                continue;
            }
            ret.push(word);
        }
        ret
    }

    /// Return the words to find.
    pub fn primary(&self) -> &[String] {
        &self.primary
    }

    /// Return the bonus words.
    pub fn hidden(&self) -> &[String] {
        &self.hidden
    }

    /// Return the words to find in alphabetical order, for the word list display.
    pub fn sorted_primary(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.primary.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Return the number of rows and columns of the grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Whether the word is in the primary list.
    pub fn is_primary(&self, word: &str) -> bool {
        self.primary.iter().any(|w| w == word)
    }

    /// Whether the word is in the hidden list.
    pub fn is_hidden(&self, word: &str) -> bool {
        self.hidden.iter().any(|w| w == word)
    }

    /// Return the category of the given word, or None if the word is in no list.
    ///
    /// A word that is in both lists is a primary word.
    pub fn category(&self, word: &str) -> Option<Category> {
        if self.is_primary(word) {
            Some(Category::Primary)
        } else if self.is_hidden(word) {
            Some(Category::Hidden)
        } else {
            None
        }
    }

    /// Iterate over all the words in placement order: hidden words first, then primary words.
    ///
    /// Hidden words get the first claim on the grid space.
    /// A word that is in both lists is only written once, as a hidden word.
    pub fn placement_order(&self) -> impl Iterator<Item = WordEntry<'_>> {
        self.hidden
            .iter()
            .map(|w| WordEntry {
                word: w,
                category: Category::Hidden,
            })
            .chain(
                self.primary
                    .iter()
                    .filter(|w| !self.is_hidden(w))
                    .map(|w| WordEntry {
                        word: w,
                        category: Category::Primary,
                    }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists() {
        let words: WordSet = WordSet::default();

        assert_eq!(words.primary().len(), 28);
        assert_eq!(words.hidden().len(), 4);
        assert_eq!(words.grid_size(), 15);
        assert_eq!(words.category("BITCOIN"), Some(Category::Primary));
        assert_eq!(words.category("PACA"), Some(Category::Hidden));
        assert_eq!(words.category("DOGE"), None);
    }

    #[test]
    fn words_are_normalized() {
        let words: WordSet = WordSet::new(["cat", " Dog ", "CAT", "", "T-REX", "ÉTÉ"], ["owl"], 5);

        assert_eq!(words.primary(), ["CAT", "DOG"]);
        assert_eq!(words.hidden(), ["OWL"]);
    }

    #[test]
    fn words_in_both_lists_are_placed_once() {
        let words: WordSet = WordSet::new(["CAT", "DOG"], ["CAT"], 5);
        let order: Vec<&str> = words.placement_order().map(|e| e.word).collect();

        assert_eq!(order, vec!["CAT", "DOG"]);
        assert!(words.is_primary("CAT") && words.is_hidden("CAT"));
        assert_eq!(words.category("CAT"), Some(Category::Primary));
    }

    #[test]
    fn hidden_words_come_first() {
        let words: WordSet = WordSet::new(["CAT", "DOG"], ["OWL"], 5);
        let order: Vec<(&str, Category)> = words
            .placement_order()
            .map(|e| (e.word, e.category))
            .collect();

        assert_eq!(
            order,
            vec![
                ("OWL", Category::Hidden),
                ("CAT", Category::Primary),
                ("DOG", Category::Primary)
            ]
        );
    }

    #[test]
    fn sorted_word_list() {
        let words: WordSet = WordSet::new(["NODE", "BLOCK", "HASH"], Vec::<&str>::new(), 5);
        assert_eq!(words.sorted_primary(), vec!["BLOCK", "HASH", "NODE"]);
    }
}
