/*
word_lists.rs

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

//! Default word lists.

/// Words that the player must find. They are displayed in the word list.
pub const PRIMARY_WORDS: [&str; 28] = [
    "BITCOIN",
    "ETHEREUM",
    "BLOCKCHAIN",
    "CRYPTO",
    "MINING",
    "WALLET",
    "TOKEN",
    "DEFI",
    "NFT",
    "ALTCOIN",
    "EXCHANGE",
    "HODL",
    "STAKING",
    "DAPP",
    "HASH",
    "LEDGER",
    "PROTOCOL",
    "SMART",
    "CONTRACT",
    "GAS",
    "FORK",
    "NODE",
    "SEED",
    "CHAIN",
    "BLOCK",
    "AVALANCHE",
    "BULLISH",
    "BEARISH",
];

/// Bonus words. They are never displayed and are not required to complete the game.
pub const HIDDEN_WORDS: [&str; 4] = ["LEE", "SCOTT", "KEITH", "PACA"];
