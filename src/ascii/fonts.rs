// src/ascii/fonts.rs

//! Glyph tables.
//!
//! Five of the fonts share one 5-row bitmap alphabet and differ only in how
//! a set cell is inked. `calvinS` is drawn by hand with box-drawing
//! characters and is three lines tall.

/// 5-row bitmaps; `#` is a set cell. Rows of a glyph all have the same width.
pub(super) const BITMAPS: &[(char, [&str; 5])] = &[
    ('a', [" ### ", "#   #", "#####", "#   #", "#   #"]),
    ('b', ["#### ", "#   #", "#### ", "#   #", "#### "]),
    ('c', [" ####", "#    ", "#    ", "#    ", " ####"]),
    ('d', ["#### ", "#   #", "#   #", "#   #", "#### "]),
    ('e', ["#####", "#    ", "#### ", "#    ", "#####"]),
    ('f', ["#####", "#    ", "#### ", "#    ", "#    "]),
    ('g', [" ####", "#    ", "#  ##", "#   #", " ### "]),
    ('h', ["#   #", "#   #", "#####", "#   #", "#   #"]),
    ('i', ["###", " # ", " # ", " # ", "###"]),
    ('j', ["  ###", "   # ", "   # ", "#  # ", " ##  "]),
    ('k', ["#   #", "#  # ", "###  ", "#  # ", "#   #"]),
    ('l', ["#    ", "#    ", "#    ", "#    ", "#####"]),
    ('m', ["#   #", "## ##", "# # #", "#   #", "#   #"]),
    ('n', ["#   #", "##  #", "# # #", "#  ##", "#   #"]),
    ('o', [" ### ", "#   #", "#   #", "#   #", " ### "]),
    ('p', ["#### ", "#   #", "#### ", "#    ", "#    "]),
    ('q', [" ### ", "#   #", "# # #", "#  # ", " ## #"]),
    ('r', ["#### ", "#   #", "#### ", "#  # ", "#   #"]),
    ('s', [" ####", "#    ", " ### ", "    #", "#### "]),
    ('t', ["#####", "  #  ", "  #  ", "  #  ", "  #  "]),
    ('u', ["#   #", "#   #", "#   #", "#   #", " ### "]),
    ('v', ["#   #", "#   #", "#   #", " # # ", "  #  "]),
    ('w', ["#   #", "#   #", "# # #", "## ##", "#   #"]),
    ('x', ["#   #", " # # ", "  #  ", " # # ", "#   #"]),
    ('y', ["#   #", " # # ", "  #  ", "  #  ", "  #  "]),
    ('z', ["#####", "   # ", "  #  ", " #   ", "#####"]),
    ('0', [" ### ", "#  ##", "# # #", "##  #", " ### "]),
    ('1', [" # ", "## ", " # ", " # ", "###"]),
    ('2', [" ### ", "#   #", "  ## ", " #   ", "#####"]),
    ('3', ["#### ", "    #", " ### ", "    #", "#### "]),
    ('4', ["#  # ", "#  # ", "#####", "   # ", "   # "]),
    ('5', ["#####", "#    ", "#### ", "    #", "#### "]),
    ('6', [" ### ", "#    ", "#### ", "#   #", " ### "]),
    ('7', ["#####", "   # ", "  #  ", " #   ", "#    "]),
    ('8', [" ### ", "#   #", " ### ", "#   #", " ### "]),
    ('9', [" ### ", "#   #", " ####", "    #", " ### "]),
    (' ', ["   ", "   ", "   ", "   ", "   "]),
    ('!', ["#", "#", "#", " ", "#"]),
    ('?', [" ### ", "#   #", "  ## ", "     ", "  #  "]),
    ('.', [" ", " ", " ", " ", "#"]),
    (',', ["  ", "  ", "  ", " #", "# "]),
    ('-', ["    ", "    ", "####", "    ", "    "]),
    ('_', ["    ", "    ", "    ", "    ", "####"]),
    (':', [" ", "#", " ", "#", " "]),
    ('@', [" ### ", "# ###", "# # #", "# ###", " ##  "]),
];

/// Drawn for characters missing from the bitmap table.
pub(super) const BITMAP_DEFAULT: [&str; 5] = ["#####", "#   #", "#   #", "#   #", "#####"];

/// Hand-drawn three-line box font.
pub(super) const CALVIN_S: &[(char, [&str; 3])] = &[
    ('a', ["╔═╗", "╠═╣", "╩ ╩"]),
    ('b', ["╔╗ ", "╠╩╗", "╚═╝"]),
    ('c', ["╔═╗", "║  ", "╚═╝"]),
    ('d', ["╔╦╗", " ║║", "═╩╝"]),
    ('e', ["╔═╗", "║╣ ", "╚═╝"]),
    ('f', ["╔═╗", "╠╣ ", "╚  "]),
    ('g', ["╔═╗", "║ ╦", "╚═╝"]),
    ('h', ["╦ ╦", "╠═╣", "╩ ╩"]),
    ('i', ["╦", "║", "╩"]),
    ('j', [" ╦", " ║", "╚╝"]),
    ('k', ["╦╔═", "╠╩╗", "╩ ╩"]),
    ('l', ["╦  ", "║  ", "╩═╝"]),
    ('m', ["╔╦╗", "║║║", "╩ ╩"]),
    ('n', ["╔╗╔", "║║║", "╝╚╝"]),
    ('o', ["╔═╗", "║ ║", "╚═╝"]),
    ('p', ["╔═╗", "╠═╝", "╩  "]),
    ('q', ["╔═╗ ", "║═╬╗", "╚═╝╚"]),
    ('r', ["╦═╗", "╠╦╝", "╩╚═"]),
    ('s', ["╔═╗", "╚═╗", "╚═╝"]),
    ('t', ["╔╦╗", " ║ ", " ╩ "]),
    ('u', ["╦ ╦", "║ ║", "╚═╝"]),
    ('v', ["╦  ╦", "╚╗╔╝", " ╚╝ "]),
    ('w', ["╦ ╦", "║║║", "╚╩╝"]),
    ('x', ["═╗ ╦", "╔╩╦╝", "╩ ╚═"]),
    ('y', ["╦ ╦", "╚╦╝", " ╩ "]),
    ('z', ["╔═╗", "╔═╝", "╚═╝"]),
    ('0', ["╔═╗", "║║║", "╚═╝"]),
    ('1', ["╔╗", " ║", " ╩"]),
    ('2', ["═╗", "╔╝", "╚═"]),
    ('3', ["══╗", " ═╣", "══╝"]),
    ('4', ["╦ ╦", "╚═╣", "  ╩"]),
    ('5', ["╔══", "╚═╗", "══╝"]),
    ('6', ["╔═╗", "╠═╗", "╚═╝"]),
    ('7', ["══╗", "  ║", "  ╩"]),
    ('8', ["╔═╗", "╠═╣", "╚═╝"]),
    ('9', ["╔═╗", "╚═╣", "══╝"]),
    (' ', ["  ", "  ", "  "]),
    ('!', ["║", "║", "o"]),
    ('?', ["╔═╗", " ╔╝", " o "]),
    ('.', [" ", " ", "o"]),
    ('-', ["   ", "───", "   "]),
];

pub(super) const CALVIN_S_DEFAULT: [&str; 3] = ["┌─┐", "│ │", "└─┘"];

pub(super) fn bitmap(c: char) -> &'static [&'static str; 5] {
    BITMAPS
        .iter()
        .find(|(k, _)| *k == c)
        .map(|(_, rows)| rows)
        .unwrap_or(&BITMAP_DEFAULT)
}

pub(super) fn calvin_s(c: char) -> &'static [&'static str; 3] {
    CALVIN_S
        .iter()
        .find(|(k, _)| *k == c)
        .map(|(_, rows)| rows)
        .unwrap_or(&CALVIN_S_DEFAULT)
}
