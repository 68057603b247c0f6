//! Terminal layout configuration.
//!
//! All offsets are in terminal cells and derive from `MARGIN`.

/// Base spacing unit: a tile is `MARGIN * 2` columns wide and `MARGIN` rows tall.
pub const MARGIN: u16 = 4;

/// Help lines printed under the board.
pub const HELP_INFO: [&str; 2] = [
    "Enter: Restart the game.",
    "Esc:   Quit the game.",
];

/// Time suffix appended to banners and notifications.
pub const TIME_FORMAT: &str = " %H:%M:%S";
