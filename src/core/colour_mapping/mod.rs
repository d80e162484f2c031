pub mod adjust;
pub mod colorize;
pub mod escape_colour_map;
pub mod palette;
