pub mod add;
pub mod complete;
pub mod display;

pub use add::add_song;
pub use complete::complete_song;
pub use display::display_songs;
