use anyhow::{Context, Result};
use songlist_core::{SongList, SongStore};
use std::io::{BufRead, Write};

use crate::commands;
use crate::console::{Console, PROMPT};
use crate::menu::{MenuChoice, MENU};

/// Startup banner with program name, version and authors.
pub fn banner() -> String {
    format!(
        "Song List {} - by {}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    )
}

/// Run one interactive session: load, loop over the menu, save on quit.
///
/// The song file is written only when the user quits. A malformed song file
/// ends the session before the menu is shown.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &SongStore) -> Result<()> {
    let songs_file = &store.config().songs_file;

    console.say(banner())?;

    let loaded = store
        .load()
        .with_context(|| format!("Failed to load songs from {}", songs_file.display()))?;
    let mut songs = if let Some(songs) = loaded {
        console.say(format!("{} songs loaded.", songs.len()))?;
        songs
    } else {
        console.say("No songs found. Starting with an empty list.")?;
        SongList::new()
    };

    loop {
        for line in MENU {
            console.say(line)?;
        }

        let choice = MenuChoice::parse(&console.ask(PROMPT)?);
        log::debug!("Menu choice: {:?}", choice);

        match choice {
            MenuChoice::Display => commands::display_songs(console, &mut songs)?,
            MenuChoice::Add => commands::add_song(console, &mut songs)?,
            MenuChoice::Complete => commands::complete_song(console, &mut songs)?,
            MenuChoice::Quit => {
                let saved = store
                    .save(&songs)
                    .with_context(|| format!("Failed to save songs to {}", songs_file.display()))?;
                console.say(format!("{} songs saved to {}", saved, songs_file.display()))?;
                console.say("Make some music!")?;
                return Ok(());
            }
            MenuChoice::Unknown => console.say("Invalid menu choice")?,
        }
    }
}
