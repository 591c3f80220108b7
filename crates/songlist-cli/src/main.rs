use anyhow::Result;
use songlist_core::{Config, SongStore};
use std::io;

mod commands;
mod console;
mod menu;
mod session;

use console::Console;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let store = SongStore::new(Config::default());
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    session::run(&mut console, &store)
}
