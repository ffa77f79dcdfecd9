//! packviz — packing result viewer. Runs the pack_explorer app.

use bevy::prelude::*;
use pack_explorer::{config, sdk::PackExplorerBuilder};

fn main() -> AppExit {
    let _ = dotenvy::dotenv();
    let config = config::viewer_config();

    PackExplorerBuilder::new()
        .config(config)
        .window_title("packviz")
        .build()
        .run()
}
