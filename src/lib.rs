pub mod deal;
pub mod demo;
pub mod render;
pub mod server;
pub mod tiles;

/// Canvas width of the generated image, in pixels.
pub const CANVAS_W: u32 = 1000;
/// Canvas height of the generated image, in pixels.
pub const CANVAS_H: u32 = 300;

/// Tiles in a starting hand. The dealt wall also yields one dora indicator,
/// so a single deal consumes 14 tiles of the 136-tile wall.
pub const HAND_SIZE: usize = 13;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
