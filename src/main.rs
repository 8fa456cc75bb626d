//! Mahjong starting-hand image service.
//!
//! Deals a fresh random starting hand per request and serves it as a PNG
//! on /api/starting-hand, with a demo page on /.

use clap::Parser;

#[derive(Parser)]
#[command(about = "Serve randomized mahjong starting-hand images over HTTP")]
struct Args {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,
    /// Directory holding the tile image assets.
    #[arg(long, default_value = "public/pai-images")]
    assets: std::path::PathBuf,
}

#[tokio::main]
async fn main() {
    haipai::log();
    let args = Args::parse();
    haipai::server::run(&args.bind, args.assets).await.unwrap();
}
