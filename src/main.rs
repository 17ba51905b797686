use book_harvest::config::SourceConfig;
use book_harvest::crawlers::fetch::HttpFetcher;
use book_harvest::crawlers::{category, volumes};
use book_harvest::{results, utils};
use clap::Parser;
use std::path::Path;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Build the effective source configuration
    let config = match args::build_source_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return;
        }
    };

    match config {
        SourceConfig::Category(config) => {
            ::log::info!("Starting category crawl at {}", config.seed_url);

            let fetcher = HttpFetcher::new();
            let table = match category::scrape_all_pages(&fetcher, &config).await {
                Ok(table) => table,
                Err(e) => {
                    ::log::error!("Category crawl failed: {}", e);
                    return;
                }
            };

            println!("Total products found: {}", table.len());

            let path = Path::new(&args.out_dir).join(utils::timestamped_filename("category_books"));
            match table.write_json(&path) {
                Ok(()) => println!("Data saved to {}", path.display()),
                Err(e) => ::log::error!("Failed to write {}: {}", path.display(), e),
            }
        }
        SourceConfig::Volumes(config) => {
            println!("Fetching all books for query: '{}'...", config.query);

            let rows = match volumes::fetch_all_volumes(&config).await {
                Ok(rows) => rows,
                Err(e) => {
                    ::log::error!("Volumes fetch failed: {}", e);
                    return;
                }
            };

            println!("Total volumes found: {}", rows.len());

            let path = Path::new(&args.out_dir).join(utils::timestamped_filename("volume_books"));
            match results::write_json(&rows, &path) {
                Ok(()) => println!("Data saved to {}", path.display()),
                Err(e) => ::log::error!("Failed to write {}: {}", path.display(), e),
            }
        }
    }
}
