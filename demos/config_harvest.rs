use book_harvest::Harvest;
use book_harvest::config::SourceConfig;
use book_harvest::crawlers::volumes;
use clap::Parser;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a source configuration file
    #[arg(short, long)]
    config: String,

    /// Override the page cap
    #[arg(short, long)]
    max_pages: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    match SourceConfig::from_file(&args.config)? {
        SourceConfig::Category(config) => {
            println!("Category crawl configuration:");
            println!("  Seed URL: {}", config.seed_url);
            println!("  Page delay: {}s", config.page_delay_secs);
            println!("  Page cap: {:?}", config.max_pages);

            let mut harvest = Harvest::new(&config.seed_url).with_config(config);
            if let Some(cap) = args.max_pages {
                println!("Overriding page cap: {}", cap);
                harvest = harvest.with_max_pages(cap);
            }

            let table = harvest.run().await?;
            println!("Crawl complete. {} records accumulated.", table.len());
        }
        SourceConfig::Volumes(config) => {
            println!("Volumes API configuration:");
            println!("  Endpoint: {}", config.endpoint);
            println!("  Query: {}", config.query);
            println!("  Page size: {}", config.page_size);

            let rows = volumes::fetch_all_volumes(&config).await?;
            println!("Fetch complete. {} volumes collected.", rows.len());
        }
    }

    Ok(())
}
