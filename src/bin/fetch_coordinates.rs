//! Offline helper that resolves the dataset's country codes to coordinates
//! and writes them to the JSON file bundled with the map view.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use clap::Parser;
    use film_gender_stats::config::{
        DEFAULT_COORDINATES_OUTPUT, DEFAULT_REST_COUNTRIES_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    };
    use film_gender_stats::countries::COUNTRY_CODES;
    use film_gender_stats::geo::fetch_coordinates;
    use film_gender_stats::logging;
    use log::{info, LevelFilter};
    use std::path::PathBuf;
    use std::time::Duration;

    #[derive(Parser, Debug)]
    #[command(about = "Resolve country codes to [longitude, latitude] pairs")]
    struct Args {
        /// Endpoint the country code is appended to.
        #[arg(long, env = "REST_COUNTRIES_API_BASE_URL", default_value = DEFAULT_REST_COUNTRIES_BASE_URL)]
        base_url: String,

        #[arg(long, short, default_value = DEFAULT_COORDINATES_OUTPUT)]
        output: PathBuf,

        /// Only resolve these codes instead of the full dataset list.
        #[arg(long, value_delimiter = ',')]
        codes: Vec<String>,

        #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
        timeout_secs: u64,
    }

    pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
        logging::init(LevelFilter::Info);
        let args = Args::parse();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .build()?;
        let codes: Vec<&str> = if args.codes.is_empty() {
            COUNTRY_CODES.to_vec()
        } else {
            args.codes.iter().map(String::as_str).collect()
        };

        let coordinates = fetch_coordinates(&client, &args.base_url, &codes).await?;
        if coordinates.is_empty() && !codes.is_empty() {
            return Err(format!("no coordinates resolved from {}", args.base_url).into());
        }
        std::fs::write(&args.output, coordinates.to_json_pretty()?)?;
        info!(
            "Country coordinates saved to {} ({} entries)",
            args.output.display(),
            coordinates.len()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    native::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
