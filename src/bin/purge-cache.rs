use clap::Parser;
use url::Url;

use chess_gateway::purge::{
    purge_cache, PurgeCredentials, PurgeError, API_KEY_VARS, EMAIL_VAR, SITE_URLS, ZONE_VARS,
};

#[derive(Parser)]
#[command(name = "purge-cache")]
#[command(about = "Purge the site's URLs from the edge cache", long_about = None)]
struct Cli {
    /// API key; falls back to CLOUDFLARE_API_KEY / CLOUDFLARE_API
    #[arg(long)]
    key: Option<String>,

    /// Account email; falls back to CLOUDFLARE_EMAIL
    #[arg(long)]
    email: Option<String>,

    /// Zone identifier; falls back to the CLOUDFLARE_ZONE_* variables
    #[arg(long)]
    zone: Option<String>,
}

impl Cli {
    /// Flag value standing in for the named environment variable, if given.
    fn flag_for(&self, name: &str) -> Option<String> {
        if API_KEY_VARS.contains(&name) {
            self.key.clone()
        } else if ZONE_VARS.contains(&name) {
            self.zone.clone()
        } else if name == EMAIL_VAR {
            self.email.clone()
        } else {
            None
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let credentials = PurgeCredentials::resolve(|name| {
        cli.flag_for(name)
            .or_else(|| std::env::var(name).ok())
    });
    let credentials = match credentials {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let urls: Vec<Url> = match SITE_URLS.iter().map(|u| Url::parse(u)).collect() {
        Ok(urls) => urls,
        Err(e) => {
            eprintln!("bad URL in purge list: {e}");
            std::process::exit(1);
        }
    };

    println!("Clearing {} URLs...", urls.len());

    let client = reqwest::Client::new();
    match purge_cache(&client, &credentials, &urls).await {
        Ok(()) => println!("Cache cleared successfully"),
        Err(PurgeError::Provider { body, .. }) => {
            eprintln!("Failed: {body}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed: {e}");
            std::process::exit(1);
        }
    }
}
