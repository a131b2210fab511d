use accountapi::{Account, Attributes, Client, Params, config};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Debug, Parser)]
#[command(name = "account-cli", about = "CLI wrapper for the organisation accounts API")]
struct Cli {
    /// API host; falls back to ACCOUNT_API_HOST env var
    #[arg(long, env = config::HOST_ENV_VAR, default_value = config::DEFAULT_HOST)]
    host: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create an account
    Create {
        #[arg(long)]
        id: String,
        #[arg(long)]
        organisation_id: String,
        /// ISO 3166 country code
        #[arg(long)]
        country: String,
        #[arg(long)]
        base_currency: Option<String>,
        #[arg(long)]
        bank_id: Option<String>,
        #[arg(long)]
        bank_id_code: Option<String>,
        #[arg(long)]
        bic: Option<String>,
        /// Account holder name; repeat for multiple lines
        #[arg(long = "name")]
        names: Vec<String>,
    },
    /// Fetch one account by id
    Fetch { id: String },
    /// List accounts, optionally one page at a time
    List {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Delete a version of an account
    Delete {
        id: String,
        #[arg(long, default_value_t = 0)]
        version: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let client = Client::new(cli.host)?;

    match cli.command {
        Commands::Create {
            id,
            organisation_id,
            country,
            base_currency,
            bank_id,
            bank_id_code,
            bic,
            names,
        } => {
            let attributes = Attributes {
                country,
                base_currency: base_currency.unwrap_or_default(),
                bank_id: bank_id.unwrap_or_default(),
                bank_id_code: bank_id_code.unwrap_or_default(),
                bic: bic.unwrap_or_default(),
                name: names,
                ..Attributes::default()
            };
            let created = client
                .create(&Account::new(id, organisation_id, attributes))
                .await?;
            print_account(&created);
        }
        Commands::Fetch { id } => {
            let account = client.fetch(&id).await?;
            print_account(&account);
        }
        Commands::List { page, page_size } => {
            let params = Params { page, page_size };
            let accounts = client.list(&params).await?;
            println!("Fetched {} accounts:", accounts.len());
            for account in &accounts {
                print_account(account);
            }
        }
        Commands::Delete { id, version } => {
            client.delete(&id, version).await?;
            println!("Deleted account {} at version {}", id, version);
        }
    }

    Ok(())
}

fn print_account(account: &Account) {
    println!(
        "{} | v{} | {} {} | {}",
        account.id,
        account.version,
        account.attributes.country,
        account.attributes.base_currency,
        account.organisation_id
    );
}
