//! vend - command-line access to a Vend store.
//!
//! A thin wrapper over the `vend_api` library: lists a resource as JSON (or
//! counts it) and uploads product images. Logs go to stderr; `RUST_LOG`
//! overrides the verbosity flags.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vend_api::rest::resources::{
    Consignment, Outlet, Product, ProductUpload, Register, StoreCredit, Supplier, User,
};
use vend_api::{
    ApiToken, CancelToken, DomainPrefix, HostUrl, RetryPolicy, StoreTimeZone, VendClient,
    VendConfig, VendResource,
};

/// Command-line client for the Vend retail API.
#[derive(Parser, Debug)]
#[command(name = "vend")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Store domain prefix (the `mystore` in mystore.vendhq.com)
    #[arg(short, long, env = "VEND_DOMAIN_PREFIX")]
    domain: String,

    /// Personal access token
    #[arg(short, long, env = "VEND_TOKEN", hide_env_values = true)]
    token: String,

    /// Store timezone: Local, UTC, an offset such as +12:00, or a zoneinfo name such as Pacific/Auckland
    #[arg(short = 'z', long, default_value = "Local")]
    timezone: StoreTimeZone,

    /// Maximum tries per request
    #[arg(long, default_value_t = RetryPolicy::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Send requests here instead of https://{domain}.vendhq.com
    #[arg(long, hide = true)]
    host: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every product
    Products(ListArgs),
    /// List every outlet
    Outlets(ListArgs),
    /// List every consignment
    Consignments(ListArgs),
    /// List every register
    Registers(ListArgs),
    /// List every user
    Users(ListArgs),
    /// List every supplier
    Suppliers(ListArgs),
    /// List every store credit account
    StoreCredits(ListArgs),
    /// Upload an image file to a product
    UploadImage(UploadArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Print only the number of records
    #[arg(long)]
    count: bool,
}

#[derive(Args, Debug)]
struct UploadArgs {
    /// Product receiving the image
    #[arg(long)]
    product_id: String,

    /// Where the image came from; also used as the uploaded file name
    #[arg(long)]
    image_url: String,

    /// Delete the local file after a successful upload
    #[arg(long)]
    remove: bool,

    /// Local image file
    path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let client = build_client(&cli)?;

    match cli.command {
        Commands::Products(args) => list::<Product>(&client, &args).await,
        Commands::Outlets(args) => list::<Outlet>(&client, &args).await,
        Commands::Consignments(args) => list::<Consignment>(&client, &args).await,
        Commands::Registers(args) => list::<Register>(&client, &args).await,
        Commands::Users(args) => list::<User>(&client, &args).await,
        Commands::Suppliers(args) => list::<Supplier>(&client, &args).await,
        Commands::StoreCredits(args) => list::<StoreCredit>(&client, &args).await,
        Commands::UploadImage(args) => upload(&client, args).await,
    }
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn build_client(cli: &Cli) -> Result<VendClient> {
    let mut builder = VendConfig::builder()
        .token(ApiToken::new(cli.token.as_str())?)
        .domain_prefix(DomainPrefix::new(cli.domain.as_str())?)
        .time_zone(cli.timezone)
        .retry_policy(RetryPolicy::new(cli.max_attempts)?);
    if let Some(host) = &cli.host {
        builder = builder.host(HostUrl::new(host.as_str())?);
    }
    let config = builder.build().context("invalid configuration")?;

    let cancel = CancelToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, stopping after the current request");
            on_interrupt.cancel();
        }
    });

    Ok(VendClient::new(&config)?.with_cancel_token(cancel))
}

async fn list<T: VendResource + Serialize>(client: &VendClient, args: &ListArgs) -> Result<()> {
    let records = client
        .fetch_all::<T>()
        .await
        .with_context(|| format!("failed to fetch {}", T::PATH))?;

    let mut stdout = std::io::stdout().lock();
    if args.count {
        writeln!(stdout, "{}", records.len())?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, &*records)?;
        writeln!(stdout)?;
    }
    Ok(())
}

async fn upload(client: &VendClient, args: UploadArgs) -> Result<()> {
    let product = ProductUpload {
        id: args.product_id,
        image_url: Some(args.image_url),
        remove_after_upload: args.remove,
        ..Default::default()
    };

    let image = client
        .upload_image(&args.path, &product)
        .await
        .with_context(|| format!("failed to upload {}", args.path.display()))?;

    if let Some(image) = image {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &image)?;
        writeln!(stdout)?;
    }
    Ok(())
}
