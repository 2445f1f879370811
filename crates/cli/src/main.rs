use {
    anyhow::Context,
    clap::{Parser, Subcommand},
    dispatch_channels::Channel,
    dispatch_client::{
        Client,
        config::{DEFAULT_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT},
    },
    std::time::Duration,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "dispatch", about = "Post notifications to dispatch server channels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a message to a channel.
    Send {
        /// Destination channel (sugar, mbank, lab, commits).
        #[arg(short, long)]
        channel: Channel,

        /// Message text, posted verbatim.
        #[arg(short, long)]
        message: String,

        /// Base URL of the notification server.
        #[arg(long, env = "DISPATCH_SERVER_URL")]
        server_url: String,

        /// API key sent as the X-API-Key header.
        #[arg(long, env = "DISPATCH_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Timeout per attempt, in seconds.
        #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
        timeout_secs: u64,

        /// Retries after the initial attempt.
        #[arg(long, default_value_t = DEFAULT_RETRIES)]
        retries: usize,

        /// Pause between attempts, in milliseconds.
        #[arg(long, default_value_t = DEFAULT_RETRY_DELAY_MS)]
        retry_delay_ms: u64,
    },
    /// List all registered channels.
    Channels,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    match cli.command {
        Commands::Send {
            channel,
            message,
            server_url,
            api_key,
            timeout_secs,
            retries,
            retry_delay_ms,
        } => {
            let client = Client::builder(server_url, api_key)
                .timeout(Duration::from_secs(timeout_secs))
                .retries(retries)
                .retry_delay(Duration::from_millis(retry_delay_ms))
                .build();
            client
                .send_message(channel, &message)
                .await
                .context("message delivery failed")?;
            info!(channel = %channel, "message sent");
            println!("message sent to {channel}");
        },
        Commands::Channels => {
            for channel in Channel::all() {
                println!("{channel}");
            }
        },
    }

    Ok(())
}
