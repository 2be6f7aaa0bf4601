mod cli;
mod commands;

use std::sync::Arc;

use clap::Parser;

use pb_platform::bootstrap::init_tracing_subscriber;
use pb_platform::SystemNativeClipboard;

use cli::{Cli, Command};
use commands::ClipboardSession;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = commands::load_engine_config(cli.config.as_deref())?;
    init_tracing_subscriber(&config)?;

    let settings = commands::engine_settings(&config, cli.platform)?;
    tracing::debug!(?settings, "engine settings resolved");

    let output = match cli.command {
        Command::Encode { content_type } => {
            commands::encode(settings.platform, &content_type)?
        }
        Command::Decode { name } => commands::decode(settings.platform, &name)?,
        Command::Read {
            unsanitize,
            no_gesture,
        } => {
            let clipboard = Arc::new(SystemNativeClipboard::new(settings.platform));
            ClipboardSession::new(settings, clipboard, !no_gesture)
                .read(unsanitize)
                .await?
        }
        Command::Write {
            representations,
            unsanitize,
            no_gesture,
        } => {
            let clipboard = Arc::new(SystemNativeClipboard::new(settings.platform));
            ClipboardSession::new(settings, clipboard, !no_gesture)
                .write(&representations, unsanitize)
                .await?
        }
    };

    println!("{output}");
    Ok(())
}
