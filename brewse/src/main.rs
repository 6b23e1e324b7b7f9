use anyhow::Result;

use brewse::{App, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings
        .validate()
        .map_err(|message| anyhow::anyhow!(message))?;

    // Logging is initialized in App::run()
    App::new(settings).run().await?;

    Ok(())
}
