use anyhow::Result;
use clap::Args;

use crate::context::{CommandContext, ConfigOverrides};

#[derive(Args, Debug)]
#[command(about = "Print the effective configuration")]
pub struct ConfigArgs {
    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

pub async fn handle_config(args: &ConfigArgs) -> Result<()> {
    let context = CommandContext::new(&args.overrides).await?;
    println!("{}", serde_json::to_string_pretty(&context.config)?);
    Ok(())
}
