//! List command - prints a whole entity collection

use std::path::PathBuf;

use clap::Args;

use crate::domain::{EntityKind, EntityRepository};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Entity kind: line(s) or station(s)
    pub kind: EntityKind,
}

pub async fn run(catalog: Option<PathBuf>, args: ListArgs) -> anyhow::Result<()> {
    let config = super::bootstrap(catalog)?;
    let repository = crate::create_repository(&config)?;

    let records = repository.list(args.kind).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
