//! Resolve command - runs one field and prints the response

use std::path::PathBuf;

use clap::Args;

use crate::domain::FieldArguments;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Field to resolve
    pub field: String,

    /// Identifier argument
    #[arg(long)]
    pub id: Option<String>,

    /// Field arguments as a JSON object, e.g. '{"id": 1}'
    #[arg(long, conflicts_with = "id")]
    pub args: Option<String>,
}

impl ResolveArgs {
    fn field_arguments(&self) -> anyhow::Result<FieldArguments> {
        if let Some(id) = &self.id {
            return Ok(FieldArguments::new().with("id", id.as_str()));
        }

        match &self.args {
            Some(json) => {
                let value: serde_json::Value = serde_json::from_str(json)?;
                Ok(FieldArguments::try_from(value)?)
            }
            None => Ok(FieldArguments::new()),
        }
    }
}

pub async fn run(catalog: Option<PathBuf>, args: ResolveArgs) -> anyhow::Result<()> {
    let config = super::bootstrap(catalog)?;
    let fetchers = crate::create_data_fetchers(&config)?;

    let response = fetchers.execute(&args.field, args.field_arguments()?).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(id: Option<&str>, json: Option<&str>) -> ResolveArgs {
        ResolveArgs {
            field: "line".to_string(),
            id: id.map(str::to_string),
            args: json.map(str::to_string),
        }
    }

    #[test]
    fn test_id_flag() {
        let arguments = args(Some("1"), None).field_arguments().unwrap();
        assert_eq!(arguments.id("id").unwrap(), Some("1".to_string()));
    }

    #[test]
    fn test_json_args() {
        let arguments = args(None, Some(r#"{"id": 1}"#)).field_arguments().unwrap();
        assert_eq!(arguments.id("id").unwrap(), Some("1".to_string()));
    }

    #[test]
    fn test_no_args() {
        let arguments = args(None, None).field_arguments().unwrap();
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_invalid_json_args() {
        assert!(args(None, Some("{id")).field_arguments().is_err());
        assert!(args(None, Some("[1]")).field_arguments().is_err());
    }
}
