use crate::app::{OutputFormat, ResourceKind};
use crate::config::toml_config::ConnectConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "connect-client")]
#[command(about = "Command line client for the Amazon Connect API")]
pub struct CliConfig {
    /// TOML 設定檔
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long, value_enum, default_value = "json")]
    pub output: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every summary of a resource type, following pagination.
    List {
        #[arg(value_enum)]
        resource: ResourceKind,
        #[arg(long)]
        instance_id: String,
        #[arg(long)]
        max_results: Option<i32>,
    },
    DescribeUser {
        #[arg(long)]
        instance_id: String,
        #[arg(long)]
        user_id: String,
    },
    GetContactAttributes {
        #[arg(long)]
        instance_id: String,
        #[arg(long)]
        initial_contact_id: String,
    },
    ListTags {
        #[arg(long)]
        resource_arn: String,
    },
    /// Call an operation by name with a JSON request document.
    Invoke {
        operation: String,
        #[arg(long)]
        input: PathBuf,
    },
}

impl CliConfig {
    /// 載入設定檔 (若有) 並套用命令列覆寫
    pub fn load_config(&self) -> Result<ConnectConfig> {
        let mut config = match &self.config {
            Some(path) => ConnectConfig::from_file(path)?,
            None => ConnectConfig::default(),
        };
        config.apply_overrides(self.region.clone(), self.endpoint.clone());
        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validate_url("--endpoint", endpoint)?;
        }
        if let Command::Invoke { input, .. } = &self.command {
            if !input.exists() {
                return Err(crate::utils::error::ConnectError::InvalidConfigValueError {
                    field: "--input".to_string(),
                    value: input.display().to_string(),
                    reason: "File does not exist".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_list_command() {
        let cli = CliConfig::try_parse_from([
            "connect-client",
            "--output",
            "csv",
            "list",
            "queues",
            "--instance-id",
            "i-1",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Csv);
        match cli.command {
            Command::List {
                resource,
                instance_id,
                max_results,
            } => {
                assert_eq!(resource, ResourceKind::Queues);
                assert_eq!(instance_id, "i-1");
                assert_eq!(max_results, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[client]\nregion = \"eu-central-1\"\n").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "connect-client",
            "--config",
            path.as_str(),
            "--endpoint",
            "http://127.0.0.1:9000",
            "list-tags",
            "--resource-arn",
            "arn:x",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.client.region, "eu-central-1");
        assert_eq!(config.client.endpoint.as_deref(), Some("http://127.0.0.1:9000"));
    }

    #[test]
    fn test_invoke_requires_existing_input() {
        let cli = CliConfig::try_parse_from([
            "connect-client",
            "invoke",
            "ListUsers",
            "--input",
            "/definitely/not/here.json",
        ])
        .unwrap();
        assert!(cli.validate().is_err());
    }
}
