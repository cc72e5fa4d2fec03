use clap::Parser;
use connect_client::app::{self, OutputFormat};
use connect_client::model::{DescribeUserRequest, GetContactAttributesRequest, ListTagsForResourceRequest};
use connect_client::utils::error::ErrorSeverity;
use connect_client::utils::{logger, validation::Validate};
use connect_client::{CliConfig, Command, ConnectClient, ConnectConfig, ConnectError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let loaded = cli.load_config();

    // 初始化日誌：設定檔 [logging] 與 --json-logs 皆可開啟 JSON 輸出
    let file_logging = loaded.as_ref().ok();
    if cli.json_logs || file_logging.is_some_and(|c| c.json_logging()) {
        let level = if cli.verbose {
            Some("debug")
        } else {
            file_logging.and_then(|c| c.log_level())
        };
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting connect-client CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    match run(&cli, &config).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2, // 可重試
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: &ConnectConfig) -> Result<String, ConnectError> {
    let client = ConnectClient::from_config(config, config.credentials_provider())?;
    tracing::info!("🔗 Endpoint: {}", client.endpoint());

    match &cli.command {
        Command::List {
            resource,
            instance_id,
            max_results,
        } => app::list_resources(&client, *resource, instance_id, *max_results, cli.output).await,
        Command::DescribeUser {
            instance_id,
            user_id,
        } => {
            let result = client
                .describe_user(&DescribeUserRequest::new(instance_id, user_id))
                .await?;
            app::render_json(&result)
        }
        Command::GetContactAttributes {
            instance_id,
            initial_contact_id,
        } => {
            let result = client
                .get_contact_attributes(&GetContactAttributesRequest::new(
                    instance_id,
                    initial_contact_id,
                ))
                .await?;
            app::render_map(&result.attributes.unwrap_or_default(), cli.output)
        }
        Command::ListTags { resource_arn } => {
            let result = client
                .list_tags_for_resource(&ListTagsForResourceRequest::new(resource_arn))
                .await?;
            app::render_map(&result.tags.unwrap_or_default(), cli.output)
        }
        Command::Invoke { operation, input } => {
            let content = std::fs::read_to_string(input)?;
            let document = serde_json::from_str(&content)?;
            tracing::info!("🚀 Invoking {}", operation);
            let output = app::invoke(&client, operation, document).await?;
            if cli.output == OutputFormat::Csv {
                tracing::warn!("⚠️ CSV output is only available for list commands; printing JSON");
            }
            app::render_json(&output)
        }
    }
}
