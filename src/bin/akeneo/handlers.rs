use akeneo_cli::prelude::*;

use crate::args::{Cli, Commands, UploadCmd};
use crate::io::{read_payload, read_rows};
use crate::print::print_response;

/// Builds the query parameters of a `get` command
///
/// Page numbers only make sense for a single page, so `--all` drops them.
pub fn build_filters(
    page: u32,
    per_page: u32,
    raw_filters: &[String],
    search: Option<&str>,
    all: bool,
) -> Result<Filters, AppError> {
    let mut filters = Filters::new();
    if !all {
        filters.push("page", page);
    }
    filters.push("limit", per_page);
    if let Some(search) = search {
        serde_json::from_str::<Value>(search)
            .map_err(|e| AppError::InvalidInput(format!("--search is not valid JSON: {e}")))?;
        filters.push("search", search);
    }
    for raw in raw_filters {
        let (key, value) = Filters::parse_pair(raw)?;
        filters.push(key, value);
    }
    Ok(filters)
}

/// Logs in, runs the command and wipes the credentials
pub async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()?;
    debug!("Configuration: {}", config.rest_api);
    let client = Client::new(config).await?;
    let result = dispatch(&client, cli.command).await;
    client.close().await;
    print_response(&result?)
}

async fn dispatch(client: &Client, command: Commands) -> Result<ApiResponse, AppError> {
    match command {
        Commands::Get {
            path,
            page,
            per_page,
            filters,
            search,
            all,
        } => {
            let filters = build_filters(page, per_page, &filters, search.as_deref(), all)?;
            client.get(&path.to_path(), &filters, all).await
        }
        Commands::Post { path, data } => client.post(&path.to_path(), read_payload(&data)?).await,
        Commands::Patch { path, data } => {
            client.patch(&path.to_path(), read_payload(&data)?).await
        }
        Commands::Delete { path } => client.delete(&path.to_path()).await,
        Commands::Bulk { path, data } => client.bulk(&path.to_path(), &read_rows(&data)?).await,
        Commands::Upload { target } => match target {
            UploadCmd::ProductFile {
                identifier,
                attribute,
                file,
                locale,
                scope,
                model,
            } => {
                let upload = ProductFileUpload {
                    identifier,
                    attribute,
                    file,
                    locale,
                    scope,
                    is_model: model,
                };
                client.upload_product_file(&upload).await
            }
            UploadCmd::AssetFile { file } => client.upload_asset_file(&file).await,
        },
    }
}
