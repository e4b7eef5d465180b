use anyhow::Result;
use clap::Parser;
use client_core::{load_dataset, load_settings, HttpCountrySource};
use shared::domain::SortKey;
use tracing_subscriber::EnvFilter;
use view_core::{reduce, render_view, ViewAction, ViewState};

mod table;

/// Fetch the country sample once and print a single page of the table.
#[derive(Parser, Debug)]
struct Args {
    /// Case-insensitive name filter.
    #[arg(long)]
    search: Option<String>,
    /// Exact region to keep, e.g. "Europe".
    #[arg(long)]
    region: Option<String>,
    /// none, population or area.
    #[arg(long)]
    sort: Option<SortKey>,
    #[arg(long, default_value_t = 1)]
    page: usize,
    /// Drop a country by name; may be repeated.
    #[arg(long = "remove", value_name = "NAME")]
    remove: Vec<String>,
    /// Overrides the configured country endpoint.
    #[arg(long)]
    endpoint: Option<String>,
    /// Overrides how many fetched records are kept.
    #[arg(long)]
    limit: Option<usize>,
}

/// Flags replayed in the order a user would apply them in the table.
fn actions_from_args(args: &Args) -> Vec<ViewAction> {
    let mut actions = Vec::new();
    if let Some(search) = &args.search {
        actions.push(ViewAction::SetSearchText(search.clone()));
    }
    if let Some(region) = &args.region {
        actions.push(ViewAction::SelectRegion(Some(region.clone())));
    }
    if let Some(sort) = args.sort {
        actions.push(ViewAction::SetSortKey(sort));
    }
    for name in &args.remove {
        actions.push(ViewAction::RemoveCountry(name.clone()));
    }
    actions.push(ViewAction::SelectPage(args.page));
    actions
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint = endpoint.clone();
    }
    if let Some(limit) = args.limit {
        settings.sample_limit = limit;
    }

    let source = HttpCountrySource::new(settings.endpoint_url()?);
    tracing::debug!(endpoint = %source.endpoint(), "fetching country sample");
    let dataset = load_dataset(&source, settings.sample_limit).await;

    let state = actions_from_args(&args)
        .into_iter()
        .fold(ViewState::default(), reduce);
    let view = render_view(&dataset, &state, &settings.view_options());
    tracing::debug!(
        rows = view.rows.len(),
        matches = view.total_matches,
        page = view.current_page,
        "rendered country page"
    );
    print!("{}", table::render_table(&view));

    Ok(())
}
