use anyhow::Context;
use trove_config::TroveConfig;
use trove_core::ListStats;

use crate::cli::FetchArgs;

const SUMMARY_RESOURCE_LIMIT: usize = 10;

/// Handle `trove fetch`.
pub async fn handle(args: &FetchArgs) -> anyhow::Result<()> {
    let config = TroveConfig::load().context("failed to load trove configuration")?;
    let list = trove_list::fetch_awesome_list(&args.url, &config).await?;
    tracing::debug!(url = %args.url, resources = list.resources.len(), "fetch: list parsed");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    let stats = ListStats::for_list(&list);
    println!("{}", list.title);
    println!("{}", list.description);
    println!("{}", list.repo_url);
    println!();
    println!(
        "{} resources, {} categories, {} tags ({}% GitHub, {}% GitLab)",
        stats.resources, stats.categories, stats.tags, stats.github_pct, stats.gitlab_pct
    );
    println!();
    for resource in list.resources.iter().take(SUMMARY_RESOURCE_LIMIT) {
        match &resource.subcategory {
            Some(subcategory) => println!(
                "  {} [{} / {}] {}",
                resource.title, resource.category, subcategory, resource.url
            ),
            None => println!(
                "  {} [{}] {}",
                resource.title, resource.category, resource.url
            ),
        }
    }
    if list.resources.len() > SUMMARY_RESOURCE_LIMIT {
        println!(
            "  ... and {} more",
            list.resources.len() - SUMMARY_RESOURCE_LIMIT
        );
    }

    Ok(())
}
