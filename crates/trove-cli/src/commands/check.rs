use crate::cli::CheckArgs;

/// Handle `trove check`.
pub fn handle(args: &CheckArgs) -> anyhow::Result<()> {
    trove_list::validate_raw_url(&args.url)?;
    tracing::debug!(url = %args.url, "check: raw url accepted");
    println!("ok: {}", args.url);
    println!("repo: {}", trove_list::derive_repo_url(&args.url));
    Ok(())
}
