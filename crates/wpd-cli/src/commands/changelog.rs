//! `wpd changelog` — print the directory changelog link. Pure, no network.

use wpd_config::WpdConfig;
use wpd_core::PackageRef;
use wpd_registry::{DirectoryClient, DirectoryOptions, PluginDirectory};

use crate::cli::ChangelogArgs;

pub fn handle(args: &ChangelogArgs, config: &WpdConfig) -> anyhow::Result<()> {
    let package = PackageRef::new(&args.package, "wordpress-plugin", "*");
    let client = DirectoryClient::new(DirectoryOptions {
        api_base: config.directory.api_base.clone(),
        web_base: config.directory.web_base.clone(),
        timeout_secs: config.directory.timeout_secs,
        user_agent: config.directory.user_agent.clone(),
    });

    println!("{}", client.changelog_url(package.slug()));
    Ok(())
}
