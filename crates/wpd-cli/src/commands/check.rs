//! `wpd check` — evaluate one package and report the verdict.

use anyhow::Context;
use wpd_advisor::Notice;
use wpd_config::WpdConfig;
use wpd_core::{PackageRef, Verdict};

use crate::cli::{CheckArgs, OutputFormat};
use crate::commands::{advisor_from_config, render_notices};

pub async fn handle(
    args: &CheckArgs,
    config: &WpdConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let package = PackageRef::new(&args.package, &args.kind, &args.package_version);
    let advisor = advisor_from_config(config);

    let Some(verdict) = advisor
        .check(&package)
        .await
        .context("could not reach WordPress.org to verify plugin status")?
    else {
        if format == OutputFormat::Json {
            println!("null");
        } else {
            println!(
                "{} is not a WordPress Plugin Directory package; nothing to check.",
                package.name
            );
        }
        return Ok(());
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        }
        OutputFormat::Text => {
            render_notices(&notices_for(&package, verdict));
            if verdict.is_clean() {
                println!("{} looks good.", package.name);
            }
        }
    }

    // Warnings are advice; a check never fails the caller.
    Ok(())
}

fn notices_for(package: &PackageRef, verdict: Verdict) -> Vec<Notice> {
    let mut notices = Vec::new();
    if !verdict.available {
        notices.push(Notice::unavailable(&package.name));
    }
    if !verdict.actively_maintained {
        notices.push(Notice::stale(&package.name));
    }
    if !verdict.compatible_with_recent {
        notices.push(Notice::untested(&package.name));
    }
    notices
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn one_notice_per_failed_predicate() {
        let package = PackageRef::new("wpackagist-plugin/gone", "wordpress-plugin", "*");
        let notices = notices_for(&package, Verdict::missing());
        assert_eq!(notices.len(), 3);

        let clean = Verdict {
            available: true,
            actively_maintained: true,
            compatible_with_recent: true,
        };
        assert_eq!(notices_for(&package, clean), Vec::<Notice>::new());
    }

    #[test]
    fn stale_only_verdict_warns_once() {
        let package = PackageRef::new("wpackagist-plugin/old", "wordpress-plugin", "*");
        let verdict = Verdict {
            available: true,
            actively_maintained: false,
            compatible_with_recent: true,
        };
        let notices = notices_for(&package, verdict);
        assert_eq!(notices, vec![Notice::stale("wpackagist-plugin/old")]);
    }
}
