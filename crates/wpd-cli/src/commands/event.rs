//! `wpd event` — simulate one host lifecycle event.
//!
//! Runs the standard hook table exactly as an embedding host would, which
//! makes the dispatch path scriptable: warnings land on stderr, info lines
//! (the changelog link) on stdout, and the exit code is always zero — the
//! advisor never blocks an install or update.

use wpd_advisor::hooks::{HookSet, PackageEvent};
use wpd_config::WpdConfig;
use wpd_core::PackageRef;

use crate::cli::EventArgs;
use crate::commands::{advisor_from_config, render_notices};

pub async fn handle(args: &EventArgs, config: &WpdConfig) -> anyhow::Result<()> {
    let package = PackageRef::new(&args.package, &args.kind, &args.package_version);
    let advisor = advisor_from_config(config);
    let hooks = HookSet::standard();

    let event = PackageEvent::new(args.event.into(), package);
    let notices = hooks.dispatch(&advisor, &event).await;
    tracing::debug!(event = ?args.event, notices = notices.len(), "hook dispatch complete");
    render_notices(&notices);

    Ok(())
}
