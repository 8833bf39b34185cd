pub mod changelog;
pub mod check;
pub mod event;

use wpd_advisor::{Advisor, Notice, Severity};
use wpd_config::WpdConfig;
use wpd_registry::{DirectoryClient, DirectoryOptions};

/// Build the production advisor from loaded configuration.
pub fn advisor_from_config(config: &WpdConfig) -> Advisor<DirectoryClient> {
    let client = DirectoryClient::new(DirectoryOptions {
        api_base: config.directory.api_base.clone(),
        web_base: config.directory.web_base.clone(),
        timeout_secs: config.directory.timeout_secs,
        user_agent: config.directory.user_agent.clone(),
    });
    Advisor::with_heuristics(
        client,
        config.advisor.maintenance_window_months,
        config.advisor.compat_lookahead_steps,
    )
}

/// Print notices the way the host would: warnings to stderr, info to
/// stdout.
pub fn render_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.severity {
            Severity::Warning => eprintln!("{}", notice.text),
            Severity::Info => println!("{}", notice.text),
        }
    }
}
