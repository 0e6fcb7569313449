//! Rules command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, RulesArgs};
use crate::commands::common::{load_config, load_policy, print_table};

/// Execute the rules command.
pub(crate) async fn execute(_args: &RulesArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let policy = load_policy(global, &config)?;

    if policy.is_empty() {
        println!("No filter rules defined.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = policy
        .rules()
        .map(|rule| {
            vec![
                rule.name.clone(),
                if rule.enabled { "yes" } else { "no" }.to_string(),
                rule.patterns.join(", "),
                rule.reason.clone(),
            ]
        })
        .collect();

    print_table(&["NAME", "ENABLED", "PATTERNS", "REASON"], &rows);
    println!();
    println!("{} rules, {} enabled", policy.len(), policy.enabled_count());
    Ok(())
}
