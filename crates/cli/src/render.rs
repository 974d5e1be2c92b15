//! Console rendering of replay reports.

use console::{Style, style};
use delve_core::MessageStyle;

use crate::replay::ReplayReport;

fn message_style(kind: MessageStyle) -> Style {
    match kind {
        MessageStyle::PlayerAttack => Style::new().white(),
        MessageStyle::EnemyAttack => Style::new().red(),
        MessageStyle::PlayerDeath => Style::new().red().bold(),
        MessageStyle::EnemyDeath => Style::new().yellow(),
        MessageStyle::HealthRecovered => Style::new().green(),
        MessageStyle::Descend => Style::new().magenta(),
        MessageStyle::Impossible => Style::new().dim(),
        MessageStyle::Neutral => Style::new(),
    }
}

pub fn print_text(report: &ReplayReport) {
    println!(
        "{} {}",
        style("Scenario:").bold().cyan(),
        report.scenario
    );
    println!();

    for step in &report.steps {
        let action = step.action.unwrap_or("(empty slot)");
        let header = format!("[{:>3}] {}", step.step + 1, action);
        if step.accepted {
            println!("{}", style(header).bold());
        } else {
            println!("{}", style(header).dim());
        }
        for entry in &step.messages {
            println!("      {}", message_style(entry.style).apply_to(&entry.text));
        }
    }

    println!();
    println!("{}", style("=== Message Log ===").bold().green());
    for line in &report.log {
        println!("  {}", message_style(line.style).apply_to(&line.text));
    }

    let summary = &report.summary;
    println!();
    println!("{}", style("=== Summary ===").bold().green());
    println!("  Depth: {}", summary.depth);
    println!("  Turns: {}", summary.nonce);
    println!("  HP: {}/{}", summary.player_hp, summary.player_max_hp);
    println!("  XP: {}", summary.player_xp);
    let status = if summary.alive {
        style("alive").green()
    } else {
        style("dead").red().bold()
    };
    println!("  Status: {}", status);
}
