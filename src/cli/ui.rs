use crate::cloud::{Instance, InstanceState};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tabled::{
    settings::{object::Rows, Color, Modify, Style},
    Table, Tabled,
};

/// Creates a standard spinner ProgressBar.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue.bold} {msg}")
            .unwrap()
            // More templates: https://docs.rs/indicatif/#templates
            .tick_strings(&[
                "▹▹▹▹▹",
                "▸▹▹▹▹",
                "▹▸▹▹▹",
                "▹▹▸▹▹",
                "▹▹▹▸▹",
                "▹▹▹▹▸",
                "▪▪▪▪▪",
            ]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

#[derive(Tabled)]
struct InstanceRow {
    #[tabled(rename = "Instance ID")]
    id: String, // Use String to hold colored output
    #[tabled(rename = "Public IP")]
    public_ip: String,
    #[tabled(rename = "State")]
    state: String, // Use String to hold colored output
}

/// Renders the status table: one row per instance, state colored by its
/// meaning. Instances without a public IP show a dash.
pub fn render_instance_table(instances: &[Instance]) -> String {
    let data: Vec<InstanceRow> = instances
        .iter()
        .map(|instance| InstanceRow {
            id: format_highlight(&instance.id),
            public_ip: instance.public_ip.clone().unwrap_or_else(|| "-".to_string()),
            state: format_state(&instance.state),
        })
        .collect();

    let mut table = Table::new(data);
    table
        .with(Style::blank())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN))
        .with(
            Modify::new(Rows::first())
                .with(tabled::settings::Format::content(|s| s.bold().to_string())),
        ); // Apply bold
    table.to_string()
}

fn format_state(state: &InstanceState) -> String {
    match state {
        InstanceState::Running => state.as_str().green().to_string(),
        InstanceState::ShuttingDown | InstanceState::Terminated => {
            state.as_str().red().to_string()
        }
        InstanceState::Pending => state.as_str().yellow().to_string(),
        InstanceState::Other(_) => state.as_str().to_string(),
    }
}

pub fn format_header(text: &str) -> String {
    format!("{}", text.blue().bold())
}

pub fn format_highlight(text: &str) -> String {
    format!("{}", text.cyan())
}

pub fn format_success(text: &str) -> String {
    format!("{}", text.green())
}

pub fn format_warning(text: &str) -> String {
    format!("{}", text.yellow())
}
