use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::domain::Reading;

use super::handlers::{AppState, HistoryQuery};

/// Handler for GET / — renders the monitoring dashboard
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Html<String> {
    let stats = state.service.statistics();
    let current = state.service.current();
    let logs = state.service.history(params.limit);

    // Synthetic placeholder so an empty log still renders
    let (current_status, current_temp, current_gas, current_ts) = match &current {
        Some(r) => (
            r.status.as_str(),
            format!("{:.2}", r.temperature),
            r.gas.to_string(),
            r.timestamp.clone(),
        ),
        None => ("normal", "0".to_string(), "0".to_string(), String::new()),
    };

    let rows: String = logs.iter().map(render_row).collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="10">
<title>Fire Detection Dashboard</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; background: #1b1e24; color: #e6e6e6; }}
.cards {{ display: flex; gap: 1rem; margin-bottom: 2rem; }}
.card {{ background: #262b33; border-radius: 8px; padding: 1rem 2rem; }}
.card h2 {{ margin: 0 0 .5rem 0; font-size: .9rem; color: #9aa0a6; text-transform: uppercase; }}
.card .value {{ font-size: 1.8rem; font-weight: bold; }}
.status-danger {{ color: #ff5252; }}
.status-normal {{ color: #4caf50; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ text-align: left; padding: .4rem .8rem; border-bottom: 1px solid #333; }}
</style>
</head>
<body>
<h1>Fire Detection Dashboard</h1>
<div class="cards">
<div class="card"><h2>Current Status</h2><div class="value status-{current_status}">{current_status}</div></div>
<div class="card"><h2>Temperature</h2><div class="value">{current_temp}&deg;C</div></div>
<div class="card"><h2>Gas Level</h2><div class="value">{current_gas} ppm</div></div>
<div class="card"><h2>Danger Alerts</h2><div class="value status-danger">{danger_count}</div></div>
<div class="card"><h2>Normal Readings</h2><div class="value status-normal">{normal_count}</div></div>
</div>
<p>Last update: {current_ts}</p>
<h2>Recent Readings</h2>
<table>
<tr><th>Timestamp</th><th>Status</th><th>Temperature</th><th>Gas</th></tr>
{rows}
</table>
</body>
</html>"#,
        danger_count = stats.danger_count,
        normal_count = stats.normal_count,
    ))
}

fn render_row(reading: &Reading) -> String {
    format!(
        "<tr><td>{}</td><td class=\"status-{status}\">{status}</td><td>{:.2}&deg;C</td><td>{} ppm</td></tr>\n",
        escape_html(&reading.timestamp),
        reading.temperature,
        reading.gas,
        status = reading.status.as_str(),
    )
}

// Timestamps can be arbitrary client text, so they must not reach the
// page unescaped
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
