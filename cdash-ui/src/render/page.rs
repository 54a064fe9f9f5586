//! Dashboard and error page templates

use std::collections::BTreeMap;
use std::fmt::Write;

use cdash_common::aggregate::TrendPoint;
use cdash_common::{ContentType, TypeSelection};
use tracing::warn;

use super::charts::{self, ChartError, Series};
use super::escape_html;
use super::palette::{self, series_color};
use crate::api::buildinfo::BuildInfo;
use crate::view::DashboardView;

const PAGE_TITLE: &str = "Catalog Data Analysis Dashboard";

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    background-color: #1a1a1a;
    color: #e0e0e0;
    line-height: 1.6;
}
.layout { display: flex; min-height: 100vh; }
aside {
    width: 260px;
    flex-shrink: 0;
    background-color: #2a2a2a;
    border-right: 1px solid #3a3a3a;
    padding: 20px;
}
aside h2 { font-size: 18px; color: #4a9eff; margin: 16px 0 8px; }
aside fieldset { border: none; }
aside legend { font-size: 14px; color: #aaa; margin-bottom: 6px; }
aside label { display: block; padding: 4px 0; cursor: pointer; }
aside hr, main hr { border: none; border-top: 1px solid #3a3a3a; margin: 20px 0; }
.notice { padding: 10px 12px; border-radius: 4px; font-size: 14px; }
.notice-success { background: #10392a; color: #6ee7b7; }
.notice-info { background: #13294b; color: #93c5fd; }
.notice-error { background: #3f1414; color: #fca5a5; font-size: 16px; }
main { flex: 1; padding: 24px 32px; min-width: 0; }
header { margin-bottom: 20px; }
h1 { font-size: 28px; color: #4a9eff; }
.subtitle { color: #888; font-size: 16px; }
.kpis { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.kpi { background: #2a2a2a; border: 1px solid #3a3a3a; border-radius: 6px; padding: 14px 18px; }
.kpi-label { color: #aaa; font-size: 14px; }
.kpi-value { font-size: 32px; font-weight: 600; color: #fff; }
.tabs > input { display: none; }
.tabs > label {
    display: inline-block;
    padding: 8px 16px;
    cursor: pointer;
    color: #aaa;
    border-bottom: 2px solid transparent;
}
.tabs > input:checked + label { color: #fff; border-bottom-color: #ef4444; }
.panel { display: none; padding-top: 16px; }
#tab-trends:checked ~ #panel-trends,
#tab-release:checked ~ #panel-release,
#tab-market:checked ~ #panel-market { display: block; }
.panel h3 { color: #e0e0e0; margin: 8px 0; }
.panel p { color: #aaa; margin-bottom: 8px; }
.chart { background: #fff; border-radius: 6px; padding: 8px; margin-bottom: 16px; }
.chart svg { width: 100%; height: auto; display: block; }
.chart-error { color: #888; padding: 16px; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
.build-info { margin-top: 12px; color: #666; font-size: 12px; font-family: 'Courier New', monospace; }
"#;

fn page_shell(body: &str, sidebar: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
<div class="layout">
    <aside>
{sidebar}
    </aside>
    <main>
        <header>
            <h1>🎬 {title}</h1>
            <p class="subtitle">This dashboard analyzes catalog content trends, release patterns, and genres to support production decisions.</p>
        </header>
{body}
    </main>
</div>
</body>
</html>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        sidebar = sidebar,
        body = body,
    )
}

fn footer() -> String {
    let build = BuildInfo::current();
    format!(
        r#"        <hr>
        <div class="notice notice-info">Created with cdash-ui 🚀</div>
        <div class="build-info">v{} [{}]<br>{} ({})</div>"#,
        escape_html(&build.version),
        escape_html(&build.git_hash),
        escape_html(&build.build_timestamp),
        escape_html(&build.build_profile),
    )
}

fn selection_form(active: TypeSelection) -> String {
    let mut options = String::new();
    for option in TypeSelection::ALL_OPTIONS {
        let checked = if option == active { " checked" } else { "" };
        let _ = writeln!(
            options,
            r#"                <label><input type="radio" name="type" value="{value}"{checked} onchange="this.form.submit()"> {value}</label>"#,
            value = escape_html(option.as_str()),
        );
    }

    format!(
        r#"        <h2>🔍 Filters</h2>
        <form method="get" action="/">
            <fieldset>
                <legend>Select Content Type</legend>
{options}            </fieldset>
            <noscript><button type="submit">Apply</button></noscript>
        </form>"#
    )
}

fn kpi_tile(label: &str, value: usize) -> String {
    format!(
        r#"            <div class="kpi"><div class="kpi-label">{}</div><div class="kpi-value">{}</div></div>"#,
        escape_html(label),
        value
    )
}

/// Split the trend into one series per content type, in type order
fn trend_series(trend: &[TrendPoint]) -> Vec<Series> {
    let mut by_type: BTreeMap<&ContentType, Vec<(i32, u64)>> = BTreeMap::new();
    for point in trend {
        by_type
            .entry(&point.content_type)
            .or_default()
            .push((point.year, point.count));
    }

    by_type
        .into_iter()
        .map(|(content_type, points)| Series {
            name: content_type.to_string(),
            color: series_color(content_type),
            points,
        })
        .collect()
}

/// A chart that failed to draw is logged and replaced by a short notice
fn chart_or_notice(name: &str, chart: Result<String, ChartError>) -> String {
    chart.unwrap_or_else(|e| {
        warn!("Chart '{}' not drawn: {}", name, e);
        format!(
            r#"<p class="chart-error">{} is unavailable.</p>"#,
            escape_html(name)
        )
    })
}

/// Render the full dashboard for one selection
pub fn dashboard_page(view: &DashboardView) -> String {
    let sidebar = format!(
        "        <div class=\"notice notice-success\">Data loaded successfully!</div>\n{}\n{}",
        selection_form(view.selection),
        footer()
    );

    let trend_svg = chart_or_notice(
        "Yearly content growth",
        charts::line_chart(
            "Movies vs TV Shows Added Per Year",
            "year_added",
            "count",
            &trend_series(&view.trend),
        ),
    );
    let heatmap_svg = chart_or_notice("Release density", charts::heatmap(&view.density));
    let genres_svg = chart_or_notice(
        "Top 10 genres",
        charts::horizontal_bars(
            "Top 10 Genres",
            &view.genres,
            &palette::sample_reversed(&palette::reds(), view.genres.len()),
        ),
    );
    let countries_svg = chart_or_notice(
        "Top producing countries",
        charts::horizontal_bars(
            "Top Producing Countries",
            &view.countries,
            &palette::viridis(view.countries.len()),
        ),
    );
    let ratings_svg = chart_or_notice(
        "Ratings",
        charts::vertical_bars(
            "Titles per Rating",
            "rating",
            &view.ratings,
            &palette::sample(&palette::coolwarm(), view.ratings.len()),
        ),
    );

    let body = format!(
        r#"        <section class="kpis">
{total}
{movies}
{shows}
        </section>
        <hr>
        <div class="tabs">
            <input type="radio" name="tab" id="tab-trends" checked>
            <label for="tab-trends">📈 Growth Trends</label>
            <input type="radio" name="tab" id="tab-release">
            <label for="tab-release">🔥 Best Time to Release</label>
            <input type="radio" name="tab" id="tab-market">
            <label for="tab-market">🌍 Market Insights</label>

            <section class="panel" id="panel-trends">
                <h3>Yearly Content Growth</h3>
                <div class="chart">{trend_svg}</div>
            </section>

            <section class="panel" id="panel-release">
                <h3>Heatmap: Content Release Density</h3>
                <p>Darker red areas indicate months with the most releases.</p>
                <div class="chart">{heatmap_svg}</div>
            </section>

            <section class="panel" id="panel-market">
                <div class="columns">
                    <div>
                        <h3>Top 10 Genres</h3>
                        <div class="chart">{genres_svg}</div>
                    </div>
                    <div>
                        <h3>Top Producing Countries</h3>
                        <div class="chart">{countries_svg}</div>
                    </div>
                </div>
                <hr>
                <h3>Target Audience (Ratings)</h3>
                <div class="chart">{ratings_svg}</div>
            </section>
        </div>"#,
        total = kpi_tile("Total Titles", view.kpis.total_titles),
        movies = kpi_tile("Total Movies", view.kpis.total_movies),
        shows = kpi_tile("Total TV Shows", view.kpis.total_tv_shows),
    );

    page_shell(&body, &sidebar)
}

/// Render a page that carries only an error message
pub fn error_page(message: &str) -> String {
    let body = format!(
        "        <div class=\"notice notice-error\">{}</div>",
        escape_html(message)
    );
    let sidebar = footer();
    page_shell(&body, &sidebar)
}
