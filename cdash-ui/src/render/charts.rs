//! SVG charts drawn with plotters
//!
//! Every chart renders into a `String` through `SVGBackend::with_string`
//! and comes back as a standalone `<svg>` element.

use plotters::prelude::*;
use plotters::style::colors::colormaps::ColorMap;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use cdash_common::aggregate::{CategoryCount, DensityMatrix};

use super::palette::{self, GREY};

const FONT: &str = "sans-serif";

/// Errors raised while drawing a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

type Result<T> = core::result::Result<T, ChartError>;

fn area_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::DrawingArea(e.to_string())
}

fn config_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::ChartConfig(e.to_string())
}

fn draw_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Drawing(e.to_string())
}

/// One line of a multi-series line chart
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub color: RGBColor,
    /// (x, y) pairs, x ascending
    pub points: Vec<(i32, u64)>,
}

/// Upper bound of a count axis with a little room above the tallest value
fn headroom(max: u64) -> u64 {
    max + max / 10 + 1
}

/// Label of a category slot; axis ticks between slots stay blank
fn segment_label(value: &SegmentValue<u32>, labels: &[String]) -> String {
    match value {
        SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

fn centered(size: u32, colour: &'static RGBColor) -> TextStyle<'static> {
    (FONT, size)
        .into_font()
        .color(colour)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

/// Placeholder shown when a chart has nothing to draw
pub fn empty_chart(label: &str) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (600, 120)).into_drawing_area();
        root.fill(&WHITE).map_err(area_err)?;
        root.draw(&Text::new(
            format!("No data for {}", label),
            (300, 60),
            centered(14, &GREY),
        ))
        .map_err(draw_err)?;
        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

/// Multi-series line chart over integer years, with a legend
pub fn line_chart(
    title: &str,
    x_label: &str,
    y_label: &str,
    series: &[Series],
) -> Result<String> {
    let xs = || series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
    let (Some(x_min), Some(x_max)) = (xs().min(), xs().max()) else {
        return empty_chart(title);
    };
    let y_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.1))
        .max()
        .unwrap_or(0);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (900, 420)).into_drawing_area();
        root.fill(&WHITE).map_err(area_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT, 20))
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(64)
            .build_cartesian_2d((x_min - 1)..(x_max + 1), 0u64..headroom(y_max))
            .map_err(config_err)?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .axis_desc_style((FONT, 14))
            .draw()
            .map_err(draw_err)?;

        for s in series {
            let color = s.color;
            chart
                .draw_series(LineSeries::new(s.points.iter().copied(), color.stroke_width(2)))
                .map_err(draw_err)?
                .label(s.name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });
            chart
                .draw_series(s.points.iter().map(|&p| Circle::new(p, 3, color.filled())))
                .map_err(draw_err)?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font((FONT, 13))
            .draw()
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

/// Month × year heatmap on a Reds scale, each cell annotated with its count.
///
/// Combinations that never occur are left as empty cells.
pub fn heatmap(matrix: &DensityMatrix) -> Result<String> {
    const LABEL: &str = "Content release density";
    if matrix.is_empty() {
        return empty_chart(LABEL);
    }

    let years = matrix.years();
    let cols = years.len() as u32;
    let max = matrix.max_count().max(1) as f32;
    let reds = palette::reds();

    // Row 0 is drawn at the bottom, so January sits on row 11
    let year_labels: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    let month_labels: Vec<String> = matrix
        .months()
        .iter()
        .rev()
        .map(|m| m.name().to_string())
        .collect();

    let mut cells = Vec::new();
    for (m, &month) in matrix.months().iter().enumerate() {
        for (col, &year) in years.iter().enumerate() {
            if matrix.contains(month, year) {
                cells.push((col as u32, 11 - m as u32, matrix.count(month, year)));
            }
        }
    }

    let dark_text = centered(11, &BLACK);
    let light_text = centered(11, &WHITE);
    let width = (140 + 60 * cols).clamp(480, 1400);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, 460)).into_drawing_area();
        root.fill(&WHITE).map_err(area_err)?;

        // Integer ranges are inclusive: 0..=cols-1 and 0..=11
        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(96)
            .build_cartesian_2d((0..cols - 1).into_segmented(), (0u32..11).into_segmented())
            .map_err(config_err)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("year_added")
            .x_labels(year_labels.len() + 1)
            .y_labels(month_labels.len() + 1)
            .x_label_formatter(&|v: &SegmentValue<u32>| segment_label(v, &year_labels))
            .y_label_formatter(&|v: &SegmentValue<u32>| segment_label(v, &month_labels))
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(cells.iter().map(|&(col, row, count)| {
                let fill = reds.get_color(count as f32 / max);
                let mut cell = Rectangle::new(
                    [
                        (SegmentValue::Exact(col), SegmentValue::Exact(row)),
                        (SegmentValue::Exact(col + 1), SegmentValue::Exact(row + 1)),
                    ],
                    fill.filled(),
                );
                cell.set_margin(1, 1, 1, 1);
                cell
            }))
            .map_err(draw_err)?;

        chart
            .draw_series(cells.iter().map(|&(col, row, count)| {
                let fill = reds.get_color(count as f32 / max);
                let style = if palette::luminance(fill) < 0.5 {
                    light_text.clone()
                } else {
                    dark_text.clone()
                };
                Text::new(
                    count.to_string(),
                    (SegmentValue::CenterOf(col), SegmentValue::CenterOf(row)),
                    style,
                )
            }))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

/// Horizontal bar chart, first bar on top, one colour per bar in order
pub fn horizontal_bars(
    title: &str,
    bars: &[CategoryCount],
    colours: &[RGBColor],
) -> Result<String> {
    if bars.is_empty() {
        return empty_chart(title);
    }

    let rows = bars.len() as u32;
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0);
    let labels: Vec<String> = bars.iter().rev().map(|b| b.label.clone()).collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (640, 80 + 34 * rows)).into_drawing_area();
        root.fill(&WHITE).map_err(area_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT, 18))
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(200)
            .build_cartesian_2d(0u64..headroom(max), (0..rows - 1).into_segmented())
            .map_err(config_err)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(labels.len() + 1)
            .y_label_formatter(&|v: &SegmentValue<u32>| segment_label(v, &labels))
            .x_desc("count")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(bars.iter().enumerate().map(|(i, bar)| {
                let row = rows - 1 - i as u32;
                let colour = colours.get(i).copied().unwrap_or(GREY);
                let mut rect = Rectangle::new(
                    [
                        (0, SegmentValue::Exact(row)),
                        (bar.count, SegmentValue::Exact(row + 1)),
                    ],
                    colour.filled(),
                );
                rect.set_margin(4, 4, 0, 0);
                rect
            }))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

/// Vertical bar chart in the given order, category labels rotated
pub fn vertical_bars(
    title: &str,
    x_label: &str,
    bars: &[CategoryCount],
    colours: &[RGBColor],
) -> Result<String> {
    if bars.is_empty() {
        return empty_chart(title);
    }

    let cols = bars.len() as u32;
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0);
    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (1000, 420)).into_drawing_area();
        root.fill(&WHITE).map_err(area_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, (FONT, 18))
            .margin(12)
            .x_label_area_size(90)
            .y_label_area_size(64)
            .build_cartesian_2d((0..cols - 1).into_segmented(), 0u64..headroom(max))
            .map_err(config_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(labels.len() + 1)
            .x_label_formatter(&|v: &SegmentValue<u32>| segment_label(v, &labels))
            .x_label_style((FONT, 12).into_font().transform(FontTransform::Rotate90))
            .x_desc(x_label)
            .y_desc("count")
            .draw()
            .map_err(draw_err)?;

        chart
            .draw_series(bars.iter().enumerate().map(|(i, bar)| {
                let col = i as u32;
                let colour = colours.get(i).copied().unwrap_or(GREY);
                let mut rect = Rectangle::new(
                    [
                        (SegmentValue::Exact(col), 0),
                        (SegmentValue::Exact(col + 1), bar.count),
                    ],
                    colour.filled(),
                );
                rect.set_margin(0, 0, 6, 6);
                rect
            }))
            .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdash_common::aggregate::release_density;
    use cdash_common::catalog::read_dataset;

    fn bars(items: &[(&str, u64)]) -> Vec<CategoryCount> {
        items
            .iter()
            .map(|&(label, count)| CategoryCount {
                label: label.to_string(),
                count,
            })
            .collect()
    }

    #[test]
    fn test_headroom() {
        assert_eq!(headroom(0), 1);
        assert_eq!(headroom(10), 12);
        assert!(headroom(1450) > 1450);
    }

    #[test]
    fn test_segment_label_only_at_centres() {
        let labels = vec!["Movie".to_string(), "TV Show".to_string()];
        assert_eq!(segment_label(&SegmentValue::CenterOf(1), &labels), "TV Show");
        assert_eq!(segment_label(&SegmentValue::Exact(1), &labels), "");
        assert_eq!(segment_label(&SegmentValue::CenterOf(5), &labels), "");
    }

    #[test]
    fn test_line_chart_draws_every_series() {
        let series = vec![
            Series {
                name: "Movie".to_string(),
                color: RED,
                points: vec![(2019, 10), (2020, 14)],
            },
            Series {
                name: "TV Show".to_string(),
                color: BLACK,
                points: vec![(2020, 4)],
            },
        ];
        let svg = line_chart("Trend", "year_added", "count", &series).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Movie"));
        assert!(svg.contains("TV Show"));
        assert!(svg.contains("year_added"));
    }

    #[test]
    fn test_line_chart_empty() {
        let svg = line_chart("Trend", "x", "y", &[]).unwrap();
        assert!(svg.contains("No data for Trend"));
    }

    #[test]
    fn test_heatmap_labels_months_and_counts() {
        let csv = concat!(
            "type,title,date_added,rating,duration\n",
            "Movie,A,\"March 3, 2021\",PG,90 min\n",
            "Movie,B,\"March 9, 2021\",PG,90 min\n",
            "Movie,C,\"July 3, 2022\",PG,90 min\n",
        );
        let ds = read_dataset(csv.as_bytes()).unwrap();
        let svg = heatmap(&release_density(ds.records())).unwrap();
        assert!(svg.contains("January"));
        assert!(svg.contains("December"));
        assert!(svg.contains("2021"));
        assert!(svg.contains("2022"));
        assert!(svg.contains(">2<"));
    }

    #[test]
    fn test_heatmap_empty() {
        let svg = heatmap(&release_density(std::iter::empty())).unwrap();
        assert!(svg.contains("No data"));
    }

    #[test]
    fn test_horizontal_bars_label_every_bar() {
        let svg = horizontal_bars(
            "Genres",
            &bars(&[("Dramas", 3), ("Comedies", 2), ("Thrillers", 1)]),
            &palette::viridis(3),
        )
        .unwrap();
        assert!(svg.contains("Dramas"));
        assert!(svg.contains("Comedies"));
        assert!(svg.contains("Thrillers"));
    }

    #[test]
    fn test_vertical_bars_keep_given_order() {
        let ratings = bars(&[("TV-MA", 5), ("PG", 2)]);
        let svg = vertical_bars("Ratings", "rating", &ratings, &[]).unwrap();
        let ma = svg.find("TV-MA").unwrap();
        let pg = svg.find(">PG<").unwrap();
        assert!(ma < pg);
    }
}
