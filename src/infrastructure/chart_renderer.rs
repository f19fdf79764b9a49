// Chart rendering - draws a Chart to an SVG or PNG file with plotters
use crate::application::chart_service::Chart;
use crate::domain::axis::Tick;
use crate::domain::series::PlayerSeries;
use anyhow::Result;
use chrono::{NaiveDate, TimeDelta, Utc};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    /// Case-insensitive. Unknown names fall back to SVG.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "svg" => OutputFormat::Svg,
            "png" => OutputFormat::Png,
            _ => {
                tracing::warn!("Desired extension '{}' not matched. Using svg.", name);
                OutputFormat::Svg
            }
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

pub fn output_path(base_name: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", base_name, format.extension()))
}

pub fn render_chart(chart: &Chart, path: &Path, format: OutputFormat, size: (u32, u32)) -> Result<()> {
    match format {
        OutputFormat::Svg => draw_chart(SVGBackend::new(path, size).into_drawing_area(), chart),
        OutputFormat::Png => draw_chart(BitMapBackend::new(path, size).into_drawing_area(), chart),
    }
}

fn draw_chart<DB>(root: DrawingArea<DB, Shift>, chart: &Chart) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (x_start, x_end) = date_range(&chart.series);
    let ticks = chart.axis.ticks();
    let (y_start, y_end) = value_range(&ticks);

    let mut ctx = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(RangedDate::from(x_start..x_end), y_start..y_end)?;

    // Y labels are drawn by hand so they land exactly on the computed ticks
    ctx.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_label_formatter(&|_| String::new())
        .x_labels(6)
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
        .x_desc("Date")
        .y_desc(chart.y_title.as_str())
        .draw()?;

    for value in chart.axis.grid_lines() {
        ctx.draw_series(std::iter::once(PathElement::new(
            vec![(x_start, value), (x_end, value)],
            BLACK.mix(0.2).stroke_width(1),
        )))?;
    }

    let label_style = TextStyle::from(("sans-serif", 14).into_font()).pos(Pos::new(HPos::Right, VPos::Center));
    for tick in ticks {
        let (x, y) = ctx.backend_coord(&(x_start, tick.value));
        root.draw(&Text::new(tick.label, (x - 6, y), label_style.clone()))?;
    }

    for (idx, series) in chart.series.iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        ctx.draw_series(LineSeries::new(
            series.points.iter().map(|p| (p.date, p.value as f64)),
            color.stroke_width(2),
        ))?
        .label(series.label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    if !chart.series.is_empty() {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    tracing::debug!("Rendered {} series", chart.series.len());
    Ok(())
}

/// Span of all series dates. An empty chart gets a one-day window around today.
fn date_range(series: &[PlayerSeries]) -> (NaiveDate, NaiveDate) {
    let start = series.iter().filter_map(PlayerSeries::first_date).min();
    let end = series.iter().filter_map(PlayerSeries::last_date).max();

    match (start, end) {
        (Some(start), Some(end)) if start < end => (start, end),
        (Some(start), _) => (start, start + TimeDelta::days(1)),
        _ => {
            let today = Utc::now().date_naive();
            (today, today + TimeDelta::days(1))
        }
    }
}

fn value_range(ticks: &[Tick]) -> (f64, f64) {
    let start = ticks.first().map(|t| t.value).unwrap_or(0.0);
    let end = ticks.last().map(|t| t.value).unwrap_or(0.0);
    if end > start { (start, end) } else { (start, start + 1.0) }
}
