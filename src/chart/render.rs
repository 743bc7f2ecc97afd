//! Draws the spending histogram as an SVG image.

use plotters::{
    coord::Shift,
    drawing::DrawingAreaErrorKind,
    prelude::{
        BLACK, ChartBuilder, Color, DrawingArea, DrawingBackend, IntoDrawingArea, Rectangle,
        SVGBackend, WHITE,
    },
};

use crate::{Error, chart::histogram::Histogram};

/// The size of the chart image in pixels.
pub(super) const CHART_SIZE: (u32, u32) = (1200, 800);

/// The fraction of a bucket's width covered by its bar.
const BAR_WIDTH_RATIO: f64 = 0.86;

/// Too many x axis labels overlap, beyond this plotters picks a subset.
const MAX_X_LABELS: usize = 25;

/// Render `histogram` to an SVG document.
///
/// # Errors
/// Returns an [Error::ChartError] if the chart could not be drawn.
pub(super) fn render_histogram_svg(histogram: &Histogram) -> Result<String, Error> {
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, CHART_SIZE).into_drawing_area();

        draw_histogram(&root, histogram).map_err(|error| Error::ChartError(error.to_string()))?;

        root.present()
            .map_err(|error| Error::ChartError(error.to_string()))?;
    }

    Ok(buffer)
}

fn draw_histogram<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    histogram: &Histogram,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let x_max = histogram.upper_edge() as f64;
    let y_max = histogram.max_count() + 1;

    let mut chart = ChartBuilder::on(root)
        .caption("Spending Distribution Analysis", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0u32..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Amount Range ($)")
        .y_desc("Frequency")
        .x_labels(histogram.edges.len().min(MAX_X_LABELS))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_labels(y_max as usize + 1)
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .draw()?;

    let bars = histogram
        .buckets()
        .filter(|bucket| bucket.count > 0)
        .map(|bucket| {
            let start = bucket.start as f64;
            let end = bucket.end as f64;
            let gap = (end - start) * (1.0 - BAR_WIDTH_RATIO) / 2.0;

            Rectangle::new(
                [(start + gap, 0), (end - gap, bucket.count)],
                BLACK.mix(0.9).filled(),
            )
        });

    chart.draw_series(bars)?;

    Ok(())
}
