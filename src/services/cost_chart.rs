use plotters::prelude::*;
use thiserror::Error;

use crate::domain::branding::BrandingConfig;
use crate::domain::metrics::DerivedMetrics;

#[derive(Error, Debug)]
pub enum CostChartError {
    #[error("projection is empty")]
    EmptyProjection,
    #[error("failed to render cost chart: {0}")]
    Render(String),
}

const MANUAL_COLOR: RGBColor = RGBColor(160, 160, 160);

// Each year takes three slots on the x axis: manual bar, automation bar, gap.
const SLOTS_PER_YEAR: i32 = 3;

/// Writes a grouped bar chart of manual versus automation cost per projected
/// year. Automation bars use the branding theme color.
pub fn write_cost_chart_png(
    output_path: &str,
    metrics: &DerivedMetrics,
    branding: &BrandingConfig,
) -> Result<(), CostChartError> {
    if metrics.projection.is_empty() {
        return Err(CostChartError::EmptyProjection);
    }
    render_cost_chart_png(output_path, metrics, branding)
}

fn render_cost_chart_png(
    output_path: &str,
    metrics: &DerivedMetrics,
    branding: &BrandingConfig,
) -> Result<(), CostChartError> {
    let projection = &metrics.projection;
    let max_cost = projection
        .iter()
        .map(|year| year.manual_cost.max(year.automation_cost))
        .fold(0.0_f64, f64::max);
    let max_y = if max_cost > 0.0 { max_cost * 1.1 } else { 1.0 };
    let max_x = projection.len() as i32 * SLOTS_PER_YEAR;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CostChartError::Render(e.to_string()))?;

    let caption = format!("{}: Manual vs Automation Cost", branding.vendor_name);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(90)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| CostChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Year")
        .y_desc(format!("Cost ({})", branding.currency_symbol))
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(max_x as usize)
        .x_label_formatter(&|slot| {
            if slot.rem_euclid(SLOTS_PER_YEAR) == 1 {
                format!("Year {}", slot / SLOTS_PER_YEAR + 1)
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|value| format!("{:.0}", value))
        .draw()
        .map_err(|e| CostChartError::Render(e.to_string()))?;

    let theme = branding.theme_color;
    let automation_color = RGBColor(theme.red, theme.green, theme.blue);

    chart
        .draw_series(projection.iter().enumerate().map(|(idx, year)| {
            let x = idx as i32 * SLOTS_PER_YEAR;
            Rectangle::new([(x, 0.0), (x + 1, year.manual_cost)], MANUAL_COLOR.filled())
        }))
        .map_err(|e| CostChartError::Render(e.to_string()))?
        .label("Manual process")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], MANUAL_COLOR.filled()));

    chart
        .draw_series(projection.iter().enumerate().map(|(idx, year)| {
            let x = idx as i32 * SLOTS_PER_YEAR + 1;
            Rectangle::new(
                [(x, 0.0), (x + 1, year.automation_cost)],
                automation_color.filled(),
            )
        }))
        .map_err(|e| CostChartError::Render(e.to_string()))?
        .label("Automation")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], automation_color.filled())
        });

    chart
        .configure_series_labels()
        .background_style(&WHITE)
        .border_style(&BLACK)
        .draw()
        .map_err(|e| CostChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| CostChartError::Render(e.to_string()))?;
    Ok(())
}
