/// Minimal inline-SVG charts for the dashboard
use leptos::prelude::*;

/// Round the raw maximum up to a friendly axis ceiling (1/2/5 * 10^n).
pub fn nice_ceiling(raw_max: u64) -> u64 {
    if raw_max == 0 {
        return 1;
    }
    let mut magnitude = 1u64;
    while magnitude * 10 <= raw_max {
        magnitude *= 10;
    }
    for step in [1, 2, 5, 10] {
        let candidate = step * magnitude;
        if candidate >= raw_max {
            return candidate;
        }
    }
    10 * magnitude
}

/// Pixel height of one bar within `area_height`.
pub fn bar_height(value: u64, ceiling: u64, area_height: f64) -> f64 {
    if ceiling == 0 {
        return 0.0;
    }
    area_height * value as f64 / ceiling as f64
}

/// Vertical bar chart with labels under each bar and values on top.
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<(String, u64)>>,
    #[prop(default = 160.0)] height: f64,
    #[prop(default = "#2563eb")] color: &'static str,
) -> impl IntoView {
    let bar_width = 34.0;
    let gap = 18.0;
    let label_area = 22.0;
    let value_area = 16.0;

    view! {
        {move || {
            let points = data.get();
            if points.is_empty() {
                return view! {
                    <div style="color: #888; font-size: 14px; padding: 24px 0; text-align: center;">
                        "No data yet."
                    </div>
                }.into_any();
            }

            let ceiling = nice_ceiling(points.iter().map(|(_, v)| *v).max().unwrap_or(0));
            let width = points.len() as f64 * (bar_width + gap) + gap;
            let total_height = height + label_area + value_area;
            let area_height = height;

            let bars = points
                .iter()
                .enumerate()
                .map(|(i, (label, value))| {
                    let h = bar_height(*value, ceiling, area_height);
                    let x = gap + i as f64 * (bar_width + gap);
                    let y = value_area + (area_height - h);
                    let center = x + bar_width / 2.0;
                    view! {
                        <rect x=x y=y width=bar_width height=h rx="3" fill=color/>
                        <text
                            x=center
                            y=y - 4.0
                            text-anchor="middle"
                            font-size="11"
                            fill="#444"
                        >
                            {value.to_string()}
                        </text>
                        <text
                            x=center
                            y=total_height - 6.0
                            text-anchor="middle"
                            font-size="11"
                            fill="#666"
                        >
                            {label.clone()}
                        </text>
                    }
                })
                .collect_view();

            view! {
                <svg
                    width=width
                    height=total_height
                    viewBox=format!("0 0 {} {}", width, total_height)
                    role="img"
                >
                    {bars}
                </svg>
            }.into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_rounds_to_friendly_steps() {
        assert_eq!(nice_ceiling(0), 1);
        assert_eq!(nice_ceiling(1), 1);
        assert_eq!(nice_ceiling(3), 5);
        assert_eq!(nice_ceiling(7), 10);
        assert_eq!(nice_ceiling(42), 50);
        assert_eq!(nice_ceiling(100), 100);
        assert_eq!(nice_ceiling(101), 200);
    }

    #[test]
    fn bar_height_scales_linearly() {
        assert_eq!(bar_height(5, 10, 100.0), 50.0);
        assert_eq!(bar_height(0, 10, 100.0), 0.0);
        assert_eq!(bar_height(10, 10, 100.0), 100.0);
    }
}
