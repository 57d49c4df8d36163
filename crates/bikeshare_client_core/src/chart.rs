//! Weekly demand trend shown on the dashboard, and the SVG geometry for it.

/// Sample demand per weekday.
pub const WEEKLY_DEMAND: [(&str, f64); 7] = [
    ("Mon", 120.0),
    ("Tue", 160.0),
    ("Wed", 100.0),
    ("Thu", 140.0),
    ("Fri", 190.0),
    ("Sat", 230.0),
    ("Sun", 210.0),
];

/// Y axis tick spacing.
const TICK_STEP: f64 = 50.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaPath {
    /// `M x,y L x,y ...` along the data.
    pub line: String,
    /// The line closed down to the baseline, for filling.
    pub area: String,
    pub points: Vec<(f64, f64)>,
    /// Value at the top of the plot.
    pub y_max: f64,
}

/// Smallest multiple of the tick step that fits every value.
pub fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    ((max / TICK_STEP).ceil() * TICK_STEP).max(TICK_STEP)
}

/// Tick values from 0 to `y_max` inclusive.
pub fn ticks(y_max: f64) -> Vec<f64> {
    let steps = (y_max / TICK_STEP).round() as usize;
    (0..=steps).map(|i| i as f64 * TICK_STEP).collect()
}

/// Lays `values` out evenly across `width`, with 0 at the bottom of `height`.
pub fn area_path(values: &[f64], width: f64, height: f64) -> AreaPath {
    if values.is_empty() {
        return AreaPath::default();
    }
    let y_max = axis_max(values);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64 * step, height - (v / y_max) * height))
        .collect();

    let mut line = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        line.push_str(&format!("{} {:.1},{:.1} ", cmd, x, y));
    }
    let line = line.trim_end().to_string();
    let last_x = points.last().map(|p| p.0).unwrap_or(0.0);
    let area = format!("{} L {:.1},{:.1} L 0.0,{:.1} Z", line, last_x, height, height);

    AreaPath {
        line,
        area,
        points,
        y_max,
    }
}
