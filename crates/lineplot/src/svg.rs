use crate::lineplot::{LinePlot, Point, Series};

const WIDTH: f64 = 900.0;
const HEIGHT: f64 = 520.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 190.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TARGET_TICKS: usize = 8;
const FONT: &str = r#"font-family="sans-serif""#;

pub fn generate_string(plot: &LinePlot) -> String {
    let mut generator = Generator::new(plot);
    generator.generate(plot);
    generator.out
}

struct Frame {
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Frame {
    fn from_plot(plot: &LinePlot) -> Self {
        let ((xmin, xmax), (ymin, ymax)) = plot.bounds().unwrap_or(((0.0, 1.0), (0.0, 1.0)));
        let x_range = widen(xmin, xmax);
        let (ymin, ymax) = widen(ymin, ymax);
        let pad = (ymax - ymin) * 0.05;
        Self {
            x_range,
            y_range: (ymin - pad, ymax + pad),
        }
    }

    fn to_x(&self, x: f64) -> f64 {
        let (lo, hi) = self.x_range;
        MARGIN_LEFT + (x - lo) / (hi - lo) * plot_width()
    }

    fn to_y(&self, y: f64) -> f64 {
        let (lo, hi) = self.y_range;
        MARGIN_TOP + (hi - y) / (hi - lo) * plot_height()
    }
}

fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

// Degenerate ranges get a unit-wide window around the single value
fn widen(lo: f64, hi: f64) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

struct Generator {
    frame: Frame,
    out: String,
}

impl Generator {
    fn new(plot: &LinePlot) -> Self {
        Self {
            frame: Frame::from_plot(plot),
            out: String::new(),
        }
    }

    fn generate(&mut self, plot: &LinePlot) {
        self.start_svg();
        self.add_background();
        self.plot_x_axis(&plot.x_label);
        self.plot_y_axis(&plot.y_label);
        self.add_frame();

        for series in &plot.series {
            self.plot_series(series);
        }

        self.plot_legend(&plot.series);
        self.plot_title(&plot.title);
        self.end_svg();
    }

    fn line(&mut self, line: String) {
        self.out.push_str(&line);
        self.out.push('\n');
    }

    fn start_svg(&mut self) {
        self.line(r#"<?xml version="1.0"?>"#.to_string());
        self.line(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
        ));
    }

    fn end_svg(&mut self) {
        self.line("</svg>".to_string());
    }

    fn add_background(&mut self) {
        self.line(r#"<rect width="100%" height="100%" fill="white"/>"#.to_string());
    }

    fn add_frame(&mut self) {
        let (w, h) = (plot_width(), plot_height());
        self.line(format!(
            r##"<rect x="{MARGIN_LEFT}" y="{MARGIN_TOP}" width="{w}" height="{h}" fill="none" stroke="#000000" stroke-width="1"/>"##
        ));
    }

    fn plot_x_axis(&mut self, label: &str) {
        let (lo, hi) = self.frame.x_range;
        let y_bottom = MARGIN_TOP + plot_height();
        for (value, text) in ticks(lo, hi, TARGET_TICKS) {
            let x = self.frame.to_x(value);
            self.line(format!(
                r##"<line x1="{x}" y1="{MARGIN_TOP}" x2="{x}" y2="{y_bottom}" stroke="#E5E5E5" stroke-width="1"/>"##
            ));
            self.line(format!(
                r##"<line x1="{x}" y1="{y_bottom}" x2="{x}" y2="{}" stroke="#000000" stroke-width="1"/>"##,
                y_bottom + 5.0
            ));
            self.line(format!(
                r#"<text x="{x}" y="{}" {FONT} font-size="12px" text-anchor="middle">{text}</text>"#,
                y_bottom + 20.0
            ));
        }

        let x_mid = MARGIN_LEFT + plot_width() / 2.0;
        self.line(format!(
            r#"<text x="{x_mid}" y="{}" {FONT} font-size="14px" text-anchor="middle">{}</text>"#,
            HEIGHT - 15.0,
            escape(label)
        ));
    }

    fn plot_y_axis(&mut self, label: &str) {
        let (lo, hi) = self.frame.y_range;
        let x_right = MARGIN_LEFT + plot_width();
        for (value, text) in ticks(lo, hi, TARGET_TICKS) {
            let y = self.frame.to_y(value);
            self.line(format!(
                r##"<line x1="{MARGIN_LEFT}" y1="{y}" x2="{x_right}" y2="{y}" stroke="#E5E5E5" stroke-width="1"/>"##
            ));
            self.line(format!(
                r##"<line x1="{}" y1="{y}" x2="{MARGIN_LEFT}" y2="{y}" stroke="#000000" stroke-width="1"/>"##,
                MARGIN_LEFT - 5.0
            ));
            self.line(format!(
                r#"<text x="{}" y="{}" {FONT} font-size="12px" text-anchor="end">{text}</text>"#,
                MARGIN_LEFT - 8.0,
                y + 4.0
            ));
        }

        let y_mid = MARGIN_TOP + plot_height() / 2.0;
        self.line(format!(
            r#"<text x="20" y="{y_mid}" {FONT} font-size="14px" text-anchor="middle" transform="rotate(-90 20 {y_mid})">{}</text>"#,
            escape(label)
        ));
    }

    fn plot_series(&mut self, series: &Series) {
        for segment in &series.segments {
            let points: Vec<Point> = segment
                .iter()
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|&(x, y)| (self.frame.to_x(x), self.frame.to_y(y)))
                .collect();
            match points.as_slice() {
                [] => {}
                [(x, y)] => self.line(format!(
                    r#"<circle cx="{x}" cy="{y}" r="2" fill="{}"/>"#,
                    series.color
                )),
                _ => {
                    let encoded = points
                        .iter()
                        .map(|(x, y)| format!("{x:.2},{y:.2}"))
                        .collect::<Vec<_>>()
                        .join(" ");
                    self.line(format!(
                        r#"<polyline points="{encoded}" fill="none" stroke="{}" stroke-width="2"/>"#,
                        series.color
                    ));
                }
            }
        }
    }

    fn plot_legend(&mut self, series: &[Series]) {
        let x = WIDTH - MARGIN_RIGHT + 15.0;
        let mut y = MARGIN_TOP + 10.0;
        for s in series {
            self.line(format!(
                r#"<line x1="{x}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="3"/>"#,
                x + 24.0,
                s.color
            ));
            self.line(format!(
                r#"<text x="{}" y="{}" {FONT} font-size="13px">{}</text>"#,
                x + 30.0,
                y + 4.0,
                escape(&s.label)
            ));
            y += 22.0;
        }
    }

    fn plot_title(&mut self, title: &str) {
        let x_mid = MARGIN_LEFT + plot_width() / 2.0;
        self.line(format!(
            r#"<text x="{x_mid}" y="{}" {FONT} font-size="16px" font-weight="bold" text-anchor="middle">{}</text>"#,
            MARGIN_TOP - 18.0,
            escape(title)
        ));
    }
}

/// Round tick positions within `[lo, hi]` with their printed labels.
fn ticks(lo: f64, hi: f64, target: usize) -> Vec<(f64, String)> {
    let step = tick_step(hi - lo, target);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    let first = (lo / step).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|i| {
            let value = i as f64 * step;
            (value, format!("{:.*}", decimals, value))
        })
        .collect()
}

fn tick_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    nice * magnitude
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
