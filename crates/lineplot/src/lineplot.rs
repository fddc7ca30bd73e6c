pub type Color = String;

pub type Point = (f64, f64);

#[derive(Debug, PartialEq, Clone)]
pub struct Series {
    pub label: String,
    pub color: Color,
    pub segments: Vec<Vec<Point>>,
}

impl Series {
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.segments.iter().flatten()
    }
}

#[derive(Debug, Clone)]
pub struct LinePlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl LinePlot {
    /// Smallest box containing every point, or `None` for a chart without points.
    pub fn bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut points = self
            .series
            .iter()
            .flat_map(|s| s.points())
            .filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = points.next()?;
        let init = ((x0, x0), (y0, y0));
        Some(points.fold(init, |((xmin, xmax), (ymin, ymax)), &(x, y)| {
            ((xmin.min(x), xmax.max(x)), (ymin.min(y), ymax.max(y)))
        }))
    }
}
