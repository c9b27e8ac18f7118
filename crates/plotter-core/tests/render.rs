// File: crates/plotter-core/tests/render.rs
// Purpose: End-to-end render scenarios checked against the recorded primitive stream.

use approx::assert_relative_eq;
use plotter_core::{
    Axis, AxisYPosition, Canvas, ChartConfig, ChartError, DisplayOptions, Plotter, QueryResult,
    Series, TimeFormatter,
};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Begin(String),
    End,
    Line { x1: f64, y1: f64, x2: f64, y2: f64, class: String },
    Text { x: f64, y: f64, text: String, class: Option<String> },
    Path { points: Vec<(f64, f64)>, class: String },
    Point { x: f64, y: f64, radius: f64, class: String },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Canvas for Recorder {
    fn begin_group(&mut self, class: &str) { self.ops.push(Op::Begin(class.to_string())); }
    fn end_group(&mut self) { self.ops.push(Op::End); }
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, class: &str) {
        self.ops.push(Op::Line { x1, y1, x2, y2, class: class.to_string() });
    }
    fn draw_text(&mut self, x: f64, y: f64, text: &str, class: Option<&str>) {
        self.ops.push(Op::Text { x, y, text: text.to_string(), class: class.map(str::to_string) });
    }
    fn draw_path(&mut self, points: &[(f64, f64)], class: &str) {
        self.ops.push(Op::Path { points: points.to_vec(), class: class.to_string() });
    }
    fn draw_point(&mut self, x: f64, y: f64, radius: f64, class: &str) {
        self.ops.push(Op::Point { x, y, radius, class: class.to_string() });
    }
}

impl Recorder {
    /// Primitives inside the first group named `class`.
    fn group(&self, class: &str) -> &[Op] {
        let start = self.ops.iter().position(|op| *op == Op::Begin(class.to_string()))
            .unwrap_or_else(|| panic!("no group {class}")) + 1;
        let len = self.ops[start..].iter().position(|op| *op == Op::End).expect("group closed");
        &self.ops[start..start + len]
    }

    fn paths(&self) -> Vec<&Vec<(f64, f64)>> {
        self.ops.iter().filter_map(|op| match op { Op::Path { points, .. } => Some(points), _ => None }).collect()
    }

    fn points(&self) -> Vec<(f64, f64)> {
        self.ops.iter().filter_map(|op| match op { Op::Point { x, y, .. } => Some((*x, *y)), _ => None }).collect()
    }
}

fn lines(ops: &[Op]) -> usize { ops.iter().filter(|op| matches!(op, Op::Line { .. })).count() }

fn texts(ops: &[Op]) -> Vec<(f64, String, Option<String>)> {
    ops.iter()
        .filter_map(|op| match op { Op::Text { x, text, class, .. } => Some((*x, text.clone(), class.clone())), _ => None })
        .collect()
}

fn basic_result() -> QueryResult {
    QueryResult::new("none").with_series(Series::try_new(vec![0.0, 1.0, 2.0], vec![10.0, 20.0, 30.0]).unwrap())
}

fn record(options: DisplayOptions, result: &QueryResult) -> (Plotter, Recorder) {
    let mut plotter = Plotter::new(ChartConfig::default(), options).expect("valid config");
    let mut rec = Recorder::default();
    plotter.render_with(result, &mut rec).expect("render");
    (plotter, rec)
}

#[test]
fn basic_series_scenario() {
    let (plotter, rec) = record(DisplayOptions::default(), &basic_result());

    assert_eq!((plotter.y_domain().min(), plotter.y_domain().max()), (Some(10.0), Some(30.0)));
    assert_eq!((plotter.x_domain().min(), plotter.x_domain().max()), (Some(0.0), Some(2.0)));

    let paths = rec.paths();
    assert_eq!(paths.len(), 1);
    let path = paths[0];
    assert_eq!(path.len(), 3);
    assert!(path.windows(2).all(|w| w[0].0 < w[1].0), "x strictly ascending");

    let expected = [(50.0, 163.0), (644.5, 86.5), (1239.0, 10.0)];
    for (got, want) in path.iter().zip(expected) {
        assert_relative_eq!(got.0, want.0, epsilon = 1e-9);
        assert_relative_eq!(got.1, want.1, epsilon = 1e-9);
    }
    assert!(rec.points().is_empty());
}

#[test]
fn gridline_counts() {
    let (_, rec) = record(DisplayOptions::default(), &basic_result());
    assert_eq!(lines(rec.group("axis x")), 11);
    assert_eq!(lines(rec.group("axis y")), 6);

    let cfg = ChartConfig { x_ticks_count: 4, y_ticks_count: 2, ..ChartConfig::default() };
    let mut plotter = Plotter::new(cfg, DisplayOptions::default()).unwrap();
    let mut rec = Recorder::default();
    plotter.render_with(&basic_result(), &mut rec).unwrap();
    assert_eq!(lines(rec.group("axis x")), 3);
    assert_eq!(lines(rec.group("axis y")), 3);
}

#[test]
fn outside_labels_cover_every_gridline() {
    let (_, rec) = record(DisplayOptions::default(), &basic_result());
    let labels = texts(rec.group("axis y"));
    let text: Vec<&str> = labels.iter().map(|(_, t, _)| t.as_str()).collect();
    assert_eq!(text, ["30", "26", "22", "18", "14", "10"]);
    assert!(labels.iter().all(|(x, _, class)| *x == 42.0 && class.as_deref() == Some("outside")));
}

#[test]
fn inside_labels_skip_the_last_index() {
    let opts = DisplayOptions::default().with_axis_y_position(AxisYPosition::Inside);
    let (_, rec) = record(opts, &basic_result());
    let labels = texts(rec.group("axis y"));
    let text: Vec<&str> = labels.iter().map(|(_, t, _)| t.as_str()).collect();
    // i == y_ticks_count is the bottom gridline (the domain minimum)
    assert_eq!(text, ["30", "26", "22", "18", "14"]);
    assert!(labels.iter().all(|(x, _, class)| *x == 4.0 && class.as_deref() == Some("inside")));
    assert_eq!(lines(rec.group("axis y")), 6);
}

#[test]
fn x_labels_follow_their_screen_fraction() {
    struct Plain;
    impl TimeFormatter for Plain {
        fn format_time(&self, t: f64, _span: f64) -> String { format!("t={t}") }
    }

    // eighths are exact in binary, so label i is exactly i
    let series = Series::from_pairs((0..=8).map(|i| (i as f64, i as f64)));
    let result = QueryResult::new("none").with_series(series);
    let cfg = ChartConfig { x_ticks_count: 8, ..ChartConfig::default() };
    let mut plotter = Plotter::new(cfg, DisplayOptions::default())
        .unwrap()
        .with_time_formatter(Plain);
    let mut rec = Recorder::default();
    plotter.render_with(&result, &mut rec).unwrap();

    let labels: Vec<String> = texts(rec.group("axis x")).into_iter().map(|(_, t, _)| t).collect();
    let want: Vec<String> = (1..8).map(|i| format!("t={}", i as f64)).collect();
    assert_eq!(labels, want);
}

#[test]
fn union_domain_for_series_of_different_lengths() {
    let a = Series::try_new(vec![0.0, 1.0, 2.0], vec![10.0, 20.0, 30.0]).unwrap();
    let b = Series::try_new(vec![-1.0, 4.0], vec![5.0, 50.0]).unwrap();

    let forward = QueryResult::new("none").with_series(a.clone()).with_series(b.clone());
    let (p1, rec) = record(DisplayOptions::default(), &forward);
    assert_eq!((p1.x_domain().min(), p1.x_domain().max()), (Some(-1.0), Some(4.0)));
    assert_eq!((p1.y_domain().min(), p1.y_domain().max()), (Some(5.0), Some(50.0)));
    let counts: Vec<usize> = rec.paths().iter().map(|p| p.len()).collect();
    assert_eq!(counts, [3, 2]);

    let reversed = QueryResult::new("none").with_series(b).with_series(a);
    let (p2, _) = record(DisplayOptions::default(), &reversed);
    assert_eq!(p1.x_domain(), p2.x_domain());
    assert_eq!(p1.y_domain(), p2.y_domain());
}

#[test]
fn single_sample_renders_centered() {
    let result = QueryResult::new("none").with_series(Series::try_new(vec![5.0], vec![5.0]).unwrap());
    let (plotter, rec) = record(DisplayOptions::default().with_points(true), &result);

    assert!(plotter.x_domain().is_degenerate());
    assert!(plotter.y_domain().is_degenerate());
    assert_eq!(rec.paths()[0].as_slice(), &[(644.5, 86.5)]);
    assert_eq!(rec.points(), vec![(644.5, 86.5)]);

    let labels = texts(rec.group("axis y"));
    assert!(labels.iter().all(|(_, t, _)| t == "5"));
}

#[test]
fn points_match_line_vertices() {
    let (_, rec) = record(DisplayOptions::default().with_points(true), &basic_result());
    let points = rec.points();
    assert_eq!(points.len(), 3);
    assert_eq!(points.as_slice(), rec.paths()[0].as_slice());
    assert!(rec.ops.iter().all(|op| !matches!(op, Op::Point { radius, class, .. } if *radius != 3.0 || class != "point")));
}

#[test]
fn primitives_come_in_fixed_order() {
    let (_, rec) = record(DisplayOptions::default().with_borders().with_points(true), &basic_result());

    let borders: Vec<&Op> = rec.ops.iter().take_while(|op| !matches!(op, Op::Begin(_))).collect();
    assert_eq!(borders.len(), 4);
    assert_eq!(
        borders[0],
        &Op::Line { x1: 50.0, y1: 10.0, x2: 1239.0, y2: 10.0, class: "border".into() }
    );
    assert_eq!(
        borders[3],
        &Op::Line { x1: 50.0, y1: 10.0, x2: 50.0, y2: 163.0, class: "border".into() }
    );

    let groups: Vec<&str> = rec.ops.iter()
        .filter_map(|op| match op { Op::Begin(c) => Some(c.as_str()), _ => None })
        .collect();
    assert_eq!(groups, ["axis x", "axis y", "series series-0"]);

    let series = rec.group("series series-0");
    assert!(matches!(series[0], Op::Path { .. }));
    assert!(series[1..].iter().all(|op| matches!(op, Op::Point { .. })));
}

#[test]
fn no_borders_by_default() {
    let (_, rec) = record(DisplayOptions::default(), &basic_result());
    assert!(matches!(rec.ops[0], Op::Begin(ref c) if c == "axis x"));
}

#[test]
fn malformed_series_aborts() {
    let mut result = basic_result();
    result.add_series(Series { time: vec![0.0, 1.0, 2.0], values: vec![1.0, 2.0] });
    let mut plotter = Plotter::new(ChartConfig::default(), DisplayOptions::default()).unwrap();
    let mut rec = Recorder::default();
    let err = plotter.render_with(&result, &mut rec).unwrap_err();
    assert_eq!(err, ChartError::MalformedSeries { index: 1, time_len: 3, values_len: 2 });
    assert!(rec.ops.is_empty(), "nothing drawn on failure");

    assert!(Series::try_new(vec![1.0], vec![]).is_err());
}

#[test]
fn empty_result_is_uninitialized() {
    let mut plotter = Plotter::new(ChartConfig::default(), DisplayOptions::default()).unwrap();
    let err = plotter.render(&QueryResult::new("none")).unwrap_err();
    assert_eq!(err, ChartError::UninitializedDomain { axis: Axis::X });

    let only_empty = QueryResult::new("none").with_series(Series::default());
    assert!(plotter.render(&only_empty).is_err());
}

#[test]
fn empty_series_draws_an_empty_path() {
    let result = basic_result().with_series(Series::default());
    let (_, rec) = record(DisplayOptions::default().with_points(true), &result);
    let paths = rec.paths();
    assert_eq!(paths.len(), 2);
    assert!(paths[1].is_empty());
    assert_eq!(rec.points().len(), 3);
}

#[test]
fn non_finite_samples_are_skipped() {
    let series = Series::try_new(
        vec![0.0, 1.0, 2.0, 3.0, f64::NAN],
        vec![10.0, f64::NAN, 30.0, f64::INFINITY, 20.0],
    ).unwrap();
    let result = QueryResult::new("none").with_series(series);
    let (plotter, rec) = record(DisplayOptions::default().with_points(true), &result);

    assert_eq!((plotter.y_domain().min(), plotter.y_domain().max()), (Some(10.0), Some(30.0)));
    assert_eq!((plotter.x_domain().min(), plotter.x_domain().max()), (Some(0.0), Some(3.0)));
    assert_eq!(rec.paths()[0].len(), 2);
    assert_eq!(rec.points().len(), 2);

    let mut plotter = Plotter::new(ChartConfig::default(), DisplayOptions::default().with_points(true)).unwrap();
    let svg = plotter.render(&result).unwrap();
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
}

#[test]
fn reused_plotter_does_not_leak_domains() {
    let mut plotter = Plotter::new(ChartConfig::default(), DisplayOptions::default()).unwrap();
    plotter.render(&basic_result()).unwrap();

    let second = QueryResult::new("none")
        .with_series(Series::try_new(vec![100.0, 200.0], vec![-3.0, -1.0]).unwrap());
    plotter.render(&second).unwrap();
    assert_eq!((plotter.x_domain().min(), plotter.x_domain().max()), (Some(100.0), Some(200.0)));
    assert_eq!((plotter.y_domain().min(), plotter.y_domain().max()), (Some(-3.0), Some(-1.0)));
}

#[test]
fn downsampling_caps_vertices_but_not_domain() {
    let series = Series::from_pairs((0..500).map(|i| (i as f64, (i % 37) as f64)));
    let result = QueryResult::new("none").with_series(series);
    let cfg = ChartConfig { max_points: Some(40), ..ChartConfig::default() };
    let mut plotter = Plotter::new(cfg, DisplayOptions::default()).unwrap();
    let mut rec = Recorder::default();
    plotter.render_with(&result, &mut rec).unwrap();

    assert_eq!(rec.paths()[0].len(), 40);
    assert_eq!((plotter.x_domain().min(), plotter.x_domain().max()), (Some(0.0), Some(499.0)));
    assert_eq!((plotter.y_domain().min(), plotter.y_domain().max()), (Some(0.0), Some(36.0)));
}

#[test]
fn extreme_finite_range_renders_without_nan() {
    let series = Series::try_new(vec![0.0, 1.0, 2.0], vec![-1e308, 0.0, 1e308]).unwrap();
    let result = QueryResult::new("none").with_series(series);
    let (_, rec) = record(DisplayOptions::default().with_points(true), &result);

    let path = rec.paths()[0];
    assert_eq!(path.as_slice(), &[(50.0, 163.0), (644.5, 86.5), (1239.0, 10.0)]);
    assert!(rec.ops.iter().all(|op| match op {
        Op::Line { x1, y1, x2, y2, .. } => [x1, y1, x2, y2].iter().all(|v| v.is_finite()),
        Op::Text { x, y, .. } => x.is_finite() && y.is_finite(),
        _ => true,
    }));

    let mut plotter = Plotter::new(ChartConfig::default(), DisplayOptions::default().with_points(true)).unwrap();
    let svg = plotter.render(&result).unwrap();
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
}
