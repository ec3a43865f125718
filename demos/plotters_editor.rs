extern crate plotters;
use plotters::prelude::*;

use knotpad::{Canvas, CurveSettings, Frame, InteractionController, PointerButton};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// Flattens each frame into plain coordinate lists, the way a GPU adapter would
/// fill its vertex buffers. The last frame is plotted at the end.
#[derive(Default)]
struct Snapshot {
    redraws: usize,
    markers: Vec<((f64, f64), bool)>,
    polygon: Vec<(f64, f64)>,
    curve_points: Vec<(f64, f64)>,
    curve_line: Vec<(f64, f64)>,
}

impl Canvas<f64> for Snapshot {
    fn redraw(&mut self, frame: &Frame<'_, f64>) {
        self.redraws += 1;
        self.markers = frame
            .control_point_markers()
            .unwrap_or_default()
            .iter()
            .map(|p| ((p.x, p.y), p.selected))
            .collect();
        self.polygon = frame
            .control_polygon()
            .unwrap_or_default()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        self.curve_points = frame
            .curve_points()
            .unwrap_or_default()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        self.curve_line = frame
            .curve_line()
            .unwrap_or_default()
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let mut editor: InteractionController = InteractionController::new(CurveSettings::new(3, 40)?);
    let mut canvas = Snapshot::default();

    // place points, show the curve and the control polygon
    for (x, y) in [(60.0, 80.0), (140.0, 380.0), (300.0, 420.0), (380.0, 120.0), (560.0, 260.0)] {
        editor.click(x, y, &mut canvas);
    }
    editor.toggle_curve(&mut canvas);
    editor.toggle_control_polygon(&mut canvas);
    editor.toggle_curve_line(&mut canvas);

    // hover the fourth point, then drag it down
    editor.pointer_move(382.0, 118.0, &mut canvas);
    editor.pointer_down(PointerButton::Primary);
    editor.pointer_move(420.0, 60.0, &mut canvas);
    editor.pointer_up(PointerButton::Primary);
    editor.click(420.0, 60.0, &mut canvas);

    println!("{} redraws", canvas.redraws);

    let root = BitMapBackend::new("knotpad_editor.png", (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Clamped B-spline, order 3", ("sans-serif", 21).into_font())
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0.0..WIDTH as f64, 0.0..HEIGHT as f64)?;

    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(canvas.polygon.clone(), &BLACK))?
        .label("Control Polygon")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .draw_series(LineSeries::new(canvas.curve_line.clone(), &RED))?
        .label("C(t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart.draw_series(
        canvas
            .curve_points
            .iter()
            .map(|&coord| Circle::new(coord, 2, RED.filled())),
    )?;

    chart.draw_series(canvas.markers.iter().map(|&(coord, selected)| {
        let color = if selected { YELLOW.mix(0.9) } else { BLACK.mix(1.0) };
        Circle::new(coord, 5, color.filled())
    }))?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
