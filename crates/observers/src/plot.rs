//! Response chart for Newmark runs.
//!
//! See [`ResponsePlot`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use newmark_core::Observer;
use newmark_solvers::transient::newmark::{Sample, Trajectory};

use crate::traits::HasSample;

/// One of the response quantities that can be charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    Displacement,
    Velocity,
    Acceleration,
}

impl Trace {
    /// All traces, in legend order.
    pub const ALL: [Trace; 3] = [Self::Displacement, Self::Velocity, Self::Acceleration];

    /// Returns the legend label, including units.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Displacement => "Displacement (m)",
            Self::Velocity => "Velocity (m/s)",
            Self::Acceleration => "Acceleration (m/s²)",
        }
    }

    fn value(self, sample: &Sample) -> f64 {
        match self {
            Self::Displacement => sample.displacement,
            Self::Velocity => sample.velocity,
            Self::Acceleration => sample.acceleration,
        }
    }
}

/// Configuration for rendering a [`ResponsePlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Newmark-β").legend().only(&[Trace::Displacement]))?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    traces: Vec<Trace>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, all traces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            traces: Trace::ALL.to_vec(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Restricts the chart to the given traces.
    #[must_use]
    pub fn only(mut self, traces: &[Trace]) -> Self {
        self.traces = traces.to_vec();
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// An observer that collects the response during a run and charts it via egui.
///
/// Pass `&mut ResponsePlot` as the solver observer, or fill it from a finished
/// trajectory with [`ResponsePlot::from_trajectory`]. Call
/// [`show`][ResponsePlot::show] to render the result against time.
///
/// # Example
///
/// ```ignore
/// let mut plot = ResponsePlot::new();
/// newmark::solve(&oscillator, scheme, initial, dt, steps, &mut plot)?;
/// plot.show(ShowConfig::new().title("Newmark-β").legend())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponsePlot {
    samples: Vec<Sample>,
}

impl ResponsePlot {
    /// Creates an empty plot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plot holding every sample of a finished trajectory.
    #[must_use]
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        Self {
            samples: trajectory.to_vec(),
        }
    }

    /// Records a single sample.
    pub fn record(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Returns the `[time, value]` points of one trace.
    #[must_use]
    pub fn points(&self, trace: Trace) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.time, trace.value(s)])
            .collect()
    }

    /// Opens a blocking egui window displaying the selected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();
        let traces: Vec<(&'static str, Vec<[f64; 2]>)> = config
            .traces
            .iter()
            .map(|&trace| (trace.label(), self.points(trace)))
            .collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                }))
            }),
        )
    }
}

impl<E: HasSample, A> Observer<E, A> for ResponsePlot {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(*event.sample());
        None
    }
}

/// Allows `&mut ResponsePlot` to be passed to solvers that take an observer
/// by value, so [`ResponsePlot::show`] can be called after the run completes.
impl<E: HasSample, A> Observer<E, A> for &mut ResponsePlot {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(&'static str, Vec<[f64; 2]>)>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("response_plot")
                .x_axis_label("Time (s)")
                .y_axis_label("Response");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let plot_points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(plot_points).name(name));
                }
            });
        });
    }
}
