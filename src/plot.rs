/*!
# Trace plots of a sample sequence

Renders samples as a scatter plot of sample index against sample value, using
[`plotly`]. Enable via the `plot` feature (on by default).

```rust
use metro_walk::plot::trace_plot;

let plot = trace_plot(&[0.0, 0.5, 0.5, -0.5]);
assert!(plot.to_html().contains("Sample index"));
```
*/

use std::path::Path;

use log::info;
use plotly::common::{Marker, Mode, Title};
use plotly::layout::Axis;
use plotly::{Layout, Plot, Scatter};

use crate::error::SamplerError;

/// Builds a markers-only plot with the sample index on the x-axis and the sample value on the y-axis.
pub fn trace_plot(samples: &[f64]) -> Plot {
    let index: Vec<usize> = (0..samples.len()).collect();

    let trace = Scatter::new(index, samples.to_vec())
        .mode(Mode::Markers)
        .marker(Marker::new().size(2))
        .name("Samples");

    let layout = Layout::new()
        .width(1000)
        .height(600)
        .title("Samples generated by Metropolis-Hastings")
        .x_axis(Axis::new().title(Title::from("Sample index")))
        .y_axis(Axis::new().title(Title::from("Sample value")))
        .show_legend(true);

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/**
Writes the trace plot of `samples` as a self-contained HTML file.

# Errors

Returns [`SamplerError::Io`] if the file cannot be written.
*/
pub fn save_trace_plot<P: AsRef<Path>>(samples: &[f64], path: P) -> Result<(), SamplerError> {
    let path = path.as_ref();
    std::fs::write(path, trace_plot(samples).to_html())?;
    info!("saved trace plot of {} samples to {}", samples.len(), path.display());
    Ok(())
}
