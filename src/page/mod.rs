mod error;
mod figure;
mod overlay;
mod template;


pub use error::PageError;
pub use figure::{base_figure, point_hover_text, Figure, Marker, MarkerColor, Trace};
pub use overlay::ClusterOverlay;
pub use template::render_html;

use crate::camera::CameraPath;
use crate::clusterer::ClusterResult;
use crate::config::Config;
use crate::dataset::Dataset;

/// Build the figure and overlay, then render the page
pub fn render(
    dataset: &Dataset,
    result: &ClusterResult,
    path: &CameraPath,
    config: &Config,
) -> Result<String, PageError> {
    let figure = base_figure(dataset.points(), &config.animation, &config.page);
    let overlay = ClusterOverlay::build(dataset.points(), result, &config.page)?;
    let html = render_html(&figure, &overlay, path, &config.page)?;

    tracing::debug!(bytes = html.len(), frames = path.len(), "page rendered");
    Ok(html)
}
