use serde::Serialize;

use super::figure::Figure;
use super::overlay::ClusterOverlay;
use super::PageError;
use crate::camera::{CameraFrame, CameraPath};
use crate::config::PageConfig;

/// JSON safe to drop inside a `<script>` element
pub(crate) fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, PageError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Render the full standalone page
///
/// The page plots the figure, then on each button press applies the
/// overlay once and replays the camera frames, one per animation frame.
pub fn render_html(
    figure: &Figure,
    overlay: &ClusterOverlay,
    path: &CameraPath,
    page: &PageConfig,
) -> Result<String, PageError> {
    let frames: Vec<CameraFrame> = path.to_vec();

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{plotly_src}"></script>
    <style>
        html, body {{
            margin: 0;
            padding: 0;
            height: 100%;
            width: 100%;
            overflow: hidden;
            background-color: {background};
            color: {foreground};
        }}
        #plotly-div {{
            width: 100vw;
            height: 100vh;
        }}
        #rotate-button {{
            position: absolute;
            top: 10px;
            left: 10px;
            z-index: 100;
            padding: 10px 20px;
            font-size: 16px;
        }}
    </style>
</head>
<body>
    <button id="rotate-button">{button_label}</button>
    <div id="plotly-div"></div>
    <script>
        var fig = {figure};
        var overlay = {overlay};
        var cameraFrames = {frames};
        var clusteringApplied = false;
        var animationHandle = null;

        // Manual rotation is disabled; the camera only moves on playback.
        document.getElementById('plotly-div').onmousedown = function(e) {{
            e.preventDefault();
        }};
        Plotly.newPlot('plotly-div', fig.data, fig.layout);

        document.getElementById('rotate-button').addEventListener('click', function() {{
            if (!clusteringApplied) {{
                Plotly.restyle('plotly-div', {{'marker.color': [overlay.marker_colors]}}, [0]);
                Plotly.addTraces('plotly-div', overlay.lines);
                Plotly.addTraces('plotly-div', overlay.centroids);
                clusteringApplied = true;
            }}
            if (animationHandle !== null) {{
                cancelAnimationFrame(animationHandle);
                animationHandle = null;
            }}
            var step = 0;
            function animate() {{
                if (step < cameraFrames.length) {{
                    Plotly.relayout('plotly-div', 'scene.camera.eye', cameraFrames[step]);
                    step++;
                    animationHandle = requestAnimationFrame(animate);
                }} else {{
                    animationHandle = null;
                }}
            }}
            animate();
        }});
    </script>
</body>
</html>
"#,
        title = html_escape::encode_text(&page.title),
        plotly_src = html_escape::encode_double_quoted_attribute(&page.plotly_src),
        background = html_escape::encode_text(&page.background),
        foreground = html_escape::encode_text(&page.foreground),
        button_label = html_escape::encode_text(&page.button_label),
        figure = script_json(figure)?,
        overlay = script_json(overlay)?,
        frames = script_json(&frames)?,
    ))
}
