use std::fs;
use std::path::PathBuf;

use semicircle_rs::api::{
    PieChart, PieChartConfig, SectorLayer, SemiCircle, SemiCircleMarker, SemicircleOptions,
    build_layer_frame,
};
use semicircle_rs::core::{LatLng, Point, Projection, SphericalMercator, Viewport};
use semicircle_rs::extensions::DatasetEntry;
use semicircle_rs::render::{NullRenderer, RenderFrame, Renderer, SvgRenderer};
use semicircle_rs::telemetry::init_default_tracing;
use tracing::info;

const GALLERY_CENTER: LatLng = LatLng::new(52.37, 4.89);
const GALLERY_ZOOM: f64 = 15.0;
const VIEWPORT: Viewport = Viewport {
    width: 800,
    height: 600,
};

struct CliArgs {
    svg_output: PathBuf,
    png_output: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let projection = gallery_projection();
    let frame = build_gallery(&projection).map_err(|err| err.to_string())?;

    let mut svg = SvgRenderer::new();
    svg.render(&frame).map_err(|err| err.to_string())?;
    fs::write(&args.svg_output, svg.document()).map_err(|err| {
        format!(
            "failed to write svg `{}`: {err}",
            args.svg_output.display()
        )
    })?;
    info!(
        path = %args.svg_output.display(),
        paths = svg.last_stats().paths_written,
        "wrote svg gallery"
    );

    if let Some(png_output) = args.png_output {
        write_png(&frame, &png_output)?;
    }
    Ok(())
}

fn gallery_projection() -> SphericalMercator {
    let base = SphericalMercator::new(GALLERY_ZOOM);
    let half = Point::new(
        f64::from(VIEWPORT.width) / 2.0,
        f64::from(VIEWPORT.height) / 2.0,
    );
    let origin = base.project(GALLERY_CENTER) - half;
    base.with_pixel_origin(origin)
}

fn offset(lat: f64, lng: f64) -> LatLng {
    LatLng::new(GALLERY_CENTER.lat + lat, GALLERY_CENTER.lng + lng)
}

fn build_gallery(projection: &dyn Projection) -> semicircle_rs::SectorResult<RenderFrame> {
    let mut wedge = SemiCircle::new(offset(0.004, -0.010), 300.0, SemicircleOptions::new(0.0, 90.0))?;
    let mut ring = SemiCircle::new(
        offset(0.004, 0.0),
        300.0,
        SemicircleOptions::new(45.0, 270.0).with_inner_radius(150.0),
    )?;
    let mut annulus = SemiCircle::new(
        offset(0.004, 0.010),
        300.0,
        SemicircleOptions::default().with_ring_width(100.0),
    )?;
    let mut marker = SemiCircleMarker::new(offset(-0.004, -0.010), 40.0, SemicircleOptions::default())?;
    marker.set_direction(90.0, Some(60.0));

    let mut layers: [&mut dyn SectorLayer; 4] = [&mut wedge, &mut ring, &mut annulus, &mut marker];
    let mut frame = build_layer_frame(projection, VIEWPORT, &mut layers);

    let config = PieChartConfig::new(offset(-0.004, 0.006)).with_radius(350.0);
    let data = vec![
        DatasetEntry::new(45.0).with_label("north"),
        DatasetEntry::new(30.0).with_label("east"),
        DatasetEntry::new(15.0).with_label("south"),
        DatasetEntry::new(10.0),
    ];
    let mut pie = PieChart::new(NullRenderer::default(), config, data)?;
    let pie_frame = pie.build_render_frame(projection, VIEWPORT)?;
    frame.sectors.extend(pie_frame.sectors);
    frame.lines.extend(pie_frame.lines);
    frame.texts.extend(pie_frame.texts);
    Ok(frame)
}

#[cfg(feature = "cairo-backend")]
fn write_png(frame: &RenderFrame, path: &std::path::Path) -> Result<(), String> {
    use semicircle_rs::render::CairoRenderer;

    let width = i32::try_from(VIEWPORT.width).map_err(|err| err.to_string())?;
    let height = i32::try_from(VIEWPORT.height).map_err(|err| err.to_string())?;
    let mut renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;
    renderer.render(frame).map_err(|err| err.to_string())?;

    let mut file = fs::File::create(path)
        .map_err(|err| format!("failed to create png `{}`: {err}", path.display()))?;
    renderer
        .write_png(&mut file)
        .map_err(|err| err.to_string())?;
    info!(path = %path.display(), "wrote png gallery");
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(_frame: &RenderFrame, _path: &std::path::Path) -> Result<(), String> {
    Err("png output requires feature `cairo-backend`".to_owned())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let usage = || "usage: render_sector_gallery <output.svg> [--png <output.png>]".to_owned();
    let svg_output = PathBuf::from(args.next().ok_or_else(usage)?);
    let mut png_output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--png" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --png".to_owned())?;
                png_output = Some(PathBuf::from(value));
            }
            other => return Err(format!("unknown argument `{other}`\n{}", usage())),
        }
    }

    Ok(CliArgs {
        svg_output,
        png_output,
    })
}
