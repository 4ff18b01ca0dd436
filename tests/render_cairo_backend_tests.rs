#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use semicircle_rs::SectorError;
use semicircle_rs::api::{PieChart, PieChartConfig};
use semicircle_rs::core::{LatLng, PlanarProjection, Point, Viewport, compute_sector};
use semicircle_rs::extensions::DatasetEntry;
use semicircle_rs::render::{
    CairoContextRenderer, CairoRenderer, Color, RenderFrame, Renderer, SectorPrimitive,
};

const WHITE: u32 = 0xFFFF_FFFF;
const RED: u32 = 0xFFFF_0000;
const GREEN: u32 = 0xFF00_FF00;
const BLUE: u32 = 0xFF00_00FF;

fn solid(hex: &str) -> Color {
    Color::from_hex(hex).expect("color")
}

/// Wedge, elliptical half disc and ring side by side on a 400x200 canvas.
fn sector_frame() -> RenderFrame {
    let mut frame = RenderFrame::new(Viewport::new(400, 200));
    let wedge = compute_sector(Point::new(100.0, 100.0), 50.0, None, 0.0, 0.0, 90.0);
    let half_ellipse =
        compute_sector(Point::new(250.0, 100.0), 40.0, Some(20.0), 0.0, 0.0, 180.0);
    let ring = compute_sector(Point::new(350.0, 100.0), 40.0, None, 20.0, 0.0, 359.9999);

    for (sector, hex) in [(wedge, "#FF0000"), (half_ellipse, "#00FF00"), (ring, "#0000FF")] {
        let color = solid(hex);
        frame
            .sectors
            .push(SectorPrimitive::new(sector, color, color, 1.0));
    }
    frame
}

/// Reads one ARGB32 pixel as `0xAARRGGBB`.
fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> u32 {
    let stride = usize::try_from(surface.stride()).expect("stride");
    let data = surface.data().expect("exclusive surface data");
    let offset = y * stride + x * 4;
    u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn render_to_surface(frame: &RenderFrame) -> (CairoRenderer, ImageSurface) {
    let mut renderer = CairoRenderer::new(400, 200).expect("renderer");
    let surface = ImageSurface::create(Format::ARgb32, 400, 200).expect("surface");
    {
        let context = Context::new(&surface).expect("context");
        renderer
            .render_on_cairo_context(&context, frame)
            .expect("render on context");
    }
    (renderer, surface)
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, SectorError::InvalidData(_)));
    assert!(CairoRenderer::new(640, -1).is_err());
}

#[test]
fn offscreen_render_counts_every_sector() {
    let mut renderer = CairoRenderer::new(400, 200).expect("renderer");
    renderer.render(&sector_frame()).expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.sectors_drawn, 3);
    assert_eq!(stats.lines_drawn, 0);
    assert_eq!(stats.texts_drawn, 0);
}

#[test]
fn wedge_fills_only_its_quadrant() {
    let (_, mut surface) = render_to_surface(&sector_frame());

    assert_eq!(pixel(&mut surface, 125, 75), RED);
    assert_eq!(pixel(&mut surface, 75, 125), WHITE);
    assert_eq!(pixel(&mut surface, 125, 125), WHITE);
    assert_eq!(pixel(&mut surface, 75, 75), WHITE);
}

#[test]
fn elliptical_sector_lands_on_its_projected_center() {
    let (_, mut surface) = render_to_surface(&sector_frame());

    assert_eq!(pixel(&mut surface, 260, 90), GREEN);
    assert_eq!(pixel(&mut surface, 260, 110), GREEN);
    // Inside the outer circle but above the ellipse.
    assert_eq!(pixel(&mut surface, 260, 72), WHITE);
    // Left half stays empty.
    assert_eq!(pixel(&mut surface, 235, 95), WHITE);
    // An unscaled center would have drawn around y = 50.
    assert_eq!(pixel(&mut surface, 260, 45), WHITE);
}

#[test]
fn ring_leaves_its_hole_unpainted() {
    let (_, mut surface) = render_to_surface(&sector_frame());

    assert_eq!(pixel(&mut surface, 380, 100), BLUE);
    assert_eq!(pixel(&mut surface, 350, 130), BLUE);
    assert_eq!(pixel(&mut surface, 320, 100), BLUE);
    assert_eq!(pixel(&mut surface, 350, 100), WHITE);
    assert_eq!(pixel(&mut surface, 360, 95), WHITE);
}

#[test]
fn clear_color_paints_the_background() {
    let mut renderer = CairoRenderer::new(400, 200).expect("renderer");
    renderer
        .set_clear_color(Color::rgb(0.0, 0.0, 0.0))
        .expect("clear color");
    let surface = ImageSurface::create(Format::ARgb32, 400, 200).expect("surface");
    let mut surface = {
        let context = Context::new(&surface).expect("context");
        renderer
            .render_on_cairo_context(&context, &sector_frame())
            .expect("render");
        surface
    };

    assert_eq!(pixel(&mut surface, 10, 10), 0xFF00_0000);
    assert_eq!(pixel(&mut surface, 125, 75), RED);
}

#[test]
fn pie_chart_renders_slices_leaders_and_labels() {
    let renderer = CairoRenderer::new(600, 400).expect("renderer");
    let config = PieChartConfig::new(LatLng::new(-200.0, 300.0)).with_radius(100.0);
    let data = vec![
        DatasetEntry::new(50.0).with_label("east"),
        DatasetEntry::new(150.0).with_label("rest"),
        DatasetEntry::new(0.0).with_label("none"),
    ];
    let mut chart = PieChart::new(renderer, config, data).expect("chart");
    chart
        .render(&PlanarProjection::new(1.0), Viewport::new(600, 400))
        .expect("render");

    let stats = chart.renderer().last_stats();
    assert_eq!(stats.sectors_drawn, 2);
    assert_eq!(stats.lines_drawn, 6);
    assert_eq!(stats.texts_drawn, 3);
}

#[test]
fn write_png_emits_a_png_stream() {
    let mut renderer = CairoRenderer::new(400, 200).expect("renderer");
    renderer.render(&sector_frame()).expect("render");

    let mut bytes = Vec::new();
    renderer.write_png(&mut bytes).expect("png");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}
