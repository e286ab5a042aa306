//! Rendering tests over real layouts

use provmap_domain::traits::MapRenderer;
use provmap_domain::{Coordinate, ProvenanceEntry, ResolvedPoint};
use provmap_layout::{build_layout, LayoutOptions, LinearInterpolator};
use provmap_render::{render_html, LeafletRenderer, RenderError, RenderOptions};

fn points() -> Vec<ResolvedPoint> {
    let entries = [
        (ProvenanceEntry::at("A").with_owner("X").with_action("create"), (1.0, 1.0)),
        (
            ProvenanceEntry::at("B")
                .with_owner("Y & Sons")
                .with_action("transfer")
                .with_next_location_unknown(true),
            (2.0, 2.0),
        ),
        (ProvenanceEntry::at("A").with_owner("Z").with_action("sell"), (1.0, 1.0)),
    ];
    entries
        .into_iter()
        .map(|(entry, (lat, lon))| entry.resolve(Coordinate::new(lat, lon)).unwrap())
        .collect()
}

#[test]
fn test_render_contains_all_markers_in_draw_order() {
    let layout = build_layout(&points(), &LinearInterpolator, &LayoutOptions::default());
    let html = render_html(&layout, &RenderOptions::default()).unwrap();

    assert_eq!(html.matches("\"popup_src\"").count(), 3);

    let step2 = html.find("\"Step 2\"").unwrap();
    let step1 = html.find("\"Step 1\"").unwrap();
    let step3 = html.find("\"Step 3\"").unwrap();
    assert!(step2 < step1 && step1 < step3);

    assert!(html.contains("\"dash_array\":\"5,10\""));
    assert!(html.contains("\"dash_array\":null"));
    assert!(html.contains("\"icon\":\"flag\""));
    assert!(html.contains("stamen_terrain"));
    assert!(html.contains("Last known location"));
}

#[test]
fn test_render_is_deterministic() {
    let layout = build_layout(&points(), &LinearInterpolator, &LayoutOptions::default());
    let renderer = LeafletRenderer::default();

    assert_eq!(renderer.render(&layout).unwrap(), renderer.render(&layout).unwrap());
}

#[test]
fn test_render_empty_layout() {
    let layout = build_layout(&[], &LinearInterpolator, &LayoutOptions::default());
    let html = render_html(&layout, &RenderOptions::default()).unwrap();

    assert!(html.contains("\"markers\":[]"));
    assert!(html.contains("\"paths\":[]"));
    assert!(html.contains("<b>Legend</b>"));
}

#[test]
fn test_render_rejects_empty_tile_url() {
    let mut options = RenderOptions::default();
    options.tile_layer.url = String::new();
    let layout = build_layout(&[], &LinearInterpolator, &LayoutOptions::default());

    let result = render_html(&layout, &options);
    assert!(matches!(result, Err(RenderError::InvalidOptions(_))));
}
