use std::cell::RefCell;
use std::rc::Rc;

use vecta_doc::{Document, DocumentOptions};
use vecta_engine::coords::{Matrix, Rect};
use vecta_engine::render::{Renderer, Transform};
use vecta_skia::SkiaRenderer;
use vecta_skia::tiny_skia::Pixmap;

const CIRCLE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200">
    <circle cx="200" cy="200" r="100" fill="yellow"/>
</svg>"#;

fn load(svg: &str) -> Document<SkiaRenderer> {
    let renderer = Rc::new(RefCell::new(SkiaRenderer::new()));
    Document::parse(svg, renderer, &DocumentOptions::default()).unwrap()
}

fn rgba(doc: &Document<SkiaRenderer>, x: u32, y: u32) -> (u8, u8, u8, u8) {
    let renderer = doc.renderer().borrow();
    let px = renderer.surface().unwrap().pixel(x, y).unwrap();
    (px.red(), px.green(), px.blue(), px.alpha())
}

fn render_into(doc: &Document<SkiaRenderer>, width: u32, height: u32) {
    doc.renderer().borrow_mut().set_surface(Pixmap::new(width, height).unwrap());
    doc.render().unwrap();
}

#[test]
fn circle_bounds_scale_exactly() {
    let doc = load(CIRCLE);
    let mut transform = doc.renderer().borrow_mut().create_identity_transform();

    assert_eq!(doc.bounds(&transform).unwrap(), Rect::new(100.0, 100.0, 200.0, 200.0).unwrap());

    transform.scale(1.2, 1.4);
    assert_eq!(doc.bounds(&transform).unwrap(), Rect::new(120.0, 140.0, 240.0, 280.0).unwrap());

    transform.set_matrix(Matrix::IDENTITY);
    transform.translate(-100.0, 10.0);
    assert_eq!(doc.bounds(&transform).unwrap(), Rect::new(0.0, 110.0, 200.0, 200.0).unwrap());
}

#[test]
fn circle_renders_inside_its_bounds() {
    let doc = load(CIRCLE);
    render_into(&doc, 200, 200);

    assert_eq!(rgba(&doc, 199, 199), (255, 255, 0, 255));
    assert_eq!(rgba(&doc, 10, 10).3, 0);
    assert_eq!(doc.renderer().borrow().depth(), 0);
}

#[test]
fn clip_path_and_group_opacity_apply() {
    let doc = load(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 10">
            <clipPath id="left"><rect width="10" height="10"/></clipPath>
            <g clip-path="url(#left)">
                <rect width="20" height="10" fill="blue"/>
            </g>
            <g opacity="0.5">
                <rect x="15" width="5" height="10" fill="red"/>
            </g>
        </svg>"#,
    );
    render_into(&doc, 20, 10);

    assert_eq!(rgba(&doc, 2, 5), (0, 0, 255, 255));
    assert_eq!(rgba(&doc, 12, 5).3, 0);
    let (red, _, _, alpha) = rgba(&doc, 17, 5);
    assert!((127..=128).contains(&alpha) && red == alpha, "{red} {alpha}");
}

#[test]
fn linear_gradient_varies_across_the_shape() {
    let doc = load(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 10">
            <linearGradient id="g" x1="0" x2="1">
                <stop offset="0" stop-color="black"/>
                <stop offset="1" stop-color="white"/>
            </linearGradient>
            <rect width="100" height="10" fill="url(#g)"/>
        </svg>"#,
    );
    render_into(&doc, 100, 10);

    let (left, _, _, a0) = rgba(&doc, 2, 5);
    let (right, _, _, a1) = rgba(&doc, 97, 5);
    assert_eq!((a0, a1), (255, 255));
    assert!(left < 20 && right > 235, "{left} {right}");
}

#[test]
fn render_with_transform_moves_output() {
    let doc = load(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
            <rect width="4" height="4" fill="lime"/>
        </svg>"#,
    );
    doc.renderer().borrow_mut().set_surface(Pixmap::new(10, 10).unwrap());
    let transform = doc.renderer().borrow_mut().create_transform(Matrix::from_translate(5.0, 5.0));
    doc.render_with(&transform).unwrap();

    assert_eq!(rgba(&doc, 1, 1).3, 0);
    assert_eq!(rgba(&doc, 6, 6), (0, 255, 0, 255));
}
