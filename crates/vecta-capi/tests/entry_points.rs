#![cfg(feature = "skia")]

use std::ffi::{CString, c_int};
use std::ptr;

use vecta_capi::*;

const CIRCLE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 200"><circle cx="200" cy="200" r="100" fill="yellow"/></svg>"#;

fn create(svg: &str) -> (VectaStatus, *mut VectaContext) {
    let text = CString::new(svg).unwrap();
    let mut ctx = ptr::null_mut();
    let status = unsafe { vecta_create(text.as_ptr(), &mut ctx) };
    (status, ctx)
}

fn bbox(ctx: *mut VectaContext) -> VectaRect {
    let mut rect = VectaRect::default();
    assert_eq!(unsafe { vecta_get_bbox(ctx, &mut rect) }, VectaStatus::Ok);
    rect
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> VectaRect {
    VectaRect { x0, y0, x1, y1 }
}

#[test]
fn null_arguments_are_rejected() {
    let mut ctx = ptr::NonNull::<VectaContext>::dangling().as_ptr();
    assert_eq!(unsafe { vecta_create(ptr::null(), &mut ctx) }, VectaStatus::InvalidArgument);
    assert!(ctx.is_null());

    let text = CString::new(CIRCLE).unwrap();
    assert_eq!(unsafe { vecta_create(text.as_ptr(), ptr::null_mut()) }, VectaStatus::InvalidArgument);

    let mut out = VectaRect::default();
    assert_eq!(unsafe { vecta_get_bbox(ptr::null(), &mut out) }, VectaStatus::InvalidArgument);
    assert_eq!(unsafe { vecta_transform_reset(ptr::null_mut()) }, VectaStatus::InvalidArgument);
    unsafe { vecta_destroy(ptr::null_mut()) };
}

#[test]
fn invalid_document_leaves_null_context() {
    let text = CString::new("<svg").unwrap();
    let mut ctx = ptr::NonNull::<VectaContext>::dangling().as_ptr();
    assert_eq!(unsafe { vecta_create(text.as_ptr(), &mut ctx) }, VectaStatus::InvalidDocument);
    assert!(ctx.is_null());
}

#[test]
fn view_box_is_reported_inclusive() {
    let (status, ctx) = create(CIRCLE);
    assert_eq!(status, VectaStatus::Ok);

    let mut has: c_int = -1;
    let mut view_box = VectaRect::default();
    assert_eq!(unsafe { vecta_get_viewbox(ctx, &mut has, &mut view_box) }, VectaStatus::Ok);
    assert_eq!(has, 1);
    assert_eq!(view_box, rect(0.0, 0.0, 199.0, 199.0));
    unsafe { vecta_destroy(ctx) };

    let (_, ctx) = create(r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#);
    assert_eq!(unsafe { vecta_get_viewbox(ctx, &mut has, ptr::null_mut()) }, VectaStatus::Ok);
    assert_eq!(has, 0);
    unsafe { vecta_destroy(ctx) };
}

#[test]
fn bbox_tracks_the_context_transform() {
    let (_, ctx) = create(CIRCLE);
    assert_eq!(bbox(ctx), rect(100.0, 100.0, 299.0, 299.0));

    assert_eq!(unsafe { vecta_transform_scale(ctx, 1.2, 1.4) }, VectaStatus::Ok);
    assert_eq!(bbox(ctx), rect(120.0, 140.0, 359.0, 419.0));

    assert_eq!(unsafe { vecta_transform_reset(ctx) }, VectaStatus::Ok);
    assert_eq!(unsafe { vecta_transform_translate(ctx, -100.0, -100.0) }, VectaStatus::Ok);
    assert_eq!(bbox(ctx), rect(0.0, 0.0, 199.0, 199.0));
    unsafe { vecta_destroy(ctx) };
}

#[test]
fn render_draws_bgra_over_existing_pixels() {
    let (_, ctx) = create(CIRCLE);
    let (width, height, stride) = (200usize, 200usize, 200 * 4 + 16);
    let mut pixels = vec![0u8; stride * height];
    // Opaque blue in the corner the circle does not reach.
    pixels[..4].copy_from_slice(&[255, 0, 0, 255]);

    let status = unsafe {
        vecta_render(ctx, pixels.as_mut_ptr(), width as c_int, height as c_int, stride as c_int)
    };
    assert_eq!(status, VectaStatus::Ok);

    let at = |x: usize, y: usize| &pixels[y * stride + x * 4..y * stride + x * 4 + 4];
    assert_eq!(at(0, 0), &[255, 0, 0, 255]);
    assert_eq!(at(199, 199), &[0, 255, 255, 255]);
    assert_eq!(at(50, 50), &[0, 0, 0, 0]);
    unsafe { vecta_destroy(ctx) };
}

#[test]
fn render_rejects_bad_buffer_geometry() {
    let (_, ctx) = create(CIRCLE);
    let mut pixels = vec![0u8; 64];
    let status = unsafe { vecta_render(ctx, pixels.as_mut_ptr(), 4, 4, 8) };
    assert_eq!(status, VectaStatus::InvalidArgument);
    let status = unsafe { vecta_render(ctx, ptr::null_mut(), 4, 4, 16) };
    assert_eq!(status, VectaStatus::InvalidArgument);
    unsafe { vecta_destroy(ctx) };
}
