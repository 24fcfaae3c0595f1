use std::ffi::{CStr, c_char, c_int, c_uchar};
use std::ptr;

use vecta_engine::logging::{LoggingConfig, init_logging};

use crate::{VectaContext, VectaRect, VectaStatus};

/// Parses `document` (NUL-terminated UTF-8 SVG) into a new context.
///
/// `*context` is set to null before anything else, so it is null on every
/// failure. A context is only stored on `VectaStatus::Ok`.
///
/// # Safety
/// `document` must be null or point to a NUL-terminated string, and
/// `context` must be null or valid for a pointer write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vecta_create(document: *const c_char, context: *mut *mut VectaContext) -> VectaStatus {
    if context.is_null() {
        return VectaStatus::InvalidArgument;
    }
    unsafe { context.write(ptr::null_mut()) };

    if document.is_null() {
        return VectaStatus::InvalidArgument;
    }
    let Ok(svg) = unsafe { CStr::from_ptr(document) }.to_str() else {
        log::warn!("vecta_create: document is not valid UTF-8");
        return VectaStatus::InvalidDocument;
    };

    match VectaContext::new(svg) {
        Ok(ctx) => {
            unsafe { context.write(Box::into_raw(Box::new(ctx))) };
            VectaStatus::Ok
        }
        Err(status) => status,
    }
}

/// Reports the root `viewBox`. `*has_view_box` is 1 or 0; `*view_box` is
/// only written when it is 1.
///
/// # Safety
/// `context` must be null or a live context from `vecta_create`; the out
/// pointers must be null or valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vecta_get_viewbox(
    context: *const VectaContext,
    has_view_box: *mut c_int,
    view_box: *mut VectaRect,
) -> VectaStatus {
    let (Some(ctx), false) = (unsafe { context.as_ref() }, has_view_box.is_null()) else {
        return VectaStatus::InvalidArgument;
    };
    match ctx.view_box() {
        Some(rect) => {
            if view_box.is_null() {
                return VectaStatus::InvalidArgument;
            }
            unsafe {
                has_view_box.write(1);
                view_box.write(rect.into());
            }
        }
        None => unsafe { has_view_box.write(0) },
    }
    VectaStatus::Ok
}

/// Pixel bounds of the document under the context transform.
///
/// # Safety
/// `context` must be null or a live context; `bbox` must be null or valid
/// for a write.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vecta_get_bbox(context: *const VectaContext, bbox: *mut VectaRect) -> VectaStatus {
    let (Some(ctx), false) = (unsafe { context.as_ref() }, bbox.is_null()) else {
        return VectaStatus::InvalidArgument;
    };
    match ctx.bounds() {
        Ok(rect) => {
            unsafe { bbox.write(rect.into()) };
            VectaStatus::Ok
        }
        Err(status) => status,
    }
}

/// Composes a scale onto the context transform.
///
/// # Safety
/// `context` must be null or a live context.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vecta_transform_scale(context: *mut VectaContext, scale_x: f64, scale_y: f64) -> VectaStatus {
    unsafe { with_context(context, |ctx| ctx.scale(scale_x as f32, scale_y as f32)) }
}

/// Composes a translation onto the context transform.
///
/// # Safety
/// `context` must be null or a live context.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vecta_transform_translate(context: *mut VectaContext, x: f64, y: f64) -> VectaStatus {
    unsafe { with_context(context, |ctx| ctx.translate(x as f32, y as f32)) }
}

/// Resets the context transform to the identity.
///
/// # Safety
/// `context` must be null or a live context.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vecta_transform_reset(context: *mut VectaContext) -> VectaStatus {
    unsafe { with_context(context, VectaContext::reset_transform) }
}

/// Renders over `data`, a premultiplied BGRA buffer of `height` rows of
/// `stride` bytes. Existing pixels are kept and drawn over.
///
/// # Safety
/// `context` must be null or a live context; `data` must be null or valid
/// for reads and writes of `stride * (height - 1) + width * 4` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vecta_render(
    context: *mut VectaContext,
    data: *mut c_uchar,
    width: c_int,
    height: c_int,
    stride: c_int,
) -> VectaStatus {
    let Some(ctx) = (unsafe { context.as_mut() }) else {
        return VectaStatus::InvalidArgument;
    };
    let Some(len) = buffer_len(width, height, stride) else {
        log::warn!("vecta_render: bad buffer geometry {width}x{height}, stride {stride}");
        return VectaStatus::InvalidArgument;
    };
    if data.is_null() {
        return VectaStatus::InvalidArgument;
    }

    let pixels = unsafe { std::slice::from_raw_parts_mut(data, len) };
    match ctx.render_bgra(pixels, width as u32, height as u32, stride as usize) {
        Ok(()) => VectaStatus::Ok,
        Err(status) => status,
    }
}

/// Frees a context. Null is ignored.
///
/// # Safety
/// `context` must be null or a context from `vecta_create` that has not
/// been destroyed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vecta_destroy(context: *mut VectaContext) {
    if !context.is_null() {
        drop(unsafe { Box::from_raw(context) });
    }
}

/// Installs the library logger (`RUST_LOG` syntax, `info` by default)
/// unless the host already installed one.
#[unsafe(no_mangle)]
pub extern "C" fn vecta_init_logging() {
    init_logging(LoggingConfig::default());
}

/// # Safety
/// `context` must be null or a live context.
unsafe fn with_context(context: *mut VectaContext, f: impl FnOnce(&mut VectaContext)) -> VectaStatus {
    match unsafe { context.as_mut() } {
        Some(ctx) => {
            f(ctx);
            VectaStatus::Ok
        }
        None => VectaStatus::InvalidArgument,
    }
}

/// Bytes a `width`x`height` buffer with `stride`-byte rows spans, if the
/// geometry is valid.
fn buffer_len(width: c_int, height: c_int, stride: c_int) -> Option<usize> {
    let width = usize::try_from(width).ok().filter(|&w| w > 0)?;
    let height = usize::try_from(height).ok().filter(|&h| h > 0)?;
    let stride = usize::try_from(stride).ok()?;
    let row = width.checked_mul(4)?;
    if stride < row {
        return None;
    }
    stride.checked_mul(height - 1)?.checked_add(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_geometry() {
        assert_eq!(buffer_len(2, 3, 8), Some(24));
        assert_eq!(buffer_len(2, 3, 10), Some(28));
        assert_eq!(buffer_len(2, 3, 7), None);
        assert_eq!(buffer_len(0, 3, 8), None);
        assert_eq!(buffer_len(2, -1, 8), None);
    }
}
