//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};
use crate::overlay::{OverlayResource, OverlayState};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("device removed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("device removed"));
}

#[test]
fn test_out_of_memory_display() {
    let err = Error::OutOfMemory;
    assert_eq!(format!("{}", err), "Out of GPU memory");
}

#[test]
fn test_resource_creation_failed_display_names_resource() {
    let err = Error::ResourceCreationFailed {
        resource: OverlayResource::DepthStencilView,
        reason: "format mismatch".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("depth-stencil view"));
    assert!(display.contains("format mismatch"));
}

#[test]
fn test_invalid_state_display() {
    let err = Error::InvalidState {
        operation: "render",
        state: OverlayState::Uninitialized,
    };
    let display = format!("{}", err);
    assert!(display.contains("render"));
    assert!(display.contains("Uninitialized"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::OutOfMemory;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone() {
    let err1 = Error::ResourceCreationFailed {
        resource: OverlayResource::VertexBuffer,
        reason: "zero size".to_string(),
    };
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// CREATION FAILED WRAPPING
// ============================================================================

#[test]
fn test_creation_failed_wraps_backend_reason() {
    let err = Error::creation_failed(
        OverlayResource::ColorTexture,
        Error::BackendError("quality 16 not supported".to_string()),
    );

    match err {
        Error::ResourceCreationFailed { resource, reason } => {
            assert_eq!(resource, OverlayResource::ColorTexture);
            assert!(reason.contains("quality 16 not supported"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_creation_failed_keeps_existing_attribution() {
    let inner = Error::ResourceCreationFailed {
        resource: OverlayResource::IndexBuffer,
        reason: "inner".to_string(),
    };
    let err = Error::creation_failed(OverlayResource::ConstantBuffer, inner);

    match err {
        Error::ResourceCreationFailed { resource, .. } => {
            assert_eq!(resource, OverlayResource::IndexBuffer);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

// ============================================================================
// ERROR PROPAGATION TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::OutOfMemory)
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    assert!(outer().is_err());
}

#[test]
fn test_bail_macro_returns_backend_error() {
    fn check(width: u32) -> Result<u32> {
        if width == 0 {
            crate::rtt_bail!("rtt::test", "width must be non-zero, got {}", width);
        }
        Ok(width)
    }

    assert_eq!(check(4).unwrap(), 4);
    match check(0) {
        Err(Error::BackendError(msg)) => assert!(msg.contains("got 0")),
        other => panic!("unexpected result: {:?}", other),
    }
}
