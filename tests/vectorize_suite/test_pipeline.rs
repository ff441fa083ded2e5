// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Pipeline tests against the real vtracer engine, without HTTP

use bytes::Bytes;
use fabstir_vectorize_node::vectorize::{
    run_pipeline, vectorize_bytes, ConversionParameters, ScopedWorkspace, VectorizeError,
    Vectorizer, VtracerEngine,
};
use image::{ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::sync::Arc;

fn checkerboard_png(size: u32) -> Vec<u8> {
    let img = ImageBuffer::from_fn(size, size, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 {
            Rgb([0u8, 0, 0])
        } else {
            Rgb([255u8, 255, 255])
        }
    });
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn test_engine_writes_svg_file() {
    let workspace = ScopedWorkspace::create(None).unwrap();
    let input = workspace.stage_input(&checkerboard_png(32)).unwrap();

    VtracerEngine::new()
        .convert(&input, &workspace.output_path(), &ConversionParameters::PROFILE)
        .unwrap();

    let doc = workspace.read_output().unwrap();
    assert!(doc.as_str().contains("<svg"));
    assert!(doc.path_count() > 0);
}

#[test]
fn test_pipeline_releases_workspace_on_success_and_failure() {
    let root = tempfile::tempdir().unwrap();
    let engine = VtracerEngine::new();

    let doc = run_pipeline(
        &engine,
        &checkerboard_png(16),
        &ConversionParameters::PROFILE,
        Some(root.path()),
    )
    .unwrap();
    assert!(!doc.is_empty());
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);

    let err = run_pipeline(
        &engine,
        b"",
        &ConversionParameters::PROFILE,
        Some(root.path()),
    )
    .unwrap_err();
    assert!(matches!(err, VectorizeError::Engine(_)));
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_parallel_conversions_do_not_share_workspaces() {
    let root = tempfile::tempdir().unwrap();
    let engine: Arc<dyn Vectorizer> = Arc::new(VtracerEngine::new());
    let png = Bytes::from(checkerboard_png(24));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let engine = engine.clone();
        let png = png.clone();
        let root = root.path().to_path_buf();
        handles.push(tokio::spawn(async move {
            vectorize_bytes(engine, png, Some(root)).await
        }));
    }

    for handle in handles {
        let doc = handle.await.unwrap().unwrap();
        assert!(doc.path_count() > 0);
    }
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}
