//! End-to-end tests for the copy/paste engines.

use std::sync::{Arc, Mutex};

use nalgebra::{Point2, Point3};
use uvtransfer::prelude::*;
use uvtransfer::scene::ObjectData;
use uvtransfer::transfer::{
    copy_object_uv, copy_selected_uv, copy_uv, paste_aligned_uv, paste_object_uv, paste_uv, CopyOptions,
    LayerSelector, ObjectPasteOptions, PasteOptions, Reporter, Severity,
};

type Log = Arc<Mutex<Vec<(Severity, String)>>>;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn recorder() -> (Reporter, Log) {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let reporter = Reporter::new(move |severity, message| {
        sink.lock().unwrap().push((severity, message.to_string()));
    });
    (reporter, log)
}

fn messages(log: &Log, severity: Severity) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|(s, _)| *s == severity)
        .map(|(_, m)| m.clone())
        .collect()
}

/// A row of `n` unit quads with one UV layer.
fn quad_strip<I: MeshIndex>(n: usize) -> PolyMesh<I> {
    let mut vertices = Vec::with_capacity(2 * (n + 1));
    for j in 0..2 {
        for i in 0..=n {
            vertices.push(Point3::new(i as f64, j as f64, 0.0));
        }
    }
    let faces: Vec<[usize; 4]> = (0..n).map(|i| [i, i + 1, n + 2 + i, n + 1 + i]).collect();

    let mut mesh: PolyMesh<I> = build_from_polygons(&vertices, &faces).unwrap();
    mesh.add_uv_layer("UVMap");
    mesh
}

fn set_face_uvs<I: MeshIndex>(mesh: &mut PolyMesh<I>, f: usize, uvs: &[Point2<f64>]) {
    let layer = mesh.uv_layers().active().unwrap();
    let loops: Vec<_> = mesh.face_loops(FaceId::new(f)).collect();
    let table = mesh.uv_layers_mut().layer_mut(layer);
    for (&l, &uv) in loops.iter().zip(uvs) {
        table.set_uv(l, uv);
        table.set_select(l, true);
    }
}

fn face_uvs<I: MeshIndex>(mesh: &PolyMesh<I>, f: usize) -> Vec<Point2<f64>> {
    let table = mesh.uv_layers().layer(mesh.uv_layers().active().unwrap());
    mesh.face_loops(FaceId::new(f)).map(|l| table.uv(l)).collect()
}

fn square(x: f64, y: f64) -> Vec<Point2<f64>> {
    vec![
        Point2::new(x, y),
        Point2::new(x + 1.0, y),
        Point2::new(x + 1.0, y + 1.0),
        Point2::new(x, y + 1.0),
    ]
}

#[test]
fn test_wrap_paste_cycles_through_capture() {
    init_logger();
    let mut mesh: PolyMesh = quad_strip(8);
    set_face_uvs(&mut mesh, 0, &square(0.0, 0.0));
    set_face_uvs(&mut mesh, 1, &square(5.0, 5.0));

    let (reporter, log) = recorder();
    let mut clipboard = UvClipboard::new();

    mesh.select_face(FaceId::new(0), true);
    mesh.select_face(FaceId::new(1), true);
    copy_uv(&mesh, &mut clipboard, &CopyOptions::default(), &reporter).unwrap();

    mesh.select_all(false);
    for f in 2..7 {
        mesh.select_face(FaceId::new(f), true);
    }
    let n = paste_uv(&mut mesh, &clipboard, &PasteOptions::default(), &reporter).unwrap();
    assert_eq!(n, 5);

    for (f, expected) in [(2, 0.0), (3, 5.0), (4, 0.0), (5, 5.0), (6, 0.0)] {
        assert_eq!(face_uvs(&mesh, f), square(expected, expected), "face {}", f);
    }
    assert_eq!(face_uvs(&mesh, 7), vec![Point2::origin(); 4]);

    let info = messages(&log, Severity::Info);
    assert!(info.contains(&"2 face(s) are selected".to_string()));
    assert!(info.contains(&"5 face(s) are copied".to_string()));
    assert!(messages(&log, Severity::Warning).is_empty());
}

#[test]
fn test_flip_then_rotate() {
    init_logger();
    let mut mesh: PolyMesh = quad_strip(2);
    let source = square(0.0, 0.0);
    set_face_uvs(&mut mesh, 0, &source);

    let reporter = Reporter::none();
    let mut clipboard = UvClipboard::new();
    mesh.select_face(FaceId::new(0), true);
    copy_uv(&mesh, &mut clipboard, &CopyOptions::default(), &reporter).unwrap();

    mesh.select_all(false);
    mesh.select_face(FaceId::new(1), true);
    let options = PasteOptions::default().strict().with_flip(true).with_rotation(2);
    paste_uv(&mut mesh, &clipboard, &options, &reporter).unwrap();

    // reversed [3, 2, 1, 0], then two steps right: [1, 0, 3, 2]
    assert_eq!(
        face_uvs(&mesh, 1),
        vec![source[1], source[0], source[3], source[2]]
    );
}

#[test]
fn test_seams_follow_corner_order() {
    init_logger();
    let mut mesh: PolyMesh = quad_strip(2);
    let loops0: Vec<_> = mesh.face_loops(FaceId::new(0)).collect();
    let loops1: Vec<_> = mesh.face_loops(FaceId::new(1)).collect();
    let edge_of = |mesh: &PolyMesh, l: LoopId| mesh.get_loop(l).edge;

    // Seam on the edge leaving the second corner of face 0 (the shared edge).
    let shared = edge_of(&mesh, loops0[1]);
    mesh.set_edge_seam(shared, true);
    assert_eq!(edge_of(&mesh, loops1[3]), shared);

    let reporter = Reporter::none();
    let mut clipboard = UvClipboard::new();
    mesh.select_face(FaceId::new(0), true);
    copy_uv(&mesh, &mut clipboard, &CopyOptions::default(), &reporter).unwrap();

    mesh.select_all(false);
    mesh.select_face(FaceId::new(1), true);
    paste_uv(&mut mesh, &clipboard, &PasteOptions::default(), &reporter).unwrap();

    let seams: Vec<bool> = loops1.iter().map(|&l| mesh.edge(edge_of(&mesh, l)).seam).collect();
    // Corner 3 of face 1 writes the shared edge last and clears it.
    assert_eq!(seams, vec![false, true, false, false]);
    assert!(mesh.seams_visible());
}

#[test]
fn test_errors_are_reported_as_warnings() {
    init_logger();
    let mut mesh: PolyMesh = quad_strip(3);
    let (reporter, log) = recorder();
    let mut clipboard = UvClipboard::new();

    let err = copy_uv(&mesh, &mut clipboard, &CopyOptions::default(), &reporter).unwrap_err();
    assert_eq!(err, UvError::NoSelection);

    mesh.select_all(true);
    let err = paste_uv(&mut mesh, &clipboard, &PasteOptions::default(), &reporter).unwrap_err();
    assert_eq!(err, UvError::NothingCopied);

    let options = CopyOptions::default().with_layer(LayerSelector::named("lightmap"));
    let err = copy_uv(&mesh, &mut clipboard, &options, &reporter).unwrap_err();
    assert!(matches!(err, UvError::LayerNotFound { .. }));

    assert_eq!(
        messages(&log, Severity::Warning),
        vec![
            "no faces are selected".to_string(),
            "need to copy UV first".to_string(),
            "UV map 'lightmap' not found".to_string(),
        ]
    );
}

#[test]
fn test_named_layer_is_left_alone_by_default_paste() {
    init_logger();
    let mut mesh: PolyMesh = quad_strip(2);
    let detail = mesh.add_uv_layer("detail");
    let loops0: Vec<_> = mesh.face_loops(FaceId::new(0)).collect();
    for (&l, uv) in loops0.iter().zip(square(3.0, 3.0)) {
        mesh.uv_layers_mut().layer_mut(detail).set_uv(l, uv);
    }

    let reporter = Reporter::none();
    let mut clipboard = UvClipboard::new();
    mesh.select_face(FaceId::new(0), true);
    let named = LayerSelector::named("detail");
    copy_uv(&mesh, &mut clipboard, &CopyOptions::default().with_layer(named.clone()), &reporter).unwrap();

    mesh.select_all(false);
    mesh.select_face(FaceId::new(1), true);
    paste_uv(&mut mesh, &clipboard, &PasteOptions::default().with_layer(named), &reporter).unwrap();

    let table = mesh.uv_layers().layer(detail);
    let pasted: Vec<_> = mesh.face_loops(FaceId::new(1)).map(|l| table.uv(l)).collect();
    assert_eq!(pasted, square(3.0, 3.0));
    // The active layer is untouched.
    assert_eq!(face_uvs(&mesh, 1), vec![Point2::origin(); 4]);
}

#[test]
fn test_small_index_mesh() {
    init_logger();
    let mut mesh: PolyMesh<u16> = quad_strip(3);
    set_face_uvs(&mut mesh, 0, &square(0.5, 0.5));

    let reporter = Reporter::none();
    let mut clipboard = UvClipboard::new();
    mesh.select_face(FaceId::new(0), true);
    copy_uv(&mesh, &mut clipboard, &CopyOptions::default(), &reporter).unwrap();

    mesh.select_all(true);
    let n = paste_uv(&mut mesh, &clipboard, &PasteOptions::default(), &reporter).unwrap();
    assert_eq!(n, 3);
    for f in 0..3 {
        assert_eq!(face_uvs(&mesh, f), square(0.5, 0.5));
    }
}

#[test]
fn test_object_paste_reports_skipped_objects() {
    init_logger();
    let mut source: PolyMesh = quad_strip(2);
    set_face_uvs(&mut source, 0, &square(1.0, 2.0));
    set_face_uvs(&mut source, 1, &square(3.0, 4.0));

    let mut scene = Scene::new();
    let src = scene.add_mesh("Plane", source);
    let camera = scene.add_object("Camera", ObjectData::Empty);
    let a = scene.add_mesh("Plane.001", quad_strip(2));
    let b = scene.add_mesh("Plane.002", quad_strip(2));
    let untouched = scene.add_mesh("Plane.003", quad_strip(2));

    let (reporter, log) = recorder();
    let mut clipboard = UvClipboard::new();

    scene.set_active(src);
    copy_object_uv(&mut scene, &mut clipboard, &CopyOptions::default(), &reporter).unwrap();

    for i in [camera, a, b] {
        scene.select(i, true);
    }
    let n = paste_object_uv(&mut scene, &clipboard, &ObjectPasteOptions::default(), &reporter).unwrap();
    assert_eq!(n, 4);
    assert_eq!(scene.mode(), Mode::Object);
    assert_eq!(scene.active(), Some(b));

    for i in [a, b] {
        let mesh = scene.object(i).mesh().unwrap();
        assert_eq!(face_uvs(mesh, 0), square(1.0, 2.0));
        assert_eq!(face_uvs(mesh, 1), square(3.0, 4.0));
        assert_eq!(mesh.revision(), 1);
    }
    assert_eq!(scene.object(untouched).mesh().unwrap().revision(), 0);

    let info = messages(&log, Severity::Info);
    assert!(info.contains(&"Plane's UV coordinates are copied".to_string()));
    assert!(info.contains(&"Plane.001's UV coordinates are pasted".to_string()));
    assert!(info.contains(&"Plane.002's UV coordinates are pasted".to_string()));
    assert_eq!(info.iter().filter(|m| m.contains("skipped")).count(), 3);
}

#[test]
fn test_aligned_paste_rebases_each_face() {
    init_logger();
    let mut mesh: PolyMesh = quad_strip(4);
    set_face_uvs(&mut mesh, 0, &square(0.0, 0.0));
    set_face_uvs(&mut mesh, 1, &square(1.0, 0.0));

    let (reporter, log) = recorder();
    let mut clipboard = UvClipboard::new();

    mesh.select_face(FaceId::new(0), true);
    mesh.select_face(FaceId::new(1), true);
    assert_eq!(copy_selected_uv(&mut mesh, &mut clipboard, &reporter).unwrap(), 2);

    mesh.select_all(false);
    mesh.select_face(FaceId::new(2), true);
    mesh.select_face(FaceId::new(3), true);
    set_face_uvs(&mut mesh, 2, &[Point2::new(10.0, 10.0), Point2::new(10.0, 12.0)]);
    set_face_uvs(&mut mesh, 3, &[Point2::new(20.0, 0.0)]);
    // Every corner of a destination face must be selected.
    let layer = mesh.uv_layers().active().unwrap();
    for f in [2, 3] {
        for l in mesh.face_loops(FaceId::new(f)).collect::<Vec<_>>() {
            mesh.uv_layers_mut().layer_mut(layer).set_select(l, true);
        }
    }

    assert_eq!(paste_aligned_uv(&mut mesh, &clipboard, &reporter).unwrap(), 2);

    let expected = |x: f64, y: f64| {
        vec![
            Point2::new(x, y),
            Point2::new(x, y + 2.0),
            Point2::new(x - 2.0, y + 2.0),
            Point2::new(x - 2.0, y),
        ]
    };
    for (f, want) in [(2, expected(10.0, 10.0)), (3, expected(20.0, 0.0))] {
        for (got, want) in face_uvs(&mesh, f).into_iter().zip(want) {
            assert!((got - want).norm() < 1e-9, "face {}: {:?} != {:?}", f, got, want);
        }
    }
    assert!(messages(&log, Severity::Info).contains(&"2 face(s) are copied".to_string()));
}

#[test]
fn test_aligned_paste_ignores_extra_destinations() {
    init_logger();
    let mut mesh: PolyMesh = quad_strip(3);
    set_face_uvs(&mut mesh, 0, &square(0.0, 0.0));

    let reporter = Reporter::none();
    let mut clipboard = UvClipboard::new();
    mesh.select_face(FaceId::new(0), true);
    copy_selected_uv(&mut mesh, &mut clipboard, &reporter).unwrap();

    mesh.select_all(false);
    set_face_uvs(&mut mesh, 1, &square(4.0, 4.0));
    set_face_uvs(&mut mesh, 2, &square(8.0, 8.0));
    mesh.select_face(FaceId::new(1), true);
    mesh.select_face(FaceId::new(2), true);

    assert_eq!(paste_aligned_uv(&mut mesh, &clipboard, &reporter).unwrap(), 1);
    assert_eq!(face_uvs(&mesh, 2), square(8.0, 8.0));
}

#[test]
fn test_strict_three_onto_four() {
    init_logger();
    let mut mesh: PolyMesh = quad_strip(7);
    let reporter = Reporter::none();
    let mut clipboard = UvClipboard::new();

    for f in 0..3 {
        mesh.select_face(FaceId::new(f), true);
    }
    assert_eq!(copy_uv(&mesh, &mut clipboard, &CopyOptions::default(), &reporter).unwrap(), 3);

    mesh.select_all(false);
    for f in 3..7 {
        mesh.select_face(FaceId::new(f), true);
    }
    let err = paste_uv(&mut mesh, &clipboard, &PasteOptions::default().strict(), &reporter).unwrap_err();
    assert_eq!(err, UvError::CountMismatch { src: 3, dest: 4 });
    assert_eq!(mesh.revision(), 0);
}

#[test]
fn test_face_set_paste_of_aligned_capture_keeps_pins_and_seams() {
    init_logger();
    let mut mesh: PolyMesh = quad_strip(3);
    set_face_uvs(&mut mesh, 0, &square(0.0, 0.0));

    let layer = mesh.uv_layers().active().unwrap();
    let dest: Vec<_> = mesh.face_loops(FaceId::new(2)).collect();
    for &l in &dest {
        mesh.uv_layers_mut().layer_mut(layer).set_pin(l, true);
        let e = mesh.get_loop(l).edge;
        mesh.set_edge_seam(e, true);
    }

    let reporter = Reporter::none();
    let mut clipboard = UvClipboard::new();
    mesh.select_face(FaceId::new(0), true);
    copy_selected_uv(&mut mesh, &mut clipboard, &reporter).unwrap();

    mesh.select_all(false);
    mesh.select_face(FaceId::new(2), true);
    assert_eq!(paste_uv(&mut mesh, &clipboard, &PasteOptions::default(), &reporter).unwrap(), 1);

    assert_eq!(face_uvs(&mesh, 2), square(0.0, 0.0));
    let table = mesh.uv_layers().layer(layer);
    let pins: Vec<bool> = dest.iter().map(|&l| table.get(l).pin).collect();
    let seams: Vec<bool> = dest.iter().map(|&l| mesh.edge(mesh.get_loop(l).edge).seam).collect();
    assert_eq!(pins, vec![true; 4]);
    assert_eq!(seams, vec![true; 4]);
}
