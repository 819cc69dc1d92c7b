// Solid sector meshes must be closed, consistently wound and facing outward
// for every span width, including the wrap from the last edge to the first.

use std::collections::HashMap;
use std::f64::consts::PI;

use approx::assert_relative_eq;
use chop_math::DVec3;
use chop_mesh::{FacePolicy, OffMeshBuilder};
use chop_nexus::{generate_off_mesh, DiskChopper, GeneratorConfig};

const RADIUS: f64 = 100.0;
const SLIT_HEIGHT: f64 = 50.0;
const HALF_DEPTH: f64 = 50.0;

fn chopper(edges: &[f64], units: &[u8]) -> DiskChopper {
    DiskChopper {
        name: "winding".into(),
        radius: RADIUS,
        slit_height: SLIT_HEIGHT,
        slit_edges: edges.to_vec(),
        units: units.to_vec(),
        slits: Some(edges.len() as u64 / 2),
        rotation_speed: None,
    }
}

fn solid_mesh(edges: &[f64], units: &[u8]) -> OffMeshBuilder {
    let config = GeneratorConfig {
        face_policy: FacePolicy::SolidSectors,
        half_depth: HALF_DEPTH,
        ..GeneratorConfig::default()
    };
    generate_off_mesh(&chopper(edges, units), &config).unwrap()
}

fn positions(mesh: &OffMeshBuilder, face: usize) -> Vec<DVec3> {
    mesh.faces()[face]
        .iter()
        .map(|id| mesh.vertices()[id.value()].position)
        .collect()
}

fn newell_normal(points: &[DVec3]) -> DVec3 {
    let mut n = DVec3::ZERO;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        n.x += (p.y - q.y) * (p.z + q.z);
        n.y += (p.z - q.z) * (p.x + q.x);
        n.z += (p.x - q.x) * (p.y + q.y);
    }
    n
}

/// Every directed edge appears once and is matched by its reverse.
fn assert_closed_and_oriented(mesh: &OffMeshBuilder) {
    let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
    for face in mesh.faces() {
        for (i, id) in face.iter().enumerate() {
            let next = face[(i + 1) % face.len()];
            *directed.entry((id.value(), next.value())).or_default() += 1;
        }
    }
    for (&(u, v), &count) in &directed {
        assert_eq!(count, 1, "edge {} -> {} used {} times", u, v, count);
        assert_eq!(directed.get(&(v, u)), Some(&1), "edge {} -> {} has no twin", u, v);
    }
}

/// Signed volume by the divergence theorem over fan triangles.
fn signed_volume(mesh: &OffMeshBuilder) -> f64 {
    (0..mesh.face_count())
        .map(|face| {
            let p = positions(mesh, face);
            (1..p.len() - 1)
                .map(|k| p[0].dot(p[k].cross(p[k + 1])))
                .sum::<f64>()
        })
        .sum::<f64>()
        / 6.0
}

/// Volume of a span of `radians` cut into `segments` chords.
fn span_volume(radians: f64, segments: usize) -> f64 {
    let chord = radians / segments as f64;
    segments as f64 * 0.5 * (RADIUS * RADIUS - SLIT_HEIGHT * SLIT_HEIGHT) * chord.sin() * 2.0 * HALF_DEPTH
}

fn assert_front_caps_face_up(mesh: &OffMeshBuilder) {
    let mut caps = 0;
    for face in 0..mesh.face_count() {
        let p = positions(mesh, face);
        if p.iter().all(|v| v.z == HALF_DEPTH) {
            assert!(newell_normal(&p).z > 0.0, "front face {} wound clockwise", face);
            caps += 1;
        }
    }
    assert!(caps > 0);
}

fn assert_euler(mesh: &OffMeshBuilder, blocks: usize) {
    let edges: usize = mesh.faces().iter().map(Vec::len).sum::<usize>() / 2;
    let chi = mesh.vertex_count() as i64 - edges as i64 + mesh.face_count() as i64;
    assert_eq!(chi, 2 * blocks as i64);
}

#[test]
fn test_single_slit_wrap_span() {
    // material runs 90 -> 360: 14 segments at the default arc step
    let mesh = solid_mesh(&[0.0, 90.0], b"deg");
    assert_closed_and_oriented(&mesh);
    assert_front_caps_face_up(&mesh);
    assert_euler(&mesh, 1);
    assert_relative_eq!(
        signed_volume(&mesh),
        span_volume(1.5 * PI, 14),
        max_relative = 1e-9
    );
}

#[test]
fn test_two_slit_layout() {
    // spans 23 -> 90 (4 segments) and 113 -> 360 (13 segments)
    let mesh = solid_mesh(&[0.0, 23.0, 90.0, 113.0], b"deg");
    assert_closed_and_oriented(&mesh);
    assert_front_caps_face_up(&mesh);
    assert_euler(&mesh, 2);
    let expected = span_volume(67f64.to_radians(), 4) + span_volume(247f64.to_radians(), 13);
    assert_relative_eq!(signed_volume(&mesh), expected, max_relative = 1e-9);
}

#[test]
fn test_radian_chopper() {
    // spans 1 -> 3 rad (115 degrees, 6 segments) and 4 -> 2 pi (131 degrees, 7 segments)
    let mesh = solid_mesh(&[0.0, 1.0, 3.0, 4.0], b"rad");
    assert_closed_and_oriented(&mesh);
    assert_front_caps_face_up(&mesh);
    assert_euler(&mesh, 2);
    let expected = span_volume(2.0, 6) + span_volume(2.0 * PI - 4.0, 7);
    assert_relative_eq!(signed_volume(&mesh), expected, max_relative = 1e-9);
}

#[test]
fn test_edges_listed_across_zero() {
    // slit 350 -> 10, material 10 -> 350
    let mesh = solid_mesh(&[350.0, 10.0], b"deg");
    assert_closed_and_oriented(&mesh);
    assert_front_caps_face_up(&mesh);
    assert_relative_eq!(
        signed_volume(&mesh),
        span_volume(340f64.to_radians(), 17),
        max_relative = 1e-9
    );
}
