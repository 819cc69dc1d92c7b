use approx::assert_abs_diff_eq;
use chop_mesh::{FacePolicy, OffMeshBuilder, PointSet, SectorMesher};

fn two_edge_builder() -> (OffMeshBuilder, PointSet, PointSet) {
    let mut builder = OffMeshBuilder::new(50.0, b"deg");
    let a = builder.create_and_add_point_set(100.0, 50.0, 0.0);
    let b = builder.create_and_add_point_set(100.0, 50.0, 90.0);
    (builder, a, b)
}

fn parse_vertex_line(line: &str) -> [f64; 3] {
    let tokens: Vec<f64> = line.split(' ').map(|t| t.parse().unwrap()).collect();
    assert_eq!(tokens.len(), 3, "bad vertex line {:?}", line);
    [tokens[0], tokens[1], tokens[2]]
}

#[test]
fn test_quarter_disk_vertex_block() {
    let (builder, _, _) = two_edge_builder();
    let text = builder.to_off_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "OFF");
    assert_eq!(lines[1], "8 0 0");
    assert_eq!(lines.len(), 10);

    let expected = [
        [100.0, 0.0, 50.0],
        [100.0, 0.0, -50.0],
        [50.0, 0.0, 50.0],
        [50.0, 0.0, -50.0],
        [0.0, 100.0, 50.0],
        [0.0, 100.0, -50.0],
        [0.0, 50.0, 50.0],
        [0.0, 50.0, -50.0],
    ];
    for (line, want) in lines[2..].iter().zip(expected.iter()) {
        let got = parse_vertex_line(line);
        for k in 0..3 {
            assert_abs_diff_eq!(got[k], want[k], epsilon = 1e-9);
        }
    }
}

#[test]
fn test_vertex_lines_round_trip_exactly() {
    let (builder, _, _) = two_edge_builder();
    let text = builder.to_off_string();
    for (line, vertex) in text.lines().skip(2).zip(builder.vertices()) {
        assert_eq!(parse_vertex_line(line), vertex.position.to_array());
    }
}

#[test]
fn test_face_lines_follow_vertex_block() {
    let (mut builder, a, b) = two_edge_builder();
    let mesher = SectorMesher {
        arc_step_degrees: 170.0,
        ..SectorMesher::new(FacePolicy::SolidSectors, 100.0, 50.0)
    };
    mesher.close(&mut builder, 2, &b, &a);

    let text = builder.to_off_string();
    let lines: Vec<&str> = text.lines().collect();
    // 90 round to 360 in two segments, with one extra ring at 225
    assert_eq!(lines[1], "12 10 0");
    assert_eq!(lines.len(), 2 + 12 + 10);
    assert_eq!(parse_vertex_line(lines[10]), builder.vertices()[8].position.to_array());
    assert_abs_diff_eq!(builder.vertices()[8].x(), 100.0 * 225f64.to_radians().cos(), epsilon = 1e-9);

    assert_eq!(lines[14], "4 4 8 10 6");
    assert_eq!(lines[18], "4 8 0 2 10");
    for face_line in &lines[14..] {
        let ids: Vec<usize> = face_line.split(' ').map(|t| t.parse().unwrap()).collect();
        assert_eq!(ids[0], ids.len() - 1);
        assert!(ids[1..].iter().all(|&id| id < 12));
    }
}

#[test]
fn test_save_writes_same_text() {
    let (builder, _, _) = two_edge_builder();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chopper.off");

    builder.save(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, builder.to_off_string());
}
