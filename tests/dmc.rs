use cgmath::{point3, vec3, EuclideanSpace, InnerSpace, MetricSpace};
use dmc::dmc::*;
use dmc::prelude::*;
use dmc::smoothing::{classify_quad, project, QuadShape};
use fields::*;

#[test]
fn field_below_iso_value_is_empty() {
    init_logger();
    let field = DenseGrid::new(vec3(8, 8, 8), 0.);

    let mesh = mesh_from_field(&field, &DmcConfig::default().with_iso_value(1.)).unwrap();

    assert_eq!(mesh.vertices, vec![]);
    assert!(mesh.is_empty());
}

#[test]
fn grids_without_voxels_are_empty() {
    init_logger();
    for dims in [vec3(1, 5, 5), vec3(5, 1, 5), vec3(5, 5, 0)] {
        let field = DenseGrid::from_fn(dims, |x, y, z| (x + y + z) as f32);
        let mesh = mesh_from_field(&field, &DmcConfig::default().with_iso_value(2.5)).unwrap();
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());
    }
}

#[test]
fn single_corner_on_the_boundary() {
    init_logger();
    let field = single_voxel(0x01);

    let dmc = DualMarchingCubes::new(&field, &DmcConfig::default().with_iso_value(0.5)).unwrap();

    dbg!(dmc.voxels());
    assert_eq!(dmc.voxels().len(), 1);
    let voxel = &dmc.voxels()[0];
    assert_eq!(voxel.config, 0x01);
    assert_eq!(voxel.num_iso_vertices(), 1);
    // The three crossing edges meet at corner 0 and belong to voxels outside the grid.
    assert_eq!(voxel.num_bipolar_edges(), 0);
    assert_eq!(dmc.vertices(), &[point3(0., 0., 0.)]);
    assert!(dmc.triangles().is_empty());
}

#[test]
fn single_corner_owning_its_edges() {
    init_logger();
    let field = single_voxel(0x40);

    let mesh = mesh_from_field(&field, &DmcConfig::default().with_iso_value(0.5)).unwrap();

    dbg!(&mesh);
    // One dual vertex and the three owned edge crossings, none surrounded by four voxels.
    assert_eq!(mesh.vertices.len(), 4);
    assert!(mesh.is_empty());
    for (vertex, expected) in mesh.vertices.iter().zip([
        point3(2. / 3., 2. / 3., 2. / 3.),
        point3(1., 1., 0.),
        point3(1., 0., 1.),
        point3(0., 1., 1.),
    ]) {
        assert!(vertex.distance(expected) < 1e-6, "{:?} != {:?}", vertex, expected);
    }
}

#[test]
fn single_interior_node_is_a_cube() {
    init_logger();
    let mut field = DenseGrid::new(vec3(3, 3, 3), 1.);
    field.set(1, 1, 1, 0.);

    let mesh = mesh_from_field(&field, &DmcConfig::default().with_iso_value(0.5)).unwrap();

    assert_eq!(mesh.triangles.len(), 12);
    assert!(mesh.is_closed_manifold());
    assert!(is_consistently_wound(&mesh));
    assert_eq!(mesh.euler_characteristic(), 2);
    // The dual vertices sit at (±1/6)³; the cube has side 1/3.
    assert!((signed_volume(&mesh) - 1. / 27.).abs() < 1e-6);
}

#[test]
fn sphere_is_closed() {
    init_logger();
    for (samples, radius) in [(8, 0.7), (11, 0.83), (16, 0.6), (32, 0.6)] {
        let field = sphere(samples);
        let cell = 2. / (samples - 1) as f32;
        for iterations in [0, 2] {
            let config = DmcConfig::default()
                .with_iso_value(radius)
                .with_smoothing_iterations(iterations);
            let mesh = mesh_from_field(&field, &config).unwrap();

            assert!(mesh.is_closed_manifold(), "{} samples", samples);
            assert_eq!(mesh.euler_characteristic(), 2, "{} samples", samples);
            assert!(is_consistently_wound(&mesh));
            assert!(signed_volume(&mesh) > 0.);
            for &index in &mesh.indices() {
                let distance = mesh.vertices[index as usize].to_vec().magnitude();
                assert!((distance - radius).abs() < cell, "{} samples", samples);
            }
        }
    }
}

#[test]
fn smoothing_moves_edge_vertices_only() {
    init_logger();
    let field = sphere(16);
    let config = DmcConfig::default().with_iso_value(0.6);
    let raw = DualMarchingCubes::new(&field, &config).unwrap();
    let smooth = DualMarchingCubes::new(&field, &config.with_smoothing_iterations(1)).unwrap();

    assert_eq!(raw.voxels(), smooth.voxels());
    assert_eq!(raw.quads(), smooth.quads());
    let moved = raw
        .vertices()
        .iter()
        .zip(smooth.vertices())
        .filter(|(a, b)| a != b)
        .count();
    assert!(moved > 0);
    // Smoothed edge vertices stay on their edge's line.
    for quad in smooth.quads() {
        let before = raw.vertices()[quad.edge_vertex as usize];
        let after = smooth.vertices()[quad.edge_vertex as usize];
        let (p, q) = (project(before, quad.edge), project(after, quad.edge));
        assert!(p.distance(q) < 1e-5, "{:?} != {:?}", p, q);
    }
}

#[test]
fn ambiguous_pair_is_resolved() {
    init_logger();
    let (field, config) = ambiguous_pair();

    let dmc = DualMarchingCubes::new(&field, &config).unwrap();

    assert_eq!(dmc.ambiguous_pairs(), 1);
    let pair: Vec<_> = dmc
        .voxels()
        .iter()
        .filter(|voxel| voxel.uses_lut2())
        .map(|voxel| (dmc.grid().coord(voxel.index), voxel.config))
        .collect();
    assert_eq!(pair, vec![(point3(1, 1, 1), 0x42), (point3(2, 1, 1), 0x81)]);

    for quad in dmc.quads() {
        let corners = quad
            .vertices
            .map(|vertex| project(dmc.vertices()[vertex as usize], quad.edge));
        assert_ne!(classify_quad(&corners), QuadShape::Complex, "{:?}", quad);
    }

    // Two separate octahedra, one around each inside node.
    let mesh = dmc.into_mesh();
    assert_eq!(mesh.triangles.len(), 24);
    assert!(mesh.is_closed_manifold());
    assert!(is_consistently_wound(&mesh));
    assert_eq!(mesh.euler_characteristic(), 4);
}

#[test]
fn extraction_is_reproducible() {
    init_logger();
    let field = gyroid(24);
    for iterations in [0, 2] {
        let config = DmcConfig::default()
            .with_bounds(gyroid_bounds())
            .with_smoothing_iterations(iterations);
        let first = mesh_from_field(&field, &config).unwrap();
        let second = mesh_from_field(&field, &config).unwrap();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}

#[test]
fn triangles_only_use_dual_vertices() {
    init_logger();
    let field = gyroid(16);
    let config = DmcConfig::default().with_bounds(gyroid_bounds());
    let dmc = DualMarchingCubes::new(&field, &config).unwrap();

    let mut is_dual = vec![false; dmc.vertices().len()];
    for voxel in dmc.voxels() {
        let start = voxel.vertex_range().start;
        for slot in 0..voxel.num_iso_vertices() as usize {
            is_dual[start + slot] = true;
        }
    }
    for triangle in dmc.triangles() {
        assert!(triangle.iter().all(|&vertex| is_dual[vertex as usize]));
    }
}

#[test]
fn invalid_input_is_rejected() {
    let field = sphere(4);

    let flat = Bounds::new(point3(0., 0., 0.), point3(1., 0., 1.));
    assert_eq!(
        mesh_from_field(&field, &DmcConfig::default().with_bounds(flat)),
        Err(DmcError::InvalidBounds {
            axis: 'y',
            min: 0.,
            max: 0.
        })
    );
    assert!(matches!(
        mesh_from_field(&field, &DmcConfig::default().with_iso_value(f32::NAN)),
        Err(DmcError::NonFiniteIsoValue(_))
    ));
}

#[test]
fn fields_can_be_borrowed_or_boxed() {
    let field = sphere(8);
    let config = DmcConfig::default().with_iso_value(0.7);
    let boxed: Box<dyn ScalarField> = Box::new(field.clone());

    let direct = mesh_from_field(&field, &config).unwrap();
    let by_ref = mesh_from_field(&&field, &config).unwrap();
    let dynamic = mesh_from_field(boxed.as_ref(), &config).unwrap();

    assert_eq!(direct, by_ref);
    assert_eq!(direct, dynamic);
}
