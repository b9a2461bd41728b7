use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use collada::Document;
use collada::parser::parse_document;
use std::fs::File;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Generate a document with one grid mesh of the given size
fn generate_dae(vertices: usize, triangles: usize) -> String {
    let mut positions = String::with_capacity(vertices * 24);
    for i in 0..vertices {
        let x = (i % 100) as f64 * 0.5;
        let y = (i / 100) as f64 * 0.5;
        positions.push_str(&format!("{} {} 0.125\n", x, y));
    }

    let mut indices = String::with_capacity(triangles * 18);
    for i in 0..triangles {
        let base = (i * 3) % vertices.saturating_sub(2).max(1);
        indices.push_str(&format!("{} {} {} ", base, base + 1, base + 2));
    }

    format!(
        r##"<?xml version="1.0" encoding="utf-8"?>
<COLLADA xmlns="http://www.collada.org/2008/03/COLLADASchema" version="1.5.0">
  <library_effects>
    <effect id="fx">
      <profile_COMMON>
        <technique sid="common">
          <phong>
            <diffuse><color>0.8 0.8 0.8 1</color></diffuse>
            <shininess><float>32</float></shininess>
          </phong>
        </technique>
      </profile_COMMON>
    </effect>
  </library_effects>
  <library_geometries>
    <geometry id="grid">
      <mesh>
        <source id="grid-positions">
          <float_array id="grid-positions-array" count="{float_count}">{positions}</float_array>
          <technique_common>
            <accessor source="#grid-positions-array" count="{vertices}" stride="3">
              <param name="X" type="float"/>
              <param name="Y" type="float"/>
              <param name="Z" type="float"/>
            </accessor>
          </technique_common>
        </source>
        <vertices id="grid-vertices">
          <input semantic="POSITION" source="#grid-positions"/>
        </vertices>
        <triangles count="{triangles}">
          <input semantic="VERTEX" source="#grid-vertices" offset="0"/>
          <p>{indices}</p>
        </triangles>
      </mesh>
    </geometry>
  </library_geometries>
</COLLADA>"##,
        float_count = vertices * 3,
        positions = positions,
        vertices = vertices,
        triangles = triangles,
        indices = indices,
    )
}

/// Wrap a document into an in-memory `.zae` archive
fn generate_zae(dae: &str) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
    let options = SimpleFileOptions::default();

    zip.start_file("manifest.xml", options).unwrap();
    zip.write_all(b"<dae_root>./scene.dae</dae_root>").unwrap();
    zip.start_file("scene.dae", options).unwrap();
    zip.write_all(dae.as_bytes()).unwrap();

    zip.finish().unwrap();
    buffer
}

fn bench_parse_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_str");

    for &(vertices, triangles) in &[(1_000, 500), (10_000, 5_000), (100_000, 50_000)] {
        let dae = generate_dae(vertices, triangles);
        group.throughput(Throughput::Bytes(dae.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("vertices_triangles", format!("{}v_{}t", vertices, triangles)),
            &dae,
            |b, dae| b.iter(|| black_box(parse_document(dae).unwrap())),
        );
    }

    group.finish();
}

fn bench_parse_file(c: &mut Criterion) {
    let dae = generate_dae(10_000, 5_000);
    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    temp_file.write_all(dae.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    let path = temp_file.path();

    c.bench_function("parse_file_10000v", |b| {
        b.iter(|| {
            let file = std::io::BufReader::new(File::open(path).unwrap());
            black_box(Document::from_reader(file).unwrap())
        });
    });
}

fn bench_parse_zae(c: &mut Criterion) {
    let zae = generate_zae(&generate_dae(10_000, 5_000));

    c.bench_function("parse_zae_10000v", |b| {
        b.iter(|| black_box(Document::from_zae(Cursor::new(&zae)).unwrap()));
    });
}

criterion_group!(benches, bench_parse_str, bench_parse_file, bench_parse_zae);
criterion_main!(benches);
