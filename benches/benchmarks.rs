//! Benchmarks tests for measuring the performance of the code

use std::path::Path;

use cmake_project_maker::{
    cmake::render_build_script,
    config_file::{schema_from_str, SchemaFormat},
    utils::{reader::build_model, template::plan_project_artifacts},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SCHEMA: &str = r#"{
    "project_name": "engine",
    "cpp": {
        "target_include_directories": ["include", "third_party/glm"],
        "target_link_libraries": ["fmt::fmt", "spdlog::spdlog"],
        "CXX_STANDARD": 20
    },
    "MSVC": {
        "parent_visual_studio_filter": "Engine",
        "target_compile_options": "/MP /W4"
    },
    "source_files": ["core/world", "core/entity", "render/mesh", "render/shader", "audio"],
    "project_type": "STATIC"
}"#;

pub fn build_script_benchmark(c: &mut Criterion) {
    let schema = schema_from_str(SCHEMA, SchemaFormat::Json).unwrap();
    let model = build_model(schema).unwrap();

    c.bench_function("Render the CMakeLists.txt", |b| {
        b.iter(|| render_build_script(black_box(&model)))
    });
}

pub fn project_layout_benchmark(c: &mut Criterion) {
    let schema = schema_from_str(SCHEMA, SchemaFormat::Json).unwrap();
    let model = build_model(schema).unwrap();

    c.bench_function("Plan the project artifacts", |b| {
        b.iter(|| plan_project_artifacts(black_box(Path::new("/work")), black_box(&model)))
    });

    c.bench_function("Parse and validate the schema", |b| {
        b.iter(|| build_model(schema_from_str(black_box(SCHEMA), SchemaFormat::Json).unwrap()))
    });
}

criterion_group!(benches, build_script_benchmark, project_layout_benchmark);
criterion_main!(benches);
