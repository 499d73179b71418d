/// Shared vertex stage: places a unit mesh by centre, size and rotation
const VERTEX_STAGE: &str = r#"
struct Camera {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

struct VertexInput {
    @location(0) position: vec2<f32>,
};

struct InstanceInput {
    @location(1) transform: vec4<f32>, // centre x, centre y, width, height
    @location(2) tint: vec4<f32>,
    @location(3) rotation: f32,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local: vec2<f32>,
    @location(1) tint: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let scaled = vertex.position * instance.transform.zw;
    let c = cos(instance.rotation);
    let s = sin(instance.rotation);
    let rotated = vec2<f32>(scaled.x * c - scaled.y * s, scaled.x * s + scaled.y * c);
    let world = instance.transform.xy + rotated;

    var out: VertexOutput;
    out.clip_position = camera.view_proj * vec4<f32>(world, 0.0, 1.0);
    out.local = vertex.position;
    out.tint = instance.tint;
    return out;
}
"#;

const SOLID_FRAGMENT: &str = r#"
@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.tint;
}
"#;

// Gradient runs from the ellipse centre (t = 0) to twice its height below
// (t = 1); anything above the centre clamps to the first colour.
const GRADIENT_FRAGMENT: &str = r#"
const MAX_STOPS: u32 = 128u;

struct Gradient {
    colors: array<vec4<f32>, 128>,
    count: u32,
    alpha: f32,
    _pad0: f32,
    _pad1: f32,
};

@group(1) @binding(0)
var<uniform> gradient: Gradient;

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let count = min(gradient.count, MAX_STOPS);
    if (count == 0u) {
        return vec4<f32>(0.0, 0.0, 0.0, 0.0);
    }

    let t = clamp(in.local.y * 0.5, 0.0, 1.0);
    let pos = t * f32(count - 1u);
    let i = u32(floor(pos));
    let j = min(i + 1u, count - 1u);
    let rgb = mix(gradient.colors[i].rgb, gradient.colors[j].rgb, fract(pos));
    return vec4<f32>(rgb, gradient.alpha);
}
"#;

pub fn solid_shader() -> String {
    format!("{}{}", VERTEX_STAGE, SOLID_FRAGMENT)
}

pub fn gradient_shader() -> String {
    format!("{}{}", VERTEX_STAGE, GRADIENT_FRAGMENT)
}
