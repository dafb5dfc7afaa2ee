use glam::{Mat3, Mat4};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlTexture, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::camera::Camera;
use crate::error::PortfolioError;
use crate::scene::{Lights, MeshData, ModelTransform, ScreenPlane};

const MODEL_VS: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;

uniform mat4 u_model;
uniform mat4 u_view_proj;
uniform mat3 u_normal;

out vec3 v_normal;

void main() {
    v_normal = normalize(u_normal * a_normal);
    gl_Position = u_view_proj * u_model * vec4(a_position, 1.0);
}
"#;

const MODEL_FS: &str = r#"#version 300 es
precision highp float;

in vec3 v_normal;

uniform vec4 u_color;
uniform vec3 u_ambient;
uniform vec3 u_main_dir;
uniform vec3 u_main_color;
uniform vec3 u_fill_dir;
uniform vec3 u_fill_color;

out vec4 frag;

void main() {
    vec3 n = normalize(v_normal);
    vec3 light = u_ambient
        + u_main_color * max(dot(n, u_main_dir), 0.0)
        + u_fill_color * max(dot(n, u_fill_dir), 0.0);
    frag = vec4(u_color.rgb * light, u_color.a);
}
"#;

const SCREEN_VS: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec2 a_uv;

uniform mat4 u_mvp;

out vec2 v_uv;

void main() {
    v_uv = a_uv;
    gl_Position = u_mvp * vec4(a_position, 1.0);
}
"#;

const SCREEN_FS: &str = r#"#version 300 es
precision highp float;

in vec2 v_uv;

uniform sampler2D u_texture;

out vec4 frag;

void main() {
    frag = texture(u_texture, v_uv);
}
"#;

struct GpuPrimitive {
    vao: WebGlVertexArrayObject,
    index_count: i32,
    color: [f32; 4],
    // kept alive for the lifetime of the vao
    _buffers: [WebGlBuffer; 3],
}

struct ModelUniforms {
    model: Option<WebGlUniformLocation>,
    view_proj: Option<WebGlUniformLocation>,
    normal: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    ambient: Option<WebGlUniformLocation>,
    main_dir: Option<WebGlUniformLocation>,
    main_color: Option<WebGlUniformLocation>,
    fill_dir: Option<WebGlUniformLocation>,
    fill_color: Option<WebGlUniformLocation>,
}

/// WebGL2 renderer for the laptop model and the screen plane.
pub struct SceneRenderer {
    gl: GL,
    model_program: WebGlProgram,
    model_uniforms: ModelUniforms,
    primitives: Vec<GpuPrimitive>,

    screen_program: WebGlProgram,
    screen_mvp: Option<WebGlUniformLocation>,
    screen_vao: WebGlVertexArrayObject,
    _screen_vbo: WebGlBuffer,
    screen_texture: WebGlTexture,
    plane: ScreenPlane,

    lights: Lights,
}

/// Ask `canvas` for a WebGL2 context.
pub fn webgl2_context(canvas: &HtmlCanvasElement) -> Result<GL, PortfolioError> {
    canvas
        .get_context("webgl2")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<GL>().ok())
        .ok_or(PortfolioError::NoWebGl)
}

impl SceneRenderer {
    pub fn new(gl: GL, mesh: &MeshData, plane: ScreenPlane, lights: Lights) -> Result<Self, JsValue> {
        let model_program = link_program(&gl, MODEL_VS, MODEL_FS)?;
        let model_uniforms = ModelUniforms {
            model: gl.get_uniform_location(&model_program, "u_model"),
            view_proj: gl.get_uniform_location(&model_program, "u_view_proj"),
            normal: gl.get_uniform_location(&model_program, "u_normal"),
            color: gl.get_uniform_location(&model_program, "u_color"),
            ambient: gl.get_uniform_location(&model_program, "u_ambient"),
            main_dir: gl.get_uniform_location(&model_program, "u_main_dir"),
            main_color: gl.get_uniform_location(&model_program, "u_main_color"),
            fill_dir: gl.get_uniform_location(&model_program, "u_fill_dir"),
            fill_color: gl.get_uniform_location(&model_program, "u_fill_color"),
        };

        let primitives = mesh
            .primitives
            .iter()
            .map(|p| -> Result<GpuPrimitive, JsValue> {
                let vao = gl.create_vertex_array().ok_or("failed to create vao")?;
                gl.bind_vertex_array(Some(&vao));
                let positions: Vec<f32> = p.positions.iter().flatten().copied().collect();
                let normals: Vec<f32> = p.normals.iter().flatten().copied().collect();
                let pos_buf = upload_f32(&gl, &positions)?;
                gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, 0, 0);
                gl.enable_vertex_attrib_array(0);
                let nrm_buf = upload_f32(&gl, &normals)?;
                gl.vertex_attrib_pointer_with_i32(1, 3, GL::FLOAT, false, 0, 0);
                gl.enable_vertex_attrib_array(1);
                let idx_buf = gl.create_buffer().ok_or("failed to create index buffer")?;
                gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&idx_buf));
                gl.buffer_data_with_array_buffer_view(
                    GL::ELEMENT_ARRAY_BUFFER,
                    &js_sys::Uint32Array::from(p.indices.as_slice()),
                    GL::STATIC_DRAW,
                );
                gl.bind_vertex_array(None);
                Ok(GpuPrimitive {
                    vao,
                    index_count: p.indices.len() as i32,
                    color: p.base_color,
                    _buffers: [pos_buf, nrm_buf, idx_buf],
                })
            })
            .collect::<Result<Vec<_>, JsValue>>()?;

        let screen_program = link_program(&gl, SCREEN_VS, SCREEN_FS)?;
        let screen_mvp = gl.get_uniform_location(&screen_program, "u_mvp");
        let screen_vao = gl.create_vertex_array().ok_or("failed to create vao")?;
        gl.bind_vertex_array(Some(&screen_vao));
        let screen_vbo = upload_f32(&gl, &plane.vertices())?;
        gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, 5 * 4, 0);
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(1, 2, GL::FLOAT, false, 5 * 4, 3 * 4);
        gl.enable_vertex_attrib_array(1);
        gl.bind_vertex_array(None);

        let screen_texture = gl.create_texture().ok_or("failed to create texture")?;
        gl.bind_texture(GL::TEXTURE_2D, Some(&screen_texture));
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
        gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);

        gl.enable(GL::DEPTH_TEST);
        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);

        log::info!("renderer ready: {} primitives", primitives.len());
        Ok(Self {
            gl,
            model_program,
            model_uniforms,
            primitives,
            screen_program,
            screen_mvp,
            screen_vao,
            _screen_vbo: screen_vbo,
            screen_texture,
            plane,
            lights,
        })
    }

    /// Copy the painted screen canvas into the plane's texture.
    pub fn upload_screen(&self, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let gl = &self.gl;
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.screen_texture));
        gl.tex_image_2d_with_u32_and_u32_and_html_canvas_element(
            GL::TEXTURE_2D,
            0,
            GL::RGBA as i32,
            GL::RGBA,
            GL::UNSIGNED_BYTE,
            canvas,
        )
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    /// Draw one frame. GL errors are left to the browser.
    pub fn render_frame(&self, camera: &Camera, model: &ModelTransform) {
        let gl = &self.gl;
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let view_proj = camera.view_projection();
        let model_matrix = model.matrix();
        let normal_matrix = Mat3::from_mat4(model_matrix).inverse().transpose();
        let u = &self.model_uniforms;
        let l = &self.lights;

        gl.enable(GL::CULL_FACE);
        gl.use_program(Some(&self.model_program));
        gl.uniform_matrix4fv_with_f32_array(u.model.as_ref(), false, &model_matrix.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(u.view_proj.as_ref(), false, &view_proj.to_cols_array());
        gl.uniform_matrix3fv_with_f32_array(u.normal.as_ref(), false, &normal_matrix.to_cols_array());
        let ambient = l.ambient_color * l.ambient_intensity;
        gl.uniform3f(u.ambient.as_ref(), ambient.x, ambient.y, ambient.z);
        for (dir_loc, color_loc, light) in [
            (&u.main_dir, &u.main_color, &l.main),
            (&u.fill_dir, &u.fill_color, &l.fill),
        ] {
            let d = light.direction();
            let c = light.color * light.intensity;
            gl.uniform3f(dir_loc.as_ref(), d.x, d.y, d.z);
            gl.uniform3f(color_loc.as_ref(), c.x, c.y, c.z);
        }
        for p in &self.primitives {
            gl.uniform4fv_with_f32_array(u.color.as_ref(), &p.color);
            gl.bind_vertex_array(Some(&p.vao));
            gl.draw_elements_with_i32(GL::TRIANGLES, p.index_count, GL::UNSIGNED_INT, 0);
        }

        // screen plane is visible from both sides
        gl.disable(GL::CULL_FACE);
        gl.use_program(Some(&self.screen_program));
        let mvp: Mat4 = view_proj * self.plane.matrix();
        gl.uniform_matrix4fv_with_f32_array(self.screen_mvp.as_ref(), false, &mvp.to_cols_array());
        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.screen_texture));
        gl.bind_vertex_array(Some(&self.screen_vao));
        gl.draw_arrays(GL::TRIANGLES, 0, 6);
        gl.bind_vertex_array(None);
    }
}

fn upload_f32(gl: &GL, data: &[f32]) -> Result<WebGlBuffer, JsValue> {
    let buffer = gl.create_buffer().ok_or("failed to create buffer")?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(
        GL::ARRAY_BUFFER,
        &js_sys::Float32Array::from(data),
        GL::STATIC_DRAW,
    );
    Ok(buffer)
}

fn compile_shader(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("failed to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let msg = gl.get_shader_info_log(&shader).unwrap_or_default();
        Err(JsValue::from_str(&format!("shader compile failed: {msg}")))
    }
}

fn link_program(gl: &GL, vs: &str, fs: &str) -> Result<WebGlProgram, JsValue> {
    let vs = compile_shader(gl, GL::VERTEX_SHADER, vs)?;
    let fs = compile_shader(gl, GL::FRAGMENT_SHADER, fs)?;
    let program = gl.create_program().ok_or("failed to create program")?;
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let msg = gl.get_program_info_log(&program).unwrap_or_default();
        Err(JsValue::from_str(&format!("program link failed: {msg}")))
    }
}
