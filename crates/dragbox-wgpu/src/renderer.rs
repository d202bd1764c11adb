//! WGPU implementation of [`dragbox::Renderer`].
//!
//! Every primitive becomes a textured quad in one pipeline. Solid fills bind a
//! 1x1 white texture; text binds the texture created for it. Quads are
//! collected during the frame and submitted in a single render pass by
//! [`WgpuRenderer::present`], in the order they were issued.

use std::sync::Arc;

use dragbox::{Color, IntrinsicSize, Rect, RenderError, RenderedText, Renderer, TextMeasurer};
use winit::window::Window;

use crate::error::InitError;
use crate::font::Font;
use crate::vertex::QuadVertex;

const INITIAL_VERTEX_CAPACITY: usize = 1024;

/// A rendered string uploaded to the GPU.
///
/// Dropping it releases the texture once the GPU no longer references it.
pub struct TextTexture {
    bind_group: Arc<wgpu::BindGroup>,
    _texture: wgpu::Texture,
    size: IntrinsicSize,
}

impl RenderedText for TextTexture {
    fn size(&self) -> IntrinsicSize {
        self.size
    }
}

/// Run of consecutive vertices sharing a texture
struct QuadBatch {
    bind_group: Arc<wgpu::BindGroup>,
    start: u32,
    count: u32,
}

pub struct WgpuRenderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    texture_bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    white: Arc<wgpu::BindGroup>,
    _white_texture: wgpu::Texture,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertices: Vec<QuadVertex>,
    batches: Vec<QuadBatch>,
    clear_color: wgpu::Color,
    font: Font,
}

impl WgpuRenderer {
    /// Create the surface, device and pipeline for `window`.
    pub async fn new(window: Arc<Window>, font: Font) -> Result<Self, InitError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| InitError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| InitError::Adapter(e.to_string()))?;

        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Dragbox Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| InitError::Device(e.to_string()))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let Some(&first_format) = surface_caps.formats.first() else {
            return Err(InitError::Surface(
                "surface reports no supported formats".to_string(),
            ));
        };
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(first_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        if size.width > 0 && size.height > 0 {
            surface.configure(&device, &config);
        }

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Dragbox Quad Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/quad.wgsl").into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Dragbox Uniform Buffer"),
            size: std::mem::size_of::<[f32; 2]>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let globals_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Dragbox Globals Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Dragbox Globals Bind Group"),
            layout: &globals_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Dragbox Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        // Text is drawn at its native size, so nearest sampling stays crisp
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Dragbox Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Dragbox Pipeline Layout"),
            bind_group_layouts: &[&globals_bind_group_layout, &texture_bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Dragbox Quad Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[QuadVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Dragbox Vertex Buffer"),
            size: (INITIAL_VERTEX_CAPACITY * std::mem::size_of::<QuadVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let (white_texture, white) = upload_texture(
            &device,
            &queue,
            &texture_bind_group_layout,
            &sampler,
            "Dragbox White Texture",
            1,
            1,
            &[255, 255, 255, 255],
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            globals_bind_group,
            texture_bind_group_layout,
            sampler,
            white: Arc::new(white),
            _white_texture: white_texture,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            vertices: Vec::new(),
            batches: Vec::new(),
            clear_color: wgpu::Color::BLACK,
            font,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigure with the current size, after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.resize(self.config.width, self.config.height);
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    fn push_quad(&mut self, rect: Rect, color: [f32; 4], bind_group: &Arc<wgpu::BindGroup>) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }

        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&QuadVertex::quad(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            color,
        ));

        match self.batches.last_mut() {
            Some(batch) if Arc::ptr_eq(&batch.bind_group, bind_group) => batch.count += 6,
            _ => self.batches.push(QuadBatch {
                bind_group: Arc::clone(bind_group),
                start,
                count: 6,
            }),
        }
    }

    /// Submit the queued frame and present it.
    ///
    /// The queue is emptied either way, which also releases the last
    /// references to any text textures dropped during the frame.
    pub fn present(&mut self) -> Result<(), wgpu::SurfaceError> {
        let result = self.submit_frame();
        self.vertices.clear();
        self.batches.clear();
        result
    }

    fn submit_frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        if self.config.width == 0 || self.config.height == 0 {
            return Ok(());
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if self.vertices.len() > self.vertex_capacity {
            self.vertex_capacity = (self.vertices.len() * 2).next_power_of_two();
            self.vertex_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("Dragbox Vertex Buffer"),
                size: (self.vertex_capacity * std::mem::size_of::<QuadVertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }

        let screen_size = [self.config.width as f32, self.config.height as f32];
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&screen_size));
        if !self.vertices.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.vertices));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Dragbox Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Dragbox Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            for batch in &self.batches {
                render_pass.set_bind_group(1, batch.bind_group.as_ref(), &[]);
                render_pass.draw(batch.start..batch.start + batch.count, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

impl TextMeasurer for WgpuRenderer {
    fn measure_text(&mut self, text: &str) -> IntrinsicSize {
        self.font.measure(text)
    }
}

impl Renderer for WgpuRenderer {
    type Text = TextTexture;

    fn create_text(&mut self, text: &str, color: Color) -> Result<TextTexture, RenderError> {
        let bitmap = self.font.rasterize(text, color)?;

        let max = self.device.limits().max_texture_dimension_2d;
        if bitmap.width > max || bitmap.height > max {
            return Err(RenderError::Texture(format!(
                "{}x{} exceeds the {max} pixel texture limit",
                bitmap.width, bitmap.height
            )));
        }

        let (texture, bind_group) = upload_texture(
            &self.device,
            &self.queue,
            &self.texture_bind_group_layout,
            &self.sampler,
            "Dragbox Text Texture",
            bitmap.width,
            bitmap.height,
            &bitmap.pixels,
        );

        Ok(TextTexture {
            bind_group: Arc::new(bind_group),
            _texture: texture,
            size: IntrinsicSize::new(bitmap.width as f32, bitmap.height as f32),
        })
    }

    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.batches.clear();
        self.clear_color = wgpu::Color {
            r: color.r as f64,
            g: color.g as f64,
            b: color.b as f64,
            a: color.a as f64,
        };
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let white = Arc::clone(&self.white);
        self.push_quad(rect, [color.r, color.g, color.b, color.a], &white);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let edges = [
            Rect::new(rect.x, rect.y, rect.width, 1.0),
            Rect::new(rect.x, rect.bottom() - 1.0, rect.width, 1.0),
            Rect::new(rect.x, rect.y + 1.0, 1.0, rect.height - 2.0),
            Rect::new(rect.right() - 1.0, rect.y + 1.0, 1.0, rect.height - 2.0),
        ];
        for edge in edges {
            self.fill_rect(edge, color);
        }
    }

    fn draw_text(&mut self, text: &TextTexture, rect: Rect) {
        self.push_quad(rect, [1.0; 4], &text.bind_group);
    }
}

/// Create an RGBA8 sRGB texture from `pixels` and bind it with `sampler`.
#[allow(clippy::too_many_arguments)]
fn upload_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    label: &str,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> (wgpu::Texture, wgpu::BindGroup) {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });

    (texture, bind_group)
}
