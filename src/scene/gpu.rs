use wgpu::Device;

use super::traits::SceneElement;
use super::uniform::ObjectUniform;
use crate::wgpu_utils::UniformBuffer;

/// GPU side of one scene element: its uniform buffer and bind group.
pub struct ObjectGpuResources {
    pub uniform: UniformBuffer<ObjectUniform>,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl ObjectGpuResources {
    /// Layout of the object bind group: one uniform at binding 0, visible to
    /// vertex (model matrix) and fragment (alpha) stages.
    pub fn create_bind_group_layout(device: &Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Object Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }

    pub fn new(device: &Device, element: &impl SceneElement) -> Self {
        let uniform = UniformBuffer::new_with_data(device, &ObjectUniform::from_element(element));
        let bind_group_layout = Self::create_bind_group_layout(device);

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform.binding_resource(),
            }],
        });

        log::debug!("Created GPU resources for '{}'", element.name());

        Self {
            uniform,
            bind_group_layout,
            bind_group,
        }
    }

    /// Uploads the element's current transform and alpha if they changed.
    pub fn sync(&mut self, queue: &wgpu::Queue, element: &impl SceneElement) -> bool {
        self.uniform
            .update_content(queue, ObjectUniform::from_element(element))
    }
}
