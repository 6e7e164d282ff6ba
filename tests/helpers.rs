use canvas_fireworks::physic_engine::{
    Color, PhysicConfig, PhysicEngine, UpdateResult, Viewport,
};
use canvas_fireworks::renderer_engine::Surface;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Appel de dessin enregistré par `RecordingSurface`.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
        alpha: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
        alpha: f32,
    },
    Resize {
        viewport: Viewport,
        device_pixel_ratio: f32,
    },
}

/// Surface factice : journalise chaque primitive avec l'opacité globale du moment.
#[allow(dead_code)]
pub struct RecordingSurface {
    pub viewport: Viewport,
    pub alpha: f32,
    pub calls: Vec<DrawCall>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            alpha: 1.0,
            calls: Vec::new(),
        }
    }

    pub fn circles(&self) -> Vec<(Vec2, f32, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle {
                    center,
                    radius,
                    alpha,
                    ..
                } => Some((*center, *radius, *alpha)),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport, device_pixel_ratio: f32) {
        self.viewport = viewport;
        self.calls.push(DrawCall::Resize {
            viewport,
            device_pixel_ratio,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.calls.push(DrawCall::Rect {
            origin,
            size,
            color,
            alpha: self.alpha,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            alpha: self.alpha,
        });
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn global_alpha(&self) -> f32 {
        self.alpha
    }
}

/// Moteur factice : journalise les appels reçus depuis le simulateur.
#[allow(dead_code)]
pub struct LoggingPhysic {
    pub log: Rc<RefCell<Vec<String>>>,
    pub viewport: Viewport,
    pub config: PhysicConfig,
}

#[allow(dead_code)]
impl LoggingPhysic {
    pub fn new(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            log,
            viewport: Viewport::new(800.0, 600.0),
            config: PhysicConfig::default(),
        }
    }

    fn push(&self, entry: String) {
        self.log.borrow_mut().push(entry);
    }
}

impl PhysicEngine for LoggingPhysic {
    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.push(format!(
            "physic.set_viewport {}x{}",
            viewport.width, viewport.height
        ));
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn launch_random(&mut self) -> u64 {
        self.push("physic.launch_random".into());
        0
    }

    fn launch_toward(&mut self, target: Vec2) -> u64 {
        self.push(format!("physic.launch_toward {} {}", target.x, target.y));
        0
    }

    fn grand_show(&mut self, count: usize) {
        self.push(format!("physic.grand_show {}", count));
    }

    fn schedule_grand_show(&mut self, delay_ms: f64, count: usize) {
        self.push(format!("physic.schedule_grand_show {} {}", delay_ms, count));
    }

    fn update<S: Surface + ?Sized>(&mut self, _dt_ms: f64, _surface: &mut S) -> UpdateResult {
        self.push("physic.update".into());
        UpdateResult::default()
    }

    fn reload_config(&mut self, config: &PhysicConfig) {
        self.config = config.clone();
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }

    fn close(&mut self) {
        self.push("physic.close".into());
    }
}
