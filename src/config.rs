//! Static page configuration.
//!
//! Every section carries `#[serde(default)]`, so a page may override only the
//! fields it cares about and inherit the rest from the built-in values.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

/// Top-level configuration consumed at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social: Social,
    pub colors: Palette,
    pub projects: Vec<Project>,
    pub about: About,
    pub contact: ContactMessages,
    pub model: ModelConfig,
    pub performance: PerformanceConfig,
    pub scroll: ScrollConfig,
    pub interaction: InteractionConfig,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".into(),
            title: "Web Developer & 3D Artist".into(),
            email: "hello@example.com".into(),
            phone: "+1 (555) 123-4567".into(),
            location: "San Francisco, CA".into(),
            social: Social::default(),
            colors: Palette::default(),
            projects: vec![
                Project {
                    title: "Interactive Dashboard".into(),
                    description: "A modern analytics dashboard with a 3D data view".into(),
                    gradient: ("#667eea".into(), "#764ba2".into()),
                    technologies: vec!["Rust".into(), "WebGL".into(), "wasm".into()],
                },
                Project {
                    title: "3D Portfolio".into(),
                    description: "This portfolio, with scroll-driven animation and 3D elements".into(),
                    gradient: ("#ff6b6b".into(), "#ee5a24".into()),
                    technologies: vec!["Rust".into(), "glam".into(), "WebGL2".into()],
                },
                Project {
                    title: "Mobile App".into(),
                    description: "A responsive mobile application with dark mode support".into(),
                    gradient: ("#11998e".into(), "#38ef7d".into()),
                    technologies: vec!["Rust".into(), "wasm-bindgen".into()],
                },
            ],
            about: About::default(),
            contact: ContactMessages::default(),
            model: ModelConfig::default(),
            performance: PerformanceConfig::default(),
            scroll: ScrollConfig::default(),
            interaction: InteractionConfig::default(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a JSON config block. Missing fields fall back to defaults.
    pub fn from_json(src: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would stop the scroll position from converging or
    /// leave the scene without a usable idle delay.
    pub fn validate(&self) -> Result<()> {
        let speed = self.scroll.scroll_speed;
        if !(speed > 0.0 && speed <= 1.0) {
            return Err(invalid(format!("scroll.scroll_speed {speed} outside (0, 1]")));
        }
        if self.scroll.total_sections == 0 {
            return Err(invalid("scroll.total_sections must be at least 1".into()));
        }
        let idle = self.interaction.idle_delay_ms;
        if !(idle.is_finite() && idle >= 0.0) {
            return Err(invalid(format!("interaction.idle_delay_ms {idle} is not a duration")));
        }
        if !(self.performance.max_pixel_ratio > 0.0) {
            return Err(invalid(format!(
                "performance.max_pixel_ratio {} must be positive",
                self.performance.max_pixel_ratio
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> PortfolioError {
    PortfolioError::InvalidConfig(msg)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
}

impl Default for Social {
    fn default() -> Self {
        Self {
            github: "yourusername".into(),
            linkedin: "yourprofile".into(),
            twitter: "yourhandle".into(),
            instagram: "yourprofile".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub light: String,
    pub dark: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#6c63ff".into(),
            secondary: "#4a45e6".into(),
            light: "#f8f9fa".into(),
            dark: "#1a1a2e".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Card background, start and end color.
    pub gradient: (String, String),
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub bio: String,
    pub skills: Vec<String>,
}

impl Default for About {
    fn default() -> Self {
        Self {
            bio: "Hello! I build interactive and visually rich web experiences.".into(),
            skills: ["HTML5", "CSS3", "Rust", "WebAssembly", "WebGL", "glTF"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessages {
    pub success: String,
    pub missing_fields: String,
    pub invalid_email: String,
}

impl Default for ContactMessages {
    fn default() -> Self {
        Self {
            success: "Message sent successfully! I'll get back to you soon.".into(),
            missing_fields: "Please fill in all fields".into(),
            invalid_email: "Please enter a valid email address".into(),
        }
    }
}

/// Where the laptop model comes from and how it is placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Tried strictly in order; the first one that loads wins.
    pub sources: Vec<String>,
    pub scale: f32,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            sources: vec![
                "assets/models/laptop.glb".into(),
                "https://cdn.shopify.com/s/files/1/0582/1558/2982/files/laptop_model.glb?v=1650301099".into(),
                "https://storage.googleapis.com/leonardo-ai-cdn/a881685f-b7c0-4a86-b9d0-f0d6ce9664f8/8c169b96-1430-45bb-8a72-d0c9be677974/3d_model.glb".into(),
                "https://cdn.jsdelivr.net/gh/mrdoob/three.js@dev/examples/models/gltf/LeePerrySmith/LeePerrySmith.glb".into(),
            ],
            scale: 1.2,
            position: [0.0, -1.2, 0.0],
            rotation: [0.0, -0.3, 0.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub disable_3d_on_mobile: bool,
    /// Viewports at or below this width get the placeholder instead of WebGL.
    pub mobile_screen_width: f64,
    pub max_pixel_ratio: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            disable_3d_on_mobile: true,
            mobile_screen_width: 992.0,
            max_pixel_ratio: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub total_sections: usize,
    /// Fraction of the remaining distance covered per frame.
    pub scroll_speed: f32,
    /// Debounce for scroll-position section detection.
    pub detect_debounce_ms: i32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            total_sections: 4,
            scroll_speed: 0.1,
            detect_debounce_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Orbit,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub mode: InteractionMode,
    pub idle_delay_ms: f64,
    pub auto_rotate: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Orbit,
            idle_delay_ms: 3000.0,
            auto_rotate: true,
        }
    }
}
