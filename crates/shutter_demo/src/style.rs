//! Style file loading
//!
//! An optional TOML file overrides any subset of the camera button defaults:
//!
//! ```toml
//! size = 72.0
//! stroke_width_percent = 0.03
//! color = "#FFFFFF"
//! shoot_color = "#FF5252"
//! default_scale = 0.85
//! target_scale = 0.6
//!
//! [spring]
//! stiffness = 800.0
//! damping_ratio = 0.7
//! ```

use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use shutter_animation::{AnimationSpec, SpringConfig};
use shutter_core::Color;
use shutter_widgets::{CameraButtonConfig, CameraButtonDefaults};

/// Camera button overrides read from a style file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleFile {
    pub size: Option<f32>,
    pub stroke_width_percent: Option<f32>,
    pub color: Option<String>,
    pub shoot_color: Option<String>,
    pub default_scale: Option<f32>,
    pub target_scale: Option<f32>,
    pub spring: Option<SpringSection>,
}

/// Spring used for both the color and the scale animation
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpringSection {
    #[serde(default = "default_stiffness")]
    pub stiffness: f32,
    #[serde(default = "default_damping_ratio")]
    pub damping_ratio: f32,
}

fn default_stiffness() -> f32 {
    SpringConfig::medium().stiffness
}

fn default_damping_ratio() -> f32 {
    1.0
}

impl StyleFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading style file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing style file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply the overrides on top of the defaults
    pub fn to_config(&self) -> Result<CameraButtonConfig> {
        let mut config = CameraButtonConfig::default();

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(percent) = self.stroke_width_percent {
            config.stroke_width_percent = percent;
        }
        if let Some(ref hex) = self.color {
            config.colors.color = parse_color("color", hex)?;
        }
        if let Some(ref hex) = self.shoot_color {
            config.colors.shoot_color = parse_color("shoot_color", hex)?;
        }
        if let Some(scale) = self.default_scale {
            config.scale.default = scale;
        }
        if let Some(scale) = self.target_scale {
            config.scale.target = scale;
        }

        let animation = match self.spring {
            Some(ref spring) => {
                let config =
                    SpringConfig::from_damping_ratio(spring.damping_ratio, spring.stiffness);
                ensure!(
                    config.is_valid(),
                    "[spring] stiffness must be positive and damping_ratio non-negative \
                     (stiffness = {}, damping_ratio = {})",
                    spring.stiffness,
                    spring.damping_ratio
                );
                AnimationSpec::Spring(config)
            }
            None => CameraButtonDefaults::animation(),
        };
        config.colors.animation = animation;
        config.scale.animation = animation;

        Ok(config)
    }
}

fn parse_color(field: &str, hex: &str) -> Result<Color> {
    Color::from_hex_str(hex).with_context(|| format!("style field '{field}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = StyleFile::parse("").unwrap().to_config().unwrap();
        assert_eq!(config, CameraButtonConfig::default());
    }

    #[test]
    fn test_full_file() {
        let style = StyleFile::parse(
            r##"
            size = 72.0
            stroke_width_percent = 0.03
            color = "#000000"
            shoot_color = "#FF0000"
            default_scale = 0.9
            target_scale = 0.5

            [spring]
            stiffness = 400.0
            damping_ratio = 0.5
            "##,
        )
        .unwrap();
        let config = style.to_config().unwrap();

        assert_eq!(config.size, 72.0);
        assert_eq!(config.stroke_width_percent, 0.03);
        assert_eq!(config.colors.color, Color::BLACK);
        assert_eq!(config.colors.shoot_color, Color::RED);
        assert_eq!(config.scale.default, 0.9);
        assert_eq!(config.scale.target, 0.5);
        match config.scale.animation {
            AnimationSpec::Spring(spring) => {
                assert_eq!(spring.stiffness, 400.0);
                assert!((spring.damping - 20.0).abs() < 1e-4);
            }
            other => panic!("unexpected animation {other:?}"),
        }
        assert_eq!(config.colors.animation, config.scale.animation);
    }

    #[test]
    fn test_spring_section_defaults() {
        let style = StyleFile::parse("[spring]\nstiffness = 200.0\n").unwrap();
        let spring = style.spring.unwrap();
        assert_eq!(spring.stiffness, 200.0);
        assert_eq!(spring.damping_ratio, 1.0);
    }

    #[test]
    fn test_bad_color_is_reported() {
        let style = StyleFile::parse("shoot_color = \"amber\"").unwrap();
        let err = style.to_config().unwrap_err();
        assert!(format!("{err:#}").contains("shoot_color"));
    }

    #[test]
    fn test_bad_spring_is_reported() {
        for text in [
            "[spring]\nstiffness = 0.0\n",
            "[spring]\nstiffness = -5.0\n",
            "[spring]\ndamping_ratio = -1.0\n",
        ] {
            let err = StyleFile::parse(text).unwrap().to_config().unwrap_err();
            assert!(err.to_string().contains("[spring]"), "{err}");
        }

        // Stiff but valid springs are accepted
        let config = StyleFile::parse("[spring]\nstiffness = 1e6\n")
            .unwrap()
            .to_config()
            .unwrap();
        assert!(matches!(config.scale.animation, AnimationSpec::Spring(s) if s.stiffness == 1e6));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(StyleFile::parse("radius = 3.0").is_err());
    }
}
