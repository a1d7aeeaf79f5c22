use crate::{
    error::{SmoothPaintError, SmoothPaintErrorExt},
    graphics::{Color, ColorExt},
};
use std::path::{Path, PathBuf};

macro_rules! config {
    ($($field:ident : $ty:ty $default:block),* $(,)?) => {
        paste::paste! {
            mod default {
                use super::*;
                $(pub fn $field() -> $ty $default)*
            }

            #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
            pub struct Config {
                $(
                    #[serde(default = "default::" $field)]
                    pub $field: $ty,
                )*

                #[serde(skip)]
                had_error_parsing: bool,
            }

            impl Config {
                pub fn new() -> Self {
                    Self {
                        $($field: default::$field(),)*
                        had_error_parsing: false,
                    }
                }
            }
        }
    };
}

config!(
    stylus_only_allowed: bool { false },
    brush_color: Color { Color::BLACK },
    brush_width: f32 { crate::DEFAULT_BRUSH_WIDTH },
    background_color: Color { Color::PAPER },
);

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    fn with_error(self) -> Config {
        Config {
            had_error_parsing: true,
            ..self
        }
    }

    pub fn had_error_parsing(&self) -> bool {
        self.had_error_parsing
    }

    pub fn config_path() -> Result<PathBuf, SmoothPaintError> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            SmoothPaintError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no config directory on this platform",
            ))
        })?;
        path.push("smoothpaint");

        if !path.exists() {
            std::fs::create_dir_all(&path)?;
        }

        path.push("config.ron");
        Ok(path)
    }

    pub fn from_disk(path: &Path) -> Config {
        log::info!("load config from {}", path.display());
        let file = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Config::default();
            }
            Err(err) => {
                SmoothPaintError::from(err)
                    .problem(format!("could not read config file {}", path.display()))
                    .display();
                return Config::default().with_error();
            }
        };

        Config::from_ron_str(&file)
            .problem(format!("could not parse config file {}", path.display()))
            .unwrap_or_else(|err| {
                err.display();
                Config::default().with_error()
            })
    }

    pub fn from_ron_str(contents: &str) -> Result<Config, SmoothPaintError> {
        Ok(ron::from_str(contents)?)
    }

    pub fn to_ron_string(&self) -> Result<String, SmoothPaintError> {
        let contents = ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::new()
                .new_line(String::from("\n"))
                .indentor(String::from("  "))
                .compact_arrays(true),
        )?;

        Ok(format!("// this file generated automatically.\n{contents}"))
    }

    pub fn save(&self, path: &Path) -> Result<(), SmoothPaintError> {
        log::info!("save config to {}", path.display());

        if self.had_error_parsing {
            // don't overwrite broken configs
            log::error!("had error parsing {}, not saving", path.display());
            return Ok(());
        }

        std::fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }
}
