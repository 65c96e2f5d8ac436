use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Prompt cancelled.")]
    Interrupted,

    #[error(transparent)]
    Selection(#[from] term_pick_core::error::Error),

    #[error("Error {} menu file at `{}`: {}", .action, .path, .original)]
    Yaml {
        action: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with menu file at `{}`: {}", .path, .original)]
    MenuIo {
        path: String,
        original: std::io::Error,
    },

    #[error("No entries were found in the menu definition YAML. Is `{}` empty?", .path)]
    EmptyMenu { path: String },

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn yaml_error(action: String, path: String, original: serde_yaml::Error) -> Self {
        Self::Yaml {
            action,
            path,
            original,
        }
    }

    pub fn menu_io_error(path: String, original: std::io::Error) -> Self {
        Self::MenuIo { path, original }
    }
}
