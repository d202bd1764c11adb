use std::fmt;
use std::path::PathBuf;

use dragbox::RenderError;

/// Fatal failure while setting up the window, GPU or font.
#[derive(Debug)]
pub enum InitError {
    EventLoop(String),
    Window(String),
    Surface(String),
    Adapter(String),
    Device(String),
    /// None of the candidate font paths exists
    FontNotFound(Vec<PathBuf>),
    FontRead {
        path: PathBuf,
        source: std::io::Error,
    },
    FontParse(PathBuf),
    /// A widget could not render its text at startup
    Widget(RenderError),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::EventLoop(msg) => write!(f, "failed to create event loop: {msg}"),
            InitError::Window(msg) => write!(f, "failed to create window: {msg}"),
            InitError::Surface(msg) => write!(f, "failed to create surface: {msg}"),
            InitError::Adapter(msg) => write!(f, "no suitable GPU adapter: {msg}"),
            InitError::Device(msg) => write!(f, "failed to create GPU device: {msg}"),
            InitError::FontNotFound(paths) => {
                write!(f, "no font found, tried:")?;
                for path in paths {
                    write!(f, " {}", path.display())?;
                }
                Ok(())
            }
            InitError::FontRead { path, source } => {
                write!(f, "failed to read font {}: {source}", path.display())
            }
            InitError::FontParse(path) => write!(f, "invalid font file {}", path.display()),
            InitError::Widget(err) => write!(f, "failed to create widget: {err}"),
        }
    }
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::FontRead { source, .. } => Some(source),
            InitError::Widget(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RenderError> for InitError {
    fn from(err: RenderError) -> Self {
        InitError::Widget(err)
    }
}
