use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

pub trait SmoothPaintErrorExt {
    fn display(self);
    fn problem(self, why: String) -> Self;
}

impl<T> SmoothPaintErrorExt for Result<T, SmoothPaintError> {
    fn display(self) {
        if let Err(err) = self {
            err.display();
        }
    }

    fn problem(mut self, why: String) -> Self {
        if let Err(err) = self.as_mut() {
            err.why.push(why);
        }

        self
    }
}

impl SmoothPaintErrorExt for SmoothPaintError {
    fn display(self) {
        log::error!("{}", self.message());
    }

    fn problem(mut self, why: String) -> Self {
        self.why.push(why);
        self
    }
}

#[derive(Debug)]
pub struct SmoothPaintError {
    kind: ErrorKind,
    why: Vec<String>,
}

impl SmoothPaintError {
    pub fn because(kind: ErrorKind, reason: String) -> Self {
        SmoothPaintError {
            kind,
            why: vec![reason],
        }
    }

    pub fn new(kind: ErrorKind) -> Self {
        SmoothPaintError {
            kind,
            why: Vec::new(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Outermost context first.
    pub fn message(&self) -> String {
        self.why
            .iter()
            .fold(self.kind.to_string(), |acc, why| format!("{why}: {acc}"))
    }
}

impl Display for SmoothPaintError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.kind)
    }
}

impl Error for SmoothPaintError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Ron(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ErrorKind {
    RasterAllocation { width: u32, height: u32 },
    Io(std::io::Error),
    Ron(ron::Error),
}

impl From<std::io::Error> for SmoothPaintError {
    fn from(err: std::io::Error) -> Self {
        SmoothPaintError::new(ErrorKind::Io(err))
    }
}

impl From<ron::Error> for SmoothPaintError {
    fn from(err: ron::Error) -> Self {
        SmoothPaintError::new(ErrorKind::Ron(err))
    }
}

impl From<ron::error::SpannedError> for SmoothPaintError {
    fn from(err: ron::error::SpannedError) -> Self {
        let why = format!("at {}", err.position);
        SmoothPaintError::because(ErrorKind::Ron(err.code), why)
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ErrorKind::RasterAllocation { width, height } => {
                write!(f, "Could not allocate a {width}x{height} raster")
            }
            ErrorKind::Io(err) => write!(f, "{err}"),
            ErrorKind::Ron(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn context_chain() {
        let err: Result<(), SmoothPaintError> = Err(SmoothPaintError::new(
            ErrorKind::RasterAllocation {
                width: 5,
                height: 6,
            },
        ));

        let err = err
            .problem(String::from("resizing"))
            .problem(String::from("opening surface"))
            .unwrap_err();

        assert!(matches!(
            err.kind(),
            ErrorKind::RasterAllocation {
                width: 5,
                height: 6
            }
        ));
        assert_eq!(
            err.message(),
            "opening surface: resizing: Could not allocate a 5x6 raster"
        );
    }
}
