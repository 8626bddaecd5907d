use std::{
    io::{self, BufRead, Write},
    num::ParseFloatError,
};

use thiserror::Error;
use tracing::{debug, trace};
use triangle_area_core::prelude::{Point, Scalar, Triangle};

use crate::messages::Language;

/// Errors of reading triangles from the console.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("invalid number of triangles `{0}`, expected integer greater than 0")]
    InvalidCount(String),

    #[error("invalid {axis} coordinate of vertex {vertex} `{text}`: {source}")]
    InvalidCoordinate {
        vertex: Vertex,
        axis: Axis,
        text: String,
        source: ParseFloatError,
    },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("input is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("cannot access console: {0}")]
    Io(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Vertex {
    A,
    B,
    C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Axis {
    X,
    Y,
}

/// Validate number of triangles.
pub fn validate_count(count: i64) -> Result<usize, InputError> {
    if count <= 0 {
        return Err(InputError::InvalidCount(count.to_string()));
    }
    usize::try_from(count).map_err(|_| InputError::InvalidCount(count.to_string()))
}

/// Parse number of triangles typed by the user.
pub fn parse_count(text: &str) -> Result<usize, InputError> {
    let text = text.trim();
    text.parse::<i64>()
        .map_err(|_| InputError::InvalidCount(text.to_owned()))
        .and_then(validate_count)
}

/// Parse coordinate typed by the user.
///
/// Single comma is treated as decimal point.
pub fn parse_coordinate(text: &str) -> Result<Scalar, ParseFloatError> {
    let text = text.trim();
    if text.matches(',').count() == 1 && !text.contains('.') {
        text.replace(',', ".").parse()
    } else {
        text.parse()
    }
}

/// Reads triangles from the console, writing prompts before each value.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    language: Language,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, language: Language) -> Self {
        Self {
            input,
            output,
            language,
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|error| {
            if error.kind() == io::ErrorKind::InvalidData {
                InputError::InvalidEncoding
            } else {
                InputError::Io(error)
            }
        })?;
        if read == 0 {
            return Err(InputError::UnexpectedEof);
        }
        trace!(line = line.trim_end(), "read line");
        Ok(line)
    }

    pub fn read_count(&mut self) -> Result<usize, InputError> {
        let line = self.read_line(self.language.count_prompt())?;
        let count = parse_count(&line)?;
        debug!(count, "read number of triangles");
        Ok(count)
    }

    fn read_coordinate(&mut self, vertex: Vertex, axis: Axis) -> Result<Scalar, InputError> {
        let line = self.read_line(&self.language.coordinate_prompt(vertex, axis))?;
        parse_coordinate(&line).map_err(|source| InputError::InvalidCoordinate {
            vertex,
            axis,
            text: line.trim().to_owned(),
            source,
        })
    }

    pub fn read_point(&mut self, vertex: Vertex) -> Result<Point, InputError> {
        let x = self.read_coordinate(vertex, Axis::X)?;
        let y = self.read_coordinate(vertex, Axis::Y)?;
        Ok(Point::new(x, y))
    }

    /// Read single triangle.
    ///
    /// # Arguments
    /// * `index` - Position of the triangle, starting from 1.
    pub fn read_triangle(&mut self, index: usize) -> Result<Triangle, InputError> {
        writeln!(self.output, "{}", self.language.triangle_header(index))?;
        let a = self.read_point(Vertex::A)?;
        let b = self.read_point(Vertex::B)?;
        let c = self.read_point(Vertex::C)?;
        let triangle = Triangle::new(a, b, c);
        debug!(index, %triangle, "read triangle");
        Ok(triangle)
    }

    pub fn read_triangles(&mut self, count: usize) -> Result<Vec<Triangle>, InputError> {
        (1..=count).map(|index| self.read_triangle(index)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn make_prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, io::Sink> {
        Prompter::new(
            Cursor::new(input.as_bytes().to_vec()),
            io::sink(),
            Language::English,
        )
    }

    #[rstest]
    #[case("3\n", 3)]
    #[case("  7  \r\n", 7)]
    #[case("1", 1)]
    fn test_parse_count(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(parse_count(text).unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("abc")]
    #[case("2.5")]
    #[case("")]
    fn test_parse_invalid_count(#[case] text: &str) {
        assert!(matches!(parse_count(text), Err(InputError::InvalidCount(_))));
    }

    #[rstest]
    #[case("4", 4.0)]
    #[case(" -2.5\n", -2.5)]
    #[case("1,5", 1.5)]
    #[case("1e3", 1000.0)]
    #[case("inf", Scalar::INFINITY)]
    fn test_parse_coordinate(#[case] text: &str, #[case] expected: Scalar) {
        assert_eq!(parse_coordinate(text).unwrap(), expected);
    }

    #[test]
    fn test_parse_coordinate_nan() {
        assert!(parse_coordinate("NaN").unwrap().is_nan());
    }

    #[rstest]
    #[case("abc")]
    #[case("1,5,5")]
    #[case("1.000,5")]
    #[case("")]
    fn test_parse_invalid_coordinate(#[case] text: &str) {
        assert!(parse_coordinate(text).is_err());
    }

    #[test]
    fn test_read_triangles() {
        let input = "2\n0\n0\n4\n0\n0\n3\n0\n0\n10\n0\n0\n10\n";
        let mut output = vec![];
        let mut prompter = Prompter::new(input.as_bytes(), &mut output, Language::English);
        let count = prompter.read_count().unwrap();
        let triangles = prompter.read_triangles(count).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[0].area(), 6.0);
        assert_eq!(triangles[1].c(), Point::new(0.0, 10.0));
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Enter the number of triangles (n): "));
        assert!(output.contains("--- Enter data for triangle #2 ---"));
        assert_eq!(output.matches("Enter X for vertex C: ").count(), 2);
    }

    #[test]
    fn test_invalid_coordinate() {
        let mut prompter = make_prompter("1\n2\nfoo\n");
        let error = prompter.read_triangle(1).unwrap_err();
        match error {
            InputError::InvalidCoordinate {
                vertex, axis, text, ..
            } => {
                assert_eq!(vertex, Vertex::B);
                assert_eq!(axis, Axis::X);
                assert_eq!(text, "foo");
            }
            error => panic!("unexpected error: {}", error),
        }
    }

    #[test]
    fn test_invalid_encoding() {
        let mut prompter = Prompter::new(&b"\xff\xfe\n"[..], io::sink(), Language::English);
        assert!(matches!(
            prompter.read_count(),
            Err(InputError::InvalidEncoding)
        ));
    }

    #[test]
    fn test_unexpected_eof() {
        let mut prompter = make_prompter("1\n2\n");
        assert!(matches!(
            prompter.read_triangle(1),
            Err(InputError::UnexpectedEof)
        ));
        let mut prompter = make_prompter("");
        assert!(matches!(
            prompter.read_count(),
            Err(InputError::UnexpectedEof)
        ));
    }
}
