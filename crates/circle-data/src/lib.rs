pub mod bits;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod fields;
pub mod line_cursor;
pub mod mob_parser;
pub mod room_parser;
pub mod tables;
pub mod zone_parser;

pub use dialect::Dialect;
pub use driver::{Mode, Records, parse_file};
pub use error::{ConvertError, ParseError};
pub use line_cursor::LineCursor;
