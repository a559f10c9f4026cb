pub mod access_mode;
pub mod demo_report;
pub mod output_target;
pub mod read_buffer;

pub use access_mode::{AccessMode, OWNER_READ_WRITE};
pub use demo_report::{DemoReport, WrittenFile};
pub use output_target::{
    LiteralPayload, OutputTarget, DEFAULT_FIRST_FILE, DEFAULT_FIRST_PAYLOAD, DEFAULT_SECOND_FILE,
    DEFAULT_SECOND_PAYLOAD,
};
pub use read_buffer::{ReadBuffer, DEFAULT_MAX_READ, MAX_READ_LIMIT};
