/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the use case, and the adapters,
/// keeping the domain layer isolated.
mod demo_request;
mod demo_response;
mod output_format;

pub use demo_request::{DemoRequest, DemoRequestBuilder};
pub use demo_response::DemoResponse;
pub use output_format::OutputFormat;
