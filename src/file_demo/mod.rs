/// Domain layer for the write/rewind/read sequence
///
/// Pure value types with no I/O: access modes, payloads, the bounded
/// read buffer, and the report produced at the end of a run.
pub mod domain;
